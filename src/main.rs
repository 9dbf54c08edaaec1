use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use typst_docs_web::config::{self, Metadata};
use typst_docs_web::generate::{self, Site};
use typst_docs_web::model::{self, Page, TRANSLATION_STATUS_FILE};
use typst_docs_web::output;

fn version_string() -> &'static str {
    let on_tag = env!("DOCS_WEB_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("DOCS_WEB_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "typst-docs-web")]
#[command(about = "Render the Typst documentation website from the extracted docs JSON")]
#[command(long_about = "\
Render the Typst documentation website from the extracted docs JSON

Every page of the docs document becomes a static HTML file, localized into
the language selected by the deployment metadata.

Project structure:

  <root>/
  └── public/
      ├── docs.json                  # Docs document from the Typst docs extractor
      ├── metadata.json              # Deployment metadata (optional, fallback built in)
      └── translation-status.json    # Per-route translation status (optional)

Supported languages: en-US, zh-Hans. The zh-Hans translation requires GitHub
and QQ entries in socialLinks.

Run 'typst-docs-web gen-config' to print the fallback metadata.json.")]
#[command(version = version_string())]
struct Cli {
    /// Project root containing public/
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Docs document [default: <root>/public/docs.json]
    #[arg(long, global = true)]
    docs: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Build {
        /// Maximum rendering threads (capped at available cores)
        #[arg(long)]
        jobs: Option<usize>,
    },
    /// Render a single page to stdout
    Render {
        /// Route of the page, e.g. /docs/reference/foundations/calc/
        route: String,
    },
    /// Validate metadata and the docs document without writing anything
    Check,
    /// Print the fallback metadata.json
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let docs_path = cli
        .docs
        .clone()
        .unwrap_or_else(|| cli.root.join(model::DOCS_FILE));

    match cli.command {
        Command::Build { jobs } => {
            println!("==> Loading {}", cli.root.display());
            let (site, docs) = load(&cli.root, &docs_path)?;

            println!("==> Rendering {} → {}", site.metadata.language, cli.output.display());
            init_thread_pool(jobs);
            let generated = generate::generate(&site, &docs, &cli.output)?;
            output::print_generate_output(&generated);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Render { route } => {
            let (site, docs) = load(&cli.root, &docs_path)?;
            let html = generate::render_route(&site, &docs, &route)?;
            print!("{}", html.into_string());
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.display());
            let (site, docs) = load(&cli.root, &docs_path)?;
            model::flatten_pages(&docs)?;
            output::print_check_output(&site.metadata, &docs, &site.translation_status);
            println!("==> Project is valid");
        }
        Command::GenConfig => {
            println!("{}", config::stock_metadata_json()?);
        }
    }

    Ok(())
}

/// Load metadata, translation status, and the docs document, and select the translation.
///
/// Every configuration error surfaces here, before any page renders.
fn load(root: &Path, docs_path: &Path) -> Result<(Site, Vec<Page>), Box<dyn std::error::Error>> {
    let metadata: Metadata = config::load_metadata(root)?;
    let status = model::load_translation_status(&root.join(TRANSLATION_STATUS_FILE))?;
    let site = Site::new(metadata, status)?;
    let docs = model::load_docs(docs_path)?;
    Ok((site, docs))
}

/// Initialize the rayon thread pool.
///
/// Capped at the number of available CPU cores; `--jobs` can only lower it.
fn init_thread_pool(jobs: Option<usize>) {
    let threads = generate::effective_threads(jobs);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
