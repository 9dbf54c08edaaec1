//! HTML site generation.
//!
//! Takes the docs document and renders one HTML file per page route.
//!
//! ## Rendering Context
//!
//! [`Site`] bundles everything that is fixed for the whole run: deployment
//! metadata, the selected translation, and the translation status map. It is
//! built once in `main` before the first page renders and only read afterwards,
//! so pages can render in parallel without locking.
//!
//! [`PageContext`] adds what is specific to one page: the page itself, the
//! full page tree (for the sidebar), and its previous/next neighbours.
//!
//! ## Page Order
//!
//! The document's page tree is flattened depth-first. That order decides the
//! previous/next links and the order of files in the build summary.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                         # /docs/
//! ├── tutorial/
//! │   └── index.html                     # /docs/tutorial/
//! └── reference/
//!     ├── index.html
//!     └── foundations/
//!         └── calc/
//!             └── index.html
//! ```
//!
//! Pages render in parallel with [rayon](https://docs.rs/rayon); files are
//! written afterwards, in page order.

use crate::config::{ConfigError, Metadata};
use crate::model::{
    ModelError, Page, TranslationStatus, TranslationStatusMap, flatten_pages,
};
use crate::paths::output_path_for_route;
use crate::templates;
use crate::translation::{self, Key, Translation, TranslationError};
use maud::Markup;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Metadata error: {0}")]
    Config(#[from] ConfigError),
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),
    #[error("Docs error: {0}")]
    Model(#[from] ModelError),
    #[error("No page with route {0}")]
    UnknownRoute(String),
    #[error("Route escapes the output directory: {0}")]
    InvalidRoute(String),
    #[error("Routes {route} and {other} write the same file")]
    OutputCollision { route: String, other: String },
}

/// Process-wide, read-only rendering state.
pub struct Site {
    pub metadata: Metadata,
    pub translation: Box<dyn Translation>,
    pub translation_status: TranslationStatusMap,
}

impl Site {
    /// Select the translation for `metadata` and assemble the site context.
    pub fn new(
        metadata: Metadata,
        translation_status: TranslationStatusMap,
    ) -> Result<Self, TranslationError> {
        let translation = translation::select(&metadata)?;
        Ok(Self {
            metadata,
            translation,
            translation_status,
        })
    }

    /// Localized markup for `key`; empty when the locale lacks it.
    pub fn t(&self, key: Key<'_>) -> Markup {
        translation::translate(self.translation.as_ref(), key)
    }

    pub fn base_path(&self) -> &str {
        &self.metadata.base_path
    }

    /// Translation status of `route`, if the status map lists it.
    pub fn status_of(&self, route: &str) -> Option<TranslationStatus> {
        self.translation_status.get(route).copied()
    }
}

/// Everything a template needs to render one page.
pub struct PageContext<'a> {
    pub site: &'a Site,
    /// The whole page tree, for the sidebar.
    pub docs: &'a [Page],
    pub page: &'a Page,
    pub previous: Option<&'a Page>,
    pub next: Option<&'a Page>,
}

fn context_at<'a>(
    site: &'a Site,
    docs: &'a [Page],
    flat: &[&'a Page],
    index: usize,
) -> PageContext<'a> {
    PageContext {
        site,
        docs,
        page: flat[index],
        previous: index.checked_sub(1).map(|i| flat[i]),
        next: flat.get(index + 1).copied(),
    }
}

/// Render the page with `route`, given the full docs document.
pub fn render_route(site: &Site, docs: &[Page], route: &str) -> Result<Markup, GenerateError> {
    let flat = flatten_pages(docs)?;
    let index = flat
        .iter()
        .position(|page| page.route == route)
        .ok_or_else(|| GenerateError::UnknownRoute(route.to_string()))?;
    Ok(templates::render_page(&context_at(site, docs, &flat, index)))
}

/// One written page, for the build summary.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub route: String,
    pub title: String,
    pub kind: &'static str,
    /// Output file, relative to the output directory.
    pub output: PathBuf,
}

/// Render every page of `docs` into `output_dir`.
///
/// All routes are checked before anything is written, so an invalid route or
/// two routes sharing one output file leave the output directory untouched.
pub fn generate(
    site: &Site,
    docs: &[Page],
    output_dir: &Path,
) -> Result<Vec<GeneratedPage>, GenerateError> {
    let flat = flatten_pages(docs)?;

    let targets = flat
        .iter()
        .map(|page| {
            output_path_for_route(&page.route, site.base_path())
                .ok_or_else(|| GenerateError::InvalidRoute(page.route.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut claimed: HashMap<&Path, &str> = HashMap::with_capacity(targets.len());
    for (page, target) in flat.iter().zip(&targets) {
        if let Some(other) = claimed.insert(target.as_path(), &page.route) {
            return Err(GenerateError::OutputCollision {
                route: page.route.clone(),
                other: other.to_string(),
            });
        }
    }

    let rendered: Vec<String> = (0..flat.len())
        .into_par_iter()
        .map(|i| templates::render_page(&context_at(site, docs, &flat, i)).into_string())
        .collect();

    fs::create_dir_all(output_dir)?;
    let mut generated = Vec::with_capacity(flat.len());
    for ((page, target), html) in flat.iter().zip(targets).zip(rendered) {
        let path = output_dir.join(&target);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;
        generated.push(GeneratedPage {
            route: page.route.clone(),
            title: page.title.clone(),
            kind: page.body.kind(),
            output: target,
        });
    }
    Ok(generated)
}

/// Resolve the rayon worker count.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(jobs: Option<usize>) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    jobs.map(|n| n.clamp(1, cores)).unwrap_or(cores)
}
