//! CLI output formatting for the check and build commands.
//!
//! # Information-First Display
//!
//! Every page is shown by its semantic identity (positional index, title, and
//! body kind) with routes and output files as secondary context. Untitled
//! pages fall back to their route in parentheses, since the route is then the
//! only identity they have.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Metadata
//!     Language: zh-Hans
//!     Version: 0.13.1
//!     Base path: /docs/
//!     Social links:
//!         GitHub (typst-doc-cn/docs) [github] https://github.com/typst-doc-cn/docs
//!         QQ [qq] https://qm.qq.com/q/group
//!
//! Pages
//! 001 Overview [html]
//!     Route: /docs/
//!     001 Tutorial [html]
//!         Route: /docs/tutorial/
//! 002 Reference [category]
//!     Route: /docs/reference/
//!     Details about all syntax, concepts, types, and functions.
//!
//! Translation status
//!     3 routes: 1 translated, 1 partially translated, 0 untranslated, 1 community
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Overview → index.html
//! 002 Tutorial → tutorial/index.html
//! 003 (/docs/reference/) → reference/index.html
//!
//! Generated 3 pages: 1 category, 0 group, 0 type, 2 html
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::config::Metadata;
use crate::generate::GeneratedPage;
use crate::model::{Page, TranslationStatus, TranslationStatusMap};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Page identity: title, or the route in parens for untitled pages.
///
/// ```text
/// 001 Tables
/// 001 (/docs/reference/)
/// ```
fn page_line(index: usize, title: &str, route: &str) -> String {
    if title.is_empty() {
        format!("{} ({})", format_index(index), route)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// Check output
// ============================================================================

fn format_page_tree(pages: &[Page], depth: usize, lines: &mut Vec<String>) {
    for (i, page) in pages.iter().enumerate() {
        let base = indent(depth);
        lines.push(format!(
            "{}{} [{}]",
            base,
            page_line(i + 1, &page.title, &page.route),
            page.body.kind()
        ));
        if !page.title.is_empty() {
            lines.push(format!("{}    Route: {}", base, page.route));
        }
        let description = truncate_desc(strip_html_tags(&page.description).trim(), 60);
        if !description.is_empty() {
            lines.push(format!("{}    {}", base, description));
        }
        format_page_tree(&page.children, depth + 1, lines);
    }
}

fn format_status_summary(status: &TranslationStatusMap) -> String {
    let count = |wanted: TranslationStatus| status.values().filter(|s| **s == wanted).count();
    format!(
        "{} routes: {} translated, {} partially translated, {} untranslated, {} community",
        status.len(),
        count(TranslationStatus::Translated),
        count(TranslationStatus::PartiallyTranslated),
        count(TranslationStatus::Untranslated),
        count(TranslationStatus::Community),
    )
}

/// Format the check command output: resolved metadata, page tree, status.
pub fn format_check_output(
    metadata: &Metadata,
    docs: &[Page],
    status: &TranslationStatusMap,
) -> Vec<String> {
    let mut lines = vec![
        "Metadata".to_string(),
        format!("    Language: {}", metadata.language),
        format!("    Version: {}", metadata.version),
        format!("    Base path: {}", metadata.base_path),
    ];
    if !metadata.social_links.is_empty() {
        lines.push("    Social links:".to_string());
        for link in &metadata.social_links {
            lines.push(format!(
                "        {} [{}] {}",
                link.title,
                link.platform.as_str(),
                link.url
            ));
        }
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    format_page_tree(docs, 0, &mut lines);

    if !status.is_empty() {
        lines.push(String::new());
        lines.push("Translation status".to_string());
        lines.push(format!("    {}", format_status_summary(status)));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(metadata: &Metadata, docs: &[Page], status: &TranslationStatusMap) {
    for line in format_check_output(metadata, docs, status) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the build summary: one line per written page, then totals by kind.
pub fn format_generate_output(generated: &[GeneratedPage]) -> Vec<String> {
    let mut lines: Vec<String> = generated
        .iter()
        .enumerate()
        .map(|(i, page)| {
            format!(
                "{} → {}",
                page_line(i + 1, &page.title, &page.route),
                page.output.display()
            )
        })
        .collect();

    let count = |kind: &str| generated.iter().filter(|p| p.kind == kind).count();
    lines.push(String::new());
    lines.push(format!(
        "Generated {} {}: {} category, {} group, {} type, {} html",
        generated.len(),
        if generated.len() == 1 { "page" } else { "pages" },
        count("category"),
        count("group"),
        count("type"),
        count("html"),
    ));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(generated: &[GeneratedPage]) {
    for line in format_generate_output(generated) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Body, CategoryContent};
    use crate::test_helpers::*;
    use std::path::PathBuf;

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn strip_html_tags_removes_tags() {
        assert_eq!(strip_html_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn strip_html_tags_no_tags() {
        assert_eq!(strip_html_tags("plain"), "plain");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("short", 60), "short");
    }

    #[test]
    fn truncate_desc_exact() {
        assert_eq!(truncate_desc("abcde", 5), "abcde");
    }

    #[test]
    fn truncate_desc_long() {
        assert_eq!(truncate_desc("abcdefgh", 5), "abcde...");
    }

    #[test]
    fn truncate_desc_counts_characters_not_bytes() {
        assert_eq!(truncate_desc("参数是传给函数的输入", 4), "参数是传...");
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn page_line_untitled_shows_route() {
        assert_eq!(page_line(3, "", "/docs/x/"), "003 (/docs/x/)");
        assert_eq!(page_line(3, "Tables", "/docs/x/"), "003 Tables");
    }

    // =========================================================================
    // Check
    // =========================================================================

    #[test]
    fn check_output_lists_tree_with_kinds() {
        let mut root = page("/docs/", "Overview", Body::Html(String::new()));
        root.children.push(page("/docs/tutorial/", "Tutorial", Body::Html(String::new())));
        let mut reference = page(
            "/docs/reference/",
            "Reference",
            Body::Category(CategoryContent {
                title: "Reference".to_string(),
                details: String::new(),
                items: vec![],
            }),
        );
        reference.description = "<p>Details about everything.</p>".to_string();
        let docs = vec![root, reference];

        let lines = format_check_output(&Metadata::default(), &docs, &TranslationStatusMap::new());

        assert_eq!(lines[0], "Metadata");
        assert!(lines.contains(&"    Language: en-US".to_string()));
        assert!(lines.contains(
            &"        GitHub (typst/typst) [github] https://github.com/typst/typst".to_string()
        ));
        assert!(lines.contains(
            &"        Discord (dummy) [discord] https://discord.gg/dummy".to_string()
        ));
        assert!(lines.contains(&"001 Overview [html]".to_string()));
        assert!(lines.contains(&"    001 Tutorial [html]".to_string()));
        assert!(lines.contains(&"        Route: /docs/tutorial/".to_string()));
        assert!(lines.contains(&"002 Reference [category]".to_string()));
        assert!(lines.contains(&"    Details about everything.".to_string()));
        assert!(!lines.contains(&"Translation status".to_string()));
    }

    #[test]
    fn check_output_summarizes_status() {
        let mut status = TranslationStatusMap::new();
        status.insert("/docs/".to_string(), TranslationStatus::Translated);
        status.insert("/docs/a/".to_string(), TranslationStatus::Community);
        let lines = format_check_output(&Metadata::default(), &[], &status);
        assert_eq!(
            lines.last().unwrap(),
            "    2 routes: 1 translated, 0 partially translated, 0 untranslated, 1 community"
        );
    }

    // =========================================================================
    // Build
    // =========================================================================

    fn generated(route: &str, title: &str, kind: &'static str, output: &str) -> GeneratedPage {
        GeneratedPage {
            route: route.to_string(),
            title: title.to_string(),
            kind,
            output: PathBuf::from(output),
        }
    }

    #[test]
    fn generate_output_lines_and_totals() {
        let pages = vec![
            generated("/docs/", "Overview", "html", "index.html"),
            generated("/docs/reference/", "", "category", "reference/index.html"),
            generated("/docs/reference/calc/", "Calculation", "group", "reference/calc/index.html"),
        ];
        let lines = format_generate_output(&pages);
        assert_eq!(lines[0], "001 Overview → index.html");
        assert_eq!(lines[1], "002 (/docs/reference/) → reference/index.html");
        assert_eq!(lines[2], "003 Calculation → reference/calc/index.html");
        assert_eq!(
            lines.last().unwrap(),
            "Generated 3 pages: 1 category, 1 group, 0 type, 1 html"
        );
    }

    #[test]
    fn generate_output_singular() {
        let pages = vec![generated("/docs/", "Overview", "html", "index.html")];
        let lines = format_generate_output(&pages);
        assert!(lines.last().unwrap().starts_with("Generated 1 page:"));
    }
}
