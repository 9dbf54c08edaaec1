//! The documentation content model.
//!
//! These types mirror the JSON document produced by the Typst docs extractor.
//! The document is versioned independently of this crate, so a few fields
//! accept more than one historical shape. Those shapes are captured as-is by
//! [`DetailsSource`] and [`DeprecationSource`]; templates never read them
//! directly and always go through [`crate::normalize`].
//!
//! ## Document Shape
//!
//! ```text
//! [ Page { route, title, body: { kind, content }, children: [Page, ...] }, ... ]
//! ```
//!
//! `body.kind` is one of `category`, `group`, `type`, `html`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate page route: {0}")]
    DuplicateRoute(String),
}

/// One documentation page. Identified by its route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub route: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Section label shown above this page in the sidebar, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    /// On-page table of contents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outline: Vec<OutlineItem>,
    pub body: Body,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Page>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineItem>,
}

/// Kind-specific page payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum Body {
    Category(CategoryContent),
    Group(GroupContent),
    Type(TypeContent),
    Html(String),
}

impl Body {
    pub fn kind(&self) -> &'static str {
        match self {
            Body::Category(_) => "category",
            Body::Group(_) => "group",
            Body::Type(_) => "type",
            Body::Html(_) => "html",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryContent {
    pub title: String,
    pub details: String,
    #[serde(default)]
    pub items: Vec<CategoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryItem {
    pub name: String,
    pub route: String,
    #[serde(default)]
    pub oneliner: String,
    /// Render the name in code style.
    #[serde(default)]
    pub code: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupContent {
    pub title: String,
    pub details: String,
    #[serde(default)]
    pub functions: Vec<Func>,
    /// Parameters shared by every function of the group. Absent before Typst 0.14.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_attributes: Option<Vec<Param>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeContent {
    pub name: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor: Option<Func>,
    #[serde(default)]
    pub scope: Vec<Func>,
    #[serde(flatten)]
    pub deprecation: DeprecationSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Func {
    pub name: String,
    /// Enclosing names, e.g. `["calc"]` for `calc.abs`.
    #[serde(default)]
    pub path: Vec<String>,
    /// Method called on a value (`self.name(...)`).
    #[serde(rename = "self", default)]
    pub self_: bool,
    #[serde(default)]
    pub params: Vec<Param>,
    /// Return type names; empty means untyped.
    #[serde(default)]
    pub returns: Vec<String>,
    #[serde(default)]
    pub element: bool,
    #[serde(default)]
    pub contextual: bool,
    #[serde(flatten)]
    pub details: DetailsSource,
    #[serde(flatten)]
    pub deprecation: DeprecationSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    /// Accepted type names; empty means untyped.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub positional: bool,
    #[serde(default)]
    pub variadic: bool,
    #[serde(default)]
    pub settable: bool,
    /// Default value as an HTML snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Accepted literal string values.
    #[serde(default)]
    pub strings: Vec<StringValue>,
    #[serde(flatten)]
    pub details: DetailsSource,
    #[serde(flatten)]
    pub deprecation: DeprecationSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringValue {
    pub string: String,
    pub details: String,
}

/// One unit of extended documentation. Order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum DetailsBlock {
    Html(String),
    Example(Example),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub title: Option<String>,
    pub body: String,
}

/// Detail blocks as found in the document.
///
/// Typst 0.13 wrote an HTML string plus a nullable `example`; later versions
/// write an ordered block list. Read through [`crate::normalize::normalize_detail_blocks`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailsSource {
    Legacy {
        details: String,
        #[serde(default)]
        example: Option<String>,
    },
    Blocks {
        details: Vec<DetailsBlock>,
    },
}

impl Default for DetailsSource {
    fn default() -> Self {
        DetailsSource::Blocks { details: vec![] }
    }
}

/// Deprecation fields as found in the document, in any historical encoding.
///
/// Read through [`crate::normalize::normalize_deprecation`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationSource {
    /// Typst 0.13 single message. `Some(None)` means the key was present but null.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub deprecation: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_until: Option<String>,
}

/// Distinguish a present-but-null key from an absent one.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// =============================================================================
// Translation status
// =============================================================================

/// Location of the optional per-route translation status file.
pub const TRANSLATION_STATUS_FILE: &str = "public/translation-status.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationStatus {
    Translated,
    PartiallyTranslated,
    Untranslated,
    /// Page added by the translation community; not part of the upstream docs.
    Community,
}

pub type TranslationStatusMap = BTreeMap<String, TranslationStatus>;

// =============================================================================
// Loading
// =============================================================================

/// Default location of the docs document, relative to the project root.
pub const DOCS_FILE: &str = "public/docs.json";

/// Load the docs document (a JSON array of top-level pages).
pub fn load_docs(path: &Path) -> Result<Vec<Page>, ModelError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the translation status map, or an empty map if the file is absent.
pub fn load_translation_status(path: &Path) -> Result<TranslationStatusMap, ModelError> {
    if !path.exists() {
        return Ok(TranslationStatusMap::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Flatten the page tree depth-first (parent before children).
///
/// This order defines previous/next navigation. Fails on a repeated route.
pub fn flatten_pages(pages: &[Page]) -> Result<Vec<&Page>, ModelError> {
    let mut flat = Vec::new();
    flatten_recursive(pages, &mut flat);

    let mut seen = HashSet::new();
    for page in &flat {
        if !seen.insert(page.route.as_str()) {
            return Err(ModelError::DuplicateRoute(page.route.clone()));
        }
    }
    Ok(flat)
}

fn flatten_recursive<'a>(pages: &'a [Page], flat: &mut Vec<&'a Page>) {
    for page in pages {
        flat.push(page);
        flatten_recursive(&page.children, flat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn parse_category_page() {
        let page: Page = serde_json::from_str(
            r#"{
                "route": "/docs/reference/foundations/",
                "title": "Foundations",
                "body": {
                    "kind": "category",
                    "content": {
                        "title": "Foundations",
                        "details": "<p>Basics.</p>",
                        "items": [{ "name": "int", "route": "/docs/reference/foundations/int/", "oneliner": "A whole number.", "code": true }]
                    }
                }
            }"#,
        )
        .unwrap();
        let Body::Category(content) = &page.body else {
            panic!("expected category body, got {}", page.body.kind());
        };
        assert_eq!(content.items.len(), 1);
        assert!(content.items[0].code);
    }

    #[test]
    fn parse_html_page() {
        let page: Page = serde_json::from_str(
            r#"{ "route": "/docs/", "title": "Overview", "body": { "kind": "html", "content": "<h1>Hi</h1>" } }"#,
        )
        .unwrap();
        assert!(matches!(page.body, Body::Html(ref html) if html == "<h1>Hi</h1>"));
    }

    #[test]
    fn parse_unknown_body_kind_is_error() {
        let result: Result<Page, _> = serde_json::from_str(
            r#"{ "route": "/", "body": { "kind": "symbols", "content": {} } }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn parse_func_with_block_details() {
        let func: Func = serde_json::from_str(
            r#"{
                "name": "abs",
                "path": ["calc"],
                "params": [],
                "returns": ["int"],
                "details": [
                    { "kind": "html", "content": "<p>Absolute value.</p>" },
                    { "kind": "example", "content": { "title": "Basic", "body": "<pre>1</pre>" } }
                ],
                "deprecationMessage": "use `x` instead",
                "deprecationUntil": "0.15.0"
            }"#,
        )
        .unwrap();
        assert!(matches!(func.details, DetailsSource::Blocks { ref details } if details.len() == 2));
        assert_eq!(func.deprecation.deprecation_until.as_deref(), Some("0.15.0"));
        assert!(func.deprecation.deprecation.is_none());
    }

    #[test]
    fn parse_func_with_legacy_details() {
        let func: Func = serde_json::from_str(
            r#"{ "name": "text", "self": true, "details": "<p>Text.</p>", "example": null, "deprecation": null }"#,
        )
        .unwrap();
        assert!(func.self_);
        assert!(matches!(
            func.details,
            DetailsSource::Legacy { example: None, .. }
        ));
        assert_eq!(func.deprecation.deprecation, Some(None));
    }

    #[test]
    fn parse_param_with_strings_and_default() {
        let param: Param = serde_json::from_str(
            r#"{
                "name": "paper",
                "types": ["str"],
                "settable": true,
                "default": "<code>\"a4\"</code>",
                "strings": [{ "string": "a4", "details": "ISO A4" }],
                "details": []
            }"#,
        )
        .unwrap();
        assert!(param.settable);
        assert_eq!(param.strings[0].string, "a4");
        assert!(param.default.unwrap().contains("a4"));
    }

    #[test]
    fn param_without_details_is_error() {
        let result: Result<Param, _> = serde_json::from_str(r#"{ "name": "x", "types": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn group_global_attributes_are_optional() {
        let group: GroupContent =
            serde_json::from_str(r#"{ "title": "Calc", "details": "", "functions": [] }"#).unwrap();
        assert!(group.global_attributes.is_none());
    }

    #[test]
    fn serialized_func_reads_back_unchanged() {
        let original = func("bar", vec![param("a", &["int"])]);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Func = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "bar");
        assert_eq!(parsed.params[0].types, vec!["int".to_string()]);
        assert!(parsed.deprecation.deprecation.is_none());
    }

    // =========================================================================
    // flatten_pages
    // =========================================================================

    #[test]
    fn flatten_is_depth_first() {
        let mut root = html_page("/docs/", "<p>root</p>");
        let mut child = html_page("/docs/a/", "");
        child.children.push(html_page("/docs/a/b/", ""));
        root.children.push(child);
        let pages = vec![root, html_page("/docs/c/", "")];

        let flat = flatten_pages(&pages).unwrap();
        let routes: Vec<&str> = flat.iter().map(|p| p.route.as_str()).collect();
        assert_eq!(routes, vec!["/docs/", "/docs/a/", "/docs/a/b/", "/docs/c/"]);
        assert!(std::ptr::eq(flat[2], find_page(&pages, "/docs/a/b/")));
    }

    #[test]
    fn flatten_rejects_duplicate_routes() {
        let mut root = html_page("/docs/", "");
        root.children.push(html_page("/docs/", ""));
        let pages = vec![root];
        assert!(matches!(
            flatten_pages(&pages),
            Err(ModelError::DuplicateRoute(route)) if route == "/docs/"
        ));
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn load_translation_status_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let map = load_translation_status(&tmp.path().join("status.json")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn load_translation_status_reads_map() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("status.json");
        fs::write(
            &path,
            r#"{ "/docs/": "translated", "/docs/guide/": "community", "/docs/x/": "partiallyTranslated" }"#,
        )
        .unwrap();
        let map = load_translation_status(&path).unwrap();
        assert_eq!(map["/docs/guide/"], TranslationStatus::Community);
        assert_eq!(map["/docs/x/"], TranslationStatus::PartiallyTranslated);
    }

    #[test]
    fn load_docs_reads_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docs.json");
        let pages = vec![html_page("/docs/", "<p>x</p>")];
        fs::write(&path, serde_json::to_string(&pages).unwrap()).unwrap();
        let loaded = load_docs(&path).unwrap();
        assert_eq!(loaded[0].route, "/docs/");
    }
}
