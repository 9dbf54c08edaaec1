//! URL and output-path helpers.
//!
//! ## Type Links
//!
//! Type badges link to the reference page of the type when one is known:
//!
//! ```text
//! "int"    → {basePath}reference/foundations/int/
//! "length" → {basePath}reference/layout/length/
//! "any"    → (no link)
//! ```
//!
//! ## Output Files
//!
//! Each route becomes a directory with an `index.html`, relative to the output
//! root after stripping the base path:
//!
//! ```text
//! /docs/                    → index.html
//! /docs/reference/calc/     → reference/calc/index.html
//! ```

use std::path::{Component, Path, PathBuf};

/// Join URL segments with single slashes.
///
/// Keeps the leading slash of the first segment and the trailing slash of the
/// last one; empty segments are skipped.
pub fn join_path(first: &str, rest: &[&str]) -> String {
    let mut joined = first.trim_end_matches('/').to_string();
    let mut trailing = first.ends_with('/');
    for segment in rest {
        let trimmed = segment.trim_matches('/');
        if trimmed.is_empty() {
            continue;
        }
        joined.push('/');
        joined.push_str(trimmed);
        trailing = segment.ends_with('/');
    }
    if trailing || joined.is_empty() {
        joined.push('/');
    }
    joined
}

/// Reference route of a type, relative to `{basePath}reference/`.
///
/// Returns `None` for names without a reference page (e.g. `any`).
pub fn type_href(name: &str) -> Option<&'static str> {
    let href = match name {
        "none" => "foundations/none/",
        "auto" => "foundations/auto/",
        "arguments" => "foundations/arguments/",
        "array" => "foundations/array/",
        "bool" => "foundations/bool/",
        "bytes" => "foundations/bytes/",
        "content" => "foundations/content/",
        "datetime" => "foundations/datetime/",
        "decimal" => "foundations/decimal/",
        "dictionary" => "foundations/dictionary/",
        "duration" => "foundations/duration/",
        "float" => "foundations/float/",
        "function" => "foundations/function/",
        "int" => "foundations/int/",
        "label" => "foundations/label/",
        "module" => "foundations/module/",
        "regex" => "foundations/regex/",
        "selector" => "foundations/selector/",
        "str" => "foundations/str/",
        "symbol" => "foundations/symbol/",
        "type" => "foundations/type/",
        "version" => "foundations/version/",
        "alignment" => "layout/alignment/",
        "angle" => "layout/angle/",
        "direction" => "layout/direction/",
        "fraction" => "layout/fraction/",
        "length" => "layout/length/",
        "ratio" => "layout/ratio/",
        "relative" => "layout/relative/",
        "color" => "visualize/color/",
        "gradient" => "visualize/gradient/",
        "stroke" => "visualize/stroke/",
        "tiling" => "visualize/tiling/",
        "counter" => "introspection/counter/",
        "location" => "introspection/location/",
        "state" => "introspection/state/",
        _ => return None,
    };
    Some(href)
}

/// Full link to a type's reference page under `base_path`, if it has one.
pub fn type_link(base_path: &str, name: &str) -> Option<String> {
    type_href(name).map(|href| join_path(base_path, &["reference", href]))
}

/// Anchor id of a parameter heading: `{prefix}-{name}`, prefix `parameters` by default.
pub fn build_param_id(name: &str, prefix: Option<&str>) -> String {
    format!("{}-{}", prefix.unwrap_or("parameters"), name)
}

/// Relative output file for `route`, or `None` if the route would escape the output root.
pub fn output_path_for_route(route: &str, base_path: &str) -> Option<PathBuf> {
    let relative = route
        .strip_prefix(base_path)
        .unwrap_or(route)
        .trim_start_matches('/');
    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(relative.join("index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_path_basic() {
        assert_eq!(join_path("/docs/", &["reference", "foundations/int/"]), "/docs/reference/foundations/int/");
    }

    #[test]
    fn join_path_collapses_slashes() {
        assert_eq!(join_path("/docs/", &["/reference/", "/calc"]), "/docs/reference/calc");
    }

    #[test]
    fn join_path_root_base() {
        assert_eq!(join_path("/", &["reference", "layout/length/"]), "/reference/layout/length/");
        assert_eq!(join_path("/", &[]), "/");
    }

    #[test]
    fn join_path_keeps_absolute_url() {
        assert_eq!(join_path("https://example.com/", &["docs/"]), "https://example.com/docs/");
    }

    #[test]
    fn join_path_skips_empty_segments() {
        assert_eq!(join_path("/docs/", &["", "a/"]), "/docs/a/");
    }

    #[test]
    fn type_href_known_and_unknown() {
        assert_eq!(type_href("int"), Some("foundations/int/"));
        assert_eq!(type_href("length"), Some("layout/length/"));
        assert_eq!(type_href("any"), None);
        assert_eq!(type_href("Int"), None);
    }

    #[test]
    fn type_link_uses_base_path() {
        assert_eq!(
            type_link("/docs/", "str").as_deref(),
            Some("/docs/reference/foundations/str/")
        );
        assert_eq!(type_link("/docs/", "any"), None);
    }

    #[test]
    fn param_ids() {
        assert_eq!(build_param_id("size", None), "parameters-size");
        assert_eq!(build_param_id("size", Some("constructor")), "constructor-size");
    }

    #[test]
    fn output_path_strips_base() {
        assert_eq!(
            output_path_for_route("/docs/reference/calc/", "/docs/"),
            Some(PathBuf::from("reference/calc/index.html"))
        );
        assert_eq!(
            output_path_for_route("/docs/", "/docs/"),
            Some(PathBuf::from("index.html"))
        );
    }

    #[test]
    fn output_path_outside_base_is_kept_relative() {
        assert_eq!(
            output_path_for_route("/other/page/", "/docs/"),
            Some(PathBuf::from("other/page/index.html"))
        );
    }

    #[test]
    fn output_path_rejects_parent_segments() {
        assert_eq!(output_path_for_route("/docs/../etc/", "/docs/"), None);
        assert_eq!(output_path_for_route("/docs/a/./b/", "/docs/"), Some(PathBuf::from("a/b/index.html")));
    }
}
