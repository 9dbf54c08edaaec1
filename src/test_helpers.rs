//! Shared test utilities for the typst-docs-web test suite.
//!
//! Builders for docs-document fragments with every optional field at its
//! default, plus ready-made [`Site`] contexts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let mut size = param("size", &["length"]);
//! size.settable = true;
//! let text = func("text", vec![positional(param("body", &["content"])), size]);
//!
//! let docs = vec![page("/docs/text/", "Text", Body::Group(group("Text", vec![text])))];
//! let html = render_route(&site(), &docs, "/docs/text/").unwrap().into_string();
//! ```

use crate::config::{Metadata, SocialLink};
use crate::generate::Site;
use crate::model::{
    Body, DeprecationSource, DetailsSource, Func, GroupContent, Page, Param, TranslationStatusMap,
};

// =========================================================================
// Sites
// =========================================================================

/// en-US site with fallback metadata and no translation status.
pub fn site() -> Site {
    site_with(Metadata::default(), TranslationStatusMap::new())
}

pub fn site_with(metadata: Metadata, status: TranslationStatusMap) -> Site {
    Site::new(metadata, status).unwrap()
}

/// Metadata that satisfies the zh-Hans locale (GitHub and QQ links present).
pub fn zh_metadata() -> Metadata {
    Metadata {
        language: "zh-Hans".to_string(),
        social_links: vec![
            SocialLink::new("https://github.com/typst-doc-cn/docs", None),
            SocialLink::new("https://qm.qq.com/q/group", None),
        ],
        ..Metadata::default()
    }
}

pub fn zh_site() -> Site {
    site_with(zh_metadata(), TranslationStatusMap::new())
}

// =========================================================================
// Document builders
// =========================================================================

/// Named, optional parameter without details.
pub fn param(name: &str, types: &[&str]) -> Param {
    Param {
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        required: false,
        positional: false,
        variadic: false,
        settable: false,
        default: None,
        strings: vec![],
        details: DetailsSource::default(),
        deprecation: DeprecationSource::default(),
    }
}

/// Mark `param` as positional and required.
pub fn positional(mut param: Param) -> Param {
    param.positional = true;
    param.required = true;
    param
}

/// Top-level function without details or return types.
pub fn func(name: &str, params: Vec<Param>) -> Func {
    Func {
        name: name.to_string(),
        path: vec![],
        self_: false,
        params,
        returns: vec![],
        element: false,
        contextual: false,
        details: DetailsSource::default(),
        deprecation: DeprecationSource::default(),
    }
}

pub fn group(title: &str, functions: Vec<Func>) -> GroupContent {
    GroupContent {
        title: title.to_string(),
        details: String::new(),
        functions,
        global_attributes: None,
    }
}

pub fn page(route: &str, title: &str, body: Body) -> Page {
    Page {
        route: route.to_string(),
        title: title.to_string(),
        description: String::new(),
        part: None,
        outline: vec![],
        body,
        children: vec![],
    }
}

/// Untitled HTML page.
pub fn html_page(route: &str, html: &str) -> Page {
    page(route, "", Body::Html(html.to_string()))
}

// =========================================================================
// Lookup helpers
// =========================================================================

/// Find a page by route anywhere in the tree. Panics if not found.
pub fn find_page<'a>(pages: &'a [Page], route: &str) -> &'a Page {
    fn walk<'a>(pages: &'a [Page], route: &str) -> Option<&'a Page> {
        pages
            .iter()
            .find_map(|p| (p.route == route).then_some(p).or_else(|| walk(&p.children, route)))
    }
    walk(pages, route).unwrap_or_else(|| {
        let routes: Vec<&str> = pages.iter().map(|p| p.route.as_str()).collect();
        panic!("page '{}' not found under top-level routes {:?}", route, routes)
    })
}
