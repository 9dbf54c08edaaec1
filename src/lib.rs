//! # Typst Docs Web
//!
//! Renders the Typst documentation website from the JSON docs document that
//! the Typst docs extractor produces. Every page becomes a static HTML file,
//! localized into one language chosen by deployment metadata.
//!
//! # Architecture: Load Once, Render Many
//!
//! ```text
//! public/metadata.json            ─┐
//! public/translation-status.json  ─┼─▶ Site (read-only) ─┐
//!                                  │                      ├─▶ dist/**/index.html
//! public/docs.json  ──▶ [Page] ────┴──────────────────────┘
//! ```
//!
//! Metadata and the translation are resolved once at startup. A bad metadata
//! file or an unsupported language stops the process before the first page is
//! written. After that, rendering is a pure function from
//! `(Site, page tree, route)` to HTML, so pages render in parallel.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `metadata.json` loading, validation, social link classification |
//! | [`model`] | Serde types of the docs document and the translation status map |
//! | [`normalize`] | Adapts historical deprecation and detail-block shapes to the current one |
//! | [`translation`] | Locale selection and localized strings/markup (en-US, zh-Hans) |
//! | [`paths`] | URL joining, type reference links, parameter anchors, output paths |
//! | [`icons`] | Inline SVG icons |
//! | [`components`] | Shared page fragments: signatures, parameters, tooltips, chrome |
//! | [`templates`] | One template per body kind, plus the exhaustive dispatcher |
//! | [`generate`] | Rendering context, single-route rendering, whole-site build |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Template variables
//! are Rust expressions and all interpolation is escaped unless explicitly
//! wrapped in `PreEscaped`. The only pre-escaped inputs are the HTML fields of
//! the docs document, which come from the Typst docs extractor.
//!
//! ## Exhaustive Body Dispatch
//!
//! The page body is a closed enum matched without a wildcard arm. Adding a
//! body kind to the model without a template is a compile error.
//!
//! ## Locales as Types
//!
//! Each locale is a type implementing [`translation::Translation`]. Selection is
//! a `match` on the language tag; there is no runtime registry.

pub mod components;
pub mod config;
pub mod generate;
pub mod icons;
pub mod model;
pub mod normalize;
pub mod output;
pub mod paths;
pub mod templates;
pub mod translation;

#[cfg(test)]
pub(crate) mod test_helpers;
