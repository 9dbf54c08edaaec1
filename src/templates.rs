//! Page templates, one per body kind.
//!
//! | Kind       | Content                                                    |
//! |------------|------------------------------------------------------------|
//! | `category` | Title, details, list of member pages                       |
//! | `group`    | Title, details, several functions, optional global attrs   |
//! | `type`     | Type name, details, constructor, scoped definitions        |
//! | `html`     | Pre-rendered HTML (tutorial and guide pages)               |
//!
//! [`render_page`] matches the body exhaustively, so a new body kind cannot
//! be added without a template.
//!
//! Examples of group functions and constructors are shown inline; examples of
//! a type's definitions are folded to keep long type pages scannable.

use crate::components::{
    DeprecationLevel, base_document, deprecation_warning, function_display, function_heading,
    function_parameters, tooltip, type_icon,
};
use crate::generate::{PageContext, Site};
use crate::model::{Body, CategoryContent, GroupContent, TypeContent};
use crate::normalize::normalize_global_attributes;
use crate::translation::{Key, TooltipKind};
use maud::{Markup, PreEscaped, html};

/// Render the complete HTML document for the page in `ctx`.
pub fn render_page(ctx: &PageContext) -> Markup {
    let site = ctx.site;
    let content = match &ctx.page.body {
        Body::Category(content) => category_template(site, content),
        Body::Group(content) => group_template(site, content),
        Body::Type(content) => type_template(site, content),
        Body::Html(content) => html_template(content),
    };
    base_document(ctx, content)
}

pub fn category_template(site: &Site, content: &CategoryContent) -> Markup {
    html! {
        h1 id="summary" { (content.title) }
        div.details { (PreEscaped(&content.details)) }
        @if !content.items.is_empty() {
            h2 id="definitions" { (site.t(Key::Definitions)) }
            ul.subgridded {
                @for item in &content.items {
                    li {
                        a href=(item.route) {
                            @if item.code {
                                code { (item.name) }
                            } @else {
                                (item.name)
                            }
                        }
                        span.oneliner { (item.oneliner) }
                    }
                }
            }
        }
    }
}

pub fn group_template(site: &Site, content: &GroupContent) -> Markup {
    let global_attributes = normalize_global_attributes(content);
    html! {
        h1 id="summary" { (content.title) }
        div.details { (PreEscaped(&content.details)) }
        @if !content.functions.is_empty() {
            h2 id="functions" { (site.t(Key::Function)) }
        }
        @for func in &content.functions {
            @let prefix = format!("functions-{}", func.name);
            section.function {
                (function_heading(site, func, &prefix))
                (function_display(site, func, Some(prefix.as_str()), false))
            }
        }
        @if !global_attributes.is_empty() {
            h2 id="global-attributes" { (site.t(Key::GlobalAttributes)) }
            (function_parameters(site, global_attributes, true, Some("global-attributes")))
        }
    }
}

pub fn type_template(site: &Site, content: &TypeContent) -> Markup {
    html! {
        h1 id="summary" { (type_icon(site, &content.name)) }
        (deprecation_warning(site, content, DeprecationLevel::Top))
        div.details { (PreEscaped(&content.details)) }
        @if let Some(constructor) = &content.constructor {
            h2 id="constructor" {
                (site.t(Key::Constructor))
                (tooltip(site, TooltipKind::Parameters))
            }
            (function_display(site, constructor, Some("constructor"), false))
        }
        @if !content.scope.is_empty() {
            h2 id="definitions" {
                (site.t(Key::Definitions))
                (tooltip(site, TooltipKind::Definitions))
            }
            @for func in &content.scope {
                @let prefix = format!("definitions-{}", func.name);
                section.definition {
                    (function_heading(site, func, &prefix))
                    (function_display(site, func, Some(prefix.as_str()), true))
                }
            }
        }
    }
}

pub fn html_template(content: &str) -> Markup {
    html! { (PreEscaped(content)) }
}
