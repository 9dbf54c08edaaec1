//! Reusable page fragments.
//!
//! Everything here is a pure function from borrowed data to [`Markup`]. The
//! page templates in [`crate::templates`] compose these; nothing here knows
//! which page kind it is rendered on.
//!
//! ## Trusted HTML
//!
//! Fields documented as HTML in the docs document (`details`, example bodies,
//! string-value details, defaults, HTML page bodies) are produced by the Typst
//! docs extractor and inserted with [`PreEscaped`]. Everything else (names,
//! types, category oneliners, deprecation messages, metadata values) is
//! escaped.
//!
//! ## Page Chrome
//!
//! ```text
//! ┌──────────────────────────── header ─────────────────────────────┐
//! │ ☰  Typst Documentation  English v0.13.1      Open official docs │
//! ├──────────┬──────────────────────────────────────┬───────────────┤
//! │ sidebar  │ site notice                          │ On this page  │
//! │          │ translation status                   │  - Summary    │
//! │ Part     │ <article>                            │  - Parameters │
//! │  Page    │ ‹ previous            next ›         │               │
//! ├──────────┴──────────────────────────────────────┴───────────────┤
//! │ footer                                                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sidebar collapses behind a CSS-only hamburger toggle on narrow screens.

use crate::config::SocialLink;
use crate::generate::{PageContext, Site};
use crate::icons;
use crate::model::{
    DetailsBlock, Example, Func, OutlineItem, Page, Param, TranslationStatus, TranslationStatusMap,
};
use crate::normalize::{WithDeprecation, normalize_deprecation, normalize_detail_blocks};
use crate::paths::{build_param_id, join_path, type_link};
use crate::translation::{Key, TooltipKind};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");

/// String-value lists up to this length start expanded.
pub const MAX_OPEN_STRING_VALUES: usize = 5;

// ============================================================================
// Small widgets
// ============================================================================

/// A type name badge, linked to its reference page when one exists.
pub fn type_icon(site: &Site, name: &str) -> Markup {
    let class = format!("type type-{}", name);
    html! {
        @if let Some(href) = type_link(site.base_path(), name) {
            a.type-link href=(href) { span class=(class) { (name) } }
        } @else {
            span class=(class) { (name) }
        }
    }
}

/// A marker label with a click-to-reveal explanation.
pub fn tooltip(site: &Site, kind: TooltipKind) -> Markup {
    let (label, description) = kind.keys();
    let name = site.translation.tooltip_kind(kind);
    html! {
        span.tooltip data-kind=(kind.as_str()) {
            details.tooltip-disclosure {
                summary aria-label=(site.translation.show_information(name)) {
                    span.tooltip-label { (site.t(label)) }
                    (icons::help_circle())
                }
                div.tooltip-content role="tooltip" {
                    strong { (site.t(label)) }
                    p { (site.t(description)) }
                }
            }
        }
    }
}

/// Where a deprecation warning is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeprecationLevel {
    /// Under a page title.
    Top,
    /// Under a function or parameter heading.
    Scoped,
}

/// Deprecation warning for `item`; renders nothing if it is not deprecated.
pub fn deprecation_warning<T: WithDeprecation + ?Sized>(
    site: &Site,
    item: &T,
    level: DeprecationLevel,
) -> Markup {
    let Some(deprecation) = normalize_deprecation(item) else {
        return html! {};
    };
    let class = match level {
        DeprecationLevel::Top => "deprecation deprecation-top",
        DeprecationLevel::Scoped => "deprecation deprecation-scoped",
    };
    html! {
        div class=(class) role="note" {
            span.deprecation-icon { (icons::alert_triangle()) }
            span.deprecation-message {
                (site.t(Key::DeprecationWarning {
                    message: deprecation.message,
                    until: deprecation.until,
                }))
            }
        }
    }
}

/// A collapsed example. Examples never start expanded.
pub fn folded_example(site: &Site, example: &Example) -> Markup {
    html! {
        details.folding-example {
            summary {
                (icons::chevron_right())
                (site.t(Key::ShowExample { title: example.title.as_deref() }))
            }
            div.example-body { (PreEscaped(&example.body)) }
        }
    }
}

fn detail_blocks(site: &Site, blocks: &[DetailsBlock], fold_examples: bool) -> Markup {
    html! {
        @for block in blocks {
            @match block {
                DetailsBlock::Html(html) => {
                    div.details { (PreEscaped(html)) }
                }
                DetailsBlock::Example(example) => {
                    @if fold_examples {
                        (folded_example(site, example))
                    } @else {
                        div.example {
                            @if let Some(title) = &example.title {
                                p.example-title { (title) }
                            }
                            (PreEscaped(&example.body))
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Functions and parameters
// ============================================================================

/// Name shown before the function name in a signature.
///
/// `self` for methods, otherwise the dotted module path (possibly empty).
fn qualifier(func: &Func) -> String {
    if func.self_ {
        "self".to_string()
    } else {
        func.path.join(".")
    }
}

/// One-line call signature, e.g. `calc.pow(int, exponent: int) -> int`.
///
/// Named parameters link to their entry in the parameter list. Positional
/// ones show only their types.
pub fn function_definition(site: &Site, func: &Func, prefix: Option<&str>) -> Markup {
    let qualifier = qualifier(func);
    html! {
        pre.signature {
            code {
                @if !qualifier.is_empty() {
                    span.typ-module { (qualifier) }
                    span.typ-punct { "." }
                }
                span.typ-func { (func.name) }
                span.typ-punct { "(" }
                @for (i, param) in func.params.iter().enumerate() {
                    span.overview-param {
                        @if !param.positional {
                            a href={ "#" (build_param_id(&param.name, prefix)) } {
                                span.param-name { (param.name) }
                            }
                            span.typ-punct { ":" }
                            " "
                        }
                        @for ty in &param.types {
                            (type_icon(site, ty))
                        }
                        @if i + 1 < func.params.len() {
                            span.typ-punct { "," }
                            " "
                        }
                    }
                }
                span.typ-punct { ")" }
                @if !func.returns.is_empty() {
                    span.typ-op { " -> " }
                    span.returns {
                        @for ty in &func.returns {
                            (type_icon(site, ty))
                        }
                    }
                }
            }
        }
    }
}

fn param_heading(site: &Site, param: &Param) -> Markup {
    html! {
        code.param-name { (param.name) }
        span.param-types {
            @for ty in &param.types {
                (type_icon(site, ty))
            }
        }
        span.param-markers {
            @if param.required { (tooltip(site, TooltipKind::Required)) }
            @if param.positional { (tooltip(site, TooltipKind::Positional)) }
            @if param.variadic { (tooltip(site, TooltipKind::Variadic)) }
            @if param.settable { (tooltip(site, TooltipKind::Settable)) }
        }
    }
}

/// The parameter list of a function, or a group's global attributes.
///
/// Global attributes use one heading level higher (`h3`) than function
/// parameters (`h4`), since they are not nested under a function.
pub fn function_parameters(
    site: &Site,
    params: &[Param],
    global_attributes: bool,
    prefix: Option<&str>,
) -> Markup {
    html! {
        div.parameters {
            @for param in params {
                @let id = build_param_id(&param.name, prefix);
                @let heading = param_heading(site, param);
                div.parameter {
                    @if global_attributes {
                        h3 id=(id) { (heading) }
                    } @else {
                        h4 id=(id) { (heading) }
                    }
                    (deprecation_warning(site, param, DeprecationLevel::Scoped))
                    (detail_blocks(site, &normalize_detail_blocks(param), true))
                    @if !param.strings.is_empty() {
                        details.folding-example.string-values open[param.strings.len() <= MAX_OPEN_STRING_VALUES] {
                            summary {
                                (icons::chevron_right())
                                (site.t(Key::StringValues))
                            }
                            ul {
                                @for value in &param.strings {
                                    li {
                                        code { (value.string) }
                                        div.string-details { (PreEscaped(&value.details)) }
                                    }
                                }
                            }
                        }
                    }
                    @if let Some(default) = &param.default {
                        p.default-value {
                            span.default-label { (site.t(Key::DefaultValue)) }
                            (PreEscaped(default))
                        }
                    }
                }
            }
        }
    }
}

/// Details, signature, and parameters of one function.
///
/// With `fold_examples` the function's own examples are collapsed; parameter
/// examples are always collapsed.
pub fn function_display(
    site: &Site,
    func: &Func,
    prefix: Option<&str>,
    fold_examples: bool,
) -> Markup {
    html! {
        (detail_blocks(site, &normalize_detail_blocks(func), fold_examples))
        (function_definition(site, func, prefix))
        (function_parameters(site, &func.params, false, prefix))
    }
}

/// Heading of a function inside a group or a type's definitions.
pub fn function_heading(site: &Site, func: &Func, id: &str) -> Markup {
    html! {
        h3 id=(id) {
            code.func-name { (func.name) }
            @if func.element { (tooltip(site, TooltipKind::Element)) }
            @if func.contextual { (tooltip(site, TooltipKind::Contextual)) }
        }
        (deprecation_warning(site, func, DeprecationLevel::Scoped))
    }
}

// ============================================================================
// Site chrome
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Small,
    Medium,
}

impl IconSize {
    fn as_str(self) -> &'static str {
        match self {
            IconSize::Small => "small",
            IconSize::Medium => "medium",
        }
    }
}

fn social_link(link: &SocialLink) -> Markup {
    html! {
        a class={ "social-link social-" (link.platform.as_str()) }
            data-category=(link.platform.category().as_str())
            href=(link.url) title=(link.title) {
            (icons::social(link.platform, &link.title))
        }
    }
}

/// Icons for every configured social link, in metadata order.
pub fn social_link_icons(site: &Site, size: IconSize) -> Markup {
    html! {
        div class={ "social-links social-links-" (size.as_str()) } {
            @for link in &site.metadata.social_links {
                (social_link(link))
            }
        }
    }
}

pub fn site_header(site: &Site) -> Markup {
    let tr = site.translation.as_ref();
    html! {
        header.site-header {
            label.nav-hamburger for="nav-toggle" aria-label=(tr.open_menu()) {
                (icons::menu())
            }
            a.site-title href=(site.base_path()) { (tr.documentation_title()) }
            span.lang-version {
                (site.t(Key::LangVersion)) " v" (site.metadata.version)
            }
            div.header-links {
                a.official-docs href=(site.metadata.typst_official_docs_url) {
                    (site.t(Key::OpenOfficialDocs))
                }
                (social_link_icons(site, IconSize::Small))
            }
        }
    }
}

pub fn footer(site: &Site) -> Markup {
    html! {
        footer.site-footer {
            (social_link_icons(site, IconSize::Medium))
            nav.footer-links {
                a href=(site.metadata.typst_official_url) { (site.t(Key::TypstOfficialWebsite)) }
                a href=(site.metadata.typst_official_docs_url) { (site.t(Key::TypstOfficialDocs)) }
            }
            p.footer-note { (site.t(Key::Footer)) }
        }
    }
}

/// Locale-wide notice above every page; only locales that define one show it.
pub fn site_notice(site: &Site) -> Markup {
    let Some(title) = site.translation.markup(Key::SiteNoticeBannerTitle) else {
        return html! {};
    };
    html! {
        aside.site-notice role="note" {
            span.site-notice-icon { (icons::info_circle()) }
            div {
                strong.site-notice-title { (title) }
                p { (site.t(Key::SiteNoticeBannerDescription)) }
            }
        }
    }
}

fn status_keys(status: TranslationStatus) -> (Key<'static>, Key<'static>, &'static str) {
    match status {
        TranslationStatus::Translated => (Key::Translated, Key::TranslatedMessage, "translated"),
        TranslationStatus::PartiallyTranslated => (
            Key::PartiallyTranslated,
            Key::PartiallyTranslatedMessage,
            "partially-translated",
        ),
        TranslationStatus::Untranslated => {
            (Key::Untranslated, Key::UntranslatedMessage, "untranslated")
        }
        TranslationStatus::Community => {
            (Key::CommunityContent, Key::ContentAddedByCommunity, "community")
        }
    }
}

/// Translation status of the page at `route`.
///
/// Shown only when `displayTranslationStatus` is on, except for community
/// pages, which always say so.
pub fn translation_status_banner(site: &Site, route: &str) -> Markup {
    let Some(status) = site.status_of(route) else {
        return html! {};
    };
    if !site.metadata.display_translation_status && status != TranslationStatus::Community {
        return html! {};
    }
    let (label, message, class) = status_keys(status);
    html! {
        div class={ "translation-status status-" (class) } role="status" {
            strong { (site.t(label)) }
            p { (site.t(message)) }
        }
    }
}

/// Rounded percentage of listed upstream routes that are fully translated.
///
/// Community pages are not upstream content and are left out. `None` when
/// the map lists no upstream routes.
pub fn translation_rate(status: &TranslationStatusMap) -> Option<u32> {
    let upstream = status
        .values()
        .filter(|s| **s != TranslationStatus::Community);
    let (total, translated) = upstream.fold((0u32, 0u32), |(total, translated), s| {
        (total + 1, translated + u32::from(*s == TranslationStatus::Translated))
    });
    (total > 0).then(|| (translated * 100 + total / 2) / total)
}

// ============================================================================
// Navigation
// ============================================================================

/// Sidebar navigation over the whole page tree.
///
/// The current page is marked `current`; its ancestors are marked `open` so
/// the path to it stays expanded.
pub fn sidebar(ctx: &PageContext) -> Markup {
    let site = ctx.site;
    let tr = site.translation.as_ref();
    let rate = site
        .metadata
        .display_translation_status
        .then(|| translation_rate(&site.translation_status))
        .flatten();
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle" aria-label=(tr.open_menu());
        nav.sidebar {
            label.nav-close for="nav-toggle" aria-label=(tr.close_menu()) {
                (icons::close())
            }
            ul.nav-tree {
                @for page in ctx.docs {
                    (render_nav_item(page, &ctx.page.route))
                }
            }
            @if let Some(rate) = rate {
                p.translation-rate {
                    (site.t(Key::TranslationRate)) ": " (rate) "%"
                }
            }
        }
    }
}

fn render_nav_item(page: &Page, current_route: &str) -> Markup {
    let is_current = page.route == current_route;
    let is_ancestor = !is_current && current_route.starts_with(&page.route);
    let class = if is_current {
        Some("current")
    } else if is_ancestor {
        Some("open")
    } else {
        None
    };
    html! {
        @if let Some(part) = &page.part {
            li.nav-part { (part) }
        }
        li class=[class] {
            a href=(page.route) { (page.title) }
            @if !page.children.is_empty() {
                ul {
                    @for child in &page.children {
                        (render_nav_item(child, current_route))
                    }
                }
            }
        }
    }
}

/// On-page table of contents; nothing when the page has no outline.
pub fn table_of_contents(site: &Site, outline: &[OutlineItem]) -> Markup {
    if outline.is_empty() {
        return html! {};
    }
    html! {
        aside.page-outline {
            h2 { (site.t(Key::TableOfContents)) }
            (outline_list(outline))
        }
    }
}

fn outline_list(items: &[OutlineItem]) -> Markup {
    html! {
        ul {
            @for item in items {
                li {
                    a href={ "#" (item.id) } { (item.name) }
                    @if !item.children.is_empty() {
                        (outline_list(&item.children))
                    }
                }
            }
        }
    }
}

/// Links to the previous and next page in depth-first order.
pub fn page_navigation(ctx: &PageContext) -> Markup {
    let site = ctx.site;
    html! {
        nav.page-nav {
            @if let Some(previous) = ctx.previous {
                a.page-prev href=(previous.route) {
                    (icons::chevron_left())
                    span {
                        small { (site.t(Key::PreviousPage)) }
                        span.page-nav-title { (previous.title) }
                    }
                }
            }
            @if let Some(next) = ctx.next {
                a.page-next href=(next.route) {
                    span {
                        small { (site.t(Key::NextPage)) }
                        span.page-nav-title { (next.title) }
                    }
                    (icons::chevron_right())
                }
            }
        }
    }
}

/// `<title>` text: page title followed by the documentation title.
pub fn page_title(site: &Site, page: &Page) -> String {
    let documentation = site.translation.documentation_title();
    if page.title.is_empty() {
        documentation.to_string()
    } else {
        format!("{} – {}", page.title, documentation)
    }
}

/// Full HTML document around a page's rendered content.
pub fn base_document(ctx: &PageContext, content: Markup) -> Markup {
    let site = ctx.site;
    let page = ctx.page;
    html! {
        (DOCTYPE)
        html lang=(site.translation.html_lang()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title(site, page)) }
                @if !page.description.is_empty() {
                    meta name="description" content=(page.description);
                }
                link rel="canonical" href=(join_path(&site.metadata.origin_url, &[&page.route]));
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_header(site))
                div.layout {
                    (sidebar(ctx))
                    main.content {
                        (site_notice(site))
                        (translation_status_banner(site, &page.route))
                        article.prose {
                            (content)
                        }
                        (page_navigation(ctx))
                    }
                    (table_of_contents(site, &page.outline))
                }
                (footer(site))
            }
        }
    }
}
