use super::{Key, TooltipKind, Translation};
use crate::config::Metadata;
use maud::{Markup, html};

/// English (United States). Defines no site notice.
pub struct EnUs {
    typst_official_docs_url: String,
}

impl EnUs {
    pub fn new(metadata: &Metadata) -> Self {
        Self {
            typst_official_docs_url: metadata.typst_official_docs_url.clone(),
        }
    }
}

impl Translation for EnUs {
    fn html_lang(&self) -> &'static str {
        "en-US"
    }

    fn documentation_title(&self) -> &'static str {
        "Typst Documentation"
    }

    fn close_menu(&self) -> &'static str {
        "Close menu"
    }

    fn open_menu(&self) -> &'static str {
        "Open menu"
    }

    fn show_information(&self, name: &str) -> String {
        format!("Show information about {name}")
    }

    fn tooltip_kind(&self, kind: TooltipKind) -> &'static str {
        match kind {
            TooltipKind::Element => "Element",
            TooltipKind::Contextual => "Contextual",
            TooltipKind::Constructor => "Constructor",
            TooltipKind::Definitions => "Definitions",
            TooltipKind::Parameters => "Parameters",
            TooltipKind::Variadic => "Variadic",
            TooltipKind::Settable => "Settable",
            TooltipKind::Positional => "Positional",
            TooltipKind::Required => "Required",
        }
    }

    fn markup(&self, key: Key<'_>) -> Option<Markup> {
        let markup = match key {
            Key::ElementFunction => html! { "Element" },
            Key::ElementFunctionDescription => html! {
                "Element functions can be customized with " code { "set" } " and "
                code { "show" } " rules."
            },
            Key::ContextFunction => html! { "Contextual" },
            Key::ContextFunctionDescription => html! {
                "Contextual functions can only be used when the context is known."
            },

            Key::Constructor => html! { "Constructor" },
            Key::ConstructorDescription => html! {
                "If a type has a constructor, you can call it like a function to create a new value of the type."
            },
            Key::Definitions => html! { "Definitions" },
            Key::DefinitionsDescription => html! {
                "Functions and types can have associated definitions. These are accessed by specifying the function or type, followed by a period, and then the definition's name."
            },
            Key::DefinitionsOf { name } => html! { "Definitions of " code { (name) } },
            Key::Parameters => html! { "Parameters" },
            Key::ParametersDescription => html! {
                "Parameters are the inputs to a function. They are specified in parentheses after the function name."
            },

            Key::Variadic => html! { "Variadic" },
            Key::VariadicDescription => html! {
                "Variadic parameters can be specified multiple times."
            },
            Key::Settable => html! { "Settable" },
            Key::SettableDescription => html! {
                "Settable parameters can be customized for all following uses of the function with a "
                code { "set" } " rule."
            },
            Key::Positional => html! { "Positional" },
            Key::PositionalDescription => html! {
                "Positional parameters are specified in order, without names."
            },
            Key::Required => html! { "Required" },
            Key::RequiredDescription => html! {
                "Required parameters must be specified when calling the function."
            },

            Key::Function => html! { "Function" },
            Key::GlobalAttributes => html! { "Global Attributes" },
            Key::DefaultValue => html! { "Default value: " },
            Key::StringValues => html! { "Available string values:" },
            Key::ShowExample { title } => match title {
                Some(title) => html! { "Show example: " (title) },
                None => html! { "Show example" },
            },
            Key::DeprecationWarning { message, until } => match until {
                Some(until) => html! { (message) "; it will be removed in Typst " (until) },
                None => html! { (message) },
            },

            Key::Untranslated => html! { "Untranslated" },
            Key::UntranslatedMessage => html! {
                "This page has not been translated yet. The original content is shown."
            },
            Key::CommunityContent => html! { "Community content" },
            Key::ContentAddedByCommunity => html! {
                "This page is not part of the official documentation. It was added by the community."
            },
            Key::PartiallyTranslated => html! { "Partially translated" },
            Key::PartiallyTranslatedMessage => html! {
                "This page is partially translated. Some original content remains."
            },
            Key::Translated => html! { "Translated" },
            Key::TranslatedMessage => html! { "This page has been translated." },

            Key::LangVersion => html! { "English" },
            Key::TranslationRate => html! { "Translation rate" },
            Key::TypstOfficialWebsite => html! { "Typst official website" },
            Key::TypstOfficialDocs => html! { "Typst official docs" },
            Key::OpenOfficialDocs => html! { "Open official docs" },
            Key::TableOfContents => html! { "On this page" },
            Key::Footer => html! {
                "Rendered from the "
                a href=(self.typst_official_docs_url) { "official Typst documentation" }
                "."
            },
            Key::PreviousPage => html! { "Previous page" },
            Key::NextPage => html! { "Next page" },

            Key::SiteNoticeBannerTitle | Key::SiteNoticeBannerDescription => return None,
        };
        Some(markup)
    }
}
