//! Localized UI strings.
//!
//! One locale is selected at startup from [`Metadata::language`] and used for
//! every page. Each locale provides two kinds of lookups:
//!
//! - a **data dictionary** of plain strings, for places where markup cannot
//!   appear (`<title>`, `lang`, `aria-label`);
//! - a **markup lookup** keyed by [`Key`], returning rich content that may
//!   contain inline code and links. A locale returns `None` for keys it does
//!   not provide, and [`translate`] renders that as nothing.
//!
//! Locales are plain types behind the [`Translation`] trait; [`select`] maps
//! the language tag to one with a `match`. An unsupported tag is a startup
//! error, never a silent fallback.

mod en_us;
mod zh_hans;

pub use en_us::EnUs;
pub use zh_hans::ZhHans;

use crate::config::Metadata;
use maud::{Markup, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error(
        "The {language} translation requires both GitHub and QQ social links in metadata.json, but at present: GitHub = {github:?}, QQ = {qq:?}."
    )]
    MissingSocialLink {
        language: &'static str,
        github: Option<String>,
        qq: Option<String>,
    },
}

/// Language tags with a built-in translation.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en-US", "zh-Hans"];

/// A locale: a data dictionary plus a markup lookup.
pub trait Translation: Send + Sync {
    /// Value of the `<html lang>` attribute.
    fn html_lang(&self) -> &'static str;
    fn documentation_title(&self) -> &'static str;
    fn close_menu(&self) -> &'static str;
    fn open_menu(&self) -> &'static str;
    /// Accessible label of a tooltip trigger, e.g. "Show information about Settable".
    fn show_information(&self, name: &str) -> String;
    fn tooltip_kind(&self, kind: TooltipKind) -> &'static str;

    /// Rich content for `key`, or `None` if this locale does not define it.
    fn markup(&self, key: Key<'_>) -> Option<Markup>;
}

/// Keys of the markup lookup. Some keys carry the values they interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    // Function tooltips
    ElementFunction,
    ElementFunctionDescription,
    ContextFunction,
    ContextFunctionDescription,
    // Section tooltips
    Constructor,
    ConstructorDescription,
    Definitions,
    DefinitionsDescription,
    DefinitionsOf { name: &'a str },
    Parameters,
    ParametersDescription,
    // Parameter tooltips
    Variadic,
    VariadicDescription,
    Settable,
    SettableDescription,
    Positional,
    PositionalDescription,
    Required,
    RequiredDescription,
    // Documentation body
    Function,
    GlobalAttributes,
    DefaultValue,
    StringValues,
    ShowExample { title: Option<&'a str> },
    DeprecationWarning { message: &'a str, until: Option<&'a str> },
    // Translation statuses
    Untranslated,
    UntranslatedMessage,
    CommunityContent,
    ContentAddedByCommunity,
    PartiallyTranslated,
    PartiallyTranslatedMessage,
    Translated,
    TranslatedMessage,
    // Header, sidebar, and footer
    LangVersion,
    TranslationRate,
    TypstOfficialWebsite,
    TypstOfficialDocs,
    OpenOfficialDocs,
    TableOfContents,
    Footer,
    PreviousPage,
    NextPage,
    // Site notice
    SiteNoticeBannerTitle,
    SiteNoticeBannerDescription,
}

/// Markers shown next to functions, sections, and parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipKind {
    Element,
    Contextual,
    Constructor,
    Definitions,
    Parameters,
    Variadic,
    Settable,
    Positional,
    Required,
}

impl TooltipKind {
    pub const ALL: [TooltipKind; 9] = [
        TooltipKind::Element,
        TooltipKind::Contextual,
        TooltipKind::Constructor,
        TooltipKind::Definitions,
        TooltipKind::Parameters,
        TooltipKind::Variadic,
        TooltipKind::Settable,
        TooltipKind::Positional,
        TooltipKind::Required,
    ];

    /// Markup keys of the visible label and the disclosed description.
    pub fn keys(self) -> (Key<'static>, Key<'static>) {
        match self {
            TooltipKind::Element => (Key::ElementFunction, Key::ElementFunctionDescription),
            TooltipKind::Contextual => (Key::ContextFunction, Key::ContextFunctionDescription),
            TooltipKind::Constructor => (Key::Constructor, Key::ConstructorDescription),
            TooltipKind::Definitions => (Key::Definitions, Key::DefinitionsDescription),
            TooltipKind::Parameters => (Key::Parameters, Key::ParametersDescription),
            TooltipKind::Variadic => (Key::Variadic, Key::VariadicDescription),
            TooltipKind::Settable => (Key::Settable, Key::SettableDescription),
            TooltipKind::Positional => (Key::Positional, Key::PositionalDescription),
            TooltipKind::Required => (Key::Required, Key::RequiredDescription),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TooltipKind::Element => "element",
            TooltipKind::Contextual => "contextual",
            TooltipKind::Constructor => "constructor",
            TooltipKind::Definitions => "definitions",
            TooltipKind::Parameters => "parameters",
            TooltipKind::Variadic => "variadic",
            TooltipKind::Settable => "settable",
            TooltipKind::Positional => "positional",
            TooltipKind::Required => "required",
        }
    }
}

/// Select the locale for `metadata.language`.
///
/// Locales that interpolate metadata check it here, so a misconfigured
/// deployment fails before rendering rather than producing broken links.
pub fn select(metadata: &Metadata) -> Result<Box<dyn Translation>, TranslationError> {
    match metadata.language.as_str() {
        "en-US" => Ok(Box::new(EnUs::new(metadata))),
        "zh-Hans" => Ok(Box::new(ZhHans::new(metadata)?)),
        other => Err(TranslationError::UnsupportedLanguage(other.to_string())),
    }
}

/// Look up `key`, rendering nothing when the locale does not define it.
pub fn translate(translation: &dyn Translation, key: Key<'_>) -> Markup {
    translation.markup(key).unwrap_or_else(|| html! {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SocialLink;
    use crate::test_helpers::zh_metadata;

    #[test]
    fn select_en_us() {
        let translation = select(&Metadata::default()).unwrap();
        assert_eq!(translation.html_lang(), "en-US");
    }

    #[test]
    fn select_zh_hans() {
        let translation = select(&zh_metadata()).unwrap();
        assert_eq!(translation.html_lang(), "zh-Hans");
    }

    #[test]
    fn select_unsupported_language_fails() {
        for language in ["ja-JP", "en", "", "zh-hans"] {
            let metadata = Metadata {
                language: language.to_string(),
                ..Metadata::default()
            };
            assert!(
                matches!(select(&metadata), Err(TranslationError::UnsupportedLanguage(_))),
                "{language:?} accepted"
            );
        }
    }

    #[test]
    fn zh_hans_requires_qq_link() {
        let metadata = Metadata {
            language: "zh-Hans".to_string(),
            ..Metadata::default()
        };
        let Err(err) = select(&metadata) else {
            panic!("zh-Hans selected without a QQ link");
        };
        assert!(matches!(err, TranslationError::MissingSocialLink { qq: None, .. }));
        assert!(err.to_string().contains("QQ"));
    }

    #[test]
    fn zh_hans_requires_github_link() {
        let metadata = Metadata {
            language: "zh-Hans".to_string(),
            social_links: vec![SocialLink::new("https://qm.qq.com/q/group", None)],
            ..Metadata::default()
        };
        assert!(matches!(
            select(&metadata),
            Err(TranslationError::MissingSocialLink { github: None, .. })
        ));
    }

    #[test]
    fn supported_languages_all_select() {
        for language in SUPPORTED_LANGUAGES {
            let metadata = Metadata {
                language: language.to_string(),
                ..zh_metadata()
            };
            assert!(select(&metadata).is_ok(), "{language} failed");
        }
    }

    #[test]
    fn translate_missing_key_renders_nothing() {
        let translation = select(&Metadata::default()).unwrap();
        assert!(translation.markup(Key::SiteNoticeBannerTitle).is_none());
        assert_eq!(
            translate(translation.as_ref(), Key::SiteNoticeBannerTitle).into_string(),
            ""
        );
    }

    #[test]
    fn every_tooltip_has_label_and_description() {
        let locales = [select(&Metadata::default()).unwrap(), select(&zh_metadata()).unwrap()];
        for translation in &locales {
            for kind in TooltipKind::ALL {
                let (label, description) = kind.keys();
                assert!(translation.markup(label).is_some(), "{kind:?} label");
                assert!(translation.markup(description).is_some(), "{kind:?} description");
                assert!(!translation.tooltip_kind(kind).is_empty());
            }
        }
    }

    #[test]
    fn deprecation_warning_includes_version() {
        let key = Key::DeprecationWarning {
            message: "removed soon",
            until: Some("0.15.0"),
        };
        let en = translate(select(&Metadata::default()).unwrap().as_ref(), key).into_string();
        assert!(en.contains("removed soon"));
        assert!(en.contains("0.15.0"));

        let zh = translate(select(&zh_metadata()).unwrap().as_ref(), key).into_string();
        assert!(zh.contains("removed soon"));
        assert!(zh.contains("Typst 0.15.0将移除该功能"));
    }

    #[test]
    fn deprecation_warning_without_version_is_message_only() {
        let key = Key::DeprecationWarning {
            message: "gone",
            until: None,
        };
        let en = translate(select(&Metadata::default()).unwrap().as_ref(), key).into_string();
        assert_eq!(en, "gone");
    }

    #[test]
    fn show_example_with_and_without_title() {
        let translation = select(&Metadata::default()).unwrap();
        let titled = translate(
            translation.as_ref(),
            Key::ShowExample {
                title: Some("Basic"),
            },
        )
        .into_string();
        assert!(titled.contains("Basic"));
        let untitled =
            translate(translation.as_ref(), Key::ShowExample { title: None }).into_string();
        assert!(!untitled.is_empty());
        assert!(!untitled.contains(':'));
    }

    #[test]
    fn interpolated_values_are_escaped() {
        let translation = select(&Metadata::default()).unwrap();
        let html = translate(
            translation.as_ref(),
            Key::DefinitionsOf {
                name: "<script>",
            },
        )
        .into_string();
        assert!(html.contains("&lt;script&gt;"));
    }
}
