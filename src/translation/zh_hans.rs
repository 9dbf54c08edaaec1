use super::{Key, TooltipKind, Translation, TranslationError};
use crate::config::{Metadata, SocialPlatform};
use maud::{Markup, html};

/// Simplified Chinese, maintained by the Typst Chinese community.
///
/// The site notice links to the community's GitHub repository and QQ group,
/// so both must be listed in `socialLinks`.
pub struct ZhHans {
    version: String,
    typst_official_docs_url: String,
    github_organization_url: String,
    github_repository_url: String,
    qq_url: String,
}

impl ZhHans {
    pub fn new(metadata: &Metadata) -> Result<Self, TranslationError> {
        let github = metadata.social_link(SocialPlatform::GitHub).map(|l| l.url.clone());
        let qq = metadata.social_link(SocialPlatform::QQ).map(|l| l.url.clone());
        match (github, qq) {
            (Some(github_repository_url), Some(qq_url)) => Ok(Self {
                version: metadata.version.clone(),
                typst_official_docs_url: metadata.typst_official_docs_url.clone(),
                github_organization_url: metadata.github_organization_url.clone(),
                github_repository_url,
                qq_url,
            }),
            (github, qq) => Err(TranslationError::MissingSocialLink {
                language: "zh-Hans",
                github,
                qq,
            }),
        }
    }
}

impl Translation for ZhHans {
    fn html_lang(&self) -> &'static str {
        "zh-Hans"
    }

    fn documentation_title(&self) -> &'static str {
        "Typst中文文档"
    }

    fn close_menu(&self) -> &'static str {
        "关闭菜单"
    }

    fn open_menu(&self) -> &'static str {
        "打开菜单"
    }

    fn show_information(&self, name: &str) -> String {
        format!("具体解释{name}")
    }

    fn tooltip_kind(&self, kind: TooltipKind) -> &'static str {
        match kind {
            TooltipKind::Element => "元素函数",
            TooltipKind::Contextual => "上下文相关",
            TooltipKind::Constructor => "构造函数",
            TooltipKind::Definitions => "定义",
            TooltipKind::Parameters => "参数",
            TooltipKind::Variadic => "变长参数",
            TooltipKind::Settable => "可用set规则",
            TooltipKind::Positional => "位置参数",
            TooltipKind::Required => "必需参数",
        }
    }

    fn markup(&self, key: Key<'_>) -> Option<Markup> {
        let docs = &self.typst_official_docs_url;
        let org = &self.github_organization_url;
        let repo = &self.github_repository_url;
        let qq = &self.qq_url;

        let markup = match key {
            Key::ElementFunction => html! { "元素" },
            Key::ElementFunctionDescription => html! {
                "元素函数可用" code { "set" } "和" code { "show" } "规则自定义样式。"
            },
            Key::ContextFunction => html! { "上下文相关函数" },
            Key::ContextFunctionDescription => html! { "上下文相关函数只能在确定上下文之后使用。" },

            Key::Constructor => html! { "构造函数" },
            Key::ConstructorDescription => html! {
                "若某类型提供构造函数，可调用它生成该类型的新实例。"
            },
            Key::DefinitionsOf { name } => html! { code { (name) } "的定义" },
            Key::Definitions => html! { "定义" },
            Key::DefinitionsDescription => html! {
                "这些函数和类型带有附属定义。要访问这种定义，请先写上函数或类型的名称，再加上定义的名称，并用句点在中间分隔。"
            },
            Key::Parameters => html! { "参数" },
            Key::ParametersDescription => html! { "参数是传给函数的输入，写在函数名后的括号中。" },

            Key::Variadic => html! { "变长参数" },
            Key::VariadicDescription => html! { "变长参数可以传入多次。" },
            Key::Settable => html! { "可用set规则" },
            Key::SettableDescription => html! {
                "可用" code { "set" } "规则设置参数，更改后续调用时的默认值。"
            },
            Key::Positional => html! { "位置参数" },
            Key::PositionalDescription => html! { "位置参数按顺序传入，不带参数名。" },
            Key::Required => html! { "必需参数" },
            Key::RequiredDescription => html! { "必需参数在调用函数时必须传入。" },

            Key::Function => html! { "函数" },
            Key::DefaultValue => html! { "默认值：" },
            Key::StringValues => html! { "可填写的值" },
            Key::ShowExample { title } => match title {
                Some(title) => html! { "展开例子：" (title) },
                None => html! { "展开例子" },
            },
            Key::GlobalAttributes => html! { "全局属性" },
            Key::DeprecationWarning { message, until } => match until {
                Some(until) => html! { (message) "；Typst " (until) "将移除该功能" },
                None => html! { (message) },
            },

            Key::Untranslated => html! { "未翻译" },
            Key::UntranslatedMessage => html! { "本页尚未翻译，以下展示原文。" },
            Key::CommunityContent => html! { "中文版特色内容" },
            Key::ContentAddedByCommunity => html! { "本页不属于官方文档，由中文社区独立增加。" },
            Key::PartiallyTranslated => html! { "部分翻译" },
            Key::PartiallyTranslatedMessage => html! { "本页仅部分翻译，会残余一些原文。" },
            Key::Translated => html! { "已翻译" },
            Key::TranslatedMessage => html! { "本页已翻译为中文。" },

            Key::LangVersion => html! { "简体中文版" },
            Key::TranslationRate => html! { "翻译率" },
            Key::TypstOfficialWebsite => html! { "Typst官方网站" },
            Key::TypstOfficialDocs => html! { "Typst官方文档" },
            Key::OpenOfficialDocs => html! { "转到官方文档（英文）" },
            Key::TableOfContents => html! { "目录" },
            Key::Footer => html! {
                "Translated by " a href=(org) { "Typst Chinese Community" }
            },
            Key::PreviousPage => html! { "上一页" },
            Key::NextPage => html! { "下一页" },

            Key::SiteNoticeBannerTitle => html! { "注意 / Info" },
            Key::SiteNoticeBannerDescription => html! {
                "本站经 Typst GmbH 许可，提供 "
                a href=(docs) { "Typst v" (self.version) " 官方文档" }
                "的翻译，由" a href=(org) { "中文社区" } "维护。建议与"
                a href=(docs) { "官方文档" }
                "一同阅读，因为可能存在错译、漏译或过时信息。如有意改进翻译内容或网站本身，可在"
                a href=(repo) { "GitHub" }
                "上提出 Issue、发起 Pull Requests。此外，也欢迎加入"
                a href=(qq) { "「Typst 非官方中文交流群」（QQ 793548390）" }
                "。"
                br;
                "This site provides a Chinese translation of the "
                a href=(docs) { "Typst v" (self.version) " documentation" }
                " maintained by the “" a href=(org) { "Typst Chinese Community" } "” with permission from Typst GmbH. We recommend using this alongside the "
                a href=(docs) { "official documentation" }
                ". We welcome contributions through Issues and Pull Requests on "
                a href=(repo) { "our GitHub repository" }
                " for both translation improvements and website enhancements. Feel free to join "
                a href=(qq) { "our QQ chat group “Typst 非官方中文交流群” (793548390)" }
                "."
            },
        };
        Some(markup)
    }
}
