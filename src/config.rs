//! Deployment metadata module.
//!
//! Handles loading and validating `public/metadata.json`, the one piece of
//! deployment-time configuration the renderer reads. It is loaded exactly once,
//! before any page renders, and is read-only afterwards.
//!
//! ## File Location
//!
//! ```text
//! <root>/
//! └── public/
//!     └── metadata.json        # optional; built-in fallback when absent
//! ```
//!
//! ## Format
//!
//! ```json
//! {
//!   "language": "en-US",
//!   "version": "0.14.0",
//!   "typstOfficialUrl": "https://typst.app/",
//!   "typstOfficialDocsUrl": "https://typst.app/docs/",
//!   "githubOrganizationUrl": "https://github.com/typst",
//!   "socialLinks": [
//!     "https://github.com/typst/typst",
//!     { "url": "https://discord.gg/2uDybryKPe", "title": "Discord" }
//!   ],
//!   "originUrl": "https://example.com/",
//!   "basePath": "/docs/",
//!   "displayTranslationStatus": true
//! }
//! ```
//!
//! Every key is required. Unknown keys are rejected to catch typos early.
//!
//! ## Removed Keys
//!
//! `githubRepositoryUrl` and `discordServerUrl` were replaced by `socialLinks`.
//! A file that still carries either one fails to load, so operators migrate
//! explicitly instead of having the old value silently dropped.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Location of the metadata file, relative to the project root.
pub const METADATA_FILE: &str = "public/metadata.json";

/// Top-level keys that were removed in favour of `socialLinks`, in check order.
const LEGACY_FIELDS: [&str; 2] = ["githubRepositoryUrl", "discordServerUrl"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{0}` is deprecated. Please use `socialLinks` instead.")]
    LegacyField(&'static str),
    #[error("Metadata validation error: {0}")]
    Validation(String),
}

/// Deployment metadata loaded from `public/metadata.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Metadata {
    /// Locale tag of the documentation, e.g. `en-US`.
    pub language: String,
    /// Documented Typst version, without a leading `v`.
    pub version: String,
    /// The official Typst website URL.
    pub typst_official_url: String,
    /// The official Typst documentation base URL. Ends with `/`.
    pub typst_official_docs_url: String,
    /// The GitHub organization maintaining this deployment.
    pub github_organization_url: String,
    /// Links shown as icons in the site header and footer.
    pub social_links: Vec<SocialLink>,
    /// Origin of the deployed site, without the base path.
    pub origin_url: String,
    /// Public path prefix of the deployment. `/` or `/<path>/`.
    pub base_path: String,
    /// Whether translation status banners are shown. Community content is always shown.
    pub display_translation_status: bool,
}

impl Default for Metadata {
    /// Fallback used when no metadata file exists (tests, local development).
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            version: "0.0.0".to_string(),
            typst_official_url: "https://typst.app/".to_string(),
            typst_official_docs_url: "https://typst.app/docs/".to_string(),
            github_organization_url: "https://github.com/typst".to_string(),
            social_links: vec![
                SocialLink::new("https://github.com/typst/typst", None),
                SocialLink::new("https://discord.gg/dummy", Some("Discord (dummy)")),
            ],
            origin_url: "https://example.com/".to_string(),
            base_path: "/docs/".to_string(),
            display_translation_status: true,
        }
    }
}

impl Metadata {
    /// Validate values that serde cannot check by type alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::Validation("version must not be empty".into()));
        }
        if !self.base_path.starts_with('/') || !self.base_path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "basePath must start and end with `/`, got `{}`",
                self.base_path
            )));
        }
        let docs_url = &self.typst_official_docs_url;
        let is_http = docs_url.starts_with("http://") || docs_url.starts_with("https://");
        if !is_http || !docs_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "typstOfficialDocsUrl must be an http(s) URL ending with `/`, got `{docs_url}`"
            )));
        }
        Ok(())
    }

    /// First social link hosted on the given platform.
    pub fn social_link(&self, platform: SocialPlatform) -> Option<&SocialLink> {
        self.social_links.iter().find(|l| l.platform == platform)
    }
}

// =============================================================================
// Social links
// =============================================================================

/// Which icon and default title a social link gets, decided by URL prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    GitHub,
    Discord,
    QQ,
    Homepage,
}

/// Coarse grouping of platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCategory {
    SourceHosting,
    ChatCommunity,
    Generic,
}

impl LinkCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceHosting => "source-hosting",
            Self::ChatCommunity => "chat-community",
            Self::Generic => "generic",
        }
    }
}

const GITHUB_PREFIX: &str = "https://github.com/";
const DISCORD_PREFIX: &str = "https://discord.gg/";
const QQ_PREFIX: &str = "https://qm.qq.com/";

impl SocialPlatform {
    /// Classify a URL by its well-known prefix. Unknown hosts are homepages.
    pub fn classify(url: &str) -> Self {
        if url.starts_with(GITHUB_PREFIX) {
            Self::GitHub
        } else if url.starts_with(DISCORD_PREFIX) {
            Self::Discord
        } else if url.starts_with(QQ_PREFIX) {
            Self::QQ
        } else {
            Self::Homepage
        }
    }

    pub fn category(self) -> LinkCategory {
        match self {
            Self::GitHub => LinkCategory::SourceHosting,
            Self::Discord | Self::QQ => LinkCategory::ChatCommunity,
            Self::Homepage => LinkCategory::Generic,
        }
    }

    /// Title used when the entry does not provide one.
    fn default_title(self, url: &str) -> String {
        match self {
            Self::GitHub => format!("GitHub ({})", &url[GITHUB_PREFIX.len()..]),
            Self::Discord => "Discord".to_string(),
            Self::QQ => "QQ".to_string(),
            Self::Homepage => "Homepage".to_string(),
        }
    }

    /// Short lowercase name, used for CSS classes and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Discord => "discord",
            Self::QQ => "qq",
            Self::Homepage => "homepage",
        }
    }
}

/// How a social link is written in `metadata.json`: a bare URL or `{url, title?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialLinkEntry {
    Url(String),
    Detailed {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

/// A normalized social link with its display title and platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SocialLinkEntry", into = "SocialLinkEntry")]
pub struct SocialLink {
    pub url: String,
    pub title: String,
    pub platform: SocialPlatform,
    /// True when `title` was derived rather than given in the file.
    pub default_title: bool,
}

impl SocialLink {
    pub fn new(url: &str, title: Option<&str>) -> Self {
        let platform = SocialPlatform::classify(url);
        match title {
            Some(title) => Self {
                url: url.to_string(),
                title: title.to_string(),
                platform,
                default_title: false,
            },
            None => Self {
                url: url.to_string(),
                title: platform.default_title(url),
                platform,
                default_title: true,
            },
        }
    }
}

impl From<SocialLinkEntry> for SocialLink {
    fn from(entry: SocialLinkEntry) -> Self {
        match entry {
            SocialLinkEntry::Url(url) => Self::new(&url, None),
            SocialLinkEntry::Detailed { url, title } => Self::new(&url, title.as_deref()),
        }
    }
}

impl From<SocialLink> for SocialLinkEntry {
    fn from(link: SocialLink) -> Self {
        if link.default_title {
            Self::Url(link.url)
        } else {
            Self::Detailed {
                url: link.url,
                title: Some(link.title),
            }
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Parse metadata from JSON text.
///
/// Removed keys are checked on the raw document before typed deserialization,
/// so they surface as [`ConfigError::LegacyField`] rather than a generic
/// unknown-field error.
pub fn parse_metadata(content: &str) -> Result<Metadata, ConfigError> {
    let raw: serde_json::Value = serde_json::from_str(content)?;
    if let Some(object) = raw.as_object() {
        for field in LEGACY_FIELDS {
            if object.contains_key(field) {
                return Err(ConfigError::LegacyField(field));
            }
        }
    }
    let metadata: Metadata = serde_json::from_value(raw)?;
    metadata.validate()?;
    Ok(metadata)
}

/// Load `public/metadata.json` under `root`, or the built-in fallback if absent.
pub fn load_metadata(root: &Path) -> Result<Metadata, ConfigError> {
    let path = root.join(METADATA_FILE);
    if !path.exists() {
        return Ok(Metadata::default());
    }
    let content = fs::read_to_string(&path)?;
    parse_metadata(&content)
}

/// The fallback metadata as a pretty-printed `metadata.json`.
///
/// Used by the `gen-config` CLI command as a starting point for deployments.
pub fn stock_metadata_json() -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(&Metadata::default())?)
}
