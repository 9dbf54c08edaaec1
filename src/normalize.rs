//! Normalization of historical document shapes.
//!
//! The docs extractor changed how a few fields are encoded between Typst
//! releases. Templates only ever see the current shape; everything older is
//! adapted here.
//!
//! ## Deprecation
//!
//! Three encodings exist, resolved in this order (first match wins):
//!
//! ```text
//! 1. deprecation                          (0.13: single message, null = not deprecated)
//! 2. deprecationMessage [+ deprecationUntil]
//! 3. deprecationUntil alone               (the version string doubles as the message)
//! ```
//!
//! The order is fixed: historical documents are rendered exactly as they were.
//!
//! ## Detail Blocks
//!
//! ```text
//! 0.13:   details: "<p>..</p>", example: "<pre>..</pre>" | null
//! 0.14+:  details: [ {kind: html, ..}, {kind: example, ..}, ... ]
//! ```
//!
//! The old shape becomes one HTML block, followed by an untitled example block
//! only when the example is non-null. The new shape passes through untouched.
//!
//! Absence is never an error: no recognizable field means "not deprecated" or
//! "no blocks".

use crate::model::{
    DeprecationSource, DetailsBlock, DetailsSource, Example, Func, GroupContent, Param,
    TypeContent,
};
use std::borrow::Cow;

/// A normalized deprecation notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation<'a> {
    pub message: &'a str,
    /// Typst version in which the feature is removed, e.g. `0.15.0`.
    pub until: Option<&'a str>,
}

/// Items that may carry deprecation fields.
pub trait WithDeprecation {
    fn deprecation_source(&self) -> &DeprecationSource;
}

/// Items that carry detail blocks.
pub trait WithDetailsBlocks {
    fn details_source(&self) -> &DetailsSource;
}

impl WithDeprecation for Func {
    fn deprecation_source(&self) -> &DeprecationSource {
        &self.deprecation
    }
}

impl WithDeprecation for Param {
    fn deprecation_source(&self) -> &DeprecationSource {
        &self.deprecation
    }
}

impl WithDeprecation for TypeContent {
    fn deprecation_source(&self) -> &DeprecationSource {
        &self.deprecation
    }
}

impl WithDeprecation for DeprecationSource {
    fn deprecation_source(&self) -> &DeprecationSource {
        self
    }
}

impl WithDetailsBlocks for Func {
    fn details_source(&self) -> &DetailsSource {
        &self.details
    }
}

impl WithDetailsBlocks for Param {
    fn details_source(&self) -> &DetailsSource {
        &self.details
    }
}

impl WithDetailsBlocks for DetailsSource {
    fn details_source(&self) -> &DetailsSource {
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Return the deprecation notice of `item`, or `None` if it is not deprecated.
pub fn normalize_deprecation<T: WithDeprecation + ?Sized>(item: &T) -> Option<Deprecation<'_>> {
    let source = item.deprecation_source();

    if let Some(legacy) = &source.deprecation {
        return non_empty(legacy.as_deref()).map(|message| Deprecation {
            message,
            until: None,
        });
    }
    if let Some(message) = non_empty(source.deprecation_message.as_deref()) {
        return Some(Deprecation {
            message,
            until: non_empty(source.deprecation_until.as_deref()),
        });
    }
    non_empty(source.deprecation_until.as_deref()).map(|until| Deprecation {
        message: until,
        until: None,
    })
}

/// Return the ordered detail blocks of `item` in the current shape.
///
/// Borrows when the item is already in block form.
pub fn normalize_detail_blocks<T: WithDetailsBlocks + ?Sized>(item: &T) -> Cow<'_, [DetailsBlock]> {
    match item.details_source() {
        DetailsSource::Legacy { details, example } => {
            let mut blocks = vec![DetailsBlock::Html(details.clone())];
            if let Some(body) = example {
                blocks.push(DetailsBlock::Example(Example {
                    title: None,
                    body: body.clone(),
                }));
            }
            Cow::Owned(blocks)
        }
        DetailsSource::Blocks { details } => Cow::Borrowed(details),
    }
}

/// Global attributes of a group; empty for documents that predate them.
pub fn normalize_global_attributes(content: &GroupContent) -> &[Param] {
    content.global_attributes.as_deref().unwrap_or(&[])
}
