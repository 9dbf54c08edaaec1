//! Inline SVG icons.
//!
//! Stroke icons in the style of Tabler Icons (<https://tabler.io/icons>),
//! drawn on a 24×24 grid with `currentColor`, so CSS controls color and size.

use crate::config::SocialPlatform;
use maud::{Markup, html};

fn stroke_icon(title: Option<&str>, paths: &[&str]) -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" aria-hidden=[title.is_none().then_some("true")] {
            @if let Some(title) = title {
                title { (title) }
            }
            @for d in paths {
                path d=(d) {}
            }
        }
    }
}

pub fn alert_triangle() -> Markup {
    stroke_icon(
        None,
        &[
            "M12 9v4",
            "M10.363 3.591l-8.106 13.534a1.914 1.914 0 0 0 1.636 2.871h16.214a1.914 1.914 0 0 0 1.636 -2.87l-8.106 -13.536a1.914 1.914 0 0 0 -3.274 0z",
            "M12 16h.01",
        ],
    )
}

pub fn chevron_right() -> Markup {
    stroke_icon(None, &["M9 6l6 6l-6 6"])
}

pub fn chevron_left() -> Markup {
    stroke_icon(None, &["M15 6l-6 6l6 6"])
}

pub fn help_circle() -> Markup {
    stroke_icon(
        None,
        &[
            "M3 12a9 9 0 1 0 18 0a9 9 0 0 0 -18 0",
            "M12 16v.01",
            "M12 13a2 2 0 0 0 .914 -3.782a1.98 1.98 0 0 0 -2.414 .483",
        ],
    )
}

pub fn info_circle() -> Markup {
    stroke_icon(
        None,
        &[
            "M3 12a9 9 0 1 0 18 0a9 9 0 0 0 -18 0",
            "M12 9h.01",
            "M11 12h1v4h1",
        ],
    )
}

pub fn menu() -> Markup {
    stroke_icon(None, &["M4 6l16 0", "M4 12l16 0", "M4 18l16 0"])
}

pub fn close() -> Markup {
    stroke_icon(None, &["M18 6l-12 12", "M6 6l12 12"])
}

/// Icon for a social link, titled for screen readers.
pub fn social(platform: SocialPlatform, title: &str) -> Markup {
    let paths: &[&str] = match platform {
        SocialPlatform::GitHub => &[
            "M9 19c-4.3 1.4 -4.3 -2.5 -6 -3m12 5v-3.5c0 -1 .1 -1.4 -.5 -2c2.8 -.3 5.5 -1.4 5.5 -6a4.6 4.6 0 0 0 -1.3 -3.2a4.2 4.2 0 0 0 -.1 -3.2s-1.1 -.3 -3.5 1.3a12.3 12.3 0 0 0 -6.2 0c-2.4 -1.6 -3.5 -1.3 -3.5 -1.3a4.2 4.2 0 0 0 -.1 3.2a4.6 4.6 0 0 0 -1.3 3.2c0 4.6 2.7 5.7 5.5 6c-.6 .6 -.6 1.2 -.5 2v3.5",
        ],
        SocialPlatform::Discord => &[
            "M8 12a1 1 0 1 0 2 0a1 1 0 0 0 -2 0",
            "M14 12a1 1 0 1 0 2 0a1 1 0 0 0 -2 0",
            "M15.5 17c0 1 1.5 3 2 3c1.5 0 2.833 -1.667 3.5 -3c.667 -1.667 .5 -5.833 -1.5 -11.5c-1.457 -1.015 -3 -1.34 -4.5 -1.5l-.972 1.923a11.913 11.913 0 0 0 -4.053 0l-.975 -1.923c-1.5 .16 -3.043 .485 -4.5 1.5c-2 5.667 -2.167 9.833 -1.5 11.5c.667 1.333 2 3 3.5 3c.5 0 2 -2 2 -3",
            "M7 16.5c3.5 1 6.5 1 10 0",
        ],
        SocialPlatform::QQ => &[
            "M6 9.748a14.716 14.716 0 0 0 11.995 -.052c.275 -9.236 -11.104 -9.113 -11.995 .052z",
            "M18 10c.984 2.762 1.949 4.765 1.5 6c-.5 1.5 -1.5 1.5 -2 1.5",
            "M6 10c-.984 2.762 -1.949 4.765 -1.5 6c.5 1.5 1.5 1.5 2 1.5",
            "M9 18c-1.5 0 -3 .5 -3 1.5s1.5 1 3 1s3 -.5 3 -1.5",
            "M15 18c1.5 0 3 .5 3 1.5s-1.5 1 -3 1s-3 -.5 -3 -1.5",
        ],
        SocialPlatform::Homepage => &[
            "M5 12l-2 0l9 -9l9 9l-2 0",
            "M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7",
            "M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6",
        ],
    };
    stroke_icon(Some(title), paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorative_icons_are_hidden() {
        let svg = chevron_right().into_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"aria-hidden="true""#));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn social_icons_carry_title() {
        let svg = social(SocialPlatform::GitHub, "GitHub (typst/typst)").into_string();
        assert!(svg.contains("<title>GitHub (typst/typst)</title>"));
        assert!(!svg.contains("aria-hidden"));
    }
}
