// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS font shorthand parsing.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{FontFamily, FontStyle, FontWeight, TextStyle};

/// Errors produced by [`parse_css_font`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FontParseError {
    /// The font string was empty or only whitespace.
    #[error("font string is empty")]
    Empty,
    /// No `<n>px` size token was found.
    #[error("font `{0}` has no pixel size")]
    MissingSize(String),
    /// The size token was not a positive number of pixels.
    #[error("invalid font size `{0}`")]
    InvalidSize(String),
    /// Nothing followed the size token.
    #[error("font `{0}` has no family")]
    MissingFamily(String),
}

/// Parses a canvas font shorthand such as `"12px sans-serif"` or
/// `"italic bold 10px/1.2 'Helvetica Neue', Arial"`.
///
/// Only pixel sizes are understood. Tokens before the size may set the style
/// (`italic`, `oblique`) and weight (`bold`, `lighter`, `bolder`, `100`..`900`);
/// other keywords such as `small-caps` are ignored. Of a family list, the first
/// family is kept.
pub fn parse_css_font(font: &str) -> Result<TextStyle, FontParseError> {
    let trimmed = font.trim();
    if trimmed.is_empty() {
        return Err(FontParseError::Empty);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let size_index = tokens
        .iter()
        .position(|t| size_token(t).is_some())
        .ok_or_else(|| FontParseError::MissingSize(trimmed.to_string()))?;

    let size_str = size_token(tokens[size_index]).unwrap_or_default();
    let font_size: f64 = size_str
        .parse()
        .map_err(|_| FontParseError::InvalidSize(tokens[size_index].to_string()))?;
    if !(font_size.is_finite() && font_size > 0.0) {
        return Err(FontParseError::InvalidSize(tokens[size_index].to_string()));
    }

    let mut style = TextStyle::new(font_size);
    for token in &tokens[..size_index] {
        apply_prefix_token(&mut style, token);
    }

    let family = tokens[size_index + 1..].join(" ");
    let first = family.split(',').next().unwrap_or_default();
    let first = first.trim().trim_matches(|c| c == '"' || c == '\'');
    if first.is_empty() {
        return Err(FontParseError::MissingFamily(trimmed.to_string()));
    }
    style.font_family = match first {
        f if f.eq_ignore_ascii_case("serif") => FontFamily::Serif,
        f if f.eq_ignore_ascii_case("sans-serif") => FontFamily::SansSerif,
        f if f.eq_ignore_ascii_case("monospace") => FontFamily::Monospace,
        f => FontFamily::Named(f.into()),
    };
    Ok(style)
}

/// Returns the numeric part of a `<n>px` or `<n>px/<line-height>` token.
fn size_token(token: &str) -> Option<&str> {
    let size = token.split('/').next()?;
    let number = size
        .strip_suffix("px")
        .or_else(|| size.strip_suffix("PX"))?;
    (!number.is_empty()).then_some(number)
}

fn apply_prefix_token(style: &mut TextStyle, token: &str) {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "italic" => style.font_style = FontStyle::Italic,
        "oblique" => style.font_style = FontStyle::Oblique,
        "bold" | "bolder" => style.font_weight = FontWeight::BOLD,
        "lighter" => style.font_weight = FontWeight(300),
        other => {
            if let Ok(weight) = other.parse::<u16>() {
                if (100..=900).contains(&weight) {
                    style.font_weight = FontWeight(weight);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn parses_plain_size_and_generic_family() {
        let style = parse_css_font("12px sans-serif").expect("valid font");
        assert_eq!(style, TextStyle::new(12.0));
    }

    #[test]
    fn parses_prefix_keywords_and_named_family() {
        let style = parse_css_font("italic bold 10px/1.2 'Helvetica Neue', Arial")
            .expect("valid font");
        assert_eq!(style.font_size, 10.0);
        assert_eq!(style.font_style, FontStyle::Italic);
        assert_eq!(style.font_weight, FontWeight::BOLD);
        assert_eq!(style.font_family, FontFamily::Named("Helvetica Neue".into()));
    }

    #[test]
    fn numeric_weight_is_kept() {
        let style = parse_css_font("600 9.5px monospace").expect("valid font");
        assert_eq!(style.font_weight, FontWeight(600));
        assert_eq!(style.font_family, FontFamily::Monospace);
    }

    #[test]
    fn rejects_missing_pieces() {
        assert_eq!(parse_css_font("   "), Err(FontParseError::Empty));
        assert!(matches!(
            parse_css_font("bold serif"),
            Err(FontParseError::MissingSize(_))
        ));
        assert!(matches!(
            parse_css_font("12px"),
            Err(FontParseError::MissingFamily(_))
        ));
        assert!(matches!(
            parse_css_font("-3px serif"),
            Err(FontParseError::InvalidSize(_))
        ));
        assert!(matches!(
            parse_css_font("abcpx serif"),
            Err(FontParseError::InvalidSize(_))
        ));
    }
}
