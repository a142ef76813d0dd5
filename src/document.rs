//! Document assembly: template fixes and placeholder substitution.
//!
//! Each step is a pure string transform applied in a fixed order. The two
//! injection steps are idempotent so a template that already carries the
//! charset declaration or the list styling is left untouched.

use crate::constants::template::{
    CHARSET_MARK, CHARSET_META, HEAD_ANCHOR, LIST_STYLE_MARK, LIST_STYLE_RULES, PLACEHOLDER,
    PLACEHOLDER_INDENT, STYLE_CLOSE_ANCHOR,
};
use crate::errors::GeneratorError;

/// Ensure a charset declaration exists right after the head anchor.
pub fn ensure_charset(template: &str) -> String {
    if template.contains(CHARSET_MARK) {
        return template.to_string();
    }
    template.replacen(
        HEAD_ANCHOR,
        &format!("{HEAD_ANCHOR}\n        {CHARSET_META}"),
        1,
    )
}

/// Ensure the card-list styling rules exist before the closing style anchor.
pub fn ensure_list_style(template: &str) -> String {
    if template.contains(LIST_STYLE_MARK) {
        return template.to_string();
    }
    template.replacen(
        STYLE_CLOSE_ANCHOR,
        &format!("{LIST_STYLE_RULES}{STYLE_CLOSE_ANCHOR}"),
        1,
    )
}

/// Replace the placeholder token with the concatenated card fragments.
///
/// The stock template indents the token to the card column; that padded form
/// is consumed together with the token when present so the substituted cards
/// keep their own indentation.
pub fn substitute_cards(template: &str, cards: &str) -> Result<String, GeneratorError> {
    if !template.contains(PLACEHOLDER) {
        return Err(GeneratorError::PlaceholderMissing {
            placeholder: PLACEHOLDER,
        });
    }
    let padded = format!("{PLACEHOLDER_INDENT}{PLACEHOLDER}");
    if template.contains(&padded) {
        Ok(template.replacen(&padded, cards, 1))
    } else {
        Ok(template.replacen(PLACEHOLDER, cards, 1))
    }
}

/// Assemble the final document text: charset fix, style fix, substitution.
///
/// Fails when the template lacks the placeholder; in that case nothing
/// should be written downstream.
pub fn assemble(template: &str, cards: &str) -> Result<String, GeneratorError> {
    let with_charset = ensure_charset(template);
    let with_style = ensure_list_style(&with_charset);
    substitute_cards(&with_style, cards)
}
