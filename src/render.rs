//! Card rendering: one HTML fragment per normalized profile.
//!
//! Rendering is pure; no I/O happens here. Fragments are produced once, in
//! dataset order, and concatenated by the document assembler.

use tracing::warn;

use crate::constants::{attrs, fallback};
use crate::errors::GeneratorError;
use crate::index::SkippedRecord;
use crate::record::AnimalProfile;
use crate::types::CardHtml;

/// Why a selection came back empty, used to pick the fallback fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// The dataset itself held no records.
    NoData,
    /// A filter was chosen but nothing matched it.
    NoMatches,
}

/// Fallback fragment substituted when no card was rendered, so the page
/// never ships a dangling empty placeholder region.
pub fn fallback_fragment(reason: EmptyReason) -> &'static str {
    match reason {
        EmptyReason::NoData => fallback::NO_DATA,
        EmptyReason::NoMatches => fallback::NO_MATCHES,
    }
}

/// A rendered selection: concatenated fragments plus skip reports.
#[derive(Debug)]
pub struct RenderedBatch {
    /// Concatenated card fragments (or the fallback fragment).
    pub html: CardHtml,
    /// Number of cards actually rendered.
    pub cards: usize,
    /// Profiles that could not be rendered, with their selection positions.
    pub skipped: Vec<SkippedRecord>,
}

/// Render one profile into a self-contained card fragment.
///
/// Fails when the profile has no Name; `position` (the profile's position in
/// the selected sequence) is carried in the error for diagnosis. Detail
/// lines follow the fixed attribute order; absent attributes produce no line.
pub fn render_card(profile: &AnimalProfile, position: usize) -> Result<CardHtml, GeneratorError> {
    let name = profile
        .name()
        .ok_or(GeneratorError::UntitledRecord { position })?;

    let mut card = String::with_capacity(256);
    card.push_str("            <li class=\"cards__item\">\n");
    card.push_str("                <div class=\"card__title\">");
    card.push_str(&escape(name));
    card.push_str("</div>\n");
    card.push_str("                <div class=\"card__text\">\n");
    card.push_str("                    <ul class=\"cards__list\">\n");
    for (key, value) in profile.iter() {
        if key == attrs::NAME {
            continue;
        }
        card.push_str("                        <li><strong>");
        card.push_str(key);
        card.push_str(":</strong> ");
        card.push_str(&escape(value));
        card.push_str("</li>\n");
    }
    card.push_str("                    </ul>\n");
    card.push_str("                </div>\n");
    card.push_str("            </li>");
    Ok(card)
}

/// Render a selected sequence, skipping (and reporting) untitled profiles.
///
/// Fragments are separated by exactly one blank line. When nothing renders,
/// the fallback fragment for `empty` is substituted instead so the assembled
/// document never looks broken.
pub fn render_cards(selection: &[&AnimalProfile], empty: EmptyReason) -> RenderedBatch {
    let mut fragments = Vec::with_capacity(selection.len());
    let mut skipped = Vec::new();
    for (position, profile) in selection.iter().enumerate() {
        match render_card(profile, position) {
            Ok(card) => fragments.push(card),
            Err(reason) => {
                warn!(position, %reason, "skipping profile during rendering");
                skipped.push(SkippedRecord { position, reason });
            }
        }
    }

    let cards = fragments.len();
    let html = if cards == 0 {
        fallback_fragment(empty).to_string()
    } else {
        fragments.join("\n\n")
    };
    RenderedBatch {
        html,
        cards,
        skipped,
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
