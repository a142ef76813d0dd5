//! Pipeline driver: template load, selection, rendering, assembly, and
//! persistence as one strict sequential pass.

use std::path::PathBuf;

use tracing::info;

use crate::config::GeneratorConfig;
use crate::document::assemble;
use crate::errors::GeneratorError;
use crate::index::{DatasetIndex, SkippedRecord};
use crate::render::{EmptyReason, render_cards};
use crate::transport::fs::{load_text, save_text, save_text_verified};

/// Summary of one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of cards written into the document.
    pub cards: usize,
    /// Profiles skipped during rendering, with positions and reasons.
    pub skipped: Vec<SkippedRecord>,
    /// Where the document was written.
    pub dest: PathBuf,
    /// Whether the destination was re-read and byte-compared.
    pub verified: bool,
}

/// Generate the document for `skin` (empty string = no filter) and write it.
///
/// The template is loaded fresh from disk, the index selection rendered
/// (untitled profiles are skipped and reported), the result assembled and
/// written whole-file to the destination. With verification enabled the
/// destination is re-read and must match byte-for-byte. An empty selection
/// substitutes the fallback matching its cause: no data at all versus a
/// filter that matched nothing.
pub fn generate(
    config: &GeneratorConfig,
    index: &DatasetIndex,
    skin: &str,
) -> Result<GenerateReport, GeneratorError> {
    let template = load_text(&config.template_path)?;

    let selection = index.select(skin);
    let empty = if skin.is_empty() {
        EmptyReason::NoData
    } else {
        EmptyReason::NoMatches
    };
    let batch = render_cards(&selection, empty);

    let document = assemble(&template, &batch.html)?;

    if config.verify_after_save {
        save_text_verified(&config.dest_path, &document)?;
    } else {
        save_text(&config.dest_path, &document)?;
    }

    info!(
        dest = %config.dest_path.display(),
        cards = batch.cards,
        skipped = batch.skipped.len(),
        filter = skin,
        "generated document"
    );
    Ok(GenerateReport {
        cards: batch.cards,
        skipped: batch.skipped,
        dest: config.dest_path.clone(),
        verified: config.verify_after_save,
    })
}
