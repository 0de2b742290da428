//! Single-page PDF summary of an employment contract.
//!
//! Deterministic A4 layout: a bold title, eight
//! plain text lines at a fixed left margin with a fixed vertical step, and an
//! italic footer near the bottom. Line building is a pure function so the
//! visible content can be tested without touching the PDF backend.
//!
//! Overflow policy: the notes line is the only unbounded input, so it is
//! truncated to [`MAX_NOTES_CHARS`] characters with an ellipsis; body text
//! never reaches the footer region.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

use crate::models::contract::Contract;

const TITLE: &str = "Contrat de travail - Assistante Maternelle";
const FOOTER: &str = "Assmat Pro — Généré automatiquement";

/// Maximum characters kept on the notes line before truncation.
const MAX_NOTES_CHARS: usize = 120;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

/// The eight body lines, top to bottom. Absent notes render as a dash.
pub fn contract_lines(contract: &Contract) -> Vec<String> {
    let notes = contract
        .notes
        .as_deref()
        .map(truncate_notes)
        .unwrap_or_else(|| "-".to_string());

    vec![
        format!("Parent employeur: {}", contract.parent_email),
        format!("Assistante maternelle: {}", contract.assistant_email),
        format!("Enfant: {}", contract.child_name),
        format!("Date de début: {}", contract.start_date.format("%d/%m/%Y")),
        format!("Heures hebdomadaires: {}", contract.hours_per_week),
        format!("Taux horaire: {} €", contract.hourly_rate),
        format!("Jours de congés payés: {}", contract.paid_vacation_days),
        format!("Notes: {notes}"),
    ]
}

fn truncate_notes(notes: &str) -> String {
    if notes.chars().count() <= MAX_NOTES_CHARS {
        return notes.to_string();
    }
    let mut truncated: String = notes.chars().take(MAX_NOTES_CHARS).collect();
    truncated.push('…');
    truncated
}

/// Renders the finalized one-page document and returns the raw PDF bytes.
pub fn render_contract(contract: &Contract) -> Result<Vec<u8>, RenderError> {
    // A4, 20mm left margin; y runs bottom-up like the PDF coordinate system.
    let (doc, page, layer) = PdfDocument::new(TITLE, Mm(210.0), Mm(297.0), "page");
    let layer = doc.get_page(page).get_layer(layer);

    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let oblique = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    layer.use_text(TITLE, 16.0, Mm(20.0), Mm(277.0), &bold);

    let mut y = 265.0;
    for line in contract_lines(contract) {
        layer.use_text(line, 11.0, Mm(20.0), Mm(y), &regular);
        y -= 8.0;
    }

    layer.use_text(FOOTER, 9.0, Mm(20.0), Mm(20.0), &oblique);

    doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
}
