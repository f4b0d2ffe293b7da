//! Word-list ingestion types shared with the analysis service.
//!
//! The service replies to `POST /analyze` with an ordered list of weighted
//! keywords. Ingestion normalizes that reply into entries the layout engine
//! can trust: weights are clamped to \[0, 1\] and non-finite values collapse
//! to zero so every downstream per-frame computation stays total.

use serde::{Deserialize, Serialize};

/// One weighted keyword as delivered by the analysis service.
///
/// Order in the surrounding list is significant: it drives color and
/// position assignment. Duplicate words are legal independent entries.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub weight: f32,
}

/// Request body for the `/analyze` endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Reply envelope from the `/analyze` endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalyzeResponse {
    pub words: Vec<WordEntry>,
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("analysis service reported failure: {0}")]
    ServiceFailure(String),
}

/// Validate a service reply and normalize its entries.
///
/// An unsuccessful reply is an error; a successful reply with an empty word
/// list is not (the scene simply renders its backdrop).
pub fn ingest(response: AnalyzeResponse) -> Result<Vec<WordEntry>, WordListError> {
    if !response.success {
        return Err(WordListError::ServiceFailure(response.message));
    }
    Ok(normalize(response.words))
}

/// Clamp every weight into \[0, 1\], collapsing non-finite values to zero.
pub fn normalize(mut entries: Vec<WordEntry>) -> Vec<WordEntry> {
    for entry in &mut entries {
        if !entry.weight.is_finite() {
            log::warn!(
                "word {:?} carried non-finite weight {}; using 0.0",
                entry.word,
                entry.weight
            );
            entry.weight = 0.0;
        } else if entry.weight < 0.0 || entry.weight > 1.0 {
            log::warn!(
                "word {:?} carried out-of-range weight {}; clamping",
                entry.word,
                entry.weight
            );
            entry.weight = entry.weight.clamp(0.0, 1.0);
        }
    }
    entries
}
