//! Stored transcription records and user identifiers.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Longest accepted user identifier, in characters.
pub const MAX_USER_ID_LEN: usize = 50;

/// Language code assumed when the caller does not declare one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// User ids are opaque but must be a single printable token.
static USER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+$").expect("valid regex"));

/// One stored utterance.
///
/// Records are written once at ingestion and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextRecord {
    /// User who produced the transcription.
    pub owner: String,
    /// Normalized (English) text.
    pub content: String,
    /// Language code of the text before normalization.
    pub source_language: String,
}

impl TextRecord {
    /// Build a record, validating the owner and content.
    pub fn new(
        owner: impl Into<String>,
        content: impl Into<String>,
        source_language: impl Into<String>,
    ) -> AnalysisResult<Self> {
        let owner = owner.into();
        let content = content.into();
        validate_user_id(&owner)?;
        if content.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(Self {
            owner,
            content,
            source_language: source_language.into(),
        })
    }
}

/// Reject identifiers that are empty, too long, or contain whitespace.
pub fn validate_user_id(id: &str) -> AnalysisResult<()> {
    let reason = if id.is_empty() {
        "must not be empty"
    } else if id.chars().count() > MAX_USER_ID_LEN {
        "longer than 50 characters"
    } else if !USER_ID_PATTERN.is_match(id) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };
    Err(AnalysisError::InvalidUserId {
        id: id.to_string(),
        reason,
    })
}
