//! Core library for voxstat.
//!
//! Stores per-user transcriptions and answers three questions about them:
//! which words a user says most, which short phrases recur in their speech,
//! and which other users talk most like them.
//!
//! # Modules
//!
//! - [`record`] - The stored transcription record and user id rules
//! - [`ingest`] - Validation, normalization, and storage of new text
//! - [`store`] - JSON Lines and in-memory persistence
//! - [`corpus`] - Per-user and global text views over stored records
//! - [`analysis`] - Word frequency, phrase, and similarity analytics
//! - [`engine`] - Per-user queries tying storage and analysis together
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use voxstat_core::{Engine, Passthrough, TranscriptStore, ingest};
//!
//! let store = TranscriptStore::open("transcripts.jsonl");
//! ingest(&store, &Passthrough, "alice", "the cat sat on the mat", Some("en"))
//!     .expect("ingest failed");
//!
//! let engine = Engine::new(store);
//! let report = engine.word_frequency("alice").expect("query failed");
//! println!("{:?}", report.user_frequency);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod record;
pub mod store;
pub mod text;

pub use analysis::{
    FrequencyReport, PhraseCount, PhraseReport, ReportKind, SimilarUser, SimilarityOutcome,
    UserReport, WordCount,
};
pub use config::{Config, ConfigLoader, LogLevel};
pub use corpus::{Corpus, CorpusProvider, RecordBoundaries};
pub use engine::{Engine, EngineSettings};
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, StoreError, StoreResult,
};
pub use ingest::{ImportEntry, Normalized, Normalizer, Passthrough, ingest, ingest_entry};
pub use record::TextRecord;
pub use store::{MemoryStore, RecordSink, TranscriptStore};

/// Default cap on input file size (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
