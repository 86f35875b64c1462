//! Boundary to the external save-decoding oracle.
//!
//! The oracle is a black box that decodes a binary save image and answers
//! field-level queries against a loaded session. This module fixes the
//! query surface the pipeline consumes; `replay` provides the concrete
//! backend shipped with this repository.

pub mod replay;
mod types;

use std::error::Error;
use std::fmt;

use serde_json::Value as JsonValue;

pub use replay::{ReplayDecoder, ReplaySession};
pub use types::{
    ExtraQuery, RawGameInfo, RawItem, RawPokedexEntry, RawPokemonDetail, RawPouch, RawSlotSummary,
    RawTrainerInfo,
};

/// Failure of a single oracle call: a load that could not produce a
/// session, or a field query that could not produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleError {
    pub message: String,
}

impl OracleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(format!("field {field:?} is not available in this save"))
    }
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for OracleError {}

pub type FieldResult<T> = Result<T, OracleError>;

/// Opens oracle sessions from raw save-file bytes.
pub trait SaveDecoder {
    type Session: SaveSession;

    fn open(&self, bytes: &[u8]) -> Result<Self::Session, OracleError>;
}

/// Field-level query surface over one loaded save.
///
/// Every query is read-only and independent of the others; calls are
/// issued serially against `&self`. The session owns whatever handle the
/// backing decoder allocated and must release it when dropped, so holding
/// the session in one scope gives release on every exit path.
pub trait SaveSession {
    fn game_info(&self) -> FieldResult<RawGameInfo>;
    fn trainer_info(&self) -> FieldResult<RawTrainerInfo>;
    fn seconds_played(&self) -> FieldResult<u64>;
    fn event_flag(&self, index: u32) -> FieldResult<bool>;
    fn pouches(&self) -> FieldResult<Vec<RawPouch>>;
    fn pokedex(&self) -> FieldResult<Vec<RawPokedexEntry>>;
    fn party_summaries(&self) -> FieldResult<Vec<RawSlotSummary>>;
    fn box_summaries(&self) -> FieldResult<Vec<RawSlotSummary>>;
    fn party_slot(&self, slot: usize) -> FieldResult<RawPokemonDetail>;
    fn box_slot(&self, box_index: usize, slot: usize) -> FieldResult<RawPokemonDetail>;
    fn box_names(&self) -> FieldResult<Vec<String>>;
    fn coins(&self) -> FieldResult<u64>;
    fn hall_of_fame(&self) -> FieldResult<Vec<JsonValue>>;
    fn secret_base(&self) -> FieldResult<JsonValue>;
    fn extra(&self, query: ExtraQuery) -> FieldResult<JsonValue>;
}
