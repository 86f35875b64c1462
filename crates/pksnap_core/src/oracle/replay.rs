//! Replay backend: answers oracle queries from a recorded capture.
//!
//! A capture is one JSON object holding the responses a live decoder gave
//! for each query, optionally gzip-compressed:
//!
//! ```json
//! {
//!   "gameInfo": { "gameVersion": "FireRed", "generation": "3" },
//!   "trainerInfo": { "ot": "RED", "tid": 5, "sid": 1, "gender": 0, "money": 3000 },
//!   "secondsPlayed": 3725,
//!   "eventFlags": { "2049": true },
//!   "inventory": [ { "pouchType": "Items", "items": [] } ],
//!   "pokedex": [ { "species": 1, "seen": true, "caught": false } ],
//!   "party": [ { "species": 25, "box": -1, "slot": 0 } ],
//!   "boxes": [ { "species": 1, "box": 0, "slot": 3 } ],
//!   "partySlots": { "0": { "species": 25, "...": "..." } },
//!   "boxSlots": { "0": { "3": { "species": 1, "...": "..." } } },
//!   "boxNames": ["BOX 1"],
//!   "coins": 120,
//!   "hallOfFame": [],
//!   "secretBase": {},
//!   "extras": { "rivalName": "BLUE" }
//! }
//! ```
//!
//! A field that is absent answers as a failed query, as does one recorded
//! in the oracle's error-shaped form `{"error": "..."}`. Both degrade the
//! affected output to its default downstream instead of failing the run.

use std::io::Read;

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::{
    ExtraQuery, FieldResult, OracleError, RawGameInfo, RawPokedexEntry, RawPokemonDetail, RawPouch,
    RawSlotSummary, RawTrainerInfo, SaveDecoder, SaveSession,
};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Default, Clone, Copy)]
pub struct ReplayDecoder;

impl ReplayDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl SaveDecoder for ReplayDecoder {
    type Session = ReplaySession;

    fn open(&self, bytes: &[u8]) -> Result<ReplaySession, OracleError> {
        let root: JsonValue = if bytes.starts_with(&GZIP_MAGIC) {
            let mut decoded = Vec::new();
            GzDecoder::new(bytes)
                .read_to_end(&mut decoded)
                .map_err(|e| OracleError::new(format!("failed to decompress capture: {e}")))?;
            serde_json::from_slice(&decoded)
        } else {
            serde_json::from_slice(bytes)
        }
        .map_err(|e| OracleError::new(format!("capture is not valid JSON: {e}")))?;

        match root {
            JsonValue::Object(fields) => Ok(ReplaySession { fields }),
            other => Err(OracleError::new(format!(
                "capture root must be an object, got {other}"
            ))),
        }
    }
}

#[derive(Debug)]
pub struct ReplaySession {
    fields: JsonMap<String, JsonValue>,
}

impl ReplaySession {
    fn raw(&self, name: &str) -> FieldResult<&JsonValue> {
        let value = self
            .fields
            .get(name)
            .ok_or_else(|| OracleError::missing(name))?;
        if let Some(message) = error_marker(value) {
            return Err(OracleError::new(message));
        }
        Ok(value)
    }

    fn field<T: DeserializeOwned>(&self, name: &str) -> FieldResult<T> {
        let value = self.raw(name)?;
        serde_json::from_value(value.clone())
            .map_err(|e| OracleError::new(format!("malformed {name} capture: {e}")))
    }

    fn keyed(&self, name: &str, key: &str) -> FieldResult<&JsonValue> {
        let table = self.raw(name)?;
        let table = table
            .as_object()
            .ok_or_else(|| OracleError::new(format!("{name} capture is not an object")))?;
        table
            .get(key)
            .ok_or_else(|| OracleError::new(format!("{name} capture has no entry {key:?}")))
    }
}

fn detail_from(name: &str, value: &JsonValue) -> FieldResult<RawPokemonDetail> {
    if let Some(message) = error_marker(value) {
        return Err(OracleError::new(message));
    }
    serde_json::from_value(value.clone())
        .map_err(|e| OracleError::new(format!("malformed {name} capture: {e}")))
}

impl SaveSession for ReplaySession {
    fn game_info(&self) -> FieldResult<RawGameInfo> {
        self.field("gameInfo")
    }

    fn trainer_info(&self) -> FieldResult<RawTrainerInfo> {
        self.field("trainerInfo")
    }

    fn seconds_played(&self) -> FieldResult<u64> {
        self.field("secondsPlayed")
    }

    fn event_flag(&self, index: u32) -> FieldResult<bool> {
        let value = self.keyed("eventFlags", &index.to_string())?;
        value
            .as_bool()
            .ok_or_else(|| OracleError::new(format!("event flag {index} capture is not a boolean")))
    }

    fn pouches(&self) -> FieldResult<Vec<RawPouch>> {
        self.field("inventory")
    }

    fn pokedex(&self) -> FieldResult<Vec<RawPokedexEntry>> {
        self.field("pokedex")
    }

    fn party_summaries(&self) -> FieldResult<Vec<RawSlotSummary>> {
        self.field("party")
    }

    fn box_summaries(&self) -> FieldResult<Vec<RawSlotSummary>> {
        self.field("boxes")
    }

    fn party_slot(&self, slot: usize) -> FieldResult<RawPokemonDetail> {
        let value = self.keyed("partySlots", &slot.to_string())?;
        detail_from("partySlots", value)
    }

    fn box_slot(&self, box_index: usize, slot: usize) -> FieldResult<RawPokemonDetail> {
        let boxes = self.keyed("boxSlots", &box_index.to_string())?;
        let value = boxes
            .as_object()
            .and_then(|slots| slots.get(&slot.to_string()))
            .ok_or_else(|| {
                OracleError::new(format!("boxSlots capture has no entry {box_index}/{slot}"))
            })?;
        detail_from("boxSlots", value)
    }

    fn box_names(&self) -> FieldResult<Vec<String>> {
        self.field("boxNames")
    }

    fn coins(&self) -> FieldResult<u64> {
        self.field("coins")
    }

    fn hall_of_fame(&self) -> FieldResult<Vec<JsonValue>> {
        self.field("hallOfFame")
    }

    fn secret_base(&self) -> FieldResult<JsonValue> {
        self.raw("secretBase").cloned()
    }

    fn extra(&self, query: ExtraQuery) -> FieldResult<JsonValue> {
        let value = self.keyed("extras", query.key())?;
        if let Some(message) = error_marker(value) {
            return Err(OracleError::new(message));
        }
        Ok(value.clone())
    }
}

fn error_marker(value: &JsonValue) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    Some(match error.as_str() {
        Some(text) => text.to_string(),
        None => error.to_string(),
    })
}
