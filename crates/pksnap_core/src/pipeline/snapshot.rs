//! Normalized snapshot types.
//!
//! Field names and nesting here are a compatibility contract with the
//! persisted `saveData` document; serde renames produce that document
//! shape exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::gender::{Gender, TrainerGender};

/// One point-in-time extraction of a player's save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snapshot {
    pub last_uploaded: DateTime<Utc>,
    pub save_loaded: bool,
    pub player_info: PlayerInfo,
    pub progress: Progress,
    pub inventory: Inventory,
    pub pc: PcStorage,
    pub pokemon: PokemonCollections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerInfo {
    pub player_name: String,
    pub trainer_id: u32,
    pub secret_id: u32,
    pub gender: TrainerGender,
    pub money: u32,
    pub time_played: TimePlayed,
    pub game_info: GameInfo,
    pub secret_base: JsonValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimePlayed {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimePlayed {
    /// Split an elapsed-seconds counter into h/m/s by integer division.
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: total % 3600 / 60,
            seconds: total % 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GameInfo {
    pub game_version: String,
    pub generation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Progress {
    pub badges: Badges,
    pub pokedex: PokedexSummary,
    pub game_coins: u64,
    pub hall_of_fame_entries: Vec<JsonValue>,
}

/// The eight fixed badge slots of the persisted document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Badges {
    pub boulder: bool,
    pub cascade: bool,
    pub thunder: bool,
    pub rainbow: bool,
    pub soul: bool,
    pub marsh: bool,
    pub volcano: bool,
    pub earth: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PokedexSummary {
    pub seen: Vec<u32>,
    pub caught: Vec<u32>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Inventory {
    pub items: Vec<ItemStack>,
    pub key_items: Vec<ItemStack>,
    pub balls: Vec<ItemStack>,
    pub tm_hms: Vec<ItemStack>,
    pub berries: Vec<ItemStack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemStack {
    pub id: u32,
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PcStorage {
    pub box_names: Vec<String>,
    pub pc_items: Vec<ItemStack>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PokemonCollections {
    pub party: Vec<CreatureRecord>,
    #[serde(rename = "box")]
    pub boxed: Vec<CreatureRecord>,
}

/// Canonical record for one in-game creature instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatureRecord {
    pub storage_location: StorageLocation,
    pub species_id: u32,
    pub species_name: String,
    pub nickname: Option<String>,
    pub level: u32,
    pub is_shiny: bool,
    pub gender: Gender,
    pub ability: NamedId,
    pub nature: String,
    pub held_item: NamedId,
    pub met_data: MetData,
    pub stats: StatBlock,
    pub moves: Vec<NamedId>,
    pub original_trainer: TrainerRef,
}

/// Identifies exactly one storage slot, either in the active party or in
/// a long-term-storage box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageLocation {
    Party {
        slot: usize,
    },
    Box {
        #[serde(rename = "box")]
        box_index: usize,
        slot: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedId {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetData {
    #[serde(rename = "metLocation")]
    pub location: String,
    #[serde(rename = "metLevel")]
    pub level: u32,
    pub ball: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatBlock {
    pub ivs: StatLine,
    pub evs: StatLine,
    pub total: StatLine,
}

/// Six named stat values. Positional order when built from a raw stat
/// array is hp, attack, defense, special-attack, special-defense, speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatLine {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatLine {
    pub fn from_array(values: [u16; 6]) -> Self {
        Self {
            hp: values[0],
            atk: values[1],
            def: values[2],
            spa: values[3],
            spd: values[4],
            spe: values[5],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerRef {
    pub name: String,
    pub gender: TrainerGender,
}
