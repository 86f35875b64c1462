use serde::{Deserialize, Serialize};

/// Game/version metadata for a loaded save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawGameInfo {
    pub game_version: String,
    pub generation: String,
}

/// Trainer block as the oracle reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTrainerInfo {
    pub ot: String,
    pub tid: u32,
    pub sid: u32,
    pub gender: i32,
    pub money: u32,
}

/// One creature-slot summary. Roster summaries carry a negative or absent
/// box; long-term-storage summaries carry both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSlotSummary {
    pub species: u32,
    #[serde(default, rename = "box")]
    pub box_index: Option<i64>,
    #[serde(default)]
    pub slot: Option<usize>,
}

/// Full creature detail record for one occupied slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPokemonDetail {
    pub species: u32,
    pub species_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub level: u32,
    pub is_shiny: bool,
    pub gender: i32,
    pub ability: u32,
    pub ability_name: String,
    pub nature_name: String,
    pub held_item: u32,
    pub held_item_name: String,
    pub met_location_name: String,
    pub met_level: u32,
    pub ball: String,
    pub ivs: [u16; 6],
    pub evs: [u16; 6],
    pub stats: [u16; 6],
    pub moves: Vec<u32>,
    pub move_names: Vec<String>,
    #[serde(rename = "ot_Name")]
    pub ot_name: String,
    #[serde(rename = "ot_Gender")]
    pub ot_gender: i32,
}

/// One item inside a raw pouch. `count` may be zero or negative for
/// empty/garbage entries; normalization drops those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawItem {
    pub item_id: u32,
    pub item_name: String,
    pub count: i64,
}

/// One raw inventory pouch: a generation-specific type label plus items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawPouch {
    pub pouch_type: String,
    pub items: Vec<RawItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPokedexEntry {
    pub species: u32,
    pub seen: bool,
    pub caught: bool,
}

/// Generation-specific queries with no stable shape across save formats.
/// These answer as opaque JSON and most fail on most generations, which
/// the guard degrades to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraQuery {
    TrainerCard,
    Appearance,
    RivalName,
    Badges,
    BoxWallpapers,
    BattleBox,
    Daycare,
    BattlePoints,
    Records,
    BattleFacility,
    SecondsToStart,
    SecondsToFame,
    Mailbox,
    MysteryGifts,
    MysteryGiftFlags,
    Entralink,
    PokePelago,
    FestivalPlaza,
    PokeJobs,
}

impl ExtraQuery {
    pub fn key(&self) -> &'static str {
        match *self {
            Self::TrainerCard => "trainerCard",
            Self::Appearance => "appearance",
            Self::RivalName => "rivalName",
            Self::Badges => "badges",
            Self::BoxWallpapers => "boxWallpapers",
            Self::BattleBox => "battleBox",
            Self::Daycare => "daycare",
            Self::BattlePoints => "battlePoints",
            Self::Records => "records",
            Self::BattleFacility => "battleFacility",
            Self::SecondsToStart => "timeToStart",
            Self::SecondsToFame => "timeToFame",
            Self::Mailbox => "mailbox",
            Self::MysteryGifts => "mysteryGifts",
            Self::MysteryGiftFlags => "mysteryGiftFlags",
            Self::Entralink => "entralink",
            Self::PokePelago => "pokePelago",
            Self::FestivalPlaza => "festivalPlaza",
            Self::PokeJobs => "pokeJobs",
        }
    }
}
