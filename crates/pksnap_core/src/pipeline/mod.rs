mod assembler;
mod badges;
mod creatures;
mod dump;
mod error;
mod guard;
mod inventory;
mod snapshot;

pub use assembler::Extractor;
pub use badges::{BadgeFlags, FRLG_BADGE_FLAGS, resolve_badges};
pub use creatures::{extract_boxes, extract_party, map_detail};
pub use error::{ExtractError, ExtractErrorCode};
pub use guard::{FieldOutcome, guard};
pub use inventory::{PouchBuckets, normalize_pokedex, normalize_pouches};
pub use snapshot::{
    Badges, CreatureRecord, GameInfo, Inventory, ItemStack, MetData, NamedId, PcStorage,
    PlayerInfo, PokedexSummary, PokemonCollections, Progress, Snapshot, StatBlock, StatLine,
    StorageLocation, TimePlayed, TrainerRef,
};
