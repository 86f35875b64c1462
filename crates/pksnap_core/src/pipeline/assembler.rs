use chrono::Utc;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::gender::TrainerGender;
use crate::oracle::{SaveDecoder, SaveSession};

use super::badges::{BadgeFlags, FRLG_BADGE_FLAGS, resolve_badges};
use super::creatures::{extract_boxes, extract_party};
use super::dump::master_dump;
use super::error::ExtractError;
use super::guard::guard;
use super::inventory::{normalize_pokedex, normalize_pouches};
use super::snapshot::{
    GameInfo, Inventory, PcStorage, PlayerInfo, PokemonCollections, Progress, Snapshot, TimePlayed,
};

/// Drives one extraction: opens an oracle session over the save bytes,
/// folds every field through the specialized components, and returns one
/// normalized snapshot.
///
/// The session lives exactly as long as one call; it is dropped (and the
/// decoder's handle released) on every exit path, fatal failures included.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<D> {
    decoder: D,
    badge_flags: BadgeFlags,
}

impl<D: SaveDecoder> Extractor<D> {
    pub fn new(decoder: D) -> Self {
        Self::with_badge_flags(decoder, FRLG_BADGE_FLAGS)
    }

    pub fn with_badge_flags(decoder: D, badge_flags: BadgeFlags) -> Self {
        Self {
            decoder,
            badge_flags,
        }
    }

    /// Extract one normalized snapshot from raw save-file bytes.
    pub fn extract(&self, bytes: &[u8]) -> Result<Snapshot, ExtractError> {
        let session = self.open(bytes)?;
        assemble(&session, &self.badge_flags)
    }

    /// Produce the unnormalized master dump: every known query, guarded,
    /// reported as `{success, data}` or `{success, error}` per field.
    pub fn dump(&self, bytes: &[u8]) -> Result<JsonValue, ExtractError> {
        let session = self.open(bytes)?;
        Ok(master_dump(&session))
    }

    fn open(&self, bytes: &[u8]) -> Result<D::Session, ExtractError> {
        self.decoder
            .open(bytes)
            .map_err(|e| ExtractError::load(format!("failed to load save: {e}")))
    }
}

fn assemble<S: SaveSession>(
    session: &S,
    badge_flags: &BadgeFlags,
) -> Result<Snapshot, ExtractError> {
    let game = guard("game info", || session.game_info()).required("game info")?;
    let trainer = guard("trainer info", || session.trainer_info()).required("trainer info")?;
    let seconds = guard("seconds played", || session.seconds_played()).unwrap_or(0);

    let badges = resolve_badges(session, badge_flags);
    let buckets = normalize_pouches(guard("inventory pouches", || session.pouches()).or_default());
    let pokedex = normalize_pokedex(guard("pokedex", || session.pokedex()).or_default());

    let party = extract_party(session)?;
    let boxed = extract_boxes(session)?;

    let box_names = guard("box names", || session.box_names()).or_default();
    let game_coins = guard("coins", || session.coins()).unwrap_or(0);
    let hall_of_fame_entries = guard("hall of fame", || session.hall_of_fame()).or_default();
    let secret_base = guard("secret base", || session.secret_base())
        .unwrap_or(JsonValue::Object(JsonMap::new()));

    Ok(Snapshot {
        last_uploaded: Utc::now(),
        save_loaded: true,
        player_info: PlayerInfo {
            player_name: trainer.ot,
            trainer_id: trainer.tid,
            secret_id: trainer.sid,
            gender: TrainerGender::from_raw(trainer.gender),
            money: trainer.money,
            time_played: TimePlayed::from_seconds(seconds),
            game_info: GameInfo {
                game_version: game.game_version,
                generation: game.generation,
            },
            secret_base,
        },
        progress: Progress {
            badges,
            pokedex,
            game_coins,
            hall_of_fame_entries,
        },
        inventory: Inventory {
            items: buckets.items,
            key_items: buckets.key_items,
            balls: buckets.balls,
            tm_hms: buckets.tm_hms,
            berries: buckets.berries,
        },
        pc: PcStorage {
            box_names,
            pc_items: buckets.pc_items,
        },
        pokemon: PokemonCollections { party, boxed },
    })
}
