//! Master dump: every known oracle query, guarded, in one document.
//!
//! Unlike the snapshot this is not schema-normalized: each field reports
//! `{success, data}` or `{success, error}` so that generation-specific
//! gaps stay visible instead of silently defaulting.

use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue, json};

use crate::oracle::{ExtraQuery, FieldResult, SaveSession};

use super::guard::{FieldOutcome, guard};

pub(super) fn master_dump<S: SaveSession>(session: &S) -> JsonValue {
    let mut doc = JsonMap::new();
    let mut put = |key: &str, value: JsonValue| {
        doc.insert(key.to_string(), value);
    };

    put("saveInfo", entry(guard("game info", || session.game_info())));
    put(
        "trainerInfo",
        entry(guard("trainer info", || session.trainer_info())),
    );
    for query in [
        ExtraQuery::TrainerCard,
        ExtraQuery::Appearance,
        ExtraQuery::RivalName,
        ExtraQuery::Badges,
    ] {
        put(query.key(), extra_entry(session, query));
    }

    put(
        "inventory",
        entry(guard("inventory pouches", || session.pouches())),
    );
    put("pokedex", entry(guard("pokedex", || session.pokedex())));

    put("boxNames", entry(guard("box names", || session.box_names())));
    for query in [ExtraQuery::BoxWallpapers, ExtraQuery::BattleBox, ExtraQuery::Daycare] {
        put(query.key(), extra_entry(session, query));
    }

    put(ExtraQuery::BattlePoints.key(), extra_entry(session, ExtraQuery::BattlePoints));
    put("coins", entry(guard("coins", || session.coins())));
    for query in [ExtraQuery::Records, ExtraQuery::BattleFacility] {
        put(query.key(), extra_entry(session, query));
    }
    put(
        "hallOfFame",
        entry(guard("hall of fame", || session.hall_of_fame())),
    );

    put(
        "timePlayed",
        entry(guard("seconds played", || session.seconds_played())),
    );
    for query in [ExtraQuery::SecondsToStart, ExtraQuery::SecondsToFame] {
        put(query.key(), extra_entry(session, query));
    }

    for query in [
        ExtraQuery::Mailbox,
        ExtraQuery::MysteryGifts,
        ExtraQuery::MysteryGiftFlags,
    ] {
        put(query.key(), extra_entry(session, query));
    }

    let mut features = JsonMap::new();
    features.insert(
        "secretBase".to_string(),
        entry(guard("secret base", || session.secret_base())),
    );
    for query in [
        ExtraQuery::Entralink,
        ExtraQuery::PokePelago,
        ExtraQuery::FestivalPlaza,
        ExtraQuery::PokeJobs,
    ] {
        features.insert(query.key().to_string(), extra_entry(session, query));
    }
    put("features", JsonValue::Object(features));

    put(
        "pokemon",
        entry(guard("pokemon details", || collect_raw_details(session))),
    );

    JsonValue::Object(doc)
}

fn extra_entry<S: SaveSession>(session: &S, query: ExtraQuery) -> JsonValue {
    entry(guard(query.key(), || session.extra(query)))
}

fn entry<T: Serialize>(outcome: FieldOutcome<T>) -> JsonValue {
    match outcome {
        FieldOutcome::Ok(value) => match serde_json::to_value(value) {
            Ok(data) => json!({ "success": true, "data": data }),
            Err(e) => json!({ "success": false, "error": e.to_string() }),
        },
        FieldOutcome::Failed(reason) => json!({ "success": false, "error": reason }),
    }
}

/// Raw detail records across both storage domains, occupied slots only.
/// Unreadable individual slots are skipped, mirroring the snapshot passes.
fn collect_raw_details<S: SaveSession>(session: &S) -> FieldResult<Vec<JsonValue>> {
    let party = session.party_summaries()?;
    let boxes = session.box_summaries()?;

    let mut details = Vec::new();
    for (slot, summary) in party.iter().enumerate() {
        if summary.species == 0 {
            continue;
        }
        match session.party_slot(slot) {
            Ok(detail) => details.extend(serde_json::to_value(detail).ok()),
            Err(e) => tracing::debug!(slot, reason = %e, "dump skipping party slot"),
        }
    }
    for summary in boxes {
        if summary.species == 0 {
            continue;
        }
        let Some((box_index, slot)) = summary
            .box_index
            .and_then(|b| usize::try_from(b).ok())
            .zip(summary.slot)
        else {
            continue;
        };
        match session.box_slot(box_index, slot) {
            Ok(detail) => details.extend(serde_json::to_value(detail).ok()),
            Err(e) => tracing::debug!(box_index, slot, reason = %e, "dump skipping box slot"),
        }
    }
    Ok(details)
}
