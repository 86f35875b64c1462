use std::collections::HashSet;

use crate::gender::{Gender, TrainerGender};
use crate::oracle::{RawPokemonDetail, SaveSession};

use super::error::ExtractError;
use super::guard::{FieldOutcome, guard};
use super::snapshot::{
    CreatureRecord, MetData, NamedId, StatBlock, StatLine, StorageLocation, TrainerRef,
};

/// Enumerate the active roster and materialize every occupied slot.
///
/// The summary query is foundational: its failure fails the extraction.
/// Individual detail fetches are soft: an unreadable slot is skipped.
pub fn extract_party<S: SaveSession>(session: &S) -> Result<Vec<CreatureRecord>, ExtractError> {
    let summaries = session
        .party_summaries()
        .map_err(|e| ExtractError::structural(format!("party summaries: {e}")))?;

    let mut records = Vec::new();
    for (slot, summary) in summaries.iter().enumerate() {
        if summary.species == 0 {
            continue;
        }
        match guard("party slot detail", || session.party_slot(slot)) {
            FieldOutcome::Ok(detail) => {
                records.push(map_detail(detail, StorageLocation::Party { slot }));
            }
            FieldOutcome::Failed(reason) => {
                tracing::warn!(slot, %reason, "skipping unreadable party slot");
            }
        }
    }
    Ok(records)
}

/// Enumerate long-term storage and materialize every occupied slot.
///
/// Same structural/soft split as the party pass. Summaries without both
/// coordinates, or repeating a `(box, slot)` pair, are skipped so that
/// every record keeps a unique storage location.
pub fn extract_boxes<S: SaveSession>(session: &S) -> Result<Vec<CreatureRecord>, ExtractError> {
    let summaries = session
        .box_summaries()
        .map_err(|e| ExtractError::structural(format!("storage summaries: {e}")))?;

    let mut taken = HashSet::new();
    let mut records = Vec::new();
    for summary in summaries {
        if summary.species == 0 {
            continue;
        }
        let coordinates = summary
            .box_index
            .and_then(|b| usize::try_from(b).ok())
            .zip(summary.slot);
        let Some((box_index, slot)) = coordinates else {
            tracing::warn!(?summary, "skipping storage summary without coordinates");
            continue;
        };
        if !taken.insert((box_index, slot)) {
            tracing::warn!(box_index, slot, "skipping duplicate storage summary");
            continue;
        }
        match guard("box slot detail", || session.box_slot(box_index, slot)) {
            FieldOutcome::Ok(detail) => {
                records.push(map_detail(detail, StorageLocation::Box { box_index, slot }));
            }
            FieldOutcome::Failed(reason) => {
                tracing::warn!(box_index, slot, %reason, "skipping unreadable box slot");
            }
        }
    }
    Ok(records)
}

/// Map one raw detail record into the canonical creature record.
///
/// Stat arrays map positionally (hp, atk, def, spa, spd, spe); move
/// entries with id 0 are dropped with order preserved.
pub fn map_detail(detail: RawPokemonDetail, storage_location: StorageLocation) -> CreatureRecord {
    let moves = detail
        .moves
        .into_iter()
        .zip(detail.move_names)
        .filter(|&(id, _)| id > 0)
        .map(|(id, name)| NamedId { id, name })
        .collect();

    CreatureRecord {
        storage_location,
        species_id: detail.species,
        species_name: detail.species_name,
        nickname: detail.nickname,
        level: detail.level,
        is_shiny: detail.is_shiny,
        gender: Gender::from_raw(detail.gender),
        ability: NamedId {
            id: detail.ability,
            name: detail.ability_name,
        },
        nature: detail.nature_name,
        held_item: NamedId {
            id: detail.held_item,
            name: detail.held_item_name,
        },
        met_data: MetData {
            location: detail.met_location_name,
            level: detail.met_level,
            ball: detail.ball,
        },
        stats: StatBlock {
            ivs: StatLine::from_array(detail.ivs),
            evs: StatLine::from_array(detail.evs),
            total: StatLine::from_array(detail.stats),
        },
        moves,
        original_trainer: TrainerRef {
            name: detail.ot_name,
            gender: TrainerGender::from_raw(detail.ot_gender),
        },
    }
}
