use crate::oracle::{RawPokedexEntry, RawPouch};

use super::snapshot::{ItemStack, PokedexSummary};

/// The six fixed routing targets for raw pouches. `pc_items` feeds the
/// snapshot's `pc` section; the rest feed `inventory`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PouchBuckets {
    pub items: Vec<ItemStack>,
    pub key_items: Vec<ItemStack>,
    pub balls: Vec<ItemStack>,
    pub tm_hms: Vec<ItemStack>,
    pub berries: Vec<ItemStack>,
    pub pc_items: Vec<ItemStack>,
}

/// Regroup raw pouches into the fixed buckets by exact label match.
///
/// Items with a non-positive count are dropped; a pouch whose label
/// matches no bucket is ignored; repeated labels append in input order.
pub fn normalize_pouches(pouches: Vec<RawPouch>) -> PouchBuckets {
    let mut buckets = PouchBuckets::default();
    for pouch in pouches {
        let bucket = match pouch.pouch_type.as_str() {
            "Items" => &mut buckets.items,
            "KeyItems" => &mut buckets.key_items,
            "Balls" => &mut buckets.balls,
            "TMHMs" => &mut buckets.tm_hms,
            "Berries" => &mut buckets.berries,
            "PCItems" => &mut buckets.pc_items,
            other => {
                tracing::debug!(pouch_type = other, "ignoring unrecognized pouch");
                continue;
            }
        };
        bucket.extend(pouch.items.into_iter().filter(|item| item.count > 0).map(
            |item| ItemStack {
                id: item.item_id,
                name: item.item_name,
                quantity: item.count as u64,
            },
        ));
    }
    buckets
}

/// Collapse seen/caught flags into two independent species-id lists.
///
/// One pass, input order preserved, no deduplication; the two lists do
/// not constrain each other.
pub fn normalize_pokedex(entries: Vec<RawPokedexEntry>) -> PokedexSummary {
    let mut pokedex = PokedexSummary::default();
    for entry in entries {
        if entry.seen {
            pokedex.seen.push(entry.species);
        }
        if entry.caught {
            pokedex.caught.push(entry.species);
        }
    }
    pokedex
}
