use pksnap_core::oracle::{RawItem, RawPokedexEntry, RawPouch};
use pksnap_core::pipeline::{TimePlayed, normalize_pokedex, normalize_pouches};

fn pouch(pouch_type: &str, items: &[(u32, &str, i64)]) -> RawPouch {
    RawPouch {
        pouch_type: pouch_type.to_string(),
        items: items
            .iter()
            .map(|&(item_id, item_name, count)| RawItem {
                item_id,
                item_name: item_name.to_string(),
                count,
            })
            .collect(),
    }
}

#[test]
fn routes_pouches_into_fixed_buckets_by_exact_label() {
    let buckets = normalize_pouches(vec![
        pouch("Items", &[(13, "Potion", 4)]),
        pouch("KeyItems", &[(450, "Bicycle", 1)]),
        pouch("Balls", &[(4, "Poke Ball", 10)]),
        pouch("TMHMs", &[(328, "TM28", 1)]),
        pouch("Berries", &[(133, "Oran Berry", 7)]),
        pouch("PCItems", &[(23, "Nugget", 2)]),
    ]);

    assert_eq!(buckets.items.len(), 1);
    assert_eq!(buckets.items[0].name, "Potion");
    assert_eq!(buckets.items[0].quantity, 4);
    assert_eq!(buckets.key_items.len(), 1);
    assert_eq!(buckets.balls.len(), 1);
    assert_eq!(buckets.tm_hms.len(), 1);
    assert_eq!(buckets.berries.len(), 1);
    assert_eq!(buckets.pc_items.len(), 1);
}

#[test]
fn drops_non_positive_counts_and_ignores_unknown_pouches() {
    let buckets = normalize_pouches(vec![
        pouch("Items", &[(13, "Potion", 4), (14, "Antidote", 0), (15, "Repel", -2)]),
        pouch("ZCrystals", &[(807, "Pikanium Z", 1)]),
    ]);

    assert_eq!(buckets.items.len(), 1);
    assert_eq!(buckets.items[0].id, 13);
    assert!(buckets.key_items.is_empty());
    assert!(buckets.pc_items.is_empty());
}

#[test]
fn repeated_pouch_labels_append_in_input_order() {
    let buckets = normalize_pouches(vec![
        pouch("Berries", &[(133, "Oran Berry", 7)]),
        pouch("Berries", &[(139, "Sitrus Berry", 2)]),
    ]);

    let names: Vec<&str> = buckets.berries.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Oran Berry", "Sitrus Berry"]);
}

#[test]
fn bucket_totals_match_recognized_positive_item_count() {
    let raw = vec![
        pouch("Items", &[(1, "a", 1), (2, "b", 0)]),
        pouch("Balls", &[(3, "c", 5), (4, "d", 2)]),
        pouch("Mystery", &[(5, "e", 9)]),
        pouch("PCItems", &[(6, "f", 1), (7, "g", -1)]),
    ];
    let recognized_positive = 4;

    let buckets = normalize_pouches(raw);
    let total = buckets.items.len()
        + buckets.key_items.len()
        + buckets.balls.len()
        + buckets.tm_hms.len()
        + buckets.berries.len()
        + buckets.pc_items.len();
    assert_eq!(total, recognized_positive);
}

#[test]
fn pokedex_flags_are_independent() {
    let pokedex = normalize_pokedex(vec![RawPokedexEntry {
        species: 1,
        seen: false,
        caught: true,
    }]);

    assert!(pokedex.seen.is_empty());
    assert_eq!(pokedex.caught, vec![1]);
}

#[test]
fn pokedex_preserves_order_and_keeps_duplicates() {
    let pokedex = normalize_pokedex(vec![
        RawPokedexEntry {
            species: 25,
            seen: true,
            caught: true,
        },
        RawPokedexEntry {
            species: 1,
            seen: true,
            caught: false,
        },
        RawPokedexEntry {
            species: 25,
            seen: true,
            caught: false,
        },
    ]);

    assert_eq!(pokedex.seen, vec![25, 1, 25]);
    assert_eq!(pokedex.caught, vec![25]);
}

#[test]
fn splits_elapsed_seconds_by_integer_division() {
    let time = TimePlayed::from_seconds(3725);
    assert_eq!(time.hours, 1);
    assert_eq!(time.minutes, 2);
    assert_eq!(time.seconds, 5);
}

#[test]
fn zero_seconds_stays_all_zero() {
    let time = TimePlayed::from_seconds(0);
    assert_eq!((time.hours, time.minutes, time.seconds), (0, 0, 0));
}

#[test]
fn exact_hour_has_no_remainder() {
    let time = TimePlayed::from_seconds(3600);
    assert_eq!((time.hours, time.minutes, time.seconds), (1, 0, 0));
}
