use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use pksnap_core::oracle::ReplayDecoder;
use pksnap_core::pipeline::{ExtractErrorCode, Extractor, StorageLocation};
use serde_json::{Value as JsonValue, json};

fn detail_json(species: u32, name: &str) -> JsonValue {
    json!({
        "species": species,
        "speciesName": name,
        "nickname": null,
        "level": 36,
        "isShiny": true,
        "gender": 1,
        "ability": 31,
        "abilityName": "Lightning Rod",
        "natureName": "Timid",
        "heldItem": 155,
        "heldItemName": "Light Ball",
        "metLocationName": "Viridian Forest",
        "metLevel": 4,
        "ball": "Great Ball",
        "ivs": [31, 2, 20, 31, 25, 31],
        "evs": [0, 0, 4, 252, 0, 252],
        "stats": [95, 40, 45, 110, 60, 130],
        "moves": [85, 86, 0, 104],
        "moveNames": ["Thunderbolt", "Thunder Wave", "", "Double Team"],
        "ot_Name": "GREEN",
        "ot_Gender": 1
    })
}

fn capture() -> JsonValue {
    json!({
        "gameInfo": { "gameVersion": "LeafGreen", "generation": "3" },
        "trainerInfo": { "ot": "GREEN", "tid": 11, "sid": 7, "gender": 1, "money": 9999 },
        "secondsPlayed": 7325,
        "eventFlags": { "2049": true, "2050": false, "2051": true, "2052": false,
                        "2053": false, "2054": false, "2055": false, "2056": false },
        "inventory": [
            { "pouchType": "Items", "items": [
                { "itemId": 13, "itemName": "Potion", "count": 3 },
                { "itemId": 14, "itemName": "Antidote", "count": 0 }
            ] },
            { "pouchType": "PCItems", "items": [
                { "itemId": 23, "itemName": "Nugget", "count": 1 }
            ] }
        ],
        "pokedex": [
            { "species": 25, "seen": true, "caught": true },
            { "species": 150, "seen": true, "caught": false }
        ],
        "party": [ { "species": 25, "box": -1, "slot": 0 } ],
        "boxes": [ { "species": 0, "box": 0, "slot": 0 },
                   { "species": 150, "box": 2, "slot": 17 } ],
        "partySlots": { "0": detail_json(25, "Pikachu") },
        "boxSlots": { "2": { "17": detail_json(150, "Mewtwo") } },
        "boxNames": ["BOX 1"],
        "coins": 50,
        "hallOfFame": [ { "entry": 1 } ],
        "secretBase": { "locationName": "Route 111", "locationID": 17 },
        "extras": { "rivalName": "RED" }
    })
}

fn extract(capture: &JsonValue) -> Result<pksnap_core::pipeline::Snapshot, pksnap_core::pipeline::ExtractError> {
    let bytes = serde_json::to_vec(capture).expect("capture should serialize");
    Extractor::new(ReplayDecoder::new()).extract(&bytes)
}

#[test]
fn replays_a_full_capture_into_a_snapshot() {
    let snapshot = extract(&capture()).expect("capture should extract");

    assert_eq!(snapshot.player_info.player_name, "GREEN");
    assert_eq!(snapshot.player_info.time_played.hours, 2);
    assert_eq!(snapshot.player_info.time_played.minutes, 2);
    assert_eq!(snapshot.player_info.time_played.seconds, 5);

    assert!(snapshot.progress.badges.boulder);
    assert!(!snapshot.progress.badges.cascade);
    assert_eq!(snapshot.progress.pokedex.seen, vec![25, 150]);
    assert_eq!(snapshot.progress.pokedex.caught, vec![25]);

    assert_eq!(snapshot.inventory.items.len(), 1);
    assert_eq!(snapshot.pc.pc_items.len(), 1);
    assert_eq!(snapshot.pc.pc_items[0].name, "Nugget");

    assert_eq!(snapshot.pokemon.party.len(), 1);
    assert_eq!(snapshot.pokemon.boxed.len(), 1);
    let mewtwo = &snapshot.pokemon.boxed[0];
    assert_eq!(
        mewtwo.storage_location,
        StorageLocation::Box {
            box_index: 2,
            slot: 17
        }
    );
    assert!(mewtwo.is_shiny);
    assert_eq!(mewtwo.moves.len(), 3);
    assert_eq!(mewtwo.original_trainer.name, "GREEN");
}

#[test]
fn gzip_captures_load_identically() {
    let bytes = serde_json::to_vec(&capture()).expect("capture should serialize");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&bytes).expect("gzip write should succeed");
    let compressed = encoder.finish().expect("gzip finish should succeed");

    let extractor = Extractor::new(ReplayDecoder::new());
    let plain = extractor.extract(&bytes).expect("plain capture extracts");
    let mut gzipped = extractor
        .extract(&compressed)
        .expect("gzip capture extracts");

    gzipped.last_uploaded = plain.last_uploaded;
    assert_eq!(plain, gzipped);
}

#[test]
fn error_marked_field_degrades_to_default() {
    let mut doc = capture();
    doc["inventory"] = json!({ "error": "inventory not supported in this generation" });

    let snapshot = extract(&doc).expect("capture should still extract");
    assert!(snapshot.inventory.items.is_empty());
    assert!(snapshot.pc.pc_items.is_empty());
    // unrelated fields are unaffected
    assert_eq!(snapshot.progress.pokedex.seen, vec![25, 150]);
}

#[test]
fn non_sequence_roster_summary_is_structural() {
    let mut doc = capture();
    doc["party"] = json!("unexpected");

    let err = extract(&doc).expect_err("non-sequence party should abort");
    assert_eq!(err.code, ExtractErrorCode::Structural);
}

#[test]
fn missing_slot_capture_is_a_soft_skip() {
    let mut doc = capture();
    doc["boxSlots"] = json!({});

    let snapshot = extract(&doc).expect("capture should still extract");
    assert!(snapshot.pokemon.boxed.is_empty());
    assert_eq!(snapshot.pokemon.party.len(), 1);
}

#[test]
fn undecodable_capture_is_a_load_error() {
    let err = Extractor::new(ReplayDecoder::new())
        .extract(b"\x00\x01 not json")
        .expect_err("garbage bytes should fail to load");
    assert_eq!(err.code, ExtractErrorCode::Load);

    let err = Extractor::new(ReplayDecoder::new())
        .extract(b"[1, 2, 3]")
        .expect_err("non-object capture should fail to load");
    assert_eq!(err.code, ExtractErrorCode::Load);
}
