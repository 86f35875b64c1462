use std::fmt::Write as _;

use pksnap_core::pipeline::{Badges, CreatureRecord, Snapshot, StorageLocation};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// The persisted `saveData` document, field for field.
    #[default]
    SaveDataV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    TrainerReport,
}

pub fn render_json(snapshot: &Snapshot, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::SaveDataV1 => serde_json::to_value(snapshot).unwrap_or(JsonValue::Null),
    }
}

pub fn render_text(snapshot: &Snapshot) -> String {
    render_text_styled(snapshot, TextStyle::TrainerReport)
}

pub fn render_text_styled(snapshot: &Snapshot, style: TextStyle) -> String {
    match style {
        TextStyle::TrainerReport => trainer_report(snapshot),
    }
}

fn trainer_report(snapshot: &Snapshot) -> String {
    let player = &snapshot.player_info;
    let progress = &snapshot.progress;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Game: {} (Gen {})",
        player.game_info.game_version, player.game_info.generation
    );
    let _ = writeln!(
        out,
        "Trainer: {} ({})  ID {}/{}",
        player.player_name, player.gender, player.trainer_id, player.secret_id
    );
    let _ = writeln!(
        out,
        "Money: ${}  Coins: {}",
        player.money, progress.game_coins
    );
    let _ = writeln!(
        out,
        "Time played: {}h {:02}m {:02}s",
        player.time_played.hours, player.time_played.minutes, player.time_played.seconds
    );

    let earned = earned_badges(&progress.badges);
    let _ = write!(out, "Badges: {}/8", earned.len());
    if earned.is_empty() {
        out.push('\n');
    } else {
        let _ = writeln!(out, " ({})", earned.join(", "));
    }
    let _ = writeln!(
        out,
        "Pokedex: seen {}, caught {}",
        progress.pokedex.seen.len(),
        progress.pokedex.caught.len()
    );

    let _ = writeln!(out, "Party ({}):", snapshot.pokemon.party.len());
    for record in &snapshot.pokemon.party {
        let _ = writeln!(out, "  - {}", creature_line(record));
    }
    let _ = writeln!(out, "Box ({}):", snapshot.pokemon.boxed.len());
    for record in &snapshot.pokemon.boxed {
        let _ = writeln!(out, "  - {}", creature_line(record));
    }

    if !snapshot.pc.box_names.is_empty() {
        let _ = writeln!(out, "Boxes: {}", snapshot.pc.box_names.join(", "));
    }
    let _ = writeln!(
        out,
        "Inventory: items {}, key items {}, balls {}, TM/HM {}, berries {}, PC {}",
        snapshot.inventory.items.len(),
        snapshot.inventory.key_items.len(),
        snapshot.inventory.balls.len(),
        snapshot.inventory.tm_hms.len(),
        snapshot.inventory.berries.len(),
        snapshot.pc.pc_items.len(),
    );

    out
}

fn creature_line(record: &CreatureRecord) -> String {
    let name = record
        .nickname
        .as_deref()
        .filter(|nick| !nick.is_empty() && *nick != record.species_name)
        .map(|nick| format!("{nick} ({})", record.species_name))
        .unwrap_or_else(|| record.species_name.clone());
    let shiny = if record.is_shiny { " *shiny*" } else { "" };
    let at = match record.storage_location {
        StorageLocation::Party { slot } => format!("party slot {slot}"),
        StorageLocation::Box { box_index, slot } => format!("box {box_index} slot {slot}"),
    };
    format!("{name} Lv.{}{shiny} @ {at}", record.level)
}

fn earned_badges(badges: &Badges) -> Vec<&'static str> {
    [
        ("Boulder", badges.boulder),
        ("Cascade", badges.cascade),
        ("Thunder", badges.thunder),
        ("Rainbow", badges.rainbow),
        ("Soul", badges.soul),
        ("Marsh", badges.marsh),
        ("Volcano", badges.volcano),
        ("Earth", badges.earth),
    ]
    .into_iter()
    .filter_map(|(name, earned)| earned.then_some(name))
    .collect()
}
