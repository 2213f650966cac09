//! Integration tests for the ficha CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

const SMITHING_ID: &str = "00000000-0000-4000-8000-000000000001";

fn hero() -> Value {
    json!({
        "name": "Ana",
        "level": 6,
        "attributes": {
            "might": 3,
            "agility": 2,
            "vigor": 1,
            "intellect": 4,
            "perception": 2,
            "essence": 3
        },
        "skills": [
            { "id": "acrobatics", "key_attribute": "agility", "proficiency": "versed" },
            { "id": "melee", "key_attribute": "might", "is_signature": true },
            {
                "id": "arcana",
                "key_attribute": "intellect",
                "proficiency": "adept",
                "custom_uses": [{ "name": "learning", "bonus": 1 }]
            },
            { "id": "craft", "key_attribute": "might", "selected_craft": SMITHING_ID }
        ],
        "crafts": [
            { "id": SMITHING_ID, "name": "Smithing", "level": 3, "attribute": "might" }
        ],
        "luck": { "level": 3 },
        "spellcasting": {
            "abilities": [
                {
                    "id": "wizardry",
                    "skill": "arcana",
                    "attribute": "intellect",
                    "casting_bonus": 1
                }
            ],
            "known_spells": [
                {
                    "spell_id": "light",
                    "name": "Light",
                    "circle": 1,
                    "matrix": "arcane",
                    "spellcasting_skill": "arcana"
                }
            ],
            "power_points": { "current": 5, "max": 8 },
            "spell_points": 3
        }
    })
}

/// Write a character to a temp dir and return (dir, path).
fn character_file(character: &Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("character.json");
    fs::write(&path, serde_json::to_string_pretty(character).unwrap()).unwrap();
    (dir, path)
}

fn ficha() -> Command {
    let mut cmd = Command::cargo_bin("ficha").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// sheet
// ---------------------------------------------------------------------------

#[test]
fn sheet_lists_every_pool() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("sheet")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("acrobatics")
                .and(predicate::str::contains("2d10"))
                .and(predicate::str::contains("5d6"))
                .and(predicate::str::contains("Smithing"))
                .and(predicate::str::contains("3d6"))
                .and(predicate::str::contains("cast (wizardry)"))
                .and(predicate::str::contains("5d8")),
        );
}

#[test]
fn sheet_marks_penalty_rolls() {
    let mut character = hero();
    character["is_overloaded"] = json!(true);
    let (_dir, path) = character_file(&character);
    ficha()
        .arg("sheet")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2d10 (menor)")
                .and(predicate::str::contains("penalty; overloaded -2")),
        );
}

#[test]
fn sheet_handles_huge_luck_level() {
    let mut character = hero();
    character["luck"] = json!({ "level": 1_000_000_000u32 });
    let (_dir, path) = character_file(&character);
    ficha()
        .arg("sheet")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1000000000d12").and(predicate::str::contains("rolls 8")));
}

#[test]
fn sheet_rejects_bad_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    ficha()
        .arg("sheet")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character file"));
}

#[test]
fn sheet_rejects_missing_file() {
    ficha()
        .args(["sheet", "/nonexistent/character.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_skill_with_seed() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("roll")
        .arg(&path)
        .args(["acrobatics", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("acrobatics")
                .and(predicate::str::contains("2d10"))
                .and(predicate::str::contains("net")),
        );
}

#[test]
fn roll_is_repeatable_with_seed() {
    let (_dir, path) = character_file(&hero());
    let run = || {
        ficha()
            .arg("roll")
            .arg(&path)
            .args(["melee", "--seed", "7"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn roll_legacy_uses_d20() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("roll")
        .arg(&path)
        .args(["acrobatics", "--legacy", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20+4").and(predicate::str::contains("= ")));
}

#[test]
fn roll_ability_casts() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("roll")
        .arg(&path)
        .args(["wizardry", "--seed", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("cast (wizardry)").and(predicate::str::contains("5d8")),
        );
}

#[test]
fn roll_many_prints_history() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("roll")
        .arg(&path)
        .args(["melee", "-n", "3", "--seed", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Roll History")
                .and(predicate::str::contains("**melee** 5d6")),
        );
}

#[test]
fn roll_unknown_target_fails() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("roll")
        .arg(&path)
        .arg("juggling")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill or ability"));
}

#[test]
fn roll_skill_not_on_sheet_fails() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("roll")
        .arg(&path)
        .arg("stealth")
        .assert()
        .failure()
        .stderr(predicate::str::contains("character has no skill 'stealth'"));
}

#[test]
fn roll_craft_without_selection_fails() {
    let mut character = hero();
    character["skills"][3] = json!({ "id": "craft", "key_attribute": "might" });
    let (_dir, path) = character_file(&character);
    ficha()
        .arg("roll")
        .arg(&path)
        .arg("craft")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no craft selected"));
}

// ---------------------------------------------------------------------------
// odds
// ---------------------------------------------------------------------------

#[test]
fn odds_shows_distribution() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("odds")
        .arg(&path)
        .arg("acrobatics")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("At least")
                .and(predicate::str::contains("100.0%"))
                .and(predicate::str::contains("expected net successes")),
        );
}

// ---------------------------------------------------------------------------
// learn
// ---------------------------------------------------------------------------

#[test]
fn learn_first_circle() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("learn")
        .arg(&path)
        .args(["--circle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chance to learn: 51%"));
}

#[test]
fn learn_first_spell_loses_bonus() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("learn")
        .arg(&path)
        .args(["--circle", "1", "--first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chance to learn: 21%"));
}

#[test]
fn learn_clamps_to_one() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("learn")
        .arg(&path)
        .args(["--circle", "8", "--other", "-50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chance to learn: 1%"));
}

#[test]
fn learn_extreme_modifier_clamps_to_ninety_nine() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("learn")
        .arg(&path)
        .args(["--circle", "1", "--other", "2147483647"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chance to learn: 99%"));
}

#[test]
fn learn_rejects_bad_circle() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("learn")
        .arg(&path)
        .args(["--circle", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("circle"));
}

// ---------------------------------------------------------------------------
// spells
// ---------------------------------------------------------------------------

#[test]
fn spells_show_pools() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("spells")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("power per round: 9")
                .and(predicate::str::contains("PP: 5/8"))
                .and(predicate::str::contains("PF: 3/8"))
                .and(predicate::str::contains("8th circle")),
        );
}

#[test]
fn spells_channel() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("spells")
        .arg(&path)
        .args(["--channel", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("channeled: +4").and(predicate::str::contains("PF: 7/8")),
        );
}

#[test]
fn spells_channel_rejects_four_actions() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("spells")
        .arg(&path)
        .args(["--channel", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot channel for 4 actions"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_valid_character() {
    let (_dir, path) = character_file(&hero());
    ficha()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 'Ana'"));
}

#[test]
fn check_fails_on_two_signatures() {
    let mut character = hero();
    character["skills"][0]["is_signature"] = json!(true);
    let (_dir, path) = character_file(&character);
    ficha()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than one signature skill"));
}

#[test]
fn check_warns_but_passes() {
    let mut character = hero();
    character["spellcasting"]["spell_points"] = json!(12);
    let (_dir, path) = character_file(&character);
    ficha()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("above the power-point maximum"))
        .stdout(predicate::str::contains("1 warning"));
}
