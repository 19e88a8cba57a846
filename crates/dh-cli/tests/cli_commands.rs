//! Integration tests for the CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn dh() -> Command {
    Command::cargo_bin("dh").unwrap()
}

/// Create a temp directory with a one-character party file.
fn test_party(hope: u8) -> TempDir {
    let dir = TempDir::new().unwrap();
    let party = party_path(&dir);
    dh().args(["new", "Marlowe", "--agility", "2", "--presence", "-1"])
        .args(["--hope", &hope.to_string()])
        .args(["-p", party.to_str().unwrap()])
        .assert()
        .success();
    dir
}

fn party_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("party.json")
}

fn stored_hope(path: &Path) -> u64 {
    let party: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    party["characters"][0]["hope"].as_u64().unwrap()
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_outcome() {
    dh().args(["roll", "-m", "1", "-d", "12", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total:")
                .and(predicate::str::contains("Hope Die:"))
                .and(predicate::str::contains("Fear Die:")),
        );
}

#[test]
fn roll_json_is_consistent() {
    for seed in 0..20 {
        let outcome = json_output(dh().args([
            "roll",
            "-m",
            "-2",
            "-d",
            "13",
            "--bonus-die",
            "--json",
            "--seed",
            &seed.to_string(),
        ]));
        let hope = outcome["hope_die"].as_i64().unwrap();
        let fear = outcome["fear_die"].as_i64().unwrap();
        let bonus = outcome["bonus_die"].as_i64().unwrap();
        assert!((1..=6).contains(&bonus));
        assert_eq!(outcome["total"].as_i64().unwrap(), hope + fear + bonus - 2);
        assert_eq!(outcome["is_critical"].as_bool().unwrap(), hope == fear);
        if hope == fear {
            assert_eq!(outcome["category"], "critical-success");
        }
    }
}

#[test]
fn roll_same_seed_same_result() {
    let a = json_output(dh().args(["roll", "--json", "--seed", "42"]));
    let b = json_output(dh().args(["roll", "--json", "--seed", "42"]));
    assert_eq!(a, b);
}

#[test]
fn roll_rejects_zero_difficulty() {
    dh().args(["roll", "-d", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("difficulty must be positive"));
}

// ---------------------------------------------------------------------------
// new / list
// ---------------------------------------------------------------------------

#[test]
fn new_then_list() {
    let dir = test_party(3);
    dh().args(["list", "-p", party_path(&dir).to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Marlowe")
                .and(predicate::str::contains("◆◆◆◇◇◇"))
                .and(predicate::str::contains("1 characters")),
        );
    assert_eq!(stored_hope(&party_path(&dir)), 3);
}

#[test]
fn list_clamps_hand_edited_hope() {
    let dir = test_party(2);
    let party = party_path(&dir);
    let mut json: Value = serde_json::from_str(&fs::read_to_string(&party).unwrap()).unwrap();
    json["characters"][0]["hope"] = Value::from(9);
    fs::write(&party, json.to_string()).unwrap();

    dh().args(["list", "-p", party.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("◆◆◆◆◆◆ 6").and(predicate::str::contains(" 9").not()));
}

#[test]
fn new_rejects_duplicate_name() {
    let dir = test_party(0);
    dh().args(["new", "marlowe", "-p", party_path(&dir).to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_rejects_hope_above_max() {
    let dir = TempDir::new().unwrap();
    dh().args(["new", "Quill", "--hope", "7"])
        .args(["-p", party_path(&dir).to_str().unwrap()])
        .assert()
        .failure();
    assert!(!party_path(&dir).exists());
}

#[test]
fn list_missing_party_fails() {
    let dir = TempDir::new().unwrap();
    dh().args(["list", "-p", party_path(&dir).to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// trait
// ---------------------------------------------------------------------------

#[test]
fn trait_roll_applies_hope_economy() {
    for seed in 0..10 {
        let dir = test_party(2);
        let party = party_path(&dir);
        let report = json_output(dh().args([
            "trait",
            "marlowe",
            "agility",
            "--spend-hope",
            "--json",
            "--seed",
            &seed.to_string(),
            "-p",
            party.to_str().unwrap(),
        ]));

        assert_eq!(report["hope_before"], 2);
        assert_eq!(report["effects"][0]["kind"], "hope_spent");
        assert_eq!(report["outcome"]["modifier"], 2);
        let category = report["outcome"]["category"].as_str().unwrap();
        let expected = match category {
            "critical-success" | "success-with-hope" | "failure-with-hope" => 2,
            _ => 1,
        };
        assert_eq!(report["hope_after"], expected);
        assert_eq!(stored_hope(&party), expected);
    }
}

#[test]
fn trait_roll_experience_adds_two() {
    let dir = test_party(1);
    let report = json_output(dh().args([
        "trait",
        "Marlowe",
        "presence",
        "--experience",
        "--json",
        "--seed",
        "3",
        "-p",
        party_path(&dir).to_str().unwrap(),
    ]));
    assert_eq!(report["outcome"]["modifier"], 1);
    assert_eq!(report["outcome"]["bonus_die"], Value::Null);
}

#[test]
fn trait_roll_without_hope_is_a_warning() {
    let dir = test_party(1);
    let party = party_path(&dir);
    let before = fs::read_to_string(&party).unwrap();

    dh().args(["trait", "Marlowe", "agility", "--spend-hope", "--experience"])
        .args(["-p", party.to_str().unwrap()])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("nothing was rolled")
                .and(predicate::str::contains("trait roll refused")),
        )
        .stdout(predicate::str::contains("Hope Die").not());

    assert_eq!(fs::read_to_string(&party).unwrap(), before);
}

#[test]
fn trait_roll_unknown_trait() {
    let dir = test_party(0);
    dh().args(["trait", "Marlowe", "charisma"])
        .args(["-p", party_path(&dir).to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown trait: charisma"));
}

#[test]
fn trait_roll_unknown_character() {
    let dir = test_party(0);
    dh().args(["trait", "Quill", "agility"])
        .args(["-p", party_path(&dir).to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no character named 'Quill'"));
}

#[test]
fn trait_roll_bad_difficulty_charges_nothing() {
    let dir = test_party(2);
    let party = party_path(&dir);
    dh().args(["trait", "Marlowe", "agility", "--spend-hope", "-d", "-4"])
        .args(["-p", party.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("difficulty must be positive"));
    assert_eq!(stored_hope(&party), 2);
}

// ---------------------------------------------------------------------------
// hope
// ---------------------------------------------------------------------------

#[test]
fn hope_add_and_remove() {
    let dir = test_party(5);
    let party = party_path(&dir);
    let p = party.to_str().unwrap();

    dh().args(["hope", "Marlowe", "add", "-p", p])
        .assert()
        .success()
        .stdout(predicate::str::contains("(6/6)"));
    dh().args(["hope", "Marlowe", "add", "-p", p])
        .assert()
        .success()
        .stderr(predicate::str::contains("maximum"));
    assert_eq!(stored_hope(&party), 6);

    dh().args(["hope", "Marlowe", "remove", "-p", p])
        .assert()
        .success()
        .stdout(predicate::str::contains("(5/6)"));
    assert_eq!(stored_hope(&party), 5);
}

#[test]
fn hope_remove_at_zero_stays_zero() {
    let dir = test_party(0);
    let party = party_path(&dir);
    dh().args(["hope", "Marlowe", "remove", "-p", party.to_str().unwrap()])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("no Hope to remove")
                .and(predicate::str::contains("hope spend rejected")),
        );
    assert_eq!(stored_hope(&party), 0);
}
