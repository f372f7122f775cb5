use domino_cli::run_with_input;
use serial_test::serial;
use std::io::{Cursor, Write};

const VARS: [&str; 5] = [
    "DOMINO_CONFIG",
    "DOMINO_SEED",
    "DOMINO_TARGET",
    "DOMINO_HAND_SIZE",
    "DOMINO_PLAYERS",
];

fn clear_env() {
    for v in VARS {
        unsafe { std::env::remove_var(v) };
    }
}

fn run_cmd(args: &[&str]) -> (i32, String, String) {
    let mut input = Cursor::new(Vec::new());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn deal_is_reproducible_from_a_seed() {
    clear_env();
    let (code_a, out_a, _) = run_cmd(&["domino", "deal", "--seed", "2024"]);
    let (code_b, out_b, _) = run_cmd(&["domino", "deal", "--seed", "2024"]);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(out_a, out_b);
    assert!(out_a.starts_with("Seed: 2024\n"));
    assert!(out_a.contains("Player 1: "));
    assert!(out_a.contains("Player 2: "));
    assert!(out_a.ends_with("Boneyard: 14 tiles\n"));
}

#[test]
#[serial]
fn deal_shows_28_distinct_tiles_for_four_players() {
    clear_env();
    let (code, out, _) = run_cmd(&["domino", "deal", "--players", "4", "--seed", "5"]);
    assert_eq!(code, 0);

    let mut tiles: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("Player "))
        .flat_map(|l| l.split_whitespace().filter(|w| w.contains(":[")))
        .map(|w| w.split_once(':').unwrap().1)
        .collect();
    assert_eq!(tiles.len(), 28);
    tiles.sort_unstable();
    tiles.dedup();
    assert_eq!(tiles.len(), 28);
    assert!(out.contains("Boneyard: 0 tiles"));
}

#[test]
#[serial]
fn deal_with_too_many_seats_fails() {
    clear_env();
    let (code, out, err) = run_cmd(&["domino", "deal", "--players", "5", "--seed", "1"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Draw attempted on an empty boneyard"), "{}", err);
}

#[test]
#[serial]
fn seed_flag_beats_env_and_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 1\nplayers = [\"Ana\", \"Ben\", \"Cy\"]").unwrap();
    unsafe {
        std::env::set_var("DOMINO_CONFIG", file.path());
        std::env::set_var("DOMINO_SEED", "2");
    }

    let (_, from_env, _) = run_cmd(&["domino", "deal"]);
    let (_, from_flag, _) = run_cmd(&["domino", "deal", "--seed", "3"]);
    clear_env();

    assert!(from_env.starts_with("Seed: 2\n"));
    assert!(from_env.contains("Cy: "), "roster comes from the file");
    assert!(from_flag.starts_with("Seed: 3\n"));
}

#[test]
#[serial]
fn cfg_reports_sources() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "target_score = 61").unwrap();
    unsafe {
        std::env::set_var("DOMINO_CONFIG", file.path());
        std::env::set_var("DOMINO_PLAYERS", "Ana, Ben");
    }
    let (code, out, err) = run_cmd(&["domino", "cfg"]);
    clear_env();

    assert_eq!(code, 0, "stderr: {}", err);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["target_score"]["value"], 61);
    assert_eq!(v["target_score"]["source"], "file");
    assert_eq!(v["players"]["value"], serde_json::json!(["Ana", "Ben"]));
    assert_eq!(v["players"]["source"], "env");
    assert_eq!(v["hand_size"]["source"], "default");
    assert!(v["seed"]["value"].is_null());
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("DOMINO_CONFIG", dir.path().join("missing.toml")) };
    let (code, _, err) = run_cmd(&["domino", "cfg"]);
    clear_env();

    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"), "{}", err);
}

#[test]
fn unknown_flag_is_rejected() {
    let (code, _, err) = run_cmd(&["domino", "deal", "--hands", "3"]);
    assert_eq!(code, 2);
    assert!(err.contains("Commands:"));
}
