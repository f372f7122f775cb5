use domino_cli::run_with_input;
use serial_test::serial;
use std::io::Cursor;

/// Input that eventually finds a legal move in any position: every tile
/// number in turn, with a side answer after each.
fn patient_player(cycles: usize) -> Vec<u8> {
    "1\nl\n2\nl\n3\nl\n4\nl\n5\nl\n6\nl\n7\nl\n"
        .repeat(cycles)
        .into_bytes()
}

fn play(args: &[&str], input: Vec<u8>) -> (i32, String, String) {
    for v in [
        "DOMINO_CONFIG",
        "DOMINO_SEED",
        "DOMINO_TARGET",
        "DOMINO_HAND_SIZE",
        "DOMINO_PLAYERS",
    ] {
        unsafe { std::env::remove_var(v) };
    }
    let mut input = Cursor::new(input);
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
fn quick_quit() {
    let (code, out, _) = play(
        &["domino", "play", "--players", "Ana,Ben", "--seed", "42"],
        b"q\n".to_vec(),
    );
    assert_eq!(code, 0);
    assert!(out.starts_with("play: players=Ana,Ben target=100 seed=42\n"));
    assert!(out.contains("Round 1: "));
    assert!(out.ends_with("Rounds played: 0 (quit)\n"));
}

#[test]
#[serial]
fn same_seed_same_session() {
    let args = ["domino", "play", "--players", "Ana,Ben,Cy", "--seed", "11", "--target", "15"];
    let a = play(&args, patient_player(2000));
    let b = play(&args, patient_player(2000));
    assert_eq!(a, b);
}

#[test]
#[serial]
fn full_game_to_target() {
    let (code, out, _) = play(
        &["domino", "play", "--players", "Ana,Ben", "--seed", "8", "--target", "10"],
        patient_player(4000),
    );
    assert_eq!(code, 0);
    assert!(out.contains(" wins the game with "), "{}", out);
    assert!(out.contains("Scores: Ana "));
    assert!(out.ends_with(" (completed)\n"));
}

#[test]
#[serial]
fn rejected_placements_are_reported() {
    let (code, _, err) = play(
        &["domino", "play", "--players", "Ana,Ben", "--seed", "8", "--target", "10"],
        patient_player(4000),
    );
    assert_eq!(code, 0);
    // Tiles that do not fit and side answers given at the tile prompt
    assert!(err.contains("Error: "));
    assert!(err.contains("Unrecognized tile number: l"));
}

#[test]
#[serial]
fn round_log_has_one_line_per_round() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("logs").join("rounds.jsonl");
    let log_arg = log.to_string_lossy().into_owned();
    let (code, out, _) = play(
        &[
            "domino", "play", "--players", "Ana,Ben", "--seed", "8", "--target", "10", "--log",
            &log_arg,
        ],
        patient_player(4000),
    );
    assert_eq!(code, 0);

    let rounds: usize = out
        .lines()
        .find_map(|l| l.strip_prefix("Rounds played: "))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .unwrap();
    let content = std::fs::read_to_string(&log).unwrap();
    let records: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), rounds);

    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec["round"], i as u64 + 1);
        assert_eq!(rec["seed"], 8);
        let id = rec["round_id"].as_str().unwrap();
        assert_eq!(id.len(), 15);
        assert!(id.ends_with(&format!("-{:06}", i + 1)));
        assert!(rec["ts"].is_string());
        assert!(!rec["actions"].as_array().unwrap().is_empty());
    }
    let last_scores: Vec<u64> = records
        .last()
        .unwrap()["scores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_u64().unwrap())
        .collect();
    assert!(last_scores.iter().any(|&s| s >= 10));
}

#[test]
#[serial]
fn single_player_is_rejected() {
    let (code, out, err) = play(&["domino", "play", "--players", "Solo"], Vec::new());
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Engine error"), "{}", err);
}

#[test]
#[serial]
fn unreadable_input_is_an_error_not_a_quit() {
    let (code, out, err) = play(
        &["domino", "play", "--players", "Ana,Ben", "--seed", "3"],
        vec![0xff, 0xfe, b'\n'],
    );
    assert_eq!(code, 2);
    assert!(!out.contains("(quit)"), "{}", out);
    assert!(err.starts_with("Error: I/O error: "), "{}", err);
}
