use std::collections::HashSet;

use domino_engine::boneyard::Boneyard;
use domino_engine::errors::GameError;
use domino_engine::tile::{full_set, Orientation, Tile, FULL_SET_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn full_set_has_28_distinct_pairs_covering_every_combination() {
    let set = full_set();
    assert_eq!(set.len(), FULL_SET_SIZE);
    let pairs: HashSet<(u8, u8)> = set.iter().map(|t| (t.low(), t.high())).collect();
    assert_eq!(pairs.len(), 28);
    for i in 0..=6u8 {
        for j in i..=6u8 {
            assert!(pairs.contains(&(i, j)), "missing [{}|{}]", i, j);
        }
    }
}

#[test]
fn full_set_order_is_deterministic() {
    assert_eq!(full_set(), full_set());
    assert_eq!(full_set()[0], Tile::with_orientation(0, 0, Orientation::Vertical).unwrap());
    assert_eq!(full_set()[27].pip_total(), 12);
}

#[test]
fn doubles_are_laid_crosswise() {
    for t in full_set() {
        let expected = if t.is_double() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        assert_eq!(t.orientation(), expected, "{}", t);
    }
}

#[test]
fn tile_rejects_out_of_range_pips() {
    assert_eq!(Tile::new(7, 1), Err(GameError::InvalidPip(7)));
    assert_eq!(Tile::new(0, 9), Err(GameError::InvalidPip(9)));
}

#[test]
fn can_connect_checks_all_four_combinations() {
    let a = Tile::new(1, 4).unwrap();
    assert!(a.can_connect(&Tile::new(1, 6).unwrap()));
    assert!(a.can_connect(&Tile::new(6, 1).unwrap()));
    assert!(a.can_connect(&Tile::new(4, 0).unwrap()));
    assert!(a.can_connect(&Tile::new(2, 4).unwrap()));
    assert!(!a.can_connect(&Tile::new(2, 3).unwrap()));
}

#[test]
fn flip_swaps_halves_and_keeps_orientation() {
    let t = Tile::with_orientation(2, 5, Orientation::Vertical).unwrap();
    let f = t.flip();
    assert_eq!((f.low(), f.high()), (5, 2));
    assert_eq!(f.orientation(), Orientation::Vertical);
    assert!(f.same_pips(&t));
    assert_eq!(f.flip(), t);
    assert_eq!(t.to_string(), "[2|5]");
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut a = Boneyard::new();
    let mut b = Boneyard::new();
    a.shuffle(&mut ChaCha20Rng::seed_from_u64(12345));
    b.shuffle(&mut ChaCha20Rng::seed_from_u64(12345));
    let x: Vec<Tile> = a.tiles().copied().collect();
    let y: Vec<Tile> = b.tiles().copied().collect();
    assert_eq!(x, y, "same seed must yield identical order");
}

#[test]
fn shuffle_rebuilds_a_full_pile() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let mut pile = Boneyard::new();
    for _ in 0..10 {
        pile.draw().unwrap();
    }
    pile.shuffle(&mut rng);
    assert_eq!(pile.len(), 28);
    let unique: HashSet<Tile> = pile.tiles().copied().collect();
    assert_eq!(unique.len(), 28);
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut a = Boneyard::new();
    let mut b = Boneyard::new();
    a.shuffle(&mut ChaCha20Rng::seed_from_u64(1));
    b.shuffle(&mut ChaCha20Rng::seed_from_u64(2));
    let x: Vec<Tile> = a.tiles().copied().collect();
    let y: Vec<Tile> = b.tiles().copied().collect();
    assert_ne!(x, y, "different seeds should produce different orders (high probability)");
}

#[test]
fn draw_on_empty_pile_fails_without_mutation() {
    let mut pile = Boneyard::new();
    for i in 0..28 {
        assert!(pile.draw().is_ok(), "draw {} should succeed", i);
    }
    assert!(pile.is_empty());
    assert_eq!(pile.draw(), Err(GameError::EmptyPile));
    assert_eq!(pile.len(), 0);
    assert!(pile.is_empty());
}
