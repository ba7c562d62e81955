//! Perft against published reference counts.
//!
//! Deep counts are `#[ignore]`d; run them with `cargo test --release -- --ignored`.

use pinray_core::{ArrayBoard, Position, perft};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8";
const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R";

fn position(placement: &str) -> Position {
    let board: ArrayBoard = placement.parse().expect("valid placement");
    Position::new(&board).expect("valid position")
}

// ── Starting position ───────────────────────────────────────────────────────

#[test]
fn startpos_depth_3() {
    assert_eq!(perft(&Position::starting_position(), 3), 8_902);
}

#[test]
#[ignore] // slow
fn startpos_depth_4() {
    assert_eq!(perft(&Position::starting_position(), 4), 197_281);
}

#[test]
#[ignore] // slow
fn startpos_depth_5() {
    assert_eq!(perft(&Position::starting_position(), 5), 4_865_609);
}

// ── Kiwipete: castling, pins, en passant, promotions ────────────────────────

#[test]
fn kiwipete_depth_1() {
    assert_eq!(perft(&position(KIWIPETE), 1), 48);
}

#[test]
fn kiwipete_depth_2() {
    assert_eq!(perft(&position(KIWIPETE), 2), 2_039);
}

#[test]
#[ignore] // slow
fn kiwipete_depth_3() {
    assert_eq!(perft(&position(KIWIPETE), 3), 97_862);
}

#[test]
#[ignore] // slow
fn kiwipete_depth_4() {
    assert_eq!(perft(&position(KIWIPETE), 4), 4_085_603);
}

// ── Position 3: rank pins and en-passant discovered checks ──────────────────

#[test]
fn position_3_depth_1() {
    assert_eq!(perft(&position(POSITION_3), 1), 14);
}

#[test]
fn position_3_depth_2() {
    assert_eq!(perft(&position(POSITION_3), 2), 191);
}

#[test]
fn position_3_depth_3() {
    assert_eq!(perft(&position(POSITION_3), 3), 2_812);
}

#[test]
#[ignore] // slow
fn position_3_depth_4() {
    assert_eq!(perft(&position(POSITION_3), 4), 43_238);
}

// ── Position 4: promotions and checks ───────────────────────────────────────

#[test]
fn position_4_depth_1() {
    assert_eq!(perft(&position(POSITION_4), 1), 6);
}

#[test]
fn position_4_depth_2() {
    assert_eq!(perft(&position(POSITION_4), 2), 264);
}

#[test]
#[ignore] // slow
fn position_4_depth_3() {
    assert_eq!(perft(&position(POSITION_4), 3), 9_467);
}

// ── Position 5 ──────────────────────────────────────────────────────────────

#[test]
fn position_5_depth_1() {
    assert_eq!(perft(&position(POSITION_5), 1), 44);
}

#[test]
fn position_5_depth_2() {
    assert_eq!(perft(&position(POSITION_5), 2), 1_486);
}

#[test]
#[ignore] // slow
fn position_5_depth_3() {
    assert_eq!(perft(&position(POSITION_5), 3), 62_379);
}
