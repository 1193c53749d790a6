//! Step and jump generation tests, including the edge-suppression rules.

use crate::board::{Board, BoardBuilder, Cell, Hop, Rank, Team};

fn cell(index: usize) -> Cell {
    Cell::from_index(index).unwrap()
}

fn destinations(board: &Board, origin: usize) -> Vec<usize> {
    board
        .hops_from(cell(origin))
        .into_iter()
        .map(|hop| hop.destination().index())
        .collect()
}

#[test]
fn test_empty_origin_has_no_hops() {
    let board = Board::empty();
    assert!(board.hops_from(cell(35)).is_empty());
}

#[test]
fn test_king_steps_in_all_four_directions() {
    let board = BoardBuilder::new()
        .piece(cell(35), Team::Light, Rank::King)
        .build();
    let mut dests = destinations(&board, 35);
    dests.sort_unstable();
    assert_eq!(dests, vec![26, 28, 42, 44]);
}

#[test]
fn test_dark_man_only_advances_downward() {
    let board = BoardBuilder::new()
        .piece(cell(19), Team::Dark, Rank::Man)
        .build();
    let mut dests = destinations(&board, 19);
    dests.sort_unstable();
    assert_eq!(dests, vec![26, 28]);
}

#[test]
fn test_light_man_only_advances_upward() {
    let board = BoardBuilder::new()
        .piece(cell(44), Team::Light, Rank::Man)
        .build();
    let mut dests = destinations(&board, 44);
    dests.sort_unstable();
    assert_eq!(dests, vec![35, 37]);
}

#[test]
fn test_column_zero_suppresses_left() {
    let board = BoardBuilder::new()
        .piece(cell(40), Team::Light, Rank::Man)
        .build();
    assert_eq!(destinations(&board, 40), vec![33]);
}

#[test]
fn test_column_seven_suppresses_right() {
    let board = BoardBuilder::new()
        .piece(cell(23), Team::Dark, Rank::Man)
        .build();
    assert_eq!(destinations(&board, 23), vec![30]);
}

#[test]
fn test_row_zero_suppresses_up() {
    let board = BoardBuilder::new()
        .piece(cell(4), Team::Light, Rank::King)
        .build();
    let mut dests = destinations(&board, 4);
    dests.sort_unstable();
    assert_eq!(dests, vec![11, 13]);
}

#[test]
fn test_row_seven_suppresses_down() {
    let board = BoardBuilder::new()
        .piece(cell(60), Team::Dark, Rank::King)
        .build();
    let mut dests = destinations(&board, 60);
    dests.sort_unstable();
    assert_eq!(dests, vec![51, 53]);
}

#[test]
fn test_jump_over_adjacent_enemy() {
    let board = BoardBuilder::new()
        .piece(cell(5), Team::Dark, Rank::Man)
        .piece(cell(14), Team::Light, Rank::Man)
        .build();
    let hops = board.hops_from(cell(5));
    assert!(hops.contains(&Hop::Step(cell(12))));
    assert!(hops.contains(&Hop::Jump {
        over: cell(14),
        to: cell(23),
    }));
    assert_eq!(hops.len(), 2);
}

#[test]
fn test_jump_blocked_by_occupied_landing() {
    let board = BoardBuilder::new()
        .piece(cell(5), Team::Dark, Rank::Man)
        .piece(cell(14), Team::Light, Rank::Man)
        .piece(cell(23), Team::Dark, Rank::Man)
        .build();
    let dests = destinations(&board, 5);
    assert!(!dests.contains(&23));
}

#[test]
fn test_friendly_adjacent_blocks_direction() {
    let board = BoardBuilder::new()
        .piece(cell(5), Team::Dark, Rank::Man)
        .piece(cell(14), Team::Dark, Rank::Man)
        .build();
    assert_eq!(destinations(&board, 5), vec![12]);
}

#[test]
fn test_jump_wrap_guard_from_column_six() {
    // Landing 40 would wrap onto column 0; the jump must be rejected even
    // though the adjacent enemy is capturable in principle.
    let board = BoardBuilder::new()
        .piece(cell(22), Team::Dark, Rank::Man)
        .piece(cell(31), Team::Light, Rank::Man)
        .build();
    let dests = destinations(&board, 22);
    assert!(!dests.contains(&40));
    assert_eq!(dests, vec![29]);
}

#[test]
fn test_jump_wrap_guard_from_column_one() {
    // Landing 31 would wrap onto column 7.
    let board = BoardBuilder::new()
        .piece(cell(49), Team::Dark, Rank::King)
        .piece(cell(40), Team::Light, Rank::Man)
        .build();
    let dests = destinations(&board, 49);
    assert!(!dests.contains(&31));
}

#[test]
fn test_jump_landing_off_board_rejected() {
    // Enemy adjacent on the last row: the landing would fall past index 63.
    let board = BoardBuilder::new()
        .piece(cell(46), Team::Dark, Rank::Man)
        .piece(cell(55), Team::Light, Rank::Man)
        .build();
    let dests = destinations(&board, 46);
    assert!(dests.iter().all(|&index| index < 64));
    assert!(!dests.contains(&0));
    assert_eq!(dests, vec![53]);
}

#[test]
fn test_jump_landings_exclude_steps() {
    let board = BoardBuilder::new()
        .piece(cell(5), Team::Dark, Rank::Man)
        .piece(cell(14), Team::Light, Rank::Man)
        .build();
    assert_eq!(board.jump_landings_from(cell(5)), vec![cell(23)]);
}

#[test]
fn test_starting_board_mobility() {
    let board = Board::new();
    assert!(board.has_any_move(Team::Dark));
    assert!(board.has_any_move(Team::Light));
}

#[test]
fn test_fully_blocked_team_has_no_move() {
    // Light man boxed into the corner: 56 is blocked by its own man on 49,
    // whose jumps are wrap-guarded (over 40) or blocked (over 42 onto 35).
    let board = BoardBuilder::new()
        .piece(cell(56), Team::Light, Rank::Man)
        .piece(cell(49), Team::Light, Rank::Man)
        .piece(cell(40), Team::Dark, Rank::Man)
        .piece(cell(42), Team::Dark, Rank::Man)
        .piece(cell(35), Team::Dark, Rank::Man)
        .build();
    assert!(!board.has_any_move(Team::Light));
    assert!(board.has_any_move(Team::Dark));
}
