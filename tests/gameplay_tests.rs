//! Full-game integration tests driving the engine through its public API:
//! drop and move phases, observer notifications, win-and-reset behavior.

use std::cell::RefCell;
use std::rc::Rc;

use teeko_engine::{
    CellState, EventKind, GameEngine, GameEvent, Phase, PlayerColor, Position, TeekoError,
};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

/// Subscribe a collector to every event the engine emits.
fn record_events(engine: &mut GameEngine) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.subscribe_all(move |e| sink.borrow_mut().push(*e));
    events
}

/// Interleave Red and Blue placements.
fn drop_pieces(engine: &mut GameEngine, red: &[(u8, u8)], blue: &[(u8, u8)]) {
    for (&(rr, rc), &(br, bc)) in red.iter().zip(blue.iter()) {
        engine.select_cell(rr, rc).unwrap();
        engine.select_cell(br, bc).unwrap();
    }
}

#[test]
fn red_wins_a_row_during_drop_phase() {
    let mut engine = GameEngine::with_default_players();
    let events = record_events(&mut engine);

    // Red builds row 0; Blue places three pieces elsewhere. Red's fourth
    // placement is the seventh overall, so the game is still in the drop
    // phase when the row completes.
    drop_pieces(&mut engine, &[(0, 0), (0, 1), (0, 2)], &[(4, 0), (4, 1), (4, 2)]);
    engine.select_cell(0, 3).unwrap();

    let events = events.borrow();
    assert_eq!(events.last(), Some(&GameEvent::Winner(PlayerColor::Red)));
    // Six completed turns before the winning placement, none after it.
    let turn_ends = events.iter().filter(|e| **e == GameEvent::TurnEnded).count();
    assert_eq!(turn_ends, 6);
    // No phase change ever fired: the game ended inside the drop phase.
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::PhaseChanged(_))));

    // The winner announcement is followed by a full reset, with the seat
    // handed to the next player.
    assert_eq!(engine.phase(), Phase::Drop);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.placed_count(PlayerColor::Red), 0);
    assert_eq!(engine.placed_count(PlayerColor::Blue), 0);
    assert_eq!(engine.current_color(), PlayerColor::Blue);
}

#[test]
fn blue_wins_a_diagonal_on_the_eighth_placement() {
    let mut engine = GameEngine::with_default_players();
    let events = record_events(&mut engine);

    drop_pieces(
        &mut engine,
        &[(0, 1), (0, 3), (4, 0), (4, 2)],
        &[(0, 0), (1, 1), (2, 2), (3, 3)],
    );

    // The eighth placement both enters the move phase and completes Blue's
    // diagonal; the phase change is evaluated before the win check.
    let events = events.borrow();
    let phase_idx = events
        .iter()
        .position(|e| *e == GameEvent::PhaseChanged(Phase::Move))
        .expect("phase change fired");
    let win_idx = events
        .iter()
        .position(|e| *e == GameEvent::Winner(PlayerColor::Blue))
        .expect("winner fired");
    assert!(phase_idx < win_idx);
    assert_eq!(events.last(), Some(&GameEvent::Winner(PlayerColor::Blue)));

    assert_eq!(engine.phase(), Phase::Drop);
    assert_eq!(engine.board().occupied_count(), 0);
}

#[test]
fn red_wins_a_square_through_the_move_phase() {
    let mut engine = GameEngine::with_default_players();

    // Red ends the drop phase one slide away from a 2×2 square at
    // (1,1)-(2,2); Blue sits in the corners.
    drop_pieces(
        &mut engine,
        &[(1, 1), (1, 2), (2, 1), (3, 3)],
        &[(0, 0), (0, 4), (4, 0), (4, 4)],
    );
    assert_eq!(engine.phase(), Phase::Move);
    assert_eq!(engine.current_color(), PlayerColor::Red);

    let events = record_events(&mut engine);
    engine.select_cell(3, 3).unwrap();
    assert!(engine.board().cell(pos(2, 2)).is_playable());
    engine.select_cell(2, 2).unwrap();

    assert_eq!(
        events.borrow().as_slice(),
        &[GameEvent::Winner(PlayerColor::Red)]
    );
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.current_color(), PlayerColor::Blue);
}

#[test]
fn move_phase_round_trip_keeps_piece_counts() {
    let mut engine = GameEngine::with_default_players();
    drop_pieces(
        &mut engine,
        &[(0, 0), (0, 2), (2, 0), (2, 4)],
        &[(4, 0), (4, 2), (4, 4), (2, 2)],
    );
    assert_eq!(engine.phase(), Phase::Move);

    // Red slides (0,0) -> (1,1); Blue slides (2,2) -> (1,2).
    engine.select_cell(0, 0).unwrap();
    engine.select_cell(1, 1).unwrap();
    engine.select_cell(2, 2).unwrap();
    engine.select_cell(1, 2).unwrap();

    assert_eq!(engine.board().occupied_count(), 8);
    assert_eq!(engine.board().occupied_by(PlayerColor::Red).len(), 4);
    assert_eq!(engine.board().occupied_by(PlayerColor::Blue).len(), 4);
    assert_eq!(
        engine.board().cell(pos(1, 1)),
        CellState::Occupied(PlayerColor::Red)
    );
    assert_eq!(
        engine.board().cell(pos(1, 2)),
        CellState::Occupied(PlayerColor::Blue)
    );
    assert_eq!(engine.board().cell(pos(0, 0)), CellState::Empty);
    assert_eq!(engine.board().cell(pos(2, 2)), CellState::Empty);
}

#[test]
fn cancelling_a_selection_restores_the_board() {
    let mut engine = GameEngine::with_default_players();
    drop_pieces(
        &mut engine,
        &[(0, 0), (0, 2), (2, 0), (2, 4)],
        &[(4, 0), (4, 2), (4, 4), (2, 2)],
    );
    let before = engine.board().clone();
    let events = record_events(&mut engine);

    engine.select_cell(2, 0).unwrap();
    assert_ne!(engine.board(), &before);
    engine.select_cell(2, 0).unwrap();

    assert_eq!(engine.board(), &before);
    assert_eq!(engine.selection(), None);
    // Cancelling is not a turn: no events fired.
    assert!(events.borrow().is_empty());
}

#[test]
fn selecting_marks_exactly_the_vacant_neighbors() {
    let mut engine = GameEngine::with_default_players();
    drop_pieces(
        &mut engine,
        &[(2, 2), (0, 0), (0, 2), (0, 4)],
        &[(1, 1), (4, 0), (4, 2), (4, 4)],
    );

    engine.select_cell(2, 2).unwrap();

    for p in Position::all() {
        let expected = p.is_adjacent(pos(2, 2)) && p != pos(1, 1);
        assert_eq!(
            engine.board().cell(p).is_playable(),
            expected,
            "unexpected mark state at {}",
            p
        );
    }
}

#[test]
fn unsubscribed_observer_hears_nothing() {
    let mut engine = GameEngine::with_default_players();
    let count = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&count);
    let id = engine.subscribe(EventKind::TurnEnded, move |_| *sink.borrow_mut() += 1);

    engine.select_cell(2, 2).unwrap();
    assert_eq!(*count.borrow(), 1);

    assert!(engine.unsubscribe(id));
    engine.select_cell(3, 3).unwrap();
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn out_of_range_coordinates_fail_without_side_effects() {
    let mut engine = GameEngine::with_default_players();
    assert_eq!(
        engine.select_cell(7, 1),
        Err(TeekoError::OutOfRange { row: 7, col: 1 })
    );
    assert_eq!(
        engine.board().cell_at(1, 7),
        Err(TeekoError::OutOfRange { row: 1, col: 7 })
    );
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.current_color(), PlayerColor::Red);
}

#[test]
fn reset_from_mid_game_matches_a_fresh_engine() {
    let mut engine = GameEngine::with_default_players();
    drop_pieces(
        &mut engine,
        &[(0, 0), (0, 2), (2, 0), (2, 4)],
        &[(4, 0), (4, 2), (4, 4), (2, 2)],
    );
    engine.select_cell(0, 0).unwrap();

    engine.reset();

    let fresh = GameEngine::with_default_players();
    assert_eq!(engine.phase(), fresh.phase());
    assert_eq!(engine.board(), fresh.board());
    assert_eq!(engine.current_color(), fresh.current_color());
    assert_eq!(engine.selection(), None);
}
