//! Scripted games and property tests against the public `Game` API.

use chess_core::{CastleSide, Color, Move, Piece, PieceKind, Square};
use chess_rules::movegen::legal_moves;
use chess_rules::{Board, CastlingRights, Game, GameStatus, MoveError, Position};
use proptest::prelude::*;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let (from, to) = Move::parse_coordinates(text).unwrap();
        let outcome = game.attempt_move(from, to);
        assert!(outcome.applied, "{} was rejected", text);
    }
}

fn king_count(board: &Board, color: Color) -> usize {
    board.count(Piece::new(PieceKind::King, color))
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &["e2-e4", "e7-e5", "d1-h5", "b8-c6", "f1-c4", "g8-f6", "h5-f7"],
    );
    let status = game.status();
    assert_eq!(status.side_to_move, Color::Black);
    assert!(status.checkmate);
    assert_eq!(game.game_status(), GameStatus::Checkmate);
    assert_eq!(
        game.captured(Color::White),
        &[Piece::new(PieceKind::Pawn, Color::Black)]
    );
}

#[test]
fn check_is_reported_and_must_be_answered() {
    let mut game = Game::new();
    play(&mut game, &["e2-e4", "f7-f6", "d1-h5"]);
    let status = game.status();
    assert!(status.in_check);
    assert!(!status.checkmate);
    assert!(game.legal_moves_from(sq("a7")).is_empty());
    assert!(game.is_legal(sq("g7"), sq("g6")));
}

#[test]
fn en_passant_target_is_cleared_whatever_black_plays() {
    let mut game = Game::new();
    play(&mut game, &["e2-e4"]);
    assert_eq!(game.position().en_passant, Some(sq("e3")));
    play(&mut game, &["g8-f6"]);
    assert_eq!(game.position().en_passant, None);
}

#[test]
fn black_captures_en_passant() {
    let mut game = Game::new();
    play(&mut game, &["a2-a3", "d7-d5", "a3-a4", "d5-d4", "e2-e4", "d4-e3"]);
    assert!(game.position().board.is_empty(sq("e4")));
    assert_eq!(
        game.position().piece_at(sq("e3")),
        Some(Piece::new(PieceKind::Pawn, Color::Black))
    );
    assert!(game.move_history().last().is_some_and(|m| m.en_passant));
    assert_eq!(
        game.captured(Color::Black),
        &[Piece::new(PieceKind::Pawn, Color::White)]
    );
}

#[test]
fn queenside_castling_for_black() {
    let mut game = Game::new();
    play(
        &mut game,
        &["e2-e4", "d7-d5", "g1-f3", "c8-g4", "f1-e2", "b8-c6", "a2-a3", "d8-d7", "h2-h3"],
    );
    assert!(game.legal_moves_from(Square::E8).contains(Square::C8));
    play(&mut game, &["e8-c8"]);
    let board = &game.position().board;
    assert_eq!(board.get(Square::D8), Some(Piece::new(PieceKind::Rook, Color::Black)));
    assert_eq!(board.get(Square::C8), Some(Piece::new(PieceKind::King, Color::Black)));
    assert!(board.is_empty(Square::A8));
    assert!(game
        .move_history()
        .last()
        .is_some_and(|m| m.castle == Some(CastleSide::Queenside)));
}

#[test]
fn rook_move_revokes_castling_for_good() {
    let mut game = Game::new();
    play(
        &mut game,
        &["g1-f3", "a7-a6", "g2-g3", "a6-a5", "f1-g2", "a5-a4", "h1-g1", "b7-b6", "g1-h1", "b6-b5"],
    );
    assert!(!game.position().castling.allows(Color::White, CastleSide::Kingside));
    assert!(game.position().castling.allows(Color::White, CastleSide::Queenside));
    assert!(!game.is_legal(Square::E1, Square::G1));
}

#[test]
fn promotion_is_always_to_queen() {
    let mut board = Board::empty();
    board.put(Square::E1, Piece::new(PieceKind::King, Color::White));
    board.put(Square::H8, Piece::new(PieceKind::King, Color::Black));
    board.put(sq("b7"), Piece::new(PieceKind::Pawn, Color::White));
    let mut game = Game::from_position(Position::new(board, Color::White));

    let record = *game.try_move(sq("b7"), sq("b8")).unwrap();
    assert_eq!(record.promoted_to, Some(PieceKind::Queen));
    assert_eq!(
        game.position().piece_at(sq("b8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
    assert!(game.status().in_check);
}

#[test]
fn castling_through_check_reports_reason() {
    let mut board = Board::empty();
    board.put(Square::E1, Piece::new(PieceKind::King, Color::White));
    board.put(Square::H1, Piece::new(PieceKind::Rook, Color::White));
    board.put(Square::E8, Piece::new(PieceKind::King, Color::Black));
    board.put(sq("f8"), Piece::new(PieceKind::Rook, Color::Black));
    let position = Position::new(board, Color::White).with_castling(CastlingRights::ALL);
    let mut game = Game::from_position(position);

    assert_eq!(
        game.try_move(Square::E1, Square::G1),
        Err(MoveError::Unreachable {
            from: Square::E1,
            to: Square::G1
        })
    );
    assert_eq!(game.ply_count(), 0);
}

#[test]
fn independent_games_do_not_interfere() {
    let mut first = Game::new();
    let second = Game::new();
    play(&mut first, &["d2-d4"]);
    assert_eq!(second.ply_count(), 0);
    assert_eq!(second.side_to_move(), Color::White);
    assert_eq!(first.side_to_move(), Color::Black);
}

/// Plays the moves picked by `choices` from the legal list at each ply.
fn random_walk(choices: &[usize]) -> Game {
    let mut game = Game::new();
    for &choice in choices {
        if game.is_game_over() {
            break;
        }
        let moves = legal_moves(game.position());
        let (from, to) = moves[choice % moves.len()];
        assert!(game.attempt_move(from, to).applied);
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn one_king_per_color_throughout(choices in prop::collection::vec(any::<usize>(), 0..80)) {
        let game = random_walk(&choices);
        let board = &game.position().board;
        prop_assert_eq!(king_count(board, Color::White), 1);
        prop_assert_eq!(king_count(board, Color::Black), 1);
    }

    #[test]
    fn rejected_moves_never_mutate(
        choices in prop::collection::vec(any::<usize>(), 0..40),
        from in 0u8..64,
        to in 0u8..64,
    ) {
        let mut game = random_walk(&choices);
        let from = Square::from_index(from).unwrap();
        let to = Square::from_index(to).unwrap();
        if !game.legal_moves_from(from).contains(to) {
            let before = game.clone();
            prop_assert!(!game.attempt_move(from, to).applied);
            prop_assert_eq!(&game, &before);
        }
    }

    #[test]
    fn history_and_side_stay_in_step(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        let game = random_walk(&choices);
        let expected = if game.ply_count() % 2 == 0 { Color::White } else { Color::Black };
        prop_assert_eq!(game.side_to_move(), expected);
        for (ply, mv) in game.move_history().iter().enumerate() {
            let mover = if ply % 2 == 0 { Color::White } else { Color::Black };
            prop_assert_eq!(mv.piece.color, mover);
        }
    }

    #[test]
    fn reset_always_restores_the_start(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        let mut game = random_walk(&choices);
        game.reset();
        prop_assert_eq!(game.position(), &Position::startpos());
        prop_assert_eq!(game.ply_count(), 0);
        prop_assert!(game.captured(Color::White).is_empty());
        prop_assert!(game.captured(Color::Black).is_empty());
        prop_assert_eq!(game.game_status(), GameStatus::InProgress);
    }
}
