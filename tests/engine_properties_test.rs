//! Property tests for the rules and the turn engine.

use noughts::{
    Board, Game, GameRng, GameStatus, LINES, Mark, Mode, Square, check_winner, is_draw,
    winning_line,
};
use proptest::prelude::*;

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![Just(Square::Empty), arb_mark().prop_map(Square::Occupied)]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_square()).prop_map(Board::from_squares)
}

/// A shuffled 0-8 permutation: the click order for one full game.
fn arb_click_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

/// Plays clicks in order, alternating marks, until the game ends.
fn play_out(game: &mut Game, clicks: &[usize]) {
    for &cell in clicks {
        if !game.in_progress() {
            break;
        }
        let mark = game.to_move();
        game.make_move(cell, mark).unwrap();
    }
}

proptest! {
    #[test]
    fn winning_line_cells_hold_the_winning_mark(board in arb_board()) {
        if let Some(line) = winning_line(&board) {
            prop_assert!(LINES.contains(&line.cells));
            for cell in line.cells {
                prop_assert_eq!(board.get(cell), Some(Square::Occupied(line.mark)));
            }
        }
    }

    #[test]
    fn check_winner_agrees_with_winning_line(board in arb_board()) {
        prop_assert_eq!(check_winner(&board), winning_line(&board).map(|line| line.mark));
    }

    #[test]
    fn draw_is_full_board_without_winner(board in arb_board()) {
        prop_assert_eq!(is_draw(&board), board.is_full() && check_winner(&board).is_none());
    }

    #[test]
    fn legal_games_end_won_or_drawn(clicks in arb_click_order()) {
        let mut game = Game::new(Mode::TwoPlayer);
        play_out(&mut game, &clicks);

        // Nine distinct cells always finish the game.
        prop_assert!(!game.in_progress());
        match game.status() {
            GameStatus::Won(line) => {
                for cell in line.cells {
                    prop_assert_eq!(game.board().get(cell), Some(Square::Occupied(line.mark)));
                }
            }
            GameStatus::Draw => prop_assert!(game.board().is_full()),
            GameStatus::InProgress => unreachable!(),
        }
    }

    #[test]
    fn mark_counts_stay_balanced(clicks in arb_click_order(), stop in 0..9usize) {
        let mut game = Game::new(Mode::TwoPlayer);
        play_out(&mut game, &clicks[..stop]);

        let mut x = 0isize;
        let mut o = 0isize;
        for square in game.board().squares() {
            match square {
                Square::Occupied(Mark::X) => x += 1,
                Square::Occupied(Mark::O) => o += 1,
                Square::Empty => {}
            }
        }
        // X starts, so X is never behind and never two ahead.
        prop_assert!(x - o == 0 || x - o == 1);
    }

    #[test]
    fn rejected_moves_change_nothing(clicks in arb_click_order(), cell in 0..9usize) {
        let mut game = Game::new(Mode::TwoPlayer);
        play_out(&mut game, &clicks[..5]);

        let before = game.clone();
        let mark = game.to_move();
        if game.make_move(cell, mark).is_err() {
            prop_assert_eq!(game, before);
        }
    }

    #[test]
    fn computer_move_picks_an_empty_cell(
        clicks in arb_click_order(),
        stop in 0..9usize,
        seed in any::<u64>(),
    ) {
        let mut game = Game::new(Mode::VsComputer);
        play_out(&mut game, &clicks[..stop]);
        let mut rng = GameRng::new(seed);

        match game.choose_computer_move(&mut rng) {
            Some(cell) => {
                prop_assert!(game.in_progress());
                prop_assert!(game.board().is_empty(cell));
            }
            None => prop_assert!(!game.in_progress()),
        }
    }

    #[test]
    fn undo_restores_the_last_snapshot(clicks in arb_click_order(), stop in 1..9usize) {
        let mut game = Game::new(Mode::VsComputer);

        // Track what an undo should restore: the board before each of
        // X's moves, while the undo is unspent.
        let mut expected: Option<Board> = None;
        for &cell in &clicks[..stop] {
            if !game.in_progress() {
                break;
            }
            let mark = game.to_move();
            if mark == Mark::X && game.undo_available() {
                expected = Some(game.board().clone());
            }
            game.make_move(cell, mark).unwrap();
        }

        match (game.undo(), expected) {
            (Ok(()), Some(board)) => {
                prop_assert_eq!(game.board(), &board);
                prop_assert_eq!(game.to_move(), Mark::X);
                prop_assert!(!game.undo_available());
            }
            (Ok(()), None) => prop_assert!(false, "undo succeeded without a snapshot"),
            (Err(_), _) => {
                // Game over before any snapshot, or nothing recorded.
            }
        }
    }
}
