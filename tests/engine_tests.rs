//! Engine tests - movement, collision, growth and terminal states

use tui_snake::core::{Board, Game, Snake};
use tui_snake::types::{Cell, Direction, GameStatus, StepOutcome, BOARD_CELLS};

/// Build a running game from an explicit chain of body indices
/// (tail first, head last) plus an optional snack.
fn game_with_body(body: &[u8], snack: Option<u8>, direction: Direction) -> Game {
    let mut board = Board::new();
    for pair in body.windows(2) {
        board.set(pair[0], Cell::Link(pair[1]));
    }
    let head = *body.last().expect("body must not be empty");
    board.set(head, Cell::Head);
    if let Some(idx) = snack {
        board.set(idx, Cell::Snack);
    }

    let snake = Snake {
        head,
        tail: body[0],
        length: body.len() as u8,
    };
    Game::from_parts(board, snake, direction, 12345)
}

/// Walk the link chain and check it against the snake bookkeeping.
fn assert_chain_invariant(game: &Game) {
    let chain = game.body_indices();
    assert_eq!(
        chain.len(),
        game.snake().length as usize,
        "chain length must equal snake.length"
    );
    assert_eq!(chain.first().copied(), Some(game.snake().tail));
    assert_eq!(chain.last().copied(), Some(game.snake().head));

    let mut seen = [false; BOARD_CELLS];
    for &idx in &chain {
        assert!(!seen[idx as usize], "chain revisits cell {idx}");
        seen[idx as usize] = true;
    }
}

fn assert_exactly_one_snack(game: &Game) {
    let snacks = game
        .board()
        .cells()
        .iter()
        .filter(|c| **c == Cell::Snack)
        .count();
    assert_eq!(snacks, 1);
}

#[test]
fn test_up_at_row_zero_collides_without_mutation() {
    let mut game = game_with_body(&[2], Some(40), Direction::Left);
    let before = game.board().clone();

    assert_eq!(game.step(Direction::Up), StepOutcome::Collided);
    assert_eq!(game.status(), GameStatus::Collided);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_left_at_col_seven_collides_without_mutation() {
    // Left advances the column; column 7 is the wall.
    let mut game = game_with_body(&[7], Some(40), Direction::Left);
    let before = game.board().clone();

    assert_eq!(game.step(Direction::Left), StepOutcome::Collided);
    assert_eq!(game.status(), GameStatus::Collided);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_down_at_row_seven_and_right_at_col_zero_collide() {
    let mut game = game_with_body(&[Board::index(7, 3)], Some(0), Direction::Left);
    assert_eq!(game.step(Direction::Down), StepOutcome::Collided);

    let mut game = game_with_body(&[Board::index(3, 0)], Some(63), Direction::Left);
    assert_eq!(game.step(Direction::Right), StepOutcome::Collided);
}

#[test]
fn test_growth_on_snack() {
    // Length-1 snake at index 9 (row 1, col 1), snack at 10 (row 1, col 2).
    // Left moves toward higher columns, onto the snack.
    let mut game = game_with_body(&[9], Some(10), Direction::Left);

    assert_eq!(game.step(Direction::Left), StepOutcome::Ate);
    assert_eq!(game.snake().head, 10);
    assert_eq!(game.snake().tail, 9, "tail must not advance on growth");
    assert_eq!(game.snake().length, 2);
    assert_eq!(game.score(), 1);

    // The old head cell links forward to the new head.
    assert_eq!(game.board().get(9), Cell::Link(10));
    assert_eq!(game.board().get(10), Cell::Head);

    // A new snack appeared on some other, previously empty cell.
    let snack = game.board().snack_index().expect("snack must respawn");
    assert!(snack != 9 && snack != 10);
    assert_exactly_one_snack(&game);
    assert_chain_invariant(&game);
}

#[test]
fn test_self_collision() {
    // Snake occupying [0, 1, 2], head 2, tail 0, links 0->1->2.
    // From index 2 (row 0, col 2), Right targets index 1: body hit.
    let mut game = game_with_body(&[0, 1, 2], Some(40), Direction::Left);
    let before = game.board().clone();

    assert_eq!(game.step(Direction::Right), StepOutcome::Collided);
    assert_eq!(game.status(), GameStatus::Collided);
    assert_eq!(game.board(), &before, "collision must not mutate the board");
}

#[test]
fn test_reverse_into_neck_is_fatal() {
    // Travelling Left (col+1) with a 2-long body; Right targets the neck.
    let mut game = game_with_body(&[9, 10], Some(40), Direction::Left);

    assert_eq!(game.step(Direction::Right), StepOutcome::Collided);
    assert_eq!(game.status(), GameStatus::Collided);
}

#[test]
fn test_moving_into_current_tail_cell_collides() {
    // A 2x2 loop of body: [9, 10, 18, 17], head 17, tail 9. Up from 17
    // targets 9, which still holds the tail link this tick.
    let mut game = game_with_body(&[9, 10, 18, 17], Some(40), Direction::Right);

    assert_eq!(game.step(Direction::Up), StepOutcome::Collided);
}

#[test]
fn test_normal_move_advances_tail() {
    let mut game = game_with_body(&[9, 10, 11], Some(40), Direction::Left);

    assert_eq!(game.step(Direction::Left), StepOutcome::Moved);
    assert_eq!(game.snake().head, 12);
    assert_eq!(game.snake().tail, 10);
    assert_eq!(game.snake().length, 3);
    assert_eq!(game.board().get(9), Cell::Empty, "vacated tail cell clears");
    assert_chain_invariant(&game);
}

#[test]
fn test_chain_invariant_over_long_run() {
    // Serpentine sweep over the whole grid from the spawn cell: every step
    // must succeed, and the board/snake bookkeeping must stay consistent
    // through any snacks eaten along the way.
    let mut game = Game::new(777);
    game.start();

    let mut moves = Vec::new();
    // Row 1 start at col 1: go left (col+1) to col 7.
    for _ in 0..6 {
        moves.push(Direction::Left);
    }
    // Then sweep rows 2..=7, alternating column direction.
    for row in 2..8 {
        moves.push(Direction::Down);
        let dir = if row % 2 == 0 {
            Direction::Right
        } else {
            Direction::Left
        };
        for _ in 0..7 {
            moves.push(dir);
        }
    }

    for (i, dir) in moves.into_iter().enumerate() {
        let outcome = game.step(dir);
        assert!(
            !outcome.is_terminal(),
            "step {i} ({dir:?}) unexpectedly ended the game"
        );
        assert_chain_invariant(&game);
        assert_exactly_one_snack(&game);
    }
}

#[test]
fn test_reset_is_idempotent_from_any_state() {
    let mut game = Game::new(42);
    game.start();

    // Mess the state up: eat nothing, just crash into a wall.
    let _ = game.step(Direction::Up);
    let _ = game.step(Direction::Up);
    assert_eq!(game.status(), GameStatus::Collided);

    for _ in 0..3 {
        game.reset();
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.snake().length, 1);
        assert_eq!(game.snake().head, game.snake().tail);
        assert_eq!(game.board().get(game.snake().head), Cell::Head);
        assert_exactly_one_snack(&game);
    }
}

#[test]
fn test_win_when_board_fills() {
    // Snake covering all cells but one, with the snack on the last hole.
    // Eating it leaves no empty cell: the game is won, not stuck.
    let chain: Vec<u8> = serpentine_path();
    let (&last, body) = chain.split_last().expect("path is non-empty");

    let mut game = game_with_body(body, Some(last), direction_toward(body[body.len() - 1], last));
    let dir = direction_toward(body[body.len() - 1], last);

    assert_eq!(game.step(dir), StepOutcome::Won);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.snake().length as usize, BOARD_CELLS);
    assert!(game.board().is_full());
    assert_eq!(game.board().snack_index(), None);

    // Terminal state is sticky until reset.
    assert_eq!(game.step(Direction::Up), StepOutcome::Won);
    game.reset();
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.snake().length, 1);
}

/// All 64 indices in a serpentine order where consecutive cells are adjacent.
fn serpentine_path() -> Vec<u8> {
    let mut path = Vec::with_capacity(BOARD_CELLS);
    for row in 0..8u8 {
        if row % 2 == 0 {
            for col in 0..8u8 {
                path.push(Board::index(row, col));
            }
        } else {
            for col in (0..8u8).rev() {
                path.push(Board::index(row, col));
            }
        }
    }
    path
}

/// Direction symbol that moves `from` to the adjacent `to`.
fn direction_toward(from: u8, to: u8) -> Direction {
    let (fr, fc) = Board::row_col(from);
    let (tr, tc) = Board::row_col(to);
    if tr + 1 == fr {
        Direction::Up
    } else if fr + 1 == tr {
        Direction::Down
    } else if fc + 1 == tc {
        Direction::Left
    } else {
        Direction::Right
    }
}
