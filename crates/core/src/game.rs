//! Game engine - one directional move per tick
//!
//! [`Game`] owns the board and snake exclusively for the lifetime of one
//! game; the driving loop passes it by `&mut` and never shares it. A step
//! either moves the snake, grows it onto the snack, or ends the game
//! (`Collided` on out-of-bounds / self-collision, `Won` when the snake
//! covers the whole grid). All collision checks happen before any board
//! write, so a failed step leaves the board byte-for-byte untouched.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{
    Cell, Direction, GameStatus, StepOutcome, BOARD_CELLS, GRID_DIM, INITIAL_DIRECTION, START_COL,
    START_ROW,
};

/// The logical snake: endpoints and length.
///
/// The body itself lives inside the board as a chain of [`Cell::Link`]s from
/// `tail` to `head`; this struct only carries the endpoints. `length` is
/// informational (scoring) - movement never needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    pub head: u8,
    pub tail: u8,
    pub length: u8,
}

/// Board, snake and RNG, stepped once per tick.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    snake: Snake,
    rng: SimpleRng,
    status: GameStatus,
    direction: Direction,
}

impl Game {
    /// Create a game with the given RNG seed. Call [`Game::start`] before
    /// stepping.
    pub fn new(seed: u32) -> Self {
        let spawn = Board::index(START_ROW, START_COL);
        Self {
            board: Board::new(),
            snake: Snake {
                head: spawn,
                tail: spawn,
                length: 1,
            },
            rng: SimpleRng::new(seed),
            status: GameStatus::Running,
            direction: INITIAL_DIRECTION,
        }
    }

    /// Initialize the board: length-1 snake at the spawn cell plus one snack.
    pub fn start(&mut self) {
        self.reset();
    }

    /// Restore a game from an explicit position.
    ///
    /// The caller is responsible for handing in a consistent position: the
    /// link chain from `snake.tail` must reach `snake.head` in
    /// `snake.length` steps. Used for test scenarios and position replay.
    pub fn from_parts(board: Board, snake: Snake, direction: Direction, seed: u32) -> Self {
        Self {
            board,
            snake,
            rng: SimpleRng::new(seed),
            status: GameStatus::Running,
            direction,
        }
    }

    /// Full reset to a fresh game.
    ///
    /// Discards and reconstructs board and snake; the RNG keeps its state so
    /// consecutive games see different snack sequences. Reset is idempotent:
    /// from any prior board state it yields length 1 and exactly one snack.
    pub fn reset(&mut self) {
        let spawn = Board::index(START_ROW, START_COL);
        self.board.clear();
        self.board.set(spawn, Cell::Head);
        self.snake = Snake {
            head: spawn,
            tail: spawn,
            length: 1,
        };
        self.status = GameStatus::Running;
        self.direction = INITIAL_DIRECTION;
        // A fresh board always has 63 empty cells, so this cannot fail.
        self.board.place_snack(&mut self.rng);
    }

    /// Apply one directional move.
    ///
    /// On a non-running game this is a no-op that reports the terminal
    /// outcome again; the caller resolves it with [`Game::reset`].
    pub fn step(&mut self, dir: Direction) -> StepOutcome {
        match self.status {
            GameStatus::Collided => return StepOutcome::Collided,
            GameStatus::Won => return StepOutcome::Won,
            GameStatus::Running => {}
        }

        let target = match self.target_index(dir) {
            Some(idx) => idx,
            None => return self.collide(),
        };

        let target_cell = self.board.get(target);
        if target_cell.is_body() {
            return self.collide();
        }

        // Checks done - from here on the move is committed.
        self.direction = dir;
        let old_head = self.snake.head;
        self.board.set(old_head, Cell::Link(target));
        self.board.set(target, Cell::Head);
        self.snake.head = target;

        if target_cell == Cell::Snack {
            self.snake.length += 1;
            // The consumed snack cell is already overwritten with the head
            // mark, so the respawn scan cannot pick it.
            match self.board.place_snack(&mut self.rng) {
                Some(_) => StepOutcome::Ate,
                None => {
                    self.status = GameStatus::Won;
                    StepOutcome::Won
                }
            }
        } else {
            // Advance the tail along its link and vacate the old cell.
            // With length 1 the old head and tail coincide and the link
            // written above carries the tail straight to the new head.
            let old_tail = self.snake.tail;
            if let Cell::Link(next) = self.board.get(old_tail) {
                self.snake.tail = next;
                self.board.set(old_tail, Cell::Empty);
            }
            StepOutcome::Moved
        }
    }

    /// Candidate new head index for a move, or `None` at the board edge.
    ///
    /// Row/column arithmetic only - raw +-8 on the flat index is exactly
    /// where the wrap-around bugs live.
    fn target_index(&self, dir: Direction) -> Option<u8> {
        let (row, col) = Board::row_col(self.snake.head);
        match dir {
            Direction::Up => (row > 0).then(|| Board::index(row - 1, col)),
            Direction::Down => (row < GRID_DIM - 1).then(|| Board::index(row + 1, col)),
            Direction::Left => (col < GRID_DIM - 1).then(|| Board::index(row, col + 1)),
            Direction::Right => (col > 0).then(|| Board::index(row, col - 1)),
        }
    }

    fn collide(&mut self) -> StepOutcome {
        self.status = GameStatus::Collided;
        StepOutcome::Collided
    }

    /// Body cell indices in tail-to-head order, walked along the links.
    ///
    /// Diagnostic view used by invariant tests; gameplay never needs it.
    pub fn body_indices(&self) -> ArrayVec<u8, BOARD_CELLS> {
        let mut out = ArrayVec::new();
        let mut idx = self.snake.tail;
        loop {
            out.push(idx);
            match self.board.get(idx) {
                Cell::Link(next) => idx = next,
                _ => break,
            }
        }
        out
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Current travel direction (the last committed move).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Snacks eaten this game.
    pub fn score(&self) -> u32 {
        (self.snake.length - 1) as u32
    }
}
