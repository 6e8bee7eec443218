//! Direction reader with the analog joystick's sampling contract.
//!
//! The original firmware sampled only the joystick axis *perpendicular* to
//! the current travel direction, so the reader could physically only ever
//! report a turn - never "keep going" or "reverse". When no clear deflection
//! showed up within the sampling window it repeated the current direction.
//!
//! This reader reproduces that contract on top of key events: the last
//! direction key recorded within a tick wins, and [`DirectionReader::take`]
//! hands it to the engine only if it is perpendicular to the current travel
//! direction.

use crate::types::Direction;

/// Latched direction input for one tick of the control loop.
#[derive(Debug, Clone, Default)]
pub struct DirectionReader {
    pending: Option<Direction>,
}

impl DirectionReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deflection. Within one tick the latest one wins.
    pub fn record(&mut self, dir: Direction) {
        self.pending = Some(dir);
    }

    /// Consume the pending deflection, given the current travel direction.
    ///
    /// Returns the recorded direction if it is a turn (perpendicular to
    /// `current`); otherwise repeats `current`. Same-axis input is dropped,
    /// matching the axis-pair sampling of the joystick - reversals never
    /// reach the engine from this reader.
    pub fn take(&mut self, current: Direction) -> Direction {
        match self.pending.take() {
            Some(dir) if dir.axis() != current.axis() => dir,
            _ => current,
        }
    }

    /// Drop any held input. The reset boundary requires this after a game
    /// ends so a stale turn does not leak into the next game's first tick.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_repeats_current() {
        let mut reader = DirectionReader::new();
        assert_eq!(reader.take(Direction::Left), Direction::Left);
        assert_eq!(reader.take(Direction::Up), Direction::Up);
    }

    #[test]
    fn test_perpendicular_turn_is_reported() {
        let mut reader = DirectionReader::new();
        reader.record(Direction::Up);
        assert_eq!(reader.take(Direction::Left), Direction::Up);
    }

    #[test]
    fn test_take_consumes_pending() {
        let mut reader = DirectionReader::new();
        reader.record(Direction::Down);
        assert_eq!(reader.take(Direction::Right), Direction::Down);
        // Second take has nothing latched.
        assert_eq!(reader.take(Direction::Down), Direction::Down);
    }

    #[test]
    fn test_same_axis_input_dropped() {
        let mut reader = DirectionReader::new();

        // Reversal: never reaches the engine from the reader.
        reader.record(Direction::Right);
        assert_eq!(reader.take(Direction::Left), Direction::Left);

        // Same direction: harmless no-op either way.
        reader.record(Direction::Up);
        assert_eq!(reader.take(Direction::Up), Direction::Up);
    }

    #[test]
    fn test_latest_key_wins() {
        let mut reader = DirectionReader::new();
        reader.record(Direction::Up);
        reader.record(Direction::Down);
        assert_eq!(reader.take(Direction::Left), Direction::Down);
    }

    #[test]
    fn test_clear_drops_held_input() {
        let mut reader = DirectionReader::new();
        reader.record(Direction::Up);
        reader.clear();
        assert_eq!(reader.take(Direction::Left), Direction::Left);
    }
}
