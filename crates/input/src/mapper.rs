//! Edge-triggered command mapping.
//!
//! A key scanner reports which key is down each tick; the mapper turns
//! those reports into at most one logical command per press. A key held
//! across ticks fires exactly once, and fires again only after a tick
//! with no (or an ambiguous) report in between.

use tui_frogger_types::{Command, ScanCode};

/// One tick's worth of scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanReport {
    /// Nothing pressed.
    #[default]
    None,
    /// Exactly one key down.
    Single(ScanCode),
    /// Several keys down at once; treated as no input.
    Multiple,
}

/// Translates raw scan reports into logical commands, with edge
/// detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputMapper {
    last: Option<ScanCode>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Produce this tick's command from this tick's scan report.
    pub fn command(&mut self, report: ScanReport) -> Command {
        match report {
            ScanReport::Single(code) => {
                if self.last == Some(code) {
                    Command::None
                } else {
                    self.last = Some(code);
                    code.into()
                }
            }
            ScanReport::None | ScanReport::Multiple => {
                self.last = None;
                Command::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.command(ScanReport::Single(ScanCode::Up)), Command::Up);
        // Held across ticks: no repeats.
        for _ in 0..10 {
            assert_eq!(
                mapper.command(ScanReport::Single(ScanCode::Up)),
                Command::None
            );
        }
    }

    #[test]
    fn test_release_rearms_the_key() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.command(ScanReport::Single(ScanCode::Up)), Command::Up);
        assert_eq!(mapper.command(ScanReport::None), Command::None);
        assert_eq!(mapper.command(ScanReport::Single(ScanCode::Up)), Command::Up);
    }

    #[test]
    fn test_switching_keys_fires_immediately() {
        let mut mapper = InputMapper::new();
        assert_eq!(
            mapper.command(ScanReport::Single(ScanCode::Left)),
            Command::Left
        );
        // A different key without an intervening release still fires.
        assert_eq!(
            mapper.command(ScanReport::Single(ScanCode::Right)),
            Command::Right
        );
    }

    #[test]
    fn test_multiple_keys_reset_edge_state() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.command(ScanReport::Single(ScanCode::Up)), Command::Up);
        assert_eq!(mapper.command(ScanReport::Multiple), Command::None);
        // After the chord clears, the same key fires again.
        assert_eq!(mapper.command(ScanReport::Single(ScanCode::Up)), Command::Up);
    }

    #[test]
    fn test_confirm_maps_through() {
        let mut mapper = InputMapper::new();
        assert_eq!(
            mapper.command(ScanReport::Single(ScanCode::Confirm)),
            Command::Confirm
        );
    }
}
