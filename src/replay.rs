//! Headless replay of a scripted session.

use crate::tui::status_text;
use derive_more::{Display, Error};
use morpion_rules::{GameHistory, Position};
use tracing::{debug, info, instrument};

/// One step of a scripted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    /// Play at a cell.
    Play(Position),
    /// Jump to a history index.
    Jump(usize),
}

/// A token that is neither a cell nor a jump.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized replay token '{}' (expected 0-8, a cell label, or @index)", token)]
pub struct ReplayTokenError {
    /// The offending token.
    pub token: String,
}

impl ReplayStep {
    /// Parses `0`-`8`, a cell label such as `center`, or `@k` for a jump.
    #[instrument]
    pub fn parse(token: &str) -> Result<Self, ReplayTokenError> {
        let invalid = || ReplayTokenError {
            token: token.to_string(),
        };
        match token.trim().strip_prefix('@') {
            Some(index) => index.parse().map(ReplayStep::Jump).map_err(|_| invalid()),
            None => Position::from_label_or_number(token)
                .map(ReplayStep::Play)
                .ok_or_else(invalid),
        }
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// History after the last step.
    pub history: GameHistory,
    /// Steps that changed nothing (illegal moves, out-of-range jumps).
    pub ignored: usize,
}

impl ReplayReport {
    /// Text summary: board, status line and history position.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\nCoup {} / {} (ignorés : {})",
            self.history.current_board().display(),
            status_text(self.history.status()),
            self.history.current_index(),
            self.history.len() - 1,
            self.ignored,
        )
    }
}

/// Applies every step to a fresh history. Steps that would be ignored by the
/// UI are ignored here too, and counted.
#[instrument(skip(steps))]
pub fn replay(steps: &[ReplayStep]) -> ReplayReport {
    let mut history = GameHistory::new();
    let mut ignored = 0;

    for step in steps {
        let applied = match *step {
            ReplayStep::Play(pos) => history.play(pos).map(|_| ()).map_err(|e| e.to_string()),
            ReplayStep::Jump(index) => history.jump_to(index).map_err(|e| e.to_string()),
        };
        if let Err(reason) = applied {
            debug!(?step, %reason, "Replay step ignored");
            ignored += 1;
        }
    }

    info!(len = history.len(), current = history.current_index(), ignored, "Replay finished");
    ReplayReport { history, ignored }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(ReplayStep::parse("4"), Ok(ReplayStep::Play(Position::Center)));
        assert_eq!(ReplayStep::parse("top-left"), Ok(ReplayStep::Play(Position::TopLeft)));
        assert_eq!(ReplayStep::parse("@2"), Ok(ReplayStep::Jump(2)));
        assert!(ReplayStep::parse("@x").is_err());
        assert!(ReplayStep::parse("12").is_err());
    }

    #[test]
    fn test_render_shows_board_and_status() {
        let steps = [0, 4, 1, 7, 2].map(|i| ReplayStep::Play(Position::ALL[i]));
        let report = replay(&steps);
        assert_eq!(
            report.render(),
            "X|X|X\n-+-+-\n3|O|5\n-+-+-\n6|O|8\n\nGagnant : X\nCoup 5 / 5 (ignorés : 0)"
        );
    }

    #[test]
    fn test_numbers_printed_on_board_replay_to_same_cell() {
        let report = replay(&[ReplayStep::Play(Position::Center)]);
        let board = report.history.current_board().display();
        assert!(board.starts_with("0|1|2\n-+-+-\n3|X|5"));

        for token in board.split(['|', '\n']).filter(|t| t.parse::<usize>().is_ok()) {
            let step = ReplayStep::parse(token).expect("printed cell number parses");
            let ReplayStep::Play(pos) = step else {
                panic!("expected a play step for {token}");
            };
            assert_eq!(pos.to_index().to_string(), token);
            assert!(report.history.current_board().is_empty(pos));
        }
    }
}
