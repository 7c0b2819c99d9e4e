//! French display text.

use morpion_rules::{GameStatus, Move, Position};

/// Main title.
pub const TITLE: &str = "TIC-TAC-TOE Morpion";

/// History panel title.
pub const HISTORY_TITLE: &str = "Historique";

/// Help line shown at the bottom of the screen.
pub const HELP: &str =
    "Flèches/Entrée ou 1-9 : jouer | Tab : historique | [ ] : reculer/avancer | r : début | q : quitter";

/// Status line for the displayed snapshot.
pub fn status(status: GameStatus) -> String {
    match status {
        GameStatus::Won(player) => format!("Gagnant : {}", player),
        GameStatus::Draw => "Match nul".to_string(),
        GameStatus::InProgress { next } => format!("Joueur suivant : {}", next),
    }
}

/// Label of a history entry.
pub fn history_entry(index: usize, mv: Option<Move>) -> String {
    match (index, mv) {
        (0, _) => "Début de partie".to_string(),
        (n, Some(mv)) => format!("Aller au coup #{} ({} {})", n, mv.player, position(mv.position)),
        (n, None) => format!("Aller au coup #{}", n),
    }
}

/// Short French name of a cell.
pub fn position(pos: Position) -> &'static str {
    match pos {
        Position::TopLeft => "en haut à gauche",
        Position::TopCenter => "en haut",
        Position::TopRight => "en haut à droite",
        Position::MiddleLeft => "à gauche",
        Position::Center => "au centre",
        Position::MiddleRight => "à droite",
        Position::BottomLeft => "en bas à gauche",
        Position::BottomCenter => "en bas",
        Position::BottomRight => "en bas à droite",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpion_rules::Player;

    #[test]
    fn test_status_text() {
        assert_eq!(status(GameStatus::Won(Player::X)), "Gagnant : X");
        assert_eq!(status(GameStatus::Draw), "Match nul");
        assert_eq!(
            status(GameStatus::InProgress { next: Player::O }),
            "Joueur suivant : O"
        );
    }

    #[test]
    fn test_history_entry_text() {
        assert_eq!(history_entry(0, None), "Début de partie");
        assert_eq!(
            history_entry(3, Some(Move::new(Player::X, Position::Center))),
            "Aller au coup #3 (X au centre)"
        );
    }
}
