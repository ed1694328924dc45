use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::KeyConfig;

/// What a key press asks the viewer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    BottomUp,
    BottomDown,
    BothUp,
    BothDown,
    Reload,
    Quit,
}

impl KeyConfig {
    /// Map a key event to its bound action. Releases and repeats from
    /// terminals that report them are ignored.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        // Raw mode swallows SIGINT
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
        let KeyCode::Char(c) = key.code else {
            return None;
        };

        let bindings = [
            (self.quit, Action::Quit),
            (self.left_up, Action::LeftUp),
            (self.left_down, Action::LeftDown),
            (self.right_up, Action::RightUp),
            (self.right_down, Action::RightDown),
            (self.bottom_up, Action::BottomUp),
            (self.bottom_down, Action::BottomDown),
            (self.both_up, Action::BothUp),
            (self.both_down, Action::BothDown),
            (self.reload, Action::Reload),
        ];
        bindings
            .iter()
            .find(|(bound, _)| *bound == c)
            .map(|(_, action)| *action)
    }

    /// Key reference shown in the comparison pane before the first comparison
    pub fn help_lines(&self) -> Vec<String> {
        vec![
            "capdiff".to_string(),
            String::new(),
            format!("  {} / {}   left pane up / down", self.left_up, self.left_down),
            format!("  {} / {}   right pane up / down", self.right_up, self.right_down),
            format!("  {} / {}   both panes up / down", self.both_up, self.both_down),
            format!("  {} / {}   comparison up / down", self.bottom_up, self.bottom_down),
            format!("  {}       reload both captures", self.reload),
            format!("  {}       quit", self.quit),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_map_to_actions() {
        let keys = KeyConfig::default();
        assert_eq!(keys.action_for(&press('w')), Some(Action::LeftUp));
        assert_eq!(keys.action_for(&press('s')), Some(Action::LeftDown));
        assert_eq!(keys.action_for(&press('o')), Some(Action::RightUp));
        assert_eq!(keys.action_for(&press('l')), Some(Action::RightDown));
        assert_eq!(keys.action_for(&press('e')), Some(Action::BottomUp));
        assert_eq!(keys.action_for(&press('d')), Some(Action::BottomDown));
        assert_eq!(keys.action_for(&press('k')), Some(Action::BothUp));
        assert_eq!(keys.action_for(&press('j')), Some(Action::BothDown));
        assert_eq!(keys.action_for(&press('r')), Some(Action::Reload));
        assert_eq!(keys.action_for(&press('q')), Some(Action::Quit));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        let keys = KeyConfig::default();
        assert_eq!(keys.action_for(&press('x')), None);
        assert_eq!(
            keys.action_for(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let keys = KeyConfig::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keys.action_for(&key), Some(Action::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let keys = KeyConfig::default();
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(keys.action_for(&key), None);
    }

    #[test]
    fn rebound_quit_wins_over_overlapping_binding() {
        let keys = KeyConfig {
            quit: 'j',
            ..KeyConfig::default()
        };
        assert_eq!(keys.action_for(&press('j')), Some(Action::Quit));
        assert_eq!(keys.action_for(&press('q')), None);
    }

    #[test]
    fn help_mentions_every_binding() {
        let help = KeyConfig::default().help_lines().join("\n");
        for c in ['w', 's', 'o', 'l', 'e', 'd', 'k', 'j', 'r', 'q'] {
            assert!(help.contains(&format!("  {}", c)) || help.contains(&format!("/ {}", c)));
        }
    }
}
