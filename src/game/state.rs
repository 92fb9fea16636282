//! Game-state machine
//!
//! Menu -> Playing -> (Win | Lose). Win and Lose are terminal; leaving them
//! needs a fresh `Simulation`. Entities never write the state directly: they
//! return a proposed state and the simulation applies it through
//! [`GameState::transition`], which rejects anything the graph doesn't allow.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Win,
    Lose,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Win | GameState::Lose)
    }

    /// Is `self -> next` an edge of the state graph?
    pub fn can_transition_to(&self, next: GameState) -> bool {
        matches!(
            (self, next),
            (GameState::Menu, GameState::Playing)
                | (GameState::Playing, GameState::Win)
                | (GameState::Playing, GameState::Lose)
        )
    }

    /// Apply a proposed transition. Returns the new state, or `None` if the
    /// proposal was rejected (including re-entering the current state).
    pub fn transition(&mut self, next: GameState) -> Option<GameState> {
        if !self.can_transition_to(next) {
            return None;
        }
        *self = next;
        Some(next)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameState::Menu => "Menu",
            GameState::Playing => "Playing",
            GameState::Win => "Win",
            GameState::Lose => "Lose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [GameState; 4] = [GameState::Menu, GameState::Playing, GameState::Win, GameState::Lose];

    #[test]
    fn test_happy_paths() {
        let mut state = GameState::default();
        assert_eq!(state, GameState::Menu);
        assert_eq!(state.transition(GameState::Playing), Some(GameState::Playing));
        assert_eq!(state.transition(GameState::Win), Some(GameState::Win));

        let mut state = GameState::Playing;
        assert_eq!(state.transition(GameState::Lose), Some(GameState::Lose));
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        assert!(!GameState::Menu.is_terminal());
        assert!(!GameState::Playing.is_terminal());
        for terminal in [GameState::Win, GameState::Lose] {
            assert!(terminal.is_terminal());
            for next in ALL {
                let mut state = terminal;
                assert_eq!(state.transition(next), None);
                assert_eq!(state, terminal);
            }
        }
    }

    #[test]
    fn test_menu_cannot_skip_to_end() {
        let mut state = GameState::Menu;
        assert_eq!(state.transition(GameState::Win), None);
        assert_eq!(state.transition(GameState::Lose), None);
        assert_eq!(state.transition(GameState::Menu), None);
        assert_eq!(state, GameState::Menu);
    }

    #[test]
    fn test_playing_never_returns_to_menu() {
        let mut state = GameState::Playing;
        assert_eq!(state.transition(GameState::Menu), None);
        assert_eq!(state.transition(GameState::Playing), None);
        assert_eq!(state, GameState::Playing);
    }
}
