//! Keyboard handling for the game screen.
//!
//! Terminals report key presses, not key state. When the terminal supports
//! release events (keyboard enhancement) held directions are exact;
//! otherwise every press or auto-repeat keeps a direction held for a short
//! window. Restart and quit are one-shot requests consumed by the next tick.

use crate::road::RoadInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// What a key means in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Restart,
    Quit,
    Other,
}

/// Map a key event to a game key.
pub fn map_key(key: &KeyEvent) -> GameKey {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return GameKey::Quit;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => GameKey::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => GameKey::Right,
        KeyCode::Char('r') | KeyCode::Char('R') => GameKey::Restart,
        KeyCode::Esc => GameKey::Quit,
        _ => GameKey::Other,
    }
}

/// Held state for one direction.
#[derive(Debug, Clone, Copy, Default)]
struct Held {
    /// Pressed and not yet released (release-reporting terminals).
    down: bool,
    /// Held until this instant (press-only terminals).
    until: Option<Instant>,
}

impl Held {
    fn is_held(&self, now: Instant) -> bool {
        self.down || self.until.is_some_and(|until| now < until)
    }
}

/// Collects key events between ticks and produces a [`RoadInput`].
#[derive(Debug, Clone)]
pub struct InputState {
    reports_release: bool,
    hold_window: Duration,
    left: Held,
    right: Held,
    restart: bool,
    quit: bool,
}

impl InputState {
    /// `reports_release`: the terminal sends key release events.
    pub fn new(reports_release: bool, hold_window: Duration) -> Self {
        Self {
            reports_release,
            hold_window,
            left: Held::default(),
            right: Held::default(),
            restart: false,
            quit: false,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        let game_key = map_key(key);
        let pressed = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);

        let held = match game_key {
            GameKey::Left => &mut self.left,
            GameKey::Right => &mut self.right,
            GameKey::Restart => {
                self.restart |= pressed;
                return;
            }
            GameKey::Quit => {
                self.quit |= pressed;
                return;
            }
            GameKey::Other => return,
        };

        if pressed {
            if self.reports_release {
                held.down = true;
            } else {
                held.until = Some(now + self.hold_window);
            }
        } else {
            held.down = false;
            held.until = None;
        }
    }

    /// Input for the tick at `now`. Clears the one-shot requests.
    pub fn take(&mut self, now: Instant) -> RoadInput {
        let input = RoadInput {
            left: self.left.is_held(now),
            right: self.right.is_held(now),
            restart: self.restart,
            quit: self.quit,
        };
        self.restart = false;
        self.quit = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    const WINDOW: Duration = Duration::from_millis(150);

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyEventKind::Press)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(&press(KeyCode::Left)), GameKey::Left);
        assert_eq!(map_key(&press(KeyCode::Char('a'))), GameKey::Left);
        assert_eq!(map_key(&press(KeyCode::Char('A'))), GameKey::Left);
        assert_eq!(map_key(&press(KeyCode::Right)), GameKey::Right);
        assert_eq!(map_key(&press(KeyCode::Char('d'))), GameKey::Right);
        assert_eq!(map_key(&press(KeyCode::Char('r'))), GameKey::Restart);
        assert_eq!(map_key(&press(KeyCode::Esc)), GameKey::Quit);
        assert_eq!(map_key(&press(KeyCode::Char('x'))), GameKey::Other);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), GameKey::Quit);
    }

    #[test]
    fn test_press_only_terminal_holds_for_window() {
        let now = Instant::now();
        let mut input = InputState::new(false, WINDOW);
        input.handle_key(&press(KeyCode::Left), now);

        assert!(input.take(now).left);
        assert!(input.take(now + Duration::from_millis(100)).left);
        assert!(!input.take(now + Duration::from_millis(200)).left);
    }

    #[test]
    fn test_repeat_extends_hold() {
        let now = Instant::now();
        let mut input = InputState::new(false, WINDOW);
        input.handle_key(&press(KeyCode::Right), now);
        input.handle_key(
            &key(KeyCode::Right, KeyEventKind::Repeat),
            now + Duration::from_millis(100),
        );
        assert!(input.take(now + Duration::from_millis(200)).right);
    }

    #[test]
    fn test_release_terminal_holds_until_release() {
        let now = Instant::now();
        let mut input = InputState::new(true, WINDOW);
        input.handle_key(&press(KeyCode::Left), now);
        assert!(input.take(now + Duration::from_secs(5)).left);

        input.handle_key(
            &key(KeyCode::Left, KeyEventKind::Release),
            now + Duration::from_secs(5),
        );
        assert!(!input.take(now + Duration::from_secs(5)).left);
    }

    #[test]
    fn test_both_directions_held() {
        let now = Instant::now();
        let mut input = InputState::new(true, WINDOW);
        input.handle_key(&press(KeyCode::Left), now);
        input.handle_key(&press(KeyCode::Right), now);
        let taken = input.take(now);
        assert!(taken.left && taken.right);
    }

    #[test]
    fn test_restart_and_quit_are_one_shot() {
        let now = Instant::now();
        let mut input = InputState::new(false, WINDOW);
        input.handle_key(&press(KeyCode::Char('r')), now);
        input.handle_key(&press(KeyCode::Esc), now);

        let first = input.take(now);
        assert!(first.restart);
        assert!(first.quit);

        let second = input.take(now);
        assert!(!second.restart);
        assert!(!second.quit);
    }

    #[test]
    fn test_release_of_restart_is_ignored() {
        let now = Instant::now();
        let mut input = InputState::new(true, WINDOW);
        input.handle_key(&key(KeyCode::Char('r'), KeyEventKind::Release), now);
        assert!(!input.take(now).restart);
    }
}
