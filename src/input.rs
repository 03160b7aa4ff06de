use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use crate::entities::{Direction, GameState};

/// Frames a press keeps a key held on terminals that never report releases.
/// Key repeat refreshes it well before it runs out.
pub const HOLD_WINDOW: u64 = 4;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(Direction),
    Fire,
    /// Pointer position in terminal cells
    PointerMoved { column: u16, row: u16 },
    Pause,
    Resume,
    Restart,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Hold {
    #[default]
    Released,
    UntilRelease,
    UntilFrame(u64),
}

impl Hold {
    fn is_held(self, frame: u64) -> bool {
        match self {
            Hold::Released => false,
            Hold::UntilRelease => true,
            Hold::UntilFrame(last) => frame <= last,
        }
    }
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    up: Hold,
    down: Hold,
    left: Hold,
    right: Hold,
}

impl KeyState {
    fn slot(&mut self, direction: Direction) -> &mut Hold {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// Manages input polling and translates raw terminal events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
    /// Whether the terminal reports key releases (keyboard enhancement)
    release_events: bool,
    frame: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InputManager {
    pub fn new(release_events: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
            release_events,
            frame: 0,
        }
    }

    /// Polls for all pending terminal events without blocking.
    /// Should be called once per frame before `get_actions`.
    pub fn poll_events(&mut self, game_state: GameState) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.handle_event(event, game_state);
        }

        Ok(())
    }

    /// Feeds one terminal event through the key and pointer tracking.
    pub fn handle_event(&mut self, event: Event, game_state: GameState) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event, game_state),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        if matches!(
            mouse_event.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_)
        ) {
            // Only the latest position this frame matters
            self.oneshot_actions
                .retain(|action| !matches!(action, InputAction::PointerMoved { .. }));
            self.oneshot_actions.push(InputAction::PointerMoved {
                column: mouse_event.column,
                row: mouse_event.row,
            });
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: GameState) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, game_state),
            KeyEventKind::Repeat => {
                if let Some(direction) = direction_for(key_event.code) {
                    self.hold(direction);
                }
            }
            KeyEventKind::Release => {
                if let Some(direction) = direction_for(key_event.code) {
                    *self.key_state.slot(direction) = Hold::Released;
                }
            }
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: GameState) {
        // Quit works in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        let is_pause_key = matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P'));
        match game_state {
            GameState::Playing => {
                if is_pause_key {
                    self.oneshot_actions.push(InputAction::Pause);
                    return;
                }
            }
            GameState::Paused => {
                if is_pause_key {
                    self.oneshot_actions.push(InputAction::Resume);
                }
                return;
            }
            GameState::GameOver => {
                if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.oneshot_actions.push(InputAction::Restart);
                }
                return;
            }
        }

        if key_event.code == KeyCode::Char(' ') {
            self.oneshot_actions.push(InputAction::Fire);
        } else if let Some(direction) = direction_for(key_event.code) {
            self.hold(direction);
        }
    }

    fn hold(&mut self, direction: Direction) {
        let hold = if self.release_events {
            Hold::UntilRelease
        } else {
            Hold::UntilFrame(self.frame + HOLD_WINDOW)
        };
        *self.key_state.slot(direction) = hold;
    }

    /// Returns all actions for this frame (one-shot first, then held keys).
    /// Must be called after `poll_events`.
    pub fn get_actions(&self, game_state: GameState) -> Vec<InputAction> {
        let mut actions = self.oneshot_actions.clone();

        if game_state == GameState::Playing {
            let held = [
                (self.key_state.up, Direction::Up),
                (self.key_state.left, Direction::Left),
                (self.key_state.down, Direction::Down),
                (self.key_state.right, Direction::Right),
            ];
            for (hold, direction) in held {
                if hold.is_held(self.frame) {
                    actions.push(InputAction::Move(direction));
                }
            }
        }

        actions
    }

    /// Advances the hold-window clock and drops consumed one-shot actions.
    pub fn end_frame(&mut self) {
        self.frame += 1;
        self.oneshot_actions.clear();
    }
}

/// W/A/S/D and the arrow keys
fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ))
    }

    fn moved(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_space_fires_once() {
        let mut input = InputManager::new(true);
        input.handle_event(press(KeyCode::Char(' ')), GameState::Playing);
        assert_eq!(input.get_actions(GameState::Playing), vec![InputAction::Fire]);
        input.end_frame();
        assert!(input.get_actions(GameState::Playing).is_empty());
    }

    #[test]
    fn test_held_until_release_with_enhancement() {
        let mut input = InputManager::new(true);
        input.handle_event(press(KeyCode::Char('d')), GameState::Playing);
        for _ in 0..10 {
            assert_eq!(
                input.get_actions(GameState::Playing),
                vec![InputAction::Move(Direction::Right)]
            );
            input.end_frame();
        }
        input.handle_event(release(KeyCode::Char('d')), GameState::Playing);
        assert!(input.get_actions(GameState::Playing).is_empty());
    }

    #[test]
    fn test_hold_window_without_release_events() {
        let mut input = InputManager::new(false);
        input.handle_event(press(KeyCode::Char('w')), GameState::Playing);
        for _ in 0..=HOLD_WINDOW {
            assert_eq!(
                input.get_actions(GameState::Playing),
                vec![InputAction::Move(Direction::Up)]
            );
            input.end_frame();
        }
        assert!(input.get_actions(GameState::Playing).is_empty());
    }

    #[test]
    fn test_diagonal_movement() {
        let mut input = InputManager::new(true);
        input.handle_event(press(KeyCode::Char('w')), GameState::Playing);
        input.handle_event(press(KeyCode::Char('a')), GameState::Playing);
        assert_eq!(
            input.get_actions(GameState::Playing),
            vec![
                InputAction::Move(Direction::Up),
                InputAction::Move(Direction::Left)
            ]
        );
    }

    #[test]
    fn test_latest_pointer_wins() {
        let mut input = InputManager::new(true);
        input.handle_event(moved(3, 4), GameState::Playing);
        input.handle_event(moved(10, 12), GameState::Playing);
        assert_eq!(
            input.get_actions(GameState::Playing),
            vec![InputAction::PointerMoved { column: 10, row: 12 }]
        );
    }

    #[test]
    fn test_state_specific_keys() {
        let mut input = InputManager::new(true);
        input.handle_event(press(KeyCode::Char('p')), GameState::Playing);
        assert_eq!(input.get_actions(GameState::Playing), vec![InputAction::Pause]);
        input.end_frame();

        input.handle_event(press(KeyCode::Char('p')), GameState::Paused);
        input.handle_event(press(KeyCode::Char(' ')), GameState::Paused);
        assert_eq!(input.get_actions(GameState::Paused), vec![InputAction::Resume]);
        input.end_frame();

        input.handle_event(press(KeyCode::Char('r')), GameState::GameOver);
        assert_eq!(
            input.get_actions(GameState::GameOver),
            vec![InputAction::Restart]
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut input = InputManager::new(true);
        input.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameState::GameOver,
        );
        assert_eq!(input.get_actions(GameState::GameOver), vec![InputAction::Quit]);
    }
}
