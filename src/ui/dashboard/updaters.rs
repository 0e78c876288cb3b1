//! Dashboard state update logic
//!
//! Ticks and key handling for the workspace dashboard

use super::state::{DashboardState, DashboardTab};
use crate::consts::cli_consts::CARD_COLUMNS;
use crate::events::Event;

use crossterm::event::KeyCode;

/// What the app should do after the dashboard handled a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    /// Open the detail screen for the task with this id.
    OpenTask(String),
}

impl DashboardState {
    /// Advance the animation tick and drain queued events into the activity log.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Handle a key press while the workspace is shown.
    pub fn handle_key(&mut self, code: KeyCode) -> DashboardAction {
        match code {
            KeyCode::Tab | KeyCode::Right => self.set_active_tab(self.active_tab().next()),
            KeyCode::BackTab | KeyCode::Left => self.set_active_tab(self.active_tab().previous()),
            KeyCode::Char('1') => self.set_active_tab(DashboardTab::Overview),
            KeyCode::Char('2') => self.set_active_tab(DashboardTab::Training),
            KeyCode::Char('3') => self.set_active_tab(DashboardTab::Predict),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(CARD_COLUMNS as isize),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-(CARD_COLUMNS as isize)),
            KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Char('p') => self.move_selection(-1),
            KeyCode::Char('n') => {
                self.add_event(Event::unavailable(
                    "Task creation is not available in this workspace",
                ));
            }
            KeyCode::Char('s') => {
                self.add_event(Event::unavailable(
                    "Settings are changed with `corenet config`",
                ));
            }
            KeyCode::Enter => {
                if let Some(task) = self.selected_task() {
                    let id = task.id.clone();
                    self.add_event(Event::task_opened(format!("Opened task {}", id)));
                    return DashboardAction::OpenTask(id);
                }
            }
            _ => {}
        }
        DashboardAction::None
    }

    /// Move the card selection by `delta`, staying inside the visible list.
    fn move_selection(&mut self, delta: isize) {
        self.set_selected(self.selected().saturating_add_signed(delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_store::mock_tasks;

    fn state() -> DashboardState {
        DashboardState::new(mock_tasks().to_vec(), DashboardTab::Overview, false)
    }

    #[test]
    fn test_tab_keys_switch_tabs() {
        let mut state = state();
        state.handle_key(KeyCode::Tab);
        assert_eq!(state.active_tab(), DashboardTab::Training);
        state.handle_key(KeyCode::Right);
        assert_eq!(state.active_tab(), DashboardTab::Predict);
        state.handle_key(KeyCode::Left);
        assert_eq!(state.active_tab(), DashboardTab::Training);
        state.handle_key(KeyCode::Char('1'));
        assert_eq!(state.active_tab(), DashboardTab::Overview);
        state.handle_key(KeyCode::Char('3'));
        assert_eq!(state.active_tab(), DashboardTab::Predict);
    }

    #[test]
    fn test_arrow_keys_move_by_grid_row() {
        let mut state = state();
        state.handle_key(KeyCode::Down);
        assert_eq!(state.selected(), CARD_COLUMNS);
        state.handle_key(KeyCode::Char('l'));
        assert_eq!(state.selected(), CARD_COLUMNS + 1);
        state.handle_key(KeyCode::Up);
        assert_eq!(state.selected(), 1);
        state.handle_key(KeyCode::Up);
        assert_eq!(state.selected(), 0);
        state.handle_key(KeyCode::Char('p'));
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_selection_stops_at_last_card() {
        let mut state = state();
        for _ in 0..10 {
            state.handle_key(KeyCode::Down);
        }
        assert_eq!(state.selected(), mock_tasks().len() - 1);
    }

    #[test]
    fn test_enter_opens_selected_task() {
        let mut state = state();
        state.handle_key(KeyCode::Char('2'));
        state.handle_key(KeyCode::Char('l'));
        assert_eq!(
            state.handle_key(KeyCode::Enter),
            DashboardAction::OpenTask("task-003".to_string())
        );
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut state = DashboardState::new(Vec::new(), DashboardTab::Overview, false);
        assert_eq!(state.handle_key(KeyCode::Enter), DashboardAction::None);
    }

    #[test]
    fn test_create_task_is_a_stub() {
        let mut state = state();
        assert_eq!(state.handle_key(KeyCode::Char('n')), DashboardAction::None);
        assert_eq!(state.tasks().len(), mock_tasks().len());

        state.update();
        let last = state.activity_logs.back().unwrap();
        assert!(last.msg.contains("not available"));
        assert!(state.pending_events.is_empty());
    }

    #[test]
    fn test_settings_key_points_to_config_command() {
        let mut state = state();
        assert_eq!(state.handle_key(KeyCode::Char('s')), DashboardAction::None);

        state.update();
        let last = state.activity_logs.back().unwrap();
        assert!(last.msg.contains("corenet config"));
    }

    #[test]
    fn test_update_advances_tick() {
        let mut state = state();
        state.update();
        state.update();
        assert_eq!(state.tick, 2);
    }
}
