//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{SPLASH_DURATION, TICK_RATE};
use crate::events::Event as ActivityEvent;
use crate::task::Task;
use crate::task_store::find_task;
use crate::ui::dashboard::{DashboardAction, DashboardState, DashboardTab, render_dashboard};
use crate::ui::home::render_home;
use crate::ui::splash::render_splash;
use crate::ui::task_detail::render_task_detail;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub default_tab: DashboardTab,
}

impl UIConfig {
    pub fn new(with_background_color: bool, default_tab: DashboardTab) -> Self {
        Self {
            with_background_color,
            default_tab,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Landing page.
    Home,
    /// Workspace dashboard with the task grid.
    Workspace,
    /// Detail view for one task.
    TaskDetail(String),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Workspace state. Lives as long as the app so the tab survives navigation.
    dashboard: DashboardState,

    /// Set once the user asks to quit.
    should_quit: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(tasks: Vec<Task>, ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(
                tasks,
                ui_config.default_tab,
                ui_config.with_background_color,
            ),
            should_quit: false,
        }
    }

    pub fn current_screen(&self) -> &Screen {
        &self.current_screen
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn navigate(&mut self, screen: Screen) {
        if screen != self.current_screen {
            let label = match &screen {
                Screen::Splash => "Splash".to_string(),
                Screen::Home => "Home".to_string(),
                Screen::Workspace => "Workspace".to_string(),
                Screen::TaskDetail(id) => format!("Task {}", id),
            };
            self.dashboard
                .add_event(ActivityEvent::navigation(format!("Navigated to {}", label)));
        }
        self.current_screen = screen;
    }

    /// Leave the splash screen.
    pub fn finish_splash(&mut self) {
        if self.current_screen == Screen::Splash {
            self.navigate(Screen::Home);
        }
    }

    /// Advance animations and flush queued activity.
    pub fn tick(&mut self) {
        self.dashboard.update();
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.current_screen.clone() {
            Screen::Splash => {
                if code == KeyCode::Esc {
                    self.should_quit = true;
                } else {
                    // Any other key skips the splash screen
                    self.finish_splash();
                }
            }
            Screen::Home => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('w') | KeyCode::Enter => self.navigate(Screen::Workspace),
                _ => {}
            },
            Screen::Workspace => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('h') => self.navigate(Screen::Home),
                _ => {
                    if let DashboardAction::OpenTask(id) = self.dashboard.handle_key(code) {
                        self.navigate(Screen::TaskDetail(id));
                    }
                }
            },
            Screen::TaskDetail(_) => match code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('w') => {
                    self.navigate(Screen::Workspace)
                }
                KeyCode::Char('h') => self.navigate(Screen::Home),
                _ => {}
            },
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        app.tick();
        terminal.draw(|f| render(f, &app))?;

        if splash_start.elapsed() >= SPLASH_DURATION {
            app.finish_splash();
        }

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen() {
        Screen::Splash => render_splash(f),
        Screen::Home => render_home(f),
        Screen::Workspace => render_dashboard(f, app.dashboard()),
        Screen::TaskDetail(id) => {
            let task = find_task(app.dashboard().tasks(), id);
            render_task_detail(f, id, task, app.dashboard().tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_store::mock_tasks;

    fn new_app() -> App {
        App::new(mock_tasks().to_vec(), UIConfig::default())
    }

    #[test]
    fn test_starts_on_splash_and_any_key_skips_it() {
        let mut app = new_app();
        assert_eq!(app.current_screen(), &Screen::Splash);
        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.current_screen(), &Screen::Home);
    }

    #[test]
    fn test_open_task_and_come_back_keeps_tab() {
        let mut app = new_app();
        app.finish_splash();
        app.handle_key(KeyCode::Char('w'));
        assert_eq!(app.current_screen(), &Screen::Workspace);

        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.current_screen(),
            &Screen::TaskDetail("task-002".to_string())
        );

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.current_screen(), &Screen::Workspace);
        assert_eq!(app.dashboard().active_tab(), DashboardTab::Predict);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_default_tab_from_config() {
        let app = App::new(
            mock_tasks().to_vec(),
            UIConfig::new(false, DashboardTab::Training),
        );
        assert_eq!(app.dashboard().active_tab(), DashboardTab::Training);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = new_app();
        app.finish_splash();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_navigation_is_logged() {
        let mut app = new_app();
        app.finish_splash();
        app.handle_key(KeyCode::Char('w'));
        app.tick();
        let messages: Vec<&str> = app
            .dashboard()
            .activity_logs
            .iter()
            .map(|e| e.msg.as_str())
            .collect();
        assert_eq!(messages, ["Navigated to Home", "Navigated to Workspace"]);
    }
}
