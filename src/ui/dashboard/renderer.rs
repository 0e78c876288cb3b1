//! Dashboard main renderer

use super::components::header::NavLink;
use super::components::{footer, header, logs, stats, tabs, task_cards};
use super::state::DashboardState;
use super::utils::{BRAND_CYAN, BRAND_GREEN};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

pub const DASHBOARD_HINTS: &str =
    "[Tab/1-3] Tabs | [Arrows] Select | [Enter] Details | [S] Settings | [N] New Task | [H] Home";

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], NavLink::Workspace);
    render_title(f, main_chunks[1]);
    stats::render_stats(f, main_chunks[2], state);
    tabs::render_tabs(f, main_chunks[3], state);
    task_cards::render_task_cards(f, main_chunks[4], state);
    logs::render_logs_panel(f, main_chunks[5], state);
    footer::render_footer(f, main_chunks[6], DASHBOARD_HINTS);
}

fn render_title(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(28)])
        .split(area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Workspace ",
                Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Dashboard",
                Style::default().fg(BRAND_CYAN).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Manage and monitor your CoreNet compute tasks",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let actions = Line::from(vec![
        Span::styled("[S] Settings", Style::default().fg(Color::Magenta)),
        Span::raw("  "),
        Span::styled(
            "[N] New Task",
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(actions).alignment(Alignment::Right), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::DashboardTab;
    use crate::task_store::mock_tasks;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(state: &DashboardState) -> String {
        let backend = TestBackend::new(160, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_overview_renders_stats_and_all_cards() {
        let state = DashboardState::new(mock_tasks().to_vec(), DashboardTab::Overview, false);
        let screen = render_to_string(&state);

        assert!(screen.contains("Workspace Dashboard"));
        assert!(screen.contains("[S] Settings  [N] New Task"));
        assert!(screen.contains("940 CU"));
        assert!(screen.contains("89.25 SOL"));
        assert!(screen.contains("Image Classifier Fine-tune"));
        assert!(screen.contains("Sentiment Batch Inference"));
        assert!(screen.contains("250,000 samples"));
    }

    #[test]
    fn test_training_tab_hides_prediction_cards() {
        let state = DashboardState::new(mock_tasks().to_vec(), DashboardTab::Training, false);
        let screen = render_to_string(&state);

        assert!(screen.contains("LLM Instruction Tuning"));
        assert!(!screen.contains("Fraud Scoring"));
        assert!(!screen.contains("samples"));
        // Totals still cover every task
        assert!(screen.contains("940 CU"));
    }

    #[test]
    fn test_empty_workspace_renders_placeholder() {
        let state = DashboardState::new(Vec::new(), DashboardTab::Overview, true);
        let screen = render_to_string(&state);

        assert!(screen.contains("No tasks in this view"));
        assert!(screen.contains("0.00 SOL"));
    }
}
