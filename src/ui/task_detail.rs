//! Task detail screen, keyed by task id

use crate::task::Task;
use crate::ui::dashboard::components::footer::render_footer;
use crate::ui::dashboard::components::header::{NavLink, render_header};
use crate::ui::dashboard::utils::{BRAND_CYAN, BRAND_PURPLE, detail_fields, status_style};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

pub const DETAIL_HINTS: &str = "[Esc] Back to Workspace";

/// Renders the detail screen. `task` is `None` when the id matches nothing.
pub fn render_task_detail(f: &mut Frame, task_id: &str, task: Option<&Task>, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    render_header(f, chunks[0], NavLink::Workspace);
    render_footer(f, chunks[3], DETAIL_HINTS);

    let block = Block::default()
        .title(format!("TASK {}", task_id))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND_PURPLE))
        .padding(Padding::uniform(1));

    let Some(task) = task else {
        let missing = Paragraph::new(format!("No task with id {}", task_id))
            .style(Style::default().fg(Color::Red))
            .block(block);
        f.render_widget(missing, chunks[1]);
        return;
    };

    let style = status_style(task.status);
    let lines: Vec<Line> = detail_fields(task)
        .into_iter()
        .map(|(label, value)| {
            let value_style = if label == "Status" {
                Style::default().fg(style.color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let value = if label == "Status" {
                format!("{} {}", style.glyph(tick), value)
            } else {
                value
            };
            Line::from(vec![
                Span::styled(format!("{:<15}", label), Style::default().fg(Color::Gray)),
                Span::styled(value, value_style),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), chunks[1]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Progress")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(BRAND_CYAN).add_modifier(Modifier::BOLD))
        .percent(u16::from(task.progress.min(100)))
        .label(format!("{}%", task.progress));
    f.render_widget(gauge, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_store::{find_task, mock_tasks};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_detail_shows_kind_specific_field() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let task = find_task(mock_tasks(), "task-004");
        terminal
            .draw(|f| render_task_detail(f, "task-004", task, 0))
            .unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Fraud Scoring"));
        assert!(text.contains("AI Predict"));
        assert!(text.contains("1,200,000 samples"));
        assert!(!text.contains("Epochs"));
    }

    #[test]
    fn test_unknown_id_renders_message() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| render_task_detail(f, "task-404", None, 0))
            .unwrap();
        assert!(screen_text(&terminal).contains("No task with id task-404"));
    }
}
