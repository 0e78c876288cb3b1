//! Home (landing) screen module

use crate::ui::dashboard::components::footer::render_footer;
use crate::ui::dashboard::components::header::{NavLink, render_header};
use crate::ui::dashboard::utils::{BRAND_CYAN, BRAND_GREEN};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const HOME_HINTS: &str = "[W] Open Workspace | [Enter] Open Workspace";

/// Renders the landing screen: site header, welcome text and footer.
pub fn render_home(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    render_header(f, chunks[0], NavLink::Home);

    let lines = vec![
        Line::from(Span::styled(
            "Home",
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Train and run AI models on the CoreNet compute network.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Press W to open your workspace.",
            Style::default().fg(BRAND_CYAN),
        )),
    ];
    let body = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(body, chunks[1]);

    render_footer(f, chunks[2], HOME_HINTS);
}
