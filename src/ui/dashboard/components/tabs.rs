//! Dashboard tab bar component

use super::super::state::{DashboardState, DashboardTab};
use super::super::utils::BRAND_PURPLE;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Tabs};
use strum::IntoEnumIterator;

/// Render the Overview / Training / Prediction tab bar.
pub fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let titles: Vec<String> = DashboardTab::iter()
        .map(|tab| format!("{} ({})", tab.title(), tab.visible_tasks(state.tasks()).len()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_tab().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(BRAND_PURPLE)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, area);
}
