//! Dashboard stats cards component
//!
//! Renders the four summary cards above the tabs

use super::super::state::DashboardState;
use super::super::utils::{
    BRAND_CYAN, BRAND_GREEN, BRAND_PURPLE, format_compute_units, format_total_cost,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// One summary card: title, value and caption.
struct StatsCard {
    title: &'static str,
    value: String,
    description: &'static str,
    accent: Color,
}

/// Render the summary row. Values always cover every task, whatever tab is active.
pub fn render_stats(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let stats = state.stats();
    let cards = [
        StatsCard {
            title: "Total Tasks",
            value: stats.total_tasks.to_string(),
            description: "Total tasks created",
            accent: BRAND_CYAN,
        },
        StatsCard {
            title: "Total Compute",
            value: format_compute_units(stats.total_compute_units),
            description: "Total compute units allocated",
            accent: BRAND_GREEN,
        },
        StatsCard {
            title: "Total Cost",
            value: format_total_cost(stats.total_cost),
            description: "Total cost of all tasks",
            accent: BRAND_PURPLE,
        },
        StatsCard {
            title: "Total Models",
            value: stats.total_models.to_string(),
            description: "Total models used",
            accent: BRAND_CYAN,
        },
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(card.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.description,
                Style::default().fg(Color::Gray),
            )),
        ];
        let block = Block::default()
            .title(card.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}
