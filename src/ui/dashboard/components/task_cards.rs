//! Task card grid component
//!
//! Renders the active tab's tasks as a grid of cards

use super::super::state::DashboardState;
use super::super::utils::{BRAND_CYAN, BRAND_PURPLE, card_fields, status_style};
use crate::consts::cli_consts::{CARD_COLUMNS, CARD_HEIGHT};
use crate::task::Task;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the card grid, scrolled so the selected card is visible.
pub fn render_task_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let tasks = state.visible_tasks();
    if tasks.is_empty() {
        let empty = Paragraph::new("No tasks in this view")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = state.selected() / CARD_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let row = first_row + row_offset;
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
            .split(*row_area);

        for (col, col_area) in col_areas.iter().enumerate() {
            let index = row * CARD_COLUMNS + col;
            if let Some(task) = tasks.get(index) {
                render_task_card(f, *col_area, task, index == state.selected(), state.tick);
            }
        }
    }
}

/// Render one task card.
pub fn render_task_card(f: &mut Frame, area: Rect, task: &Task, selected: bool, tick: usize) {
    let style = status_style(task.status);
    let mut glyph_style = Style::default().fg(style.color);
    if style.spinning {
        glyph_style = glyph_style.add_modifier(Modifier::BOLD);
    }

    let border_color = if selected {
        BRAND_PURPLE
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(Line::from(Span::styled(
            task.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .title(
            Line::from(Span::styled(format!(" {} ", style.glyph(tick)), glyph_style))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = card_fields(task);
    // model, progress label and gauge, then one row per field
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); 3 + fields.len()])
        .split(inner);

    f.render_widget(
        Paragraph::new(task.model.as_str()).style(Style::default().fg(Color::Gray)),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(field_line("Progress", format!("{}%", task.progress))),
        rows[1],
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(BRAND_CYAN).bg(Color::Black))
        .percent(u16::from(task.progress.min(100)))
        .label("");
    f.render_widget(gauge, rows[2]);

    for (i, (label, value)) in fields.into_iter().enumerate() {
        f.render_widget(Paragraph::new(field_line(label, value)), rows[3 + i]);
    }
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<15}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
