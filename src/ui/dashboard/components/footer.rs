//! Dashboard footer component
//!
//! Renders key bindings and version info

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer with the key bindings for the current screen.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, hints: &str) {
    let footer_text = format!(
        "{} | [Q] Quit | CoreNet v{}",
        hints,
        env!("CARGO_PKG_VERSION")
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
