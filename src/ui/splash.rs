//! Splash screen rendering module.

use crate::ui::dashboard::utils::{BRAND_CYAN, BRAND_GREEN, BRAND_PURPLE};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOGO_NAME: &str = r#"
   ██████╗  ██████╗  ██████╗  ███████╗  ███╗   ██╗  ███████╗  ████████╗
  ██╔════╝ ██╔═══██╗ ██╔══██╗ ██╔════╝  ████╗  ██║  ██╔════╝  ╚══██╔══╝
  ██║      ██║   ██║ ██████╔╝ █████╗    ██╔██╗ ██║  █████╗       ██║
  ██║      ██║   ██║ ██╔══██╗ ██╔══╝    ██║╚██╗██║  ██╔══╝       ██║
  ╚██████╗ ╚██████╔╝ ██║  ██║ ███████╗  ██║ ╚████║  ███████╗     ██║
   ╚═════╝  ╚═════╝  ╚═╝  ╚═╝ ╚══════╝  ╚═╝  ╚═══╝  ╚══════╝     ╚═╝
"#;

pub fn render_splash(f: &mut Frame) {
    // Gradient down the logo rows
    let gradient = [
        BRAND_GREEN,
        BRAND_GREEN,
        BRAND_CYAN,
        BRAND_CYAN,
        BRAND_PURPLE,
        BRAND_PURPLE,
    ];
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .enumerate()
        .map(|(i, line)| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(gradient[i % gradient.len()])
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));

    lines.push(
        Span::styled(
            format!("Decentralized compute marketplace · v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(BRAND_CYAN)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    let logo_height = (lines.len() + 2) as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(logo_height)) / 2),
            Constraint::Length(logo_height),
            Constraint::Min((f.area().height.saturating_sub(logo_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let logo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(logo, centered_area);
}
