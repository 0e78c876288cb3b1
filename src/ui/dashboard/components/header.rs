//! Site header component
//!
//! Renders the brand, search placeholder, navigation links and wallet placeholder

use super::super::utils::{BRAND_CYAN, BRAND_GREEN, BRAND_PURPLE};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use strum::IntoEnumIterator;

/// Header navigation links, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::EnumIter)]
pub enum NavLink {
    Home,
    Model,
    Workspace,
    Explorer,
    Staking,
    Docs,
}

impl NavLink {
    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::Model => "Model",
            NavLink::Workspace => "WorkSpace",
            NavLink::Explorer => "Explorer",
            NavLink::Staking => "Staking",
            NavLink::Docs => "Docs",
        }
    }

    /// Shortcut key, for links that lead to a screen in this app.
    pub fn shortcut(&self) -> Option<char> {
        match self {
            NavLink::Home => Some('h'),
            NavLink::Workspace => Some('w'),
            _ => None,
        }
    }
}

/// Build the styled navigation line, highlighting `active`.
pub fn nav_line(active: NavLink) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, link) in NavLink::iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if link == active {
            Style::default()
                .fg(BRAND_PURPLE)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if link.shortcut().is_some() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = match link.shortcut() {
            Some(key) => format!("{} [{}]", link.label(), key),
            None => link.label().to_string(),
        };
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

/// Render the sticky site header.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, active: NavLink) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(BRAND_PURPLE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(62),
            Constraint::Length(18),
        ])
        .split(inner);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled("Core", Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD)),
        Span::styled("Net", Style::default().fg(BRAND_CYAN).add_modifier(Modifier::BOLD)),
    ]));
    f.render_widget(brand, chunks[0]);

    // Search and wallet are placeholders with no behavior of their own
    let search = Paragraph::new(" Search tasks, models...")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(search, chunks[1]);

    let nav = Paragraph::new(nav_line(active)).alignment(Alignment::Center);
    f.render_widget(nav, chunks[2]);

    let wallet = Paragraph::new("[ Connect Wallet ]")
        .alignment(Alignment::Right)
        .style(Style::default().fg(BRAND_PURPLE));
    f.render_widget(wallet, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_in_order() {
        let labels: Vec<&str> = NavLink::iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            ["Home", "Model", "WorkSpace", "Explorer", "Staking", "Docs"]
        );
    }

    #[test]
    fn test_nav_line_marks_shortcuts() {
        let text: String = nav_line(NavLink::Home)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.starts_with("Home [h] | Model | WorkSpace [w]"));
        assert!(text.ends_with("Docs"));
    }
}
