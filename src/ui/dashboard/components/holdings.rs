//! Dashboard token holdings component
//!
//! Renders the token-2022 holdings cache

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the token holdings panel.
pub fn render_holdings_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding
    let max_rows = (area.height.saturating_sub(3)) as usize;
    let row_count = if max_rows > 0 { max_rows } else { 1 };

    let lines: Vec<Line> = if !state.snapshot.is_connected() {
        vec![Line::from("Connect a wallet to list holdings")]
    } else if state.snapshot.holdings.is_empty() {
        vec![Line::from("No token-2022 holdings")]
    } else {
        state
            .snapshot
            .holdings
            .iter()
            .take(row_count)
            .map(|holding| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<10}", holding.symbol),
                        Style::default()
                            .fg(Color::LightCyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:>18}  ", holding.display_amount()),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(holding.name.clone(), Style::default().fg(Color::Gray)),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .title("TOKEN HOLDINGS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
