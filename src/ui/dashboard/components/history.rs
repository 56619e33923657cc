//! Dashboard transaction history component
//!
//! Renders the recent transaction cache, most recent first

use super::super::state::DashboardState;
use super::super::utils::shorten_signature;
use crate::model::ConfirmationLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn status_color(status: ConfirmationLevel) -> Color {
    match status {
        ConfirmationLevel::Finalized => Color::Green,
        ConfirmationLevel::Confirmed => Color::LightGreen,
        ConfirmationLevel::Processed => Color::Yellow,
        ConfirmationLevel::Unknown => Color::DarkGray,
    }
}

/// Render the transaction history panel.
pub fn render_history_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding
    let max_rows = (area.height.saturating_sub(3)) as usize;
    let row_count = if max_rows > 0 { max_rows } else { 1 };

    let lines: Vec<Line> = if !state.snapshot.is_connected() {
        vec![Line::from("Connect a wallet to fetch history")]
    } else if state.snapshot.history.is_empty() {
        vec![Line::from("No transactions fetched")]
    } else {
        state
            .snapshot
            .history
            .iter()
            .take(row_count)
            .map(|record| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:<11}", shorten_signature(&record.signature)),
                        Style::default().fg(Color::LightBlue),
                    ),
                    Span::styled(
                        format!("{:<10}", record.status),
                        Style::default().fg(status_color(record.status)),
                    ),
                    Span::styled(
                        record.time.format("%m-%d %H:%M").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if record.err.is_some() {
                    spans.push(Span::styled(
                        "  failed",
                        Style::default().fg(Color::Red),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    let block = Block::default()
        .title("TRANSACTION HISTORY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
