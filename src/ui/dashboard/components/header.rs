//! Dashboard header component
//!
//! Renders the title and connection gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title and connection status gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("SOLDECK WALLET DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an outstanding action takes priority over the idle
    // connection state
    let busy = state.snapshot.busy;
    let (progress_text, gauge_color, progress_percent) = if busy.any() {
        let label = if busy.send_in_flight {
            "WORKING - Transfer in flight"
        } else if busy.airdrop_in_flight {
            "WORKING - Airdrop in flight"
        } else {
            "WORKING - Refreshing balance"
        };
        // Animated gauge - loops every 20 ticks for smooth animation
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (label.to_string(), Color::LightYellow, progress)
    } else if state.snapshot.is_connected() {
        ("CONNECTED - Ready".to_string(), Color::LightGreen, 100)
    } else {
        (
            "DISCONNECTED - press [c] to connect".to_string(),
            Color::DarkGray,
            0,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
