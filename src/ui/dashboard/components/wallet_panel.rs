//! Dashboard wallet panel component
//!
//! Renders wallet identity, connection state and balance

use crate::environment::Environment;

use super::super::state::DashboardState;
use super::super::utils::shorten_address;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the wallet panel.
pub fn render_wallet_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    info_lines.push(Line::from(vec![Span::styled(
        format!("Wallet: {}", shorten_address(&state.address)),
        Style::default().fg(Color::LightBlue),
    )]));

    // Connection status with color coding
    let (status_text, status_color) = match state.snapshot.session {
        Some(session) if session.can_sign_transaction => ("Status: connected", Color::Green),
        Some(_) => ("Status: connected (watch-only)", Color::Yellow),
        None => ("Status: disconnected", Color::Red),
    };
    info_lines.push(Line::from(vec![Span::styled(
        status_text,
        Style::default().fg(status_color),
    )]));

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Mainnet => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
        _ => Color::Cyan,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    // Balance is the prominent line
    let balance_text = if state.snapshot.is_connected() {
        format!("Balance: {}", state.snapshot.balance)
    } else {
        "Balance: -".to_string()
    };
    info_lines.push(Line::from(vec![Span::styled(
        balance_text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]));

    // Signing capabilities
    if let Some(session) = state.snapshot.session {
        let yes_no = |ok: bool| if ok { "yes" } else { "no" };
        info_lines.push(Line::from(vec![Span::styled(
            format!(
                "Signs: msg {} / tx {}",
                yes_no(session.can_sign_message),
                yes_no(session.can_sign_transaction)
            ),
            Style::default().fg(Color::LightYellow),
        )]));
    }

    // Uptime with better formatting
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 86400 {
        format!(
            "Uptime: {}d {}h {}m",
            uptime.as_secs() / 86400,
            (uptime.as_secs() % 86400) / 3600,
            (uptime.as_secs() % 3600) / 60
        )
    } else if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    let info_block = Block::default()
        .title("WALLET")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
