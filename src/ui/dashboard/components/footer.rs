//! Dashboard footer component
//!
//! Renders the key help line, or the active entry prompt

use super::super::state::{DashboardState, InputMode};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_text = match &state.input_mode {
        InputMode::Normal => {
            "[B]alance [A]irdrop [V]erify [S]end [T]okens [H]istory [C]onnect [Q]uit".to_string()
        }
        InputMode::AirdropAmount => format!(
            "Airdrop amount in SOL: {}_  (Enter to request, Esc to cancel)",
            state.input_buffer
        ),
        InputMode::SendRecipient => format!(
            "Recipient address: {}_  (Enter to continue, Esc to cancel)",
            state.input_buffer
        ),
        InputMode::SendAmount { .. } => format!(
            "Amount in SOL: {}_  (Enter to send, Esc to cancel)",
            state.input_buffer
        ),
    };

    let footer_color = if state.is_entering_text() {
        Color::LightYellow
    } else {
        Color::Cyan
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(footer_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
