//! Status banner - live peak or detection acknowledgment

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::UiState;

/// Render the banner line
pub fn render_banner(frame: &mut Frame, area: Rect, state: &UiState, celebrating: bool) {
    let block = Block::default().title(" clapmon ").borders(Borders::ALL);

    let headline = if celebrating {
        Span::styled(
            "double_clap!",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("Peak:{}", state.peak), Style::default().fg(Color::Cyan))
    };

    let line = Line::from(vec![
        headline,
        Span::raw("   "),
        Span::styled(
            format!(
                "{}  {:.1}kHz  claps: {}  failures: {}",
                state.device_name,
                state.sample_rate as f32 / 1000.0,
                state.detections,
                state.failures
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Left).block(block);
    frame.render_widget(paragraph, area);
}
