//! Peak meter widget with threshold marker

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use double_clap::feedback::Meter;

/// Render the live peak bar
pub fn render_meter(frame: &mut Frame, area: Rect, meter: &Meter, peak: u32, threshold: u32) {
    let block = Block::default().title(" Peak ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let meter = meter.with_bar_max(inner.width as u32);
    let bar = meter.bar_len(peak) as usize;
    let marker = (meter.threshold_marker(threshold) as usize).min(inner.width.saturating_sub(1) as usize);

    let cells: Vec<Span> = (0..inner.width as usize)
        .map(|i| {
            if i == marker {
                Span::styled("│", Style::default().fg(Color::Red))
            } else if i < bar {
                Span::styled("█", Style::default().fg(Color::Green))
            } else {
                Span::styled("·", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(cells)), inner);
}
