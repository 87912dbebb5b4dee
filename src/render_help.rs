use crate::tui_mode::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Plot Viewer Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);

    let help_text = vec![
        Line::from(Span::styled(
            "polyplot - ASCII polynomial plot",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Legend:", heading)),
        Line::from("  *  : the curve, where round(f(x)) meets the row"),
        Line::from("  +  : origin"),
        Line::from("  |  : y-axis (x rounds to 0)"),
        Line::from("  —  : x-axis (y rounds to 0)"),
        Line::from(""),
        Line::from(Span::styled("Navigation:", heading)),
        Line::from("  ← →        : Scroll one column"),
        Line::from("  Ctrl+← →   : Scroll one screen sideways"),
        Line::from("  ↑ ↓        : Scroll one row"),
        Line::from("  PgUp/PgDn  : Scroll one screen up/down"),
        Line::from("  Home/End   : Jump to the left/right edge"),
        Line::from(""),
        Line::from(Span::styled("Other:", heading)),
        Line::from("  F1 or ?    : Toggle this help"),
        Line::from("  Esc        : Close help"),
        Line::from("  q / Ctrl+C : Quit"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
