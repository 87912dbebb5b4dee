use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;

pub fn format_number(x: f64) -> String {
    if x.abs() > 1e10 || (x.abs() < 1e-5 && x != 0.0) {
        format!("{:.6e}", x)
    } else {
        let s = format!("{:.6}", x);
        s.trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// `width` cells of `row` starting at cell `start`. Cells are grapheme
/// clusters, so multi-byte axis glyphs stay whole.
pub fn slice_cells(row: &str, start: usize, width: usize) -> String {
    row.graphemes(true).skip(start).take(width).collect()
}

fn cell_style(cell: &str) -> Style {
    match cell {
        "*" => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        "+" | "|" | "—" => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::DarkGray),
    }
}

pub fn highlight_row(row: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = row
        .graphemes(true)
        .map(|cell| Span::styled(cell.to_string(), cell_style(cell)))
        .collect();
    Line::from(spans)
}
