use super::app::App;
use super::helpers::highlight_row;
use crate::render_help::render_help;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::time::Duration;

const MIN_TERMINAL_WIDTH: u16 = 30;
const MIN_TERMINAL_HEIGHT: u16 = 10;

pub fn run_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            if app.show_help {
                render_help(f, app);
            } else {
                ui(f, app);
            }
        })?;

        if app.should_quit {
            break;
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            if let Event::Key(KeyEvent { code, modifiers, kind, .. }) = crossterm::event::read()? {
                if kind == KeyEventKind::Press {
                    handle_key_event(app, code, modifiers);
                }
            }
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        match code {
            KeyCode::Down => app.help_scroll = app.help_scroll.saturating_add(1),
            KeyCode::Up => app.help_scroll = app.help_scroll.saturating_sub(1),
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
                app.show_help = false;
                app.help_scroll = 0;
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Left if modifiers.contains(KeyModifiers::CONTROL) => app.page_horizontal(-1),
        KeyCode::Right if modifiers.contains(KeyModifiers::CONTROL) => app.page_horizontal(1),
        KeyCode::Left => app.scroll_horizontal(-1),
        KeyCode::Right => app.scroll_horizontal(1),
        KeyCode::Up => app.scroll_vertical(-1),
        KeyCode::Down => app.scroll_vertical(1),
        KeyCode::PageUp => app.page_vertical(-1),
        KeyCode::PageDown => app.page_vertical(1),
        KeyCode::Home => app.scroll_home(),
        KeyCode::End => app.scroll_end(),
        KeyCode::F(1) | KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll = 0;
        }
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let size = frame.size();
    app.terminal_too_small = size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT;
    if app.terminal_too_small {
        let warning = Paragraph::new(format!(
            "Terminal too small: need {}x{}",
            MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
        ))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
        frame.render_widget(warning, size);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(size);

    render_header(frame, app, layout[0]);
    render_status(frame, layout[1]);
    render_plot(frame, app, layout[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Polynomial ")
        .title_alignment(Alignment::Center);

    let text = vec![
        Line::from(vec![
            Span::styled("f(x) = ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            app.summary.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_plot(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(
            " Plot (col {}/{}, row {}/{}) ",
            app.scroll_x + 1,
            app.plot_width(),
            app.scroll_y + 1,
            app.plot_height()
        ))
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.set_viewport(inner_area.width as usize, inner_area.height as usize);
    let lines: Vec<Line> = app
        .visible_rows()
        .iter()
        .map(|row| highlight_row(row))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner_area);
}

fn render_status(frame: &mut Frame, area: Rect) {
    let keys = [
        ("←/→", "Scroll"),
        ("↑/↓", "Rows"),
        ("Home/End", "Edges"),
        ("F1", "Help"),
        ("q", "Quit"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    *key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {} ", desc),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapher::{plot, Domain, PlotConfig};

    fn app() -> App {
        let config = PlotConfig::new(40, 10, ".").unwrap();
        let domain = Domain::new(-20.0, 20.0).unwrap();
        let mut app = App::new("x^2", &plot(|x| x * x, domain, &config));
        app.set_viewport(10, 4);
        app
    }

    #[test]
    fn arrows_scroll_and_q_quits() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!((app.scroll_x, app.scroll_y), (1, 1));
        handle_key_event(&mut app, KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(app.scroll_x, 11);
        handle_key_event(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn help_captures_keys() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::F(1), KeyModifiers::NONE);
        assert!(app.show_help);
        handle_key_event(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.show_help);
        handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
