pub mod app;
mod helpers;
mod ui;

use crate::grapher::Plot;
use anyhow::Result;
use app::App;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Shows `plot` full screen until the user quits. The terminal is restored
/// even when the loop fails.
pub(crate) fn view_plot(title: &str, plot: &Plot) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(title, plot);

    let outcome = ui::run_ui_loop(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    outcome
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(Into::into)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    Ok(())
}
