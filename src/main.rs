mod format;
mod grapher;
mod input;
#[cfg(feature = "line")]
mod line_mode;
mod polynomial;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use grapher::{Plot, PlotConfig, DEFAULT_BACKGROUND, DEFAULT_COLUMNS, DEFAULT_ROWS};
use input::{LineSource, StdStreams};
use log::info;
use polynomial::Polynomial;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Reads a polynomial interactively and draws it as ASCII art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of x samples, one per column
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Filler for empty cells
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    background: String,

    /// Log verbosity, written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Off)]
    log_level: LogLevel,

    /// Show the plot in a scrollable full-screen viewer (needs the `tui` feature)
    #[arg(long)]
    view: bool,

    /// Answer prompts through the raw-mode line editor (needs the `line` feature)
    #[arg(long)]
    editor: bool,
}

fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        level,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
    if let Err(e) = logger_instance {
        eprintln!("logging disabled: {}", e);
    }
}

/// Asks for the polynomial, announces it, asks for the domain and plots.
fn session<S: LineSource + ?Sized>(source: &mut S, config: &PlotConfig) -> Result<(Polynomial, Plot)> {
    let polynomial = Polynomial::new(input::collect_coefficients(source)?);
    info!("degree {} polynomial {:?}", polynomial.degree(), polynomial.coefficients());
    source.say(&format::announcement(polynomial.coefficients()))?;

    let domain = input::collect_domain(source)?;
    let plot = grapher::plot(|x| polynomial.evaluate(x), domain, config);
    Ok((polynomial, plot))
}

fn run<S: LineSource + ?Sized>(source: &mut S, config: &PlotConfig, cli: &Cli) -> Result<()> {
    let (polynomial, plot) = session(source, config)?;
    info!(
        "plotting f(x) = {} on [{}, {}]",
        polynomial,
        plot.domain().left(),
        plot.domain().right()
    );

    if cli.view {
        #[cfg(feature = "tui")]
        return tui_mode::view_plot(&polynomial.to_string(), &plot);
        #[cfg(not(feature = "tui"))]
        anyhow::bail!("--view needs polyplot built with the `tui` feature");
    }

    source.say(&plot.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.into());
    let config = PlotConfig::new(cli.columns, cli.rows, &cli.background)?;

    println!("For best results, full screen your command prompt.");

    if cli.editor {
        #[cfg(feature = "line")]
        return run(&mut line_mode::LineEditor::new(), &config, &cli);
        #[cfg(not(feature = "line"))]
        anyhow::bail!("--editor needs polyplot built with the `line` feature");
    }

    let stdin = io::stdin();
    let mut streams = StdStreams::new(stdin.lock(), io::stdout());
    run(&mut streams, &config, &cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;
    use unicode_segmentation::UnicodeSegmentation;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_defaults_and_overrides() {
        let cli = Cli::parse_from(["polyplot"]);
        assert_eq!((cli.columns, cli.rows), (200, 50));
        assert_eq!(cli.background, ".");
        assert_eq!(cli.log_level, LogLevel::Off);
        assert!(!cli.view);

        let cli = Cli::parse_from(["polyplot", "-c", "80", "-r", "20", "-b", "#", "--log-level", "debug"]);
        assert_eq!((cli.columns, cli.rows), (80, 20));
        assert_eq!(cli.background, "#");
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
    }

    #[test]
    fn full_session_prints_announcement_and_grid() {
        let cli = Cli::parse_from(["polyplot", "-c", "12", "-r", "6"]);
        let config = PlotConfig::new(cli.columns, cli.rows, &cli.background).unwrap();
        let mut streams = StdStreams::new(Cursor::new(b"2\n0\n0\n1\n-3\n-4\n3\n".to_vec()), Vec::new());

        run(&mut streams, &config, &cli).unwrap();

        let text = String::from_utf8(streams.into_writer()).unwrap();
        assert!(text.contains("Your polynomial is f(x) = x^2.\n"));
        assert!(text.contains("Your right endpoint must occur after your left endpoint.\n"));

        let grid = text.rsplit("What is your rightmost endpoint? ").next().unwrap();
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.graphemes(true).count() == 12));
        assert!(rows[0].contains('*'));
    }

    #[test]
    fn session_returns_polynomial_and_plot() {
        let config = PlotConfig::new(10, 5, ".").unwrap();
        let mut streams = StdStreams::new(Cursor::new(b"1\n1\n1\n0\n10\n".to_vec()), Vec::new());
        let (polynomial, plot) = session(&mut streams, &config).unwrap();
        assert_eq!(polynomial.coefficients(), &[1.0, 1.0]);
        assert_eq!(plot.range().max, 10.0);
        assert_eq!(plot.rows().len(), 5);
    }
}
