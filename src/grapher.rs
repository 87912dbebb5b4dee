//! Sampling a function over a domain and rasterizing it onto a character grid.
//!
//! The grid is coarse on purpose: a cell matches the curve when the function
//! value and the row's y-coordinate round to the same integer, so one cell is
//! roughly one integer unit on both axes.

use crate::input::InputError;
use log::{debug, warn};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_COLUMNS: usize = 200;
pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_BACKGROUND: &str = ".";

const CURVE: &str = "*";
const ORIGIN: &str = "+";
const Y_AXIS: &str = "|";
const X_AXIS: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub enum PlotConfigError {
    ZeroColumns,
    ZeroRows,
    Background(String),
}

impl fmt::Display for PlotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotConfigError::ZeroColumns => write!(f, "the plot needs at least one column"),
            PlotConfigError::ZeroRows => write!(f, "the plot needs at least one row"),
            PlotConfigError::Background(s) => write!(
                f,
                "background must be a single character one cell wide, got {:?}",
                s
            ),
        }
    }
}

impl std::error::Error for PlotConfigError {}

/// Grid size and filler. `columns` is the number of x samples, `rows` the
/// number of y steps.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    columns: usize,
    rows: usize,
    background: String,
}

impl PlotConfig {
    pub fn new(columns: usize, rows: usize, background: &str) -> Result<Self, PlotConfigError> {
        if columns == 0 {
            return Err(PlotConfigError::ZeroColumns);
        }
        if rows == 0 {
            return Err(PlotConfigError::ZeroRows);
        }
        if background.graphemes(true).count() != 1 || background.width() != 1 {
            return Err(PlotConfigError::Background(background.to_string()));
        }
        Ok(PlotConfig {
            columns,
            rows,
            background: background.to_string(),
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn background(&self) -> &str {
        &self.background
    }
}

/// Plotting interval. Only constructible with `left < right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    left: f64,
    right: f64,
}

impl Domain {
    pub fn new(left: f64, right: f64) -> Result<Self, InputError> {
        if right <= left {
            return Err(InputError::EndpointOrder);
        }
        Ok(Domain { left, right })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn step(&self, columns: usize) -> f64 {
        (self.right - self.left) / columns as f64
    }

    /// x-coordinate of column `k`.
    pub fn sample(&self, k: usize, step: f64) -> f64 {
        self.left + k as f64 * step
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

/// Vertical extent of `f` over the sampled columns, seeded at zero so both
/// axes always fit.
///
/// A sample raises `max` if it is above it, otherwise lowers `min` if it is
/// below it; never both. The exact output of the plot depends on this.
pub fn sample_range<F: Fn(f64) -> f64>(f: F, domain: Domain, columns: usize) -> Range {
    let step = domain.step(columns);
    let mut range = Range { min: 0.0, max: 0.0 };

    for k in 0..columns {
        let y = f(domain.sample(k, step));
        if y > range.max {
            range.max = y;
        } else if y < range.min {
            range.min = y;
        }
    }
    range
}

fn cell<'a>(value: f64, x: f64, y: f64, background: &'a str) -> &'a str {
    let (value, x, y) = (value.round_ties_even(), x.round_ties_even(), y.round_ties_even());
    if value == y {
        CURVE
    } else if x == 0.0 && y == 0.0 {
        ORIGIN
    } else if x == 0.0 {
        Y_AXIS
    } else if y == 0.0 {
        X_AXIS
    } else {
        background
    }
}

/// A rasterized plot, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    rows: Vec<String>,
    domain: Domain,
    range: Range,
    x_step: f64,
    y_step: f64,
}

impl Plot {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    pub fn y_step(&self) -> f64 {
        self.y_step
    }
}

impl fmt::Display for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows.join("\n"))
    }
}

/// Rasterizes `f` over a known range.
pub fn rasterize<F: Fn(f64) -> f64>(f: F, domain: Domain, range: Range, config: &PlotConfig) -> Plot {
    let x_step = domain.step(config.columns());
    let y_step = (range.max - range.min) / config.rows() as f64;

    let rows = (0..config.rows())
        .map(|r| {
            let y = range.max - r as f64 * y_step;
            (0..config.columns())
                .map(|k| {
                    let x = domain.sample(k, x_step);
                    cell(f(x), x, y, config.background())
                })
                .collect::<String>()
        })
        .collect();

    Plot {
        rows,
        domain,
        range,
        x_step,
        y_step,
    }
}

pub fn plot<F: Fn(f64) -> f64>(f: F, domain: Domain, config: &PlotConfig) -> Plot {
    let range = sample_range(&f, domain, config.columns());
    debug!(
        "x in [{}, {}], sampled y in [{}, {}]",
        domain.left(),
        domain.right(),
        range.min,
        range.max
    );
    if range.min == range.max {
        warn!("sampled range is flat; every row will be drawn at y = {}", range.max);
    }

    let plot = rasterize(&f, domain, range, config);
    debug!("x step {}, y step {}", plot.x_step(), plot.y_step());
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::Polynomial;
    use approx::assert_relative_eq;

    fn cells(row: &str) -> usize {
        row.graphemes(true).count()
    }

    #[test]
    fn default_grid_shape() {
        let polynomial = Polynomial::new(vec![-3.0, 0.5, 0.25]);
        let domain = Domain::new(-10.0, 10.0).unwrap();
        let config = PlotConfig::new(DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_BACKGROUND).unwrap();
        let plot = plot(|x| polynomial.evaluate(x), domain, &config);

        assert_eq!(plot.rows().len(), DEFAULT_ROWS);
        for row in plot.rows() {
            assert_eq!(cells(row), DEFAULT_COLUMNS);
            assert_eq!(row.width(), DEFAULT_COLUMNS);
        }
        assert_eq!(plot.to_string().lines().count(), DEFAULT_ROWS);
    }

    #[test]
    fn identity_on_small_grid() {
        let config = PlotConfig::new(4, 4, ".").unwrap();
        let domain = Domain::new(-2.0, 2.0).unwrap();
        let plot = plot(|x| x, domain, &config);

        assert_eq!(plot.range(), Range { min: -2.0, max: 1.0 });
        assert_relative_eq!(plot.y_step(), 0.75);
        // y = -0.5 rounds half to even, onto the x-axis
        assert_eq!(plot.rows(), &["..|*", "——*—", "——*—", ".*|."]);
    }

    #[test]
    fn origin_marker() {
        let config = PlotConfig::new(3, 2, " ").unwrap();
        let domain = Domain::new(-1.0, 2.0).unwrap();
        // constant 5: range is [0, 5], rows at y = 5 and y = 2.5
        let plot = plot(|_| 5.0, domain, &config);
        assert_eq!(plot.rows(), &["***", " | "]);

        let plot = rasterize(|_| 5.0, domain, Range { min: -1.0, max: 1.0 }, &config);
        assert_eq!(plot.rows(), &[" | ", "—+—"]);
    }

    #[test]
    fn range_is_seeded_at_zero() {
        let domain = Domain::new(0.0, 1.0).unwrap();
        assert_eq!(sample_range(|_| 7.0, domain, 10), Range { min: 0.0, max: 7.0 });
        assert_eq!(sample_range(|_| -7.0, domain, 10), Range { min: -7.0, max: 0.0 });
        assert_eq!(sample_range(|_| 0.0, domain, 10), Range { min: 0.0, max: 0.0 });
    }

    #[test]
    fn range_tracks_extremes() {
        // samples: -1, 4, -6, 2
        let values = [-1.0, 4.0, -6.0, 2.0];
        let domain = Domain::new(0.0, 4.0).unwrap();
        let range = sample_range(|x| values[x as usize], domain, 4);
        assert_eq!(range, Range { min: -6.0, max: 4.0 });
    }

    #[test]
    fn flat_zero_function_fills_grid_with_curve() {
        let config = PlotConfig::new(5, 3, ".").unwrap();
        let domain = Domain::new(-1.0, 1.0).unwrap();
        let plot = plot(|_| 0.0, domain, &config);
        assert!(plot.rows().iter().all(|row| row == "*****"));
    }

    #[test]
    fn custom_background() {
        let config = PlotConfig::new(6, 4, "·").unwrap();
        let domain = Domain::new(10.0, 16.0).unwrap();
        let plot = plot(|x| x, domain, &config);
        assert!(plot.rows()[1].contains('·'));
        for row in plot.rows() {
            assert_eq!(cells(row), 6);
        }
    }

    #[test]
    fn endpoints_must_be_ordered() {
        assert_eq!(Domain::new(1.0, 1.0), Err(InputError::EndpointOrder));
        assert_eq!(Domain::new(2.0, -3.0), Err(InputError::EndpointOrder));
        assert!(Domain::new(-3.0, 2.0).is_ok());
    }

    #[test]
    fn config_validation() {
        assert_eq!(PlotConfig::new(0, 5, "."), Err(PlotConfigError::ZeroColumns));
        assert_eq!(PlotConfig::new(5, 0, "."), Err(PlotConfigError::ZeroRows));
        assert!(matches!(PlotConfig::new(5, 5, ""), Err(PlotConfigError::Background(_))));
        assert!(matches!(PlotConfig::new(5, 5, "ab"), Err(PlotConfigError::Background(_))));
        assert!(matches!(PlotConfig::new(5, 5, "好"), Err(PlotConfigError::Background(_))));
        assert!(PlotConfig::new(5, 5, "e\u{301}").is_ok());
    }
}
