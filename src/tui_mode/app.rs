use super::helpers::{format_number, slice_cells};
use crate::grapher::Plot;
use unicode_segmentation::UnicodeSegmentation;

/// Viewer state: the rendered rows and a scroll window over them.
pub struct App {
    pub title: String,
    pub summary: String,
    pub rows: Vec<String>,
    pub scroll_x: usize,
    pub scroll_y: usize,
    pub view_width: usize,
    pub view_height: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new(title: &str, plot: &Plot) -> Self {
        let domain = plot.domain();
        let range = plot.range();
        let summary = format!(
            "x: [{}, {}]   y: [{}, {}]   step: {} × {}",
            format_number(domain.left()),
            format_number(domain.right()),
            format_number(range.min),
            format_number(range.max),
            format_number(plot.x_step()),
            format_number(plot.y_step()),
        );

        App {
            title: title.to_string(),
            summary,
            rows: plot.rows().to_vec(),
            scroll_x: 0,
            scroll_y: 0,
            view_width: 0,
            view_height: 0,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            terminal_too_small: false,
        }
    }

    pub fn plot_width(&self) -> usize {
        self.rows
            .first()
            .map(|row| row.graphemes(true).count())
            .unwrap_or(0)
    }

    pub fn plot_height(&self) -> usize {
        self.rows.len()
    }

    fn max_scroll_x(&self) -> usize {
        self.plot_width().saturating_sub(self.view_width)
    }

    fn max_scroll_y(&self) -> usize {
        self.plot_height().saturating_sub(self.view_height)
    }

    /// Called every frame with the size of the plot area.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.view_width = width;
        self.view_height = height;
        self.scroll_x = self.scroll_x.min(self.max_scroll_x());
        self.scroll_y = self.scroll_y.min(self.max_scroll_y());
    }

    pub fn scroll_horizontal(&mut self, delta: isize) {
        self.scroll_x = self
            .scroll_x
            .saturating_add_signed(delta)
            .min(self.max_scroll_x());
    }

    pub fn scroll_vertical(&mut self, delta: isize) {
        self.scroll_y = self
            .scroll_y
            .saturating_add_signed(delta)
            .min(self.max_scroll_y());
    }

    pub fn page_horizontal(&mut self, direction: isize) {
        let step = self.view_width.max(1) as isize;
        self.scroll_horizontal(direction * step);
    }

    pub fn page_vertical(&mut self, direction: isize) {
        let step = self.view_height.max(1) as isize;
        self.scroll_vertical(direction * step);
    }

    pub fn scroll_home(&mut self) {
        self.scroll_x = 0;
    }

    pub fn scroll_end(&mut self) {
        self.scroll_x = self.max_scroll_x();
    }

    pub fn visible_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .skip(self.scroll_y)
            .take(self.view_height)
            .map(|row| slice_cells(row, self.scroll_x, self.view_width))
            .collect()
    }
}
