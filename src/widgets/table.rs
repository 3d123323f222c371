//! Bordered table with measured, budgeted column widths.

use tracing::debug;

use super::Paragraph;
use crate::layout::{resolve_widths, ColumnConstraint, ColumnWidths, LayoutError};
use crate::markup::MarkupError;
use crate::render::{Justify, Measurement, RenderContext, Renderable, Segments};
use crate::segment::{line_width, split_lines, truncate, Segment};
use crate::style::Style;

/// Box drawing characters: horizontal rule, vertical rule, and
/// `[left, junction, right]` for the top, middle and bottom rules.
struct Glyphs {
    horizontal: char,
    vertical: char,
    top: [char; 3],
    middle: [char; 3],
    bottom: [char; 3],
}

const UNICODE: Glyphs = Glyphs {
    horizontal: '─',
    vertical: '│',
    top: ['┌', '┬', '┐'],
    middle: ['├', '┼', '┤'],
    bottom: ['└', '┴', '┘'],
};

const ASCII: Glyphs = Glyphs {
    horizontal: '-',
    vertical: '|',
    top: ['+', '+', '+'],
    middle: ['+', '+', '+'],
    bottom: ['+', '+', '+'],
};

/// One table column: header, optional footer and sizing rules.
#[derive(Debug, Clone)]
pub struct Column {
    header: Paragraph,
    footer: Option<Paragraph>,
    width: Option<usize>,
    padding: (usize, usize),
    no_wrap: bool,
    justify: Justify,
    ratio: usize,
}

impl Column {
    pub fn new(header: Paragraph) -> Self {
        Self {
            header,
            footer: None,
            width: None,
            padding: (1, 1),
            no_wrap: false,
            justify: Justify::Left,
            ratio: 1,
        }
    }

    pub fn plain(header: &str) -> Self {
        Self::new(Paragraph::plain(header))
    }

    pub fn markup(header: &str) -> Result<Self, MarkupError> {
        Paragraph::from_markup(header).map(Self::new)
    }

    pub fn footer(mut self, footer: Paragraph) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Fixed content width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn padding(mut self, left: usize, right: usize) -> Self {
        self.padding = (left, right);
        self
    }

    /// Keep this column out of wrap-driven shrinking.
    pub fn no_wrap(mut self) -> Self {
        self.no_wrap = true;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Share of expansion space. Zero opts out.
    pub fn ratio(mut self, ratio: usize) -> Self {
        self.ratio = ratio;
        self
    }

    fn padding_width(&self) -> usize {
        self.padding.0 + self.padding.1
    }
}

/// Rows of renderables laid out under declared columns.
///
/// Columns come first; once a row exists the column set is frozen.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Box<dyn Renderable>>>,
    show_header: bool,
    show_edge: bool,
    expand: bool,
    width: Option<usize>,
    border_style: Style,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            show_header: true,
            show_edge: true,
            expand: false,
            width: None,
            border_style: Style::plain(),
        }
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn show_edge(mut self, show: bool) -> Self {
        self.show_edge = show;
        self
    }

    /// Fill the available width.
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Fixed total width, borders included.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn add_column(&mut self, column: Column) -> Result<(), LayoutError> {
        if !self.rows.is_empty() {
            return Err(LayoutError::ColumnAfterRows);
        }
        self.columns.push(column);
        Ok(())
    }

    /// Append a row. Short rows are padded with empty cells.
    pub fn add_row(&mut self, mut cells: Vec<Box<dyn Renderable>>) -> Result<(), LayoutError> {
        if cells.len() > self.columns.len() {
            return Err(LayoutError::TooManyCells {
                cells: cells.len(),
                columns: self.columns.len(),
            });
        }
        while cells.len() < self.columns.len() {
            cells.push(Box::new(Paragraph::default()));
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Append a row of markup cells.
    pub fn add_row_markup(&mut self, cells: &[&str]) -> crate::Result<()> {
        let cells = cells
            .iter()
            .map(|cell| Paragraph::from_markup(cell).map(|p| Box::new(p) as Box<dyn Renderable>))
            .collect::<Result<Vec<_>, _>>()?;
        self.add_row(cells)?;
        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn show_footer(&self) -> bool {
        self.columns.iter().any(|c| c.footer.is_some())
    }

    /// Cells taken by edges and column separators.
    fn chrome_width(&self) -> usize {
        let edges = if self.show_edge { 2 } else { 0 };
        edges + self.columns.len().saturating_sub(1)
    }

    fn budget(&self, max_width: usize) -> usize {
        self.width.map_or(max_width, |w| w.min(max_width))
    }

    /// Measure every cell of every column once.
    fn constraints(&self, ctx: &RenderContext, budget: usize) -> Vec<ColumnConstraint> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let mut measurement = Measurement::exact(1);
                if self.show_header {
                    measurement = measurement.union(column.header.measure(ctx, budget));
                }
                for row in &self.rows {
                    measurement = measurement.union(row[index].measure(ctx, budget));
                }
                if let Some(footer) = &column.footer {
                    measurement = measurement.union(footer.measure(ctx, budget));
                }
                ColumnConstraint {
                    measurement,
                    padding: column.padding_width(),
                    width: column.width,
                    no_wrap: column.no_wrap,
                    ratio: column.ratio,
                }
            })
            .collect()
    }

    fn resolve(&self, ctx: &RenderContext, max_width: usize) -> ColumnWidths {
        let budget = self.budget(max_width);
        let Some(available) = budget.checked_sub(self.chrome_width()) else {
            return ColumnWidths::Collapsed;
        };
        let constraints = self.constraints(ctx, budget);
        resolve_widths(&constraints, available, self.expand || self.width.is_some())
    }

    fn rule(&self, glyphs: &Glyphs, ends: [char; 3], widths: &[usize]) -> Vec<Segment> {
        let mut text = String::new();
        if self.show_edge {
            text.push(ends[0]);
        }
        for (i, (column, width)) in self.columns.iter().zip(widths).enumerate() {
            if i > 0 {
                text.push(ends[1]);
            }
            text.extend(std::iter::repeat(glyphs.horizontal).take(width + column.padding_width()));
        }
        if self.show_edge {
            text.push(ends[2]);
        }
        vec![Segment::new(text, self.border_style.clone())]
    }

    /// Render one row of cells into display lines.
    fn row_lines(
        &self,
        ctx: &RenderContext,
        glyphs: &Glyphs,
        cells: &[&dyn Renderable],
        widths: &[usize],
    ) -> Vec<Vec<Segment>> {
        let rendered: Vec<Vec<Vec<Segment>>> = cells
            .iter()
            .zip(&self.columns)
            .zip(widths)
            .map(|((cell, column), &width)| {
                let cell_ctx = ctx.with_justify(Some(column.justify));
                split_lines(cell.render(&cell_ctx, width), width)
                    .into_iter()
                    .map(|line| fill(truncate(&line, width), width, column.justify))
                    .collect()
            })
            .collect();

        let height = rendered.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let vertical = Segment::new(glyphs.vertical.to_string(), self.border_style.clone());

        (0..height)
            .map(|y| {
                let mut line = Vec::new();
                if self.show_edge {
                    line.push(vertical.clone());
                }
                for (i, ((lines, column), &width)) in
                    rendered.iter().zip(&self.columns).zip(widths).enumerate()
                {
                    if i > 0 {
                        line.push(vertical.clone());
                    }
                    push_spaces(&mut line, column.padding.0);
                    match lines.get(y) {
                        Some(content) => line.extend(content.iter().cloned()),
                        None => push_spaces(&mut line, width),
                    }
                    push_spaces(&mut line, column.padding.1);
                }
                if self.show_edge {
                    line.push(vertical.clone());
                }
                line
            })
            .collect()
    }

    /// Display lines of the whole table.
    fn lines(&self, ctx: &RenderContext, max_width: usize) -> Vec<Vec<Segment>> {
        if self.columns.is_empty() {
            return Vec::new();
        }

        let layout = self.resolve(ctx, max_width);
        let Some(widths) = layout.widths() else {
            debug!(max_width, columns = self.columns.len(), "Table collapsed to placeholder");
            let ellipsis = Segment::new(ctx.capabilities().ellipsis(), self.border_style.clone());
            return vec![truncate(&[ellipsis], max_width)];
        };

        let glyphs = if ctx.unicode() { &UNICODE } else { &ASCII };
        let mut lines = Vec::new();

        if self.show_edge {
            lines.push(self.rule(glyphs, glyphs.top, widths));
        }
        if self.show_header {
            let headers: Vec<&dyn Renderable> =
                self.columns.iter().map(|c| &c.header as &dyn Renderable).collect();
            lines.extend(self.row_lines(ctx, glyphs, &headers, widths));
            lines.push(self.rule(glyphs, glyphs.middle, widths));
        }
        for row in &self.rows {
            let cells: Vec<&dyn Renderable> = row.iter().map(|c| &**c).collect();
            lines.extend(self.row_lines(ctx, glyphs, &cells, widths));
        }
        if self.show_footer() {
            let empty = Paragraph::default();
            let footers: Vec<&dyn Renderable> = self
                .columns
                .iter()
                .map(|c| c.footer.as_ref().unwrap_or(&empty) as &dyn Renderable)
                .collect();
            lines.push(self.rule(glyphs, glyphs.middle, widths));
            lines.extend(self.row_lines(ctx, glyphs, &footers, widths));
        }
        if self.show_edge {
            lines.push(self.rule(glyphs, glyphs.bottom, widths));
        }
        lines
    }
}

fn push_spaces(line: &mut Vec<Segment>, count: usize) {
    if count > 0 {
        line.push(Segment::plain(" ".repeat(count)));
    }
}

/// Pad a cell line to exactly `width` cells.
fn fill(mut line: Vec<Segment>, width: usize, justify: Justify) -> Vec<Segment> {
    let slack = width.saturating_sub(line_width(&line));
    let (left, right) = match justify {
        Justify::Left => (0, slack),
        Justify::Right => (slack, 0),
        Justify::Center => (slack / 2, slack - slack / 2),
    };
    if left > 0 {
        line.insert(0, Segment::plain(" ".repeat(left)));
    }
    push_spaces(&mut line, right);
    line
}

impl Renderable for Table {
    fn measure(&self, ctx: &RenderContext, max_width: usize) -> Measurement {
        if self.columns.is_empty() {
            return Measurement::default();
        }
        if let Some(width) = self.width {
            return Measurement::exact(width.min(max_width));
        }
        let budget = self.budget(max_width);
        let constraints = self.constraints(ctx, budget);
        let (min, max) = constraints.iter().fold((0, 0), |(min, max), c| {
            let fixed = c.width;
            (
                min + fixed.unwrap_or(c.measurement.min()) + c.padding,
                max + fixed.unwrap_or(c.measurement.max()) + c.padding,
            )
        });
        (Measurement::new(min, max) + self.chrome_width()).clamp(max_width)
    }

    fn render<'a>(&'a self, ctx: &'a RenderContext, max_width: usize) -> Segments<'a> {
        let lines = self.lines(ctx, max_width);
        let count = lines.len();
        Box::new(
            lines
                .into_iter()
                .enumerate()
                .flat_map(move |(i, line)| {
                    let brk = (i + 1 < count).then(Segment::line_break);
                    line.into_iter().chain(brk)
                }),
        )
    }
}
