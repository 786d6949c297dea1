//! Bordered tables with proportional column sizing.
//!
//! Every column starts at its natural width: the configured width or the
//! widest cell (header included, clipped to the column's maximum),
//! whichever is larger. With a target width, a table that would overflow it
//! has all columns scaled by one shared ratio. Cells that end up wider than
//! their column are cut with a trailing `…`.
//!
//! ```rust
//! use wizard_widgets::table::{Column, Model, TableRow};
//!
//! let table = Model::new(vec![Column::new("Name"), Column::new("Qty")])
//!     .with_rows(vec![
//!         TableRow::data(["apple", "3"]),
//!         TableRow::data(["kiwi", "12"]),
//!     ]);
//!
//! assert_eq!(
//!     table.view(),
//!     "+-------+-----+\n\
//!      | Name  | Qty |\n\
//!      +-------+-----+\n\
//!      | apple | 3   |\n\
//!      | kiwi  | 12  |\n\
//!      +-------+-----+"
//! );
//! ```

use crate::style::{self, Role, SharedStyle, StyleProvider};
use crate::text::{self, ELLIPSIS};
use tracing::trace;

/// Columns of fixed cost per column: one separator and two padding spaces.
const COLUMN_OVERHEAD: usize = 3;

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Lower bound on the natural width.
    pub width: usize,
    /// Upper bound applied to cell content when measuring.
    pub max_width: Option<usize>,
}

impl Column {
    /// Creates a column sized by its content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 0,
            max_width: None,
        }
    }

    /// Sets the minimum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the maximum content width.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// One cell per column. Missing cells render empty; extra ones are
    /// dropped.
    Data(Vec<String>),
    /// A caption spanning the full table width.
    Title(String),
}

impl TableRow {
    /// Builds a data row.
    pub fn data<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableRow::Data(cells.into_iter().map(Into::into).collect())
    }

    /// Builds a title row.
    pub fn title(text: impl Into<String>) -> Self {
        TableRow::Title(text.into())
    }
}

/// Border and padding columns a table with `columns` columns adds on top of
/// its cell widths.
pub fn overhead(columns: usize) -> usize {
    COLUMN_OVERHEAD * columns + 1
}

/// Computes final column widths.
///
/// Title rows do not take part in sizing. When `target` is set and the
/// natural widths plus [`overhead`] exceed it, each width becomes
/// `floor(width * usable / natural)` where `usable` is the target minus the
/// overhead and `natural` is the sum of natural widths.
pub fn column_widths<F>(
    columns: &[Column],
    rows: &[TableRow],
    target: Option<usize>,
    measure: F,
) -> Vec<usize>
where
    F: Fn(&str) -> usize,
{
    let mut widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let cells = rows.iter().filter_map(|row| match row {
                TableRow::Data(cells) => cells.get(i),
                TableRow::Title(_) => None,
            });
            let widest = std::iter::once(&col.title)
                .chain(cells)
                .map(|s| measure(s.as_str()))
                .max()
                .unwrap_or(0);
            let clipped = col.max_width.map_or(widest, |m| widest.min(m));
            col.width.max(clipped)
        })
        .collect();

    let Some(target) = target else {
        return widths;
    };
    let natural: usize = widths.iter().sum();
    let fixed = overhead(columns.len());
    if natural == 0 || natural + fixed <= target {
        return widths;
    }

    let usable = target.saturating_sub(fixed);
    trace!(natural, usable, target, "scaling table columns");
    for w in &mut widths {
        *w = *w * usable / natural;
    }
    widths
}

/// A static table.
#[derive(Clone, Default)]
pub struct Model {
    columns: Vec<Column>,
    rows: Vec<TableRow>,
    target_width: Option<usize>,
    styles: Option<SharedStyle>,
}

impl Model {
    /// Creates a table without rows.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Replaces the rows.
    pub fn with_rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Caps the rendered width, borders included.
    pub fn with_target_width(mut self, width: usize) -> Self {
        self.target_width = Some(width);
        self
    }

    /// Attaches a style provider.
    pub fn with_styles(mut self, styles: SharedStyle) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Sets or clears the target width.
    pub fn set_target_width(&mut self, width: Option<usize>) {
        self.target_width = width;
    }

    /// Appends a row.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// The columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The rows.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Final column widths as rendered by [`Model::view`].
    pub fn widths(&self) -> Vec<usize> {
        let style = style::resolve(&self.styles);
        column_widths(&self.columns, &self.rows, self.target_width, |s| {
            style.display_width(s)
        })
    }

    /// Renders the table. Empty when there are no columns.
    pub fn view(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }
        let style = style::resolve(&self.styles);
        let widths = self.widths();
        let b = style.border();

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths
                .iter()
                .map(|w| b.horizontal.repeat(w + 2))
                .collect();
            style.paint(
                Role::Border,
                &format!("{}{}{}", left, segments.join(mid), right),
            )
        };

        let mut lines = vec![rule(b.top_left, b.top_mid, b.top_right)];
        let header: Vec<(&str, Role)> = self
            .columns
            .iter()
            .map(|c| (c.title.as_str(), Role::Title))
            .collect();
        lines.push(self.render_cells(style, &widths, &header));
        lines.push(rule(b.mid_left, b.mid_mid, b.mid_right));

        let mut parity = 0;
        for row in &self.rows {
            match row {
                TableRow::Data(cells) => {
                    let role = if parity % 2 == 0 {
                        Role::Primary
                    } else {
                        Role::Muted
                    };
                    parity += 1;
                    let cells: Vec<(&str, Role)> = (0..widths.len())
                        .map(|i| (cells.get(i).map_or("", String::as_str), role))
                        .collect();
                    lines.push(self.render_cells(style, &widths, &cells));
                }
                TableRow::Title(title) => {
                    let span =
                        widths.iter().sum::<usize>() + COLUMN_OVERHEAD * (widths.len() - 1);
                    lines.push(self.render_cells(
                        style,
                        &[span],
                        &[(title.as_str(), Role::Title)],
                    ));
                }
            }
        }

        lines.push(rule(b.bottom_left, b.bottom_mid, b.bottom_right));
        lines.join("\n")
    }

    fn render_cells(
        &self,
        style: &dyn StyleProvider,
        widths: &[usize],
        cells: &[(&str, Role)],
    ) -> String {
        let measure = |s: &str| style.display_width(s);
        let bar = style.paint(Role::Border, style.border().vertical);
        let mut line = bar.clone();
        for (&width, &(cell, role)) in widths.iter().zip(cells) {
            let cut = text::truncate(cell, width, ELLIPSIS, measure);
            let padded = text::pad_right(&cut, width, measure);
            line.push(' ');
            line.push_str(&style.paint(role, &padded));
            line.push(' ');
            line.push_str(&bar);
        }
        line
    }
}
