//! Column width resolution under a width budget.
//!
//! 1. Each column starts at its natural (max) content width, or its fixed width.
//! 2. If the total fits, done.
//! 3. Otherwise the widest wrappable columns are leveled down toward the
//!    next-widest wrappable width, tied columns sharing the cut, until the
//!    total fits or nothing wrappable is strictly widest. No-wrap and fixed
//!    columns are left alone.
//! 4. Anything still over budget is cut from all columns evenly.
//! 5. With `expand`, leftover space is shared out by column ratio.
//! 6. A zero-width column or an over-budget total means the layout collapsed.

use tracing::debug;

use super::ratio;
use crate::render::Measurement;

/// Width requirements of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConstraint {
    /// Content width range, padding excluded
    pub measurement: Measurement,
    /// Left + right padding
    pub padding: usize,
    /// Fixed content width
    pub width: Option<usize>,
    pub no_wrap: bool,
    /// Share of any expansion space
    pub ratio: usize,
}

impl ColumnConstraint {
    pub fn new(measurement: Measurement) -> Self {
        Self {
            measurement,
            padding: 0,
            width: None,
            no_wrap: false,
            ratio: 1,
        }
    }

    fn natural(&self) -> usize {
        self.width.unwrap_or(self.measurement.max())
    }

    fn wrappable(&self) -> bool {
        !self.no_wrap && self.width.is_none()
    }
}

/// Outcome of width resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnWidths {
    /// Content width per column, in declaration order
    Fitted(Vec<usize>),
    /// No positive width fits; render a placeholder instead
    Collapsed,
}

impl ColumnWidths {
    pub fn widths(&self) -> Option<&[usize]> {
        match self {
            ColumnWidths::Fitted(widths) => Some(widths),
            ColumnWidths::Collapsed => None,
        }
    }
}

/// Resolve content widths for `columns` so that content plus padding fits in `budget`.
pub fn resolve_widths(columns: &[ColumnConstraint], budget: usize, expand: bool) -> ColumnWidths {
    if columns.is_empty() {
        return ColumnWidths::Fitted(Vec::new());
    }

    let padding: usize = columns.iter().map(|c| c.padding).sum();
    let Some(available) = budget.checked_sub(padding) else {
        debug!(budget, padding, "Padding alone exceeds width budget");
        return ColumnWidths::Collapsed;
    };

    let mut widths: Vec<usize> = columns.iter().map(ColumnConstraint::natural).collect();
    let mut total: usize = widths.iter().sum();

    if total > available {
        let wrappable: Vec<bool> = columns.iter().map(ColumnConstraint::wrappable).collect();
        widths = level(widths, &wrappable, available);
        total = widths.iter().sum();

        if total > available {
            let excess = total - available;
            debug!(excess, "Reducing all columns evenly");
            let ones = vec![1; widths.len()];
            widths = ratio::reduce(excess, &ones, &widths, &widths);
            total = widths.iter().sum();
        }
    }

    if expand && total < available {
        let ratios: Vec<usize> = columns.iter().map(|c| c.ratio).collect();
        let extra = ratio::distribute(available - total, &ratios);
        for (width, extra) in widths.iter_mut().zip(extra) {
            *width += extra;
        }
        total = widths.iter().sum();
    }

    if widths.iter().any(|w| *w == 0) || total > available {
        debug!(?widths, available, "Column layout collapsed");
        return ColumnWidths::Collapsed;
    }

    ColumnWidths::Fitted(widths)
}

/// Shrink the widest wrappable columns toward the next-widest one until the total fits.
fn level(mut widths: Vec<usize>, wrappable: &[bool], available: usize) -> Vec<usize> {
    loop {
        let total: usize = widths.iter().sum();
        if total <= available {
            break;
        }

        let eligible = || {
            widths
                .iter()
                .zip(wrappable)
                .filter(|(_, wrap)| **wrap)
                .map(|(width, _)| *width)
        };
        let Some(widest) = eligible().max() else {
            break;
        };
        let next = eligible().filter(|w| *w < widest).max().unwrap_or(1);
        if widest <= next {
            break;
        }

        let ratios: Vec<usize> = widths
            .iter()
            .zip(wrappable)
            .map(|(width, wrap)| usize::from(*wrap && *width == widest))
            .collect();
        let step = vec![widest - next; widths.len()];
        widths = ratio::reduce(total - available, &ratios, &step, &widths);
    }
    widths
}
