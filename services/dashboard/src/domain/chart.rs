//! Bar chart specifications handed to the page renderer.
//!
//! A spec names the fields to plot; the rows travel alongside it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Categories on the y axis, bars grow to the right.
    Horizontal,
    /// Categories on the x axis, bars grow upwards.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Nominal,
    Quantitative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartField {
    pub field: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
}

impl ChartField {
    pub const fn nominal(field: &'static str, title: &'static str) -> Self {
        Self {
            field,
            title,
            kind: FieldKind::Nominal,
        }
    }

    pub const fn quantitative(field: &'static str, title: &'static str) -> Self {
        Self {
            field,
            title,
            kind: FieldKind::Quantitative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sizing {
    PerBar { px: u32, min: u32 },
    Fixed(u32),
}

/// Bar chart keyed by a category field, sorted descending by its value field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub mark: &'static str,
    pub orientation: Orientation,
    pub category: ChartField,
    pub value: ChartField,
    pub sort: &'static str,
    pub tooltip: Vec<ChartField>,
    pub height: u32,
    pub integer_ticks: bool,
}

/// Builder for [`BarChart`]; the height is resolved once the row count is known.
#[derive(Debug, Clone)]
pub struct BarChartBuilder {
    orientation: Orientation,
    category: ChartField,
    value: ChartField,
    tooltip: Vec<ChartField>,
    sizing: Sizing,
    integer_ticks: bool,
}

const DEFAULT_MIN_HEIGHT: u32 = 200;
const DEFAULT_FIXED_HEIGHT: u32 = 300;

impl BarChartBuilder {
    /// Horizontal bars, `px` pixels per bar, never shorter than 200.
    pub fn horizontal(category: ChartField, value: ChartField, px: u32) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            category,
            value,
            tooltip: vec![category, value],
            sizing: Sizing::PerBar {
                px,
                min: DEFAULT_MIN_HEIGHT,
            },
            integer_ticks: false,
        }
    }

    /// Vertical bars at a fixed height of 300.
    pub fn vertical(category: ChartField, value: ChartField) -> Self {
        Self {
            orientation: Orientation::Vertical,
            category,
            value,
            tooltip: vec![category, value],
            sizing: Sizing::Fixed(DEFAULT_FIXED_HEIGHT),
            integer_ticks: false,
        }
    }

    pub fn tooltip(mut self, fields: impl IntoIterator<Item = ChartField>) -> Self {
        self.tooltip = fields.into_iter().collect();
        self
    }

    pub fn integer_ticks(mut self) -> Self {
        self.integer_ticks = true;
        self
    }

    pub fn build(self, rows: usize) -> BarChart {
        let height = match self.sizing {
            Sizing::PerBar { px, min } => {
                let bars = u32::try_from(rows).unwrap_or(u32::MAX);
                px.saturating_mul(bars).max(min)
            }
            Sizing::Fixed(h) => h,
        };
        BarChart {
            mark: "bar",
            orientation: self.orientation,
            category: self.category,
            value: self.value,
            sort: "descending",
            tooltip: self.tooltip,
            height,
            integer_ticks: self.integer_ticks,
        }
    }
}

/// Stable sort, largest value first; ties keep their incoming order.
pub fn sort_descending_by<T, F>(rows: &mut [T], value: F)
where
    F: Fn(&T) -> i64,
{
    rows.sort_by(|a, b| value(b).cmp(&value(a)));
}
