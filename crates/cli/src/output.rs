//! Terminal rendering of projection and simulation results.

use fin_planner_domain::{ChartRow, ChartSink, SeriesSummary, format_tick};
use prettytable::format::consts::FORMAT_BOX_CHARS;
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use std::convert::Infallible;

/// Chart sink that lays series out as a table, one row per point.
#[derive(Debug, Default)]
pub struct TableSink {
    table: Option<Table>,
}

impl TableSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered table, if anything was rendered.
    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }
}

impl ChartSink for TableSink {
    type Error = Infallible;

    fn render(&mut self, series: &[&str], rows: &[ChartRow]) -> Result<(), Self::Error> {
        let mut table = Table::new();
        table.set_format(*FORMAT_BOX_CHARS);

        let mut titles = vec![Cell::new("")];
        titles.extend(series.iter().map(|name| Cell::new(name)));
        table.set_titles(Row::new(titles));

        for row in rows {
            let mut cells = vec![Cell::new(&row.label)];
            cells.extend(
                row.values
                    .iter()
                    .map(|v| Cell::new(&format_tick(*v)).style_spec("r")),
            );
            table.add_row(Row::new(cells));
        }

        self.table = Some(table);
        Ok(())
    }
}

/// Machine-readable result of a command.
#[derive(Debug, Serialize)]
pub struct Report<'a, P: Serialize> {
    /// Emitted points.
    pub points: &'a [P],
    /// Headline numbers, absent for an empty series.
    pub summary: Option<SeriesSummary>,
    /// Human-readable warnings about the inputs.
    pub warnings: Vec<String>,
}

/// Formats the summary block printed under a table.
#[must_use]
pub fn summary_lines(summary: &SeriesSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Final value:     {:.2}", summary.final_value),
        format!("Total deposited: {:.2}", summary.total_deposited),
        format!("Gain:            {:.2}", summary.gain),
    ];
    if let Some(ret) = summary.return_pct {
        lines.push(format!("Return:          {:.2}%", ret * 100.0));
    }
    lines
}
