//! CSV export of the expense breakdown

use std::io::Write;

use crate::display::breakdown_rows;
use crate::error::BudgetResult;
use crate::services::BudgetOverview;

/// Write the per-category breakdown as CSV with a header row
pub fn export_breakdown_csv<W: Write>(
    overview: &BudgetOverview,
    symbol: &str,
    writer: W,
) -> BudgetResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for row in breakdown_rows(overview, symbol) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
