//! CSV Export functionality
//!
//! Writes the ledger as a flat comma-separated file: a header row, then one
//! row per entry. Fields are written verbatim with no quoting, so a comma
//! inside a date or category shifts the columns of that row.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 4] = ["Amount", "Expense", "Date", "Category"];

/// Export all ledger entries to CSV
pub fn export_ledger_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for row in ledger.to_array_rows() {
        csv_writer.write_record(&row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn export_to_string(ledger: &Ledger) -> String {
        let mut csv_output = Vec::new();
        export_ledger_csv(ledger, &mut csv_output).unwrap();
        String::from_utf8(csv_output).unwrap()
    }

    #[test]
    fn test_export_empty_ledger() {
        let ledger = Ledger::new();
        assert_eq!(export_to_string(&ledger), "Amount,Expense,Date,Category\n");
    }

    #[test]
    fn test_export_rows_read_back() {
        let mut ledger = Ledger::with_capacity(10, Money::zero(), None);
        ledger
            .add_entry(Money::from_cents(2500), true, "2024-01-01", "food")
            .unwrap();
        ledger
            .add_entry(Money::from_cents(10000), false, "2024-01-02", "salary")
            .unwrap();

        let csv_string = export_to_string(&ledger);
        assert_eq!(
            csv_string,
            "Amount,Expense,Date,Category\n25.00,true,2024-01-01,food\n100.00,false,2024-01-02,salary\n"
        );

        let mut reader = csv::Reader::from_reader(csv_string.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers, csv::StringRecord::from(CSV_HEADER.to_vec()));

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);

        assert_eq!(Money::parse(&rows[0][0]).unwrap(), Money::from_cents(2500));
        assert_eq!(&rows[0][1], "true");
        assert_eq!(&rows[0][2], "2024-01-01");
        assert_eq!(&rows[0][3], "food");

        assert_eq!(Money::parse(&rows[1][0]).unwrap(), Money::from_cents(10000));
        assert_eq!(&rows[1][1], "false");
        assert_eq!(&rows[1][2], "2024-01-02");
        assert_eq!(&rows[1][3], "salary");
    }

    #[test]
    fn test_embedded_comma_is_not_quoted() {
        let mut ledger = Ledger::with_capacity(10, Money::zero(), None);
        ledger
            .add_entry(Money::from_cents(100), true, "2024-01-01", "food,drink")
            .unwrap();

        let csv_string = export_to_string(&ledger);
        assert!(csv_string.ends_with("1.00,true,2024-01-01,food,drink\n"));
    }
}
