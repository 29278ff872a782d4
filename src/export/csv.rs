//! CSV export and read-back for transactions
//!
//! The export format matches the on-screen transaction table:
//! `Date,Description,Category,Amount,Type`, one row per transaction in
//! store order (the on-screen descending date sort is display-only).
//! `read_transactions_csv` is the verified inverse used by the round-trip
//! tests.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{FindashError, FindashResult};
use crate::ledger::Ledger;
use crate::models::{Money, Transaction};

/// File name used by the export action
pub const EXPORT_FILE_NAME: &str = "transactions.csv";

/// CSV header row
const HEADER: &str = "Date,Description,Category,Amount,Type";

/// Write all transactions as CSV in store order
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> FindashResult<()> {
    writeln!(writer, "{}", HEADER).map_err(|e| FindashError::Export(e.to_string()))?;

    for txn in ledger.transactions() {
        writeln!(
            writer,
            "{},{},{},{},{}",
            txn.date.format("%Y-%m-%d"),
            escape_csv(&txn.description),
            txn.category,
            txn.amount.to_decimal_string(),
            txn.kind
        )
        .map_err(|e| FindashError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Write `transactions.csv` into `dir` and return the file path
pub fn write_transactions_file(ledger: &Ledger, dir: &Path) -> FindashResult<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let file = File::create(&path).map_err(|e| FindashError::Export(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    export_transactions_csv(ledger, &mut writer)?;
    writer
        .flush()
        .map_err(|e| FindashError::Export(e.to_string()))?;
    Ok(path)
}

/// Parse transactions from the export format
///
/// Rejects rows with unknown categories/kinds or non-positive amounts,
/// reporting the offending row number.
pub fn read_transactions_csv<R: Read>(reader: R) -> FindashResult<Vec<Transaction>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut transactions = Vec::new();

    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 2; // 1-based, after the header
        let record = result.map_err(|e| FindashError::Import(format!("row {}: {}", row, e)))?;

        if record.len() < 5 {
            return Err(FindashError::Import(format!(
                "row {}: expected 5 fields, got {}",
                row,
                record.len()
            )));
        }

        let date = chrono::NaiveDate::parse_from_str(&record[0], "%Y-%m-%d")
            .map_err(|e| FindashError::Import(format!("row {}: invalid date: {}", row, e)))?;
        let description = record[1].to_string();
        let category = record[2]
            .parse()
            .map_err(|e| FindashError::Import(format!("row {}: {}", row, e)))?;
        let amount = Money::parse(&record[3])
            .map_err(|e| FindashError::Import(format!("row {}: {}", row, e)))?;
        let kind = record[4]
            .parse()
            .map_err(|e| FindashError::Import(format!("row {}: {}", row, e)))?;

        let txn = Transaction::new(date, description, category, amount, kind);
        txn.validate()
            .map_err(|e| FindashError::Import(format!("row {}: {}", row, e)))?;

        transactions.push(txn);
    }

    Ok(transactions)
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Weekly shop",
            Category::Food,
            Money::from_cents(5000),
            TransactionKind::Expense,
        ));
        ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "January salary",
            Category::Other,
            Money::from_cents(250000),
            TransactionKind::Income,
        ));
        ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            "",
            Category::Transport,
            Money::from_cents(1575),
            TransactionKind::Expense,
        ));
        ledger
    }

    #[test]
    fn test_export_format() {
        let ledger = sample_ledger();
        let mut output = Vec::new();
        export_transactions_csv(&ledger, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Description,Category,Amount,Type");
        // Store order, not the on-screen date sort
        assert_eq!(lines[1], "2024-01-05,Weekly shop,Food,50.00,Expense");
        assert_eq!(lines[2], "2024-01-01,January salary,Other,2500.00,Income");
        assert_eq!(lines[3], "2024-02-10,,Transport,15.75,Expense");
    }

    #[test]
    fn test_export_empty_ledger_is_header_only() {
        let mut output = Vec::new();
        export_transactions_csv(&Ledger::new(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Date,Description,Category,Amount,Type\n");
    }

    #[test]
    fn test_round_trip_preserves_tuples_and_order() {
        let ledger = sample_ledger();
        let mut output = Vec::new();
        export_transactions_csv(&ledger, &mut output).unwrap();

        let parsed = read_transactions_csv(output.as_slice()).unwrap();
        assert_eq!(parsed, ledger.transactions());
    }

    #[test]
    fn test_round_trip_escaped_description() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            "Dinner, drinks \"and more\"",
            Category::Entertainment,
            Money::from_cents(12345),
            TransactionKind::Expense,
        ));

        let mut output = Vec::new();
        export_transactions_csv(&ledger, &mut output).unwrap();
        let parsed = read_transactions_csv(output.as_slice()).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].description, "Dinner, drinks \"and more\"");
        assert_eq!(parsed[0].amount.cents(), 12345);
    }

    #[test]
    fn test_read_rejects_bad_rows() {
        let bad_category = "Date,Description,Category,Amount,Type\n2024-01-05,x,Groceries,50.00,Expense\n";
        assert!(matches!(
            read_transactions_csv(bad_category.as_bytes()),
            Err(FindashError::Import(_))
        ));

        let bad_amount = "Date,Description,Category,Amount,Type\n2024-01-05,x,Food,-50.00,Expense\n";
        let err = read_transactions_csv(bad_amount.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"));

        let bad_date = "Date,Description,Category,Amount,Type\n05/01/2024,x,Food,50.00,Expense\n";
        assert!(read_transactions_csv(bad_date.as_bytes()).is_err());
    }

    #[test]
    fn test_write_transactions_file() {
        let ledger = sample_ledger();
        let dir = TempDir::new().unwrap();

        let path = write_transactions_file(&ledger, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Date,Description,Category,Amount,Type"));
        assert!(contents.contains("Weekly shop"));
    }
}
