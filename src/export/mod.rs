//! Export module for findash
//!
//! The only persisted artifact of a session: the on-demand
//! `transactions.csv` export (plus a reader for the same format).

pub mod csv;

pub use self::csv::{
    export_transactions_csv, read_transactions_csv, write_transactions_file, EXPORT_FILE_NAME,
};
