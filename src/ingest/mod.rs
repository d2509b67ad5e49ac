//! Roster ingestion.
//!
//! This module turns a delimited roster source into shifts grouped per
//! employee: row parsing, the per-employee shift store, and the reader
//! that drives them and collects rejected rows.

mod parser;
mod reader;
mod store;

pub use parser::{FIELD_COUNT, ShiftRecord, TIMESTAMP_FORMAT, parse_record};
pub use reader::{RejectedRecord, RosterIngest, load_roster, read_roster};
pub use store::ShiftStore;
