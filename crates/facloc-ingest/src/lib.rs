pub mod csv_table;
pub mod fetch;

pub use csv_table::{SourceTable, load_source_table, read_source_table};
pub use fetch::fetch_source;
