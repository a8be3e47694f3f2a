//! Loading of per-host harness logs into a record store.

pub mod load;
pub mod parse;
pub mod record;

pub use load::{host_from_parent_dir, load_records};
pub use parse::parse_host_log;
pub use record::{LogRecord, RecordStore};
