use std::collections::BTreeMap;

/// One host's measurement record, extracted from its harness log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub node_id: u32,
    pub send: u64,
    pub received: Vec<u64>,
    pub real: Vec<u64>,
    /// Per-position delivery rate: received / real, or None where real is 0.
    /// Always the same length as `received` and `real`.
    pub rate: Vec<Option<f64>>,
}

/// Records keyed by host name, built once by the loader and read-only after.
pub type RecordStore = BTreeMap<String, LogRecord>;
