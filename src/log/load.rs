use crate::log::parse::parse_host_log;
use crate::log::record::RecordStore;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Default host naming: the log file's immediate parent directory name.
pub fn host_from_parent_dir(path: &Path) -> Option<String> {
    Some(path.parent()?.file_name()?.to_string_lossy().into_owned())
}

/// Populate a record store from `<root>/<host>/*.log`.
///
/// A missing root yields an empty store. Files are visited in sorted path
/// order, so when two logs map to the same host name the later path wins.
pub fn load_records(
    root: &Path,
    host_name: impl Fn(&Path) -> Option<String>,
) -> anyhow::Result<RecordStore> {
    let mut store = RecordStore::new();
    for path in discover_logs(root)? {
        let Some(host) = host_name(&path) else {
            eprintln!(
                "WARN: cannot derive a host name from {}, skipping",
                path.display()
            );
            continue;
        };
        let record = parse_host_log(&path)?;
        store.insert(host, record);
    }
    Ok(store)
}

/// Enumerate `*.log` files exactly two levels below the root, sorted.
fn discover_logs(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    if !root.is_dir() {
        return Ok(out);
    }
    for entry in
        fs::read_dir(root).with_context(|| format!("read directory {}", root.display()))?
    {
        let dir = entry?.path();
        if !dir.is_dir() {
            continue;
        }
        for entry in
            fs::read_dir(&dir).with_context(|| format!("read directory {}", dir.display()))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "log") {
                out.push(path);
            }
        }
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn measurement_line(fields: &[u64]) -> String {
        let csv = fields
            .iter()
            .map(|v| format!("{v:018}"))
            .collect::<Vec<_>>()
            .join(",");
        format!("node # {csv};")
    }

    fn write_log(root: &Path, host: &str, file: &str, fields: &[u64]) {
        let dir = root.join(host);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), measurement_line(fields) + "\n").unwrap();
    }

    #[test]
    fn loads_one_record_per_host() {
        let root = TempDir::new().unwrap();
        write_log(root.path(), "alpha", "run.log", &[0, 400, 1, 2, 1, 2]);
        write_log(root.path(), "beta", "run.log", &[1, 400, 3, 4, 3, 4]);

        let store = load_records(root.path(), host_from_parent_dir).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store["alpha"].node_id, 0);
        assert_eq!(store["beta"].node_id, 1);
    }

    #[test]
    fn missing_root_is_an_empty_store() {
        let root = TempDir::new().unwrap();
        let gone = root.path().join("nope");

        let store = load_records(&gone, host_from_parent_dir).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn last_log_in_sorted_order_wins_per_host() {
        let root = TempDir::new().unwrap();
        write_log(root.path(), "alpha", "a.log", &[0, 400, 1, 1, 1, 1]);
        write_log(root.path(), "alpha", "b.log", &[5, 400, 2, 2, 2, 2]);

        let store = load_records(root.path(), host_from_parent_dir).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store["alpha"].node_id, 5);
    }

    #[test]
    fn non_log_files_are_ignored() {
        let root = TempDir::new().unwrap();
        write_log(root.path(), "alpha", "run.log", &[0, 400, 1, 2, 1, 2]);
        fs::write(root.path().join("alpha").join("notes.txt"), "not a log").unwrap();
        fs::write(root.path().join("stray.log"), "top-level, too shallow").unwrap();

        let store = load_records(root.path(), host_from_parent_dir).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn bad_file_aborts_the_run() {
        let root = TempDir::new().unwrap();
        write_log(root.path(), "alpha", "run.log", &[0, 400, 1, 2, 1, 2]);
        let dir = root.path().join("beta");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("run.log"), "no measurement here\n").unwrap();

        assert!(load_records(root.path(), host_from_parent_dir).is_err());
    }
}
