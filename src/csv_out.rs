use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{FormError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub header_written: bool,
}

/// Append `row` to the CSV at `path`, writing `header` first if the file is new.
///
/// First-write detection is an exclusive create, so header and row land in a
/// single write and a concurrent run can't also decide the file is new.
pub fn append_row(path: &Path, header: &str, row: &str) -> Result<AppendOutcome> {
    let write_err = |source| FormError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    match OpenOptions::new().append(true).create_new(true).open(path) {
        Ok(mut file) => {
            let buf = format!("{}\n{}\n", header, row);
            file.write_all(buf.as_bytes()).map_err(write_err)?;
            Ok(AppendOutcome {
                header_written: true,
            })
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let mut file = OpenOptions::new()
                .append(true)
                .open(path)
                .map_err(write_err)?;
            file.write_all(format!("{}\n", row).as_bytes())
                .map_err(write_err)?;
            Ok(AppendOutcome {
                header_written: false,
            })
        }
        Err(e) => Err(write_err(e)),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn new_file_gets_header_then_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let outcome = append_row(&path, "a,b", "1,2").unwrap();
        assert!(outcome.header_written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn existing_file_only_gains_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        let outcome = append_row(&path, "a,b", "3,4").unwrap();
        assert!(!outcome.header_written);
        assert_eq!(lines(&path), vec!["a,b", "1,2", "3,4"]);
    }

    #[test]
    fn header_written_once_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        for i in 0..5 {
            append_row(&path, "a,b", &format!("{},{}", i, i)).unwrap();
        }
        let all = lines(&path);
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], "a,b");
        assert_eq!(all.iter().filter(|l| *l == "a,b").count(), 1);
    }

    #[test]
    fn existing_empty_file_gets_no_header() {
        // Existence alone decides; contents are not inspected.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "").unwrap();
        append_row(&path, "a,b", "1,2").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,2\n");
    }

    #[test]
    fn missing_parent_dir_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.csv");
        let err = append_row(&path, "a,b", "1,2").unwrap_err();
        assert!(matches!(err, FormError::WriteOutput { path: ref p, .. } if *p == path));
    }
}
