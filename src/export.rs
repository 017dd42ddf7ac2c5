use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SweepError};
use crate::scan::ScanResult;

/// Written for results whose modification time could not be read.
pub const UNKNOWN_MODIFIED_TIME: &str = "0001-01-01T00:00:00Z";

/// One exported result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub path: String,
    pub size: u64,
    pub files: u64,
    pub dirs: u64,
    pub read_order: usize,
    /// RFC 3339 at whole-second precision, or [`UNKNOWN_MODIFIED_TIME`]
    pub modified_time: String,
}

impl From<&ScanResult> for ExportRecord {
    fn from(result: &ScanResult) -> Self {
        Self {
            path: result.path().to_string_lossy().into_owned(),
            size: result.total_size(),
            files: result.file_count(),
            dirs: result.subdir_count(),
            read_order: result.read_order(),
            modified_time: result
                .modified_at()
                .map_or_else(|| UNKNOWN_MODIFIED_TIME.to_string(), rfc3339),
        }
    }
}

fn rfc3339(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Write `results` as a pretty-printed JSON array, keeping their order.
///
/// # Errors
///
/// Returns [`SweepError::ExportIo`] if the file cannot be written, including
/// write failures surfaced while encoding, and [`SweepError::ExportEncode`]
/// if encoding itself fails.
pub fn export_results(results: &[ScanResult], path: &Path) -> Result<()> {
    let io_error = |source| SweepError::ExportIo {
        path: path.to_path_buf(),
        source,
    };

    let records: Vec<ExportRecord> = results.iter().map(ExportRecord::from).collect();

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    serde_json::to_writer_pretty(&mut writer, &records).map_err(|err| {
        if err.is_io() {
            io_error(err.into())
        } else {
            SweepError::ExportEncode(err)
        }
    })?;
    writeln!(writer).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_export_keeps_order_and_fields() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("results.json");

        let stamp = SystemTime::UNIX_EPOCH + Duration::new(1_700_000_000, 987_654_321);
        let results = vec![
            ScanResult::fixture("/w/b/node_modules", 10, 2, Some(stamp)),
            ScanResult::fixture("/w/a/node_modules", 99, 1, None),
        ];

        export_results(&results, &out).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("[\n  {"));
        assert!(text.ends_with("]\n"));

        let decoded: Vec<ExportRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded.len(), 2);
        for (record, result) in decoded.iter().zip(&results) {
            assert_eq!(record.path, result.path().to_string_lossy());
            assert_eq!(record.size, result.total_size());
            assert_eq!(record.files, result.file_count());
            assert_eq!(record.dirs, result.subdir_count());
            assert_eq!(record.read_order, result.read_order());
        }

        assert_eq!(decoded[0].modified_time, "2023-11-14T22:13:20Z");
        let parsed = DateTime::parse_from_rfc3339(&decoded[0].modified_time).unwrap();
        assert_eq!(parsed.timestamp(), 1_700_000_000);
        assert_eq!(decoded[1].modified_time, UNKNOWN_MODIFIED_TIME);
    }

    #[test]
    fn test_unknown_mtime_is_still_a_timestamp_string() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("unknown.json");

        let results = vec![ScanResult::fixture("/w/x/node_modules", 1, 1, None)];
        export_results(&results, &out).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let modified = value[0]["modified_time"].as_str().unwrap();
        assert_eq!(modified, "0001-01-01T00:00:00Z");
        assert!(DateTime::parse_from_rfc3339(modified).is_ok());
    }

    #[test]
    fn test_export_empty_list() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("empty.json");

        export_results(&[], &out).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "[]\n");
    }

    #[test]
    fn test_export_bad_destination() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("missing-dir/results.json");

        let result = export_results(&[], &out);
        assert!(matches!(result, Err(SweepError::ExportIo { .. })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_while_encoding_is_io_error() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }

        // Enough records to overflow the write buffer mid-encode
        let long = "x".repeat(120);
        let results: Vec<ScanResult> = (1..=200)
            .map(|i| ScanResult::fixture(format!("/w/{long}/{i}/node_modules"), i as u64, i, None))
            .collect();

        let result = export_results(&results, full);
        assert!(
            matches!(result, Err(SweepError::ExportIo { ref path, .. }) if path == full),
            "got {result:?}"
        );
    }
}
