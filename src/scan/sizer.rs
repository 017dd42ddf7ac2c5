use std::path::Path;

use walkdir::WalkDir;

use super::ScanResult;

/// Walk one matched directory and total its contents.
///
/// Every entry failure is tolerated: unreadable entries and symbolic links are
/// left out of the counts and the walk continues. If the directory itself is
/// unreadable the result is all zeros with no modification time.
///
/// The modification time is taken from the matched directory, not from the
/// newest entry inside it.
pub fn measure_directory(path: &Path, read_order: usize) -> ScanResult {
    let mut result = ScanResult {
        path: path.to_path_buf(),
        file_count: 0,
        subdir_count: 0,
        total_size: 0,
        read_order,
        modified_at: None,
    };

    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        let file_type = entry.file_type();

        if file_type.is_dir() {
            result.subdir_count += 1;
            if entry.depth() == 0 {
                result.modified_at = entry.metadata().ok().and_then(|m| m.modified().ok());
            }
        } else if file_type.is_file()
            && let Ok(metadata) = entry.metadata()
        {
            result.file_count += 1;
            result.total_size += metadata.len();
        }
    }

    result
}
