//! Atomic file copy implementation

use crate::types::SequinError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Copy a file using the write-then-rename strategy.
///
/// 1. Stream to a temporary `.part` file
/// 2. Flush and sync to disk
/// 3. Preserve metadata (permissions, mtime) - best effort
/// 4. Atomic rename to the final destination
///
/// An interrupted copy leaves at most a stray `.part` file, never a partial
/// destination entry, so the next run's index scan still sees a valid
/// destination.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(SequinError)` - IO error during the data copy or rename
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, SequinError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let part_path = dest.with_extension("part");

    let mut src_file = File::open(src)?;
    let mut part_file = File::create(&part_path)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    // Metadata preservation is best effort; a failure here never fails the
    // copy itself.
    if let Ok(metadata) = fs::metadata(src) {
        let _ = fs::set_permissions(&part_path, metadata.permissions());
        if let Ok(mtime) = metadata.modified() {
            let _ = filetime::set_file_mtime(
                &part_path,
                filetime::FileTime::from_system_time(mtime),
            );
        }
    }

    // Atomic on POSIX systems (single syscall)
    fs::rename(&part_path, dest)?;

    Ok(total_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_basic_content() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("source.jpg");
        let dest = dir.path().join("00001__source.jpg");
        fs::write(&src, b"payload").expect("write source");

        let bytes = copy_file(&src, &dest).expect("copy should succeed");

        assert_eq!(bytes, 7);
        assert_eq!(fs::read(&dest).expect("read dest"), b"payload");
        assert!(
            !dir.path().join("00001__source.part").exists(),
            "part file must be renamed away"
        );
    }

    #[test]
    fn test_copy_empty_file() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("empty.jpg");
        let dest = dir.path().join("00001__empty.jpg");
        fs::write(&src, b"").expect("write source");

        let bytes = copy_file(&src, &dest).expect("copy should succeed");
        assert_eq!(bytes, 0);
        assert!(dest.exists());
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("gone.jpg");
        let dest = dir.path().join("00001__gone.jpg");

        let result = copy_file(&src, &dest);
        assert!(result.is_err());
        assert!(!dest.exists());
    }
}
