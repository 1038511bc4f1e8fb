//! Timestamp-preserving file copy

use crate::types::CopydiffError;
use filetime::FileTime;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Suffix of the temporary sibling written before the final rename
const PART_SUFFIX: &str = ".copydiff-part";

/// Copy `src` to `dest`, preserving modification and access times
///
/// 1. Stream the bytes into a `.copydiff-part` sibling of `dest`
/// 2. Flush and sync to disk
/// 3. Carry over permissions, mtime and atime from `src`
/// 4. Rename over `dest`
///
/// The destination ends up with the source's timestamps rather than the time
/// of the copy, so an older source copied over a newer target leaves the
/// older timestamp behind.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(CopydiffError::CopyFailed)` - any IO failure; the part file is removed
///
/// # Example
/// ```no_run
/// use copydiff::executor::copy_file_preserving_times;
/// use std::path::Path;
///
/// let bytes = copy_file_preserving_times(Path::new("source.txt"), Path::new("backup/source.txt"))?;
/// # Ok::<(), copydiff::CopydiffError>(())
/// ```
pub fn copy_file_preserving_times(src: &Path, dest: &Path) -> Result<u64, CopydiffError> {
    let part_path = part_path_for(dest);

    copy_via_part_file(src, dest, &part_path).map_err(|source| {
        let _ = fs::remove_file(&part_path);
        CopydiffError::CopyFailed {
            path: src.to_path_buf(),
            source,
        }
    })
}

fn copy_via_part_file(src: &Path, dest: &Path, part_path: &Path) -> io::Result<u64> {
    let mut src_file = File::open(src)?;
    let mut part_file = File::create(part_path)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    fs::set_permissions(part_path, src_metadata.permissions())?;

    let mtime = FileTime::from_last_modification_time(&src_metadata);
    let atime = FileTime::from_last_access_time(&src_metadata);
    filetime::set_file_times(part_path, atime, mtime)?;

    fs::rename(part_path, dest)?;

    Ok(total_bytes)
}

fn part_path_for(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(PART_SUFFIX);
    dest.with_file_name(name)
}
