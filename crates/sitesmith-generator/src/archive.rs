//! Zip packaging and preview extraction.
//!
//! A generated site directory is archived into a single downloadable zip.
//! For preview, the archive is extracted with every entry bounded to the
//! extraction root; entries that would escape it are rejected.

use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, info};
use walkdir::WalkDir;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipArchive, ZipWriter};

/// Archive errors.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip container error.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Path outside the directory being archived.
    #[error("invalid archive path: {0}")]
    InvalidPath(PathBuf),

    /// Archive entry that would escape the extraction root.
    #[error("archive entry escapes extraction root: {0}")]
    UnsafeEntry(String),
}

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Archive a site directory into a zip file with deflate compression.
///
/// Entry names are the forward-slash relative paths under `site_dir`, so
/// unpacking reproduces the exact directory layout.
pub fn archive_site(site_dir: &Path, zip_path: &Path) -> Result<()> {
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(zip_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0;
    for entry in WalkDir::new(site_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path
            .strip_prefix(site_dir)
            .map_err(|_| ArchiveError::InvalidPath(path.to_path_buf()))?;
        let name = relative.to_string_lossy().replace('\\', "/");

        writer.start_file(name, options)?;
        let mut source = File::open(path)?;
        io::copy(&mut source, &mut writer)?;
        count += 1;
    }

    writer.finish()?;
    info!(archive = %zip_path.display(), files = count, "archived site");
    Ok(())
}

/// Extract an archive into `dest` for preview serving.
///
/// Entry names are resolved via `enclosed_name`, so `../` tricks and absolute
/// paths inside a hostile archive cannot write outside `dest`.
pub fn extract_archive(zip_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;

    fs::create_dir_all(dest)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(ArchiveError::UnsafeEntry(entry.name().to_string()));
        };

        let out_path = dest.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
        debug!(path = %out_path.display(), "extracted entry");
    }

    info!(archive = %zip_path.display(), dest = %dest.display(), "extracted archive");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn sample_site(dir: &Path) {
        fs::create_dir_all(dir.join("css")).unwrap();
        fs::create_dir_all(dir.join("js")).unwrap();
        fs::write(dir.join("index.html"), "<html>home</html>").unwrap();
        fs::write(dir.join("about.html"), "<html>about</html>").unwrap();
        fs::write(dir.join("css/main.css"), "@import url('base.css');").unwrap();
        fs::write(dir.join("js/main.js"), "// bootstrap").unwrap();
    }

    #[test]
    fn test_round_trip_preserves_content_and_paths() {
        let site = TempDir::new().unwrap();
        sample_site(site.path());

        let work = TempDir::new().unwrap();
        let zip_path = work.path().join("site.zip");
        archive_site(site.path(), &zip_path).unwrap();

        let unpacked = work.path().join("unpacked");
        extract_archive(&zip_path, &unpacked).unwrap();

        for relative in ["index.html", "about.html", "css/main.css", "js/main.js"] {
            let original = fs::read(site.path().join(relative)).unwrap();
            let extracted = fs::read(unpacked.join(relative)).unwrap();
            assert_eq!(original, extracted, "{relative} differs after round trip");
        }
    }

    #[test]
    fn test_archive_of_empty_directory() {
        let site = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let zip_path = work.path().join("empty.zip");

        archive_site(site.path(), &zip_path).unwrap();
        assert!(zip_path.exists());

        let unpacked = work.path().join("unpacked");
        extract_archive(&zip_path, &unpacked).unwrap();
        assert!(unpacked.exists());
    }

    #[test]
    fn test_extract_rejects_traversal_entries() {
        let work = TempDir::new().unwrap();
        let zip_path = work.path().join("evil.zip");

        // Hand-build an archive with a traversal entry name.
        let file = File::create(&zip_path).unwrap();
        let mut writer = ZipWriter::new(file);
        writer
            .start_file("../outside.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"gotcha").unwrap();
        writer.finish().unwrap();

        let dest = work.path().join("preview");
        let result = extract_archive(&zip_path, &dest);
        assert!(matches!(result, Err(ArchiveError::UnsafeEntry(_))));
        assert!(!work.path().join("outside.txt").exists());
    }

    #[test]
    fn test_missing_archive_errors() {
        let work = TempDir::new().unwrap();
        let result = extract_archive(&work.path().join("nope.zip"), work.path());
        assert!(matches!(result, Err(ArchiveError::Io(_))));
    }
}
