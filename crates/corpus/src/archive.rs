use {
    crate::CorpusError,
    base::log,
    std::{
        fs::{self, File},
        io,
        path::{Path, PathBuf},
    },
    zip::ZipArchive,
};

/// Extracts every file of the zip archive at `archive` below `dest`.
///
/// Returns the extracted paths in the archive's own entry order. Entries
/// whose names would land outside `dest` are rejected.
pub fn extract_all(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let file = File::open(archive)
        .map_err(|e| CorpusError::Io(format!("{}: {e}", archive.display())))?;
    let mut zip = ZipArchive::new(file)?;
    fs::create_dir_all(dest)?;

    let mut extracted = Vec::with_capacity(zip.len());
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let relative = entry
            .enclosed_name()
            .map(|name| name.to_path_buf())
            .ok_or_else(|| CorpusError::UnsafeEntry(entry.name().to_string()))?;

        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
        extracted.push(target);
    }

    log::debug!(
        "extracted {} files from {} into {}",
        extracted.len(),
        archive.display(),
        dest.display()
    );
    Ok(extracted)
}
