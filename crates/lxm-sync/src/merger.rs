//! The synchronic merger: discover, order, and fold sidecar update files.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use lxm_model::{entry_key, Document, Element};
use tempfile::NamedTempFile;

use crate::clock::{FileSystemClock, ModificationClock};
use crate::error::{SyncError, SyncResult};

/// Reserved name of the canonical base document in a lexicon directory.
pub const BASE_FILE_NAME: &str = "lexicon.lift";

/// Reserved suffix identifying sidecar incremental-update files.
pub const UPDATE_SUFFIX: &str = ".lift.update";

/// Suffix appended to the base file name for the one-time backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// A discovered sidecar, keyed by path and last-write timestamp.
struct UpdateFile {
    path: PathBuf,
    modified: SystemTime,
}

/// Folds sidecar update files into the base document.
///
/// Single-threaded and blocking; sidecar application is strictly ordered by
/// timestamp and stays sequential. The target directory is a shared
/// resource: mutual exclusion across concurrent merges is the caller's
/// responsibility, not handled here.
pub struct SynchronicMerger {
    clock: Box<dyn ModificationClock>,
}

impl Default for SynchronicMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl SynchronicMerger {
    /// Create a merger ordered by real filesystem timestamps.
    pub fn new() -> Self {
        Self::with_clock(FileSystemClock)
    }

    /// Create a merger with an injected timestamp source.
    pub fn with_clock(clock: impl ModificationClock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Merge all sidecars in `dir` into its reserved base file.
    pub fn merge_directory(&self, dir: &Path) -> SyncResult<()> {
        self.merge_updates_into_file(&dir.join(BASE_FILE_NAME))
    }

    /// Merge all sidecars found next to `base_path` into it.
    ///
    /// On success the previous base is kept as `<base>.bak` (only when no
    /// backup exists yet), the merged result atomically replaces the base,
    /// and the consumed sidecars are deleted. The replace and the sidecar
    /// deletion are not one atomic step: a crash between them leaves the
    /// sidecars behind, and the next run re-applies them — harmless under
    /// whole-entry overwrite semantics.
    ///
    /// A read-only base file makes the whole call a silent no-op.
    pub fn merge_updates_into_file(&self, base_path: &Path) -> SyncResult<()> {
        if !base_path.is_file() {
            return Err(SyncError::BaseFileMissing(base_path.to_path_buf()));
        }
        let dir = match base_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let updates = self.pending_updates(&dir, base_path)?;
        if updates.is_empty() {
            tracing::debug!(base = %base_path.display(), "no pending updates");
            return Ok(());
        }
        if std::fs::metadata(base_path)?.permissions().readonly() {
            tracing::warn!(base = %base_path.display(), "base file is read-only; skipping merge");
            return Ok(());
        }

        let base_text = std::fs::read_to_string(base_path)?;
        let base_doc = Document::parse(&base_text)?;

        let mut entries: Vec<Element> = base_doc.entries().cloned().collect();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (position, entry) in entries.iter().enumerate() {
            if let Some(key) = entry_key(entry) {
                // First occurrence wins, mirroring the entry index policy.
                positions.entry(key.to_string()).or_insert(position);
            }
        }

        for update in &updates {
            let text = std::fs::read_to_string(&update.path)?;
            let update_doc = Document::parse(&text)?;
            let mut applied = 0usize;
            for fragment in update_doc.entries() {
                let Some(key) = entry_key(fragment) else {
                    tracing::warn!(
                        update = %update.path.display(),
                        "skipping update entry without id or guid"
                    );
                    continue;
                };
                match positions.get(key) {
                    // Whole-entry overwrite: attributes and children fully replaced.
                    Some(&position) => entries[position] = fragment.clone(),
                    None => {
                        positions.insert(key.to_string(), entries.len());
                        entries.push(fragment.clone());
                    }
                }
                applied += 1;
            }
            tracing::debug!(update = %update.path.display(), applied, "sidecar applied");
        }

        let output = base_doc.with_entries(entries).to_xml()?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(output.as_bytes())?;
        temp.flush()?;

        let backup = backup_path(base_path);
        if !backup.exists() {
            std::fs::copy(base_path, &backup)?;
        }
        temp.persist(base_path)?;

        for update in &updates {
            std::fs::remove_file(&update.path)?;
        }
        tracing::info!(
            base = %base_path.display(),
            updates = updates.len(),
            "synchronic merge complete"
        );
        Ok(())
    }

    /// Sidecars next to the base, ordered ascending by modification time.
    ///
    /// Equal timestamps tie-break by file name, lexicographic ascending, so
    /// application order is total and deterministic.
    fn pending_updates(&self, dir: &Path, base_path: &Path) -> SyncResult<Vec<UpdateFile>> {
        let mut updates = Vec::new();
        for dir_entry in std::fs::read_dir(dir)? {
            let path = dir_entry?.path();
            if path == base_path || !path.is_file() {
                continue;
            }
            let is_update = path
                .file_name()
                .map(|n| n.to_string_lossy().ends_with(UPDATE_SUFFIX))
                .unwrap_or(false);
            if !is_update {
                continue;
            }
            let modified = self.clock.modified(&path)?;
            updates.push(UpdateFile { path, modified });
        }
        updates.sort_by(|a, b| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
        });
        Ok(updates)
    }
}

/// `lexicon.lift` -> `lexicon.lift.bak`.
fn backup_path(base_path: &Path) -> PathBuf {
    let mut name = base_path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
