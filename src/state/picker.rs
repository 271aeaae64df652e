//! State for the file picker modal.

use std::path::{Path, PathBuf};
use tracing::warn;

/// One selectable row in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    /// Text shown in the list (`..` for the parent entry).
    pub label: String,
    /// Full path the entry refers to.
    pub path: PathBuf,
    /// Whether activating the entry descends instead of selecting.
    pub is_dir: bool,
}

/// Result of activating the selected picker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// A file was chosen.
    Selected(PathBuf),
    /// The picker descended into a directory and stays open.
    Descended,
}

/// File picker modal: a directory listing with one selected row.
///
/// Directories sort before files, both name-ordered; a `..` entry leads
/// when the directory has a parent. An unreadable directory produces an
/// empty listing (plus a log line) rather than an error.
#[derive(Debug, Clone)]
pub struct FilePicker {
    dir: PathBuf,
    entries: Vec<PickerEntry>,
    selected: usize,
}

impl FilePicker {
    /// Open a picker on `dir`.
    pub fn open(dir: PathBuf) -> Self {
        let entries = read_entries(&dir);
        Self {
            dir,
            entries,
            selected: 0,
        }
    }

    /// Directory currently listed.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All rows, in display order.
    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    /// Index of the selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection up one row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection down one row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    /// Activate the selected row: descend into a directory, or yield the
    /// chosen file. `None` when the listing is empty.
    pub fn activate(&mut self) -> Option<PickerAction> {
        let entry = self.entries.get(self.selected)?.clone();
        if entry.is_dir {
            self.dir = entry.path;
            self.entries = read_entries(&self.dir);
            self.selected = 0;
            Some(PickerAction::Descended)
        } else {
            Some(PickerAction::Selected(entry.path))
        }
    }
}

fn read_entries(dir: &Path) -> Vec<PickerEntry> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    match std::fs::read_dir(dir) {
        Ok(iter) => {
            for entry in iter.flatten() {
                let path = entry.path();
                let label = entry.file_name().to_string_lossy().into_owned();
                let is_dir = path.is_dir();
                let row = PickerEntry { label, path, is_dir };
                if is_dir {
                    dirs.push(row);
                } else {
                    files.push(row);
                }
            }
        }
        Err(err) => {
            warn!("Cannot list {}: {err}", dir.display());
        }
    }

    dirs.sort_by(|a, b| a.label.cmp(&b.label));
    files.sort_by(|a, b| a.label.cmp(&b.label));

    let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
    if let Some(parent) = dir.parent() {
        entries.push(PickerEntry {
            label: "..".to_string(),
            path: parent.to_path_buf(),
            is_dir: true,
        });
    }
    entries.extend(dirs);
    entries.extend(files);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.bin"), b"b").unwrap();
        fs::write(dir.path().join("a.bin"), b"a").unwrap();
        dir
    }

    #[test]
    fn listing_orders_parent_dirs_files() {
        let dir = sample_dir();
        let picker = FilePicker::open(dir.path().to_path_buf());

        let labels: Vec<&str> = picker.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["..", "sub", "a.bin", "b.bin"]);
    }

    #[test]
    fn selection_moves_and_clamps() {
        let dir = sample_dir();
        let mut picker = FilePicker::open(dir.path().to_path_buf());

        picker.select_prev();
        assert_eq!(picker.selected(), 0);

        picker.select_last();
        assert_eq!(picker.selected(), picker.entries().len() - 1);
        picker.select_next();
        assert_eq!(picker.selected(), picker.entries().len() - 1);

        picker.select_first();
        assert_eq!(picker.selected(), 0);
    }

    #[test]
    fn activating_a_file_selects_it() {
        let dir = sample_dir();
        let mut picker = FilePicker::open(dir.path().to_path_buf());
        picker.select_last(); // "b.bin"

        match picker.activate() {
            Some(PickerAction::Selected(path)) => {
                assert_eq!(path, dir.path().join("b.bin"));
            }
            other => panic!("expected file selection, got {other:?}"),
        }
    }

    #[test]
    fn activating_a_directory_descends() {
        let dir = sample_dir();
        let mut picker = FilePicker::open(dir.path().to_path_buf());
        // Row 1 is "sub" (after "..")
        picker.select_next();

        assert_eq!(picker.activate(), Some(PickerAction::Descended));
        assert_eq!(picker.dir(), dir.path().join("sub"));
        assert_eq!(picker.selected(), 0);
    }

    #[test]
    fn unreadable_directory_lists_parent_only() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let picker = FilePicker::open(missing);

        // The directory cannot be read; only the synthetic ".." remains.
        assert_eq!(picker.entries().len(), 1);
        assert_eq!(picker.entries()[0].label, "..");
    }
}
