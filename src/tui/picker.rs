use std::path::{Path, PathBuf};

/// A single entry in the file picker listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_pdf: bool,
}

/// State for the file picker screen: one directory at a time, single-select,
/// PDFs only.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then files).
    pub entries: Vec<FileEntry>,
    /// Cursor position in the entries list.
    pub cursor: usize,
}

impl FilePickerState {
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::at(current_dir)
    }

    pub fn at(current_dir: PathBuf) -> Self {
        let mut state = Self {
            current_dir,
            entries: Vec::new(),
            cursor: 0,
        };
        state.refresh_entries();
        state
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        if let Ok(read_dir) = std::fs::read_dir(&self.current_dir) {
            for entry in read_dir.flatten() {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().to_string();
                // Hidden entries stay out of a demo-sized listing
                if name.starts_with('.') {
                    continue;
                }
                let is_dir = path.is_dir();
                let is_pdf = !is_dir && has_pdf_extension(&path);
                let file_entry = FileEntry {
                    name,
                    path,
                    is_dir,
                    is_pdf,
                };
                if is_dir {
                    dirs.push(file_entry);
                } else {
                    files.push(file_entry);
                }
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));

        self.entries = Vec::with_capacity(dirs.len() + files.len() + 1);
        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                is_pdf: false,
            });
        }
        self.entries.extend(dirs);
        self.entries.extend(files);
        self.cursor = 0;
    }

    /// Entry currently under the cursor.
    pub fn current_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// If the cursor is on a directory, enter it and return true.
    pub fn enter_directory(&mut self) -> bool {
        let Some(entry) = self.current_entry() else {
            return false;
        };
        if !entry.is_dir {
            return false;
        }
        let target = entry.path.clone();
        self.current_dir = target;
        self.refresh_entries();
        true
    }

    pub fn move_down(&mut self) {
        let max = self.entries.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn go_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_bottom(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }
}

impl Default for FilePickerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive `.pdf` extension check.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir(dir.path().join("papers")).expect("Failed to create subdir");
        std::fs::write(dir.path().join("report.PDF"), b"").expect("Failed to write file");
        std::fs::write(dir.path().join("notes.txt"), b"").expect("Failed to write file");
        std::fs::write(dir.path().join(".hidden.pdf"), b"").expect("Failed to write file");
        dir
    }

    #[test]
    fn test_listing_order_and_flags() {
        let dir = fixture_dir();
        let picker = FilePickerState::at(dir.path().to_path_buf());

        let names: Vec<&str> = picker.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "papers", "notes.txt", "report.PDF"]);

        let report = picker
            .entries
            .iter()
            .find(|e| e.name == "report.PDF")
            .expect("PDF entry should be listed");
        assert!(report.is_pdf, "Extension check should be case-insensitive");

        let notes = picker
            .entries
            .iter()
            .find(|e| e.name == "notes.txt")
            .expect("Non-PDF file should still be listed");
        assert!(!notes.is_pdf);
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let dir = fixture_dir();
        let picker = FilePickerState::at(dir.path().to_path_buf());
        assert!(picker.entries.iter().all(|e| e.name != ".hidden.pdf"));
    }

    #[test]
    fn test_enter_directory_and_back_out() {
        let dir = fixture_dir();
        let mut picker = FilePickerState::at(dir.path().to_path_buf());

        // Cursor on "papers" (index 1, after "..")
        picker.move_down();
        assert!(picker.enter_directory());
        assert!(picker.current_dir.ends_with("papers"));
        // Empty subdir still lists ".."
        assert_eq!(picker.entries.len(), 1);
        assert_eq!(picker.entries[0].name, "..");

        assert!(picker.enter_directory());
        assert_eq!(picker.current_dir, dir.path());
    }

    #[test]
    fn test_enter_directory_on_file_returns_false() {
        let dir = fixture_dir();
        let mut picker = FilePickerState::at(dir.path().to_path_buf());
        picker.go_bottom();
        let before = picker.current_dir.clone();
        assert!(!picker.enter_directory());
        assert_eq!(picker.current_dir, before);
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let dir = fixture_dir();
        let mut picker = FilePickerState::at(dir.path().to_path_buf());

        picker.move_up();
        assert_eq!(picker.cursor, 0);

        for _ in 0..20 {
            picker.move_down();
        }
        assert_eq!(picker.cursor, picker.entries.len() - 1);

        picker.go_top();
        assert_eq!(picker.cursor, 0);
        picker.go_bottom();
        assert_eq!(picker.cursor, picker.entries.len() - 1);
    }
}
