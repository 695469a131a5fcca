use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::Result, ports::changelog_writer::ChangelogWriter};

const BOM: char = '\u{feff}';

pub struct FileChangelogWriter {
    pub file_path: PathBuf,
}

impl FileChangelogWriter {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ChangelogWriter for FileChangelogWriter {
    fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_changelog(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.file_path)?;
        Ok(contents
            .trim_start_matches(BOM)
            .lines()
            .map(String::from)
            .collect())
    }

    /// Writes UTF-8 without a byte-order mark, one `\n` after every line.
    fn write_changelog(&self, lines: &[String]) -> Result<()> {
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&self.file_path, contents.as_bytes())?;
        Ok(())
    }
}
