use std::path::Path;

use crate::error::Result;

/// This port abstracts where the changelog lives.
pub trait ChangelogWriter {
    fn path(&self) -> &Path;

    /// Read the changelog as lines, without line terminators.
    fn read_changelog(&self) -> Result<Vec<String>>;

    /// Replace the changelog content. For example, this could write to a file.
    fn write_changelog(&self, lines: &[String]) -> Result<()>;
}
