pub mod file_changelog_writer;
pub mod octocrab;
pub mod system_git;
