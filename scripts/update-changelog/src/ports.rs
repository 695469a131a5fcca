pub mod changelog_writer;
pub mod git;
pub mod github;
