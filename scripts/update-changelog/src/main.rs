use chrono::Local;
use clap::Parser;
use color_eyre::{eyre::Context, Result};
use tracing_subscriber::EnvFilter;
use update_changelog::{
    adapters::{file_changelog_writer::FileChangelogWriter, octocrab::OctocrabAdapter},
    cli::Cli,
    config::Settings,
    domain::config::ChangelogConfig,
    pipeline::Pipeline,
    resolver::{resolve_local, resolve_remote},
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = Settings::load(Cli::parse()).wrap_err("failed to load settings")?;
    let repo = settings.repository;

    let git = resolve_local(&settings.repos_dir, repo)
        .wrap_err_with(|| format!("failed to open the local checkout of {repo}"))?;
    let github = OctocrabAdapter::new(&settings.github_token)?;
    let remote = resolve_remote(&github, repo)
        .await
        .wrap_err_with(|| format!("failed to find {repo} on GitHub"))?;

    let changelog = FileChangelogWriter::new(git.work_tree().join(&settings.changelog_file));
    let config = ChangelogConfig::default();
    let pipeline = Pipeline {
        remote: &remote,
        github: &github,
        git: &git,
        changelog: &changelog,
        config: &config,
    };

    let outcome = pipeline
        .run(repo, &settings.version, Local::now().date_naive(), settings.gate)
        .await
        .wrap_err_with(|| format!("failed to release {} {}", repo, settings.version))?;

    println!("{}", outcome.section.join("\n"));
    if let Some(url) = outcome.release.html_url {
        println!("\nDraft release: {url}");
    }

    Ok(())
}
