//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `periodical_core` linkage and run one end-to-end catalog
//!   scenario with deterministic output.
//! - Enable file logging when `PERIODICAL_LOG_DIR` is set.

use periodical_core::{
    open_registry, ArticleService, AuthorService, MagazineService, RegistryRepository, RepoResult,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "PERIODICAL_LOG_DIR";
const LOG_LEVEL_ENV: &str = "PERIODICAL_LOG_LEVEL";

fn main() -> ExitCode {
    println!("periodical_core version={}", periodical_core::core_version());

    if let Err(err) = init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }

    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging_from_env() -> Result<(), String> {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| periodical_core::default_log_level().to_string());
    periodical_core::init_logging(&level, &log_dir)
}

fn run_scenario() -> RepoResult<()> {
    let registry = open_registry();
    let repo = RegistryRepository::new(&registry);
    let authors = AuthorService::new(repo);
    let magazines = MagazineService::new(repo);
    let articles = ArticleService::new(repo);

    let ann = authors.create_author("Ann")?;
    let magazine = magazines.create_magazine("Tech Weekly", "Technology")?;

    let article = authors.add_article(ann.id(), magazine.id(), "A Great Title")?;
    println!("{}", articles.describe_article(article.id())?);

    match articles.create_article(ann.id(), magazine.id(), "Hi") {
        Ok(_) => println!("short title unexpectedly accepted"),
        Err(err) => println!("short title rejected: {err}"),
    }

    println!("registry articles={}", articles.article_count()?);
    println!(
        "magazine titles={:?}",
        magazines.article_titles(magazine.id())?.unwrap_or_default()
    );
    println!(
        "author topic areas={:?}",
        authors.topic_areas(ann.id())?.unwrap_or_default()
    );
    Ok(())
}
