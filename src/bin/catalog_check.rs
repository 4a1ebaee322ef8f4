//! Catalog check binary - validates the translation catalog and previews keys
//!
//! Usage:
//!   cargo run --bin catalog-check                           # Validate the catalog
//!   cargo run --bin catalog-check -- nav.dashboard role.admin  # Also translate keys
//!
//! Optional environment variables:
//! - DEFAULT_LANGUAGE (used when no preference is stored)
//! - LANGUAGE_PREFERENCE_FILE (defaults to .praktijkepd/preferences.json)
//!
//! Exits with status 1 when the catalog has errors.

use anyhow::Result;
use praktijk_epd::config::Config;
use praktijk_epd::i18n::{CatalogValidator, FilePreferenceStore, NoopDocument, TranslationService};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<ExitCode> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("praktijk_epd=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let report = CatalogValidator::validate_catalog();
    println!("\n{}", "=".repeat(60));
    println!("CATALOG REPORT");
    println!("{}", "=".repeat(60));
    for error in &report.errors {
        println!("ERROR   {}", error);
    }
    for warning in &report.warnings {
        println!("WARNING {}", warning);
    }
    println!(
        "{} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    let store = Arc::new(FilePreferenceStore::new(&config.preference_file));
    let service = TranslationService::new(
        store,
        Arc::new(NoopDocument),
        config.default_language.as_deref(),
    );
    info!(
        "Active language: {} ({})",
        service.language().name(),
        service.language()
    );

    let keys: Vec<String> = std::env::args().skip(1).collect();
    if !keys.is_empty() {
        println!("\n{}", "=".repeat(60));
        println!("TRANSLATIONS ({})", service.language());
        println!("{}", "=".repeat(60));
        for key in &keys {
            println!("{:<32} {}", key, service.translate_str(key, None));
        }

        let metrics = service.metrics().report();
        info!(
            "Lookups: {}, missing: {}, hit rate: {:.1}%",
            metrics.lookups, metrics.missing_keys, metrics.hit_rate
        );
    }

    if report.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
