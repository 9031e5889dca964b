//! Vocabulary command handler.
//!
//! `vocab show` reports the cache artifacts, `vocab refresh` re-downloads
//! them.

use crate::config::AppConfig;
use crate::resources::readable_size;
use crate::transport::default_transport;
use crate::vocabulary::{VocabularyKind, VocabularyStore};
use anyhow::{Context, Result};

/// Print the location, size and term count of each cached vocabulary.
pub fn run_vocab_show(config: &AppConfig) -> Result<()> {
    let transport = crate::transport::OfflineTransport;
    let store = VocabularyStore::new(
        config.vocabulary_dir(),
        config.vocabulary_sources(),
        &transport,
    );

    println!("Cache directory: {}", store.cache_dir().display());
    for kind in VocabularyKind::ALL {
        let path = store.cached_path(kind);
        match std::fs::metadata(&path) {
            Ok(meta) => {
                let terms = store.load(kind).len();
                println!(
                    "  {:<12} {} ({}, {} terms)",
                    kind.name(),
                    path.display(),
                    readable_size(meta.len()),
                    terms
                );
            }
            Err(_) => println!("  {:<12} {} (not cached)", kind.name(), path.display()),
        }
    }
    Ok(())
}

/// Re-fetch every vocabulary and rewrite its cache artifact.
///
/// Returns an error if any vocabulary could not be refreshed; the others are
/// still updated.
pub fn run_vocab_refresh(config: &AppConfig) -> Result<()> {
    let transport =
        default_transport(config.timeout()).context("failed to create HTTP client")?;
    let store = VocabularyStore::new(
        config.vocabulary_dir(),
        config.vocabulary_sources(),
        transport.as_ref(),
    );

    let mut failed = Vec::new();
    for kind in VocabularyKind::ALL {
        match store.refresh(kind) {
            Ok(vocabulary) => eprintln!("{}: {} terms", kind.name(), vocabulary.len()),
            Err(e) => {
                tracing::error!("{}: {}", kind.name(), e);
                failed.push(kind.name());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("failed to refresh: {}", failed.join(", "))
    }
}
