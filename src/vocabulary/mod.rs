//! Reference vocabularies for media types and licenses.
//!
//! Two vocabularies are used by the scorer: registered media-type identifiers
//! (IANA) and license identifiers (EU Data Portal licence SKOS). Both are
//! loaded once per batch through a [`VocabularyStore`], which reads a local
//! flat-text cache and falls back to the remote source on a miss.
//!
//! Loading never fails hard: an unreachable source yields an empty
//! vocabulary, against which every membership check is false.
//!
//! ```no_run
//! use fair_audit::transport::OfflineTransport;
//! use fair_audit::vocabulary::{VocabularyStore, VocabularySources};
//!
//! let transport = OfflineTransport;
//! let store = VocabularyStore::new(".cache/vocabularies", VocabularySources::default(), &transport);
//! let vocabularies = store.load_all();
//! println!("{} media types", vocabularies.media_types.len());
//! ```

mod cache;
mod sources;

pub use cache::VocabularyCache;
pub use sources::{parse_licence_rdf, parse_media_type_registry};

use crate::error::Result;
use crate::transport::HttpTransport;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// IANA media type registry page
pub const MEDIA_TYPE_REGISTRY_URL: &str =
    "https://www.iana.org/assignments/media-types/media-types.xhtml";

/// EU Data Portal licence vocabulary (SKOS, RDF/XML)
pub const LICENCE_VOCABULARY_URL: &str = "https://gitlab.com/european-data-portal/edp-vocabularies/-/raw/master/edp-licences-skos.rdf?inline=false";

/// Which reference vocabulary to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyKind {
    MediaType,
    Licence,
}

impl VocabularyKind {
    pub const ALL: [Self; 2] = [Self::MediaType, Self::Licence];

    /// File name of the flat-text cache artifact
    #[must_use]
    pub const fn cache_file_name(&self) -> &'static str {
        match self {
            Self::MediaType => "MediaTypeVocabulary.txt",
            Self::Licence => "LicencesVocabulary.txt",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MediaType => "media type",
            Self::Licence => "licence",
        }
    }
}

/// Remote locations of the two vocabularies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularySources {
    pub media_type_url: String,
    pub licence_url: String,
}

impl Default for VocabularySources {
    fn default() -> Self {
        Self {
            media_type_url: MEDIA_TYPE_REGISTRY_URL.to_string(),
            licence_url: LICENCE_VOCABULARY_URL.to_string(),
        }
    }
}

impl VocabularySources {
    #[must_use]
    pub fn url(&self, kind: VocabularyKind) -> &str {
        match kind {
            VocabularyKind::MediaType => &self.media_type_url,
            VocabularyKind::Licence => &self.licence_url,
        }
    }
}

/// An immutable set of canonical identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: HashSet<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            terms: HashSet::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }
}

/// The pair of vocabularies shared read-only by every dataset of a batch
#[derive(Debug, Clone, Default)]
pub struct Vocabularies {
    pub media_types: Vocabulary,
    pub licences: Vocabulary,
}

/// Read-through loader for the reference vocabularies.
pub struct VocabularyStore<'a> {
    cache: VocabularyCache,
    sources: VocabularySources,
    transport: &'a dyn HttpTransport,
}

impl<'a> VocabularyStore<'a> {
    pub fn new(
        cache_dir: impl Into<PathBuf>,
        sources: VocabularySources,
        transport: &'a dyn HttpTransport,
    ) -> Self {
        Self {
            cache: VocabularyCache::new(cache_dir),
            sources,
            transport,
        }
    }

    /// Load both vocabularies.
    #[must_use]
    pub fn load_all(&self) -> Vocabularies {
        Vocabularies {
            media_types: self.load(VocabularyKind::MediaType),
            licences: self.load(VocabularyKind::Licence),
        }
    }

    /// Load one vocabulary from cache, or from its remote source on a miss.
    ///
    /// A successful remote load is persisted; failures yield an empty
    /// vocabulary and a warning.
    #[must_use]
    pub fn load(&self, kind: VocabularyKind) -> Vocabulary {
        if let Some(terms) = self.cache.read(kind) {
            tracing::debug!(
                "Loaded {} {} terms from cache",
                terms.len(),
                kind.name()
            );
            return terms.into_iter().collect();
        }

        match self.refresh(kind) {
            Ok(vocabulary) => vocabulary,
            Err(e) => {
                tracing::warn!(
                    "Could not load {} vocabulary, continuing with an empty one: {}",
                    kind.name(),
                    e
                );
                Vocabulary::empty()
            }
        }
    }

    /// Fetch a vocabulary from its remote source, bypassing the cache, and
    /// rewrite the cache artifact.
    pub fn refresh(&self, kind: VocabularyKind) -> Result<Vocabulary> {
        let terms = self.fetch(kind)?;

        if terms.is_empty() {
            tracing::warn!("Remote {} vocabulary is empty, not caching it", kind.name());
        } else if let Err(e) = self.cache.write(kind, &terms) {
            tracing::warn!("Failed to cache {} vocabulary: {}", kind.name(), e);
        }

        tracing::info!("Fetched {} {} terms", terms.len(), kind.name());
        Ok(terms.into_iter().collect())
    }

    fn fetch(&self, kind: VocabularyKind) -> Result<Vec<String>> {
        let url = self.sources.url(kind);
        let response = self.transport.get(url)?.require_ok(url)?;
        let text = response.text();

        match kind {
            VocabularyKind::MediaType => Ok(parse_media_type_registry(&text)),
            VocabularyKind::Licence => parse_licence_rdf(&text),
        }
    }

    /// Location of the cache artifact for `kind`
    #[must_use]
    pub fn cached_path(&self, kind: VocabularyKind) -> PathBuf {
        self.cache.path(kind)
    }

    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        self.cache.dir()
    }
}
