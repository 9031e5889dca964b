//! Individual quality predicates.
//!
//! Each function answers one rubric question about a dataset. They are pure
//! and exposed so that single checks can be reused outside the scorer.

use super::formats::{all_in, ACCESS_RIGHTS_VOCABULARY, MACHINE_READABLE_FORMATS, NON_PROPRIETARY_FORMATS};
use crate::vocabulary::Vocabulary;
use std::collections::BTreeSet;

/// At least one declared format is a non-empty string.
#[must_use]
pub fn has_formats(formats: &[String]) -> bool {
    formats.iter().any(|f| !f.is_empty())
}

/// At least one declared media type is a non-empty string.
#[must_use]
pub fn has_media_types(media_types: &[String]) -> bool {
    media_types.iter().any(|m| !m.is_empty())
}

/// Every media type is registered; false when none are declared.
#[must_use]
pub fn is_vocabulary_media_type(media_types: &[String], vocabulary: &Vocabulary) -> bool {
    if media_types.is_empty() {
        return false;
    }
    match media_types.iter().find(|m| !vocabulary.contains(m)) {
        Some(unknown) => {
            tracing::debug!("Media type {:?} is not in the vocabulary", unknown);
            false
        }
        None => true,
    }
}

#[must_use]
pub fn is_non_proprietary_format(formats: &[String]) -> bool {
    all_in(formats, NON_PROPRIETARY_FORMATS)
}

#[must_use]
pub fn is_machine_readable_format(formats: &[String]) -> bool {
    all_in(formats, MACHINE_READABLE_FORMATS)
}

#[must_use]
pub fn has_license(licenses: &BTreeSet<String>) -> bool {
    !licenses.is_empty()
}

/// At least one license is a known licence identifier or label.
#[must_use]
pub fn is_vocabulary_license(licenses: &BTreeSet<String>, vocabulary: &Vocabulary) -> bool {
    licenses.iter().any(|l| vocabulary.contains(l))
}

#[must_use]
pub const fn has_access_restrictions(access_level: Option<&str>) -> bool {
    access_level.is_some()
}

/// The access level is one of the controlled terms (case-sensitive).
#[must_use]
pub fn is_access_restrictions_vocabulary(access_level: Option<&str>) -> bool {
    access_level.is_some_and(|a| ACCESS_RIGHTS_VOCABULARY.contains(&a))
}
