// src/domain/listing/services/normalizer.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::listing::services::error::{AllocationError, AllocationResult};
use crate::domain::listing::value_objects::SlugScope;

/// Turns display names into candidate slug bases.
///
/// Transliteration is delegated to the injected [`SlugGenerator`]; the
/// normalizer then folds the result onto the slug alphabet so the output is
/// canonical whatever the generator returns.
#[derive(Clone)]
pub struct SlugNormalizer {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugNormalizer {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Transliterate and fold `input`. May return an empty string.
    pub fn canonicalize(&self, input: &str) -> String {
        fold_to_alphabet(&self.generator.slugify(input))
    }

    /// Candidate base for `display_name`, falling back to the scope's default
    /// token when the name has no usable characters.
    pub fn normalize(&self, display_name: &str, scope: &SlugScope) -> AllocationResult<String> {
        let base = self.canonicalize(display_name);
        if !base.is_empty() {
            return Ok(base);
        }

        scope
            .default_token()
            .map(fold_to_alphabet)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AllocationError::EmptyBasis {
                scope: scope.name().to_string(),
                display_name: display_name.to_string(),
            })
    }
}

fn fold_to_alphabet(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}
