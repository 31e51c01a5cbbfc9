// src/application/ports/util.rs

/// Transliterates free text into a URL-safe slug. Must be deterministic and
/// may return an empty string when the input has no usable characters.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
