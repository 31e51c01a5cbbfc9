// src/domain/listing/services/mod.rs
//! Scoped unique slug allocation for listing collections.
mod allocator;
mod error;
mod normalizer;
mod resolver;

pub use allocator::SlugAllocator;
pub use error::{AllocationError, AllocationResult};
pub use normalizer::SlugNormalizer;
pub use resolver::{CandidateSearch, DEFAULT_MAX_ATTEMPTS, SlugResolver};
