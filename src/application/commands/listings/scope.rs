// src/application/commands/listings/scope.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::listing::SlugScope,
};

pub(crate) fn scope_for(collection: &str) -> ApplicationResult<SlugScope> {
    SlugScope::from_collection(collection)
        .ok_or_else(|| ApplicationError::not_found(format!("unknown collection {collection}")))
}
