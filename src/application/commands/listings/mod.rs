// src/application/commands/listings/mod.rs
mod create;
mod scope;
mod service;
mod update;

pub use create::{CreateListingCommand, CreateListingCommandBuilder};
pub(crate) use scope::scope_for;
pub use service::ListingCommandService;
pub use update::UpdateListingCommand;
