// src/application/commands/listings/create.rs
use super::{ListingCommandService, scope::scope_for, service::ensure_object};
use crate::{
    application::{dto::ListingDto, error::ApplicationResult},
    domain::listing::ListingDraft,
};
use serde_json::Value;

pub struct CreateListingCommand {
    pub collection: String,
    pub name: String,
    pub slug: Option<String>,
    pub attributes: Option<Value>,
}

impl CreateListingCommand {
    pub fn builder() -> CreateListingCommandBuilder {
        CreateListingCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateListingCommandBuilder {
    collection: Option<String>,
    name: Option<String>,
    slug: Option<String>,
    attributes: Option<Value>,
}

impl CreateListingCommandBuilder {
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn attributes(mut self, attributes: Value) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn build(self) -> Result<CreateListingCommand, &'static str> {
        Ok(CreateListingCommand {
            collection: self.collection.ok_or("collection is required")?,
            name: self.name.unwrap_or_default(),
            slug: self.slug,
            attributes: self.attributes,
        })
    }
}

impl ListingCommandService {
    pub async fn create_listing(
        &self,
        command: CreateListingCommand,
    ) -> ApplicationResult<ListingDto> {
        let scope = scope_for(&command.collection)?;
        let slug = self.user_slug(command.slug)?;
        let mut draft = ListingDraft::new(scope, command.name, self.clock.now());
        if let Some(slug) = slug {
            draft = draft.with_slug(slug);
        }
        if let Some(attributes) = command.attributes {
            draft = draft.with_attributes(ensure_object(attributes)?);
        }

        let created = self.allocator.save(draft).await?;
        tracing::info!(
            collection = %created.scope,
            id = %created.id,
            slug = %created.slug,
            "listing created"
        );
        Ok(created.into())
    }
}
