use super::{ListingCommandService, scope::scope_for, service::ensure_object};
use crate::{
    application::{
        dto::ListingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::listing::{ListingDraft, ListingId},
};
use serde_json::Value;

/// Partial update. An omitted `slug` keeps the stored one; a blank `slug`
/// clears it so a fresh one is allocated from the current name.
pub struct UpdateListingCommand {
    pub collection: String,
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub attributes: Option<Value>,
}

impl ListingCommandService {
    pub async fn update_listing(
        &self,
        command: UpdateListingCommand,
    ) -> ApplicationResult<ListingDto> {
        let scope = scope_for(&command.collection)?;
        let id = ListingId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(&scope, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("listing not found"))?;

        let UpdateListingCommand {
            name,
            slug,
            attributes,
            ..
        } = command;

        let slug = match slug {
            None => Some(existing.slug.into_inner()),
            Some(raw) => self.user_slug(Some(raw))?,
        };
        let attributes = match attributes {
            Some(attributes) => ensure_object(attributes)?,
            None => existing.attributes,
        };

        let mut draft = ListingDraft::new(
            scope,
            name.unwrap_or(existing.display_name),
            self.clock.now(),
        )
        .with_id(id)
        .with_attributes(attributes);
        if let Some(slug) = slug {
            draft = draft.with_slug(slug);
        }

        let updated = self.allocator.save(draft).await?;
        tracing::info!(
            collection = %updated.scope,
            id = %updated.id,
            slug = %updated.slug,
            "listing updated"
        );
        Ok(updated.into())
    }
}
