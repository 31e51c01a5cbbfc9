// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::listings::ListingCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::listings::ListingQueryService,
    },
    domain::listing::{
        ListingReadRepository, ListingWriteRepository,
        services::{SlugAllocator, SlugNormalizer, SlugResolver},
    },
};

pub struct ApplicationServices {
    pub listing_commands: Arc<ListingCommandService>,
    pub listing_queries: Arc<ListingQueryService>,
    allocator: Arc<SlugAllocator>,
}

impl ApplicationServices {
    pub fn new(
        listing_read_repo: Arc<dyn ListingReadRepository>,
        listing_write_repo: Arc<dyn ListingWriteRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        max_slug_attempts: u32,
    ) -> Self {
        let allocator = Arc::new(SlugAllocator::new(
            SlugNormalizer::new(slugger),
            SlugResolver::new(Arc::clone(&listing_read_repo), max_slug_attempts),
            listing_write_repo,
        ));

        let listing_commands = Arc::new(ListingCommandService::new(
            Arc::clone(&listing_read_repo),
            Arc::clone(&allocator),
            clock,
        ));
        let listing_queries = Arc::new(ListingQueryService::new(listing_read_repo));

        Self {
            listing_commands,
            listing_queries,
            allocator,
        }
    }

    /// The allocator shared by every collection's create and update path.
    pub fn slug_allocator(&self) -> Arc<SlugAllocator> {
        Arc::clone(&self.allocator)
    }
}
