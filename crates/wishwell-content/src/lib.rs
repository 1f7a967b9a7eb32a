//! Content primitives for wishwell.
//!
//! Holds the campaign content document model, the canonical default
//! document, and the schema-reconciling merge that patches arbitrary
//! stored documents back into the canonical shape.

pub mod kind;
pub mod model;
pub mod reconcile;

pub use kind::Kind;
pub use model::{
    BasketItem, CampaignContent, ContentError, DonateContent, FooterContent, GalleryContent,
    GalleryImage, HeroContent, MissionContent, TransparencyContent, UpdatePost, UpdatesContent,
    default_document,
};
pub use reconcile::reconcile;

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
