//! Helpers for locating showcase images inside the asset directory.
//!
//! Responsibilities are split into focused submodules: filename predicates, candidate
//! expansion for stems and references, and the resolver that walks the filesystem. The
//! predicates are pure so they can be tested without touching disk.

mod candidates;
mod filters;
mod kind;
mod lookup;
mod relative;

pub use candidates::{IMAGE_EXTENSIONS, generate_image_candidates, generate_reference_candidates};
pub use filters::{has_image_extension, matches_dataset, should_ignore_asset_reference};
pub use kind::{AssetKind, ParseAssetKindError};
pub use lookup::{Asset, AssetResolver};
pub use relative::make_display_path;
