//! Static asset publishing and include registration

pub mod foundation;
pub mod publisher;

pub use foundation::FoundationAssets;
pub use publisher::{AssetError, AssetPublisher};
