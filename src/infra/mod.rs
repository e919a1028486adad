//! Feed clients, catalog construction, and the shared cache service.

pub mod feeds;
pub mod service;

pub use feeds::{build_catalog, CsFloatFeed, SkinSwapFeed};
pub use service::{FeedError, PriceService, CATALOG_TTL};
