//! Doppler-aware price matching for CS:GO/CS2 skin marketplaces.
//!
//! Takes a free-text item display name (as scraped from a trading site or
//! entered by a user) and resolves it to a pair of marketplace prices from
//! two upstream feeds. Handles the bounded spelling drift of marketplace
//! names (hyphenated wear suffixes, the ★ knife glyph, StatTrak™ branding)
//! and the Doppler-family knives whose sale price depends on the phase/gem
//! carried in the display name rather than the base item name.
//!
//! The pure core lives in [`domain`]; fetching, merging, and the hourly
//! catalog cache live in [`infra`]. Typical use goes through
//! [`PriceService::resolve`]:
//!
//! ```no_run
//! # async fn demo() -> Result<(), skin_price_resolver::FeedError> {
//! use skin_price_resolver::PriceService;
//!
//! let service = PriceService::new()?;
//! let quote = service.resolve("★ Karambit | Doppler (Phase 3)").await;
//! println!("csfloat: {:?}, skinswap: {:?}", quote.csfloat, quote.skinswap);
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod infra;

pub use domain::{
    name_variations, parse_doppler, resolve_in, DopplerMatch, DopplerPhase, PriceCatalog,
    PriceQuote, PriceRecord,
};
pub use infra::{build_catalog, CsFloatFeed, FeedError, PriceService, SkinSwapFeed, CATALOG_TTL};
