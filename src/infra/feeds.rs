//! Upstream feed payloads and catalog construction.
//!
//! Both feeds are plain JSON objects keyed by the marketplace's own item-name
//! spelling. CSFloat ships a flat price plus, for Doppler base items, a nested
//! per-phase price object; SkinSwap wraps its cheapest listing in a
//! `starting_at` object of the same shape.

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

use crate::domain::{DopplerPhase, PriceCatalog};

/// CSFloat price list payload: item name → prices.
pub type CsFloatFeed = HashMap<String, CsFloatEntry>;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CsFloatEntry {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub doppler: Option<HashMap<String, f64>>,
}

/// SkinSwap price index payload: item name → cheapest current listing.
pub type SkinSwapFeed = HashMap<String, SkinSwapEntry>;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SkinSwapEntry {
    #[serde(default)]
    pub starting_at: Option<SkinSwapStartingAt>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SkinSwapStartingAt {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub doppler: Option<HashMap<String, f64>>,
}

/// Merges both feed payloads into one catalog keyed by lower-cased name.
///
/// Items present in only one feed keep `None` on the other marketplace's
/// fields; that is expected, not an error. Feed entries carrying no usable
/// price data at all are skipped, so no catalog record is ever empty.
pub fn build_catalog(csfloat: CsFloatFeed, skinswap: SkinSwapFeed) -> PriceCatalog {
    let mut catalog = PriceCatalog::default();

    for (name, entry) in csfloat {
        let doppler = entry
            .doppler
            .map(|prices| parse_phase_map(&name, prices))
            .filter(|prices| !prices.is_empty());
        if entry.price.is_none() && doppler.is_none() {
            continue;
        }
        let record = catalog.entry(name.to_lowercase());
        record.csfloat = entry.price;
        record.csfloat_doppler = doppler;
    }

    for (name, entry) in skinswap {
        let Some(starting_at) = entry.starting_at else {
            continue;
        };
        let doppler = starting_at
            .doppler
            .map(|prices| parse_phase_map(&name, prices))
            .filter(|prices| !prices.is_empty());
        if starting_at.price.is_none() && doppler.is_none() {
            continue;
        }
        let record = catalog.entry(name.to_lowercase());
        record.skinswap = starting_at.price;
        record.skinswap_doppler = doppler;
    }

    catalog
}

/// Parses a feed's string-keyed phase map into typed keys. Keys outside the
/// canonical phase/gem set are dropped: a typed lookup could never reach them.
fn parse_phase_map(item: &str, prices: HashMap<String, f64>) -> HashMap<DopplerPhase, f64> {
    let mut parsed = HashMap::with_capacity(prices.len());
    for (key, price) in prices {
        match DopplerPhase::from_key(&key) {
            Some(phase) => {
                parsed.insert(phase, price);
            }
            None => debug!("dropping unknown doppler key {key:?} for {item:?}"),
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csfloat(json: &str) -> CsFloatFeed {
        serde_json::from_str(json).unwrap()
    }

    fn skinswap(json: &str) -> SkinSwapFeed {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn merge_keeps_single_feed_entries() {
        let catalog = build_catalog(
            csfloat(r#"{"AK-47 | Redline (Field-Tested)": {"price": 45.2}}"#),
            skinswap(r#"{"AWP | Asiimov (Field-Tested)": {"starting_at": {"price": 88.0}}}"#),
        );

        let redline = catalog.get("ak-47 | redline (field-tested)").unwrap();
        assert_eq!(redline.csfloat, Some(45.2));
        assert_eq!(redline.skinswap, None);

        let asiimov = catalog.get("awp | asiimov (field-tested)").unwrap();
        assert_eq!(asiimov.csfloat, None);
        assert_eq!(asiimov.skinswap, Some(88.0));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn merge_joins_entries_present_in_both_feeds() {
        let catalog = build_catalog(
            csfloat(r#"{"Glock-18 | Fade (Minimal Wear)": {"price": 300.0}}"#),
            skinswap(r#"{"Glock-18 | Fade (Minimal Wear)": {"starting_at": {"price": 295.5}}}"#),
        );

        let fade = catalog.get("glock-18 | fade (minimal wear)").unwrap();
        assert_eq!(fade.csfloat, Some(300.0));
        assert_eq!(fade.skinswap, Some(295.5));
    }

    #[test]
    fn doppler_maps_come_through_typed() {
        let catalog = build_catalog(
            csfloat(
                r#"{"★ M9 Bayonet | Doppler": {
                    "price": 610.0,
                    "doppler": {"Phase 2": 640.0, "Sapphire": 2400.0}
                }}"#,
            ),
            skinswap("{}"),
        );

        let record = catalog.get("★ m9 bayonet | doppler").unwrap();
        let phases = record.csfloat_doppler.as_ref().unwrap();
        assert_eq!(phases.get(&DopplerPhase::Phase2), Some(&640.0));
        assert_eq!(phases.get(&DopplerPhase::Sapphire), Some(&2400.0));
        assert_eq!(record.skinswap, None);
        assert_eq!(record.skinswap_doppler, None);
    }

    #[test]
    fn unknown_phase_keys_are_dropped() {
        let catalog = build_catalog(
            csfloat(
                r#"{"★ Karambit | Doppler": {
                    "doppler": {"Phase 3": 980.0, "Phase 9": 1.0, "Pearl": 2.0}
                }}"#,
            ),
            skinswap("{}"),
        );

        let phases = catalog
            .get("★ karambit | doppler")
            .and_then(|record| record.csfloat_doppler.as_ref())
            .unwrap();
        assert_eq!(phases.len(), 1);
        assert_eq!(phases.get(&DopplerPhase::Phase3), Some(&980.0));
    }

    #[test]
    fn entries_without_price_data_are_skipped() {
        let catalog = build_catalog(
            csfloat(r#"{"Broken Entry": {}}"#),
            skinswap(r#"{"Other Entry": {}, "Wrapped But Empty": {"starting_at": {}}}"#),
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn merged_doppler_entry_resolves_phase_requests() {
        let catalog = build_catalog(
            csfloat(
                r#"{"★ M9 Bayonet | Doppler": {"price": 610.0, "doppler": {"Phase 2": 640.0}}}"#,
            ),
            skinswap("{}"),
        );
        // Starless request reaches the starred key through name variations;
        // only the phase-keyed side is priced.
        let quote = crate::domain::resolve_in(&catalog, "M9 Bayonet | Doppler (Phase 2)");
        assert_eq!(quote.csfloat, Some(640.0));
        assert_eq!(quote.skinswap, None);
    }

    #[test]
    fn doppler_only_entries_survive_without_flat_price() {
        let catalog = build_catalog(
            csfloat(r#"{"★ Talon Knife | Doppler": {"doppler": {"Ruby": 1900.0}}}"#),
            skinswap("{}"),
        );
        let record = catalog.get("★ talon knife | doppler").unwrap();
        assert_eq!(record.csfloat, None);
        assert!(record.csfloat_doppler.is_some());
    }
}
