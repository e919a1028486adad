//! Pure price resolution over a built catalog.

use std::collections::HashMap;

use super::doppler::parse_doppler;
use super::entities::{DopplerPhase, PriceCatalog, PriceQuote};
use super::variations::name_variations;

/// Resolves a raw display name against the catalog. Never fails: an unmatched
/// item, an empty catalog, or an unrecognized Doppler spelling all come back
/// as a quote with both sides `None`.
///
/// Doppler items are priced exclusively through the per-phase maps of their
/// base entry. The base entry's flat price belongs to an unspecified phase, so
/// a recognized Doppler item never falls back to it.
pub fn resolve_in(catalog: &PriceCatalog, raw_name: &str) -> PriceQuote {
    if let Some(doppler) = parse_doppler(raw_name) {
        for variation in name_variations(&doppler.base_name) {
            if let Some(record) = catalog.get(&variation.to_lowercase()) {
                return PriceQuote {
                    csfloat: phase_price(record.csfloat_doppler.as_ref(), doppler.phase),
                    skinswap: phase_price(record.skinswap_doppler.as_ref(), doppler.phase),
                };
            }
        }
        return PriceQuote::default();
    }

    for variation in name_variations(raw_name) {
        if let Some(record) = catalog.get(&variation.to_lowercase()) {
            return PriceQuote {
                csfloat: record.csfloat,
                skinswap: record.skinswap,
            };
        }
    }

    PriceQuote::default()
}

fn phase_price(prices: Option<&HashMap<DopplerPhase, f64>>, phase: DopplerPhase) -> Option<f64> {
    prices.and_then(|map| map.get(&phase).copied())
}
