use std::collections::HashMap;
use std::fmt;

/// Doppler pattern tier assigned to a physical knife at mint time.
///
/// Exactly one applies to any single item and it is immutable once minted.
/// It is not derivable from the base item name; it has to be carried in the
/// display name (post inspect-link disambiguation) or treated as unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DopplerPhase {
    Phase1,
    Phase2,
    Phase3,
    Phase4,
    Ruby,
    Sapphire,
    Emerald,
    BlackPearl,
}

impl DopplerPhase {
    /// Canonical marketplace spelling, as used by the feed phase maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            DopplerPhase::Phase1 => "Phase 1",
            DopplerPhase::Phase2 => "Phase 2",
            DopplerPhase::Phase3 => "Phase 3",
            DopplerPhase::Phase4 => "Phase 4",
            DopplerPhase::Ruby => "Ruby",
            DopplerPhase::Sapphire => "Sapphire",
            DopplerPhase::Emerald => "Emerald",
            DopplerPhase::BlackPearl => "Black Pearl",
        }
    }

    /// Parses a feed key or captured name token. Case-insensitive and tolerant
    /// of irregular inner whitespace ("black  pearl" still parses).
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        match normalized.as_str() {
            "phase 1" => Some(DopplerPhase::Phase1),
            "phase 2" => Some(DopplerPhase::Phase2),
            "phase 3" => Some(DopplerPhase::Phase3),
            "phase 4" => Some(DopplerPhase::Phase4),
            "ruby" => Some(DopplerPhase::Ruby),
            "sapphire" => Some(DopplerPhase::Sapphire),
            "emerald" => Some(DopplerPhase::Emerald),
            "black pearl" => Some(DopplerPhase::BlackPearl),
            _ => None,
        }
    }

    pub fn from_digit(digit: &str) -> Option<Self> {
        match digit {
            "1" => Some(DopplerPhase::Phase1),
            "2" => Some(DopplerPhase::Phase2),
            "3" => Some(DopplerPhase::Phase3),
            "4" => Some(DopplerPhase::Phase4),
            _ => None,
        }
    }
}

impl fmt::Display for DopplerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merged per-item pricing across both marketplaces.
///
/// Every field is independently optional: an item listed on only one
/// marketplace keeps `None` on the other side. The doppler maps exist only for
/// Doppler-family base items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceRecord {
    pub csfloat: Option<f64>,
    pub skinswap: Option<f64>,
    pub csfloat_doppler: Option<HashMap<DopplerPhase, f64>>,
    pub skinswap_doppler: Option<HashMap<DopplerPhase, f64>>,
}

impl PriceRecord {
    pub fn is_empty(&self) -> bool {
        self.csfloat.is_none()
            && self.skinswap.is_none()
            && self.csfloat_doppler.is_none()
            && self.skinswap_doppler.is_none()
    }
}

/// Resolved price pair handed to callers. Either side may be absent; an item
/// missing from both feeds is a normal outcome, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceQuote {
    pub csfloat: Option<f64>,
    pub skinswap: Option<f64>,
}

impl PriceQuote {
    pub fn has_any(&self) -> bool {
        self.csfloat.is_some() || self.skinswap.is_some()
    }
}

/// Price lookup table keyed by lower-cased canonical item name.
///
/// Built once per fetch cycle and never mutated afterwards; a rebuild swaps in
/// a whole new catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceCatalog {
    entries: HashMap<String, PriceRecord>,
}

impl PriceCatalog {
    pub fn get(&self, key: &str) -> Option<&PriceRecord> {
        self.entries.get(key)
    }

    /// Fetch-or-create during the build phase. Keys must already be
    /// lower-cased by the caller.
    pub(crate) fn entry(&mut self, key: String) -> &mut PriceRecord {
        self.entries.entry(key).or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_keys_round_trip() {
        for phase in [
            DopplerPhase::Phase1,
            DopplerPhase::Phase2,
            DopplerPhase::Phase3,
            DopplerPhase::Phase4,
            DopplerPhase::Ruby,
            DopplerPhase::Sapphire,
            DopplerPhase::Emerald,
            DopplerPhase::BlackPearl,
        ] {
            assert_eq!(DopplerPhase::from_key(phase.as_str()), Some(phase));
        }
    }

    #[test]
    fn phase_key_parsing_is_lenient() {
        assert_eq!(
            DopplerPhase::from_key(" black  pearl "),
            Some(DopplerPhase::BlackPearl)
        );
        assert_eq!(DopplerPhase::from_key("PHASE 2"), Some(DopplerPhase::Phase2));
        assert_eq!(DopplerPhase::from_key("Phase 5"), None);
        assert_eq!(DopplerPhase::from_key("Pearl"), None);
    }

    #[test]
    fn empty_record_is_detected() {
        assert!(PriceRecord::default().is_empty());
        let record = PriceRecord {
            skinswap: Some(12.5),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }
}
