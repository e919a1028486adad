//! Doppler display-name parsing.
//!
//! Doppler-family knives sell by phase/gem, not by base name, so a price
//! lookup has to split "★ Karambit | Doppler (Phase 3)" into the catalog base
//! name and the phase key. Recognized spellings are a small fixed set; anything
//! else is deliberately treated as not-Doppler so we never guess a phase.

use std::sync::LazyLock;

use regex::Regex;

use super::entities::DopplerPhase;

/// Outcome of recognizing a Doppler display name: the catalog base name (the
/// phase token collapsed back into a plain `"| Doppler"` marker) plus the
/// phase it carried.
#[derive(Clone, Debug, PartialEq)]
pub struct DopplerMatch {
    pub base_name: String,
    pub phase: DopplerPhase,
}

/// One recognized spelling: a pattern whose first capture is the phase/gem
/// token, and the parser that turns that token into a [`DopplerPhase`].
struct DopplerRule {
    pattern: Regex,
    phase_of: fn(&str) -> Option<DopplerPhase>,
}

/// Ordered rule table; the first matching rule wins. Gem spellings are listed
/// before numbered phases. The patterns are disjoint by construction, so the
/// ordering only matters for probe cost.
static DOPPLER_RULES: LazyLock<Vec<DopplerRule>> = LazyLock::new(|| {
    vec![
        // Gem names: "| Doppler Sapphire", "| Doppler - Ruby",
        // "| Doppler (Black Pearl)".
        DopplerRule {
            pattern: Regex::new(
                r"(?i)\|\s*Doppler\s*[-–(]?\s*(Sapphire|Ruby|Emerald|Black\s+Pearl)(?:\s*\))?",
            )
            .unwrap(),
            phase_of: DopplerPhase::from_key,
        },
        // Numbered phases: "| Doppler Phase 3", "| Doppler (Phase 3)",
        // "| Doppler - Phase 3".
        DopplerRule {
            pattern: Regex::new(r"(?i)\|\s*Doppler\s*[-–(]?\s*Phase\s*([1-4])(?:\s*\))?").unwrap(),
            phase_of: DopplerPhase::from_digit,
        },
    ]
});

/// Recognizes a Doppler display name and extracts its base name and phase.
///
/// Returns `None` both for non-Doppler names and for Doppler spellings outside
/// the recognized set: a wrong phase-price lookup is worse than no price, so an
/// unrecognized format is never guessed at. Matching runs against the
/// original-case name; only the containment probe lower-cases.
pub fn parse_doppler(name: &str) -> Option<DopplerMatch> {
    // Cheap reject; the overwhelming majority of lookups are not Doppler items.
    if !name.to_lowercase().contains("doppler") {
        return None;
    }

    for rule in DOPPLER_RULES.iter() {
        let Some(caps) = rule.pattern.captures(name) else {
            continue;
        };
        let token = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let Some(phase) = (rule.phase_of)(token) else {
            continue;
        };
        let base_name = rule.pattern.replace(name, "| Doppler").trim().to_string();
        return Some(DopplerMatch { base_name, phase });
    }

    None
}
