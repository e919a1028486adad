//! Marketplace name-spelling variations.
//!
//! The marketplace's own item names drift in a small bounded set of ways:
//! wear suffixes sometimes hyphenated ("(Factory-New)"), the ★ knife glyph
//! present or missing, and the StatTrak™ branding spelled with or without the
//! trademark glyph. Generating that small cross-product and probing the
//! catalog for each spelling is cheaper and easier to maintain than fuzzy
//! matching. Variations are generative, not verificative: producing a spelling
//! that never matches anything costs only a failed map probe.

use std::sync::LazyLock;

use regex::Regex;

/// Trailing parenthesized wear suffix, e.g. "(Factory-New)".
static QUALITY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^()]*)\)\s*$").unwrap());

/// Any StatTrak spelling, with or without the ™ glyph, swallowing trailing
/// whitespace so replacement controls its own spacing.
static STATTRAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)stattrak(?:™)?\s*").unwrap());

const STATTRAK_CANONICAL: &str = "StatTrak™ ";
const STAR_PREFIX: &str = "★ ";
const KNIFE_MARKERS: [&str; 3] = ["knife", "bayonet", "karambit"];

/// Produces the plausible catalog spellings for a raw item name, in probe
/// order. Deterministic and pure; the first element is always the trimmed
/// input itself. Lower-casing is left to the caller. The output is deduped
/// with order preserved — probe order is the tie-break on multiple hits.
pub fn name_variations(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let mut variations = Vec::with_capacity(4);
    push_unique(&mut variations, trimmed.to_string());

    let quality = normalize_quality(trimmed);
    push_unique(&mut variations, quality.clone());

    let knife = is_knife_type(trimmed);
    let starred = trimmed.contains('★');
    if knife && !starred {
        push_unique(&mut variations, format!("{STAR_PREFIX}{quality}"));
    }
    if starred {
        push_unique(&mut variations, strip_star(&quality));
    }

    if STATTRAK.is_match(trimmed) {
        let branded = STATTRAK.replace_all(&quality, STATTRAK_CANONICAL).into_owned();
        push_unique(&mut variations, branded.clone());
        if knife && !branded.contains('★') {
            push_unique(&mut variations, format!("{STAR_PREFIX}{branded}"));
        }
    }

    variations
}

fn push_unique(variations: &mut Vec<String>, candidate: String) {
    if !variations.contains(&candidate) {
        variations.push(candidate);
    }
}

/// Rewrites hyphens to spaces inside the trailing wear suffix only:
/// "(Factory-New)" becomes "(Factory New)". The rest of the name is left
/// alone, so hyphenated weapon names like "Glock-18" survive.
fn normalize_quality(name: &str) -> String {
    match QUALITY_SUFFIX.captures(name) {
        Some(caps) => {
            let span = caps.get(0).unwrap();
            let wear = caps[1].replace('-', " ");
            format!("{}({wear})", &name[..span.start()])
        }
        None => name.to_string(),
    }
}

fn is_knife_type(name: &str) -> bool {
    let lower = name.to_lowercase();
    KNIFE_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn strip_star(name: &str) -> String {
    let stripped = name.replace(STAR_PREFIX, "");
    if stripped.contains('★') {
        stripped.replace('★', "")
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_input_comes_first() {
        let variations = name_variations("  AK-47 | Redline (Field-Tested)  ");
        assert_eq!(variations[0], "AK-47 | Redline (Field-Tested)");
    }

    #[test]
    fn wear_suffix_hyphens_become_spaces() {
        let variations = name_variations("AK-47 | Redline (Field-Tested)");
        assert!(variations.contains(&"AK-47 | Redline (Field Tested)".to_string()));
        // The weapon name's own hyphen is untouched.
        assert!(!variations.iter().any(|v| v.contains("AK 47")));
    }

    #[test]
    fn knife_names_gain_a_star() {
        let variations = name_variations("Flip Knife | Tiger Tooth (Factory-New)");
        assert!(variations.contains(&"★ Flip Knife | Tiger Tooth (Factory New)".to_string()));
    }

    #[test]
    fn starred_names_also_probe_starless() {
        let variations = name_variations("★ Karambit | Fade (Factory New)");
        assert!(variations.contains(&"Karambit | Fade (Factory New)".to_string()));
        // Already starred; no double-star variant.
        assert!(!variations.iter().any(|v| v.starts_with("★ ★")));
    }

    #[test]
    fn stattrak_spellings_normalize_to_trademark_form() {
        let variations = name_variations("StatTrak Glock-18 | Fade (Minimal Wear)");
        assert!(variations.contains(&"StatTrak™ Glock-18 | Fade (Minimal Wear)".to_string()));

        let variations = name_variations("stattrak™ AWP | Asiimov (Battle-Scarred)");
        assert!(variations.contains(&"StatTrak™ AWP | Asiimov (Battle Scarred)".to_string()));
    }

    #[test]
    fn stattrak_knives_get_the_starred_branded_form() {
        let variations = name_variations("StatTrak M9 Bayonet | Slaughter (Minimal Wear)");
        assert!(variations.contains(&"★ StatTrak™ M9 Bayonet | Slaughter (Minimal Wear)".to_string()));
    }

    #[test]
    fn canonical_names_produce_no_duplicates() {
        let variations = name_variations("★ Karambit | Doppler");
        assert_eq!(
            variations,
            vec!["★ Karambit | Doppler".to_string(), "Karambit | Doppler".to_string()]
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let name = "StatTrak Bowie Knife | Ultraviolet (Well-Worn)";
        assert_eq!(name_variations(name), name_variations(name));
    }
}
