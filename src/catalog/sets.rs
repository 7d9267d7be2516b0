//! Set-name to set-code resolution.

use serde::Serialize;

use crate::core::types::SetCode;

/// Known set names, normalized (lowercase, hyphen-separated), mapped to set codes.
///
/// Premium packs draw from the same card pool as the regular pack.
const SET_NAME_MAPPING: &[(&str, &str)] = &[
    ("genetic-apex", "A1"),
    ("genetic-apex-premium", "A1"),
    ("mythical-island", "A1a"),
    ("mythical-island-premium", "A1a"),
    ("space-time-smackdown", "A2"),
    ("space-time-smackdown-premium", "A2"),
    ("triumphant-light", "A2a"),
    ("triumphant-light-premium", "A2a"),
    ("shining-revelry", "A2b"),
    ("shining-revelry-premium", "A2b"),
    ("celestial-guardians", "A3"),
    ("celestial-guardians-premium", "A3"),
    ("extradimensional-crisis", "A3a"),
    ("extradimensional-crisis-premium", "A3a"),
    ("eevee-grove", "A3b"),
    ("eevee-grove-premium", "A3b"),
    ("wisdom-of-sea-and-sky", "A4"),
    ("wisdom-of-sea-and-sky-premium", "A4"),
];

const PREMIUM_SUFFIX: &str = "-premium";

/// One row of the set-name table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownSet {
    pub name: &'static str,
    pub display_name: String,
    pub code: &'static str,
    pub premium: bool,
}

/// Normalize a set name: lowercase, spaces replaced by hyphens.
#[must_use]
pub fn normalize_set_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Resolve a human-readable set name to its set code.
///
/// Unrecognized names are returned normalized but otherwise unchanged, so the
/// result may not correspond to any reference directory.
///
/// # Examples
///
/// ```
/// use pack_solver::catalog::sets::resolve;
///
/// assert_eq!(resolve("Genetic Apex").as_str(), "A1");
/// assert_eq!(resolve("Eevee Grove Premium").as_str(), "A3b");
/// assert_eq!(resolve("Some New Set").as_str(), "some-new-set");
/// ```
#[must_use]
pub fn resolve(name: &str) -> SetCode {
    let normalized = normalize_set_name(name);
    match lookup(&normalized) {
        Some(code) => SetCode::new(code),
        None => SetCode::new(normalized),
    }
}

fn lookup(normalized: &str) -> Option<&'static str> {
    SET_NAME_MAPPING
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, code)| *code)
}

/// Render a normalized table key as title-cased words.
#[must_use]
pub fn display_name(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// All entries of the set-name table, in table order
#[must_use]
pub fn known_sets() -> Vec<KnownSet> {
    SET_NAME_MAPPING
        .iter()
        .map(|&(name, code)| KnownSet {
            name,
            display_name: display_name(name),
            code,
            premium: name.ends_with(PREMIUM_SUFFIX),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_display_names() {
        let cases = [
            ("Genetic Apex", "A1"),
            ("Mythical Island", "A1a"),
            ("Space-time Smackdown", "A2"),
            ("Triumphant Light", "A2a"),
            ("Shining Revelry", "A2b"),
            ("Celestial Guardians", "A3"),
            ("Extradimensional Crisis", "A3a"),
            ("Eevee Grove", "A3b"),
            ("Wisdom of Sea and Sky", "A4"),
        ];

        for (input, expected) in cases {
            assert_eq!(resolve(input).as_str(), expected, "input: {input}");
        }
    }

    #[test]
    fn test_resolve_casing_and_separators() {
        for input in ["genetic apex", "GENETIC APEX", "Genetic-Apex", "genetic-apex"] {
            assert_eq!(resolve(input).as_str(), "A1", "input: {input}");
        }
    }

    #[test]
    fn test_resolve_premium_variants() {
        let cases = [
            ("Genetic Apex Premium", "A1"),
            ("Mythical Island Premium", "A1a"),
            ("Space-time Smackdown Premium", "A2"),
            ("Triumphant Light Premium", "A2a"),
            ("Shining Revelry Premium", "A2b"),
            ("Celestial Guardians Premium", "A3"),
            ("Extradimensional Crisis Premium", "A3a"),
            ("Eevee Grove Premium", "A3b"),
            ("Wisdom of Sea and Sky Premium", "A4"),
            ("genetic-apex-premium", "A1"),
            ("GENETIC-APEX-PREMIUM", "A1"),
            ("Genetic-Apex-Premium", "A1"),
        ];

        for (input, expected) in cases {
            assert_eq!(resolve(input).as_str(), expected, "input: {input}");
        }
    }

    #[test]
    fn test_resolve_every_table_key() {
        for set in known_sets() {
            assert_eq!(resolve(set.name).as_str(), set.code);
            assert_eq!(resolve(&set.display_name).as_str(), set.code);
            assert_eq!(resolve(&set.display_name.to_uppercase()).as_str(), set.code);
        }
    }

    #[test]
    fn test_resolve_unknown_passthrough() {
        assert_eq!(resolve("Brand New Set").as_str(), "brand-new-set");
        assert_eq!(resolve("A1").as_str(), "a1");
        assert_eq!(resolve("").as_str(), "");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("genetic-apex-premium"), "Genetic Apex Premium");
        assert_eq!(display_name("wisdom-of-sea-and-sky"), "Wisdom Of Sea And Sky");
    }

    #[test]
    fn test_known_sets_premium_flag() {
        let sets = known_sets();
        assert_eq!(sets.len(), 18);
        assert_eq!(sets.iter().filter(|s| s.premium).count(), 9);
        assert!(sets.iter().all(|s| s.premium == s.name.ends_with("-premium")));
    }
}
