//! # Name Matcher
//!
//! Tiered, case-insensitive name comparison shared by every reconciliation in
//! the crate: ingredient availability, ingredient-to-pantry linkage,
//! receipt-to-pantry linkage, substitution lookup and expiring-item matching.
//!
//! A candidate name is compared against a wanted name in three tiers:
//!
//! 1. **Exact**: equal after lower-casing
//! 2. **Contains**: the candidate contains the wanted name ("milk" in "Organic Whole Milk")
//! 3. **Contained by**: the wanted name contains the candidate ("chicken" in "chicken breast")
//!
//! When several candidates qualify, a stronger tier always wins and the
//! first candidate wins within a tier. Empty names never match.
//!
//! Names are compared after [`fold_case`], so "STRASSE" matches "straße" and
//! composed and decomposed accents compare equal.
//!
//! ```rust
//! use pantry::name_matcher::{best_match, matches};
//! use pantry::pantry_model::InventoryRef;
//!
//! assert!(matches("chicken", "Chicken Breast"));
//!
//! let pantry = vec![
//!     InventoryRef::new("Peanut Butter", 1.0, "jar"),
//!     InventoryRef::new("Butter", 1.0, "lb"),
//! ];
//! assert_eq!(best_match("butter", &pantry).unwrap().name, "Butter");
//! ```

use unicode_normalization::UnicodeNormalization;

/// Anything that can be reconciled by name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Strength of a name match, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    Exact,
    Contains,
    ContainedBy,
}

/// Caseless form of `text`: NFKC, lower-cased, with the full folds of `ß` and final sigma
pub fn fold_case(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.nfkc().flat_map(char::to_lowercase) {
        match c {
            'ß' => folded.push_str("ss"),
            'ς' => folded.push('σ'),
            _ => folded.push(c),
        }
    }

    folded
}

/// Tier at which `candidate` matches `wanted`, if any
pub fn match_tier(candidate: &str, wanted: &str) -> Option<MatchTier> {
    let candidate = fold_case(candidate.trim());
    let wanted = fold_case(wanted.trim());

    if candidate.is_empty() || wanted.is_empty() {
        return None;
    }

    if candidate == wanted {
        Some(MatchTier::Exact)
    } else if candidate.contains(&wanted) {
        Some(MatchTier::Contains)
    } else if wanted.contains(&candidate) {
        Some(MatchTier::ContainedBy)
    } else {
        None
    }
}

/// Whether `a` and `b` match at any tier
pub fn matches(a: &str, b: &str) -> bool {
    match_tier(a, b).is_some()
}

/// Case-insensitive substring test that refuses empty needles
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = fold_case(needle.trim());
    !needle.is_empty() && fold_case(haystack).contains(&needle)
}

/// Strongest-tier candidate for `wanted`, first one within that tier
pub fn best_match<'a, T: Named>(wanted: &str, candidates: &'a [T]) -> Option<&'a T> {
    best_match_by(wanted, candidates, |_| true)
}

/// Like [`best_match`], restricted to candidates accepted by `filter`
pub fn best_match_by<'a, T, F>(wanted: &str, candidates: &'a [T], filter: F) -> Option<&'a T>
where
    T: Named,
    F: Fn(&T) -> bool,
{
    best_match_index_by(wanted, candidates, filter).map(|index| &candidates[index])
}

/// Position of the [`best_match_by`] candidate in `candidates`
pub fn best_match_index_by<T, F>(wanted: &str, candidates: &[T], filter: F) -> Option<usize>
where
    T: Named,
    F: Fn(&T) -> bool,
{
    let mut best: Option<(MatchTier, usize)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if !filter(candidate) {
            continue;
        }
        let Some(tier) = match_tier(candidate.name(), wanted) else {
            continue;
        };
        if tier == MatchTier::Exact {
            return Some(index);
        }
        match best {
            Some((best_tier, _)) if best_tier <= tier => {}
            _ => best = Some((tier, index)),
        }
    }

    best.map(|(_, index)| index)
}
