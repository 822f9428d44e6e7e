mod multimap;


pub use multimap::Multimap;

use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::roster::{Group, Person};

/// Target number of talking points per group
pub const TARGET_TOPICS: usize = 5;

/// A group plus the talking points derived for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedGroup {
    /// The people matched into this group
    pub matches: Vec<Person>,
    /// Deduplicated talking points, sorted for stable output
    pub common_attributes: Vec<String>,
}

/// Trim and lowercase a token for comparison. Idempotent.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Derive talking points for one group.
///
/// Three sources feed the result: interests shared by every member, filler
/// interests drawn at random until [`TARGET_TOPICS`] is reached or the pool
/// runs dry, and scalar field values repeated across two or more members.
/// The filler draw is the only randomized step; everything else is
/// deterministic.
pub fn annotate<R: Rng>(group: &Group, rng: &mut R) -> Result<AnnotatedGroup, MatchError> {
    if group.is_empty() {
        return Err(MatchError::EmptyGroup);
    }

    let member_tokens = interest_tokens(group)?;

    let mut common = shared_interests(&member_tokens);

    // Pooled multiset of every member's normalized tokens, duplicates
    // preserved, so interests mentioned by more members are drawn more often.
    let mut pool: Vec<String> = member_tokens.iter().flatten().cloned().collect();

    while common.len() < TARGET_TOPICS {
        let pick = match pool.choose(rng) {
            Some(token) => token.clone(),
            None => break,
        };
        pool.retain(|token| *token != pick);
        common.insert(pick);
    }

    for value in repeated_scalars(group) {
        common.insert(value);
    }

    Ok(AnnotatedGroup {
        matches: group.clone(),
        common_attributes: common.into_iter().collect(),
    })
}

/// Each member's normalized interest-token set, in group order.
///
/// Empty tokens (blank entries, stray commas) are dropped here so they can
/// never reach the final attribute set.
fn interest_tokens(group: &Group) -> Result<Vec<BTreeSet<String>>, MatchError> {
    group
        .iter()
        .map(|person| {
            let raw = person
                .interests
                .as_deref()
                .ok_or_else(|| MatchError::MissingField {
                    person: person.name.clone(),
                    field: "interests".to_string(),
                })?;

            Ok(raw
                .split(',')
                .map(normalize)
                .filter(|token| !token.is_empty())
                .collect())
        })
        .collect()
}

/// Tokens present in every member's interest set
fn shared_interests(member_tokens: &[BTreeSet<String>]) -> BTreeSet<String> {
    match member_tokens.split_first() {
        Some((first, rest)) => first
            .iter()
            .filter(|token| rest.iter().all(|set| set.contains(*token)))
            .cloned()
            .collect(),
        None => BTreeSet::new(),
    }
}

/// Scalar field values shared by two or more members
fn repeated_scalars(group: &Group) -> Vec<String> {
    let mut by_field: Multimap<String, String> = Multimap::new();
    for person in group {
        for (field, value) in person.scalar_fields() {
            let value = value.trim();
            if !value.is_empty() {
                by_field.insert(field.to_string(), value.to_string());
            }
        }
    }

    let mut repeated = Vec::new();
    for (_field, values) in by_field.iter() {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in values {
            *counts.entry(value.as_str()).or_insert(0) += 1;
        }
        for (value, count) in counts {
            if count >= 2 {
                repeated.push(value.to_string());
            }
        }
    }

    repeated
}
