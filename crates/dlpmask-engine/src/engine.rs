//! Deidentification engine: match, resolve overlaps, mask

use crate::error::{Error, Result};
use crate::info_type::InfoTypePattern;
use crate::masker::apply_resolved;
use crate::matcher::{Match, find};
use crate::policy::MaskingPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Outcome of a single deidentify call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeidentifyResult {
    /// Input text as supplied
    pub original_text: String,

    /// Text with every applied match masked
    pub masked_text: String,

    /// Matches that were masked, sorted by start offset
    pub applied_matches: Vec<Match>,
}

impl DeidentifyResult {
    fn identity(text: &str) -> Self {
        Self {
            original_text: text.to_string(),
            masked_text: text.to_string(),
            applied_matches: Vec::new(),
        }
    }

    /// Number of applied matches per info type
    pub fn counts_by_info_type(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for m in &self.applied_matches {
            *counts.entry(m.info_type.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Engine holding an immutable, ordered set of info type patterns
///
/// Registration order matters: when two patterns match at the same start
/// offset, the one registered first wins.
#[derive(Debug, Clone, Default)]
pub struct DeidentifyEngine {
    patterns: Vec<InfoTypePattern>,
}

impl DeidentifyEngine {
    pub fn new(patterns: Vec<InfoTypePattern>) -> Self {
        Self { patterns }
    }

    /// Build an engine from built-in info type names
    ///
    /// # Errors
    /// - `Error::UnknownInfoType` for the first name that is not a built-in
    pub fn from_info_types<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = names
            .into_iter()
            .map(|name| InfoTypePattern::builtin(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(patterns))
    }

    pub fn patterns(&self) -> &[InfoTypePattern] {
        &self.patterns
    }

    /// Mask every sensitive span of `text`
    ///
    /// With no registered patterns the call succeeds and returns the text unchanged.
    ///
    /// # Errors
    /// - `Error::InvalidPolicy` if `policy` is malformed; raised before any scanning
    pub fn deidentify(&self, text: &str, policy: &MaskingPolicy) -> Result<DeidentifyResult> {
        deidentify(text, &self.patterns, policy)
    }
}

/// Mask every span of `text` recognized by any of `patterns`
///
/// See [`DeidentifyEngine::deidentify`].
pub fn deidentify(
    text: &str,
    patterns: &[InfoTypePattern],
    policy: &MaskingPolicy,
) -> Result<DeidentifyResult> {
    let resolved = policy.validate()?;

    if patterns.is_empty() {
        debug!("No info types registered, returning text unchanged");
        return Ok(DeidentifyResult::identity(text));
    }

    // Concatenating in registration order lets the stable sort keep that
    // order for matches sharing a start offset
    let mut candidates: Vec<Match> = patterns
        .iter()
        .flat_map(|pattern| {
            let found = find(text, pattern);
            trace!(info_type = pattern.name(), matches = found.len(), "Scanned info type");
            found
        })
        .collect();
    candidates.sort_by_key(|m| m.start);

    let candidate_count = candidates.len();
    let accepted = resolve_overlaps(candidates);
    debug!(
        candidates = candidate_count,
        accepted = accepted.len(),
        "Resolved overlapping matches"
    );

    let masked_text = apply_resolved(text, &accepted, &resolved);

    Ok(DeidentifyResult {
        original_text: text.to_string(),
        masked_text,
        applied_matches: accepted,
    })
}

/// Greedy leftmost-first overlap resolution
///
/// `candidates` must be sorted by start offset. A candidate is dropped when it
/// starts before the end of the last accepted match.
pub fn resolve_overlaps(candidates: Vec<Match>) -> Vec<Match> {
    let mut accepted: Vec<Match> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        match accepted.last() {
            Some(last) if candidate.start < last.end => {
                trace!(
                    info_type = %candidate.info_type,
                    start = candidate.start,
                    end = candidate.end,
                    "Dropping overlapping match"
                );
            }
            _ => accepted.push(candidate),
        }
    }

    accepted
}

impl From<Vec<InfoTypePattern>> for DeidentifyEngine {
    fn from(patterns: Vec<InfoTypePattern>) -> Self {
        Self::new(patterns)
    }
}

impl TryFrom<&[&str]> for DeidentifyEngine {
    type Error = Error;

    fn try_from(names: &[&str]) -> Result<Self> {
        Self::from_info_types(names)
    }
}
