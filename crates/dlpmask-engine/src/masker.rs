//! Character masking of matched spans

use crate::error::Result;
use crate::matcher::Match;
use crate::policy::{MaskingPolicy, ResolvedPolicy};

/// Mask every span in `matches` according to `policy`
///
/// `matches` must be sorted by start offset and pairwise non-overlapping;
/// [`crate::DeidentifyEngine`] guarantees this. Offsets are code points.
/// Text outside the spans is copied through unchanged.
///
/// # Errors
/// - `Error::InvalidPolicy` if the policy is malformed; nothing is produced
///
/// # Panics
/// Debug builds panic when `matches` is unsorted or overlapping. Release builds
/// do not check; an out-of-order span is then masked from the current position.
pub fn apply(text: &str, matches: &[Match], policy: &MaskingPolicy) -> Result<String> {
    let policy = policy.validate()?;
    Ok(apply_resolved(text, matches, &policy))
}

pub(crate) fn apply_resolved(text: &str, matches: &[Match], policy: &ResolvedPolicy<'_>) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut chars = text.chars();
    let mut position = 0;

    for m in matches {
        debug_assert!(m.start >= position, "matches must be sorted and disjoint");
        masked.extend(chars.by_ref().take(m.start.saturating_sub(position)));

        let span: Vec<char> = chars.by_ref().take(m.len()).collect();
        mask_span(&span, policy, &mut masked);

        position = m.end;
    }

    masked.extend(chars);
    masked
}

fn mask_span(span: &[char], policy: &ResolvedPolicy<'_>, out: &mut String) {
    let maskable = span.iter().filter(|&&c| !policy.is_ignored(c)).count();
    let mask_len = policy.mask_len(maskable);

    // Ordinal among maskable characters, counted from the masking side
    let mut seen = 0;
    let mut decide = |c: char| {
        if policy.is_ignored(c) {
            return c;
        }
        seen += 1;
        if seen <= mask_len { policy.mask_char } else { c }
    };

    if policy.reverse_order {
        let mut rewritten: Vec<char> = span.iter().rev().map(|&c| decide(c)).collect();
        rewritten.reverse();
        out.extend(rewritten);
    } else {
        out.extend(span.iter().map(|&c| decide(c)));
    }
}

#[cfg(test)]
mod tests;
