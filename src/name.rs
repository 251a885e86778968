// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Name Matcher (§4.2).
//!
//! Grounded on the teacher's `policy::Subject::matches`/`subject_alt_name_matches`
//! for the overall "try the subject, then each SAN entry, first match wins"
//! shape (`cryptography-x509-verification/src/policy/mod.rs`). The wildcard
//! *guard* heuristic itself (the `len(head) <= 2 && len(second) <= 3 && len < 3`
//! predicate) has no teacher equivalent — the teacher's own `DNSPattern::Wildcard`
//! (`cryptography-x509/src/common.rs`) matches any single label unconditionally
//! — and is implemented fresh, preserved byte-for-byte per spec's Design Notes
//! rather than "improved" with a real public-suffix list.

use crate::error::FailureReason;
use crate::types::Certificate;

/// Applies the Name Matcher to a leaf certificate (§4.2).
///
/// Returns an empty sequence on success; otherwise exactly one of
/// `NoCommonName`, `NameMismatch`, `InvalidName`, or `InvalidWildcard`.
pub fn validate_name<C: Certificate>(hostname: &str, cert: &C) -> Vec<FailureReason> {
    let cn = match cert.common_name() {
        Some(cn) => cn,
        None => return vec![FailureReason::NoCommonName],
    };

    let mut candidates = Vec::with_capacity(1 + cert.subject_alt_names().len());
    candidates.push(cn);
    candidates.extend(cert.subject_alt_names().iter().copied());

    for candidate in candidates {
        if candidate_matches(candidate, hostname) == Ok(true) {
            return Vec::new();
        }
    }

    vec![FailureReason::NameMismatch(hostname.to_string())]
}

/// Applies the per-candidate rules of §4.2 to a single CN/SAN value.
///
/// `Ok(true)`/`Ok(false)` report a definite match/non-match; `Err` reports
/// a malformed candidate (`InvalidName`/`InvalidWildcard`). Both `Ok(false)`
/// and `Err` are treated identically by the caller — per §4.2, "per-candidate
/// `InvalidName`/`InvalidWildcard` results are discarded once any other
/// candidate succeeds" — so only the `Ok(true)` case is ever surfaced.
fn candidate_matches(candidate: &str, hostname: &str) -> Result<bool, FailureReason> {
    let labels: Vec<&str> = candidate.split('.').collect();
    let host_labels: Vec<&str> = hostname.split('.').collect();

    if labels.iter().any(|label| label.is_empty()) {
        return Err(FailureReason::InvalidName(candidate.to_string()));
    }

    if labels[0] == "*" {
        return match_wildcard(&labels, &host_labels);
    }

    Ok(labels.len() == host_labels.len()
        && labels
            .iter()
            .zip(host_labels.iter())
            .all(|(a, b)| a.eq_ignore_ascii_case(b)))
}

/// The wildcard branch of §4.2.
///
/// `L' = reverse(drop_first(L))`: the candidate's non-wildcard labels,
/// reordered so that the TLD comes first — the same order a reversed host
/// label sequence would be in, which is what the final suffix check
/// compares against.
fn match_wildcard(labels: &[&str], host_labels: &[&str]) -> Result<bool, FailureReason> {
    let mut suffix: Vec<&str> = labels[1..].to_vec();
    suffix.reverse();

    if suffix.len() < 2 {
        return Err(FailureReason::InvalidWildcard);
    }

    if suffix[0].len() <= 2 && suffix[1].len() <= 3 && suffix.len() < 3 {
        return Err(FailureReason::InvalidWildcard);
    }

    // The wildcard covers exactly one label: the host must have precisely
    // as many labels as the candidate (one of which the wildcard stands
    // in for), with everything else matching `suffix` in order.
    if host_labels.len() != labels.len() {
        return Ok(false);
    }

    let mut host_reversed: Vec<&str> = host_labels.to_vec();
    host_reversed.reverse();

    Ok(host_reversed[..suffix.len()]
        .iter()
        .zip(suffix.iter())
        .all(|(a, b)| a.eq_ignore_ascii_case(b)))
}
