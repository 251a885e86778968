// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Chain Walker (§4.6) and Exhaustion Combinator (§4.7).
//!
//! Grounded on the teacher's `Policy::valid_path`/`valid_issuer`
//! (`cryptography-x509-verification/src/policy/mod.rs`): an issuer-lookup
//! loop that, at each step, checks validity, looks for a trust-store match,
//! falls back to the self-signed case, and otherwise walks the remaining
//! presented certificates, applying `permits_ca` to each candidate before
//! recursing. The teacher's version is written as real recursion over a
//! `&[Certificate]` slice with a single `ValidationError` short-circuiting
//! via `?`; this crate flattens that into an explicit loop over
//! `(level, current, remaining)` per spec.md §9's Design Notes (stack safety
//! for pathological long chains) and replaces the single-error `?` with the
//! accumulating combinator below, since fail-fast is just one of two modes
//! this crate supports.

use crate::error::FailureReason;
use crate::ops::{CertificateStore, Signature};
use crate::policy::{self, ca, leaf};
use crate::types::{Certificate, CertificateChain};
use crate::{Checks, Hooks, Parameters};

/// `exhaustive(mode, step₁, step₂)` (§4.7).
///
/// `step2` is a thunk rather than an already-evaluated value so that it is
/// never invoked when the result is known to be discarded (fail-fast mode,
/// `r1` non-empty) — the accumulation has no effect to sequence away, but
/// there is no reason to evaluate a check whose result the caller has
/// already decided to ignore.
pub(crate) fn combine(
    exhaustive: bool,
    r1: Vec<FailureReason>,
    step2: impl FnOnce() -> Vec<FailureReason>,
) -> Vec<FailureReason> {
    if r1.is_empty() {
        return step2();
    }
    if exhaustive {
        let mut r1 = r1;
        r1.extend(step2());
        r1
    } else {
        r1
    }
}

/// `exhaustiveList(mode, [(active, step)])` (§4.7): folds [`combine`] over a
/// sequence of steps, skipping any entry whose `active` flag is false.
pub(crate) fn combine_list<'a>(
    exhaustive: bool,
    steps: Vec<(bool, Box<dyn FnOnce() -> Vec<FailureReason> + 'a>)>,
) -> Vec<FailureReason> {
    let mut acc = Vec::new();
    for (active, step) in steps {
        if !active {
            continue;
        }
        acc = combine(exhaustive, acc, step);
    }
    acc
}

/// Runs the full Chain Walker over a presented chain (§4.6): the leaf phase
/// followed by the walking phase, composed under the Exhaustion Combinator.
pub(crate) fn validate_chain<C, S, St>(
    params: &Parameters,
    hooks: &Hooks<C>,
    checks: &Checks,
    store: &St,
    signature: &S,
    chain: &CertificateChain<C>,
) -> Vec<FailureReason>
where
    C: Certificate,
    S: Signature<C>,
    St: CertificateStore<C>,
{
    if chain.is_empty() {
        return vec![FailureReason::EmptyChain];
    }

    let certificates = chain.as_slice();
    let exhaustive = checks.check_exhaustive;
    let top = &certificates[0];

    let r_leaf = leaf_phase(params, hooks, checks, top, exhaustive);

    combine(exhaustive, r_leaf, || {
        walk(params, hooks, checks, store, signature, certificates, exhaustive)
    })
}

/// §4.6 "Leaf phase": name check, version check, key-usage/extended-key-usage
/// check, plus the supplemented unknown-critical-extension gate, all
/// combined in order under the exhaustion combinator.
fn leaf_phase<C: Certificate>(
    params: &Parameters,
    hooks: &Hooks<C>,
    checks: &Checks,
    top: &C,
    exhaustive: bool,
) -> Vec<FailureReason> {
    combine_list(
        exhaustive,
        vec![
            (
                checks.check_fqhn,
                Box::new(|| (hooks.validate_name)(&params.hostname, top))
                    as Box<dyn FnOnce() -> Vec<FailureReason>>,
            ),
            (
                checks.check_leaf_v3,
                Box::new(|| leaf::check_version(top)),
            ),
            (
                true,
                Box::new(|| leaf::check_key_usage_and_purpose(checks, top)),
            ),
            (
                checks.check_unknown_critical_extensions,
                Box::new(|| policy::check_unknown_critical_extensions(checks, top)),
            ),
        ],
    )
}

/// §4.6 "Walking phase", flattened to a loop over `(level, current_idx,
/// remaining)` per spec.md §9's Design Notes.
fn walk<C, S, St>(
    params: &Parameters,
    hooks: &Hooks<C>,
    checks: &Checks,
    store: &St,
    signature: &S,
    certificates: &[C],
    exhaustive: bool,
) -> Vec<FailureReason>
where
    C: Certificate,
    S: Signature<C>,
    St: CertificateStore<C>,
{
    let mut acc: Vec<FailureReason> = Vec::new();
    let mut level: u64 = 0;
    let mut current_idx: usize = 0;
    let mut remaining: Vec<usize> = (1..certificates.len()).collect();

    loop {
        let current = &certificates[current_idx];

        // Step 1: time validity.
        if checks.check_time_validity {
            acc = combine(exhaustive, acc, || (hooks.validate_time)(params.time, current));
            if !acc.is_empty() && !exhaustive {
                return acc;
            }
        }

        // Step 2: anchor lookup.
        if let Some(anchor) = store.find_certificate(current.issuer()) {
            acc = combine(exhaustive, acc, || verify_signature(signature, current, anchor));
            return acc;
        }

        // Step 3: self-signed, not trusted. Both emissions are unconditional
        // once this branch is reached — "emit SelfSigned, additionally emit
        // checkSignature" — so they are concatenated directly rather than
        // threaded through another `combine` call.
        if current.subject() == current.issuer() {
            let mut local = vec![FailureReason::SelfSigned];
            local.extend(verify_signature(signature, current, current));
            acc = combine(exhaustive, acc, || local);
            return acc;
        }

        // Step 4: presented chain empty.
        if remaining.is_empty() {
            acc = combine(exhaustive, acc, || vec![FailureReason::UnknownCA]);
            return acc;
        }

        // Step 5: issuer selection from the remaining presented certificates.
        let selected = if checks.check_strict_ordering {
            let candidate_idx = remaining[0];
            if (hooks.match_subject_issuer)(current.issuer(), &certificates[candidate_idx]) {
                Some(0usize)
            } else {
                None
            }
        } else {
            remaining
                .iter()
                .position(|&idx| (hooks.match_subject_issuer)(current.issuer(), &certificates[idx]))
        };

        let remaining_pos = match selected {
            Some(pos) => pos,
            None => {
                acc = combine(exhaustive, acc, || vec![FailureReason::UnknownCA]);
                return acc;
            }
        };

        let issuer_idx = remaining.remove(remaining_pos);
        let issuer = &certificates[issuer_idx];

        // Step 6: CA gate, then signature check, then recurse.
        acc = combine(exhaustive, acc, || {
            if checks.check_ca_constraints {
                let mut reasons = ca::check_ca(issuer, level);
                reasons.extend(policy::check_unknown_critical_extensions(checks, issuer));
                reasons
            } else {
                Vec::new()
            }
        });
        if !acc.is_empty() && !exhaustive {
            return acc;
        }

        acc = combine(exhaustive, acc, || verify_signature(signature, current, issuer));
        if !acc.is_empty() && !exhaustive {
            return acc;
        }

        level += 1;
        current_idx = issuer_idx;
    }
}

/// §4.5 Signature Verifier: the adapter over the external primitive.
fn verify_signature<C, S>(signature: &S, signed_cert: &C, signing_cert: &C) -> Vec<FailureReason>
where
    C: Certificate,
    S: Signature<C>,
{
    match signature.verify(signed_cert, signing_cert.public_key()) {
        Ok(()) => Vec::new(),
        Err(reason) => vec![FailureReason::InvalidSignature(reason.to_string())],
    }
}
