// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Leaf Policy Gate (§4.3).
//!
//! Grounded on the teacher's `permits_basic` version check and `permits_ee`'s
//! extended-key-usage extension-policy dispatch
//! (`cryptography-x509-verification/src/policy/mod.rs`), collapsed from the
//! teacher's generic, criticality-aware `ExtensionPolicy` framework into the
//! direct flag-subset checks spec.md actually asks for: no criticality
//! matrix, just "required flags subset of present flags, absence passes."

use crate::error::FailureReason;
use crate::types::{Certificate, KeyUsage};
use crate::Checks;

/// §4.3 "Version": `checkLeafV3` is assumed active by the caller (it gates
/// whether this function is even scheduled — see `chain::leaf_phase`).
pub(crate) fn check_version<C: Certificate>(cert: &C) -> Vec<FailureReason> {
    if cert.version() != 2 {
        vec![FailureReason::LeafNotV3]
    } else {
        Vec::new()
    }
}

/// §4.3 "Key Usage" and "Extended Key Usage", evaluated together as the
/// leaf gate's single combined key-usage step (§4.6 leaf phase, item 3).
///
/// "The 'absent extension ⇒ pass' policy deliberately mirrors RFC 5280: an
/// unconstrained key is usable for any purpose."
pub(crate) fn check_key_usage_and_purpose<C: Certificate>(
    checks: &Checks,
    cert: &C,
) -> Vec<FailureReason> {
    let mut reasons = check_key_usage(checks, cert);
    reasons.extend(check_key_purpose(checks, cert));
    reasons
}

fn check_key_usage<C: Certificate>(checks: &Checks, cert: &C) -> Vec<FailureReason> {
    if is_empty_key_usage(&checks.check_leaf_key_usage) {
        return Vec::new();
    }
    match cert.key_usage() {
        None => Vec::new(),
        Some(actual) => {
            if actual.contains(&checks.check_leaf_key_usage) {
                Vec::new()
            } else {
                vec![FailureReason::LeafKeyUsageNotAllowed]
            }
        }
    }
}

fn check_key_purpose<C: Certificate>(checks: &Checks, cert: &C) -> Vec<FailureReason> {
    if checks.check_leaf_key_purpose.is_empty() {
        return Vec::new();
    }
    match cert.extended_key_usage() {
        None => Vec::new(),
        Some(actual) => {
            let satisfied = checks
                .check_leaf_key_purpose
                .iter()
                .all(|required| actual.contains(required));
            if satisfied {
                Vec::new()
            } else {
                vec![FailureReason::LeafKeyPurposeNotAllowed]
            }
        }
    }
}

fn is_empty_key_usage(ku: &KeyUsage) -> bool {
    *ku == KeyUsage::default()
}
