// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Per-level policy gates applied while walking a chain (§4.1, §4.3, §4.4).

pub mod ca;
pub mod leaf;
pub mod time;

pub use time::validate_time;

use crate::error::FailureReason;
use crate::types::{Certificate, ObjectIdentifier};
use crate::Checks;

/// Extension OIDs this crate's gates already account for, used by the
/// supplemented `checkUnknownCriticalExtensions` gate (see SPEC_FULL.md;
/// resolves spec.md §9's Open Question). Grounded on the teacher's
/// `permits_basic`, which diffs a certificate's critical extensions
/// against its own "checked extensions" union — but that union is ten
/// OIDs wide (it also covers AuthorityKeyIdentifier, SubjectKeyIdentifier,
/// SubjectDirectoryAttributes, AuthorityInformationAccess, NameConstraints,
/// and PolicyConstraints). This crate deliberately narrows that set to
/// the four extensions its own gates actually interpret (key usage,
/// SAN, basic constraints, extended key usage): name constraints and
/// policy constraints are out of scope per spec.md's Non-goals, and the
/// rest have no gate here to account for them against in the first
/// place.
const KEY_USAGE_OID: &[u64] = &[2, 5, 29, 15];
const SUBJECT_ALT_NAME_OID: &[u64] = &[2, 5, 29, 17];
const BASIC_CONSTRAINTS_OID: &[u64] = &[2, 5, 29, 19];
const EXT_KEY_USAGE_OID: &[u64] = &[2, 5, 29, 37];

fn is_known_extension(oid: &ObjectIdentifier) -> bool {
    [
        KEY_USAGE_OID,
        SUBJECT_ALT_NAME_OID,
        BASIC_CONSTRAINTS_OID,
        EXT_KEY_USAGE_OID,
    ]
    .iter()
    .any(|known| oid.arcs() == *known)
}

/// The supplemented `checkUnknownCriticalExtensions` gate (off by default).
pub(crate) fn check_unknown_critical_extensions<C: Certificate>(
    checks: &Checks,
    cert: &C,
) -> Vec<FailureReason> {
    if !checks.check_unknown_critical_extensions {
        return Vec::new();
    }
    if cert
        .critical_extension_oids()
        .iter()
        .any(|oid| !is_known_extension(oid))
    {
        vec![FailureReason::UnknownCriticalExtension]
    } else {
        Vec::new()
    }
}
