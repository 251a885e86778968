// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! CA Constraint Gate (§4.4).
//!
//! Grounded on the teacher's `permits_ca` (`cryptography-x509-verification/src/policy/mod.rs`):
//! `keyCertSign` presence, `basicConstraints.cA`, and path-length-vs-depth
//! all appear there as one combined check against an issuer candidate. This
//! module keeps the teacher's three-part shape but reports each failing
//! part independently rather than returning on the first one, since the
//! Exhaustion Combinator (§4.7) needs all three available to accumulate.

use crate::error::FailureReason;
use crate::types::Certificate;

/// `allowedSign` (§4.4): the candidate issuer's `keyUsage.keyCertSign` bit,
/// if the extension is present at all. An absent `keyUsage` extension
/// imposes no constraint (RFC 5280 §4.2.1.3 default).
pub(crate) fn allowed_sign<C: Certificate>(issuer: &C) -> Vec<FailureReason> {
    match issuer.key_usage() {
        Some(ku) if !ku.key_cert_sign => vec![FailureReason::NotAllowedToSign],
        _ => Vec::new(),
    }
}

/// `allowedCA` (§4.4): the candidate issuer's `basicConstraints.cA` flag.
/// An absent `basicConstraints` extension means the certificate is not an
/// authority (RFC 5280 §4.2.1.9: "CAs MUST include this extension").
pub(crate) fn allowed_ca<C: Certificate>(issuer: &C) -> Vec<FailureReason> {
    match issuer.basic_constraints() {
        Some(bc) if bc.is_ca => Vec::new(),
        _ => vec![FailureReason::NotAnAuthority],
    }
}

/// `allowedDepth` (§4.4): `pathLenConstraint`, compared against `level`, the
/// number of non-self-issued certificates already validated below this one
/// in the chain (not counting the candidate issuer itself). A missing
/// `pathLenConstraint` imposes no depth bound.
pub(crate) fn allowed_depth<C: Certificate>(issuer: &C, level: u64) -> Vec<FailureReason> {
    match issuer.basic_constraints().and_then(|bc| bc.path_len_constraint) {
        Some(max_depth) if level > max_depth => vec![FailureReason::AuthorityTooDeep],
        _ => Vec::new(),
    }
}

/// All three CA-gate checks, concatenated unconditionally (§4.4: "all
/// applicable failures at one level are reported together, regardless of
/// the active exhaustion mode").
pub(crate) fn check_ca<C: Certificate>(issuer: &C, level: u64) -> Vec<FailureReason> {
    let mut reasons = allowed_sign(issuer);
    reasons.extend(allowed_ca(issuer));
    reasons.extend(allowed_depth(issuer, level));
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_support::MockCert;
    use crate::types::{BasicConstraints, KeyUsage};

    fn ca_cert(key_cert_sign: bool, is_ca: bool, path_len: Option<u64>) -> MockCert {
        let mut ku = KeyUsage::default();
        ku.key_cert_sign = key_cert_sign;
        MockCert::default()
            .with_key_usage(Some(ku))
            .with_basic_constraints(Some(BasicConstraints {
                is_ca,
                path_len_constraint: path_len,
            }))
    }

    #[test]
    fn well_formed_ca_passes() {
        let issuer = ca_cert(true, true, Some(2));
        assert!(check_ca(&issuer, 0).is_empty());
    }

    #[test]
    fn missing_key_cert_sign_fails() {
        let issuer = ca_cert(false, true, None);
        assert_eq!(check_ca(&issuer, 0), vec![FailureReason::NotAllowedToSign]);
    }

    #[test]
    fn not_marked_ca_fails() {
        let issuer = ca_cert(true, false, None);
        assert_eq!(check_ca(&issuer, 0), vec![FailureReason::NotAnAuthority]);
    }

    #[test]
    fn missing_basic_constraints_fails_as_not_an_authority() {
        let issuer = MockCert::default().with_key_usage(None);
        assert_eq!(check_ca(&issuer, 0), vec![FailureReason::NotAnAuthority]);
    }

    #[test]
    fn path_len_respected_at_boundary() {
        let issuer = ca_cert(true, true, Some(1));
        assert!(check_ca(&issuer, 1).is_empty());
    }

    #[test]
    fn path_len_exceeded_fails() {
        let issuer = ca_cert(true, true, Some(1));
        assert_eq!(check_ca(&issuer, 2), vec![FailureReason::AuthorityTooDeep]);
    }

    #[test]
    fn multiple_failures_accumulate_together() {
        let issuer = ca_cert(false, false, Some(0));
        assert_eq!(
            check_ca(&issuer, 1),
            vec![
                FailureReason::NotAllowedToSign,
                FailureReason::NotAnAuthority,
                FailureReason::AuthorityTooDeep,
            ]
        );
    }
}
