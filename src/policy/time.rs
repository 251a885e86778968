// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Time Validator hook (§4.1).
//!
//! Grounded on the teacher's `Policy::validate_time`/expiry comparisons
//! against `ValidityPeriod` (`cryptography-x509-verification/src/policy/mod.rs`,
//! `not_before`/`not_after` bounds checked against `asn1::DateTime::now()`),
//! flattened to the two-sided open interval spec.md's default hook asks for.

use crate::error::FailureReason;
use crate::types::{Certificate, Instant};

/// The default `validateTime` hook (§4.1, §6).
///
/// `now < notBefore` reports `InFuture`; `now > notAfter` reports `Expired`;
/// `notBefore <= now <= notAfter` passes. Both bounds are inclusive, so a
/// certificate is valid at the instant equal to either bound.
pub fn validate_time<C: Certificate>(now: Instant, cert: &C) -> Vec<FailureReason> {
    if now < cert.not_before() {
        return vec![FailureReason::InFuture];
    }
    if now > cert.not_after() {
        return vec![FailureReason::Expired];
    }
    Vec::new()
}
