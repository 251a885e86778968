// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

#![forbid(unsafe_code)]

//! A pure, synchronous X.509 chain-validation policy engine (RFC 5280 /
//! RFC 6818), in the style of `cryptography-x509-verification`: ASN.1
//! decoding, signature primitives, and trust-store indexing are external
//! collaborators reached through the traits in [`ops`] and [`types`]; this
//! crate owns only the chain-building and policy state machine.
//!
//! The two public entry points are [`validate`] (obtains the current time
//! itself) and [`validateWith`]'s Rust spelling, [`validate_with`] (fully
//! deterministic, takes a [`Parameters`]). Both return a possibly-empty
//! [`Vec<error::FailureReason>`](error::FailureReason): empty means the
//! chain is acceptable, non-empty means every recorded reason is a
//! distinct defect (§7 — none of them, including `Expired`, may be
//! ignored unless [`Checks::check_exhaustive`] was set, since fail-fast
//! mode stops recording after the first one).

mod chain;
pub mod error;
pub mod name;
pub mod ops;
pub mod policy;
#[cfg(test)]
mod tests_support;
pub mod types;

pub use error::FailureReason;
pub use ops::{CertificateStore, Signature};
pub use types::{
    BasicConstraints, Certificate, CertificateChain, DistinguishedName, Instant, KeyUsage,
    ObjectIdentifier,
};

/// Parameters immutable for the duration of one validation (§3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameters {
    pub time: Instant,
    pub hostname: String,
}

/// The three swappable predicates of §4.1.
///
/// Mirrors the teacher's preference for plain function values over `dyn`
/// trait objects for small, almost-always-default interfaces (its
/// `ca`/`ee`/`common` extension-policy callbacks in `policy::extension`
/// are assembled as a `Vec` of free functions, not boxed trait objects).
/// Defaults are the reference semantics named in §4.1/§4.2.
pub struct Hooks<C: Certificate> {
    /// `matchSubjectIssuer(issuerDN, candidate) -> bool` (§4.1). Default:
    /// exact DN equality.
    pub match_subject_issuer: fn(&DistinguishedName, &C) -> bool,

    /// `validateTime(now, cert) -> [reason]` (§4.1).
    pub validate_time: fn(Instant, &C) -> Vec<FailureReason>,

    /// `validateName(hostname, cert) -> [reason]` (§4.1, §4.2).
    pub validate_name: fn(&str, &C) -> Vec<FailureReason>,
}

impl<C: Certificate> Hooks<C> {
    /// The default `matchSubjectIssuer` hook: exact DN equality.
    pub fn default_match_subject_issuer(issuer_dn: &DistinguishedName, candidate: &C) -> bool {
        candidate.subject() == issuer_dn
    }
}

impl<C: Certificate> Default for Hooks<C> {
    fn default() -> Self {
        Hooks {
            match_subject_issuer: Hooks::default_match_subject_issuer,
            validate_time: policy::validate_time,
            validate_name: name::validate_name,
        }
    }
}

impl<C: Certificate> Clone for Hooks<C> {
    fn clone(&self) -> Self {
        Hooks {
            match_subject_issuer: self.match_subject_issuer,
            validate_time: self.validate_time,
            validate_name: self.validate_name,
        }
    }
}
impl<C: Certificate> Copy for Hooks<C> {}

/// Policy configuration (§3, §6). All fields have stable defaults.
///
/// Named `Checks` per spec.md §3/§6 verbatim (not `PolicyChecks` — nothing
/// else in this crate's public surface collides with the name).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checks {
    /// Validity interval enforced on every cert visited by the walker.
    pub check_time_validity: bool,
    /// Require the presented chain to already be in issuer order.
    pub check_strict_ordering: bool,
    /// Run the CA gate on every selected issuer.
    pub check_ca_constraints: bool,
    /// Accumulate rather than short-circuit.
    pub check_exhaustive: bool,
    /// Require leaf `version == 2` (v3 encoding).
    pub check_leaf_v3: bool,
    /// Required key-usage flags, intersected against leaf KU if present.
    pub check_leaf_key_usage: KeyUsage,
    /// Required extended-key-usage purposes, intersected against leaf EKU
    /// if present.
    pub check_leaf_key_purpose: Vec<ObjectIdentifier>,
    /// Run the Name Matcher.
    pub check_fqhn: bool,
    /// Supplemented gate resolving §9's Open Question (see SPEC_FULL.md):
    /// flag `UnknownCriticalExtension` for any critical extension this
    /// crate's gates do not already account for. Not named in spec.md's
    /// defaults table; defaults to `false` so `Checks::default()` matches
    /// that table verbatim.
    pub check_unknown_critical_extensions: bool,
}

impl Default for Checks {
    fn default() -> Self {
        Checks {
            check_time_validity: true,
            check_strict_ordering: false,
            check_ca_constraints: true,
            check_exhaustive: false,
            check_leaf_v3: true,
            check_leaf_key_usage: KeyUsage::default(),
            check_leaf_key_purpose: Vec::new(),
            check_fqhn: true,
            check_unknown_critical_extensions: false,
        }
    }
}

/// Convenience entry point (§6): obtains the current time internally, then
/// delegates to [`validate_with`]. The only side effect anywhere in this
/// crate's public surface.
pub fn validate<C, S, St>(
    hooks: &Hooks<C>,
    checks: &Checks,
    store: &St,
    signature: &S,
    hostname: &str,
    chain: &CertificateChain<C>,
) -> Vec<FailureReason>
where
    C: Certificate,
    S: Signature<C>,
    St: CertificateStore<C>,
{
    let params = Parameters {
        time: Instant::now(),
        hostname: hostname.to_string(),
    };
    validate_with(&params, hooks, checks, store, signature, chain)
}

/// Deterministic entry point (§6, `validateWith`): no hidden clock read,
/// fully a pure function of its arguments.
pub fn validate_with<C, S, St>(
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
    chain::validate_chain(params, hooks, checks, store, signature, chain)
}

/// Out-of-core helper (§6): computes a certificate's fingerprint by
/// delegating the actual digest computation to a caller-supplied hash
/// function, keeping this crate free of any particular hash-algorithm
/// dependency (hashing, like signature verification, is an external
/// collaborator per §1).
pub fn get_fingerprint<C: Certificate>(
    signed_cert: &C,
    hash_algorithm: impl FnOnce(&[u8]) -> Vec<u8>,
) -> Vec<u8> {
    hash_algorithm(signed_cert.tbs_bytes())
}
