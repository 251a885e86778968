// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! External collaborator seams (§5, §6).
//!
//! The teacher abstracts its concrete crypto backend behind a `CryptoOps`
//! trait (`cryptography-x509-verification/src/ops.rs`, not itself
//! retrieved but referenced throughout `policy/mod.rs` as `self.ops.public_key(..)`
//! / `self.ops.verify_signed_by(..)`) so the policy engine never names
//! OpenSSL directly. This crate splits that same seam into the two
//! collaborators §6 names explicitly: [`Signature`] (the cryptographic
//! primitive) and [`CertificateStore`] (the trust-anchor index).

use crate::types::{Certificate, DistinguishedName};

/// Adapter over an external signature-verification primitive (§4.5, §6).
///
/// A caller supplies one implementation per backend (OpenSSL, ring,
/// rustcrypto, ...); this crate never performs signature math itself.
pub trait Signature<C: Certificate> {
    /// The signature-layer failure reason, carried verbatim into
    /// [`crate::error::FailureReason::InvalidSignature`] (§4.5, §7).
    type Failure: std::fmt::Display;

    /// Verifies that `signed_cert`'s to-be-signed bytes and embedded
    /// signature are valid under `public_key`.
    fn verify(&self, signed_cert: &C, public_key: &[u8]) -> Result<(), Self::Failure>;
}

/// A lookup from distinguished name to a trusted anchor certificate (§3, §6).
///
/// Invariant carried over from the spec verbatim: "if a DN is present,
/// the returned certificate is trusted (an anchor)." This crate never
/// second-guesses that invariant; a store that returns an untrusted or
/// DN-mismatched certificate is a wiring bug in the host application; see
/// §7.
pub trait CertificateStore<C: Certificate> {
    fn find_certificate(&self, dn: &DistinguishedName) -> Option<&C>;
}
