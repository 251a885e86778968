// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! The opaque data model this crate validates against (§3).
//!
//! Everything here is produced by an external parser; this crate never
//! decodes DER. `Certificate` is a trait rather than a concrete struct so
//! that a caller's existing ASN.1 library can implement it directly over
//! its own parsed representation instead of being copied into one of ours.

use std::fmt;

/// A point in time, expressed as seconds since the Unix epoch.
///
/// Wall-clock retrieval is an external collaborator per the core's scope;
/// this type only represents an instant, it does not know how to produce
/// "now" except via [`Instant::now`], used solely by the convenience
/// entry point [`crate::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    /// Constructs an instant from a Unix timestamp (seconds).
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Instant(seconds)
    }

    pub const fn unix_seconds(&self) -> i64 {
        self.0
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        let duration = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        Instant(duration.as_secs() as i64)
    }
}

/// A minimal object identifier, compared only for equality.
///
/// Decoding an OID out of DER is ASN.1 work and stays with the external
/// parser; this type exists only so extension identities (key usage,
/// extended key usage, the OIDs named in a certificate's critical
/// extensions) can be compared and reported without pulling in a full
/// ASN.1 crate for a handful of integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectIdentifier(Vec<u64>);

impl ObjectIdentifier {
    pub fn new(arcs: impl Into<Vec<u64>>) -> Self {
        ObjectIdentifier(arcs.into())
    }

    pub fn arcs(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}

/// A distinguished name, compared only as an opaque blob.
///
/// The external parser is responsible for producing a canonical encoding
/// (or otherwise stable representation) of a Name; this crate only ever
/// compares two `DistinguishedName`s for equality (the default
/// `matchSubjectIssuer` hook, §4.1) or looks one up in a [`crate::ops::CertificateStore`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DistinguishedName(Vec<u8>);

impl DistinguishedName {
    pub fn new(encoded: impl Into<Vec<u8>>) -> Self {
        DistinguishedName(encoded.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// The key-usage bits relevant to path validation (RFC 5280 §4.2.1.3).
///
/// Bits with no meaning to this core (`nonRepudiation`'s successor name,
/// `encipherOnly`/`decipherOnly`) are still tracked since the Leaf Policy
/// Gate (§4.3) treats `checkLeafKeyUsage` as an arbitrary flag set, not a
/// fixed subset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyUsage {
    pub digital_signature: bool,
    pub content_commitment: bool,
    pub key_encipherment: bool,
    pub data_encipherment: bool,
    pub key_agreement: bool,
    pub key_cert_sign: bool,
    pub crl_sign: bool,
    pub encipher_only: bool,
    pub decipher_only: bool,
}

impl KeyUsage {
    /// Returns true iff every flag set in `required` is also set in `self`.
    pub fn contains(&self, required: &KeyUsage) -> bool {
        (!required.digital_signature || self.digital_signature)
            && (!required.content_commitment || self.content_commitment)
            && (!required.key_encipherment || self.key_encipherment)
            && (!required.data_encipherment || self.data_encipherment)
            && (!required.key_agreement || self.key_agreement)
            && (!required.key_cert_sign || self.key_cert_sign)
            && (!required.crl_sign || self.crl_sign)
            && (!required.encipher_only || self.encipher_only)
            && (!required.decipher_only || self.decipher_only)
    }
}

/// The `BasicConstraints` extension (RFC 5280 §4.2.1.9).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasicConstraints {
    pub is_ca: bool,
    pub path_len_constraint: Option<u64>,
}

/// A certificate, as exposed to this crate by an external parser.
///
/// All accessors return already-decoded values; none of them can fail
/// from this crate's point of view (a parser that can't decode a
/// certificate simply never produces a `Certificate` for it).
pub trait Certificate {
    /// The subject distinguished name.
    fn subject(&self) -> &DistinguishedName;

    /// The issuer distinguished name.
    fn issuer(&self) -> &DistinguishedName;

    fn not_before(&self) -> Instant;
    fn not_after(&self) -> Instant;

    /// The encoded X.509 version: `0`, `1`, or `2` (v3).
    fn version(&self) -> u8;

    /// The subject's `commonName` attribute, if present and decodable as
    /// a string.
    fn common_name(&self) -> Option<&str>;

    /// The `dNSName` entries of the `subjectAltName` extension. Other SAN
    /// variants (IP address, email, URI, ...) are not represented here;
    /// per §4.2 only DNS entries participate in hostname matching.
    fn subject_alt_names(&self) -> &[&str];

    /// The `keyUsage` extension, if present.
    fn key_usage(&self) -> Option<KeyUsage>;

    /// The `extKeyUsage` extension's key-purpose OIDs, if present.
    fn extended_key_usage(&self) -> Option<&[ObjectIdentifier]>;

    /// The `basicConstraints` extension, if present.
    fn basic_constraints(&self) -> Option<BasicConstraints>;

    /// OIDs of every extension on this certificate marked `critical`.
    ///
    /// Used only by the `checkUnknownCriticalExtensions` gate (see
    /// SPEC_FULL.md); certificates with no critical extensions at all
    /// should return an empty slice.
    fn critical_extension_oids(&self) -> &[ObjectIdentifier];

    /// The raw to-be-signed bytes, as they appeared (or would appear) in
    /// the encoding that was actually signed.
    fn tbs_bytes(&self) -> &[u8];

    /// The embedded signature bytes.
    fn signature(&self) -> &[u8];

    /// The raw `subjectPublicKeyInfo` bytes, used as the public key input
    /// to [`crate::ops::Signature::verify`] when this certificate is acting
    /// as an issuer.
    fn public_key(&self) -> &[u8];
}

/// A non-empty, ordered, leaf-first sequence of presented certificates.
///
/// §3: "An ordered sequence `[leaf, c1, c2, ..., cn]`. Non-empty is a
/// precondition for any real validation; the empty case is reported as a
/// single failure `EmptyChain`."
pub struct CertificateChain<C> {
    certificates: Vec<C>,
}

impl<C: Certificate> CertificateChain<C> {
    pub fn new(certificates: Vec<C>) -> Self {
        CertificateChain { certificates }
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn as_slice(&self) -> &[C] {
        &self.certificates
    }
}
