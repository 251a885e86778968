// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Failure reporting (§3, §6, §7).
//!
//! Mirrors the teacher's `ValidationError` (`cryptography-x509-verification::policy`,
//! returned from every `permits_*`/`valid_issuer` call) but generalized from a
//! single terminal error into one element of an accumulated sequence: the
//! defining difference between this core's fail-fast and exhaustive modes
//! (§4.7) is that more than one `FailureReason` can be live at once.
//!
//! Like the teacher, this is a plain enum with a hand-written `Display`
//! rather than a `thiserror`-derived one — the teacher's crate does not
//! depend on `thiserror` anywhere, and nothing about accumulating several
//! of these into a `Vec` calls for one either.
use std::fmt;

/// A single reason a chain failed to validate.
///
/// §6's enumeration, verbatim. An empty `Vec<FailureReason>` is success;
/// any non-empty one is failure, and the caller MUST NOT partially trust
/// the chain (§7) — including when the only reason present is one that
/// looks survivable, like `Expired`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    UnknownCriticalExtension,
    Expired,
    InFuture,
    SelfSigned,
    UnknownCA,
    NotAllowedToSign,
    NotAnAuthority,
    AuthorityTooDeep,
    NoCommonName,
    InvalidName(String),
    NameMismatch(String),
    InvalidWildcard,
    LeafKeyUsageNotAllowed,
    LeafKeyPurposeNotAllowed,
    LeafNotV3,
    EmptyChain,
    InvalidSignature(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCriticalExtension => {
                write!(f, "certificate contains an unrecognized critical extension")
            }
            Self::Expired => write!(f, "certificate has expired"),
            Self::InFuture => write!(f, "certificate is not yet valid"),
            Self::SelfSigned => write!(f, "certificate is self-signed and not a trust anchor"),
            Self::UnknownCA => write!(f, "no issuer for certificate could be found"),
            Self::NotAllowedToSign => write!(f, "issuer's key usage does not permit signing"),
            Self::NotAnAuthority => write!(f, "issuer is not a certificate authority"),
            Self::AuthorityTooDeep => write!(f, "path length constraint exceeded"),
            Self::NoCommonName => write!(f, "leaf certificate has no common name"),
            Self::InvalidName(name) => write!(f, "invalid name: {name}"),
            Self::NameMismatch(hostname) => {
                write!(f, "certificate is not valid for hostname {hostname}")
            }
            Self::InvalidWildcard => write!(f, "wildcard name does not cover enough labels"),
            Self::LeafKeyUsageNotAllowed => write!(f, "leaf key usage does not permit this use"),
            Self::LeafKeyPurposeNotAllowed => {
                write!(f, "leaf extended key usage does not permit this use")
            }
            Self::LeafNotV3 => write!(f, "leaf certificate is not X.509v3"),
            Self::EmptyChain => write!(f, "certificate chain is empty"),
            Self::InvalidSignature(reason) => write!(f, "invalid signature: {reason}"),
        }
    }
}

impl std::error::Error for FailureReason {}
