// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Shared test fixtures.
//!
//! A single `MockCert` builder used by every module's `#[cfg(test)]` block
//! instead of each one hand-rolling its own throwaway `Certificate` impl.

#![cfg(test)]

use crate::types::{
    BasicConstraints, Certificate, DistinguishedName, Instant, KeyUsage, ObjectIdentifier,
};

pub struct MockCert {
    pub subject: DistinguishedName,
    pub issuer: DistinguishedName,
    pub not_before: Instant,
    pub not_after: Instant,
    pub version: u8,
    pub common_name: Option<String>,
    pub alt_names: Vec<String>,
    pub key_usage: Option<KeyUsage>,
    pub extended_key_usage: Vec<ObjectIdentifier>,
    pub basic_constraints: Option<BasicConstraints>,
    pub critical_extension_oids: Vec<ObjectIdentifier>,
    pub tbs_bytes: Vec<u8>,
    pub signature: Vec<u8>,
    pub public_key: Vec<u8>,
}

impl Default for MockCert {
    fn default() -> Self {
        MockCert {
            subject: DistinguishedName::new(b"subject".to_vec()),
            issuer: DistinguishedName::new(b"issuer".to_vec()),
            not_before: Instant::from_unix_seconds(0),
            not_after: Instant::from_unix_seconds(i64::MAX),
            version: 2,
            common_name: None,
            alt_names: Vec::new(),
            key_usage: None,
            extended_key_usage: Vec::new(),
            basic_constraints: None,
            critical_extension_oids: Vec::new(),
            tbs_bytes: Vec::new(),
            signature: Vec::new(),
            public_key: Vec::new(),
        }
    }
}

impl MockCert {
    pub fn with_subject(mut self, subject: &[u8]) -> Self {
        self.subject = DistinguishedName::new(subject.to_vec());
        self
    }

    pub fn with_issuer(mut self, issuer: &[u8]) -> Self {
        self.issuer = DistinguishedName::new(issuer.to_vec());
        self
    }

    pub fn with_validity(mut self, not_before: i64, not_after: i64) -> Self {
        self.not_before = Instant::from_unix_seconds(not_before);
        self.not_after = Instant::from_unix_seconds(not_after);
        self
    }

    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn with_common_name(mut self, cn: &str) -> Self {
        self.common_name = Some(cn.to_string());
        self
    }

    pub fn with_alt_names(mut self, names: Vec<&str>) -> Self {
        self.alt_names = names.into_iter().map(String::from).collect();
        self
    }

    pub fn with_key_usage(mut self, ku: Option<KeyUsage>) -> Self {
        self.key_usage = ku;
        self
    }

    pub fn with_extended_key_usage(mut self, oids: Vec<ObjectIdentifier>) -> Self {
        self.extended_key_usage = oids;
        self
    }

    pub fn with_basic_constraints(mut self, bc: Option<BasicConstraints>) -> Self {
        self.basic_constraints = bc;
        self
    }

    pub fn with_critical_extension_oids(mut self, oids: Vec<ObjectIdentifier>) -> Self {
        self.critical_extension_oids = oids;
        self
    }

    pub fn with_signature_material(mut self, tbs: &[u8], signature: &[u8], public_key: &[u8]) -> Self {
        self.tbs_bytes = tbs.to_vec();
        self.signature = signature.to_vec();
        self.public_key = public_key.to_vec();
        self
    }
}

impl Certificate for MockCert {
    fn subject(&self) -> &DistinguishedName {
        &self.subject
    }

    fn issuer(&self) -> &DistinguishedName {
        &self.issuer
    }

    fn not_before(&self) -> Instant {
        self.not_before
    }

    fn not_after(&self) -> Instant {
        self.not_after
    }

    fn version(&self) -> u8 {
        self.version
    }

    fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    fn subject_alt_names(&self) -> &[&str] {
        // `Certificate::subject_alt_names` returns borrowed `&str`s; since
        // `MockCert` owns `String`s, this leaks a small vec of references
        // behind a `Box` for the lifetime of the call. Acceptable in test
        // code only.
        Box::leak(
            self.alt_names
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .into_boxed_slice(),
        )
    }

    fn key_usage(&self) -> Option<KeyUsage> {
        self.key_usage
    }

    fn extended_key_usage(&self) -> Option<&[ObjectIdentifier]> {
        if self.extended_key_usage.is_empty() {
            None
        } else {
            Some(&self.extended_key_usage)
        }
    }

    fn basic_constraints(&self) -> Option<BasicConstraints> {
        self.basic_constraints
    }

    fn critical_extension_oids(&self) -> &[ObjectIdentifier] {
        &self.critical_extension_oids
    }

    fn tbs_bytes(&self) -> &[u8] {
        &self.tbs_bytes
    }

    fn signature(&self) -> &[u8] {
        &self.signature
    }

    fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}
