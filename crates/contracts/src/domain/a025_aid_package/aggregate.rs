use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Supplier identifier. An aid package is keyed by the supplier that offers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub i64);

impl SupplierId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication status of an aid package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AidPackageStatus {
    #[default]
    Draft,
    Published,
}

impl AidPackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AidPackageStatus::Draft => "draft",
            AidPackageStatus::Published => "published",
        }
    }
}

impl fmt::Display for AidPackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aid package offered by a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AidPackage {
    /// Display name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub details: String,

    #[serde(default)]
    pub status: AidPackageStatus,
}

impl AidPackage {
    pub fn new(name: impl Into<String>, details: impl Into<String>, status: AidPackageStatus) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
            status,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == AidPackageStatus::Published
    }

    /// Copy of the package with a new status, used after a successful status change
    pub fn with_status(&self, status: AidPackageStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Aid packages keyed by supplier. Ordered so rows come out by ascending supplier id.
pub type AidPackages = BTreeMap<SupplierId, AidPackage>;
