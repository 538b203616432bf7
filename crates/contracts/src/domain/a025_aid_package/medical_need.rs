use super::aggregate::SupplierId;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Medical need identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeedId(pub i64);

impl NeedId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Month a quote is valid for. Ordering is chronological (year, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuotePeriod {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl QuotePeriod {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Current month (UTC)
    pub fn current() -> Self {
        let now = Utc::now().date_naive();
        Self::new(now.year(), now.month())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: SupplierId,
    pub name: String,
}

/// Price offered by a supplier for one unit of a medical need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierQuote {
    pub supplier: SupplierRef,
    pub unit_price: f64,
    pub period: QuotePeriod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalNeed {
    pub id: NeedId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quotes: Vec<SupplierQuote>,
}

impl MedicalNeed {
    /// First quote offered by the given supplier, if any
    pub fn quote_from(&self, supplier_id: SupplierId) -> Option<&SupplierQuote> {
        self.quotes.iter().find(|q| q.supplier.id == supplier_id)
    }
}

/// Need -> (supplier -> assigned quantity). Quantities are positive.
pub type NeedAssignments = BTreeMap<NeedId, BTreeMap<SupplierId, u32>>;
