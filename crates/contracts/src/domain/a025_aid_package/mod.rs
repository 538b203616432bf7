//! Aid packages (a025): supplier packages, medical need quotes and the
//! per-supplier cost rows shown on the "Manage aid packages" page.

pub mod aggregate;
pub mod medical_need;
pub mod rows;

pub use aggregate::{AidPackage, AidPackageStatus, AidPackages, SupplierId};
pub use medical_need::{MedicalNeed, NeedAssignments, NeedId, QuotePeriod, SupplierQuote, SupplierRef};
pub use rows::{build_rows, quote_for_need, AidPackageRow};
