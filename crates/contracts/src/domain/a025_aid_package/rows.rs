//! Per-supplier rows for the unpublished aid packages table

use super::aggregate::{AidPackages, SupplierId};
use super::medical_need::{MedicalNeed, NeedAssignments, NeedId, QuotePeriod, SupplierQuote};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One table row: an unpublished package with its summed cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AidPackageRow {
    pub supplier_id: SupplierId,
    pub name: String,
    /// Supplier name from the selected quote, empty when no quote matched
    pub supplier: String,
    pub description: String,
    /// Period of the selected quote, `None` when no quote matched
    pub period: Option<QuotePeriod>,
    pub total_cost: f64,
    pub is_published: bool,
}

/// Quote of `supplier_id` for the need `need_id`
pub fn quote_for_need(
    medical_needs: &[MedicalNeed],
    need_id: NeedId,
    supplier_id: SupplierId,
) -> Option<&SupplierQuote> {
    medical_needs
        .iter()
        .find(|need| need.id == need_id)
        .and_then(|need| need.quote_from(supplier_id))
}

/// Builds one row per unpublished package, ordered by supplier id.
///
/// Total cost is the sum of `unit_price * quantity` over every need assigned to the
/// supplier; needs without a quote from that supplier add nothing. Supplier name and
/// period come from the matching quote with the latest period; on equal periods the
/// quote of the higher need id wins.
pub fn build_rows(
    aid_packages: &AidPackages,
    medical_needs: &[MedicalNeed],
    need_assignments: &NeedAssignments,
) -> Vec<AidPackageRow> {
    let needs_by_id: HashMap<NeedId, &MedicalNeed> =
        medical_needs.iter().rev().map(|need| (need.id, need)).collect();

    aid_packages
        .iter()
        .filter(|(_, package)| !package.is_published())
        .map(|(&supplier_id, package)| {
            let mut total_cost = 0.0;
            let mut shown: Option<&SupplierQuote> = None;

            for (need_id, assignment) in need_assignments {
                let Some(&quantity) = assignment.get(&supplier_id) else {
                    continue;
                };
                let Some(quote) = needs_by_id
                    .get(need_id)
                    .and_then(|need| need.quote_from(supplier_id))
                else {
                    continue;
                };

                total_cost += quote.unit_price * f64::from(quantity);
                if shown.map_or(true, |s| quote.period >= s.period) {
                    shown = Some(quote);
                }
            }

            AidPackageRow {
                supplier_id,
                name: package.name.clone(),
                supplier: shown.map(|q| q.supplier.name.clone()).unwrap_or_default(),
                description: package.details.clone(),
                period: shown.map(|q| q.period),
                total_cost,
                is_published: package.is_published(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_aid_package::aggregate::{AidPackage, AidPackageStatus};
    use crate::domain::a025_aid_package::medical_need::SupplierRef;
    use std::collections::BTreeMap;

    fn quote(supplier: i64, name: &str, unit_price: f64, year: i32, month: u32) -> SupplierQuote {
        SupplierQuote {
            supplier: SupplierRef {
                id: SupplierId(supplier),
                name: name.to_string(),
            },
            unit_price,
            period: QuotePeriod::new(year, month),
        }
    }

    fn need(id: i64, quotes: Vec<SupplierQuote>) -> MedicalNeed {
        MedicalNeed {
            id: NeedId(id),
            name: format!("need {}", id),
            quotes,
        }
    }

    fn package(name: &str, status: AidPackageStatus) -> AidPackage {
        AidPackage::new(name, format!("{} details", name), status)
    }

    fn assign(pairs: &[(i64, &[(i64, u32)])]) -> NeedAssignments {
        pairs
            .iter()
            .map(|(need_id, suppliers)| {
                let suppliers: BTreeMap<SupplierId, u32> = suppliers
                    .iter()
                    .map(|(s, qty)| (SupplierId(*s), *qty))
                    .collect();
                (NeedId(*need_id), suppliers)
            })
            .collect()
    }

    #[test]
    fn test_only_unpublished_packages_become_rows() {
        let mut packages = AidPackages::new();
        packages.insert(SupplierId(1), package("Draft one", AidPackageStatus::Draft));
        packages.insert(SupplierId(2), package("Live one", AidPackageStatus::Published));
        packages.insert(SupplierId(3), package("Draft two", AidPackageStatus::Draft));

        let rows = build_rows(&packages, &[], &NeedAssignments::new());

        let ids: Vec<SupplierId> = rows.iter().map(|r| r.supplier_id).collect();
        assert_eq!(ids, vec![SupplierId(1), SupplierId(3)]);
        assert!(rows.iter().all(|r| !r.is_published));
    }

    #[test]
    fn test_supplier_without_needs_gets_zero_row() {
        let mut packages = AidPackages::new();
        packages.insert(SupplierId(5), package("Gauze", AidPackageStatus::Draft));
        let needs = vec![need(1, vec![quote(9, "Other", 3.0, 2025, 1)])];
        let assignments = assign(&[(1, &[(9, 4)])]);

        let rows = build_rows(&packages, &needs, &assignments);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_cost, 0.0);
        assert_eq!(rows[0].supplier, "");
        assert_eq!(rows[0].period, None);
        assert_eq!(rows[0].name, "Gauze");
        assert_eq!(rows[0].description, "Gauze details");
    }

    #[test]
    fn test_total_cost_sums_price_times_quantity() {
        let mut packages = AidPackages::new();
        packages.insert(SupplierId(1), package("Kit", AidPackageStatus::Draft));
        let needs = vec![
            need(1, vec![quote(1, "Acme", 10.0, 2025, 1)]),
            need(2, vec![quote(1, "Acme", 5.0, 2025, 1)]),
        ];
        let assignments = assign(&[(1, &[(1, 2)]), (2, &[(1, 1)])]);

        let rows = build_rows(&packages, &needs, &assignments);

        assert_eq!(rows[0].total_cost, 25.0);
        assert_eq!(rows[0].supplier, "Acme");
    }

    #[test]
    fn test_need_without_matching_quote_contributes_nothing() {
        let mut packages = AidPackages::new();
        packages.insert(SupplierId(1), package("Kit", AidPackageStatus::Draft));
        let needs = vec![
            need(1, vec![quote(1, "Acme", 10.0, 2025, 1)]),
            need(2, vec![quote(2, "Medline", 100.0, 2025, 1)]),
        ];
        // need 3 has an assignment but no MedicalNeed at all
        let assignments = assign(&[(1, &[(1, 3)]), (2, &[(1, 7)]), (3, &[(1, 1)])]);

        let rows = build_rows(&packages, &needs, &assignments);

        assert_eq!(rows[0].total_cost, 30.0);
    }

    #[test]
    fn test_latest_period_quote_names_the_row() {
        let mut packages = AidPackages::new();
        packages.insert(SupplierId(1), package("Kit", AidPackageStatus::Draft));
        let needs = vec![
            need(1, vec![quote(1, "Acme (March)", 1.0, 2025, 3)]),
            need(2, vec![quote(1, "Acme (January)", 1.0, 2025, 1)]),
        ];
        let assignments = assign(&[(1, &[(1, 1)]), (2, &[(1, 1)])]);

        let rows = build_rows(&packages, &needs, &assignments);

        assert_eq!(rows[0].supplier, "Acme (March)");
        assert_eq!(rows[0].period, Some(QuotePeriod::new(2025, 3)));
    }

    #[test]
    fn test_equal_periods_prefer_higher_need_id() {
        let mut packages = AidPackages::new();
        packages.insert(SupplierId(1), package("Kit", AidPackageStatus::Draft));
        let needs = vec![
            need(8, vec![quote(1, "Acme B", 1.0, 2025, 6)]),
            need(2, vec![quote(1, "Acme A", 1.0, 2025, 6)]),
        ];
        let assignments = assign(&[(2, &[(1, 1)]), (8, &[(1, 1)])]);

        let rows = build_rows(&packages, &needs, &assignments);

        assert_eq!(rows[0].supplier, "Acme B");
    }

    #[test]
    fn test_supplier_shared_across_needs_with_other_suppliers() {
        let mut packages = AidPackages::new();
        packages.insert(SupplierId(1), package("Acme kit", AidPackageStatus::Draft));
        packages.insert(SupplierId(2), package("Medline kit", AidPackageStatus::Draft));
        let needs = vec![need(
            1,
            vec![quote(1, "Acme", 2.0, 2025, 1), quote(2, "Medline", 3.0, 2025, 2)],
        )];
        let assignments = assign(&[(1, &[(1, 10), (2, 4)])]);

        let rows = build_rows(&packages, &needs, &assignments);

        assert_eq!(rows[0].total_cost, 20.0);
        assert_eq!(rows[1].total_cost, 12.0);
        assert_eq!(rows[1].supplier, "Medline");
    }

    #[test]
    fn test_quote_for_need_lookup() {
        let needs = vec![
            need(1, vec![quote(1, "Acme", 2.0, 2025, 1)]),
            need(2, vec![quote(2, "Medline", 3.0, 2025, 2)]),
        ];

        assert_eq!(
            quote_for_need(&needs, NeedId(2), SupplierId(2)).map(|q| q.unit_price),
            Some(3.0)
        );
        assert!(quote_for_need(&needs, NeedId(2), SupplierId(1)).is_none());
        assert!(quote_for_need(&needs, NeedId(3), SupplierId(1)).is_none());
    }
}
