//! Tender records from the procurement registry.

use serde::Deserialize;

/// Supplier identifier block on an award.
#[derive(Deserialize, Clone, Debug)]
pub struct SupplierIdentifier {
    pub id: String,
}

/// Supplier attached to a contract award.
#[derive(Deserialize, Clone, Debug)]
pub struct TenderSupplier {
    pub identifier: SupplierIdentifier,
    pub name: String,
}

/// Contract award attached to a tender.
#[derive(Deserialize, Clone, Debug)]
pub struct Award {
    pub status: String,
    #[serde(default)]
    pub suppliers: Vec<TenderSupplier>,
}

/// Tender record from `/tenders/{id}`.
#[derive(Deserialize, Clone, Debug)]
pub struct Tender {
    pub title: String,
    #[serde(default)]
    pub awards: Vec<Award>,
}

impl Tender {
    /// Resolve a supplier's display name through the active award.
    ///
    /// Returns `None` when the tender has no active award or the award does
    /// not list the supplier; callers fall back to the raw identifier.
    pub fn supplier_name(&self, supplier_id: &str) -> Option<&str> {
        self.awards
            .iter()
            .find(|award| award.status == "active")
            .and_then(|award| {
                award
                    .suppliers
                    .iter()
                    .find(|supplier| supplier.identifier.id == supplier_id)
            })
            .map(|supplier| supplier.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tender_fixture() -> Tender {
        serde_json::from_str(
            r#"{
                "title": "Procurement of diesel fuel",
                "awards": [
                    {"status": "cancelled", "suppliers": [
                        {"identifier": {"id": "11111111"}, "name": "Old Supplier LLC"}
                    ]},
                    {"status": "active", "suppliers": [
                        {"identifier": {"id": "38782419"}, "name": "Fuel Trade LLC"}
                    ]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_supplier_name_resolves_through_active_award() {
        let tender = tender_fixture();
        assert_eq!(tender.supplier_name("38782419"), Some("Fuel Trade LLC"));
    }

    #[test]
    fn test_supplier_name_ignores_inactive_awards() {
        let tender = tender_fixture();
        assert_eq!(tender.supplier_name("11111111"), None);
    }

    #[test]
    fn test_supplier_name_without_awards() {
        let tender: Tender = serde_json::from_str(r#"{"title": "No awards yet"}"#).unwrap();
        assert_eq!(tender.supplier_name("38782419"), None);
    }
}
