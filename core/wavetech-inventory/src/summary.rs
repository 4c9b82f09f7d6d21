//! Dashboard figures.

use crate::store::{InventoryStore, RecordKind};
use std::fmt;

/// Counts shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub counts: Vec<(RecordKind, usize)>,
    /// Sum of stock across all listings.
    pub microwaves_in_stock: i64,
    /// Part numbers at or below their reorder threshold.
    pub parts_to_reorder: Vec<String>,
}

impl DashboardSummary {
    #[must_use]
    pub fn from_store(store: &InventoryStore) -> Self {
        let counts = RecordKind::ALL
            .iter()
            .map(|&kind| (kind, store.count(kind)))
            .collect();
        let microwaves_in_stock = store
            .listings
            .items()
            .iter()
            .map(|listing| i64::from(listing.stock_quantity))
            .sum();
        let parts_to_reorder = store
            .parts
            .items()
            .iter()
            .filter(|part| part.needs_reorder())
            .map(|part| part.part_number.clone())
            .collect();

        Self {
            counts,
            microwaves_in_stock,
            parts_to_reorder,
        }
    }

    #[must_use]
    pub fn count(&self, kind: RecordKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, n)| *n)
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Microwave Workshop")?;
        writeln!(f, "Total microwaves in inventory: {}", self.microwaves_in_stock)?;
        for (kind, count) in &self.counts {
            writeln!(f, "  {kind:<12} {count}")?;
        }
        if self.parts_to_reorder.is_empty() {
            write!(f, "No parts need reordering")
        } else {
            write!(f, "Reorder: {}", self.parts_to_reorder.join(", "))
        }
    }
}
