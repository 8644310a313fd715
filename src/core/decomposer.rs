use crate::domain::model::{Catalog, Decomposition};
use std::collections::BTreeSet;

/// Greedy largest-first Fibonacci decomposition of `target` over `catalog`.
///
/// Makes exactly one pass over the catalog in priority order, taking every site
/// that still fits. Targets above the catalog total keep the uncovered part in
/// `residual` rather than failing.
pub fn decompose(target: u32, catalog: &Catalog) -> Decomposition {
    let mut remaining = target;
    let mut sites = BTreeSet::new();

    for site in catalog.by_priority() {
        if remaining >= site.size {
            remaining -= site.size;
            sites.insert(site.id);
        }
    }

    if remaining > 0 {
        tracing::debug!(
            "Target {} exceeds catalog coverage, residual {}",
            target,
            remaining
        );
    }

    Decomposition {
        target,
        sites,
        residual: remaining,
    }
}
