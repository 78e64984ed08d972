//! Result ranking for query categories.
//!
//! Each category is shown as a short list of representative routes, the
//! most expensive first.

use crate::domain::Priced;

/// Rank derived routes by price, highest first, keeping at most `top`.
///
/// The sort is stable: routes with equal prices keep the order the rule
/// engine produced them in.
pub fn rank<T: Priced>(mut rows: Vec<T>, top: usize) -> Vec<T> {
    rows.sort_by(|a, b| b.price().cmp(&a.price()));
    rows.truncate(top);
    rows
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{DirectRoute, Price, RouteId};
    use proptest::prelude::*;

    fn rows_strategy() -> impl Strategy<Value = Vec<DirectRoute>> {
        // Coarse prices so ties are common
        prop::collection::vec((0u32..100, 0u32..6), 0..20).prop_map(|rows| {
            rows.into_iter()
                .map(|(route, p)| DirectRoute {
                    route: RouteId::new(route),
                    price: Price::new(f64::from(p) * 5.0).unwrap(),
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn never_exceeds_top(rows in rows_strategy(), top in 0usize..8) {
            let expected = rows.len().min(top);
            let ranked = rank(rows, top);
            prop_assert_eq!(ranked.len(), expected);
        }

        #[test]
        fn sorted_descending(rows in rows_strategy(), top in 0usize..8) {
            let ranked = rank(rows, top);
            for window in ranked.windows(2) {
                prop_assert!(window[0].price >= window[1].price);
            }
        }

        #[test]
        fn keeps_the_most_expensive(rows in rows_strategy(), top in 1usize..8) {
            let ranked = rank(rows.clone(), top);
            if let Some(cheapest_kept) = ranked.last() {
                // Everything strictly dearer than the last kept row was kept
                let dearer = rows.iter().filter(|r| r.price > cheapest_kept.price).count();
                prop_assert!(dearer < ranked.len());
            }
        }

        #[test]
        fn stable_among_ties(rows in rows_strategy()) {
            let ranked = rank(rows.clone(), usize::MAX);
            for window in ranked.windows(2) {
                if window[0].price == window[1].price {
                    let first = rows.iter().position(|r| *r == window[0]);
                    let second = rows.iter().rposition(|r| *r == window[1]);
                    prop_assert!(first <= second);
                }
            }
        }
    }
}
