//! Per-verb route table with specificity ordering.
//!
//! Routes are kept sorted so that a linear first-match-wins scan always
//! lands on the most appropriate route. The comparator has three levels:
//!
//! 1. segment count, descending: structurally bigger schemes rank first;
//! 2. parameter-token count, descending: at equal length, schemes with
//!    *more* parameters rank first. This prefers wildcards over literals,
//!    the opposite of the usual "most specific wins" convention. It is the
//!    historical contract of this router and observable by callers, so it
//!    is preserved exactly rather than corrected;
//! 3. case-insensitive lexicographic order of the original scheme string,
//!    ascending.
//!
//! The comparator is total on distinct scheme strings and the sort is
//! stable, so the final order is a pure function of the registered scheme
//! set, independent of registration order.

use std::cmp::Ordering;

use crate::route::Route;

/// An ordered sequence of routes for one verb.
///
/// Re-sorted after every insertion; nothing else may reorder it.
#[derive(Default)]
pub(crate) struct Table {
    routes: Vec<Route>,
}

impl Table {
    pub(crate) fn insert(&mut self, route: Route) {
        self.routes.push(route);
        self.routes.sort_by(specificity);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

/// The three-level specificity comparator.
pub(crate) fn specificity(a: &Route, b: &Route) -> Ordering {
    let (a, b) = (a.scheme(), b.scheme());
    b.segment_count()
        .cmp(&a.segment_count())
        .then_with(|| b.param_count().cmp(&a.param_count()))
        .then_with(|| caseless(a.as_str(), b.as_str()))
}

/// ASCII-caseless byte comparison, `strcasecmp` semantics.
fn caseless(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}
