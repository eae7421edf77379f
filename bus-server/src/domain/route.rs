//! Routes and the direct-reachability matcher.

use std::fmt;

use tracing::{debug, trace};

use super::StopId;

/// One bus route: the ordered sequence of stops a vehicle calls at, in
/// traversal order.
///
/// A stop may appear more than once (loop routes); order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<StopId>,
}

impl Route {
    /// Create a route from its stop sequence.
    pub fn new(stops: Vec<StopId>) -> Self {
        Route { stops }
    }

    /// Returns the stop sequence in traversal order.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Whether `to` appears at or after the first occurrence of `from`.
    ///
    /// Traversal is directional: stops before `from` are not reachable
    /// from it, and when a stop repeats, the first occurrence of `from`
    /// bounds the search for `to`.
    fn reaches(&self, from: StopId, to: StopId) -> bool {
        match self.stops.iter().position(|&stop| stop == from) {
            Some(idx) => self.stops[idx..].contains(&to),
            None => false,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for stop in &self.stops {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{stop}")?;
            first = false;
        }
        Ok(())
    }
}

/// All known routes, in dataset order.
///
/// Built once at startup and never mutated afterwards, so request
/// handlers share it without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Create a route set, preserving the given order.
    pub fn new(routes: Vec<Route>) -> Self {
        RouteSet { routes }
    }

    /// Number of routes in the set.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the set holds no routes at all.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the routes in dataset order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Decide whether a single route runs directly from `from` to `to`.
    ///
    /// A stop is never direct to itself. Routes are scanned in dataset
    /// order and the scan stops at the first route in which `to` appears
    /// at or after the first occurrence of `from`. Stops are compared as
    /// whole integers, so stop 1 never matches inside stop 12.
    ///
    /// `trace_scan` enables a log line per candidate route scanned.
    pub fn is_direct(&self, from: StopId, to: StopId, trace_scan: bool) -> bool {
        if from == to {
            debug!(%from, %to, direct = false, "stop is never direct to itself");
            return false;
        }

        for (idx, route) in self.routes.iter().enumerate() {
            if trace_scan {
                trace!(route = idx, stops = %route, "scanning route");
            }
            if route.reaches(from, to) {
                debug!(%from, %to, direct = true, matched_route = idx, "query resolved");
                return true;
            }
        }

        debug!(%from, %to, direct = false, "query resolved");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(n: i32) -> StopId {
        StopId::new(n).unwrap()
    }

    fn route(stops: &[i32]) -> Route {
        Route::new(stops.iter().copied().map(stop).collect())
    }

    fn set(routes: &[&[i32]]) -> RouteSet {
        RouteSet::new(routes.iter().map(|r| route(r)).collect())
    }

    #[test]
    fn forward_pair_is_direct() {
        let routes = set(&[&[1, 2, 3, 4]]);
        assert!(routes.is_direct(stop(1), stop(4), false));
        assert!(routes.is_direct(stop(1), stop(2), false));
        assert!(routes.is_direct(stop(3), stop(4), false));
    }

    #[test]
    fn reverse_pair_is_not_direct() {
        let routes = set(&[&[1, 2, 3, 4]]);
        assert!(!routes.is_direct(stop(4), stop(1), false));
        assert!(!routes.is_direct(stop(2), stop(1), false));
    }

    #[test]
    fn stop_is_never_direct_to_itself() {
        let routes = set(&[&[1, 2, 3, 1]]);
        assert!(!routes.is_direct(stop(1), stop(1), false));
        assert!(!routes.is_direct(stop(5), stop(5), false));
    }

    #[test]
    fn absent_stops_are_not_direct() {
        let routes = set(&[&[1, 2, 3]]);
        assert!(!routes.is_direct(stop(1), stop(5), false));
        assert!(!routes.is_direct(stop(5), stop(1), false));
        assert!(!routes.is_direct(stop(5), stop(6), false));
    }

    #[test]
    fn later_route_still_matches_after_wrong_direction() {
        // First route has the pair the wrong way round; the second has it
        // in traversal order.
        let routes = set(&[&[2, 1], &[1, 2]]);
        assert!(routes.is_direct(stop(1), stop(2), false));
    }

    #[test]
    fn first_occurrence_of_from_bounds_the_search() {
        // `from` repeats: 3 appears after the first occurrence of 7, so
        // the pair is direct even though 3 precedes the second 7.
        let routes = set(&[&[7, 1, 3, 7, 9]]);
        assert!(routes.is_direct(stop(7), stop(3), false));
        // 5 only appears before the first occurrence of 1.
        let routes = set(&[&[5, 1, 2]]);
        assert!(!routes.is_direct(stop(1), stop(5), false));
    }

    #[test]
    fn matching_is_whole_stop_not_textual() {
        let routes = set(&[&[12, 34]]);
        assert!(!routes.is_direct(stop(1), stop(2), false));
        assert!(!routes.is_direct(stop(1), stop(34), false));
        assert!(!routes.is_direct(stop(12), stop(3), false));
        assert!(!routes.is_direct(stop(12), stop(4), false));
        assert!(routes.is_direct(stop(12), stop(34), false));
    }

    #[test]
    fn empty_set_never_matches() {
        let routes = RouteSet::default();
        assert!(routes.is_empty());
        assert!(!routes.is_direct(stop(1), stop(2), false));
    }

    #[test]
    fn route_display_is_space_separated() {
        assert_eq!(route(&[1, 12, 3]).to_string(), "1 12 3");
        assert_eq!(route(&[]).to_string(), "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn stop(n: i32) -> StopId {
        StopId::new(n).unwrap()
    }

    /// Stop sequences drawn from a small id space so duplicates occur.
    fn stop_values() -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(1..10_000i32, 2..40)
    }

    /// A stop sequence together with an ordered index pair i < j.
    fn stops_with_ordered_pair() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
        stop_values()
            .prop_flat_map(|stops| {
                let len = stops.len();
                (Just(stops), 0..len - 1)
            })
            .prop_flat_map(|(stops, i)| {
                let len = stops.len();
                (Just(stops), Just(i), (i + 1)..len)
            })
    }

    fn single_route(values: &[i32]) -> RouteSet {
        RouteSet::new(vec![Route::new(values.iter().map(|&n| stop(n)).collect())])
    }

    proptest! {
        /// Any pair taken in traversal order from one route is direct.
        #[test]
        fn ordered_pair_is_direct((values, i, j) in stops_with_ordered_pair()) {
            let (a, b) = (values[i], values[j]);
            prop_assume!(a != b);
            prop_assert!(single_route(&values).is_direct(stop(a), stop(b), false));
        }

        /// A stop is never direct to itself, whether on a route or not.
        #[test]
        fn self_pair_never_direct(values in stop_values(), n in 1..20_000i32) {
            prop_assert!(!single_route(&values).is_direct(stop(n), stop(n), false));
        }

        /// A stop outside the id space of every route is never reachable.
        #[test]
        fn absent_stop_never_direct(values in stop_values(), n in 10_000..20_000i32) {
            let routes = single_route(&values);
            prop_assert!(!routes.is_direct(stop(values[0]), stop(n), false));
            prop_assert!(!routes.is_direct(stop(n), stop(values[0]), false));
        }
    }
}
