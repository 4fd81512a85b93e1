//! Unit tests for tc-catalogue.

#[cfg(test)]
mod helpers {
    use tc_core::Coordinates;
    use crate::Catalogue;

    /// Three stops along a meridian-ish line, no distances yet.
    pub fn three_stops() -> Catalogue {
        let mut c = Catalogue::new();
        c.add_stop("A", Coordinates::new(55.611087, 37.20829)).unwrap();
        c.add_stop("B", Coordinates::new(55.595884, 37.209755)).unwrap();
        c.add_stop("C", Coordinates::new(55.632761, 37.333324)).unwrap();
        c
    }
}

// ── Stops & routes ────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use tc_core::{Coordinates, RouteId, StopId};
    use crate::{Catalogue, CatalogueError};

    #[test]
    fn stops_get_sequential_ids() {
        let c = super::helpers::three_stops();
        assert_eq!(c.stop_id("A"), Some(StopId(0)));
        assert_eq!(c.stop_id("C"), Some(StopId(2)));
        assert_eq!(c.stop_count(), 3);
        assert_eq!(c.stop("B").unwrap().coordinates.lat, 55.595884);
    }

    #[test]
    fn duplicate_stop_rejected() {
        let mut c = super::helpers::three_stops();
        let err = c.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap_err();
        assert_eq!(err, CatalogueError::DuplicateStop("A".into()));
        // Original record untouched.
        assert_eq!(c.stop("A").unwrap().coordinates.lat, 55.611087);
        assert_eq!(c.stop_count(), 3);
    }

    #[test]
    fn route_registers_through_stops() {
        let mut c = super::helpers::three_stops();
        let id = c.add_route("750", &["A", "B", "C"], false).unwrap();
        assert_eq!(id, RouteId(0));
        assert_eq!(c.route("750").unwrap().stops, vec![StopId(0), StopId(1), StopId(2)]);
        for stop in ["A", "B", "C"] {
            assert!(c.routes_through_stop(stop).unwrap().contains("750"));
        }
    }

    #[test]
    fn duplicate_route_rejected() {
        let mut c = super::helpers::three_stops();
        c.add_route("750", &["A", "B"], false).unwrap();
        let err = c.add_route("750", &["B", "C"], false).unwrap_err();
        assert_eq!(err, CatalogueError::DuplicateRoute("750".into()));
        assert!(c.routes_through_stop("C").unwrap().is_empty());
    }

    #[test]
    fn unknown_stop_leaves_catalogue_untouched() {
        let mut c = super::helpers::three_stops();
        let before = c.revision();
        let err = c.add_route("X", &["A", "Nowhere"], false).unwrap_err();
        assert_eq!(err, CatalogueError::UnknownStop("Nowhere".into()));
        assert!(c.route("X").is_none());
        assert!(c.routes_through_stop("A").unwrap().is_empty());
        assert_eq!(c.revision(), before);
    }

    #[test]
    fn empty_route_rejected() {
        let mut c = super::helpers::three_stops();
        let none: [&str; 0] = [];
        assert_eq!(c.add_route("E", &none, true), Err(CatalogueError::EmptyRoute("E".into())));
    }

    #[test]
    fn open_round_trip_rejected() {
        let mut c = super::helpers::three_stops();
        let err = c.add_route("O", &["A", "B", "C"], true).unwrap_err();
        assert!(matches!(err, CatalogueError::OpenRoundTrip { .. }));
        assert!(c.route("O").is_none());
    }

    #[test]
    fn routes_through_stop_sorted_and_distinguishes_unknown() {
        let mut c = super::helpers::three_stops();
        c.add_route("828", &["A", "B", "A"], true).unwrap();
        c.add_route("256", &["B", "C"], false).unwrap();

        let through_b: Vec<&str> = c.routes_through_stop("B").unwrap().into_iter().collect();
        assert_eq!(through_b, vec!["256", "828"]);

        // Known stop, no routes vs. unknown stop.
        let mut c2 = super::helpers::three_stops();
        c2.add_route("1", &["A", "B"], false).unwrap();
        assert_eq!(c2.routes_through_stop("C").map(|s| s.len()), Some(0));
        assert!(c2.routes_through_stop("Z").is_none());
    }

    #[test]
    fn revisited_stop_counted_once_in_index() {
        let mut c = super::helpers::three_stops();
        c.add_route("L", &["A", "B", "A"], true).unwrap();
        assert_eq!(c.routes_through_stop("A").unwrap().len(), 1);
    }

    #[test]
    fn every_catalogue_has_its_own_instance() {
        let a = super::helpers::three_stops();
        let b = super::helpers::three_stops();
        assert_ne!(a.instance(), b.instance());

        let copy = a.clone();
        assert_ne!(copy.instance(), a.instance());
        assert_eq!(copy.revision(), a.revision());
        assert_eq!(copy.stop_id("C"), a.stop_id("C"));
    }

    #[test]
    fn every_mutation_bumps_revision() {
        let mut c = Catalogue::new();
        assert_eq!(c.revision(), 0);
        c.add_stop("A", Coordinates::default()).unwrap();
        c.add_stop("B", Coordinates::default()).unwrap();
        c.add_distance("A", "B", 10).unwrap();
        c.add_route("R", &["A", "B"], false).unwrap();
        assert_eq!(c.revision(), 4);
    }
}

// ── Distances ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod distances {
    use crate::CatalogueError;
    use proptest::{prop_assert_eq, proptest};

    #[test]
    fn forward_fills_reverse() {
        let mut c = super::helpers::three_stops();
        c.add_distance("A", "B", 100).unwrap();
        assert_eq!(c.distance("A", "B"), Ok(100));
        assert_eq!(c.distance("B", "A"), Ok(100));
        assert!(c.distances().is_explicit(c.stop_id("A").unwrap(), c.stop_id("B").unwrap()));
        assert!(!c.distances().is_explicit(c.stop_id("B").unwrap(), c.stop_id("A").unwrap()));
    }

    #[test]
    fn explicit_reverse_overrides_fallback() {
        let mut c = super::helpers::three_stops();
        c.add_distance("A", "B", 100).unwrap();
        c.add_distance("B", "A", 150).unwrap();
        assert_eq!(c.distance("A", "B"), Ok(100));
        assert_eq!(c.distance("B", "A"), Ok(150));
    }

    #[test]
    fn explicit_reverse_survives_later_forward() {
        let mut c = super::helpers::three_stops();
        c.add_distance("B", "A", 150).unwrap();
        c.add_distance("A", "B", 100).unwrap();
        assert_eq!(c.distance("B", "A"), Ok(150));
        assert_eq!(c.distance("A", "B"), Ok(100));
    }

    #[test]
    fn filled_in_reverse_is_not_rewritten() {
        let mut c = super::helpers::three_stops();
        c.add_distance("A", "C", 300).unwrap();
        c.add_distance("A", "C", 320).unwrap();
        assert_eq!(c.distance("A", "C"), Ok(320));
        assert_eq!(c.distance("C", "A"), Ok(300));
        // An explicit reverse still replaces the filled-in value.
        c.add_distance("C", "A", 310).unwrap();
        assert_eq!(c.distance("C", "A"), Ok(310));
        assert_eq!(c.distance("A", "C"), Ok(320));
    }

    #[test]
    fn fallback_entries_count_as_resolvable_pairs() {
        let mut c = super::helpers::three_stops();
        c.add_distance("A", "B", 100).unwrap();
        assert_eq!(c.distances().len(), 2);
        c.add_distance("B", "A", 150).unwrap();
        assert_eq!(c.distances().len(), 2);
        c.add_distance("C", "C", 10).unwrap();
        assert_eq!(c.distances().len(), 3);
    }

    #[test]
    fn self_distance() {
        let mut c = super::helpers::three_stops();
        c.add_distance("A", "A", 40).unwrap();
        assert_eq!(c.distance("A", "A"), Ok(40));
    }

    #[test]
    fn missing_distance_is_error() {
        let c = super::helpers::three_stops();
        assert_eq!(
            c.distance("A", "C"),
            Err(CatalogueError::NoDistanceData { from: "A".into(), to: "C".into() })
        );
    }

    #[test]
    fn unknown_stop_in_distance() {
        let mut c = super::helpers::three_stops();
        assert_eq!(c.add_distance("A", "Q", 5), Err(CatalogueError::UnknownStop("Q".into())));
        assert!(c.distances().is_empty());
    }

    proptest! {
        #[test]
        fn reverse_falls_back_to_forward(meters in 0u32..1_000_000, from in 0usize..3, to in 0usize..3) {
            let names = ["A", "B", "C"];
            let mut c = super::helpers::three_stops();
            c.add_distance(names[from], names[to], meters).unwrap();
            prop_assert_eq!(c.distance(names[to], names[from]), Ok(meters));
        }
    }
}

// ── Route statistics ──────────────────────────────────────────────────────────

#[cfg(test)]
mod route_info {
    use tc_core::Coordinates;
    use crate::{Catalogue, CatalogueError};

    #[test]
    fn round_trip_counts_stored_entries() {
        let mut c = super::helpers::three_stops();
        c.add_distance("A", "B", 100).unwrap();
        c.add_route("L", &["A", "B", "A"], true).unwrap();
        let info = c.route_info("L").unwrap();
        assert_eq!(info.stop_count, 3);
        assert_eq!(info.unique_stop_count, 2);
        assert_eq!(info.route_length, 200);
    }

    #[test]
    fn traversal_unfolds_out_and_back_only() {
        let mut c = super::helpers::three_stops();
        c.add_route("line", &["A", "B", "C"], false).unwrap();
        c.add_route("loop", &["A", "B", "C", "A"], true).unwrap();

        let line = c.route("line").unwrap();
        let names: Vec<&str> = line.traversal().map(|id| c.stop_by_id(id).name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "B", "A"]);
        assert_eq!(line.traversal_len(), 5);

        let ring = c.route("loop").unwrap();
        assert_eq!(ring.traversal().count(), 4);
        assert_eq!(ring.traversal_len(), 4);
    }

    #[test]
    fn out_and_back_unfolds_and_honours_direction() {
        let mut c = super::helpers::three_stops();
        c.add_distance("A", "B", 100).unwrap();
        c.add_distance("B", "C", 200).unwrap();
        c.add_distance("B", "A", 150).unwrap();
        c.add_distance("C", "B", 250).unwrap();
        c.add_route("750", &["A", "B", "C"], false).unwrap();
        let info = c.route_info("750").unwrap();
        assert_eq!(info.stop_count, 5);
        assert_eq!(info.unique_stop_count, 3);
        assert_eq!(info.route_length, 100 + 200 + 250 + 150);
    }

    #[test]
    fn curvature_is_road_over_great_circle() {
        let mut c = Catalogue::new();
        c.add_stop("P", Coordinates::new(30.0, -88.0)).unwrap();
        c.add_stop("Q", Coordinates::new(31.0, -88.0)).unwrap();
        let geo = Coordinates::new(30.0, -88.0).distance_m(Coordinates::new(31.0, -88.0));
        c.add_distance("P", "Q", 150_000).unwrap();
        c.add_route("R", &["P", "Q"], false).unwrap();
        let info = c.route_info("R").unwrap();
        let expected = 300_000.0 / (2.0 * geo);
        assert!((info.curvature - expected).abs() < 1e-9, "got {}", info.curvature);
        assert!(info.curvature > 1.0);
    }

    #[test]
    fn single_stop_route_has_zero_curvature() {
        let mut c = super::helpers::three_stops();
        c.add_route("S", &["A"], false).unwrap();
        let info = c.route_info("S").unwrap();
        assert_eq!(info.stop_count, 1);
        assert_eq!(info.route_length, 0);
        assert_eq!(info.curvature, 0.0);
    }

    #[test]
    fn unknown_route() {
        let c = super::helpers::three_stops();
        assert_eq!(c.route_info("404"), Err(CatalogueError::UnknownRoute("404".into())));
    }

    #[test]
    fn missing_hop_distance() {
        let mut c = super::helpers::three_stops();
        c.add_distance("A", "B", 100).unwrap();
        c.add_route("750", &["A", "B", "C"], false).unwrap();
        assert!(matches!(c.route_info("750"), Err(CatalogueError::NoDistanceData { .. })));
    }
}
