use itinerary::{
    assembler::visualize,
    config::VisualizationConfig,
    events::NoopObserver,
    models::{Coordinate, DaySegment, MarkerKind, Route, TripContext, TripType, Visualization},
};

fn run(route: &Route, trip_type: TripType) -> Visualization {
    visualize(
        route,
        &TripContext::new(trip_type),
        &VisualizationConfig::default(),
        &NoopObserver,
    )
}

/// 13 points around a circle, the last one closing back onto the first.
fn closed_loop() -> Vec<Coordinate> {
    let mut coords: Vec<Coordinate> = (0..12)
        .map(|i| {
            let angle = i as f64 / 12.0 * std::f64::consts::TAU;
            Coordinate::new(45.93 + 0.01 * angle.sin(), 4.57 + 0.01 * angle.cos())
        })
        .collect();
    coords.push(coords[0]);
    coords
}

#[test]
fn trekking_loop_splits_into_outbound_and_return() {
    let route = Route {
        coordinates: closed_loop(),
        daily_routes: vec![DaySegment {
            day: 1,
            start_point: "Combefort".into(),
            end_point: "Combefort".into(),
            distance: Some(11.5),
            waypoints: vec!["Forest Trail".into(), "Lake Shore".into()],
        }],
        ..Route::default()
    };

    let viz = run(&route, TripType::Trekking);

    assert_eq!(viz.polylines.len(), 2);
    let (outbound, ret) = (&viz.polylines[0], &viz.polylines[1]);
    assert_eq!(outbound.id, "outbound");
    assert_eq!(ret.id, "return");
    assert_eq!(outbound.coordinates.len(), 7);
    assert_eq!(ret.coordinates.len(), 7);
    assert_eq!(outbound.coordinates[6], route.coordinates[6]);
    assert_eq!(ret.coordinates[0], route.coordinates[6]);
    assert!(ret.is_dashed());

    let kinds: Vec<MarkerKind> = viz.markers.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MarkerKind::Start, MarkerKind::End]);
    assert_eq!(viz.markers[0].position, route.coordinates[0]);
    assert_eq!(viz.markers[1].position, route.coordinates[12]);
    assert_eq!(viz.markers[0].position, viz.markers[1].position);
}

#[test]
fn cycling_two_days_markers_and_polylines() {
    let coordinates: Vec<Coordinate> = (0..10)
        .map(|i| Coordinate::new(45.0 + i as f64 * 0.05, 4.8))
        .collect();
    let route = Route {
        coordinates: coordinates.clone(),
        daily_routes: vec![
            DaySegment {
                day: 1,
                ..DaySegment::default()
            },
            DaySegment {
                day: 2,
                ..DaySegment::default()
            },
        ],
        ..Route::default()
    };

    let viz = run(&route, TripType::Cycling);

    assert_eq!(viz.polylines.len(), 2);
    assert_eq!(viz.polylines[0].coordinates.len(), 6);
    assert_eq!(viz.polylines[1].coordinates.len(), 5);
    assert_ne!(viz.polylines[0].color, viz.polylines[1].color);

    let summary: Vec<(MarkerKind, Option<u32>, Coordinate)> = viz
        .markers
        .iter()
        .map(|m| (m.kind, m.day, m.position))
        .collect();
    assert_eq!(
        summary,
        vec![
            (MarkerKind::Start, Some(1), coordinates[0]),
            (MarkerKind::Waypoint, Some(1), coordinates[4]),
            (MarkerKind::DayStart, Some(2), coordinates[5]),
            (MarkerKind::End, Some(2), coordinates[9]),
        ]
    );
}

#[test]
fn empty_route_yields_empty_visualization() {
    for trip_type in [TripType::Cycling, TripType::Trekking, TripType::Other] {
        let viz = run(&Route::default(), trip_type);
        assert!(viz.markers.is_empty());
        assert!(viz.polylines.is_empty());
        assert!(viz.bounds.is_none());
        assert!(viz.viewport.is_none());
    }
}

#[test]
fn single_point_route_has_start_marker_only() {
    let route = Route {
        coordinates: vec![Coordinate::new(45.0, 5.0)],
        ..Route::default()
    };
    let viz = run(&route, TripType::Trekking);

    assert_eq!(viz.markers.len(), 1);
    assert_eq!(viz.markers[0].kind, MarkerKind::Start);
    assert!(viz.polylines.is_empty());
    let bounds = viz.bounds.unwrap();
    assert_eq!(bounds.min_lat, bounds.max_lat);
}

#[test]
fn trekking_route_without_days_falls_back_to_one_line() {
    let route = Route {
        coordinates: closed_loop(),
        ..Route::default()
    };
    let viz = run(&route, TripType::Trekking);
    let styles = VisualizationConfig::default().style.polylines;

    assert_eq!(viz.polylines.len(), 1);
    assert_eq!(viz.polylines[0].coordinates, route.coordinates);
    assert_eq!(viz.polylines[0].color, styles.fallback_trekking.color);
    assert!(!viz.polylines[0].is_dashed());

    let kinds: Vec<MarkerKind> = viz.markers.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MarkerKind::Start, MarkerKind::End]);
}

#[test]
fn serialized_output_uses_camel_case() {
    let route = Route {
        coordinates: closed_loop(),
        daily_routes: vec![DaySegment {
            day: 1,
            ..DaySegment::default()
        }],
        ..Route::default()
    };
    let json = serde_json::to_value(run(&route, TripType::Trekking)).unwrap();

    assert_eq!(json["markers"][0]["type"], "start");
    assert_eq!(json["polylines"][1]["dashArray"], "10, 10");
    assert!(json["viewport"]["maxZoom"].is_number());
    assert!(json.get("focusBounds").is_none());
}
