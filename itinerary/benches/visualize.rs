use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use itinerary::{
    assembler::visualize,
    config::VisualizationConfig,
    events::NoopObserver,
    models::{Coordinate, DaySegment, Route, TripContext, TripType},
};

fn synthetic_route(points: usize, days: u32) -> Route {
    Route {
        coordinates: (0..points)
            .map(|i| {
                let t = i as f64 / points as f64;
                Coordinate::new(45.0 + t, 4.5 + (t * 20.0).sin() * 0.05)
            })
            .collect(),
        daily_routes: (1..=days)
            .map(|day| DaySegment {
                day,
                start_point: format!("Stage {day}"),
                end_point: format!("Stage {}", day + 1),
                distance: Some(80.0),
                waypoints: (0..4).map(|k| format!("POI {k}")).collect(),
            })
            .collect(),
        ..Route::default()
    }
}

fn benchmark_visualize(c: &mut Criterion) {
    let config = VisualizationConfig::default();
    let mut group = c.benchmark_group("visualize");

    for (name, points, days, trip_type) in [
        ("trekking_loop_2k", 2_000, 1, TripType::Trekking),
        ("cycling_5_days_10k", 10_000, 5, TripType::Cycling),
        ("cycling_14_days_50k", 50_000, 14, TripType::Cycling),
        ("fallback_10k", 10_000, 0, TripType::Other),
    ] {
        let route = synthetic_route(points, days);
        let ctx = TripContext::new(trip_type);
        group.bench_with_input(BenchmarkId::from_parameter(name), &route, |b, route| {
            b.iter(|| visualize(black_box(route), &ctx, &config, &NoopObserver));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_visualize);
criterion_main!(benches);
