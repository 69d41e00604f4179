use crate::{
    config::MarkerStyles,
    events::{VisualizationEvent, VisualizationObserver},
    models::{Coordinate, DaySegment, Marker, MarkerIcon, MarkerKind, Route, TripType},
    segmenter::{DayRange, segment},
};

/// Markers for one route, in `dailyRoutes` order: start, end, then sampled
/// waypoints of each day.
///
/// Without daily routes only the first and last coordinates are marked.
/// Trekking loops keep their named waypoints off the map; their labels are
/// carried by the day metadata only.
pub fn generate_markers(
    route: &Route,
    trip_type: TripType,
    styles: &MarkerStyles,
    observer: &dyn VisualizationObserver,
) -> Vec<Marker> {
    if route.daily_routes.is_empty() {
        return fallback_markers(route, styles);
    }

    let coords = &route.coordinates;
    let segmentation = segment(coords.len(), route.daily_routes.len());
    let painter = MarkerPainter { trip_type, styles };
    let mut markers = Vec::new();

    for (position, (day, range)) in route
        .daily_routes
        .iter()
        .zip(&segmentation.ranges)
        .enumerate()
    {
        let Some(range) = range else {
            observer.on_event(&VisualizationEvent::DayRangeSkipped {
                day: day.day,
                position,
            });
            continue;
        };
        let ordinal = position + 1;

        if let Some(&coord) = coords.get(range.start) {
            let kind = if position == 0 {
                MarkerKind::Start
            } else {
                MarkerKind::DayStart
            };
            markers.push(painter.day_start(kind, ordinal, day, coord));
        }

        if let Some(&coord) = coords.get(range.end) {
            let kind = if segmentation.is_last(position) {
                MarkerKind::End
            } else {
                MarkerKind::Waypoint
            };
            markers.push(painter.day_end(kind, ordinal, day, coord));
        }

        if trip_type == TripType::Trekking || day.waypoints.is_empty() {
            continue;
        }

        let sampled = sample_waypoints(coords, range, segmentation.points_per_day, day);
        let dropped = day.waypoints.len() - sampled.len();
        if dropped > 0 {
            observer.on_event(&VisualizationEvent::WaypointsDropped {
                day: day.day,
                dropped,
            });
        }
        markers.extend(
            sampled
                .into_iter()
                .map(|(k, label, coord)| painter.named_waypoint(ordinal, k, day, label, coord)),
        );
    }

    markers
}

/// Evenly spaced samples inside the day, strictly before its last index.
fn sample_waypoints<'a>(
    coords: &[Coordinate],
    range: &DayRange,
    points_per_day: usize,
    day: &'a DaySegment,
) -> Vec<(usize, &'a str, Coordinate)> {
    let step = (points_per_day / (day.waypoints.len() + 1)).max(1);

    day.waypoints
        .iter()
        .enumerate()
        .filter_map(|(i, label)| {
            let k = i + 1;
            let index = range.start + k * step;
            if index >= range.end {
                return None;
            }
            coords.get(index).map(|&coord| (k, label.as_str(), coord))
        })
        .collect()
}

fn fallback_markers(route: &Route, styles: &MarkerStyles) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(2);

    if let Some(&first) = route.coordinates.first() {
        markers.push(Marker {
            id: "start".into(),
            position: first,
            kind: MarkerKind::Start,
            title: "Start".into(),
            description: "Route start".into(),
            day: None,
            distance: None,
            waypoint: None,
            icon: MarkerIcon {
                color: styles.start,
                label: None,
            },
        });
    }

    if let [_, .., last] = route.coordinates.as_slice() {
        markers.push(Marker {
            id: "end".into(),
            position: *last,
            kind: MarkerKind::End,
            title: "End".into(),
            description: "Route end".into(),
            day: None,
            distance: route.total_distance,
            waypoint: None,
            icon: MarkerIcon {
                color: styles.end,
                label: None,
            },
        });
    }

    markers
}

struct MarkerPainter<'a> {
    trip_type: TripType,
    styles: &'a MarkerStyles,
}

impl MarkerPainter<'_> {
    fn icon(&self, kind: MarkerKind, day: u32) -> MarkerIcon {
        let color = match kind {
            MarkerKind::Start => self.styles.start,
            MarkerKind::End => self.styles.end,
            MarkerKind::DayStart => self.styles.day_start,
            MarkerKind::Waypoint if self.trip_type == TripType::Trekking => {
                self.styles.trekking_waypoint
            }
            MarkerKind::Waypoint => self.styles.cycling_waypoint,
        };
        let label = (kind == MarkerKind::DayStart).then(|| day.to_string());
        MarkerIcon { color, label }
    }

    fn day_start(
        &self,
        kind: MarkerKind,
        ordinal: usize,
        day: &DaySegment,
        position: Coordinate,
    ) -> Marker {
        let title = match kind {
            MarkerKind::Start => with_label("Start", &day.start_point),
            _ => with_label(&format!("Day {}", day.day), &day.start_point),
        };
        Marker {
            id: format!("start-day-{ordinal}"),
            position,
            kind,
            title,
            description: day_description(day),
            day: Some(day.day),
            distance: day.distance,
            waypoint: None,
            icon: self.icon(kind, day.day),
        }
    }

    fn day_end(
        &self,
        kind: MarkerKind,
        ordinal: usize,
        day: &DaySegment,
        position: Coordinate,
    ) -> Marker {
        let title = match kind {
            MarkerKind::End => with_label("End", &day.end_point),
            _ => with_label(&format!("End of day {}", day.day), &day.end_point),
        };
        Marker {
            id: format!("end-day-{ordinal}"),
            position,
            kind,
            title,
            description: day_description(day),
            day: Some(day.day),
            distance: day.distance,
            waypoint: None,
            icon: self.icon(kind, day.day),
        }
    }

    fn named_waypoint(
        &self,
        ordinal: usize,
        k: usize,
        day: &DaySegment,
        label: &str,
        position: Coordinate,
    ) -> Marker {
        Marker {
            id: format!("waypoint-day-{ordinal}-{k}"),
            position,
            kind: MarkerKind::Waypoint,
            title: label.to_string(),
            description: format!("Day {} waypoint {k}", day.day),
            day: Some(day.day),
            distance: None,
            waypoint: Some(label.to_string()),
            icon: self.icon(MarkerKind::Waypoint, day.day),
        }
    }
}

fn with_label(prefix: &str, label: &str) -> String {
    if label.trim().is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}: {label}")
    }
}

fn day_description(day: &DaySegment) -> String {
    match day.distance {
        Some(km) => format!("Day {} · {km:.1} km", day.day),
        None => format!("Day {}", day.day),
    }
}
