//! Structured notifications emitted while a route is turned into map layers.
//!
//! The transform stays free of side effects: it only reports what happened to
//! the observer it was handed, and the caller decides whether that ends up in
//! logs, metrics or nowhere.

#[derive(Debug, Clone, PartialEq)]
pub enum VisualizationEvent {
    MarkersGenerated { count: usize },
    PolylinesBuilt { count: usize },
    /// A day whose index range holds no coordinate. `position` is 0-based.
    DayRangeSkipped { day: u32, position: usize },
    WaypointsDropped { day: u32, dropped: usize },
    BoundsSkipped,
}

pub trait VisualizationObserver: Send + Sync {
    fn on_event(&self, event: &VisualizationEvent);
}

impl<F> VisualizationObserver for F
where
    F: Fn(&VisualizationEvent) + Send + Sync,
{
    fn on_event(&self, event: &VisualizationEvent) {
        self(event)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl VisualizationObserver for NoopObserver {
    fn on_event(&self, _event: &VisualizationEvent) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl VisualizationObserver for TracingObserver {
    fn on_event(&self, event: &VisualizationEvent) {
        match event {
            VisualizationEvent::MarkersGenerated { count } => {
                tracing::debug!("generated {count} markers");
            }
            VisualizationEvent::PolylinesBuilt { count } => {
                tracing::debug!("built {count} polylines");
            }
            VisualizationEvent::DayRangeSkipped { day, position } => {
                tracing::debug!("day {day} (#{position}) has no coordinates, skipped");
            }
            VisualizationEvent::WaypointsDropped { day, dropped } => {
                tracing::debug!("day {day}: dropped {dropped} waypoint label(s) without a free sample");
            }
            VisualizationEvent::BoundsSkipped => {
                tracing::debug!("route has no coordinates, bounds skipped");
            }
        }
    }
}
