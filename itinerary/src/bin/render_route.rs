use std::{fs, path::PathBuf};

use clap::Parser;
use itinerary::{
    assembler::visualize,
    config::AppConfig,
    events::TracingObserver,
    gpx_export::visualization_to_gpx,
    models::{TripContext, TripType},
    payload::route_from_slice,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Render a generated route into map markers, polylines and bounds"
)]
struct Args {
    /// Route JSON as returned by the route generator (bare or wrapped)
    #[arg(long)]
    input: PathBuf,

    /// cycling, trekking, or anything else for the plain single-line rendering
    #[arg(long, default_value = "cycling")]
    trip_type: String,

    /// Day to compute focus bounds for
    #[arg(long)]
    day: Option<u32>,

    /// JSON configuration file (styles and viewport)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the visualization as a GPX document
    #[arg(long)]
    gpx: Option<PathBuf>,
}

impl Args {
    fn context(&self) -> TripContext {
        let trip_type = match self.trip_type.to_ascii_lowercase().as_str() {
            "cycling" => TripType::Cycling,
            "trekking" => TripType::Trekking,
            _ => TripType::Other,
        };
        TripContext {
            trip_type,
            day: self.day,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    let bytes = fs::read(&args.input)?;
    let route = route_from_slice(&bytes)?;
    tracing::info!(
        "loaded route from {:?}: {} points, {} day(s)",
        args.input,
        route.coordinates.len(),
        route.daily_routes.len()
    );

    let viz = visualize(&route, &args.context(), &config.visualization, &TracingObserver);
    tracing::info!(
        "markers={} polylines={}",
        viz.markers.len(),
        viz.polylines.len()
    );

    if let Some(path) = &args.gpx {
        fs::write(path, visualization_to_gpx(&viz)?)?;
        tracing::info!("GPX written to {:?}", path);
    }

    println!("{}", serde_json::to_string_pretty(&viz)?);
    Ok(())
}
