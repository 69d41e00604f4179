use std::{
    fs::File,
    io::{self, Read},
    net::SocketAddr,
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::models::{MarkerColor, TripType};

pub const CONFIG_PATH_ENV: &str = "ITINERARY_CONFIG";
pub const LISTEN_ADDR_ENV: &str = "ITINERARY_ADDR";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid listen address {0:?}")]
    InvalidAddr(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    /// Any value makes the stroke dashed.
    pub dash_array: Option<String>,
}

impl StrokeStyle {
    fn solid(color: &str) -> Self {
        Self {
            color: color.to_string(),
            ..Self::default()
        }
    }

    fn dashed(color: &str, dash_array: &str) -> Self {
        Self {
            color: color.to_string(),
            dash_array: Some(dash_array.to_string()),
            ..Self::default()
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "#3b82f6".to_string(),
            weight: 4.0,
            opacity: 0.8,
            dash_array: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylineStyles {
    pub trekking_outbound: StrokeStyle,
    pub trekking_return: StrokeStyle,
    pub cycling_first_day: StrokeStyle,
    pub cycling_later_days: StrokeStyle,
    pub fallback_cycling: StrokeStyle,
    pub fallback_trekking: StrokeStyle,
    pub fallback_other: StrokeStyle,
}

impl Default for PolylineStyles {
    fn default() -> Self {
        Self {
            trekking_outbound: StrokeStyle::solid("#10b981"),
            trekking_return: StrokeStyle::dashed("#f59e0b", "10, 10"),
            cycling_first_day: StrokeStyle::solid("#3b82f6"),
            cycling_later_days: StrokeStyle::solid("#8b5cf6"),
            fallback_cycling: StrokeStyle::solid("#3b82f6"),
            fallback_trekking: StrokeStyle::solid("#10b981"),
            fallback_other: StrokeStyle::solid("#6366f1"),
        }
    }
}

impl PolylineStyles {
    pub fn fallback_for(&self, trip_type: TripType) -> &StrokeStyle {
        match trip_type {
            TripType::Cycling => &self.fallback_cycling,
            TripType::Trekking => &self.fallback_trekking,
            TripType::Other => &self.fallback_other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyles {
    pub start: MarkerColor,
    pub end: MarkerColor,
    pub day_start: MarkerColor,
    pub cycling_waypoint: MarkerColor,
    pub trekking_waypoint: MarkerColor,
}

impl Default for MarkerStyles {
    fn default() -> Self {
        Self {
            start: MarkerColor::Green,
            end: MarkerColor::Red,
            day_start: MarkerColor::Purple,
            cycling_waypoint: MarkerColor::Orange,
            trekking_waypoint: MarkerColor::Green,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub markers: MarkerStyles,
    pub polylines: PolylineStyles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub padding: u32,
    pub max_zoom: u8,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            padding: 50,
            max_zoom: 15,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    pub style: StyleConfig,
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub listen_addr: String,
    #[serde(flatten)]
    pub visualization: VisualizationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            visualization: VisualizationConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, ConfigError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(serde_json::from_str(&buf)?)
    }

    /// Optional file from `ITINERARY_CONFIG`, then `ITINERARY_ADDR` on top.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!("loading configuration from {path}");
                Self::from_file(path)?
            }
            Err(_) => Self::default(),
        };
        if let Ok(addr) = std::env::var(LISTEN_ADDR_ENV) {
            config.listen_addr = addr;
        }
        config.socket_addr()?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(self.listen_addr.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_reproduce_visual_mapping() {
        let style = StyleConfig::default();
        assert_eq!(style.markers.start, MarkerColor::Green);
        assert_eq!(style.markers.end, MarkerColor::Red);
        assert_eq!(style.markers.day_start, MarkerColor::Purple);
        assert_eq!(style.markers.cycling_waypoint, MarkerColor::Orange);
        assert_eq!(style.markers.trekking_waypoint, MarkerColor::Green);

        assert!(style.polylines.trekking_outbound.dash_array.is_none());
        assert!(style.polylines.trekking_return.dash_array.is_some());
        assert_ne!(
            style.polylines.cycling_first_day.color,
            style.polylines.cycling_later_days.color
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"viewport": {{"max_zoom": 12}}, "style": {{"polylines": {{"trekking_return": {{"color": "#000000"}}}}}}}}"##
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.visualization.viewport.max_zoom, 12);
        assert_eq!(config.visualization.viewport.padding, 50);

        let ret = &config.visualization.style.polylines.trekking_return;
        assert_eq!(ret.color, "#000000");
        assert_eq!(ret.weight, 4.0);
        // Nested structs fall back to their own Default, which is solid.
        assert!(ret.dash_array.is_none());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            AppConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_bad_listen_addr() {
        let config = AppConfig {
            listen_addr: "nowhere".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddr(_))
        ));
    }
}
