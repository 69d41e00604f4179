use thiserror::Error;

use crate::payload::PayloadError;

#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("failed to build GPX document: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
    #[error("invalid route payload: {0}")]
    Payload(#[from] PayloadError),
}
