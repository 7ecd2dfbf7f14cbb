use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AdvectionError {
    #[error("need at least 2 spatial nodes. got {got}")]
    TooFewNodes { got: usize },

    #[error("invalid Courant number: must be finite and > 0. got {got}")]
    InvalidCourant { got: f64 },

    #[error("invalid speed: must be finite and > 0. got {got}")]
    InvalidSpeed { got: f64 },

    #[error("time grid too large: {layers} layers")]
    TooManyLayers { layers: f64 },
}
