use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{what} needs at least {min} segments, got {got}")]
    TooFewSegments {
        what: &'static str,
        min: u32,
        got: u32,
    },
    #[error("icosphere detail {got} exceeds the maximum of {max}")]
    TooDetailed { got: u32, max: u32 },
    #[error("{what} must be a positive finite length, got {got}")]
    BadLength { what: &'static str, got: f32 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("geometry: {0}")]
    Geometry(#[from] GeometryError),
    #[error("{what} must not be empty")]
    EmptyGroup { what: &'static str },
    #[error("{what} radius range [{min}, {max}] is invalid")]
    RadiusRange {
        what: &'static str,
        min: f32,
        max: f32,
    },
    #[error("field of view {0}° is outside (0, 180)")]
    FieldOfView(f32),
    #[error("unknown scene preset `{0}` (expected `hero` or `particles`)")]
    UnknownPreset(String),
}
