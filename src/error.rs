use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or configuring a simulation.
///
/// Stepping and rasterizing never fail: out-of-range coordinates are clamped
/// into the grid instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Grid width or height was not positive.
    #[error("invalid grid dimension: {width}x{height} (both must be > 0)")]
    InvalidDimension { width: i64, height: i64 },

    /// Particle radius was negative.
    #[error("invalid particle radius: {0} (must be >= 0)")]
    InvalidRadius(i64),

    /// Handle does not refer to a particle of this simulation.
    #[error("unknown particle handle: {0}")]
    UnknownParticle(usize),

    /// A physics constant is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Scene JSON could not be parsed.
    #[error("malformed scene config: {0}")]
    Config(#[from] serde_json::Error),

    /// Scene file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::InvalidDimension {
            width: 0,
            height: 12,
        };
        let msg = e.to_string();
        assert!(msg.contains("0x12"));

        let e = Error::InvalidRadius(-3);
        assert!(e.to_string().contains("-3"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
