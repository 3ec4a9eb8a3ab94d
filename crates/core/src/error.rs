//! Error types for the blobfield core.

use thiserror::Error;

/// Errors produced by configuration setters and export.
///
/// The per-frame simulation never fails; every variant here is raised at a
/// setter boundary before bad state can reach the tick.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Canvas width or height was zero, negative, or not finite.
    #[error("invalid dimensions: width and height must be finite and positive")]
    InvalidDimensions,

    /// A numeric parameter was negative or not finite.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParam { name: String, value: f64 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A single-entry palette edit addressed a missing slot.
    #[error("palette index {index} out of range for palette of length {len}")]
    PaletteIndexOutOfRange { index: usize, len: usize },

    /// A palette name was not one of the built-ins.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// Writing an export artifact failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = EngineError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_param_includes_name_and_value() {
        let err = EngineError::InvalidParam {
            name: "speed".into(),
            value: -2.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("speed"), "missing name in: {msg}");
        assert!(msg.contains("-2.5"), "missing value in: {msg}");
    }

    #[test]
    fn palette_index_out_of_range_includes_index_and_len() {
        let err = EngineError::PaletteIndexOutOfRange { index: 9, len: 7 };
        let msg = err.to_string();
        assert!(msg.contains('9'), "missing index in: {msg}");
        assert!(msg.contains('7'), "missing len in: {msg}");
    }

    #[test]
    fn string_payloads_are_displayed() {
        for (err, needle) in [
            (EngineError::InvalidColor("bad hex".into()), "bad hex"),
            (EngineError::InvalidPalette("too short".into()), "too short"),
            (EngineError::UnknownPalette("plaid".into()), "plaid"),
            (EngineError::Io("disk full".into()), "disk full"),
        ] {
            let msg = err.to_string();
            assert!(msg.contains(needle), "missing '{needle}' in: {msg}");
        }
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }

    #[test]
    fn engine_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<EngineError>();
    }
}
