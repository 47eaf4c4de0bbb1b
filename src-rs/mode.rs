use alloc::string::{String, ToString};
use core::str::FromStr;

use thiserror::Error;

use crate::image::{self, PixelBuffer};

/// Threshold used by [`DitherMode::Threshold`] and [`DitherMode::Bayer`] when
/// none is given.
pub const DEFAULT_THRESHOLD: f64 = 128.0;

#[derive(Debug, Error, PartialEq)]
pub enum ModeError {
    #[error("unknown dither mode: {0}")]
    UnknownMode(String),

    #[error("threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),
}

/// One of the five transforms, with its threshold where it takes one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DitherMode {
    Grayscale,
    Threshold(f64),
    Bayer(f64),
    FloydSteinberg,
    Atkinson,
}

impl DitherMode {
    /// Resolves a mode by name. `threshold` is only consulted by the
    /// threshold and bayer modes and falls back to [`DEFAULT_THRESHOLD`].
    pub fn parse(name: &str, threshold: Option<f64>) -> Result<DitherMode, ModeError> {
        let threshold = match threshold {
            Some(t) if !t.is_finite() => return Err(ModeError::InvalidThreshold(t)),
            Some(t) => t,
            None => DEFAULT_THRESHOLD,
        };
        let mode = match name.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "greyscale" => DitherMode::Grayscale,
            "threshold" => DitherMode::Threshold(threshold),
            "bayer" => DitherMode::Bayer(threshold),
            "floydsteinberg" | "floyd-steinberg" | "floyd_steinberg" => DitherMode::FloydSteinberg,
            "atkinson" => DitherMode::Atkinson,
            _ => return Err(ModeError::UnknownMode(name.to_string())),
        };
        Ok(mode)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DitherMode::Grayscale => "grayscale",
            DitherMode::Threshold(_) => "threshold",
            DitherMode::Bayer(_) => "bayer",
            DitherMode::FloydSteinberg => "floydsteinberg",
            DitherMode::Atkinson => "atkinson",
        }
    }

    pub fn apply(self, image: &mut PixelBuffer) {
        log::trace!("applying {:?}", self);
        match self {
            DitherMode::Grayscale => image::grayscale(image),
            DitherMode::Threshold(t) => image::threshold(image, t),
            DitherMode::Bayer(t) => image::bayer(image, t),
            DitherMode::FloydSteinberg => image::floyd_steinberg(image),
            DitherMode::Atkinson => image::atkinson(image),
        }
    }
}

impl FromStr for DitherMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DitherMode::parse(s, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("Atkinson".parse::<DitherMode>(), Ok(DitherMode::Atkinson));
        assert_eq!(" floyd-steinberg ".parse::<DitherMode>(), Ok(DitherMode::FloydSteinberg));
        assert_eq!("floydsteinberg".parse::<DitherMode>(), Ok(DitherMode::FloydSteinberg));
        assert_eq!("greyscale".parse::<DitherMode>(), Ok(DitherMode::Grayscale));
        assert_eq!(
            "threshold".parse::<DitherMode>(),
            Ok(DitherMode::Threshold(DEFAULT_THRESHOLD))
        );
    }

    #[test]
    fn explicit_threshold() {
        assert_eq!(
            DitherMode::parse("bayer", Some(40.0)),
            Ok(DitherMode::Bayer(40.0))
        );
        assert_eq!(
            DitherMode::parse("atkinson", Some(40.0)),
            Ok(DitherMode::Atkinson)
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "sierra".parse::<DitherMode>(),
            Err(ModeError::UnknownMode("sierra".to_string()))
        );
        assert!(matches!(
            DitherMode::parse("threshold", Some(f64::NAN)),
            Err(ModeError::InvalidThreshold(t)) if t.is_nan()
        ));
        assert_eq!(
            DitherMode::parse("bayer", Some(f64::INFINITY)),
            Err(ModeError::InvalidThreshold(f64::INFINITY))
        );
    }

    #[test]
    fn name_round_trips() {
        for mode in [
            DitherMode::Grayscale,
            DitherMode::Threshold(DEFAULT_THRESHOLD),
            DitherMode::Bayer(DEFAULT_THRESHOLD),
            DitherMode::FloydSteinberg,
            DitherMode::Atkinson,
        ] {
            assert_eq!(mode.name().parse::<DitherMode>(), Ok(mode));
        }
    }

    #[test]
    fn apply_dispatches() {
        let mut data = [255, 0, 0, 255];
        DitherMode::Threshold(76.0).apply(&mut PixelBuffer::new(&mut data, 1, 1).unwrap());
        assert_eq!(data, [255, 255, 255, 255]);

        let mut data = [255, 0, 0, 255];
        DitherMode::Grayscale.apply(&mut PixelBuffer::new(&mut data, 1, 1).unwrap());
        assert_eq!(data, [76, 76, 76, 255]);
    }
}
