//! Shared types used across letterbox.
//! Includes `CanvasSize`, `BackgroundColor`, `ResampleFilter` and the computed
//! `LetterboxLayout`.
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Target canvas dimensions in pixels. Both sides are always positive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: format!("{}x{}", width, height),
            });
        }
        Ok(Self { width, height })
    }

    pub fn square(side: u32) -> Result<Self, Error> {
        Self::new(side, side)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepts `WxH` (also `W,H`) or a single `N` for a square canvas.
impl FromStr for CanvasSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument {
            arg: "size",
            value: s.to_string(),
        };
        let parse = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());

        let trimmed = s.trim();
        match trimmed.split_once(['x', 'X', ',']) {
            Some((w, h)) => Self::new(parse(w)?, parse(h)?).map_err(|_| invalid()),
            None => Self::square(parse(trimmed)?).map_err(|_| invalid()),
        }
    }
}

/// RGBA fill color for the canvas area not covered by the scaled image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct BackgroundColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl BackgroundColor {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl std::fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

/// Accepts `r,g,b,a` or `r,g,b` (opaque). Each component must be in 0..=255.
impl FromStr for BackgroundColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument {
            arg: "background",
            value: s.to_string(),
        };

        let components = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<u8>, Error>>()?;

        match components.as_slice() {
            &[r, g, b] => Ok(Self::rgba(r, g, b, 255)),
            &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    /// Catmull-Rom cubic
    #[default]
    Bicubic,
    Mitchell,
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Bilinear => "bilinear",
            ResampleFilter::Bicubic => "bicubic",
            ResampleFilter::Mitchell => "mitchell",
            ResampleFilter::Lanczos3 => "lanczos3",
        };
        write!(f, "{}", s)
    }
}

/// Placement of the scaled source on the canvas.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LetterboxLayout {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}
