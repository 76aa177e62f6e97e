//! Column track list (`grid-template-columns`) parsing and formatting.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{GridError, Result};

/// Width of the row-number track in pixels
pub const ROW_NUMBER_WIDTH: f64 = 50.0;
/// Initial width of every data column track in pixels
pub const DEFAULT_COLUMN_WIDTH: f64 = 100.0;
/// Resizing never shrinks a track below this width
pub const MIN_COLUMN_WIDTH: f64 = 50.0;

const PIXEL_TRACK: &str = r"^(\d+(?:\.\d+)?)px$";

static PIXEL_TRACK_RE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

fn pixel_track() -> Result<&'static Regex> {
    PIXEL_TRACK_RE
        .get_or_init(|| Regex::new(PIXEL_TRACK))
        .as_ref()
        .map_err(|e| GridError::InvalidTrackList(e.to_string()))
}

/// Pixel widths of every column track, row-number track first
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTracks {
    widths: Vec<f64>,
}

impl ColumnTracks {
    /// Initial layout: the row-number track followed by `cols` default tracks
    pub fn for_columns(cols: usize) -> Self {
        let mut widths = Vec::with_capacity(cols + 1);
        widths.push(ROW_NUMBER_WIDTH);
        widths.extend(std::iter::repeat(DEFAULT_COLUMN_WIDTH).take(cols));
        Self { widths }
    }

    /// Parse a resolved track list such as `"50px 100px 120.5px"`
    pub fn parse(template: &str) -> Result<Self> {
        let re = pixel_track()?;

        let widths = template
            .split_whitespace()
            .map(|token| {
                re.captures(token)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| m.as_str().parse::<f64>().ok())
                    .ok_or_else(|| GridError::InvalidTrackList(token.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        if widths.is_empty() {
            return Err(GridError::InvalidTrackList(template.to_string()));
        }

        Ok(Self { widths })
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn width(&self, track: usize) -> Option<f64> {
        self.widths.get(track).copied()
    }

    /// Rewrite one track in place. Returns false when the track does not exist.
    pub fn set_width(&mut self, track: usize, width: f64) -> bool {
        match self.widths.get_mut(track) {
            Some(slot) => {
                *slot = width;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for ColumnTracks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, width) in self.widths.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}px", width)?;
        }
        Ok(())
    }
}
