//! Color utilities for document output.
//!
//! Colors stay CSS strings end to end; parsing is only used to validate
//! user-supplied hex values before they are written into markup.

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #), in 6- or 3-digit form.
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some(Self { r, g, b })
            }
            3 => {
                let digit = |i: usize| -> Option<u8> {
                    let v = u8::from_str_radix(hex.get(i..=i)?, 16).ok()?;
                    Some(v * 17)
                };
                Some(Self {
                    r: digit(0)?,
                    g: digit(1)?,
                    b: digit(2)?,
                })
            }
            _ => None,
        }
    }

    /// Convert to CSS hex string (#rrggbb).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default colors of exported documents.
pub mod palette {
    /// Shape fill (lime)
    pub const FILL: &str = "#daff06";

    /// Shape outline when strokes are enabled
    pub const STROKE: &str = "black";

    /// Safe-area guide outline (red)
    pub const GUIDE: &str = "#ff0000";

    /// Written as the stroke color when outlines are off
    pub const NONE: &str = "none";
}
