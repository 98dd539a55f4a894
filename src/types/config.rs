use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::render::colors::{palette, Rgb};

/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 390;
/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 960;
/// Default number of grid rows.
pub const DEFAULT_ROWS: u32 = 2;
/// Default number of grid columns.
pub const DEFAULT_COLS: u32 = 3;

/// One step of a [`TierTable`]: applies while the measured side is below `below`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub below: f64,
    pub value: f64,
}

/// Step function over the shortest canvas side.
///
/// Tiers are checked in order; the first whose `below` edge exceeds the input
/// wins, otherwise `otherwise` applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub tiers: Vec<Tier>,
    pub otherwise: f64,
}

impl TierTable {
    pub fn new(tiers: &[(f64, f64)], otherwise: f64) -> Self {
        Self {
            tiers: tiers
                .iter()
                .map(|&(below, value)| Tier { below, value })
                .collect(),
            otherwise,
        }
    }

    /// Corner radius buckets: <250 → 8, <500 → 16, <750 → 20, else 20.
    pub fn default_corner_radius() -> Self {
        Self::new(&[(250.0, 8.0), (500.0, 16.0), (750.0, 20.0)], 20.0)
    }

    /// Gap buckets: <250 → 1, <500 → 2, <750 → 4, else 6.
    pub fn default_gap() -> Self {
        Self::new(&[(250.0, 1.0), (500.0, 2.0), (750.0, 4.0)], 6.0)
    }

    pub fn lookup(&self, shortest_side: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| shortest_side < tier.below)
            .map_or(self.otherwise, |tier| tier.value)
    }

    fn validate(&self, name: &str) -> Result<()> {
        let values = self
            .tiers
            .iter()
            .map(|tier| tier.value)
            .chain(std::iter::once(self.otherwise));
        for value in values {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::Config(format!(
                    "{name} tier value must be a non-negative number, got {value}"
                )));
            }
        }
        if self.tiers.windows(2).any(|pair| match pair {
            [a, b] => a.below >= b.below,
            _ => false,
        }) {
            return Err(GridError::Config(format!(
                "{name} tier edges must be strictly increasing"
            )));
        }
        Ok(())
    }
}

/// Canvas size, toggles and derived-size tiers consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SizingConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Force the gap between shapes to zero
    pub remove_gap: bool,
    /// Outline every shape
    pub add_stroke: bool,
    /// Draw inset safe-area guides
    pub add_safe_area: bool,
    pub corner_radius_tiers: TierTable,
    pub gap_tiers: TierTable,
    /// Inset of safe-area guides on every side
    pub safe_area_inset: f64,
    /// Outline width when `add_stroke` is set
    pub stroke_width: f64,
    /// Extra document margin so outlines are not clipped on export
    pub stroke_padding: f64,
    /// Outline width of safe-area guides
    pub guide_stroke_width: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            remove_gap: false,
            add_stroke: false,
            add_safe_area: false,
            corner_radius_tiers: TierTable::default_corner_radius(),
            gap_tiers: TierTable::default_gap(),
            safe_area_inset: 15.0,
            stroke_width: 1.0,
            stroke_padding: 2.0,
            guide_stroke_width: 1.0,
        }
    }
}

impl SizingConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn shortest_side(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius_tiers.lookup(self.shortest_side())
    }

    pub fn gap(&self) -> f64 {
        if self.remove_gap {
            return 0.0;
        }
        self.gap_tiers.lookup(self.shortest_side())
    }

    /// Padding added around the exported document.
    pub fn document_padding(&self) -> f64 {
        if self.add_stroke {
            self.stroke_padding
        } else {
            0.0
        }
    }

    /// Check that the config can be rendered.
    ///
    /// # Errors
    /// `InvalidDimensions` for a zero width/height, `Config` for bad tiers or insets.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        self.corner_radius_tiers.validate("corner radius")?;
        self.gap_tiers.validate("gap")?;
        for (name, value) in [
            ("safeAreaInset", self.safe_area_inset),
            ("strokeWidth", self.stroke_width),
            ("strokePadding", self.stroke_padding),
            ("guideStrokeWidth", self.guide_stroke_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Colors used when emitting the vector document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderStyle {
    pub fill: String,
    pub stroke: String,
    pub guide_stroke: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill: palette::FILL.to_string(),
            stroke: palette::STROKE.to_string(),
            guide_stroke: palette::GUIDE.to_string(),
        }
    }
}

impl RenderStyle {
    /// Hex colors must parse; named colors are passed through as-is.
    ///
    /// # Errors
    /// `Config` if a `#`-prefixed color is malformed or a name contains markup.
    pub fn validate(&self) -> Result<()> {
        self.normalized().map(|_| ())
    }

    /// Validated copy with hex colors rewritten as lowercase `#rrggbb`.
    ///
    /// # Errors
    /// Same as [`Self::validate`].
    pub fn normalized(&self) -> Result<Self> {
        Ok(Self {
            fill: canonical_color("fill", &self.fill)?,
            stroke: canonical_color("stroke", &self.stroke)?,
            guide_stroke: canonical_color("guideStroke", &self.guide_stroke)?,
        })
    }
}

fn canonical_color(name: &str, color: &str) -> Result<String> {
    let canonical = if color.starts_with('#') {
        Rgb::from_hex(color).map(Rgb::to_hex)
    } else {
        (!color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()))
            .then(|| color.to_string())
    };
    canonical.ok_or_else(|| GridError::Config(format!("invalid {name} color '{color}'")))
}
