//! Per-lesson configuration.
//!
//! One engine, three historical lessons: the angle-transfer fan, the
//! Archimedean spiral, and the Epidaurus theater. Each is a [`Config`]
//! preset; every knob a lesson ever tweaked (default angles, ring layout,
//! canvas size) is a field here, so a single plan builder per variant covers
//! all of them.

use crate::errors::ConstructionError;
use crate::float_types::Real;
use crate::geometry::chord_length;
use nalgebra::Point2;

/// Which construction narrative to build.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Angle-transfer fan: seed rays, then copy the angle around the sweep.
    Fan,
    /// Archimedean spiral: compass arcs of growing radius, one per sector.
    Spiral,
    /// Epidaurus theater: fan plus concentric seating rings and orchestra disk.
    Theater,
}

/// Colors for the visual elements of a construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub ray: String,
    pub arc: String,
    pub chord: String,
    pub ring: String,
    pub disk: String,
    pub label: String,
    pub highlight: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ray: "#555555".into(),
            arc: "#1f77b4".into(),
            chord: "#d62728".into(),
            ring: "#8c6d46".into(),
            disk: "#e8dcc8".into(),
            label: "#333333".into(),
            highlight: "#ff7f0e".into(),
        }
    }
}

/// All parameters of one construction variant.
///
/// Read-only during a replay/exploration session; changing any field means
/// rebuilding the plan wholesale (stale steps must never run against a new
/// configuration).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub variant: Variant,
    /// Canvas size in pixels.
    pub width: Real,
    pub height: Real,
    /// Construction center in canvas pixel space.
    pub origin: Point2<Real>,
    /// Angle copied at each transfer, degrees.
    pub base_angle_deg: Real,
    /// Total sweep of the construction, degrees.
    pub total_angle_deg: Real,
    /// Radius of the inner reference arc (orchestra / first turn).
    pub inner_radius: Real,
    /// Number of concentric rings beyond the inner arc.
    pub ring_count: usize,
    /// Radial spacing between rings; for the spiral, the radial growth per sector.
    pub ring_step: Real,
    pub palette: Palette,
}

impl Config {
    /// The angle-transfer fan lesson (`eventail`): a quarter-turn sweep, no rings.
    pub fn fan() -> Self {
        Self {
            variant: Variant::Fan,
            width: 800.0,
            height: 600.0,
            origin: Point2::new(400.0, 480.0),
            base_angle_deg: 15.0,
            total_angle_deg: 90.0,
            inner_radius: 160.0,
            ring_count: 0,
            ring_step: 0.0,
            palette: Palette::default(),
        }
    }

    /// The Archimedean spiral lesson (`spirale`): two turns, radius growing per sector.
    pub fn spiral() -> Self {
        Self {
            variant: Variant::Spiral,
            width: 800.0,
            height: 600.0,
            origin: Point2::new(400.0, 300.0),
            base_angle_deg: 45.0,
            total_angle_deg: 720.0,
            inner_radius: 30.0,
            ring_count: 0,
            ring_step: 12.0,
            palette: Palette::default(),
        }
    }

    /// The Epidaurus theater lesson (`epidaure`): half-turn fan, seating rings,
    /// orchestra disk, koilon/diazoma labels.
    pub fn theater() -> Self {
        Self {
            variant: Variant::Theater,
            width: 800.0,
            height: 520.0,
            origin: Point2::new(400.0, 430.0),
            base_angle_deg: 20.0,
            total_angle_deg: 180.0,
            inner_radius: 80.0,
            ring_count: 9,
            ring_step: 24.0,
            palette: Palette::default(),
        }
    }

    pub fn with_origin(mut self, x: Real, y: Real) -> Self {
        self.origin = Point2::new(x, y);
        self
    }

    pub fn with_base_angle(mut self, degrees: Real) -> Self {
        self.base_angle_deg = degrees;
        self
    }

    pub fn with_total_angle(mut self, degrees: Real) -> Self {
        self.total_angle_deg = degrees;
        self
    }

    pub fn with_inner_radius(mut self, radius: Real) -> Self {
        self.inner_radius = radius;
        self
    }

    pub fn with_rings(mut self, count: usize, step: Real) -> Self {
        self.ring_count = count;
        self.ring_step = step;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check the configuration invariants.
    ///
    /// A base angle that does not divide the sweep evenly is *not* an error:
    /// the ray count is floor-derived and the final ray lands short. Only
    /// degenerate geometry is rejected.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if !(self.inner_radius > 0.0) || !self.inner_radius.is_finite() {
            return Err(ConstructionError::InvalidRadius(self.inner_radius));
        }
        if !(self.base_angle_deg > 0.0) || self.base_angle_deg > self.total_angle_deg {
            return Err(ConstructionError::InvalidAngle {
                base: self.base_angle_deg,
                total: self.total_angle_deg,
            });
        }
        if self.ring_count > 0 && !(self.ring_step > 0.0) {
            return Err(ConstructionError::InvalidRingStep(self.ring_step));
        }
        Ok(())
    }

    /// Number of rays: `⌊total / base⌋ + 1` (both sweep boundaries included
    /// when the division is exact; otherwise the last ray falls short of the
    /// sweep end).
    pub fn ray_count(&self) -> usize {
        (self.total_angle_deg / self.base_angle_deg).floor() as usize + 1
    }

    /// Angle of ray `i`, degrees from the sweep start.
    pub fn ray_angle(&self, i: usize) -> Real {
        self.base_angle_deg * i as Real
    }

    /// Outermost radius once all rings are drawn.
    pub fn outer_radius(&self) -> Real {
        self.inner_radius + self.ring_count as Real * self.ring_step
    }

    /// Chord between two consecutive ray intersections on the inner arc:
    /// the length the compass carries during every angle transfer.
    pub fn reference_chord(&self) -> Real {
        chord_length(self.inner_radius, self.base_angle_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theater_defaults_divide_evenly() {
        let config = Config::theater();
        config.validate().unwrap();
        assert_eq!(config.ray_count(), 10);
    }

    #[test]
    fn uneven_base_angle_is_tolerated() {
        let config = Config::fan().with_base_angle(25.0);
        config.validate().unwrap();
        // 90 / 25 = 3.6 → 4 rays, last one at 75° instead of 90°.
        assert_eq!(config.ray_count(), 4);
    }

    #[test]
    fn degenerate_radius_is_rejected() {
        let config = Config::fan().with_inner_radius(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConstructionError::InvalidRadius(_))
        ));
    }
}
