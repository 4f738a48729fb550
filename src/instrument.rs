//! Virtual drawing instruments: ruler, compass, pencil.
//!
//! Each instrument is a glyph on the construction layer plus a pose
//! (`{x, y, rotation, visible, spread}`). The animation director is the only
//! writer during a replay; the exploration controller never touches
//! instruments at all.
//!
//! Teardown contract: once [`Instrument::invalidate`] has been called (or the
//! backing surface element is gone), every pose/visibility call is a silent
//! no-op. This is the mechanism by which `stop()` cancels in-flight motion:
//! a pending transition completes against an invalidated instrument and
//! changes nothing.

use crate::float_types::{PI, Real};
use crate::surface::{Layer, RenderSurface, Shape, ShapeId, Style};

/// How to map transition time into a normalized [0,1] parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ease {
    Linear,
    InOutQuad,
    OutCubic,
}

impl Ease {
    #[inline]
    pub fn sample(self, x: Real) -> Real {
        let t = x.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) * 0.5
                }
            },
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[inline]
pub(crate) fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    Ruler,
    Compass,
    Pencil,
}

/// Pose of one instrument. `spread` is the compass aperture (pivot-to-tip
/// distance); it is carried for all kinds but only the compass renders it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InstrumentState {
    pub x: Real,
    pub y: Real,
    pub rotation_deg: Real,
    pub visible: bool,
    pub spread: Real,
}

impl InstrumentState {
    pub fn hidden() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation_deg: 0.0,
            visible: false,
            spread: 0.0,
        }
    }

    /// Interpolate pose `a → b`; visibility snaps to the target.
    pub fn lerp(a: Self, b: Self, t: Real) -> Self {
        Self {
            x: lerp(a.x, b.x, t),
            y: lerp(a.y, b.y, t),
            rotation_deg: lerp(a.rotation_deg, b.rotation_deg, t),
            visible: b.visible,
            spread: lerp(a.spread, b.spread, t),
        }
    }
}

/// One virtual instrument and its surface glyph.
#[derive(Debug)]
pub struct Instrument {
    kind: InstrumentKind,
    state: InstrumentState,
    glyph: Option<ShapeId>,
    valid: bool,
}

impl Instrument {
    pub fn new(kind: InstrumentKind) -> Self {
        Self {
            kind,
            state: InstrumentState::hidden(),
            glyph: None,
            valid: true,
        }
    }

    pub fn kind(&self) -> InstrumentKind {
        self.kind
    }

    pub fn state(&self) -> InstrumentState {
        self.state
    }

    /// Mark the backing element gone. Every later call is a no-op until
    /// [`reset`](Self::reset).
    pub fn invalidate(&mut self) {
        self.valid = false;
        self.glyph = None;
    }

    /// Ready the instrument for a fresh replay.
    pub fn reset(&mut self) {
        self.state = InstrumentState::hidden();
        self.glyph = None;
        self.valid = true;
    }

    pub fn set_position(&mut self, surface: &mut RenderSurface, x: Real, y: Real, rotation_deg: Real) {
        if !self.valid {
            return;
        }
        self.state.x = x;
        self.state.y = y;
        self.state.rotation_deg = rotation_deg;
        self.sync(surface);
    }

    pub fn set_spread(&mut self, surface: &mut RenderSurface, spread: Real) {
        if !self.valid {
            return;
        }
        self.state.spread = spread.max(0.0);
        self.sync(surface);
    }

    pub fn set_state(&mut self, surface: &mut RenderSurface, state: InstrumentState) {
        if !self.valid {
            return;
        }
        self.state = state;
        self.sync(surface);
    }

    pub fn show(&mut self, surface: &mut RenderSurface) {
        if !self.valid {
            return;
        }
        self.state.visible = true;
        self.sync(surface);
    }

    pub fn hide(&mut self, surface: &mut RenderSurface) {
        if !self.valid {
            return;
        }
        self.state.visible = false;
        self.sync(surface);
    }

    /// Reconcile the surface glyph with the current pose.
    fn sync(&mut self, surface: &mut RenderSurface) {
        if !self.state.visible {
            if let Some(id) = self.glyph.take() {
                surface.remove(id);
            }
            return;
        }
        let shape = self.glyph_shape();
        match self.glyph {
            Some(id) => {
                if !surface.update_shape(id, shape) {
                    // The element went away under us (surface cleared).
                    // Do not resurrect it.
                    self.glyph = None;
                    self.valid = false;
                }
            },
            None => {
                let style = Style::stroke("#2b2b2b").width(2.0).opacity(0.85);
                self.glyph = Some(surface.push(Layer::Construction, shape, style));
            },
        }
    }

    /// Glyph geometry for the current pose.
    fn glyph_shape(&self) -> Shape {
        let x = self.state.x;
        let y = self.state.y;
        let theta = self.state.rotation_deg * PI / 180.0;
        let (dir_x, dir_y) = (theta.cos(), -theta.sin());
        match self.kind {
            InstrumentKind::Ruler => {
                // A long edge with two short end ticks, drawn along the rotation.
                let half = 110.0;
                let (nx, ny) = (-dir_y, dir_x);
                let (ax, ay) = (x - dir_x * half, y - dir_y * half);
                let (bx, by) = (x + dir_x * half, y + dir_y * half);
                Shape::Path {
                    d: format!(
                        "M {} {} L {} {} M {} {} L {} {} M {} {} L {} {}",
                        ax, ay, bx, by,
                        ax, ay, ax + nx * 8.0, ay + ny * 8.0,
                        bx, by, bx + nx * 8.0, by + ny * 8.0
                    ),
                }
            },
            InstrumentKind::Compass => {
                // Pivot at the pose point, pencil leg reaching `spread` along
                // the rotation, hinge riding above the midpoint.
                let spread = self.state.spread;
                let (tx, ty) = (x + dir_x * spread, y + dir_y * spread);
                let (mx, my) = ((x + tx) * 0.5, (y + ty) * 0.5);
                let lift = spread * 0.35 + 18.0;
                let (nx, ny) = (-dir_y, dir_x);
                let (hx, hy) = (mx - nx * lift, my - ny * lift);
                Shape::Path {
                    d: format!("M {} {} L {} {} L {} {}", x, y, hx, hy, tx, ty),
                }
            },
            InstrumentKind::Pencil => {
                // Short shaft pointing away from the tip.
                let len = 34.0;
                let (ex, ey) = (x + dir_x * len, y + dir_y * len);
                Shape::Path {
                    d: format!("M {} {} L {} {}", x, y, ex, ey),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidated_instrument_ignores_pose_calls() {
        let mut surface = RenderSurface::new(100.0, 100.0);
        let mut pencil = Instrument::new(InstrumentKind::Pencil);
        pencil.show(&mut surface);
        assert_eq!(surface.construction_len(), 1);

        pencil.invalidate();
        surface.clear();
        pencil.set_position(&mut surface, 10.0, 10.0, 0.0);
        pencil.show(&mut surface);
        assert_eq!(surface.construction_len(), 0);
    }

    #[test]
    fn glyph_is_not_resurrected_after_surface_clear() {
        let mut surface = RenderSurface::new(100.0, 100.0);
        let mut compass = Instrument::new(InstrumentKind::Compass);
        compass.show(&mut surface);
        surface.clear();
        // The stale glyph handle makes the next sync a self-invalidation.
        compass.set_position(&mut surface, 5.0, 5.0, 0.0);
        assert_eq!(surface.construction_len(), 0);
        compass.set_spread(&mut surface, 40.0);
        assert_eq!(surface.construction_len(), 0);
    }
}
