//! Construction plans: ordered, immutable step lists.
//!
//! A [`ConstructionPlan`] is built once from a [`Config`] and owned by the
//! session that built it. Rebuilding (after a live parameter change) replaces
//! the plan wholesale; steps are never patched in place, so a stale step can
//! never run against a new configuration.
//!
//! Every variant shares the same narrative skeleton (center, first ray,
//! reference arc, reference chord, then one angle transfer per remaining ray)
//! and appends its own ending (sector fill, spiral arcs, seating rings).

mod fan;
mod spiral;
mod theater;

use crate::config::{Config, Variant};
use crate::errors::ConstructionError;
use crate::float_types::{PI, Real};
use crate::geometry::{describe_arc, point_on_circle};
use crate::instrument::InstrumentKind;
use crate::surface::{Layer, RenderSurface, Shape, Style};
use nalgebra::Point2;

/// Default duration of one instrument move, ms (before the speed divisor).
pub const MOVE_MS: Real = 600.0;
/// Default duration of one timed stroke reveal, ms.
pub const DRAW_MS: Real = 900.0;
/// Default breathing pause between sub-actions, ms.
pub const WAIT_MS: Real = 350.0;

/// One drawable element of a step, with its target layer.
#[derive(Debug, Clone)]
pub struct PlannedShape {
    pub shape: Shape,
    pub style: Style,
    pub layer: Layer,
}

/// One choreography sub-action. `Reveal` refers to the owning step's shapes
/// by index, so geometry lives in exactly one place.
#[derive(Debug, Clone)]
pub enum Action {
    ShowInstrument(InstrumentKind),
    HideInstrument(InstrumentKind),
    MoveInstrument {
        kind: InstrumentKind,
        x: Real,
        y: Real,
        rotation_deg: Real,
        duration_ms: Real,
    },
    SpreadCompass {
        spread: Real,
        duration_ms: Real,
    },
    Reveal {
        shape_index: usize,
        duration_ms: Real,
    },
    Wait(Real),
}

/// One pedagogically meaningful unit of the construction.
#[derive(Debug, Clone)]
pub struct Step {
    pub title: String,
    pub description: String,
    pub shapes: Vec<PlannedShape>,
    pub choreography: Vec<Action>,
}

impl Step {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            shapes: Vec::new(),
            choreography: Vec::new(),
        }
    }

    /// Register a shape; returns its index for choreography references.
    pub fn add_shape(&mut self, shape: Shape, style: Style, layer: Layer) -> usize {
        self.shapes.push(PlannedShape { shape, style, layer });
        self.shapes.len() - 1
    }

    pub fn add_action(&mut self, action: Action) {
        self.choreography.push(action);
    }

    /// Instant draw of every shape in this step. Idempotent: the same call
    /// always pushes the same elements, which is what lets exploration replay
    /// steps 0..=k from scratch on every navigation.
    ///
    /// The current step gets a heavier stroke on its construction-layer
    /// shapes so the learner can see what just happened.
    pub fn render(&self, surface: &mut RenderSurface, is_current: bool) {
        for planned in &self.shapes {
            let mut style = planned.style.clone();
            if is_current && planned.layer == Layer::Construction {
                style.stroke_width *= 1.6;
            }
            surface.push(planned.layer, planned.shape.clone(), style);
        }
    }
}

/// The ordered step list for one configuration.
#[derive(Debug, Clone)]
pub struct ConstructionPlan {
    config: Config,
    steps: Vec<Step>,
}

impl ConstructionPlan {
    /// Validate the configuration and build the full narrative for its variant.
    pub fn build(config: Config) -> Result<Self, ConstructionError> {
        config.validate()?;
        let steps = match config.variant {
            Variant::Fan => fan::build_steps(&config),
            Variant::Spiral => spiral::build_steps(&config),
            Variant::Theater => theater::build_steps(&config),
        };
        Ok(Self { config, steps })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn titles(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.title.as_str()).collect()
    }
}

/// Angle, in screen-convention degrees, of the direction `from → to`.
fn heading_deg(from: Point2<Real>, to: Point2<Real>) -> Real {
    // Y is flipped on screen, so negate the vertical component.
    (-(to.y - from.y)).atan2(to.x - from.x) * 180.0 / PI
}

/// The shared opening of every narrative: center, first ray, reference arc,
/// reference chord + second ray, then one angle-transfer step per remaining
/// ray. `ray_len` and `ray_style`/`ray_layer` let the variants decide whether
/// rays are the product (fan, theater) or guides (spiral).
fn seed_and_transfer_steps(
    config: &Config,
    ray_len: Real,
    ray_style: &Style,
    ray_layer: Layer,
) -> Vec<Step> {
    let origin = config.origin;
    let inner = config.inner_radius;
    let chord = config.reference_chord();
    let palette = &config.palette;
    let mut steps = Vec::new();

    // Center.
    let mut step = Step::new(
        "Le centre",
        "On place le point O, centre de la construction.",
    );
    let dot = step.add_shape(
        Shape::Circle { center: origin, radius: 3.0 },
        Style::filled(&palette.label),
        Layer::Construction,
    );
    step.add_action(Action::ShowInstrument(InstrumentKind::Pencil));
    step.add_action(Action::MoveInstrument {
        kind: InstrumentKind::Pencil,
        x: origin.x,
        y: origin.y,
        rotation_deg: 60.0,
        duration_ms: MOVE_MS,
    });
    step.add_action(Action::Reveal { shape_index: dot, duration_ms: DRAW_MS * 0.3 });
    step.add_action(Action::Wait(WAIT_MS));
    steps.push(step);

    // First ray, along the sweep start.
    let p0 = point_on_circle(origin, ray_len, 0.0);
    let mut step = Step::new(
        "Le premier rayon",
        "À la règle, on trace le premier rayon depuis O.",
    );
    let ray = step.add_shape(
        Shape::Line { from: origin, to: p0 },
        ray_style.clone(),
        ray_layer,
    );
    step.add_action(Action::ShowInstrument(InstrumentKind::Ruler));
    step.add_action(Action::MoveInstrument {
        kind: InstrumentKind::Ruler,
        x: (origin.x + p0.x) * 0.5,
        y: (origin.y + p0.y) * 0.5,
        rotation_deg: 0.0,
        duration_ms: MOVE_MS,
    });
    step.add_action(Action::Reveal { shape_index: ray, duration_ms: DRAW_MS });
    step.add_action(Action::HideInstrument(InstrumentKind::Ruler));
    step.add_action(Action::Wait(WAIT_MS));
    steps.push(step);

    // Reference arc. A sweep of a full turn or more degenerates as an SVG
    // arc command, so it becomes a circle.
    let mut step = Step::new(
        "L'arc de référence",
        "Au compas pointé en O, on trace l'arc qui recevra tous les reports.",
    );
    let arc_shape = if config.total_angle_deg >= 360.0 {
        Shape::Circle { center: origin, radius: inner }
    } else {
        Shape::Path {
            d: describe_arc(origin, inner, 0.0, config.total_angle_deg),
        }
    };
    let arc = step.add_shape(arc_shape, Style::stroke(&palette.arc), Layer::Construction);
    step.add_action(Action::ShowInstrument(InstrumentKind::Compass));
    step.add_action(Action::MoveInstrument {
        kind: InstrumentKind::Compass,
        x: origin.x,
        y: origin.y,
        rotation_deg: 0.0,
        duration_ms: MOVE_MS,
    });
    step.add_action(Action::SpreadCompass { spread: inner, duration_ms: MOVE_MS * 0.7 });
    step.add_action(Action::Reveal { shape_index: arc, duration_ms: DRAW_MS * 1.4 });
    step.add_action(Action::Wait(WAIT_MS));
    steps.push(step);

    // Reference chord and second ray.
    let a0 = point_on_circle(origin, inner, 0.0);
    let a1 = point_on_circle(origin, inner, config.base_angle_deg);
    let r1 = point_on_circle(origin, ray_len, config.base_angle_deg);
    let mut step = Step::new(
        "La corde de référence",
        "On ouvre le compas de la corde qui sous-tend l'angle choisi, puis on trace le deuxième rayon.",
    );
    let chord_line = step.add_shape(
        Shape::Line { from: a0, to: a1 },
        Style::stroke(&palette.chord).dashed(),
        Layer::Construction,
    );
    let ray = step.add_shape(
        Shape::Line { from: origin, to: r1 },
        ray_style.clone(),
        ray_layer,
    );
    step.add_action(Action::MoveInstrument {
        kind: InstrumentKind::Compass,
        x: a0.x,
        y: a0.y,
        rotation_deg: heading_deg(a0, a1),
        duration_ms: MOVE_MS,
    });
    step.add_action(Action::SpreadCompass { spread: chord, duration_ms: MOVE_MS * 0.7 });
    step.add_action(Action::Reveal { shape_index: chord_line, duration_ms: DRAW_MS * 0.6 });
    step.add_action(Action::ShowInstrument(InstrumentKind::Ruler));
    step.add_action(Action::MoveInstrument {
        kind: InstrumentKind::Ruler,
        x: (origin.x + r1.x) * 0.5,
        y: (origin.y + r1.y) * 0.5,
        rotation_deg: config.base_angle_deg,
        duration_ms: MOVE_MS,
    });
    step.add_action(Action::Reveal { shape_index: ray, duration_ms: DRAW_MS });
    step.add_action(Action::HideInstrument(InstrumentKind::Ruler));
    step.add_action(Action::Wait(WAIT_MS));
    steps.push(step);

    // One transfer per remaining ray.
    for i in 2..config.ray_count() {
        let angle = config.ray_angle(i);
        let prev = point_on_circle(origin, inner, config.ray_angle(i - 1));
        let next = point_on_circle(origin, inner, angle);
        let ray_tip = point_on_circle(origin, ray_len, angle);
        let dir = heading_deg(prev, next);

        let mut step = Step::new(
            format!("Report de l'angle ({})", i - 1),
            "Sans changer l'ouverture du compas, on reporte la corde sur l'arc et on trace le rayon suivant.",
        );
        let mark = step.add_shape(
            Shape::Path {
                d: describe_arc(prev, config.reference_chord(), dir - 22.0, dir + 22.0),
            },
            Style::stroke(&palette.chord).width(1.0),
            Layer::Construction,
        );
        let ray = step.add_shape(
            Shape::Line { from: origin, to: ray_tip },
            ray_style.clone(),
            ray_layer,
        );
        step.add_action(Action::MoveInstrument {
            kind: InstrumentKind::Compass,
            x: prev.x,
            y: prev.y,
            rotation_deg: dir,
            duration_ms: MOVE_MS,
        });
        step.add_action(Action::Reveal { shape_index: mark, duration_ms: DRAW_MS * 0.5 });
        step.add_action(Action::ShowInstrument(InstrumentKind::Ruler));
        step.add_action(Action::MoveInstrument {
            kind: InstrumentKind::Ruler,
            x: (origin.x + ray_tip.x) * 0.5,
            y: (origin.y + ray_tip.y) * 0.5,
            rotation_deg: angle,
            duration_ms: MOVE_MS,
        });
        step.add_action(Action::Reveal { shape_index: ray, duration_ms: DRAW_MS });
        step.add_action(Action::HideInstrument(InstrumentKind::Ruler));
        step.add_action(Action::Wait(WAIT_MS));
        steps.push(step);
    }

    steps
}
