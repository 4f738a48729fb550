//! The Archimedean spiral (`spirale`) narrative.
//!
//! The spiral is approximated sector by sector: within each sector the
//! compass draws a circular arc whose radius grows by one `ring_step` per
//! sector, which is the classical ruler-and-compass approximation.

use super::{Action, DRAW_MS, MOVE_MS, Step, WAIT_MS, seed_and_transfer_steps};
use crate::config::Config;
use crate::float_types::Real;
use crate::geometry::describe_arc;
use crate::instrument::InstrumentKind;
use crate::surface::{Layer, Shape, Style};

pub(super) fn build_steps(config: &Config) -> Vec<Step> {
    let palette = &config.palette;
    let origin = config.origin;
    let sectors = config.ray_count() - 1;
    let guide_len = config.inner_radius + sectors as Real * config.ring_step;

    // Rays are only scaffolding here: dashed guides on the construction layer.
    let ray_style = Style::stroke(&palette.ray).width(1.0).dashed();
    let mut steps = seed_and_transfer_steps(config, guide_len, &ray_style, Layer::Construction);

    // One growing arc per sector.
    for i in 0..sectors {
        let radius = config.inner_radius + i as Real * config.ring_step;
        let from = config.ray_angle(i);
        let to = config.ray_angle(i + 1);

        let mut step = Step::new(
            format!("L'arc de spire ({})", i + 1),
            "On élargit un peu le compas et on trace l'arc du secteur suivant.",
        );
        let arc = step.add_shape(
            Shape::Path {
                d: describe_arc(origin, radius, from, to),
            },
            Style::stroke(&palette.arc).width(2.0),
            Layer::Final,
        );
        step.add_action(Action::MoveInstrument {
            kind: InstrumentKind::Compass,
            x: origin.x,
            y: origin.y,
            rotation_deg: from,
            duration_ms: MOVE_MS * 0.6,
        });
        step.add_action(Action::SpreadCompass {
            spread: radius,
            duration_ms: MOVE_MS * 0.5,
        });
        step.add_action(Action::Reveal { shape_index: arc, duration_ms: DRAW_MS * 0.7 });
        steps.push(step);
    }

    // Closing step: clear the scaffolding, keep the spiral.
    let mut step = Step::new(
        "La spirale achevée",
        "On efface les guides : seule la spirale reste.",
    );
    let hub = step.add_shape(
        Shape::Circle { center: origin, radius: 4.0 },
        Style::filled(&palette.label),
        Layer::Final,
    );
    step.add_action(Action::HideInstrument(InstrumentKind::Compass));
    step.add_action(Action::HideInstrument(InstrumentKind::Pencil));
    step.add_action(Action::Reveal { shape_index: hub, duration_ms: DRAW_MS * 0.3 });
    step.add_action(Action::Wait(WAIT_MS));
    steps.push(step);

    steps
}
