//! The Epidaurus theater (`epidaure`) narrative.
//!
//! Fan skeleton at orchestra radius, then the seating: one concentric ring
//! per step, a diazoma walkway halfway up, and finally the orchestra disk
//! with its zone labels.

use super::{Action, DRAW_MS, MOVE_MS, Step, WAIT_MS, seed_and_transfer_steps};
use crate::config::Config;
use crate::float_types::Real;
use crate::geometry::{describe_arc, point_on_circle};
use crate::instrument::InstrumentKind;
use crate::surface::{Layer, Shape, Style};

pub(super) fn build_steps(config: &Config) -> Vec<Step> {
    let palette = &config.palette;
    let origin = config.origin;
    let sweep = config.ray_angle(config.ray_count() - 1);

    let ray_style = Style::stroke(&palette.ray).width(1.5);
    let mut steps = seed_and_transfer_steps(config, config.outer_radius(), &ray_style, Layer::Final);

    // Seating rings, innermost first. The ring halfway up is the diazoma:
    // drawn heavier, it reads as the walkway between the two tiers.
    let diazoma = config.ring_count / 2;
    for i in 0..config.ring_count {
        let radius = config.inner_radius + (i + 1) as Real * config.ring_step;
        let is_diazoma = i == diazoma && config.ring_count >= 4;
        let (title, description, style) = if is_diazoma {
            (
                "Le diazoma".to_string(),
                "La circulation qui sépare les gradins du bas et du haut.".to_string(),
                Style::stroke(&palette.ring).width(3.5),
            )
        } else {
            (
                format!("Un gradin ({})", i + 1),
                "Au compas, un cercle de plus pour la rangée suivante du koilon.".to_string(),
                Style::stroke(&palette.ring).width(1.5),
            )
        };

        let mut step = Step::new(title, description);
        let ring = step.add_shape(
            Shape::Path {
                d: describe_arc(origin, radius, 0.0, sweep),
            },
            style,
            Layer::Final,
        );
        step.add_action(Action::MoveInstrument {
            kind: InstrumentKind::Compass,
            x: origin.x,
            y: origin.y,
            rotation_deg: 0.0,
            duration_ms: MOVE_MS * 0.5,
        });
        step.add_action(Action::SpreadCompass {
            spread: radius,
            duration_ms: MOVE_MS * 0.5,
        });
        step.add_action(Action::Reveal { shape_index: ring, duration_ms: DRAW_MS * 0.8 });
        steps.push(step);
    }

    // Orchestra and labels; the terminal fade takes the guides out afterwards.
    let label_radius = config.outer_radius() + 18.0;
    let mid_angle = sweep * 0.5;
    let koilon_anchor = point_on_circle(origin, label_radius, mid_angle);
    let diazoma_radius = config.inner_radius + (diazoma + 1) as Real * config.ring_step;
    let diazoma_anchor = point_on_circle(origin, diazoma_radius + 10.0, mid_angle * 0.4);

    let mut step = Step::new(
        "L'orchestra",
        "Le disque central où jouait le chœur ; le théâtre est complet.",
    );
    let disk = step.add_shape(
        Shape::Circle { center: origin, radius: config.inner_radius },
        Style::filled(&palette.disk),
        Layer::Final,
    );
    let orchestra_label = step.add_shape(
        Shape::Label { anchor: origin, text: "orchestra".into() },
        Style::filled(&palette.label),
        Layer::Final,
    );
    let koilon_label = step.add_shape(
        Shape::Label { anchor: koilon_anchor, text: "koilon".into() },
        Style::filled(&palette.label),
        Layer::Final,
    );
    let diazoma_label = step.add_shape(
        Shape::Label { anchor: diazoma_anchor, text: "diazoma".into() },
        Style::filled(&palette.label),
        Layer::Final,
    );
    step.add_action(Action::HideInstrument(InstrumentKind::Compass));
    step.add_action(Action::HideInstrument(InstrumentKind::Pencil));
    step.add_action(Action::Reveal { shape_index: disk, duration_ms: DRAW_MS });
    step.add_action(Action::Reveal { shape_index: orchestra_label, duration_ms: DRAW_MS * 0.3 });
    step.add_action(Action::Reveal { shape_index: koilon_label, duration_ms: DRAW_MS * 0.3 });
    step.add_action(Action::Reveal { shape_index: diazoma_label, duration_ms: DRAW_MS * 0.3 });
    step.add_action(Action::Wait(WAIT_MS));
    steps.push(step);

    steps
}
