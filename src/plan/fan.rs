//! The angle-transfer fan (`eventail`) narrative.

use super::{Action, DRAW_MS, Step, WAIT_MS, seed_and_transfer_steps};
use crate::config::Config;
use crate::geometry::{describe_arc, point_on_circle};
use crate::instrument::InstrumentKind;
use crate::surface::{Layer, Shape, Style};

pub(super) fn build_steps(config: &Config) -> Vec<Step> {
    let palette = &config.palette;
    let ray_style = Style::stroke(&palette.ray).width(2.0);
    let mut steps = seed_and_transfer_steps(config, config.inner_radius, &ray_style, Layer::Final);

    // Closing step: the fan sector between the two sweep boundaries. The
    // terminal fade takes the guides out afterwards.
    let last_angle = config.ray_angle(config.ray_count() - 1);
    let origin = config.origin;
    let start = point_on_circle(origin, config.inner_radius, 0.0);

    let mut step = Step::new(
        "L'éventail",
        "Tous les angles sont égaux : l'éventail est construit.",
    );
    let sector = step.add_shape(
        Shape::Path {
            d: format!(
                "M {} {} L {} {} {} Z",
                origin.x,
                origin.y,
                start.x,
                start.y,
                // Reuse the arc path minus its leading moveto.
                describe_arc(origin, config.inner_radius, 0.0, last_angle)
                    .split_once("A ")
                    .map(|(_, rest)| format!("A {rest}"))
                    .unwrap_or_default()
            ),
        },
        Style::filled(&palette.disk).opacity(0.35),
        Layer::Final,
    );
    let rim = step.add_shape(
        Shape::Path {
            d: describe_arc(origin, config.inner_radius, 0.0, last_angle),
        },
        Style::stroke(&palette.ray).width(2.0),
        Layer::Final,
    );
    // Persistent angle label inside the first sector.
    let angle_label = step.add_shape(
        Shape::Label {
            anchor: point_on_circle(origin, config.inner_radius * 0.55, config.base_angle_deg * 0.5),
            text: format!("{}°", config.base_angle_deg),
        },
        Style::filled(&palette.label),
        Layer::Final,
    );
    step.add_action(Action::HideInstrument(InstrumentKind::Compass));
    step.add_action(Action::HideInstrument(InstrumentKind::Pencil));
    step.add_action(Action::Reveal { shape_index: sector, duration_ms: DRAW_MS * 0.8 });
    step.add_action(Action::Reveal { shape_index: rim, duration_ms: DRAW_MS });
    step.add_action(Action::Reveal { shape_index: angle_label, duration_ms: DRAW_MS * 0.3 });
    step.add_action(Action::Wait(WAIT_MS));
    steps.push(step);

    steps
}
