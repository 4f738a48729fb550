use epure::config::Config;
use epure::explorer::ExplorationController;
use epure::plan::ConstructionPlan;
use epure::surface::{Layer, RenderSurface};

fn explorer(config: Config) -> ExplorationController {
    let plan = ConstructionPlan::build(config.clone()).unwrap();
    let surface = RenderSurface::new(config.width, config.height);
    ExplorationController::new(plan, surface).unwrap()
}

#[test]
fn repeated_navigation_is_idempotent() {
    let mut controller = explorer(Config::theater());
    controller.go_to_step(3);
    let first = controller.surface().to_svg_string();
    controller.go_to_step(3);
    let second = controller.surface().to_svg_string();
    assert_eq!(first, second);
}

#[test]
fn navigation_is_order_independent() {
    let mut wandering = explorer(Config::theater());
    wandering.go_to_step(0);
    wandering.go_to_step(5);
    wandering.go_to_step(2);

    let mut direct = explorer(Config::theater());
    direct.go_to_step(2);

    assert_eq!(
        wandering.surface().to_svg_string(),
        direct.surface().to_svg_string()
    );
}

#[test]
fn coverage_grows_monotonically() {
    let plan = ConstructionPlan::build(Config::theater()).unwrap();
    let per_step: Vec<(usize, usize)> = plan
        .steps()
        .iter()
        .map(|step| {
            let construction = step
                .shapes
                .iter()
                .filter(|s| s.layer == Layer::Construction)
                .count();
            (construction, step.shapes.len() - construction)
        })
        .collect();

    let mut controller = explorer(Config::theater());
    let mut expected_construction = 0;
    let mut expected_final = 0;
    for (k, (construction, final_count)) in per_step.iter().enumerate() {
        expected_construction += construction;
        expected_final += final_count;
        controller.go_to_step(k);
        // Transients are exactly the union of steps 0..=k, persistent shapes
        // a superset of the previous navigation's.
        assert_eq!(controller.surface().construction_len(), expected_construction);
        assert_eq!(controller.surface().final_len(), expected_final);
    }
}

#[test]
fn index_is_clamped_to_the_plan() {
    let mut controller = explorer(Config::fan());
    let len = controller.plan().len();
    controller.go_to_step(9999);
    assert_eq!(controller.current_step(), len - 1);
    assert!(controller.at_end());
    assert_eq!(controller.progress_label(), format!("{len} / {len}"));
}

#[test]
fn boundary_affordances_track_position() {
    let mut controller = explorer(Config::fan());
    assert!(controller.at_start());
    assert!(!controller.at_end());
    assert_eq!(controller.title(), "Le centre");

    controller.next();
    assert!(!controller.at_start());
    assert_eq!(controller.current_step(), 1);
    assert_eq!(controller.title(), "Le premier rayon");

    controller.previous();
    assert!(controller.at_start());
    // Stepping past the start stays at the start.
    controller.previous();
    assert_eq!(controller.current_step(), 0);
}

#[test]
fn narration_follows_the_current_step() {
    let mut controller = explorer(Config::theater());
    controller.go_to_step(2);
    assert_eq!(controller.title(), "L'arc de référence");
    assert!(!controller.description().is_empty());
    assert_eq!(controller.progress_label(), "3 / 22");
}
