mod support;

use epure::config::Config;
use epure::errors::ConstructionError;
use epure::plan::ConstructionPlan;
use epure::surface::{Layer, Shape};

fn transfer_steps(plan: &ConstructionPlan) -> usize {
    plan.titles()
        .iter()
        .filter(|t| t.starts_with("Report de l'angle"))
        .count()
}

#[test]
fn half_turn_theater_yields_ten_rays() {
    // baseAngle 20, totalAngle 180 → 10 rays.
    let config = Config::theater();
    assert_eq!(config.ray_count(), 10);
}

#[test]
fn one_transfer_step_per_ray_beyond_the_seeds() {
    for config in [
        Config::fan(),
        Config::spiral(),
        Config::theater(),
        Config::fan().with_base_angle(25.0),
        Config::theater().with_base_angle(36.0),
    ] {
        let expected = config.ray_count() - 2;
        let plan = ConstructionPlan::build(config).unwrap();
        assert_eq!(transfer_steps(&plan), expected);
    }
}

#[test]
fn narrative_opens_identically_for_every_variant() {
    for config in [Config::fan(), Config::spiral(), Config::theater()] {
        let plan = ConstructionPlan::build(config).unwrap();
        let titles = plan.titles();
        assert_eq!(titles[0], "Le centre");
        assert_eq!(titles[1], "Le premier rayon");
        assert_eq!(titles[2], "L'arc de référence");
        assert_eq!(titles[3], "La corde de référence");
    }
}

#[test]
fn each_variant_closes_with_its_own_finale() {
    let fan = ConstructionPlan::build(Config::fan()).unwrap();
    assert_eq!(*fan.titles().last().unwrap(), "L'éventail");

    let spiral = ConstructionPlan::build(Config::spiral()).unwrap();
    assert_eq!(*spiral.titles().last().unwrap(), "La spirale achevée");

    let theater = ConstructionPlan::build(Config::theater()).unwrap();
    assert_eq!(*theater.titles().last().unwrap(), "L'orchestra");
}

#[test]
fn fan_finale_keeps_a_persistent_angle_label() {
    let plan = ConstructionPlan::build(Config::fan()).unwrap();
    let finale = plan.steps().last().unwrap();
    assert!(finale.shapes.iter().any(|s| {
        s.layer == Layer::Final
            && matches!(&s.shape, Shape::Label { text, .. } if text == "15°")
    }));
}

#[test]
fn theater_draws_one_step_per_ring() {
    let config = Config::theater();
    let ring_count = config.ring_count;
    let plan = ConstructionPlan::build(config).unwrap();
    let rings = plan
        .titles()
        .iter()
        .filter(|t| t.starts_with("Un gradin") || **t == "Le diazoma")
        .count();
    assert_eq!(rings, ring_count);
}

#[test]
fn theater_step_total_adds_up() {
    // 4 seed steps + 8 transfers + 9 rings + finale.
    let plan = ConstructionPlan::build(Config::theater()).unwrap();
    assert_eq!(plan.len(), 4 + 8 + 9 + 1);
}

#[test]
fn rebuilding_replaces_the_plan_wholesale() {
    let before = ConstructionPlan::build(Config::theater()).unwrap();
    let after = ConstructionPlan::build(Config::theater().with_base_angle(30.0)).unwrap();
    assert_eq!(transfer_steps(&before), 8);
    assert_eq!(transfer_steps(&after), 5);
    // The old plan is untouched by the rebuild.
    assert_eq!(before.len(), 22);
}

#[test]
fn invalid_configurations_are_rejected() {
    assert!(matches!(
        ConstructionPlan::build(Config::fan().with_inner_radius(-5.0)),
        Err(ConstructionError::InvalidRadius(_))
    ));
    assert!(matches!(
        ConstructionPlan::build(Config::fan().with_base_angle(0.0)),
        Err(ConstructionError::InvalidAngle { .. })
    ));
    assert!(matches!(
        ConstructionPlan::build(Config::theater().with_rings(3, 0.0)),
        Err(ConstructionError::InvalidRingStep(_))
    ));
}

#[test]
fn uneven_division_shortens_the_sweep_silently() {
    // 90 / 25 = 3.6 → 4 rays; the last lands at 75°, not 90°.
    let config = Config::fan().with_base_angle(25.0);
    let plan = ConstructionPlan::build(config.clone()).unwrap();
    assert_eq!(config.ray_count(), 4);
    assert_eq!(transfer_steps(&plan), 2);
    assert!(support::approx_eq(config.ray_angle(3), 75.0, 1e-9));
}
