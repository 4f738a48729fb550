use epure::config::Config;
use epure::director::PlayState;
use epure::errors::ConstructionError;
use epure::session::{Mode, Session};

#[test]
fn session_starts_idle_in_animation_mode() {
    let mut session = Session::new(Config::theater()).unwrap();
    assert_eq!(session.mode(), Mode::Animation);
    assert_eq!(session.surface().construction_len(), 0);
    assert_eq!(session.surface().final_len(), 0);
    assert_eq!(session.director().unwrap().state(), PlayState::Idle);
    assert!(session.explorer().is_none());
}

#[test]
fn switching_to_exploration_renders_the_first_step() {
    let mut session = Session::new(Config::theater()).unwrap();
    session.set_mode(Mode::Exploration).unwrap();
    assert_eq!(session.mode(), Mode::Exploration);
    assert!(session.director().is_none());
    // Step 0 (the center mark) is already on the construction layer.
    assert_eq!(session.surface().construction_len(), 1);
}

#[test]
fn mode_switch_tears_the_surface_down() {
    let mut session = Session::new(Config::theater()).unwrap();
    session.set_mode(Mode::Exploration).unwrap();
    session.explorer().unwrap().go_to_step(8);
    assert!(session.surface().final_len() > 0);

    session.set_mode(Mode::Animation).unwrap();
    // Fresh surface, idle director: nothing drawn by the other mode survives.
    assert_eq!(session.surface().construction_len(), 0);
    assert_eq!(session.surface().final_len(), 0);
    assert_eq!(session.director().unwrap().state(), PlayState::Idle);
}

#[test]
fn animation_and_exploration_are_mutually_exclusive() {
    let mut session = Session::new(Config::fan()).unwrap();
    assert!(session.director().is_some());
    assert!(session.explorer().is_none());
    session.set_mode(Mode::Exploration).unwrap();
    assert!(session.director().is_none());
    assert!(session.explorer().is_some());
}

#[test]
fn live_angle_change_rebuilds_the_plan() {
    let mut session = Session::new(Config::theater()).unwrap();
    assert_eq!(session.director().unwrap().plan().len(), 22);

    session.set_base_angle(30.0).unwrap();
    // 180 / 30 → 7 rays → 5 transfers; rings and finale unchanged.
    assert_eq!(session.config().base_angle_deg, 30.0);
    assert_eq!(session.director().unwrap().plan().len(), 4 + 5 + 9 + 1);
}

#[test]
fn invalid_reconfiguration_leaves_the_session_intact() {
    let mut session = Session::new(Config::theater()).unwrap();
    let result = session.set_base_angle(0.0);
    assert!(matches!(
        result,
        Err(ConstructionError::InvalidAngle { .. })
    ));
    assert_eq!(session.config().base_angle_deg, 20.0);
    assert_eq!(session.director().unwrap().plan().len(), 22);
}

#[test]
fn sessions_are_independent() {
    let mut left = Session::new(Config::fan()).unwrap();
    let right = Session::new(Config::fan()).unwrap();

    left.set_mode(Mode::Exploration).unwrap();
    left.explorer().unwrap().go_to_step(3);

    assert!(left.surface().construction_len() > 0);
    assert_eq!(right.surface().construction_len(), 0);
}
