//! Whole-session scenarios driven through the public API

use glam::DVec2;
use tilt_ball::renderer::Recorder;
use tilt_ball::sim::{MotionState, Viewport, react, tick};
use tilt_ball::input::InputState;
use tilt_ball::{BallError, RenderLoop, Settings, Simulation};

fn simulation(width: f64, height: f64) -> Simulation {
    Simulation::new(Viewport::new(width, height).unwrap(), Settings::default())
}

#[test]
fn thrust_changes_velocity_not_position() {
    let mut sim = simulation(800.0, 600.0);
    assert_eq!(sim.motion.position, DVec2::new(400.0, 300.0));

    assert!(sim.key_down(" ").unwrap());
    assert_eq!(sim.motion.velocity.y, -0.75);
    assert_eq!(sim.motion.position, DVec2::new(400.0, 300.0));

    // Applied on the next integrate step, no wall in reach
    let mut recorder = Recorder::new();
    let hits = sim.frame(Some(&mut recorder)).unwrap();
    assert!(!hits.any());
    assert_eq!(sim.motion.position, DVec2::new(400.0, 299.25));
}

#[test]
fn right_edge_deflection_and_clamp() {
    let mut state = MotionState::new(Viewport::new(850.0, 600.0).unwrap());
    state.position.x = 830.0;
    state.velocity.x = 5.4;
    state.frame_count = 1;

    let hits = tick(&mut state, false).unwrap();
    assert!(hits.right);
    assert_eq!(state.velocity.x, -3.6);
    assert_eq!(state.position.x, 825.0);
}

#[test]
fn dropped_ball_comes_to_rest_on_floor() {
    let mut sim = simulation(800.0, 600.0);
    let mut recorder = Recorder::new();

    for _ in 0..5000 {
        sim.frame(Some(&mut recorder)).unwrap();
        assert!(sim.motion.in_bounds());
    }

    assert_eq!(sim.motion.position.y, 575.0);
    assert_eq!(sim.motion.position.x, 400.0);
    assert!(sim.motion.velocity.y <= 0.5);
    assert_eq!(recorder.frames(), 5000);
}

#[test]
fn held_directions_cancel_out() {
    let mut sim = simulation(800.0, 600.0);
    sim.key_down("ArrowLeft").unwrap();
    sim.key_down("ArrowLeft").unwrap();
    assert_eq!(sim.motion.velocity.x, -1.0);

    sim.key_down("d").unwrap();
    assert_eq!(sim.motion.velocity.x, 0.0);
}

#[test]
fn suspended_gravity_floats() {
    let mut sim = simulation(800.0, 600.0);
    sim.key_up("Shift").unwrap();
    let mut recorder = Recorder::new();

    for _ in 0..200 {
        sim.frame(Some(&mut recorder)).unwrap();
    }
    assert_eq!(sim.motion.position.y, 300.0);
    assert_eq!(sim.motion.gravity, 0.0);

    sim.key_up("Shift").unwrap();
    assert_eq!(sim.motion.gravity, 0.5);
}

#[test]
fn suspend_forced_on_every_reaction() {
    let mut state = MotionState::new(Viewport::new(800.0, 600.0).unwrap());
    let input = InputState {
        shift: true,
        ..Default::default()
    };
    for vy in [3.0, -2.0, 0.25] {
        state.velocity.y = vy;
        react(&mut state, &input, false).unwrap();
        assert_eq!(state.velocity.y, 0.0);
        assert_eq!(state.gravity, 0.0);
    }
}

#[test]
fn tilt_session_steers_and_skips_damping() {
    let mut sim = simulation(800.0, 600.0);
    sim.tilt.listening();
    assert!(!sim.tilt_active());

    // Tilt right by 20 degrees
    for _ in 0..20 {
        sim.orientation(Some(0.0), Some(20.0)).unwrap();
    }
    assert!(sim.tilt_active());
    assert!((sim.motion.velocity.x - 20.0).abs() < 0.1);

    let mut recorder = Recorder::new();
    let before = sim.motion.velocity;
    sim.frame(Some(&mut recorder)).unwrap();
    // Frame 0 would damp without tilt
    assert_eq!(sim.motion.velocity, before);

    let readout = sim.readout().unwrap();
    assert_eq!(readout.acc_x, Some(-20.0));
    assert_eq!(readout.tilt, None);
}

#[test]
fn denied_tilt_keeps_keyboard_control() {
    let mut sim = simulation(800.0, 600.0);
    sim.tilt.deny("NotAllowedError");

    assert!(!sim.orientation(Some(30.0), Some(30.0)).unwrap());
    sim.key_down("ArrowRight").unwrap();
    assert_eq!(sim.motion.velocity.x, 0.5);

    let json = sim.readout().unwrap().to_pretty();
    assert!(json.contains("denied"));
}

#[test]
fn loop_refuses_frames_before_surface() {
    let mut sim = simulation(800.0, 600.0);
    let mut render_loop = RenderLoop::new();
    assert!(render_loop.start());
    assert!(!render_loop.start());

    let err = render_loop.frame(&mut sim, None).unwrap_err();
    assert_eq!(err, BallError::UninitializedSurface);
    assert!(!render_loop.is_running());
    assert_eq!(sim.motion.frame_count, 0);
}
