use float_cmp::approx_eq;

use boxworld_engine::rigid_body_system::RESTING_SPEED;
use boxworld_engine::{BodyDesc, SceneBundle, WorldCore, WorldSettings};

const DT: f64 = 1.0 / 60.0;

/// 800x600 room, gravity 500, one 80x80 box dropped from (200, 100).
fn single_box_drop() -> WorldCore {
    let scene = SceneBundle {
        world: WorldSettings { width: 800.0, height: 600.0, gravity: 500.0 },
        bodies: vec![BodyDesc::rect(200.0, 100.0, 80.0, 80.0)],
    };
    WorldCore::from_scene(&scene).unwrap()
}

#[derive(Debug, PartialEq)]
enum FloorEvent {
    Bounce(usize, f64),
    Rest(usize),
}

/// Run `steps` steps and record every floor contact (1-based step numbers).
fn run(world: &mut WorldCore, steps: usize) -> Vec<FloorEvent> {
    let mut events = Vec::new();
    for n in 1..=steps {
        world.step(DT);
        let stats = world.last_step_stats();
        if stats.resting_contacts > 0 {
            events.push(FloorEvent::Rest(n));
        } else if stats.boundary_contacts > 0 {
            events.push(FloorEvent::Bounce(n, world.bodies()[0].velocity.y));
        }
    }
    events
}

#[test]
fn box_is_still_bouncing_after_two_seconds() {
    let mut world = single_box_drop();
    let events = run(&mut world, 120);

    assert_eq!(events.len(), 1);
    let body = &world.bodies()[0];
    assert!(body.bottom() < 600.0);
    assert!(approx_eq!(f64, body.pos.y, 495.8812079698172, epsilon = 1e-9));
    assert!(approx_eq!(f64, body.velocity.y, -16.91628818135365, epsilon = 1e-9));
    assert_eq!(body.pos.x, 200.0);
}

#[test]
fn box_bounces_four_times_then_rests_on_step_165() {
    let mut world = single_box_drop();
    let events = run(&mut world, 165);

    let bounces: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            FloorEvent::Bounce(n, _) => Some(*n),
            FloorEvent::Rest(_) => None,
        })
        .collect();
    assert_eq!(bounces, vec![104, 142, 157, 163]);
    assert_eq!(events.last(), Some(&FloorEvent::Rest(165)));

    let rebounds = [-179.19217195090633, -67.83786875086479, -28.323997952211936, -10.76188168281276];
    for (event, expected) in events.iter().zip(rebounds) {
        match event {
            FloorEvent::Bounce(_, vy) => {
                assert!(approx_eq!(f64, *vy, expected, epsilon = 1e-9));
                assert!(vy.abs() >= RESTING_SPEED);
            }
            FloorEvent::Rest(n) => panic!("unexpected rest at step {}", n),
        }
    }
}

#[test]
fn resting_box_stays_on_the_floor() {
    let mut world = single_box_drop();
    run(&mut world, 165);

    for _ in 0..120 {
        world.step(DT);
        let body = &world.bodies()[0];
        assert_eq!(body.bottom(), 600.0);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(world.last_step_stats().resting_contacts, 1);
    }
}

#[test]
fn identical_runs_are_bit_for_bit_equal() {
    let mut a = WorldCore::from_scene(&SceneBundle::demo()).unwrap();
    let mut b = WorldCore::from_scene(&SceneBundle::demo()).unwrap();
    a.spawn_box_from_drag(500.0, 300.0, 420.0, 260.0);
    b.spawn_box_from_drag(500.0, 300.0, 420.0, 260.0);

    for _ in 0..600 {
        a.step(DT);
        b.step(DT);
    }

    for (x, y) in a.bodies().iter().zip(b.bodies()) {
        assert_eq!(x.pos.x.to_bits(), y.pos.x.to_bits());
        assert_eq!(x.pos.y.to_bits(), y.pos.y.to_bits());
        assert_eq!(x.velocity.x.to_bits(), y.velocity.x.to_bits());
        assert_eq!(x.velocity.y.to_bits(), y.velocity.y.to_bits());
    }
}

#[test]
fn demo_scene_settles_inside_bounds() {
    let mut world = WorldCore::from_scene(&SceneBundle::demo()).unwrap();
    for _ in 0..1200 {
        world.tick(DT);
    }

    for body in world.bodies() {
        assert!(body.left() >= 0.0 && body.right() <= 800.0);
        assert!(body.top() >= 0.0 && body.bottom() <= 600.0);
        assert!(body.velocity.y.abs() < RESTING_SPEED);
    }
}
