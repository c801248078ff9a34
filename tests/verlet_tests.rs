use poleworld::{DynamicBody, Physics, PhysicsConfig, Point, Pole, Vec2};

#[test]
fn rest_point_is_stable() {
    let mut p: Point<f64> = Point::new(Vec2::new(4.0, -3.0));
    for _ in 0..10 {
        p.integrate(1.0 / 60.0, 1.0);
    }
    assert_eq!(p.pos, Vec2::new(4.0, -3.0));
}

#[test]
fn one_step_matches_verlet_formula() {
    let config = PhysicsConfig::new().with_gravity(Vec2::new(0.0, -10.0));
    let mut world: Physics<f64> = Physics::new(config);
    world.add_dynamic_body(DynamicBody::particle(Vec2::new(0.0, 0.0)));

    world.step(1.0);

    let p = world.dynamic_bodies()[0].point(0);
    assert_eq!(p.pos, Vec2::new(0.0, -10.0));
    assert_eq!(p.prev_pos, Vec2::new(0.0, 0.0));
}

#[test]
fn free_fall_gravity() {
    let mut p: Point<f32> = Point::new(Vec2::new(0.0, 100.0));
    let g = Vec2::new(0.0, -9.81);
    let dt = 1.0 / 60.0;

    for _ in 0..60 {
        p.apply_acceleration(g);
        p.integrate(dt, 1.0);
    }

    let expected_y = 100.0 - 0.5 * 9.81 * 1.0;
    assert!((p.pos.y - expected_y).abs() < 1.0, "pos.y = {}, expected ~ {}", p.pos.y, expected_y);
}

#[test]
fn pole_relaxes_ten_to_seven_and_a_half() {
    let mut points = [
        Point::new(Vec2::new(0.0f64, 0.0)),
        Point::new(Vec2::new(10.0, 0.0)),
    ];
    let pole = Pole::new(0, 1, 5.0).unwrap();
    pole.satisfy(&mut points);

    let dist = points[0].pos.distance(points[1].pos);
    assert!((dist - 7.5).abs() < 1e-12, "distance = {}", dist);
    // symmetric: both moved the same amount toward each other
    assert!((points[0].pos.x - 1.25).abs() < 1e-12);
    assert!((points[1].pos.x - 8.75).abs() < 1e-12);
}

#[test]
fn repeated_relaxation_converges() {
    let points = vec![
        Point::new(Vec2::new(0.0f64, 0.0)),
        Point::new(Vec2::new(20.0, 0.0)),
    ];
    let poles = vec![Pole::new(0, 1, 5.0).unwrap()];
    let mut body = DynamicBody::new(points, poles).unwrap();

    body.step(1.0 / 60.0, Vec2::zero(), 1.0, 40);

    let dist = body.point(0).pos.distance(body.point(1).pos);
    assert!((dist - 5.0).abs() < 1e-3, "Distance should be near 5.0, got {}", dist);
}

#[test]
fn pinned_point_never_moves() {
    let config = PhysicsConfig::new()
        .with_gravity(Vec2::new(0.0f64, -9.81))
        .with_iterations(8);
    let mut world = Physics::new(config);
    world.add_static_box(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)).unwrap();

    // a pendulum whose anchor sits inside the static box
    let mut body = DynamicBody::particle(Vec2::new(0.5, 0.5));
    body.add_point(Point::new(Vec2::new(3.0, 0.5)));
    body.connect(0, 1).unwrap();
    body.pin(0);
    world.add_dynamic_body(body);

    for _ in 0..120 {
        world.step(1.0 / 60.0);
        assert_eq!(world.dynamic_bodies()[0].point(0).pos, Vec2::new(0.5, 0.5));
    }
    assert!(world.dynamic_bodies()[0].point(1).pos.y < 0.5);
}

#[test]
fn damping_slows_motion() {
    let run = |damping: f64| {
        let config = PhysicsConfig::new().with_damping(damping);
        let mut world = Physics::new(config);
        let mut body = DynamicBody::particle(Vec2::new(0.0, 0.0));
        *body.point_mut(0) = Point::with_velocity(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        world.add_dynamic_body(body);
        for _ in 0..10 {
            world.step(1.0 / 60.0);
        }
        world.dynamic_bodies()[0].point(0).pos.x
    };
    assert!((run(1.0) - 10.0).abs() < 1e-9);
    assert!(run(0.9) < run(1.0));
}
