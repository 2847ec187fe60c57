//! collide2d verification harness
//!
//! Runs the literal collision scenarios and a seeded randomized sweep. The
//! sweep feeds same-kind pairs to the free predicates in both argument orders
//! and checks that [`Shape::collides`] agrees with them.
//!
//! Usage: `collide2d [settings.json]`

use std::process::ExitCode;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use collide2d::collision::{
    circles_collide, lines_collide, oriented_rectangles_collide, points_collide,
    rectangles_collide, segments_collide,
};
use collide2d::consts::PI;
use collide2d::{
    Circle, Line, LineSegment, OrientedRectangle, Rectangle, Settings, Shape, ShapeKind, Vector2D,
    radians_to_degrees,
};

/// Tally of passed and failed checks
#[derive(Default)]
struct Report {
    passed: u32,
    failed: u32,
}

impl Report {
    fn check(&mut self, name: &str, ok: bool) {
        if ok {
            self.passed += 1;
            log::debug!("pass: {}", name);
        } else {
            self.failed += 1;
            log::error!("FAIL: {}", name);
        }
    }
}

fn v(x: f32, y: f32) -> Vector2D {
    Vector2D::new(x, y)
}

fn run_scenarios(settings: &Settings, report: &mut Report) {
    let tol = settings.tolerance;

    // Vector algebra
    let a = v(7.0, 4.0);
    let b = v(3.0, -3.0);
    report.check("negate", (a + -b).approx_eq_with(a - b, tol));
    report.check("unit length", tol.equal(v(10.0, 5.0).unit().length(), 1.0));
    report.check("full turn", v(12.0, 3.0).rotate(2.0 * PI).approx_eq_with(v(12.0, 3.0), tol));

    let p = v(8.0, 2.0);
    let q = v(-2.0, 8.0);
    report.check("perpendicular dot", tol.is_zero(p.dot(q)));
    report.check("perpendicular angle", tol.equal(radians_to_degrees(p.enclosed_angle(q)), 90.0));

    // Rectangles
    let x = Rectangle::new(v(1.0, 1.0), v(4.0, 4.0));
    let y = Rectangle::new(v(2.0, 2.0), v(5.0, 5.0));
    let z = Rectangle::new(v(6.0, 4.0), v(4.0, 2.0));
    report.check("rectangles x/y", rectangles_collide(x, y));
    report.check("rectangles y/z", rectangles_collide(y, z));
    report.check("rectangles x/z", !rectangles_collide(x, z));

    // Circles
    let c1 = Circle::new(v(4.0, 4.0), 2.0);
    let c2 = Circle::new(v(7.0, 4.0), 2.0);
    let c3 = Circle::new(v(10.0, 4.0), 2.0);
    report.check("circles 1/2", circles_collide(c1, c2));
    report.check("circles 2/3", circles_collide(c2, c3));
    report.check("circles 1/3", !circles_collide(c1, c3));

    // Points
    report.check("points equal", points_collide(v(2.0, 3.0), v(2.0, 3.0)));
    report.check("points apart", !points_collide(v(2.0, 3.0), v(3.0, 4.0)));

    // Lines
    let down = v(5.0, -1.0);
    let up = v(5.0, 2.0);
    let l1 = Line::new(v(3.0, 5.0), down);
    let l2 = Line::new(v(3.0, 5.0), up);
    let l3 = Line::new(v(3.0, 2.0), up);
    let l4 = Line::new(v(8.0, 4.0), down);
    report.check("lines 1/2", lines_collide(l1, l2));
    report.check("lines 1/3", lines_collide(l1, l3));
    report.check("lines 2/3", !lines_collide(l2, l3));
    report.check("lines 1/4", lines_collide(l1, l4));
}

fn random_point(rng: &mut Pcg32, extent: f32) -> Vector2D {
    v(rng.random_range(-extent..extent), rng.random_range(-extent..extent))
}

fn random_shape(rng: &mut Pcg32, extent: f32, kind: ShapeKind) -> Shape {
    let size = extent / 4.0;
    match kind {
        ShapeKind::Point => Shape::Point(random_point(rng, extent)),
        ShapeKind::Line => Shape::Line(Line::new(random_point(rng, extent), random_point(rng, 1.0))),
        ShapeKind::Segment => Shape::Segment(LineSegment::new(
            random_point(rng, extent),
            random_point(rng, extent),
        )),
        ShapeKind::Circle => Shape::Circle(Circle::new(
            random_point(rng, extent),
            rng.random_range(0.0..size),
        )),
        ShapeKind::Rectangle => Shape::Rectangle(Rectangle::new(
            random_point(rng, extent),
            v(rng.random_range(0.0..size), rng.random_range(0.0..size)),
        )),
        ShapeKind::OrientedRectangle => Shape::OrientedRectangle(OrientedRectangle::new(
            random_point(rng, extent),
            v(rng.random_range(0.0..size), rng.random_range(0.0..size)),
            rng.random_range(-PI..PI),
        )),
    }
}

/// Free predicate for a same-kind pair, as `(f(a, b), f(b, a))`
fn both_orders(a: Shape, b: Shape) -> Option<(bool, bool)> {
    let answers = match (a, b) {
        (Shape::Point(a), Shape::Point(b)) => (points_collide(a, b), points_collide(b, a)),
        (Shape::Line(a), Shape::Line(b)) => (lines_collide(a, b), lines_collide(b, a)),
        (Shape::Segment(a), Shape::Segment(b)) => (segments_collide(a, b), segments_collide(b, a)),
        (Shape::Circle(a), Shape::Circle(b)) => (circles_collide(a, b), circles_collide(b, a)),
        (Shape::Rectangle(a), Shape::Rectangle(b)) => {
            (rectangles_collide(a, b), rectangles_collide(b, a))
        }
        (Shape::OrientedRectangle(a), Shape::OrientedRectangle(b)) => {
            (oriented_rectangles_collide(a, b), oriented_rectangles_collide(b, a))
        }
        _ => return None,
    };
    Some(answers)
}

/// Same-kind pairs must answer the same in both argument orders, and the
/// tagged dispatch must agree with the free predicate
fn run_sweep(settings: &Settings, report: &mut Report) {
    let mut rng = Pcg32::seed_from_u64(settings.sweep_seed);
    let extent = settings.sweep_extent.abs().max(1.0);
    let mut hits = 0usize;
    let mut asymmetric = 0usize;
    let mut misrouted = 0usize;

    for _ in 0..settings.sweep_count {
        let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        let a = random_shape(&mut rng, extent, kind);
        let b = random_shape(&mut rng, extent, kind);
        let Some((forward, backward)) = both_orders(a, b) else {
            continue;
        };
        if forward {
            hits += 1;
        }
        if forward != backward {
            asymmetric += 1;
            log::warn!("asymmetric result: {:?} vs {:?}", a, b);
        }
        if a.collides(&b) != forward || b.collides(&a) != backward {
            misrouted += 1;
            log::warn!("dispatch disagrees for {} pair: {:?} vs {:?}", kind.as_str(), a, b);
        }
    }

    log::info!(
        "Sweep: {} pairs, {} colliding, {} asymmetric, {} misrouted (seed {})",
        settings.sweep_count,
        hits,
        asymmetric,
        misrouted,
        settings.sweep_seed
    );
    report.check("sweep symmetry", asymmetric == 0);
    report.check("sweep dispatch", misrouted == 0);
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("collide2d verification starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::load(Settings::FILE_NAME),
    };

    let mut report = Report::default();
    run_scenarios(&settings, &mut report);
    run_sweep(&settings, &mut report);

    println!("{} checks passed, {} failed", report.passed, report.failed);
    if report.failed == 0 {
        println!("✓ All collision checks passed!");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
