//! Property checks across the public API.

use planar::prelude::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

fn small_set() -> impl Strategy<Value = Set<i32>> {
    prop::collection::vec(-20i32..20, 0..15).prop_map(Set::from)
}

proptest! {
    #[test]
    fn point_vector_inverse_law(x in coord(), y in coord(), vx in coord(), vy in coord()) {
        let p = Point::new(x, y);
        let v = Vector::new(vx, vy);
        prop_assert_eq!(p + Vector::zero(), p);
        prop_assert_eq!(p - v + v, p);
    }

    #[test]
    fn normalized_vectors_have_unit_length(x in coord(), y in coord()) {
        let v = Vector::new(x, y);
        prop_assume!(v.magnitude() > 1e-9);
        prop_assert!((v.to_normalized().magnitude() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_preserves_length(x in coord(), y in coord(), a in -720.0f64..720.0) {
        let v = Vector::new(x, y);
        let r = v.rotated_by(a, AngleUnit::Degrees);
        prop_assert!((r.magnitude() - v.magnitude()).abs() < 1e-5);
    }

    #[test]
    fn points_on_circle_locate_on(
        cx in coord(), cy in coord(), r in 0.1f64..100.0, a in 0.0f64..360.0
    ) {
        let c = Circle::new(Point::new(cx, cy), r).unwrap();
        let p = c.point_at_angle(a, AngleUnit::Degrees);
        prop_assert_eq!(c.locate(p), Position::On);
    }

    #[test]
    fn boundary_round_trips_finite_values(x in -1.0e9f64..1.0e9) {
        let b = Boundary::<f64>::try_from(x).unwrap();
        prop_assert!(b.is_closed());
        prop_assert_eq!(*b.value(), x);
    }

    #[test]
    fn add_is_idempotent(mut s in small_set(), x in -20i32..20) {
        s.insert(x);
        let once = s.clone();
        s.insert(x);
        prop_assert_eq!(s, once);
    }

    #[test]
    fn union_and_intersection_laws(a in small_set(), b in small_set()) {
        let u = a.union(&b);
        let i = a.intersection(&b);
        prop_assert_eq!(&u, &b.union(&a));
        prop_assert_eq!(&i, &b.intersection(&a));
        prop_assert!(u.subset(&a) && u.subset(&b));
        prop_assert!(a.subset(&i) && b.subset(&i));
        prop_assert_eq!(u.len() + i.len(), a.len() + b.len());
        prop_assert!(a.difference(&b).intersection(&b).is_empty());
    }

    #[test]
    fn orderable_sets_iterate_ascending(s in small_set()) {
        let v: Vec<i32> = s.iter().copied().collect();
        prop_assert!(v.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn seeded_lines_through_common_point_meet_there() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let p = Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let m1: f64 = rng.gen_range(-5.0..5.0);
        let m2 = m1 + rng.gen_range(0.5..3.0);
        let a = Line::new(p, p + Vector::new(1.0, m1)).unwrap();
        let b = Line::new(p, p + Vector::new(1.0, m2)).unwrap();
        let hit = a.intersection(&b).expect("non-parallel lines meet");
        assert_eq!(hit, p);
    }
}

#[test]
fn seeded_range_sets_match_step_count() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let start: i64 = rng.gen_range(-100..100);
        let len: i64 = rng.gen_range(0..50);
        let step: i64 = rng.gen_range(1..7);
        let s = Set::from_range_by(start, start + len, step).unwrap();
        assert_eq!(s.len() as i64, len / step + 1);
        assert_eq!(s.min().unwrap(), start);
        assert_eq!(s.range().unwrap(), (len / step) * step);
    }
}
