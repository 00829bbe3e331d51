//! Segment construction, distance, side, extend/deflect and SED cases.

use super::*;
use crate::vector::float_eq;
use proptest::prelude::*;

const PREC: i32 = 8;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn deg(d: f64) -> f64 {
    d.to_radians()
}

#[test]
fn zero_segment_has_zero_everything() {
    let v = Vect::new(Point::origin(), Point::origin());
    assert_eq!(v.a(), p(0.0, 0.0));
    assert_eq!(v.b(), p(0.0, 0.0));
    assert_eq!(v.v(), Vector::zero());
    for o in [v.magnitude(), v.direction(), v.at(), v.bt()] {
        assert_eq!(o, 0.0);
    }
    let w = Vect::new(Point::origin(), p(3.0, 4.0));
    assert_eq!(w.v(), Vector::new(3.0, 4.0));
    assert_eq!(w.magnitude(), 5.0);
}

#[test]
fn tiny_vectors_are_kept_by_every_spec() {
    let a = p(1.0, 1.0);
    let v = Vector::new(1e-13, -2e-13);
    for spec in [
        VectSpec::FromEndpoints { a, b: a + v },
        VectSpec::FromOriginAndVector { a, v },
        VectSpec::FromOriginMagnitudeDirection {
            a,
            m: 1e-13,
            d: 1.0,
        },
    ] {
        let seg = Vect::from_spec(spec);
        assert!(seg.magnitude() > 0.0, "{spec:?}");
        assert_ne!(seg.b(), a, "{spec:?}");
    }
}

#[test]
fn degenerate_specs_collapse_onto_origin() {
    let a = Point::with_time(2.0, 3.0, 7.5);
    for spec in [
        VectSpec::FromOriginAndVector {
            a,
            v: Vector::zero(),
        },
        VectSpec::FromOriginMagnitudeDirection { a, m: 0.0, d: 3.0 },
    ] {
        let v = Vect::from_spec(spec);
        assert_eq!(v.b(), a);
        assert_eq!(v.v(), Vector::zero());
        assert_eq!(v.magnitude(), 0.0);
        assert_eq!(v.direction(), 0.0);
        assert_eq!((v.at(), v.bt()), (7.5, 7.5));
    }
}

#[test]
fn every_spec_keeps_v_equal_to_b_minus_a() {
    let a = p(1.5, -2.0);
    let specs = [
        VectSpec::FromEndpoints { a, b: p(4.0, 1.0) },
        VectSpec::FromOriginAndVector {
            a,
            v: Vector::new(-3.0, 0.25),
        },
        VectSpec::FromOriginMagnitudeDirection {
            a,
            m: 2.0,
            d: deg(200.0),
        },
    ];
    for spec in specs {
        let v = Vect::from_spec(spec);
        let d = v.b() - v.a() - v.v();
        assert!(d.magnitude() < 1e-12, "{spec:?}");
    }
}

#[test]
fn time_tags_and_copy_on_read() {
    let a = Point::with_time(10.0, 150.0, 6.5);
    let e = Point::with_time(280.0, 280.0, 12.8);
    let v = Vect::new(a, e);
    assert_eq!(v.at(), 6.5);
    assert_eq!(v.bt(), 12.8);
    assert_eq!(v.dt(), 12.8 - 6.5);
    assert_eq!(v.magnitude(), p(10.0, 150.0).distance(&p(280.0, 280.0)));

    let mut va = v.a();
    va = va + Vector::new(21.0, -117.0);
    assert_eq!(va, p(31.0, 33.0));
    assert_eq!(v.a(), a);
    assert_eq!(v.b(), e);

    let neg = v.v().negate();
    assert_eq!(neg, v.v().scale(-1.0));

    let retimed = v.with_times(0.0, 1.0);
    assert_eq!(retimed.dt(), 1.0);
    assert_eq!(retimed.b(), v.b());
}

#[test]
fn derived_endpoint_inherits_start_time() {
    let v = Vect::from_spec(VectSpec::FromOriginAndVector {
        a: Point::with_time(0.0, 0.0, 4.0),
        v: Vector::new(1.0, 0.0),
    });
    assert_eq!((v.at(), v.bt(), v.dt()), (4.0, 4.0, 0.0));
    assert_eq!(v.b(), p(1.0, 0.0));
}

#[test]
fn polar_construction() {
    let vk = Vect::from_spec(VectSpec::FromOriginMagnitudeDirection {
        a: Point::origin(),
        m: 5.0,
        d: deg(53.13010235415598),
    });
    assert_eq!(round_to(vk.b().x(), PREC), 3.0);
    assert_eq!(round_to(vk.b().y(), PREC), 4.0);

    let va = Vect::from_spec(VectSpec::FromOriginMagnitudeDirection {
        a: Point::origin(),
        m: 25.0,
        d: deg(165.0),
    });
    assert_eq!(round_to(va.b().x(), PREC), round_to(-24.148145657226706, PREC));
    assert_eq!(round_to(va.b().y(), PREC), round_to(6.470476127563026, PREC));
    assert!(float_eq(va.magnitude(), 25.0));
    assert!((va.direction() - deg(165.0)).abs() < 1e-12);
    assert_eq!(round_to(va.b().x(), PREC), round_to(va.v().dx(), PREC));
    assert_eq!(round_to(va.b().y(), PREC), round_to(va.v().dy(), PREC));
}

#[test]
fn distance_to_segment() {
    let a = p(16.82295, 10.44635);
    let b = p(28.99656, 15.76452);
    let seg = Vect::new(a, b);
    let cases = [
        (p(30.0, 0.0), 14.85),
        (p(15.78786, 25.26468), 13.99),
        (p(-2.61504, -3.09018), 23.69),
        (p(28.85125, 27.81773), 12.05),
        (a, 0.0),
        (b, 0.0),
        (p(25.32, 14.16), 0.0),
    ];
    for (pt, want) in cases {
        assert_eq!(round_to(seg.distance_to_point(&pt), 2), want, "{pt:?}");
    }
}

#[test]
fn distance_picks_nearest_endpoint_beyond_the_ends() {
    let seg = Vect::new(p(0.0, 0.0), p(4.0, 0.0));
    assert!((seg.distance_to_point(&p(-3.0, 4.0)) - 5.0).abs() < 1e-12);
    assert!((seg.distance_to_point(&p(7.0, -4.0)) - 5.0).abs() < 1e-12);
    assert!((seg.distance_to_point(&p(2.0, -1.5)) - 1.5).abs() < 1e-12);
    let dot = Vect::new(p(1.0, 1.0), p(1.0, 1.0));
    assert!((dot.distance_to_point(&p(4.0, 5.0)) - 5.0).abs() < 1e-12);
    assert_eq!(dot.distance_to_point(&p(1.0, 1.0)), 0.0);
}

#[test]
fn side_of_segment() {
    let k = p(-0.887, -1.6128);
    let u = p(4.55309, 1.42996);
    let v = Vect::new(k, u);
    let cases = [
        (p(2.0, 2.0), Side::Left),
        (p(0.0, 2.0), Side::Left),
        (p(0.0, -2.0), Side::Right),
        (p(2.0, -2.0), Side::Right),
        (p(0.0, 0.0), Side::Left),
        (p(2.0, 0.0), Side::Right),
        (u, Side::On),
        (k, Side::On),
    ];
    let rev = Vect::new(u, k);
    for (pt, want) in cases {
        assert_eq!(v.side_of(&pt), want, "{pt:?}");
        assert_eq!(rev.side_of(&pt), want.flip(), "{pt:?}");
    }
}

#[test]
fn sed_vector_at_time() {
    let v = Vect::new(
        Point::with_time(10.0, 150.0, 6.5),
        Point::with_time(280.0, 280.0, 12.8),
    );
    let sed = v.sed_vector(p(185.0, 155.0), 8.6);
    assert_eq!(round_to(sed.magnitude(), PREC), 93.24400487);
    assert_eq!(sed.a().t(), Some(8.6));
    // at the start time the interpolated point is A itself
    let at_start = v.sed_vector(p(10.0, 150.0), 6.5);
    assert!(at_start.magnitude() < 1e-9);
}

#[test]
fn directions_of_reference_legs() {
    let a2 = p(0.88682, -1.06102);
    let b2 = p(3.5, 1.0);
    let c2 = p(-3.0, 1.0);
    let d2 = p(-1.5, -3.0);
    let o = Point::origin();
    let r = |x: f64| round_to(x, PREC);
    assert_eq!(r(Vect::new(o, a2).direction()), r(deg(309.889497029295)));
    assert_eq!(r(Vect::new(o, b2).direction()), r(deg(15.945395900922854)));
    assert_eq!(r(Vect::new(o, c2).direction()), r(deg(161.565051177078)));
    assert_eq!(r(Vect::new(o, d2).direction()), r(deg(243.43494882292202)));
    let vdb = Vect::new(d2, b2);
    assert_eq!(round_to(vdb.magnitude(), 4), round_to(6.4031242374328485, 4));
    assert_eq!(r(vdb.direction()), r(deg(38.65980825409009)));
    assert_eq!(Vect::new(o, p(-1.0, 0.0)).reverse_direction(), 0.0);
    assert_eq!(round_to(Vect::new(o, a2).project(&Vect::new(o, b2)), 5), 0.56121);
}

#[test]
fn extend_and_deflect_agree() {
    let vdb = Vect::new(p(-1.5, -3.0), p(3.5, 1.0));
    let close = |a: Point, b: Point| (a.x() - b.x()).abs() < 1e-9 && (a.y() - b.y()).abs() < 1e-9;

    let defl = 157.2855876468;
    let vo = vdb.extend_vect(3.64005494464026, deg(180.0 + defl), true);
    let vo_defl = vdb.deflect_vector(3.64005494464026, deg(-defl), true);
    assert!(close(vo.b(), vo_defl.b()));
    assert!(close(vo.b(), Point::origin()));
    assert_eq!(vo.a(), vdb.b());

    let defl_b = 141.34019174590992;
    let incl_d = 71.89623696549336;
    let vextc = vdb.extend_vect(6.5, deg(180.0 + defl_b), true);
    let vext_from_d = vdb.extend_vect(4.272001872658765, deg(incl_d), false);
    let vdefl_from_d = vdb.deflect_vector(4.272001872658765, deg(180.0 - incl_d), false);
    assert!(close(vext_from_d.b(), vdefl_from_d.b()));
    assert!(close(vext_from_d.b(), vextc.b()));
    assert!(close(vextc.b(), p(-3.0, 1.0)));
    assert!((vextc.v().dx() + vextc.magnitude()).abs() < 1e-9);
    assert!(vextc.v().dy().abs() < 1e-9);
}

#[test]
fn deflection_between_consecutive_segments() {
    let v0 = Vect::new(p(0.0, 0.0), p(20.0, 30.0));
    let v1 = Vect::new(p(20.0, 30.0), p(40.0, 15.0));
    assert_eq!(
        round_to(v0.deflection_angle(&v1), 10),
        round_to(deg(93.17983011986422), 10)
    );
    let v2 = Vect::new(p(20.0, 30.0), p(20.0, 60.0));
    assert_eq!(
        round_to(v0.deflection_angle(&v2), 10),
        round_to(deg(-33.690067525979806), 10)
    );
}

#[test]
fn on_segment_point_with_rounding_overshoot_is_zero() {
    let seg = Vect::new(
        p(21.57757938620817, -20.43717251211463),
        p(27.788438118280112, -20.816548479765203),
    );
    let d = seg.distance_to_point(&p(23.400809561996994, -20.54854031840812));
    assert!(d.is_finite());
    assert!(d < 1e-9, "{d}");
}

proptest! {
    #[test]
    fn extend_matches_deflect_by_supplement(
        m in 0.1f64..100.0,
        angle in -7.0f64..7.0,
        from_end in any::<bool>(),
        bx in -50.0f64..50.0,
        by in -50.0f64..50.0,
    ) {
        let seg = Vect::new(p(1.0, -2.0), p(bx, by));
        let e = seg.extend_vect(m, angle, from_end).b();
        let d = seg.deflect_vector(m, PI - angle, from_end).b();
        prop_assert!(e.distance(&d) < 1e-9);
    }

    #[test]
    fn points_on_the_segment_have_zero_distance(
        ax in -100.0f64..100.0,
        ay in -100.0f64..100.0,
        bx in -100.0f64..100.0,
        by in -100.0f64..100.0,
        s in 0.0f64..=1.0,
    ) {
        let (a, b) = (p(ax, ay), p(bx, by));
        let seg = Vect::new(a, b);
        let on = a + seg.v() * s;
        prop_assert!(seg.distance_to_point(&on) < 1e-9);
        prop_assert_eq!(seg.distance_to_point(&a), 0.0);
        prop_assert_eq!(seg.distance_to_point(&b), 0.0);
    }

    #[test]
    fn swapping_endpoints_flips_the_side(
        ax in -100.0f64..100.0,
        ay in -100.0f64..100.0,
        bx in -100.0f64..100.0,
        by in -100.0f64..100.0,
        px in -100.0f64..100.0,
        py in -100.0f64..100.0,
    ) {
        let (a, b, q) = (p(ax, ay), p(bx, by), p(px, py));
        prop_assert_eq!(Vect::new(b, a).side_of(&q), Vect::new(a, b).side_of(&q).flip());
    }
}
