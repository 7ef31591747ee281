pub use glam::{DVec2, IVec2};

// All derived geometry (headings, magnitudes, normals) is done on DVec2;
// checkpoint coordinates stay IVec2 so comparisons are exact integer equality.

/// Vector operations the pod math needs that glam doesn't spell directly.
pub trait VecExt {
    /// Unit-length left perpendicular. Divides by the magnitude, so the zero
    /// vector is outside this operation's domain.
    fn normal(self) -> DVec2;

    /// Integer coordinates for an outgoing command, truncated toward zero to
    /// match the command format. Used only at the output boundary.
    fn command_coords(self) -> IVec2;
}

impl VecExt for DVec2 {
    fn normal(self) -> DVec2 {
        self.perp() / self.length()
    }

    fn command_coords(self) -> IVec2 {
        self.as_ivec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    // tick inputs are integer-valued in practice, so quantified laws are
    // checked over integer-coordinate vectors (where f64 arithmetic is exact)
    fn int_vec() -> impl Strategy<Value = DVec2> {
        (-30000i32..30000, -30000i32..30000)
            .prop_map(|(x, y)| DVec2::new(f64::from(x), f64::from(y)))
    }

    proptest! {
        #[test]
        fn normalize_has_unit_magnitude(v in int_vec()) {
            prop_assume!(v != DVec2::ZERO);
            prop_assert!((v.normalize_or_zero().length() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn distance_is_symmetric(a in int_vec(), b in int_vec()) {
            prop_assert_eq!(a.distance(b), b.distance(a));
            prop_assert_eq!(a.distance(a), 0.0);
        }

        #[test]
        fn add_and_sub_are_inverses(a in int_vec(), b in int_vec()) {
            prop_assert_eq!((a + b) - b, a);
        }
    }

    #[test]
    fn normalize_of_zero_is_zero() {
        assert_eq!(DVec2::ZERO.normalize_or_zero(), DVec2::ZERO);
    }

    #[test]
    fn normal_is_unit_left_perpendicular() {
        let v = DVec2::new(3.0, 4.0);
        let n = v.normal();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!(v.dot(n).abs() < 1e-12);
        // left-hand: +x rotates to +y
        assert_eq!(DVec2::X.normal(), DVec2::Y);
    }

    #[test]
    fn perp_dot_sign_indicates_turn_direction() {
        assert!(DVec2::X.perp_dot(DVec2::Y) > 0.0);
        assert!(DVec2::Y.perp_dot(DVec2::X) < 0.0);
        assert_eq!(DVec2::X.perp_dot(DVec2::X), 0.0);
    }

    #[test]
    fn angle_from_positive_x_axis() {
        assert_eq!(DVec2::X.to_angle(), 0.0);
        assert_eq!(DVec2::Y.to_angle(), FRAC_PI_2);
        assert_eq!(DVec2::new(-1.0, 0.0).to_angle(), PI);
    }

    #[test]
    fn component_multiply_and_divide() {
        let a = DVec2::new(6.0, -8.0);
        let b = DVec2::new(3.0, 2.0);
        assert_eq!(a * b, DVec2::new(18.0, -16.0));
        assert_eq!(a / b, DVec2::new(2.0, -4.0));
        // zero divisor coordinate is a caller obligation; the result is
        // non-finite rather than an error
        assert!((a / DVec2::new(0.0, 2.0)).x.is_infinite());
    }

    #[test]
    fn command_coords_truncate_toward_zero() {
        assert_eq!(DVec2::new(5000.9, 42.1).command_coords(), IVec2::new(5000, 42));
        assert_eq!(DVec2::new(-3.9, -0.7).command_coords(), IVec2::new(-3, 0));
    }
}
