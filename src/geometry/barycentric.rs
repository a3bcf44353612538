use std::ops::{Add, Mul};

use super::FloatType;

/// Weights of a point relative to triangle vertices P0, P1, P2.
/// The third weight (gamma, for P2) is implied as `1 - alpha - beta`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BarycentricCoordinates {
    pub alpha: FloatType,
    pub beta: FloatType,
}

impl BarycentricCoordinates {
    pub fn gamma(&self) -> FloatType {
        1.0 - self.alpha - self.beta
    }

    /// True if the point lies inside the triangle or on its boundary.
    pub fn is_inside(&self) -> bool {
        self.alpha >= 0.0 && self.beta >= 0.0 && self.alpha + self.beta <= 1.0
    }

    pub fn interpolate<T>(&self, a: &T, b: &T, c: &T) -> T
    where
        for<'a> &'a T: Mul<FloatType, Output = T>,
        T: Add<Output = T>,
    {
        a * self.alpha + b * self.beta + c * self.gamma()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::WorldVector;
    use assert2::assert;
    use test_case::test_case;

    #[test_case(0.25, 0.25, true ; "interior")]
    #[test_case(0.0, 0.0, true ; "vertex_p2")]
    #[test_case(1.0, 0.0, true ; "vertex_p0")]
    #[test_case(0.5, 0.5, true ; "edge")]
    #[test_case(-0.1, 0.5, false ; "negative_alpha")]
    #[test_case(0.5, -0.1, false ; "negative_beta")]
    #[test_case(0.6, 0.6, false ; "sum_over_one")]
    fn inside(alpha: FloatType, beta: FloatType, expected: bool) {
        let uv = BarycentricCoordinates { alpha, beta };
        assert!(uv.is_inside() == expected);
    }

    #[test]
    fn interpolate_vectors() {
        let uv = BarycentricCoordinates {
            alpha: 0.5,
            beta: 0.25,
        };
        let result = uv.interpolate(
            &WorldVector::new(4.0, 0.0, 0.0),
            &WorldVector::new(0.0, 4.0, 0.0),
            &WorldVector::new(0.0, 0.0, 4.0),
        );
        assert!(result == WorldVector::new(2.0, 1.0, 1.0));
    }
}
