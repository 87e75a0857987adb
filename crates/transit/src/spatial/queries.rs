//! Distance calculations on the Earth's surface.
//!
//! Uses the Haversine formula; road distances come from input data and are
//! never derived from geometry.

use geo::{HaversineDistance, Point};

/// Great-circle distance between two points in meters
pub fn great_circle_distance(from: Point, to: Point) -> f64 {
    if from == to {
        return 0.0;
    }
    from.haversine_distance(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_great_circle_distance() {
        // Distance from NYC to LA is approximately 3,936 km
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);

        let dist = great_circle_distance(nyc, la);
        assert!((dist - 3_936_000.0).abs() < 50_000.0); // Within 50km
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let south = Point::new(37.6, 55.0);
        let north = Point::new(37.6, 56.0);

        let dist = great_circle_distance(south, north);
        assert!((dist - 111_195.0).abs() < 100.0);
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = Point::new(37.20829, 55.611087);
        assert_eq!(great_circle_distance(p, p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = Point::new(37.20829, 55.611087);
        let b = Point::new(37.209755, 55.595884);
        assert_relative_eq!(great_circle_distance(a, b), great_circle_distance(b, a));
    }
}
