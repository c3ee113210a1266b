mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, AU_TO_M, EARTH_RADIUS_M};

    #[test]
    fn test_length_conversions() {
        let au = Length::from_au(1.0);
        assert_relative_eq!(au.to_meters(), AU_TO_M);
        assert_relative_eq!(au.to_km(), 1.5e8);

        let meters = Length::from_meters(3.0e11);
        assert_relative_eq!(meters.to_au(), 2.0);

        let earth = Length::from_earth_radii(2.0);
        assert_relative_eq!(earth.to_meters(), 2.0 * EARTH_RADIUS_M);
        assert_relative_eq!(earth.to_earth_radii(), 2.0);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let a = Length::from_au(2.0);
        let b = Length::from_au(0.5);

        assert_relative_eq!((a + b).to_au(), 2.5);
        assert_relative_eq!((a - b).to_au(), 1.5);
        assert_relative_eq!((a * 3.0).to_au(), 6.0);
        assert_relative_eq!((a / 4.0).to_au(), 0.5);
        assert_relative_eq!(a / b, 4.0);
        assert_relative_eq!((2.0 * b).to_au(), 1.0);
    }

    #[test]
    fn test_length_min_max() {
        let near = Length::from_km(10.0);
        let far = Length::from_au(1.0);

        assert_eq!(near.min(far), near);
        assert_eq!(near.max(far), far);
        assert_eq!(Length::zero().to_meters(), 0.0);
    }
}
