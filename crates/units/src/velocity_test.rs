mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::{circular_orbital_velocity, Velocity};
    use crate::{Length, Mass, Time};

    #[test]
    fn test_velocity_conversions() {
        let v = Velocity::from_km_per_sec(30.0);
        assert_relative_eq!(v.to_meters_per_sec(), 30_000.0);

        let w = Velocity::from_meters_per_sec(1_500.0);
        assert_relative_eq!(w.to_km_per_sec(), 1.5);

        assert_relative_eq!((v + w).to_km_per_sec(), 31.5);
        assert_relative_eq!((v - w).to_km_per_sec(), 28.5);
        assert_relative_eq!((w * 2.0).to_meters_per_sec(), 3_000.0);
        assert_relative_eq!((w / 3.0).to_meters_per_sec(), 500.0);
    }

    #[test]
    fn test_distance_over_time() {
        let v = Velocity::from_meters_per_sec(1.5e5);
        let d = v.distance_over(Time::from_seconds(1.0e6));
        assert_relative_eq!(d.to_au(), 1.0);
    }

    #[test]
    fn test_circular_orbital_velocity_earth() {
        let v = circular_orbital_velocity(
            6.67e-11,
            Mass::from_solar_masses(1.0),
            Length::from_au(1.0),
        );
        // Earth moves at roughly 30 km/s
        assert!((v.to_km_per_sec() - 29.7).abs() < 0.1);
    }
}
