pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in
/// decimal degrees, using the haversine formula.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const TORONTO: (f64, f64) = (43.6532, -79.3832);
    const OTTAWA: (f64, f64) = (45.4215, -75.6972);
    const VANCOUVER: (f64, f64) = (49.2827, -123.1207);

    #[test]
    fn zero_distance_between_identical_points() {
        let d = haversine_km(TORONTO.0, TORONTO.1, TORONTO.0, TORONTO.1);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn matches_known_short_distance() {
        // Two points in downtown Toronto, roughly 5.8 km apart.
        let d = haversine_km(43.65, -79.38, 43.70, -79.40);
        assert!((5.7..5.9).contains(&d), "got {d}");
    }

    #[test]
    fn is_symmetric() {
        let ab = haversine_km(TORONTO.0, TORONTO.1, VANCOUVER.0, VANCOUVER.1);
        let ba = haversine_km(VANCOUVER.0, VANCOUVER.1, TORONTO.0, TORONTO.1);
        assert!((ab - ba).abs() < ab * 1e-4);
    }

    #[test]
    fn satisfies_triangle_inequality() {
        let ab = haversine_km(TORONTO.0, TORONTO.1, OTTAWA.0, OTTAWA.1);
        let bc = haversine_km(OTTAWA.0, OTTAWA.1, VANCOUVER.0, VANCOUVER.1);
        let ac = haversine_km(TORONTO.0, TORONTO.1, VANCOUVER.0, VANCOUVER.1);
        assert!(ac <= ab + bc + 1e-6);
    }

    #[test]
    fn toronto_to_ottawa_is_roughly_350_km() {
        let d = haversine_km(TORONTO.0, TORONTO.1, OTTAWA.0, OTTAWA.1);
        assert!((340.0..365.0).contains(&d), "got {d}");
    }
}
