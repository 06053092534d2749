/// WGS-84 semi-major axis in metres
const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// Mean earth radius in metres
const MEAN_EARTH_RADIUS_M: f64 = 6_371_008.8;

const VINCENTY_MAX_ITERATIONS: usize = 200;
const VINCENTY_TOLERANCE: f64 = 1e-12;

/// A WGS-84 position in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Check that both coordinates are finite and inside the WGS-84 ranges.
    pub fn validate(&self) -> Result<(), String> {
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!(
                "longitude {} is outside [-180, 180]",
                self.longitude
            ));
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} is outside [-90, 90]", self.latitude));
        }
        Ok(())
    }
}

/// Great-circle distance on a sphere of mean earth radius, in metres.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    MEAN_EARTH_RADIUS_M * c
}

/// Geodesic distance on the WGS-84 ellipsoid in metres (Vincenty inverse).
///
/// Agrees with PostGIS `ST_Distance` on geography to well under a metre for
/// the distances this crate deals with. Nearly antipodal points, where the
/// iteration does not converge, fall back to the spherical distance.
pub fn geodesic_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let semi_minor = (1.0 - WGS84_F) * WGS84_A;

    let l = (b.longitude - a.longitude).to_radians();
    let u1 = ((1.0 - WGS84_F) * a.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * b.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;
    let (mut sin_sigma, mut cos_sigma, mut sigma) = (0.0, 0.0, 0.0);
    let (mut cos_sq_alpha, mut cos_2sigma_m) = (0.0, 0.0);

    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // coincident points
            return 0.0;
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line
        cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };
        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));
        if (lambda - previous).abs() < VINCENTY_TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        return haversine_distance(a, b);
    }

    let u_sq = cos_sq_alpha * (WGS84_A.powi(2) - semi_minor.powi(2)) / semi_minor.powi(2);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma.powi(2))
                        * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

    semi_minor * big_a * (sigma - delta_sigma)
}

/// Inclusive radius check using the geodesic distance.
pub fn is_within_radius(point: GeoPoint, center: GeoPoint, radius_metres: f64) -> bool {
    geodesic_distance(point, center) <= radius_metres
}
