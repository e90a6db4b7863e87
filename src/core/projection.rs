use crate::core::constants::{
    GRS80_E, INVERSE_MAX_ITERATIONS, INVERSE_TOLERANCE, LAMBERT93_C, LAMBERT93_LAMBDA0,
    LAMBERT93_N, LAMBERT93_XS, LAMBERT93_YS,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Isometric latitude of geodetic latitude `phi` (radians) on an ellipsoid with
/// first eccentricity `e`.
pub fn isometric_latitude(phi: f64, e: f64) -> f64 {
    let e_sin_phi = e * phi.sin();
    (FRAC_PI_4 + phi / 2.0).tan().ln() - e / 2.0 * ((1.0 + e_sin_phi) / (1.0 - e_sin_phi)).ln()
}

/// Converts WGS84 latitude/longitude in degrees to Lambert93 easting/northing in metres.
///
/// Total over finite inputs; whether the result lies on the grid is decided by
/// [`cell_index`](crate::core::grid::cell_index).
///
/// # Example
/// ```
/// use q3m_rs::to_lambert93;
///
/// let (e, n) = to_lambert93(48.8566, 2.3522);
/// assert!((e - 652469.02).abs() < 1.0);
/// assert!((n - 6862035.26).abs() < 1.0);
/// ```
pub fn to_lambert93(lat: f64, lon: f64) -> (f64, f64) {
    let phi = lat.to_radians();
    let lambda = lon.to_radians();

    let l = isometric_latitude(phi, GRS80_E);

    let r = LAMBERT93_C * (-LAMBERT93_N * l).exp();
    let gamma = LAMBERT93_N * (lambda - LAMBERT93_LAMBDA0);

    let (sin_g, cos_g) = gamma.sin_cos();
    (LAMBERT93_XS + r * sin_g, LAMBERT93_YS - r * cos_g)
}

/// Converts Lambert93 easting/northing in metres to WGS84 latitude/longitude in degrees.
///
/// Latitude is recovered by fixed-point iteration on the isometric latitude,
/// seeded with the spherical solution. Convergence is only guaranteed near the
/// grid extent.
pub fn from_lambert93(e: f64, n: f64) -> (f64, f64) {
    let dx = e - LAMBERT93_XS;
    let dy = LAMBERT93_YS - n;

    let r = dx.hypot(dy);
    let gamma = dx.atan2(dy);

    let lambda = LAMBERT93_LAMBDA0 + gamma / LAMBERT93_N;
    let l = -(r / LAMBERT93_C).ln() / LAMBERT93_N;
    let exp_l = l.exp();

    let mut phi = 2.0 * exp_l.atan() - FRAC_PI_2;
    for _ in 0..INVERSE_MAX_ITERATIONS {
        let e_sin_phi = GRS80_E * phi.sin();
        let next = 2.0
            * (((1.0 + e_sin_phi) / (1.0 - e_sin_phi)).powf(GRS80_E / 2.0) * exp_l).atan()
            - FRAC_PI_2;
        let delta = (next - phi).abs();
        phi = next;
        if delta < INVERSE_TOLERANCE {
            break;
        }
    }

    (phi.to_degrees(), lambda.to_degrees())
}
