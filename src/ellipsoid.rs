// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains the parameters of the WGS-84 ellipsoid and
//! the functions for projecting geodetic latitudes onto its auxiliary sphere.

pub mod wgs84;

use angle_sc::Degrees;

/// Convert an angle in `Degrees` to radians.
///
/// Note: calculated as `degrees * π / 180` rather than with `f64::to_radians`,
/// which rounds differently in the last bit.
/// * `angle` - the angle in degrees.
/// # Examples
/// ```
/// use vincenty_wgs84::Degrees;
/// use vincenty_wgs84::ellipsoid::to_radians;
///
/// assert_eq!(core::f64::consts::FRAC_PI_2, to_radians(Degrees(90.0)));
/// ```
#[must_use]
pub fn to_radians(angle: Degrees) -> f64 {
    angle.0 * core::f64::consts::PI / 180.0
}

/// Convert a geodetic Latitude to a reduced (parametric) Latitude on the
/// auxiliary sphere: `atan((1 - f) tan(lat))`.
/// * `lat` - the geodetic Latitude in degrees.
/// * `one_minus_f` - one minus the flattening ratio.
///
/// returns the reduced Latitude in radians.
#[must_use]
pub fn calculate_reduced_latitude(lat: Degrees, one_minus_f: f64) -> f64 {
    libm::atan(one_minus_f * libm::tan(to_radians(lat)))
}

/// Calculate `u²`, the square of the second Eccentricity scaled by the
/// square of the cosine of the azimuth at the Equator.
/// * `cos_sq_alpha` - the square of the cosine of the equatorial azimuth.
#[must_use]
pub fn calculate_u_sq(cos_sq_alpha: f64) -> f64 {
    cos_sq_alpha * wgs84::EP_2
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_wgs84_parameters() {
        assert_eq!(6_378_137.0, wgs84::A.0);
        assert_eq!(6_356_752.314_245_179, wgs84::B.0);
        assert_eq!(1.0 - wgs84::F, wgs84::ONE_MINUS_F);
        assert_eq!(0.006739496742276434, wgs84::EP_2);

        // The reference value published for b agrees to within a micrometre.
        assert!(is_within_tolerance(6_356_752.314_245, wgs84::B.0, 1e-6));
    }

    #[test]
    fn test_calculate_reduced_latitude() {
        assert_eq!(0.0, calculate_reduced_latitude(Degrees(0.0), wgs84::ONE_MINUS_F));

        for i in -89..90 {
            let lat = Degrees(f64::from(i));
            let beta = calculate_reduced_latitude(lat, wgs84::ONE_MINUS_F);

            // The reduced latitude is closer to the Equator than the geodetic one
            assert!(libm::fabs(beta) <= libm::fabs(to_radians(lat)));
            // and has the same sign
            assert!(beta * lat.0 >= 0.0);
        }

        // At the poles the reduced and geodetic latitudes coincide
        let beta = calculate_reduced_latitude(Degrees(90.0), wgs84::ONE_MINUS_F);
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            beta,
            f64::EPSILON
        ));
    }

    #[test]
    fn test_calculate_u_sq() {
        assert_eq!(0.0, calculate_u_sq(0.0));
        assert_eq!(wgs84::EP_2, calculate_u_sq(1.0));
    }
}
