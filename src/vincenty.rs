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

//! The vincenty module contains the iterative solution of the inverse
//! geodesic problem on the WGS-84 ellipsoid, see:
//! T. Vincenty, [Direct and Inverse Solutions of Geodesics on the Ellipsoid](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).
//!
//! The geodesic between two points on the ellipsoid is represented by a
//! great circle arc on the auxiliary sphere. The longitude difference on the
//! auxiliary sphere, lambda, is found by fixed point iteration and the arc
//! length is then converted to metres on the ellipsoid.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::{calculate_reduced_latitude, calculate_u_sq, to_radians, wgs84};
use crate::{GeoPoint, Metres};
use angle_sc::Degrees;

/// The maximum number of iterations to attempt.
pub const MAX_ITERATIONS: u32 = 200;

/// The maximum change in lambda between iterations of a converged solution.  
/// It corresponds to approximately 0.06 mm on the ellipsoid.
pub const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// The error returned when the inverse solution cannot be found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Lambda did not converge within the given number of iterations.  
    /// This is expected for some nearly antipodal points.
    #[error("inverse solution did not converge within {0} iterations")]
    NotConverged(u32),
}

/// A successful inverse solution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// The length of the geodesic, rounded to the nearest millimetre.
    pub length: Metres,
    /// The number of iterations performed, zero if the points are identical.
    pub iterations: u32,
}

impl Solution {
    /// A zero length `Solution`.
    /// * `iterations` - the number of iterations performed.
    #[must_use]
    const fn zero(iterations: u32) -> Self {
        Self {
            length: Metres(0.0),
            iterations,
        }
    }
}

/// The sines and cosines of the reduced latitudes of a pair of points.
#[derive(Clone, Copy, Debug)]
struct ReducedLatitudes {
    sin_u1: f64,
    cos_u1: f64,
    sin_u2: f64,
    cos_u2: f64,
}

impl ReducedLatitudes {
    fn new(a: &GeoPoint, b: &GeoPoint) -> Self {
        let u1 = calculate_reduced_latitude(a.latitude, wgs84::ONE_MINUS_F);
        let u2 = calculate_reduced_latitude(b.latitude, wgs84::ONE_MINUS_F);
        Self {
            sin_u1: libm::sin(u1),
            cos_u1: libm::cos(u1),
            sin_u2: libm::sin(u2),
            cos_u2: libm::cos(u2),
        }
    }

    /// Calculate the great circle arc between the points on the auxiliary
    /// sphere for the longitude difference `lambda`.
    ///
    /// returns None if the points coincide on the auxiliary sphere.
    fn calculate_arc(&self, lambda: f64) -> Option<AuxiliaryArc> {
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        let x = self.cos_u2 * sin_lambda;
        let y = self.cos_u1 * self.sin_u2 - self.sin_u1 * self.cos_u2 * cos_lambda;
        let sin_sigma = libm::sqrt(x * x + y * y);
        if sin_sigma == 0.0 {
            return None;
        }

        let cos_sigma = self.sin_u1 * self.sin_u2 + self.cos_u1 * self.cos_u2 * cos_lambda;
        let sin_alpha = self.cos_u1 * self.cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // cos_sq_alpha is zero on the Equator
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * self.sin_u1 * self.sin_u2 / cos_sq_alpha
        };

        Some(AuxiliaryArc {
            sigma: libm::atan2(sin_sigma, cos_sigma),
            sin_sigma,
            cos_sigma,
            sin_alpha,
            cos_sq_alpha,
            cos_2sigma_m,
        })
    }
}

/// A great circle arc on the auxiliary sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuxiliaryArc {
    /// The arc length, in radians.
    pub sigma: f64,
    /// The sine of the arc length.
    pub sin_sigma: f64,
    /// The cosine of the arc length.
    pub cos_sigma: f64,
    /// The sine of the azimuth at the Equator.
    pub sin_alpha: f64,
    /// The square of the cosine of the azimuth at the Equator.
    pub cos_sq_alpha: f64,
    /// The cosine of twice the arc length from the Equator to the arc midpoint.
    pub cos_2sigma_m: f64,
}

impl AuxiliaryArc {
    /// Calculate the next estimate of the longitude difference on the
    /// auxiliary sphere.
    /// * `l` - the longitude difference on the ellipsoid, in radians.
    #[must_use]
    pub fn calculate_lambda(&self, l: f64) -> f64 {
        let f = wgs84::F;
        let c = f / 16.0 * self.cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * self.cos_sq_alpha));
        l + (1.0 - c)
            * f
            * self.sin_alpha
            * (self.sigma
                + c * self.sin_sigma
                    * (self.cos_2sigma_m
                        + c * self.cos_sigma
                            * (-1.0 + 2.0 * self.cos_2sigma_m * self.cos_2sigma_m)))
    }
}

/// Convert a great circle arc on the auxiliary sphere to the length of the
/// geodesic on the ellipsoid.
/// * `arc` - the converged arc on the auxiliary sphere.
///
/// returns the unrounded length in metres.
#[must_use]
pub fn convert_arc_to_metres(arc: &AuxiliaryArc) -> Metres {
    let u_sq = calculate_u_sq(arc.cos_sq_alpha);
    let a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let cos_2sigma_m_sq = arc.cos_2sigma_m * arc.cos_2sigma_m;
    let delta_sigma = b
        * arc.sin_sigma
        * (arc.cos_2sigma_m
            + b / 4.0
                * (arc.cos_sigma * (-1.0 + 2.0 * cos_2sigma_m_sq)
                    - b / 6.0
                        * arc.cos_2sigma_m
                        * (-3.0 + 4.0 * arc.sin_sigma * arc.sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m_sq)));

    Metres(wgs84::B.0 * a * (arc.sigma - delta_sigma))
}

/// Round a length to the nearest millimetre, half away from zero.
/// * `length` - the length in metres.
/// # Examples
/// ```
/// use vincenty_wgs84::vincenty::round_to_millimetres;
///
/// assert_eq!(123.457, round_to_millimetres(123.4566));
/// ```
#[must_use]
pub fn round_to_millimetres(length: f64) -> f64 {
    libm::round(length * 1000.0) / 1000.0
}

/// Whether the coordinates of a pair of points are bitwise identical.
fn is_identical(a: &GeoPoint, b: &GeoPoint) -> bool {
    a.latitude.0.to_bits() == b.latitude.0.to_bits()
        && a.longitude.0.to_bits() == b.longitude.0.to_bits()
}

/// Calculate the length of the geodesic between a pair of positions on the
/// WGS-84 ellipsoid using Vincenty's inverse method.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
///
/// returns the length of the geodesic rounded to the nearest millimetre and
/// the number of iterations taken, or `Error::NotConverged` if lambda did not
/// converge within `MAX_ITERATIONS`.
///
/// # Errors
///
/// `Error::NotConverged` for some nearly antipodal points.
///
/// # Examples
/// ```
/// use vincenty_wgs84::{Degrees, GeoPoint};
/// use vincenty_wgs84::vincenty::{calculate_inverse, Error, MAX_ITERATIONS};
///
/// let a = GeoPoint::new(Degrees(0.0), Degrees(0.0));
/// let b = GeoPoint::new(Degrees(0.5), Degrees(179.7));
/// assert_eq!(Err(Error::NotConverged(MAX_ITERATIONS)), calculate_inverse(&a, &b));
/// ```
pub fn calculate_inverse(a: &GeoPoint, b: &GeoPoint) -> Result<Solution, Error> {
    if is_identical(a, b) {
        return Ok(Solution::zero(0));
    }

    let latitudes = ReducedLatitudes::new(a, b);
    let l = to_radians(Degrees(b.longitude.0 - a.longitude.0));
    let mut lambda = l;

    for iterations in 1..=MAX_ITERATIONS {
        let Some(arc) = latitudes.calculate_arc(lambda) else {
            log::trace!("points coincide on the auxiliary sphere: {a:?}, {b:?}");
            return Ok(Solution::zero(iterations));
        };

        let previous = lambda;
        lambda = arc.calculate_lambda(l);
        if libm::fabs(lambda - previous) < CONVERGENCE_THRESHOLD {
            log::trace!("converged after {iterations} iterations");
            let length = round_to_millimetres(convert_arc_to_metres(&arc).0);
            return Ok(Solution {
                length: Metres(length),
                iterations,
            });
        }
    }

    log::debug!("no convergence after {MAX_ITERATIONS} iterations: {a:?}, {b:?}");
    Err(Error::NotConverged(MAX_ITERATIONS))
}
