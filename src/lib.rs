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

//! vincenty-wgs84
//!
//! A library for calculating the length of the geodesic between two
//! positions on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid using Vincenty's inverse formula.
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic segment](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//! Unlike a great circle distance on a sphere, its length accounts for the
//! flattening of the Earth at the poles.
//!
//! ## Design
//!
//! [Vincenty's inverse method](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
//! maps the geodesic onto a great circle arc on an auxiliary sphere and finds
//! the longitude difference on that sphere by fixed point iteration.
//! The length of the arc is then converted to metres on the ellipsoid and
//! rounded to the nearest millimetre.
//!
//! The iteration is limited to `MAX_ITERATIONS` (200). Some nearly antipodal
//! points do not converge within that limit: `calculate_geodesic_length`
//! returns an `Error` for them and `inverse` returns the
//! `Distance::NOT_CONVERGED` sentinel value of -1 metre.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//!
//! # Examples
//! ```
//! use vincenty_wgs84::{inverse, Degrees, GeoPoint};
//!
//! let boston = GeoPoint::new(Degrees(42.3541165), Degrees(-71.0693514));
//! let new_york = GeoPoint::new(Degrees(40.7791472), Degrees(-73.9680804));
//!
//! let distance = inverse(&boston, &new_york);
//! assert_eq!(298396.057, distance.metres());
//! println!("Boston-New York distance: {} NM", distance.nautical_miles());
//! ```

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod vincenty;

pub use angle_sc::{Degrees, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;
pub use vincenty::{Error, Solution, CONVERGENCE_THRESHOLD, MAX_ITERATIONS};

/// The number of metres in a kilometre.
const METRES_PER_KILOMETRE: f64 = 1000.0;
/// The number of metres in an international nautical mile.
const METRES_PER_NAUTICAL_MILE: f64 = 1852.0;
/// The number of metres in an international statute mile.
const METRES_PER_MILE: f64 = 1609.344;
/// The number of metres in an international foot.
const METRES_PER_FOOT: f64 = 0.3048;

/// A position on the surface of the Earth, in geodetic coordinates.
///
/// Note: the coordinates are not validated, see `Validate::is_valid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// The geodetic latitude, in the range -90° to 90°.
    pub latitude: Degrees,
    /// The longitude, in the range -180° to 180°.
    pub longitude: Degrees,
}

impl GeoPoint {
    /// Constructor.
    /// * `latitude` - the geodetic latitude.
    /// * `longitude` - the longitude.
    #[must_use]
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Validate for GeoPoint {
    /// Test whether a `GeoPoint` is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° <= `longitude` <= 180°.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.0) && (-180.0..=180.0).contains(&self.longitude.0)
    }
}

impl From<&LatLong> for GeoPoint {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lat(), a.lon())
    }
}

/// The length of a geodesic, see `inverse`.
///
/// The unit accessors are all projections of the same length in metres,
/// including for the `NOT_CONVERGED` sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance(Metres);

impl Distance {
    /// A zero length `Distance`.
    pub const ZERO: Self = Self(Metres(0.0));

    /// The `Distance` returned when the inverse solution did not converge.
    pub const NOT_CONVERGED: Self = Self(Metres(-1.0));

    /// Constructor.
    /// * `length` - the length in metres.
    #[must_use]
    pub const fn new(length: Metres) -> Self {
        Self(length)
    }

    /// Whether the inverse solution converged, i.e. this is not the
    /// `NOT_CONVERGED` sentinel.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        *self != Self::NOT_CONVERGED
    }

    /// The `Distance` in metres.
    #[must_use]
    pub const fn metres(&self) -> f64 {
        self.0 .0
    }

    /// The `Distance` in meters, the US spelling of `metres`.
    #[must_use]
    pub const fn meters(&self) -> f64 {
        self.metres()
    }

    /// The `Distance` in kilometres.
    #[must_use]
    pub fn kilometres(&self) -> f64 {
        self.metres() / METRES_PER_KILOMETRE
    }

    /// The `Distance` in kilometers, the US spelling of `kilometres`.
    #[must_use]
    pub fn kilometers(&self) -> f64 {
        self.kilometres()
    }

    /// The `Distance` in nautical miles.
    #[must_use]
    pub fn nautical_miles(&self) -> f64 {
        self.metres() / METRES_PER_NAUTICAL_MILE
    }

    /// The `Distance` in statute miles.
    #[must_use]
    pub fn miles(&self) -> f64 {
        self.metres() / METRES_PER_MILE
    }

    /// The `Distance` in feet.
    #[must_use]
    pub fn feet(&self) -> f64 {
        self.metres() / METRES_PER_FOOT
    }
}

impl From<Result<Solution, Error>> for Distance {
    /// A `Distance` from the result of `vincenty::calculate_inverse`,
    /// `NOT_CONVERGED` if it failed.
    fn from(result: Result<Solution, Error>) -> Self {
        result.map_or(Self::NOT_CONVERGED, |solution| Self(solution.length))
    }
}

impl From<Distance> for Metres {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl From<Distance> for NauticalMiles {
    fn from(distance: Distance) -> Self {
        Self::from(distance.0)
    }
}

/// Calculate the length of the geodesic between a pair of positions on the
/// WGS-84 ellipsoid.
/// * `point1`, `point2` - the start and finish positions.
///
/// returns the `Distance` rounded to the nearest millimetre, or
/// `Distance::NOT_CONVERGED` if the inverse solution did not converge.
///
/// # Examples
/// ```
/// use vincenty_wgs84::{inverse, Degrees, Distance, GeoPoint};
///
/// let a = GeoPoint::new(Degrees(0.0), Degrees(0.0));
/// let b = GeoPoint::new(Degrees(0.0), Degrees(1.0));
/// assert_eq!(111319.491, inverse(&a, &b).metres());
///
/// // Nearly antipodal
/// let b = GeoPoint::new(Degrees(0.5), Degrees(179.7));
/// assert_eq!(Distance::NOT_CONVERGED, inverse(&a, &b));
/// ```
#[must_use]
pub fn inverse(point1: &GeoPoint, point2: &GeoPoint) -> Distance {
    Distance::from(vincenty::calculate_inverse(point1, point2))
}

/// Calculate the length of the geodesic between a pair of positions on the
/// WGS-84 ellipsoid.
/// * `point1`, `point2` - the start and finish positions.
///
/// returns the length in metres, rounded to the nearest millimetre.
///
/// # Errors
///
/// `Error::NotConverged` if the inverse solution did not converge within
/// `MAX_ITERATIONS`.
pub fn calculate_geodesic_length(point1: &GeoPoint, point2: &GeoPoint) -> Result<Metres, Error> {
    vincenty::calculate_inverse(point1, point2).map(|solution| solution.length)
}
