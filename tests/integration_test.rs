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

// extern crate we're testing, same as any other code would do.
extern crate vincenty_wgs84;

use angle_sc::is_within_tolerance;
use vincenty_wgs84::{
    calculate_geodesic_length, inverse, vincenty, Degrees, Distance, GeoPoint, MAX_ITERATIONS,
};

const FILENAME: &str = "data/vincenty_examples.csv";

/// lat1, lon1, lat2, lon2, metres
type DataRecord = (f64, f64, f64, f64, f64);

fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(Degrees(lat), Degrees(lon))
}

/// Whether a length is a whole number of millimetres.
fn is_whole_millimetres(metres: f64) -> bool {
    vincenty::round_to_millimetres(metres) == metres
}

#[test]
fn test_inverse_scenarios() {
    let origin = point(0.0, 0.0);

    // (lat, lon, expected metres)
    let scenarios = [
        (0.0, 0.0, 0.0),
        (0.0, 1.0, 111319.491),
        (1.0, 0.0, 110574.389),
        (0.5, 179.5, 19936288.579),
        (0.5, 179.7, -1.0),
    ];
    for (lat, lon, expected) in scenarios {
        let distance = inverse(&origin, &point(lat, lon));
        assert_eq!(expected, distance.metres(), "lat: {lat} lon: {lon}");
    }

    let boston = point(42.3541165, -71.0693514);
    let new_york = point(40.7791472, -73.9680804);
    assert_eq!(298396.057, inverse(&boston, &new_york).metres());
}

#[test]
fn test_inverse_identity() {
    for lat in [-90.0, -45.5, 0.0, 12.25, 90.0] {
        for lon in [-180.0, -33.3, 0.0, 151.2, 180.0] {
            let a = point(lat, lon);
            assert_eq!(Distance::ZERO, inverse(&a, &a));

            let result = vincenty::calculate_inverse(&a, &a).expect("identical points");
            assert_eq!(0, result.iterations);
        }
    }
}

#[test]
fn test_inverse_not_converged_units() {
    let distance = inverse(&point(0.0, 0.0), &point(0.5, 179.7));
    assert!(!distance.is_converged());
    assert_eq!(distance.metres() / 1000.0, distance.kilometres());
    assert_eq!(distance.metres() / 1852.0, distance.nautical_miles());
    assert_eq!(distance.metres() / 1609.344, distance.miles());
    assert_eq!(distance.metres() / 0.3048, distance.feet());

    let error = calculate_geodesic_length(&point(0.0, 0.0), &point(0.5, 179.7))
        .expect_err("not converged");
    assert_eq!(vincenty::Error::NotConverged(MAX_ITERATIONS), error);
}

#[test]
fn test_vincenty_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DataRecord>() {
        let (lat1, lon1, lat2, lon2, d_metres) = result?;
        let a = point(lat1, lon1);
        let b = point(lat2, lon2);

        let solution = vincenty::calculate_inverse(&a, &b)?;
        assert!(solution.iterations <= MAX_ITERATIONS);

        let distance = solution.length.0;
        assert!(
            is_within_tolerance(d_metres, distance, 0.0011),
            "line: {count} expected: {d_metres} actual: {distance}"
        );
        assert!(is_whole_millimetres(distance));

        // The solution is symmetrical
        let reverse = inverse(&b, &a);
        assert!(is_within_tolerance(distance, reverse.metres(), 0.0011));

        let distance = Distance::from(Ok::<_, vincenty::Error>(solution));
        assert_eq!(distance.metres() / 1000.0, distance.kilometres());
        assert_eq!(distance.metres() / 0.3048, distance.feet());

        count += 1;
    }
    assert_eq!(120, count);

    Ok(())
}
