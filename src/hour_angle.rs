// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour-angle solver.
//!
//! Inverts solar elevation into the hour angle at which the sun crosses
//! that elevation: the angular displacement from local solar noon that,
//! multiplied by 4 minutes per degree, becomes a clock-time offset in the
//! event-time engine.
//!
//! The inversion can have no solution: near the poles the sun may stay
//! above or below a threshold for the whole day.  The `acos` argument is
//! domain-checked *before* the call and the out-of-range cases are
//! reported as [`SolarEventError::NeverRises`] /
//! [`SolarEventError::NeverSets`] — a NaN never leaves this module.

use crate::error::SolarEventError;

/// Refractive correction for a requested solar elevation, in degrees.
///
/// Atmospheric refraction is modeled only at the true horizon, where the
/// standard 0.833° constant (solar radius + mean refraction) applies.  For
/// every other threshold the "correction" simply cancels the requested
/// elevation, so the zenith argument below becomes `90 − elevation`.
#[inline]
pub(crate) fn refractive_correction(solar_elevation: f64) -> f64 {
    if solar_elevation == 0.0 {
        0.833
    } else {
        -solar_elevation
    }
}

/// Hour angle of sunrise at the given latitude, solar declination, and
/// solar elevation threshold (all in degrees), returned in **radians**.
///
/// # Errors
///
/// [`SolarEventError::NeverRises`] when the sun stays below the threshold
/// all day, [`SolarEventError::NeverSets`] when it stays above.
pub fn hour_angle_of_sunrise(
    latitude: f64,
    solar_declination: f64,
    solar_elevation: f64,
) -> Result<f64, SolarEventError> {
    let lat = latitude.to_radians();
    let decl = solar_declination.to_radians();
    let correction = refractive_correction(solar_elevation);

    let cos_hour_angle =
        (90.0 + correction).to_radians().cos() / (lat.cos() * decl.cos()) - lat.tan() * decl.tan();

    if cos_hour_angle > 1.0 {
        Err(SolarEventError::NeverRises)
    } else if cos_hour_angle < -1.0 {
        Err(SolarEventError::NeverSets)
    } else {
        Ok(cos_hour_angle.acos())
    }
}

/// Hour angle of sunset: the exact negation of the sunrise hour angle
/// (sunrise and sunset are symmetric about solar noon).
pub fn hour_angle_of_sunset(
    latitude: f64,
    solar_declination: f64,
    solar_elevation: f64,
) -> Result<f64, SolarEventError> {
    Ok(-hour_angle_of_sunrise(latitude, solar_declination, solar_elevation)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunrise_and_sunset_are_exact_negations() {
        let cases = [
            (40.642, -14.18, 0.0),
            (40.642, -14.18, -6.0),
            (-33.86, 23.14, 0.0),
            (59.33, 23.14, -6.0),
            (0.0, 0.0, -18.0),
        ];
        for (lat, decl, elev) in cases {
            let rise = hour_angle_of_sunrise(lat, decl, elev).unwrap();
            let set = hour_angle_of_sunset(lat, decl, elev).unwrap();
            assert_eq!(set, -rise, "lat={lat} decl={decl} elev={elev}");
        }
    }

    #[test]
    fn equator_equinox_half_day_plus_refraction() {
        // At the equator on an equinox the sun is up for half the day plus
        // a little extra from the 0.833° horizon correction.
        let rise = hour_angle_of_sunrise(0.0, 0.0, 0.0).unwrap();
        let expected = (90.0_f64 + 0.833).to_radians().cos().acos();
        assert!((rise - expected).abs() < 1e-12);
        assert!(rise > std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn polar_night_is_never_rises() {
        // 75°N in late December: δ ≈ −23.4°, cos(H) > 1.
        assert_eq!(
            hour_angle_of_sunrise(75.0, -23.4, 0.0),
            Err(SolarEventError::NeverRises)
        );
    }

    #[test]
    fn midnight_sun_is_never_sets() {
        // 75°N in late June: δ ≈ +23.4°, cos(H) < −1.
        assert_eq!(
            hour_angle_of_sunrise(75.0, 23.4, 0.0),
            Err(SolarEventError::NeverSets)
        );
        assert_eq!(
            hour_angle_of_sunset(75.0, 23.4, 0.0),
            Err(SolarEventError::NeverSets)
        );
    }

    #[test]
    fn white_nights_never_reach_nautical_twilight() {
        // Stockholm's latitude at midsummer declination: the sun dips
        // below the horizon but never to −12°, so both crossings are
        // classified as NeverSets rather than computed.
        assert_eq!(
            hour_angle_of_sunrise(59.33, 23.14, -12.0),
            Err(SolarEventError::NeverSets)
        );
        assert_eq!(
            hour_angle_of_sunset(59.33, 23.14, -12.0),
            Err(SolarEventError::NeverSets)
        );
        // The shallower civil threshold is still crossed.
        assert!(hour_angle_of_sunrise(59.33, 23.14, -6.0).is_ok());
    }

    #[test]
    fn twilight_threshold_cancels_elevation() {
        assert_eq!(refractive_correction(-6.0), 6.0);
        assert_eq!(refractive_correction(-18.0), 18.0);
        assert_eq!(refractive_correction(0.0), 0.833);
    }

    #[test]
    fn deeper_thresholds_widen_the_arc() {
        // Civil dawn happens earlier than sunrise: larger hour angle.
        let sunrise = hour_angle_of_sunrise(40.642, -14.18, 0.0).unwrap();
        let civil = hour_angle_of_sunrise(40.642, -14.18, -6.0).unwrap();
        let nautical = hour_angle_of_sunrise(40.642, -14.18, -12.0).unwrap();
        assert!(civil > sunrise);
        assert!(nautical > civil);
    }
}
