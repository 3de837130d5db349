// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Event-time engine.
//!
//! Orchestrates the ephemeris and the hour-angle solver into a UTC
//! minutes-of-day value for a solar event.  Both entry points use
//! fixed-count refinement rather than a convergence loop: the equation of
//! time and the declination vary slowly enough (sub-second impact over the
//! few minutes of residual error after the first pass) that two passes
//! land within the one-minute accuracy target.

use qtty::Days;

use crate::ephemeris::{declination_of_sun, equation_of_time};
use crate::error::SolarEventError;
use crate::events::Coordinate;
use crate::hour_angle::{hour_angle_of_sunrise, hour_angle_of_sunset};
use crate::julian::{JulianCenturies, JulianDate};

/// UTC time of solar noon for the day at `t`, in minutes from 00:00 UTC.
///
/// `longitude_west` is degrees **west** of Greenwich (positive west — the
/// hour-angle convention).  One refinement pass: estimate noon from `t`,
/// recompute the equation of time at the estimated instant, and read off
/// `720 + 4·lon − eqtime`.
pub(crate) fn solar_noon_utc_minutes(t: JulianCenturies, longitude_west: f64) -> f64 {
    let jdate = JulianDate::from_centuries(t) + Days::new(longitude_west / 360.0);
    let eq_time = equation_of_time(jdate.centuries());
    let noon_utc = 720.0 + longitude_west * 4.0 - eq_time;

    let refined = JulianDate::from_centuries(t) - Days::new(0.5) + Days::new(noon_utc / 1_440.0);
    720.0 + longitude_west * 4.0 - equation_of_time(refined.centuries())
}

/// UTC time at which the sun crosses `solar_elevation` at `coordinate`, in
/// minutes from 00:00 UTC on the date of `jd_at_local_midnight`.
///
/// Two-pass fixed point: evaluate at the day's solar noon, then re-evaluate
/// at the first-pass result.  `is_sunrise` selects the morning (positive)
/// or evening (negated) hour angle.
///
/// The result may fall outside `[0, 1440)` when the location's date and
/// the UTC date disagree; the facade resolves it against the UTC midnight
/// of the *local* calendar date.
///
/// # Errors
///
/// Propagates the hour-angle solver's polar classification unchanged.
pub(crate) fn event_utc_minutes(
    jd_at_local_midnight: JulianDate,
    coordinate: Coordinate,
    solar_elevation: f64,
    is_sunrise: bool,
) -> Result<f64, SolarEventError> {
    // The hour-angle formulas are longitude-west-positive.
    let longitude = -coordinate.longitude;

    let minutes_at = |t: JulianCenturies| -> Result<f64, SolarEventError> {
        let eq_time = equation_of_time(t);
        let declination = declination_of_sun(t);
        let hour_angle = if is_sunrise {
            hour_angle_of_sunrise(coordinate.latitude, declination, solar_elevation)?
        } else {
            hour_angle_of_sunset(coordinate.latitude, declination, solar_elevation)?
        };
        let delta = longitude - hour_angle.to_degrees();
        Ok(720.0 + delta * 4.0 - eq_time)
    };

    let centuries = jd_at_local_midnight.centuries();
    let noon_minutes = solar_noon_utc_minutes(centuries, longitude);
    let at_noon = (jd_at_local_midnight + Days::new(noon_minutes / 1_440.0)).centuries();

    // First pass anchors at solar noon; second pass re-evaluates the
    // slowly-varying terms at the first-pass instant.
    let first = minutes_at(at_noon)?;
    let refined = (JulianDate::from_centuries(centuries) + Days::new(first / 1_440.0)).centuries();
    minutes_at(refined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::julian_date;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn jd_local_midnight(offset_east_h: i32, y: i32, m: u32, d: u32) -> JulianDate {
        let tz = FixedOffset::east_opt(offset_east_h * 3600).unwrap();
        julian_date(&tz.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn greenwich_noon_tracks_equation_of_time() {
        // At longitude 0, solar noon is 720 minutes minus the equation of
        // time (about +16.4 min in early November).
        let jd = julian_date(&Utc.with_ymd_and_hms(2014, 11, 1, 0, 0, 0).unwrap());
        let noon = solar_noon_utc_minutes(jd.centuries(), 0.0);
        assert!((noon - (720.0 - 16.42)).abs() < 0.5, "noon = {noon}");
    }

    #[test]
    fn new_york_sunrise_and_sunset_minutes() {
        // New York, 2014-11-01 (EDT): sunrise 07:26, sunset 17:52 local,
        // i.e. 686 and 1312 minutes from 00:00 UTC.
        let jd = jd_local_midnight(-4, 2014, 11, 1);
        let coord = Coordinate::new(40.642, -74.017);
        let rise = event_utc_minutes(jd, coord, 0.0, true).unwrap();
        let set = event_utc_minutes(jd, coord, 0.0, false).unwrap();
        assert!((rise - 686.4).abs() < 1.0, "sunrise minutes = {rise}");
        assert!((set - 1312.3).abs() < 1.0, "sunset minutes = {set}");
    }

    #[test]
    fn far_east_longitude_yields_negative_minutes() {
        // Sydney's sunrise happens before 00:00 UTC on its local date; the
        // engine reports that as a negative offset rather than wrapping.
        let jd = jd_local_midnight(10, 2015, 7, 1);
        let coord = Coordinate::new(-33.86, 151.20);
        let rise = event_utc_minutes(jd, coord, 0.0, true).unwrap();
        assert!(rise < 0.0, "sunrise minutes = {rise}");
        assert!((rise - -179.0).abs() < 1.0, "sunrise minutes = {rise}");
    }

    #[test]
    fn polar_failures_propagate_unchanged() {
        let winter = jd_local_midnight(0, 2014, 12, 21);
        let summer = jd_local_midnight(0, 2014, 6, 21);
        let coord = Coordinate::new(75.0, 0.0);
        assert_eq!(
            event_utc_minutes(winter, coord, 0.0, true),
            Err(SolarEventError::NeverRises)
        );
        assert_eq!(
            event_utc_minutes(summer, coord, 0.0, false),
            Err(SolarEventError::NeverSets)
        );
    }

    #[test]
    fn second_pass_moves_the_estimate_only_slightly() {
        // The two-pass refinement should agree with a third pass to well
        // under a second of time.
        let jd = jd_local_midnight(-4, 2014, 11, 1);
        let coord = Coordinate::new(40.642, -74.017);
        let second = event_utc_minutes(jd, coord, 0.0, true).unwrap();

        let third_t = (JulianDate::from_centuries(jd.centuries()) + Days::new(second / 1_440.0))
            .centuries();
        let eq_time = equation_of_time(third_t);
        let declination = declination_of_sun(third_t);
        let ha = hour_angle_of_sunrise(coord.latitude, declination, 0.0).unwrap();
        let third = 720.0 + (74.017 - ha.to_degrees()) * 4.0 - eq_time;
        assert!((third - second).abs() < 1.0 / 60.0, "Δ = {}", third - second);
    }
}
