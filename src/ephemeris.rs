// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # NOAA Low-Precision Solar Ephemeris
//!
//! Closed-form solar position model as published in the NOAA/NREL solar
//! calculator, itself derived from *Jean Meeus — Astronomical Algorithms
//! (2nd ed. 1998)* ch. 25.  Every function is a pure polynomial (plus
//! trigonometric corrections) of [`JulianCenturies`] since J2000.0.
//!
//! ## Conventions
//!
//! All angles are **degrees** unless a function documents otherwise; the
//! [`sin_deg`]/[`cos_deg`]/[`tan_deg`] helpers keep the degree↔radian
//! conversion in one place.  [`equation_of_time`] returns **minutes of
//! time**.
//!
//! ## Accuracy
//!
//! The model is calibrated to double precision and yields solar event
//! times accurate to about one minute for several centuries around J2000.
//! It deliberately omits nutation and higher-order planetary perturbations
//! (VSOP87-class accuracy is out of scope).

use crate::julian::JulianCenturies;

// ── Degree-mode trigonometry ──────────────────────────────────────────────

/// Sine of an angle given in degrees.
#[inline]
pub(crate) fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub(crate) fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub(crate) fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

// ── Ephemeris polynomials ─────────────────────────────────────────────────

/// Geometric mean longitude of the Sun, normalized to `[0, 360)` degrees.
pub fn geometric_mean_lon_sun(t: JulianCenturies) -> f64 {
    let t = t.value();
    let mut lon = 280.46646 + t * (36_000.76983 + 0.000_303_2 * t);
    while lon > 360.0 {
        lon -= 360.0;
    }
    while lon < 0.0 {
        lon += 360.0;
    }
    lon
}

/// Mean obliquity of the ecliptic, in degrees.
pub fn mean_obliquity_of_ecliptic(t: JulianCenturies) -> f64 {
    let t = t.value();
    let seconds = 21.448 - t * (46.8150 + t * (0.000_59 - t * 0.001_813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for the lunar-node oscillation,
/// in degrees.
pub fn obliquity_correction(t: JulianCenturies) -> f64 {
    let omega = 125.04 - 1_934.136 * t.value();
    mean_obliquity_of_ecliptic(t) + 0.002_56 * cos_deg(omega)
}

/// Eccentricity of Earth's orbit (dimensionless).
pub fn eccentricity_earth_orbit(t: JulianCenturies) -> f64 {
    let t = t.value();
    0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t)
}

/// Geometric mean anomaly of the Sun, in degrees (not normalized).
pub fn geometric_mean_anomaly_sun(t: JulianCenturies) -> f64 {
    let t = t.value();
    357.52911 + t * (35_999.05029 - 0.000_153_7 * t)
}

/// Equation of center for the Sun, in degrees.
///
/// Classic three-term series over the mean anomaly.
pub fn center_of_sun(t: JulianCenturies) -> f64 {
    let m = geometric_mean_anomaly_sun(t);
    let t = t.value();
    let sin_m = sin_deg(m);
    let sin_2m = sin_deg(2.0 * m);
    let sin_3m = sin_deg(3.0 * m);

    sin_m * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
        + sin_2m * (0.019_993 - 0.000_101 * t)
        + sin_3m * 0.000_289
}

/// True longitude of the Sun, in degrees.
pub fn true_lon_of_sun(t: JulianCenturies) -> f64 {
    geometric_mean_lon_sun(t) + center_of_sun(t)
}

/// Apparent longitude of the Sun (aberration and nutation-in-longitude
/// corrected), in degrees.
pub fn apparent_lon_of_sun(t: JulianCenturies) -> f64 {
    let omega = 125.04 - 1_934.136 * t.value();
    true_lon_of_sun(t) - 0.005_69 - 0.004_78 * sin_deg(omega)
}

/// Declination of the Sun, in degrees.
pub fn declination_of_sun(t: JulianCenturies) -> f64 {
    let sin_t = sin_deg(obliquity_correction(t)) * sin_deg(apparent_lon_of_sun(t));
    sin_t.asin().to_degrees()
}

/// Equation of time: apparent solar time minus mean clock time, in
/// **minutes of time**.
///
/// Five-term NOAA formula.  The term order and the single radians→degrees
/// conversion at the end are load-bearing: this value feeds the hour-angle
/// iteration directly and small errors compound into the event times.
pub fn equation_of_time(t: JulianCenturies) -> f64 {
    let epsilon = obliquity_correction(t);
    let l0 = geometric_mean_lon_sun(t);
    let e = eccentricity_earth_orbit(t);
    let m = geometric_mean_anomaly_sun(t);

    let mut y = tan_deg(epsilon / 2.0);
    y *= y;

    let sin_2l0 = sin_deg(2.0 * l0);
    let sin_m = sin_deg(m);
    let cos_2l0 = cos_deg(2.0 * l0);
    let sin_4l0 = sin_deg(4.0 * l0);
    let sin_2m = sin_deg(2.0 * m);

    let etime = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;

    (etime * 4.0).to_degrees()
}
