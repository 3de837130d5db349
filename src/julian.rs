// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date conversion layer.
//!
//! [`JulianDate`] is the uniform time scale every ephemeris formula in this
//! crate runs on: a continuous count of days (with fractional part) on the
//! UTC axis.  It stores a single [`Days`] quantity, so the struct is `Copy`
//! and layout-identical to an `f64`.
//!
//! Two conversions live here:
//!
//! 1. **Civil ⇄ Julian** — [`julian_date`] extracts the calendar components
//!    of a `chrono` instant in its own time zone, applies the standard
//!    Gregorian integer day-number formula plus the fractional day, and
//!    removes the zone offset so the result is expressed on the UTC scale.
//!    [`civil_instant`] inverts it, truncated to whole seconds.
//! 2. **Julian Date ⇄ Julian Centuries** — the affine transform
//!    `T = (JD − 2451545.0) / 36525.0` and its exact inverse.  All solar
//!    ephemeris polynomials take [`JulianCenturies`] as input.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike, Utc};
use qtty::{Centuries, Days};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SolarEventError;

// ═══════════════════════════════════════════════════════════════════════════
// JulianDate
// ═══════════════════════════════════════════════════════════════════════════

/// A Julian Date on the UTC axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate(Days);

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 UTC (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Create from a raw Julian Day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Days::new(value))
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self(days)
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.0
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    /// Julian centuries elapsed since J2000.0.
    #[inline]
    pub fn centuries(&self) -> JulianCenturies {
        JulianCenturies::new((*self - Self::J2000).value() / Self::JULIAN_CENTURY.value())
    }

    /// Build a Julian Date back from a centuries-since-J2000 value.
    ///
    /// Exact inverse of [`centuries`](Self::centuries):
    /// `JD = T·36525 + 2451545`.
    #[inline]
    pub fn from_centuries(t: JulianCenturies) -> Self {
        Self::new(t.value() * Self::JULIAN_CENTURY.value() + Self::J2000.value())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.0 += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.0 -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JulianCenturies
// ═══════════════════════════════════════════════════════════════════════════

/// Julian centuries elapsed since the J2000.0 epoch.
///
/// The native unit of the NOAA ephemeris polynomials — see
/// [`crate::ephemeris`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianCenturies(Centuries);

impl JulianCenturies {
    /// Create from a raw centuries-since-J2000 value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Centuries::new(value))
    }

    /// The underlying scalar value in centuries.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }
}

impl From<JulianCenturies> for JulianDate {
    #[inline]
    fn from(t: JulianCenturies) -> Self {
        Self::from_centuries(t)
    }
}

impl From<JulianDate> for JulianCenturies {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.centuries()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Civil ⇄ Julian conversion
// ═══════════════════════════════════════════════════════════════════════════

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Converts a civil instant to a [`JulianDate`] on the UTC axis.
///
/// Calendar components are extracted in the instant's own time zone; the
/// zone's seconds east of UTC are then removed so that the same physical
/// instant yields the same Julian Date regardless of the zone it is
/// expressed in.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use daybreak::julian_date;
///
/// let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(julian_date(&epoch).value(), 2_451_544.5);
/// ```
pub fn julian_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> JulianDate {
    let local = instant.naive_local();
    let y = i64::from(local.year());
    let m = i64::from(local.month());
    let d = i64::from(local.day());

    // Integer part: Gregorian-calendar Julian Day Number (truncating
    // integer division throughout).
    let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
        + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075;

    // Fractional part: the day number above refers to local noon.
    let ms = f64::from(local.nanosecond() / 1_000_000);
    let day_fraction = (f64::from(local.hour()) - 12.0) / 24.0
        + f64::from(local.minute()) / 1_440.0
        + f64::from(local.second()) / 86_400.0
        + ms / 86_400_000.0;

    // Local → UTC: remove the seconds-east-of-UTC zone offset.
    let zone_offset = f64::from(instant.offset().fix().local_minus_utc());

    JulianDate::new(jdn as f64 + day_fraction - zone_offset / 86_400.0)
}

/// Converts a [`JulianDate`] back to a civil instant in the given time zone,
/// truncated to whole seconds.
///
/// Round-trips with [`julian_date`] to within one second.
///
/// # Errors
///
/// [`SolarEventError::InvalidCalendarComponents`] if the value falls outside
/// the range `chrono` can represent.
pub fn civil_instant<Tz: TimeZone>(
    jd: JulianDate,
    time_zone: &Tz,
) -> Result<DateTime<Tz>, SolarEventError> {
    let seconds = ((jd.value() - UNIX_EPOCH_JD) * 86_400.0).floor() as i64;
    let utc = DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or(SolarEventError::InvalidCalendarComponents)?;
    Ok(utc.with_timezone(time_zone))
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
