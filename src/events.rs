// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Public facade: solar events, locations, and calendar days.
//!
//! # Core types
//!
//! - [`SolarEvent`] — the closed set of computable events.
//! - [`Coordinate`] — geographic latitude/longitude in degrees.
//! - [`Location<Tz>`] — a coordinate paired with its `chrono` time zone.
//! - [`CalendarDay`] — a civil `(year, month, day)` with no time of day.
//!
//! Every operation is a pure function of its inputs: nothing is cached,
//! nothing is mutated, and the whole surface is freely callable from
//! multiple threads (the only requirement is that the `Tz` value itself be
//! safe for concurrent reads, which `chrono` zones are).
//!
//! # Day resolution
//!
//! Events are computed per *local* calendar day: the facade resolves the
//! requested day's midnight in the location's own zone, runs the engine on
//! the Julian Date of that instant, and rebuilds the resulting civil
//! instant from the UTC midnight of the same local date plus the engine's
//! minutes-of-day offset.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::event_utc_minutes;
use crate::error::SolarEventError;
use crate::julian::julian_date;

// ═══════════════════════════════════════════════════════════════════════════
// SolarEvent
// ═══════════════════════════════════════════════════════════════════════════

/// A solar event computable for any location and calendar day.
///
/// Each dawn/dusk variant maps to one of four fixed elevation thresholds;
/// [`SolarNoon`](Self::SolarNoon) has no threshold of its own — it is the
/// midpoint between the day's sunrise and sunset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolarEvent {
    /// Top of the solar disk at the true horizon, morning (0.0°).
    Sunrise,
    /// Top of the solar disk at the true horizon, evening (0.0°).
    Sunset,
    /// Midpoint between the day's sunrise and sunset.
    SolarNoon,
    /// Sun 6° below the horizon, morning.
    CivilDawn,
    /// Sun 6° below the horizon, evening.
    CivilDusk,
    /// Sun 12° below the horizon, morning.
    NauticalDawn,
    /// Sun 12° below the horizon, evening.
    NauticalDusk,
    /// Sun 18° below the horizon, morning.
    AstronomicalDawn,
    /// Sun 18° below the horizon, evening.
    AstronomicalDusk,
}

impl SolarEvent {
    /// The solar elevation threshold defining this event, in degrees, or
    /// `None` for [`SolarNoon`](Self::SolarNoon).
    pub const fn elevation(self) -> Option<f64> {
        match self {
            Self::Sunrise | Self::Sunset => Some(0.0),
            Self::CivilDawn | Self::CivilDusk => Some(-6.0),
            Self::NauticalDawn | Self::NauticalDusk => Some(-12.0),
            Self::AstronomicalDawn | Self::AstronomicalDusk => Some(-18.0),
            Self::SolarNoon => None,
        }
    }

    /// Whether this event is a morning (rising-sun) crossing.
    ///
    /// Selects the sign of the hour angle; meaningless for
    /// [`SolarNoon`](Self::SolarNoon), which never consults it.
    pub const fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }
}

impl std::fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::SolarNoon => "solar noon",
            Self::CivilDawn => "civil dawn",
            Self::CivilDusk => "civil dusk",
            Self::NauticalDawn => "nautical dawn",
            Self::NauticalDusk => "nautical dusk",
            Self::AstronomicalDawn => "astronomical dawn",
            Self::AstronomicalDusk => "astronomical dusk",
        };
        f.write_str(name)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Coordinate / Location
// ═══════════════════════════════════════════════════════════════════════════

/// A geographic coordinate in degrees: latitude in `[-90, 90]` (north
/// positive), longitude in `[-180, 180]` (east positive).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Degrees east of Greenwich.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A place on Earth: a coordinate together with the time zone its civil
/// days are reckoned in.
///
/// Passed by reference into every computation; owns no resources and
/// retains no state across calls.
#[derive(Debug, Clone)]
pub struct Location<Tz: TimeZone> {
    /// The zone local calendar days are resolved in.
    pub time_zone: Tz,
    /// The geographic coordinate.
    pub coordinate: Coordinate,
}

impl<Tz: TimeZone> Location<Tz> {
    /// Create a location from a time zone and a coordinate.
    #[inline]
    pub const fn new(time_zone: Tz, coordinate: Coordinate) -> Self {
        Self {
            time_zone,
            coordinate,
        }
    }

    /// The time of `event` on the local calendar day containing `at`.
    ///
    /// The result is expressed in this location's time zone, truncated to
    /// whole seconds.
    ///
    /// # Errors
    ///
    /// [`SolarEventError::NeverRises`] / [`SolarEventError::NeverSets`]
    /// when the sun does not cross the event's elevation threshold that
    /// day; [`SolarEventError::InvalidCalendarComponents`] when the civil
    /// calendar cannot resolve the instants involved.
    pub fn time_of(
        &self,
        event: SolarEvent,
        at: DateTime<Utc>,
    ) -> Result<DateTime<Tz>, SolarEventError> {
        CalendarDay::from_instant(at, &self.time_zone).time_of(event, self)
    }

    /// The next occurrence of `event` strictly after `after`.
    ///
    /// When the occurrence on `after`'s local day is at or before `after`,
    /// the event is recomputed for the next *local* calendar day — a
    /// calendar increment, not a 24-hour shift, so the result stays
    /// correct across daylight-saving transitions.
    pub fn time_of_next(
        &self,
        event: SolarEvent,
        after: DateTime<Utc>,
    ) -> Result<DateTime<Tz>, SolarEventError> {
        let today = self.time_of(event, after)?;
        if today.with_timezone(&Utc) > after {
            return Ok(today);
        }
        let tomorrow = CalendarDay::from_instant(after, &self.time_zone).succ()?;
        tomorrow.time_of(event, self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDay
// ═══════════════════════════════════════════════════════════════════════════

/// A civil calendar date with no time of day.
///
/// The date is interpreted in whatever time zone it is later paired with;
/// it is resolved to a concrete instant (local midnight) only inside the
/// event computation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDay {
    /// Proleptic Gregorian year.
    pub year: i32,
    /// Month, 1–12.
    pub month: u32,
    /// Day of month, 1–31.
    pub day: u32,
}

impl CalendarDay {
    /// Create a calendar day from its components.
    ///
    /// Validity (e.g. February 30th) is checked when the day is resolved
    /// against a time zone, not at construction.
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The local calendar day containing `at` in the given time zone.
    pub fn from_instant<Tz: TimeZone>(at: DateTime<Utc>, time_zone: &Tz) -> Self {
        let local = at.with_timezone(time_zone).date_naive();
        Self::new(local.year(), local.month(), local.day())
    }

    /// The next calendar day.
    ///
    /// # Errors
    ///
    /// [`SolarEventError::InvalidCalendarComponents`] if this day does not
    /// name a real date or its successor is unrepresentable.
    pub fn succ(&self) -> Result<Self, SolarEventError> {
        let next = self
            .naive()?
            .succ_opt()
            .ok_or(SolarEventError::InvalidCalendarComponents)?;
        Ok(Self::new(next.year(), next.month(), next.day()))
    }

    /// The time of `event` on this day at `location`.
    ///
    /// Resolves this day's local midnight directly — no "current instant"
    /// is involved.  The result is expressed in the location's time zone,
    /// truncated to whole seconds.
    ///
    /// # Errors
    ///
    /// As for [`Location::time_of`].
    pub fn time_of<Tz: TimeZone>(
        &self,
        event: SolarEvent,
        location: &Location<Tz>,
    ) -> Result<DateTime<Tz>, SolarEventError> {
        let midnight = self.local_midnight(&location.time_zone)?;
        let jd = julian_date(&midnight);

        match event.elevation() {
            Some(elevation) => {
                let minutes =
                    event_utc_minutes(jd, location.coordinate, elevation, event.is_rising())?;
                self.instant_at_utc_minutes(minutes, &location.time_zone)
            }
            // Solar noon: the midpoint between this day's sunrise and
            // sunset instants; undefined whenever either of them is.
            None => {
                let sunrise = event_utc_minutes(jd, location.coordinate, 0.0, true)?;
                let sunset = event_utc_minutes(jd, location.coordinate, 0.0, false)?;
                let rise = self.instant_at_utc_minutes(sunrise, &location.time_zone)?;
                let set = self.instant_at_utc_minutes(sunset, &location.time_zone)?;
                let midpoint = (rise.with_timezone(&Utc).timestamp()
                    + set.with_timezone(&Utc).timestamp())
                .div_euclid(2);
                let utc = DateTime::<Utc>::from_timestamp(midpoint, 0)
                    .ok_or(SolarEventError::InvalidCalendarComponents)?;
                Ok(utc.with_timezone(&location.time_zone))
            }
        }
    }

    // ── resolution helpers ────────────────────────────────────────────

    fn naive(&self) -> Result<NaiveDate, SolarEventError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(SolarEventError::InvalidCalendarComponents)
    }

    /// This day's midnight in the given zone.  A zone transition that
    /// skips 00:00 leaves the midnight unresolvable.
    fn local_midnight<Tz: TimeZone>(&self, time_zone: &Tz) -> Result<DateTime<Tz>, SolarEventError> {
        let midnight = self.naive()?.and_time(NaiveTime::MIN);
        time_zone
            .from_local_datetime(&midnight)
            .earliest()
            .ok_or(SolarEventError::InvalidCalendarComponents)
    }

    /// Civil instant at `minutes` from 00:00 UTC on this *local* calendar
    /// date, floored to whole seconds, expressed in the given zone.
    fn instant_at_utc_minutes<Tz: TimeZone>(
        &self,
        minutes: f64,
        time_zone: &Tz,
    ) -> Result<DateTime<Tz>, SolarEventError> {
        let midnight_utc = Utc
            .with_ymd_and_hms(self.year, self.month, self.day, 0, 0, 0)
            .single()
            .ok_or(SolarEventError::InvalidCalendarComponents)?;
        let seconds = (minutes * 60.0).floor() as i64;
        Ok((midnight_utc + Duration::seconds(seconds)).with_timezone(time_zone))
    }
}

impl std::fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn new_york() -> Location<FixedOffset> {
        // Eastern Daylight Time on the tested date.
        Location::new(
            FixedOffset::west_opt(4 * 3600).unwrap(),
            Coordinate::new(40.642, -74.017),
        )
    }

    #[test]
    fn elevation_thresholds() {
        assert_eq!(SolarEvent::Sunrise.elevation(), Some(0.0));
        assert_eq!(SolarEvent::CivilDusk.elevation(), Some(-6.0));
        assert_eq!(SolarEvent::NauticalDawn.elevation(), Some(-12.0));
        assert_eq!(SolarEvent::AstronomicalDusk.elevation(), Some(-18.0));
        assert_eq!(SolarEvent::SolarNoon.elevation(), None);
    }

    #[test]
    fn rising_side_selection() {
        assert!(SolarEvent::Sunrise.is_rising());
        assert!(SolarEvent::AstronomicalDawn.is_rising());
        assert!(!SolarEvent::Sunset.is_rising());
        assert!(!SolarEvent::CivilDusk.is_rising());
    }

    #[test]
    fn calendar_day_from_instant_respects_zone() {
        // 2014-11-01T02:00Z is still October 31st in New York.
        let at = Utc.with_ymd_and_hms(2014, 11, 1, 2, 0, 0).unwrap();
        let day = CalendarDay::from_instant(at, &new_york().time_zone);
        assert_eq!(day, CalendarDay::new(2014, 10, 31));
        assert_eq!(CalendarDay::from_instant(at, &Utc), CalendarDay::new(2014, 11, 1));
    }

    #[test]
    fn succ_crosses_month_and_leap_boundaries() {
        assert_eq!(
            CalendarDay::new(2014, 10, 31).succ().unwrap(),
            CalendarDay::new(2014, 11, 1)
        );
        assert_eq!(
            CalendarDay::new(2016, 2, 28).succ().unwrap(),
            CalendarDay::new(2016, 2, 29)
        );
        assert_eq!(
            CalendarDay::new(2015, 12, 31).succ().unwrap(),
            CalendarDay::new(2016, 1, 1)
        );
    }

    #[test]
    fn nonexistent_date_is_reported_not_defaulted() {
        let day = CalendarDay::new(2015, 2, 30);
        assert_eq!(
            day.time_of(SolarEvent::Sunrise, &new_york()),
            Err(SolarEventError::InvalidCalendarComponents)
        );
        assert_eq!(day.succ(), Err(SolarEventError::InvalidCalendarComponents));
    }

    #[test]
    fn time_of_day_based_matches_instant_based() {
        let location = new_york();
        let at = Utc.with_ymd_and_hms(2014, 11, 1, 12, 0, 0).unwrap();
        let by_instant = location.time_of(SolarEvent::Sunrise, at).unwrap();
        let by_day = CalendarDay::new(2014, 11, 1)
            .time_of(SolarEvent::Sunrise, &location)
            .unwrap();
        assert_eq!(by_instant, by_day);
    }

    #[test]
    fn display_names() {
        assert_eq!(SolarEvent::CivilDawn.to_string(), "civil dawn");
        assert_eq!(SolarEvent::SolarNoon.to_string(), "solar noon");
        assert_eq!(CalendarDay::new(2014, 11, 1).to_string(), "2014-11-01");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_for_value_types() {
        let day = CalendarDay::new(2014, 11, 1);
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(serde_json::from_str::<CalendarDay>(&json).unwrap(), day);

        let event: SolarEvent = serde_json::from_str("\"NauticalDusk\"").unwrap();
        assert_eq!(event, SolarEvent::NauticalDusk);

        let coord = Coordinate::new(40.642, -74.017);
        let json = serde_json::to_string(&coord).unwrap();
        assert!(json.contains("latitude"));
    }
}
