// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar Event Times
//!
//! This crate computes, for a calendar date, geographic coordinate, and
//! time zone, the instants of solar events — sunrise, sunset, solar noon,
//! and civil/nautical/astronomical dawn and dusk — using the NOAA
//! low-precision solar ephemeris.
//!
//! # Core types
//!
//! - [`SolarEvent`] — closed enumeration of computable events.
//! - [`Location<Tz>`] — a coordinate paired with a `chrono` time zone.
//! - [`CalendarDay`] — an immutable civil `(year, month, day)`.
//! - [`JulianDate`] / [`JulianCenturies`] — the time scale the ephemeris
//!   polynomials run on.
//! - [`SolarEventError`] — polar day/night and calendar failures.
//!
//! # Pipeline
//!
//! | Stage | Entry point |
//! |-------|-------------|
//! | civil date+zone ⇄ Julian Date | [`julian_date`] / [`civil_instant`] |
//! | Julian Date ⇄ Julian centuries | [`JulianDate::centuries`] |
//! | solar position polynomials | [`ephemeris`] |
//! | elevation → hour angle | [`hour_angle_of_sunrise`] |
//! | two-pass event-time refinement | [`Location::time_of`] |
//!
//! # Quick example
//!
//! ```
//! use chrono::FixedOffset;
//! use daybreak::{CalendarDay, Coordinate, Location, SolarEvent};
//!
//! // New York City, Eastern Daylight Time (UTC−4) on the queried date.
//! let location = Location::new(
//!     FixedOffset::west_opt(4 * 3600).unwrap(),
//!     Coordinate::new(40.642, -74.017),
//! );
//!
//! let sunrise = CalendarDay::new(2014, 11, 1).time_of(SolarEvent::Sunrise, &location)?;
//! assert_eq!(sunrise.to_string(), "2014-11-01 07:26:24 -04:00");
//! # Ok::<(), daybreak::SolarEventError>(())
//! ```
//!
//! # Polar day and night
//!
//! At high latitudes the sun may never cross an event's elevation
//! threshold on a given date.  Those outcomes are classified — never
//! clamped to a concrete time and never NaN:
//!
//! ```
//! use chrono::Utc;
//! use daybreak::{CalendarDay, Coordinate, Location, SolarEvent, SolarEventError};
//!
//! let svalbard = Location::new(Utc, Coordinate::new(75.0, 0.0));
//! let winter = CalendarDay::new(2014, 12, 21);
//! assert_eq!(
//!     winter.time_of(SolarEvent::Sunrise, &svalbard),
//!     Err(SolarEventError::NeverRises)
//! );
//! ```

mod engine;
mod error;
mod events;
mod hour_angle;
mod julian;

pub mod ephemeris;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use ephemeris::{declination_of_sun, equation_of_time};
pub use error::SolarEventError;
pub use events::{CalendarDay, Coordinate, Location, SolarEvent};
pub use hour_angle::{hour_angle_of_sunrise, hour_angle_of_sunset};
pub use julian::{civil_instant, julian_date, JulianCenturies, JulianDate};
