// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy for solar event computations.

use thiserror::Error;

/// The ways a solar event computation can fail.
///
/// The polar variants are *domain* outcomes, not numerical accidents: at
/// high latitudes the sun simply never crosses some elevation thresholds
/// on some dates, and callers must handle that explicitly.  Nothing in
/// this crate clamps or defaults a missing event to a concrete time.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolarEventError {
    /// The sun never rises above the requested elevation on this date
    /// (polar night for that threshold).
    #[error("the sun never rises above the requested elevation on this date")]
    NeverRises,

    /// The sun never sets below the requested elevation on this date
    /// (polar day for that threshold).
    #[error("the sun never sets below the requested elevation on this date")]
    NeverSets,

    /// The calendar collaborator could not resolve a civil instant — a
    /// caller precondition violation (nonexistent date, out-of-range
    /// value, or a local midnight skipped by a zone transition).
    #[error("calendar components could not be resolved for the given instant")]
    InvalidCalendarComponents,
}
