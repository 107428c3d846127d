//! Domain identifiers (strongly-typed IDs).
//!
//! Two families live here:
//! - caller-supplied string keys (`ApplicantId`, `RoundKey`) that come from
//!   sample data or recruiter configuration and must round-trip unchanged;
//! - generated ULID ids (`ScheduleId`) built on the phantom-typed `Id<T>`.
//!
//! `Id<T>` carries a zero-sized marker so a `ScheduleId` can never be passed
//! where another generated id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait for generated id types.
///
/// Provides the prefix used by `Display` (e.g. "schedule-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic ULID-backed id.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Marker for schedule records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Schedule {}

impl IdMarker for Schedule {
    fn prefix() -> &'static str {
        "schedule-"
    }
}

/// Identifier of a confirmed interview schedule.
pub type ScheduleId = Id<Schedule>;

/// Stable identifier of an applicant (e.g. `app1`).
///
/// The value is opaque: any string is accepted, including ids that are not
/// part of the loaded sample data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(String);

impl ApplicantId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApplicantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApplicantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of an interview round on the board (e.g. `round1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundKey(String);

impl RoundKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Key for the `n`-th round, 1-based: `round1`, `round2`, ...
    pub fn ordinal(n: usize) -> Self {
        Self(format!("round{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoundKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
