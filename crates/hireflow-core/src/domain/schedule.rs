//! Scheduler dialog: collects one interview slot and hands back a
//! [`ScheduleRecord`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{SchedulerError, ValidationError};
use super::ids::ScheduleId;

const FIRST_SLOT_HOUR: u8 = 9;
const SLOT_COUNT: u8 = 18;

/// A half-hour start time between 09:00 and 17:30 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// All offered slots in chronological order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOT_COUNT).map(TimeSlot)
    }

    pub fn hour(self) -> u8 {
        FIRST_SLOT_HOUR + self.0 / 2
    }

    pub fn minute(self) -> u8 {
        (self.0 % 2) * 30
    }

    pub fn as_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or_default()
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::all()
            .find(|slot| slot.to_string() == s)
            .ok_or_else(|| ValidationError::InvalidTimeSlot(s.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum InterviewDuration {
    Minutes30,
    Minutes45,
    #[default]
    Minutes60,
    Minutes90,
}

impl InterviewDuration {
    pub const ALL: [InterviewDuration; 4] = [
        InterviewDuration::Minutes30,
        InterviewDuration::Minutes45,
        InterviewDuration::Minutes60,
        InterviewDuration::Minutes90,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            InterviewDuration::Minutes30 => 30,
            InterviewDuration::Minutes45 => 45,
            InterviewDuration::Minutes60 => 60,
            InterviewDuration::Minutes90 => 90,
        }
    }
}

impl TryFrom<u32> for InterviewDuration {
    type Error = ValidationError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        InterviewDuration::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or(ValidationError::InvalidDuration(minutes))
    }
}

impl From<InterviewDuration> for u32 {
    fn from(duration: InterviewDuration) -> Self {
        duration.minutes()
    }
}

/// Finalized output of the dialog. Not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub id: ScheduleId,
    pub applicant_name: String,
    pub round_label: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub duration: InterviewDuration,
    pub meeting_link: String,
}

impl ScheduleRecord {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.as_time())
    }
}

/// Read-only context shown at the top of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContext {
    pub applicant_name: String,
    pub round_label: String,
}

/// Dialog state for scheduling a single interview.
///
/// After every valid submission or cancel the fields return to their
/// defaults: today's date, no time slot, the default duration, empty link.
#[derive(Debug, Clone)]
pub struct SchedulerDialog {
    context: Option<DialogContext>,
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
    duration: InterviewDuration,
    meeting_link: String,
    default_duration: InterviewDuration,
    placeholder_link: String,
}

impl SchedulerDialog {
    pub fn new(today: NaiveDate, default_duration: InterviewDuration, placeholder_link: impl Into<String>) -> Self {
        Self {
            context: None,
            date: Some(today),
            time: None,
            duration: default_duration,
            meeting_link: String::new(),
            default_duration,
            placeholder_link: placeholder_link.into(),
        }
    }

    pub fn open(&mut self, applicant_name: impl Into<String>, round_label: impl Into<String>) {
        self.context = Some(DialogContext {
            applicant_name: applicant_name.into(),
            round_label: round_label.into(),
        });
    }

    pub fn is_open(&self) -> bool {
        self.context.is_some()
    }

    pub fn context(&self) -> Option<&DialogContext> {
        self.context.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn duration(&self) -> InterviewDuration {
        self.duration
    }

    pub fn meeting_link(&self) -> &str {
        &self.meeting_link
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: Option<TimeSlot>) {
        self.time = time;
    }

    pub fn set_duration(&mut self, duration: InterviewDuration) {
        self.duration = duration;
    }

    pub fn set_meeting_link(&mut self, link: impl Into<String>) {
        self.meeting_link = link.into();
    }

    /// Validates the fields, hands the record to `on_schedule`, then closes
    /// and resets the dialog.
    ///
    /// On a validation error the callback is not invoked and the dialog
    /// stays open with its fields as they were.
    pub fn submit<F>(&mut self, today: NaiveDate, id: ScheduleId, on_schedule: F) -> Result<ScheduleRecord, SchedulerError>
    where
        F: FnOnce(&ScheduleRecord),
    {
        let context = self.context.as_ref().ok_or(SchedulerError::Closed)?;
        let date = self.date.ok_or(ValidationError::MissingField("date"))?;
        let time = self.time.ok_or(ValidationError::MissingField("time"))?;
        if date < today {
            return Err(ValidationError::DateInPast { date, today }.into());
        }

        let link = self.meeting_link.trim();
        let record = ScheduleRecord {
            id,
            applicant_name: context.applicant_name.clone(),
            round_label: context.round_label.clone(),
            date,
            time,
            duration: self.duration,
            meeting_link: if link.is_empty() {
                self.placeholder_link.clone()
            } else {
                link.to_string()
            },
        };

        on_schedule(&record);
        self.close(today);
        Ok(record)
    }

    /// Closes without scheduling.
    pub fn cancel(&mut self, today: NaiveDate) {
        self.close(today);
    }

    fn close(&mut self, today: NaiveDate) {
        debug!("closing scheduler dialog and resetting fields");
        self.context = None;
        self.date = Some(today);
        self.time = None;
        self.duration = self.default_duration;
        self.meeting_link.clear();
    }
}
