//! Resolution and rendering of task dates.
//!
//! User input is either `DD/MM/YYYY HH:mm` or `DD/MM/YYYY`. Instants are stored
//! as `YYYY-MM-DDTHH:mm` or `YYYY-MM-DD`; the `T` separator is the only thing
//! that tells the two kinds apart when a save file is read back, so the stored
//! date-time form must always contain it and the stored date form never may.

use std::cmp::Ordering;
use std::fmt;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

use crate::error::{DateContext, DateError};

/// Separator between date and time in the stored form.
pub const STORED_SEPARATOR: char = 'T';

const INPUT_DATE_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]");
const INPUT_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

const STORED_DATE_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");
const STORED_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const DISPLAY_DATE_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]");
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short], [day] [month repr:short] [year]");

/// Temporal kind of an [`Instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstantKind {
    /// Calendar date without a time of day.
    Date,
    /// Calendar date with hour and minute.
    DateTime,
}

/// A resolved point in time, tagged as a calendar date or a date-time.
///
/// Instants of different kinds are unordered: `partial_cmp` returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instant {
    /// Calendar date.
    Date(Date),
    /// Calendar date with time of day.
    DateTime(PrimitiveDateTime),
}

impl Instant {
    /// Resolve user input, trying the date-time pattern before the bare date.
    ///
    /// # Errors
    /// Returns [`DateError::Missing`] for blank input, phrased for `context`, and
    /// [`DateError::Unrecognized`] when neither pattern matches.
    pub fn resolve(text: &str, context: DateContext) -> Result<Self, DateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DateError::Missing(context));
        }
        // `[year]` would otherwise accept a leading sign.
        if text.contains(['+', '-']) {
            return Err(DateError::Unrecognized { input: text.to_owned() });
        }
        if let Ok(datetime) = PrimitiveDateTime::parse(text, INPUT_DATE_TIME) {
            return Ok(Self::DateTime(datetime));
        }
        Date::parse(text, INPUT_DATE)
            .map(Self::Date)
            .map_err(|_| DateError::Unrecognized { input: text.to_owned() })
    }

    /// Parse the stored form, choosing the kind by the presence of [`STORED_SEPARATOR`].
    ///
    /// # Errors
    /// Returns [`DateError::InvalidStored`] when the text does not parse as the inferred kind.
    pub fn from_stored(text: &str) -> Result<Self, DateError> {
        let text = text.trim();
        let parsed = if is_stored_date_time(text) {
            PrimitiveDateTime::parse(text, STORED_DATE_TIME).map(Self::DateTime)
        } else {
            Date::parse(text, STORED_DATE).map(Self::Date)
        };
        parsed.map_err(|source| DateError::InvalidStored {
            input: text.to_owned(),
            source,
        })
    }

    /// Render the stored form.
    ///
    /// # Errors
    /// Returns [`DateError::Render`] if formatting fails.
    pub fn to_stored(self) -> Result<String, DateError> {
        let rendered = match self {
            Self::Date(date) => date.format(STORED_DATE)?,
            Self::DateTime(datetime) => datetime.format(STORED_DATE_TIME)?,
        };
        Ok(rendered)
    }

    /// Render the human display form, e.g. `Sat, 06 Jun 2026 14:00`.
    ///
    /// # Errors
    /// Returns [`DateError::Render`] if formatting fails.
    pub fn to_display(self) -> Result<String, DateError> {
        let rendered = match self {
            Self::Date(date) => date.format(DISPLAY_DATE)?,
            Self::DateTime(datetime) => datetime.format(DISPLAY_DATE_TIME)?,
        };
        Ok(rendered)
    }

    /// Temporal kind of this instant.
    #[must_use]
    pub const fn kind(self) -> InstantKind {
        match self {
            Self::Date(_) => InstantKind::Date,
            Self::DateTime(_) => InstantKind::DateTime,
        }
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.to_display().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Whether stored text denotes a date-time rather than a calendar date.
#[must_use]
pub fn is_stored_date_time(text: &str) -> bool {
    text.contains(STORED_SEPARATOR)
}
