//! Availability search query and its date validation.

use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Por favor introduce fechas válidas")]
    InvalidDates,
    #[error("La fecha de salida debe ser posterior a la fecha de entrada.")]
    CheckOutBeforeCheckIn,
}

/// Raw values of the search form, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub check_in_date: String,
    pub check_out_date: String,
    /// Empty means any type.
    pub room_type: String,
}

/// A query whose dates parsed and are in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidSearch {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
}

impl ValidSearch {
    /// Dates formatted for the backend's query string.
    pub fn check_in_param(&self) -> String {
        self.check_in.format(DATE_FORMAT).to_string()
    }

    pub fn check_out_param(&self) -> String {
        self.check_out.format(DATE_FORMAT).to_string()
    }
}

impl SearchQuery {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<ValidSearch, SearchError> {
        let (Some(check_in), Some(check_out)) =
            (parse_date(&self.check_in_date), parse_date(&self.check_out_date))
        else {
            return Err(SearchError::InvalidDates);
        };
        // Same-day check-out is accepted.
        if check_out < check_in {
            return Err(SearchError::CheckOutBeforeCheckIn);
        }
        Ok(ValidSearch {
            check_in,
            check_out,
            room_type: self.room_type.trim().to_string(),
        })
    }

    /// Whether both date fields currently hold a calendar date.
    pub fn dates_parse(&self) -> bool {
        parse_date(&self.check_in_date).is_some() && parse_date(&self.check_out_date).is_some()
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Today's date in the `min` attribute format of a date input.
pub fn today_param() -> String {
    chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
}
