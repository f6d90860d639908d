//! Header timestamps: a `/`-separated date in one of six component orders, and an
//! `HH:MM:SS[:mmm]` time.

use chrono::{Datelike, Timelike};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Order of the year, month and day components in a rendered date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DateFormat {
    /// `2024/03/07`: ISO order, sorts lexically.
    YearMonthDay,
    /// `2024/07/03`
    YearDayMonth,
    /// `03/07/2024`: US order.
    #[default]
    MonthDayYear,
    /// `03/2024/07`
    MonthYearDay,
    /// `07/03/2024`: most of Europe.
    DayMonthYear,
    /// `07/2024/03`
    DayYearMonth,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Component {
    Year,
    Month,
    Day,
}

impl DateFormat {
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::YearMonthDay,
            Self::YearDayMonth,
            Self::MonthDayYear,
            Self::MonthYearDay,
            Self::DayMonthYear,
            Self::DayYearMonth,
        ]
    }

    const fn components(self) -> [Component; 3] {
        use Component::{Day, Month, Year};
        match self {
            Self::YearMonthDay => [Year, Month, Day],
            Self::YearDayMonth => [Year, Day, Month],
            Self::MonthDayYear => [Month, Day, Year],
            Self::MonthYearDay => [Month, Year, Day],
            Self::DayMonthYear => [Day, Month, Year],
            Self::DayYearMonth => [Day, Year, Month],
        }
    }

    /// Short token form, e.g. `mdy`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YearMonthDay => "ymd",
            Self::YearDayMonth => "ydm",
            Self::MonthDayYear => "mdy",
            Self::MonthYearDay => "myd",
            Self::DayMonthYear => "dmy",
            Self::DayYearMonth => "dym",
        }
    }

    const fn from_components(c: [Component; 3]) -> Option<Self> {
        use Component::{Day, Month, Year};
        match c {
            [Year, Month, Day] => Some(Self::YearMonthDay),
            [Year, Day, Month] => Some(Self::YearDayMonth),
            [Month, Day, Year] => Some(Self::MonthDayYear),
            [Month, Year, Day] => Some(Self::MonthYearDay),
            [Day, Month, Year] => Some(Self::DayMonthYear),
            [Day, Year, Month] => Some(Self::DayYearMonth),
            _ => None,
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no valid component ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateFormatError(String);

impl fmt::Display for ParseDateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date format '{}', expected an ordering of year/month/day such as 'mdy' or 'year/month/day'",
            self.0
        )
    }
}

impl std::error::Error for ParseDateFormatError {}

fn component(token: &str) -> Option<Component> {
    match token {
        "y" | "yy" | "yyyy" | "year" => Some(Component::Year),
        "m" | "mm" | "month" => Some(Component::Month),
        "d" | "dd" | "day" => Some(Component::Day),
        _ => None,
    }
}

impl FromStr for DateFormat {
    type Err = ParseDateFormatError;

    /// Accepts `mdy`, `m/d/y`, `mm-dd-yyyy`, `month/day/year` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDateFormatError(s.to_string());
        let lowered = s.trim().to_lowercase();

        let tokens: Vec<String> = if lowered.contains(['/', '-', '.', ' ']) {
            lowered
                .split(['/', '-', '.', ' '])
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            lowered.chars().map(String::from).collect()
        };

        let [a, b, c] = tokens.as_slice() else {
            return Err(err());
        };
        let parts = [
            component(a).ok_or_else(err)?,
            component(b).ok_or_else(err)?,
            component(c).ok_or_else(err)?,
        ];
        Self::from_components(parts).ok_or_else(err)
    }
}

impl TryFrom<String> for DateFormat {
    type Error = ParseDateFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Renders `date` with its components in `order`, joined by `/`.
///
/// Year is 4 digits, month and day are 2 digits, all zero padded.
#[must_use]
pub fn format_date<D: Datelike>(date: &D, order: DateFormat) -> String {
    let parts: Vec<String> = order
        .components()
        .iter()
        .map(|c| match c {
            Component::Year => format!("{:04}", date.year()),
            Component::Month => format!("{:02}", date.month()),
            Component::Day => format!("{:02}", date.day()),
        })
        .collect();
    parts.join("/")
}

/// Renders `time` as `HH:MM:SS`, appending `:mmm` when `show_ms` is set.
#[must_use]
pub fn format_time<T: Timelike>(time: &T, show_ms: bool) -> String {
    let base = format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    );
    if show_ms {
        // Leap seconds report nanoseconds past 1e9.
        let ms = (time.nanosecond() / 1_000_000).min(999);
        format!("{base}:{ms:03}")
    } else {
        base
    }
}
