use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Timelike};

const MONTHS_SK: [&str; 12] = [
    "január",
    "február",
    "marec",
    "apríl",
    "máj",
    "jún",
    "júl",
    "august",
    "september",
    "október",
    "november",
    "december",
];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current wall-clock time truncated to the minute.
pub fn now_time() -> NaiveTime {
    let now = Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accepts `HH:MM` and `HH:MM:SS`; seconds are dropped.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    let t = NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()?;
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0)
}

/// Stored trip dates are `YYYY-MM-DD`; full RFC 3339 timestamps written by
/// older clients are reduced to their calendar day.
pub fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    parse_date(s).or_else(|| {
        DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.date_naive())
    })
}

/// Slovak month name of `date`, first letter uppercased ("Október").
pub fn month_label<D: Datelike>(date: &D) -> String {
    capitalize_first(MONTHS_SK[date.month0() as usize])
}

/// Uppercase the first character, keep the remainder unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn same_month<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.month() == b.month() && a.year() == b.year()
}

/// Serde helpers for `YYYY-MM-DD` dates.
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_stored_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date '{}'", raw)))
    }
}

/// Serde helpers for `HH:MM` times.
pub mod serde_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{}'", raw)))
    }
}
