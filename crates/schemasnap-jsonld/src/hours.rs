//! Opening-hours compilation.
//!
//! Per-day open/close pairs are folded into the smallest list of
//! `OpeningHoursSpecification` entries: each entry covers a maximal run of
//! consecutive weekdays (Monday through Sunday, no wraparound) that share the
//! same hours.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::{DayOfWeek, OpeningHoursSpecification};

/// Days of the week in canonical Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in [`Weekday::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase field-map key, e.g. `"monday"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Schema.org label, e.g. `"Monday"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Case-insensitive lookup by field-map key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Weekday> {
        let key = key.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.key().eq_ignore_ascii_case(key))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Open and close times for one day, as `"HH:MM"` 24-hour strings.
///
/// A missing time is an empty string; the validator reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

impl DayHours {
    #[must_use]
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

/// One optional [`DayHours`] slot per weekday. An empty slot means closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyHours([Option<DayHours>; 7]);

impl WeeklyHours {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with_day(mut self, day: Weekday, open: &str, close: &str) -> Self {
        self.set(day, DayHours::new(open, close));
        self
    }

    pub fn set(&mut self, day: Weekday, hours: DayHours) {
        self.0[day.index()] = Some(hours);
    }

    pub fn clear(&mut self, day: Weekday) {
        self.0[day.index()] = None;
    }

    #[must_use]
    pub fn get(&self, day: Weekday) -> Option<&DayHours> {
        self.0[day.index()].as_ref()
    }

    /// Populated days in canonical order.
    pub fn populated_days(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        Weekday::ALL
            .into_iter()
            .filter_map(|day| self.get(day).map(|hours| (day, hours)))
    }

    /// Read a `{ "monday": { "open": .., "close": .. }, .. }` map.
    ///
    /// Returns `None` unless `value` is an object. Non-weekday keys and
    /// non-object day entries are skipped.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<WeeklyHours> {
        let map = value.as_object()?;
        let mut hours = WeeklyHours::new();
        for (key, entry) in map {
            let Some(day) = Weekday::from_key(key) else {
                continue;
            };
            let Some(entry) = entry.as_object() else {
                continue;
            };
            let time = |name: &str| match entry.get(name) {
                Some(Value::String(s)) => s.clone(),
                _ => String::new(),
            };
            hours.set(day, DayHours::new(&time("open"), &time("close")));
        }
        Some(hours)
    }
}

impl Serialize for WeeklyHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.populated_days().count()))?;
        for (day, hours) in self.populated_days() {
            map.serialize_entry(day.key(), hours)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklyHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        WeeklyHours::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("opening hours must be a map of weekdays"))
    }
}

/// Compile opening hours into Schema.org specifications.
///
/// `open_24_hours` wins over any per-day entries and yields a single
/// all-week `00:00`–`23:59` specification. Without it, consecutive days
/// with identical hours are merged; a closed day breaks a run.
#[must_use]
pub fn build_opening_hours(
    open_24_hours: bool,
    hours: Option<&WeeklyHours>,
) -> Vec<OpeningHoursSpecification> {
    if open_24_hours {
        return vec![OpeningHoursSpecification::all_week("00:00", "23:59")];
    }

    let Some(hours) = hours else {
        return Vec::new();
    };

    group_consecutive_days(hours)
        .into_iter()
        .map(|group| {
            let day_of_week = if let [single] = group.days.as_slice() {
                DayOfWeek::Single(*single)
            } else {
                DayOfWeek::Many(group.days)
            };
            OpeningHoursSpecification::new(day_of_week, &group.opens, &group.closes)
        })
        .collect()
}

struct DayGroup {
    days: Vec<Weekday>,
    opens: String,
    closes: String,
}

fn group_consecutive_days(hours: &WeeklyHours) -> Vec<DayGroup> {
    let mut groups = Vec::new();
    let mut consumed = [false; 7];

    for (idx, day) in Weekday::ALL.into_iter().enumerate() {
        if consumed[idx] {
            continue;
        }
        let Some(seed) = hours.get(day) else {
            continue;
        };
        consumed[idx] = true;

        let mut group = DayGroup {
            days: vec![day],
            opens: seed.open.clone(),
            closes: seed.close.clone(),
        };

        for (next_idx, next_day) in Weekday::ALL.into_iter().enumerate().skip(idx + 1) {
            match hours.get(next_day) {
                Some(next) if !consumed[next_idx] && next == seed => {
                    group.days.push(next_day);
                    consumed[next_idx] = true;
                }
                _ => break,
            }
        }

        groups.push(group);
    }

    groups
}

#[cfg(test)]
#[path = "hours_test.rs"]
mod tests;
