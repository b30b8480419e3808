use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PlanError;

/// A day of the planning week.
///
/// Ordering follows display order, so maps keyed by `DayKey` iterate Mon to Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayKey {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayKey {
    /// All seven days in display order.
    pub const ALL: [DayKey; 7] = [
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
    ];

    /// Short label used in storage and output ("Mon", "Tue", ...).
    pub fn label(self) -> &'static str {
        match self {
            DayKey::Mon => "Mon",
            DayKey::Tue => "Tue",
            DayKey::Wed => "Wed",
            DayKey::Thu => "Thu",
            DayKey::Fri => "Fri",
            DayKey::Sat => "Sat",
            DayKey::Sun => "Sun",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayKey {
    type Err = PlanError;

    /// Accepts short or full day names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mon" | "monday" => Ok(DayKey::Mon),
            "tue" | "tuesday" => Ok(DayKey::Tue),
            "wed" | "wednesday" => Ok(DayKey::Wed),
            "thu" | "thursday" => Ok(DayKey::Thu),
            "fri" | "friday" => Ok(DayKey::Fri),
            "sat" | "saturday" => Ok(DayKey::Sat),
            "sun" | "sunday" => Ok(DayKey::Sun),
            other => Err(PlanError::InvalidInput(format!("unknown day '{}'", other))),
        }
    }
}

/// A map holding one value for every day of the week.
///
/// All seven keys are present at all times. Deserializing a map with
/// missing days fills them with `T::default()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DayMap<T>(BTreeMap<DayKey, T>);

impl<T> DayMap<T> {
    pub fn get(&self, day: DayKey) -> &T {
        &self.0[&day]
    }

    pub fn set(&mut self, day: DayKey, value: T) {
        self.0.insert(day, value);
    }

    /// Iterate `(day, value)` pairs in Mon..Sun order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &T)> {
        self.0.iter().map(|(day, value)| (*day, value))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.values()
    }
}

impl<T: Default> DayMap<T> {
    pub fn get_mut(&mut self, day: DayKey) -> &mut T {
        self.0.entry(day).or_default()
    }

    fn fill_missing(mut map: BTreeMap<DayKey, T>) -> Self {
        for day in DayKey::ALL {
            map.entry(day).or_default();
        }
        Self(map)
    }
}

impl<T: Default> Default for DayMap<T> {
    fn default() -> Self {
        Self::fill_missing(BTreeMap::new())
    }
}

impl<T: Default> FromIterator<(DayKey, T)> for DayMap<T> {
    fn from_iter<I: IntoIterator<Item = (DayKey, T)>>(iter: I) -> Self {
        Self::fill_missing(iter.into_iter().collect())
    }
}

impl<T> Index<DayKey> for DayMap<T> {
    type Output = T;

    fn index(&self, day: DayKey) -> &T {
        self.get(day)
    }
}

impl<'de, T> Deserialize<'de> for DayMap<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<DayKey, T>::deserialize(deserializer)?;
        Ok(Self::fill_missing(map))
    }
}
