use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// What was worked (or taken off) on a single day.
///
/// Serialized with the field names used by the stored blob:
/// `overtime`, `holidayWork`, `paidLeave`. Missing or `null` fields read
/// back as `0` / `false`. Minutes written as floats (`90.0`) or numeric
/// strings (`"90"`) are accepted; fractions round, negatives become `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(rename = "overtime", deserialize_with = "loose_minutes")]
    pub overtime_minutes: u32,

    #[serde(rename = "holidayWork", deserialize_with = "loose_minutes")]
    pub holiday_work_minutes: u32,

    #[serde(rename = "paidLeave", deserialize_with = "null_as_default")]
    pub paid_leave: bool,
}

impl Record {
    pub fn new(overtime_minutes: u32, holiday_work_minutes: u32, paid_leave: bool) -> Self {
        Self {
            overtime_minutes,
            holiday_work_minutes,
            paid_leave,
        }
    }

    /// True when no field carries information; such records are never stored.
    pub fn is_empty(&self) -> bool {
        self.overtime_minutes == 0 && self.holiday_work_minutes == 0 && !self.paid_leave
    }

    pub fn has_overtime(&self) -> bool {
        self.overtime_minutes > 0
    }

    pub fn has_holiday_work(&self) -> bool {
        self.holiday_work_minutes > 0
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredMinutes {
    Int(u64),
    Float(f64),
    Text(String),
}

fn minutes_from_float<E: serde::de::Error>(value: f64) -> Result<u32, E> {
    if !value.is_finite() {
        return Err(E::custom(format!("not a number of minutes: {value}")));
    }
    let rounded = value.round();
    if rounded <= 0.0 {
        Ok(0)
    } else if rounded > f64::from(u32::MAX) {
        Err(E::custom(format!("too many minutes: {value}")))
    } else {
        Ok(rounded as u32)
    }
}

fn loose_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StoredMinutes>::deserialize(deserializer)? {
        None => Ok(0),
        Some(StoredMinutes::Int(n)) => u32::try_from(n).map_err(D::Error::custom),
        Some(StoredMinutes::Float(f)) => minutes_from_float(f),
        Some(StoredMinutes::Text(t)) => match t.trim() {
            "" => Ok(0),
            t => t
                .parse::<f64>()
                .map_err(D::Error::custom)
                .and_then(minutes_from_float),
        },
    }
}
