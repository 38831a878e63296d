use super::reminder::ServiceReminder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_FUEL_PRICE: f64 = 1.65;
pub const DEFAULT_CONSUMPTION: f64 = 6.5;

/// Canonical settings. The only shape used past the storage boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub fuel_price: f64,          // EUR/L
    pub average_consumption: f64, // L/100km
    #[serde(default)]
    pub service_reminders: Vec<ServiceReminder>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            fuel_price: DEFAULT_FUEL_PRICE,
            average_consumption: DEFAULT_CONSUMPTION,
            service_reminders: Vec::new(),
        }
    }
}

/// Settings document as found in storage. Accepts both the current layout
/// and the older one carrying a single reminder inline. Fields are read one
/// by one: a value of the wrong type is dropped without affecting the rest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    #[serde(default, deserialize_with = "lenient")]
    pub fuel_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub average_consumption: Option<f64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub service_reminders: Option<Vec<ServiceReminder>>,
    #[serde(default, deserialize_with = "lenient")]
    pub service_interval: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_service_odometer: Option<u32>,
}

/// `None` for null or for a value that does not decode as `T`.
fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Keeps the readable elements of an array; anything else is `None`.
fn lenient_list<'de, D, T>(d: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(d)? {
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Inline single-reminder fields of the older layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyReminder {
    pub service_interval: Option<u32>,
    pub service_name: Option<String>,
    pub last_service_odometer: Option<u32>,
}

/// Which layout a stored document uses, as far as reminders go.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsShape {
    /// `serviceReminders` present.
    Current(Vec<ServiceReminder>),
    /// No list, but a non-zero interval or a non-empty name inline.
    Legacy(LegacyReminder),
    /// Neither: no reminders at all.
    Bare,
}

impl StoredSettings {
    pub fn shape(&self) -> SettingsShape {
        if let Some(list) = &self.service_reminders {
            return SettingsShape::Current(list.clone());
        }

        let has_interval = self.service_interval.is_some_and(|v| v != 0);
        let has_name = self.service_name.as_deref().is_some_and(|s| !s.is_empty());

        if has_interval || has_name {
            SettingsShape::Legacy(LegacyReminder {
                service_interval: self.service_interval,
                service_name: self.service_name.clone(),
                last_service_odometer: self.last_service_odometer,
            })
        } else {
            SettingsShape::Bare
        }
    }
}

impl From<&AppSettings> for StoredSettings {
    fn from(s: &AppSettings) -> Self {
        Self {
            fuel_price: Some(s.fuel_price),
            average_consumption: Some(s.average_consumption),
            service_reminders: Some(s.service_reminders.clone()),
            ..Default::default()
        }
    }
}
