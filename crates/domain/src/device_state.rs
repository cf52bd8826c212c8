//! Device state — the single record polled by the embedded device.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::command::ControlCommand;
use crate::time::Timestamp;

/// Command name present in a freshly created record.
pub const DEFAULT_COMMAND: &str = "led";
/// Value of [`DEFAULT_COMMAND`] in a freshly created record.
pub const DEFAULT_VALUE: &str = "OFF";
/// Wire name of the mutation timestamp. A command with this name never
/// reaches the value map: the timestamp always wins.
pub const LAST_UPDATED_KEY: &str = "lastUpdated";

/// Current commanded values plus the time of the last mutation.
///
/// Serializes as one flat JSON object, for example
/// `{"led":"OFF","lastUpdated":"2026-10-19T08:15:30.123Z"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
    #[serde(rename = "lastUpdated", with = "crate::time::iso8601")]
    last_updated: Timestamp,
}

impl DeviceState {
    /// Create the start-up record: `led = "OFF"`, stamped with `created_at`.
    #[must_use]
    pub fn new(created_at: Timestamp) -> Self {
        Self::with_defaults(
            [(DEFAULT_COMMAND.to_string(), DEFAULT_VALUE.to_string())],
            created_at,
        )
    }

    /// Create a record seeded with arbitrary initial values.
    #[must_use]
    pub fn with_defaults(
        defaults: impl IntoIterator<Item = (String, String)>,
        created_at: Timestamp,
    ) -> Self {
        let values = defaults
            .into_iter()
            .filter(|(command, _)| command != LAST_UPDATED_KEY)
            .collect();
        Self {
            values,
            last_updated: created_at,
        }
    }

    /// Set `command = value` and stamp the record with `at`.
    ///
    /// Creates the key when new, overwrites it otherwise.
    pub fn apply(&mut self, command: &ControlCommand, at: Timestamp) {
        if command.command() != LAST_UPDATED_KEY {
            self.values
                .insert(command.command().to_string(), command.value().to_string());
        }
        self.last_updated = at;
    }

    /// Look up the last value set for `command`.
    #[must_use]
    pub fn get(&self, command: &str) -> Option<&str> {
        self.values.get(command).map(String::as_str)
    }

    /// All command values, ordered by name.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Time of the most recent mutation, or creation time if never mutated.
    #[must_use]
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn start() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
    }

    fn cmd(command: &str, value: &str) -> ControlCommand {
        ControlCommand::new(command, value).unwrap()
    }

    #[test]
    fn should_start_with_led_off() {
        let state = DeviceState::new(start());
        assert_eq!(state.get("led"), Some("OFF"));
        assert_eq!(state.values().len(), 1);
        assert_eq!(state.last_updated(), start());
    }

    #[test]
    fn should_overwrite_existing_key_and_stamp_time() {
        let mut state = DeviceState::new(start());
        let later = start() + Duration::seconds(5);

        state.apply(&cmd("led", "ON"), later);

        assert_eq!(state.get("led"), Some("ON"));
        assert_eq!(state.last_updated(), later);
    }

    #[test]
    fn should_create_new_key_without_touching_others() {
        let mut state = DeviceState::new(start());

        state.apply(&cmd("brightness", "75"), start());

        assert_eq!(state.get("led"), Some("OFF"));
        assert_eq!(state.get("brightness"), Some("75"));
    }

    #[test]
    fn should_keep_timestamp_when_command_targets_last_updated() {
        let mut state = DeviceState::new(start());
        let later = start() + Duration::seconds(1);

        state.apply(&cmd("lastUpdated", "yesterday"), later);

        assert_eq!(state.get("lastUpdated"), None);
        assert_eq!(state.last_updated(), later);
    }

    #[test]
    fn should_serialize_as_flat_object() {
        let state = DeviceState::new(start());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "led": "OFF",
                "lastUpdated": "2026-10-19T08:00:00.000Z",
            })
        );
    }

    #[test]
    fn should_seed_from_custom_defaults() {
        let state = DeviceState::with_defaults(
            [
                ("relay".to_string(), "CLOSED".to_string()),
                ("lastUpdated".to_string(), "ignored".to_string()),
            ],
            start(),
        );
        assert_eq!(state.get("relay"), Some("CLOSED"));
        assert_eq!(state.get("led"), None);
        assert_eq!(state.values().len(), 1);
    }
}
