//! Fixed alarm settings shared by every invocation.

/// SNS topic every created alarm notifies.
pub const TOPIC_NAME: &str = "instance-alarms";

/// Alarms are created with their action attached but disarmed.
pub const ACTIONS_ENABLED: bool = false;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub topic_name: String,
    pub actions_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topic_name: TOPIC_NAME.to_string(),
            actions_enabled: ACTIONS_ENABLED,
        }
    }
}
