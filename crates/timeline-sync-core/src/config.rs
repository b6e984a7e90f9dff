//! Construction attributes forwarded to the animation engine

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resolved construction attributes for an engine timeline.
///
/// Recognized options are forwarded verbatim to the engine factory; the
/// adapter performs no validation of its own. The single local override is
/// `autoplay`, which defaults to `false` when the caller leaves it unset:
/// playback is driven by explicit play signaling, not by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimelineConfig {
    options: Map<String, Value>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineConfig {
    /// Empty configuration (autoplay resolves to false).
    pub fn new() -> Self {
        Self::from_attributes(Map::new())
    }

    /// Resolve raw attributes, inserting `autoplay: false` only when the key
    /// is absent. An explicit `autoplay` value passes through unchanged.
    pub fn from_attributes(attributes: Map<String, Value>) -> Self {
        let mut options = attributes;
        options
            .entry("autoplay".to_string())
            .or_insert(Value::Bool(false));
        Self { options }
    }

    /// Set an engine option.
    #[inline]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Look up an engine option.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// All options, as they will reach the engine factory.
    #[inline]
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Consume the configuration into the raw option map.
    #[inline]
    pub fn into_options(self) -> Map<String, Value> {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_autoplay_defaults_to_false() {
        let config = TimelineConfig::new();
        assert_eq!(config.get("autoplay"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_explicit_autoplay_passes_through() {
        let mut attributes = Map::new();
        attributes.insert("autoplay".to_string(), Value::Bool(true));
        let config = TimelineConfig::from_attributes(attributes);
        assert_eq!(config.get("autoplay"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_non_boolean_autoplay_passes_through() {
        let mut attributes = Map::new();
        attributes.insert("autoplay".to_string(), json!("soon"));
        let config = TimelineConfig::from_attributes(attributes);
        assert_eq!(config.get("autoplay"), Some(&json!("soon")));
    }

    #[test]
    fn test_other_options_are_forwarded_verbatim() {
        let mut attributes = Map::new();
        attributes.insert("duration".to_string(), json!(1000));
        attributes.insert("easing".to_string(), json!("easeInOutQuad"));
        let config = TimelineConfig::from_attributes(attributes);

        assert_eq!(config.get("duration"), Some(&json!(1000)));
        assert_eq!(config.get("easing"), Some(&json!("easeInOutQuad")));
        assert_eq!(config.get("autoplay"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_with_option() {
        let config = TimelineConfig::new().with_option("loop", true);
        assert_eq!(config.get("loop"), Some(&Value::Bool(true)));
    }
}
