//! Seek commands: built-in percentage mapping or caller-supplied computation

use crate::{AdapterError, Result, SharedTimeline, TimelineDescriptor};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Computation mapping a timeline snapshot to an absolute seek position.
pub type SeekFn = Arc<dyn Fn(&TimelineDescriptor) -> f64 + Send + Sync>;

/// Dynamically-typed slot for [`SeekCommand::custom`].
///
/// Seek customization can arrive from an untyped surface (the same kind of
/// data the construction attributes travel through), so the slot keeps
/// whatever was received until it is checked.
pub enum SeekCallbackValue {
    /// A callable seek computation.
    Function(SeekFn),
    /// Anything else an untyped surface handed over.
    Data(Value),
}

impl SeekCallbackValue {
    /// Wrap a callable seek computation.
    pub fn function(callback: impl Fn(&TimelineDescriptor) -> f64 + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(callback))
    }

    /// Runtime type name, as reported in validation errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Data(Value::Null) => "null",
            Self::Data(Value::Bool(_)) => "boolean",
            Self::Data(Value::Number(_)) => "number",
            Self::Data(Value::String(_)) => "string",
            Self::Data(Value::Array(_)) => "array",
            Self::Data(Value::Object(_)) => "object",
        }
    }
}

impl From<Value> for SeekCallbackValue {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<SeekFn> for SeekCallbackValue {
    fn from(callback: SeekFn) -> Self {
        Self::Function(callback)
    }
}

impl fmt::Debug for SeekCallbackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
        }
    }
}

/// A seek to perform on the next component update it is present for.
///
/// Two modes: map a 0-100 percentage onto the timeline duration, or run a
/// caller-supplied computation over the timeline snapshot and forward its
/// return value to the engine unchanged.
#[derive(Clone)]
pub enum SeekCommand {
    /// Built-in mapping: `duration * (value / 100)`.
    Default(f64),
    /// Caller-supplied computation over the derivation-time snapshot.
    Custom(SeekFn),
}

impl SeekCommand {
    /// Built-in percentage mapping.
    #[inline]
    pub fn percent(value: f64) -> Self {
        Self::Default(value)
    }

    /// Caller-supplied seek computation.
    ///
    /// The slot must hold a callable; anything else is rejected with
    /// [`AdapterError::InvalidSeekCallback`] naming the received type.
    pub fn custom(value: impl Into<SeekCallbackValue>) -> Result<Self> {
        match value.into() {
            SeekCallbackValue::Function(callback) => Ok(Self::Custom(callback)),
            other => Err(AdapterError::invalid_seek_callback(other.type_name())),
        }
    }

    /// Resolve this command against a live timeline.
    ///
    /// `Default` maps the percentage through the handle's current duration;
    /// `Custom` runs the callback over `descriptor` and forwards whatever it
    /// returns.
    pub fn resolve(&self, timeline: &SharedTimeline, descriptor: &TimelineDescriptor) {
        match self {
            Self::Default(value) => {
                let position = timeline.duration() * (value / 100.0);
                timeline.seek(position);
            }
            Self::Custom(callback) => timeline.seek(callback(descriptor)),
        }
    }
}

impl fmt::Debug for SeekCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(value) => f.debug_tuple("Default").field(value).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
