//! Timeline Sync Core (engine-agnostic)
//!
//! Contracts for exposing an external animation engine's timeline to a
//! component tree: the narrow handle interface the engine implements, plus
//! the prop-level types an adapter translates into imperative calls
//! (construction attributes, lifecycle hooks, seek commands, and read-only
//! timeline snapshots). All animation computation, timing, and interpolation
//! stay on the engine side of [`TimelineHandle`].

pub mod config;
pub mod descriptor;
pub mod error;
pub mod handle;
pub mod lifecycle;
pub mod seek;
pub mod testing;

// Re-exports for consumers (adapters)
pub use config::TimelineConfig;
pub use descriptor::TimelineDescriptor;
pub use error::AdapterError;
pub use handle::{AnimationEngine, SharedTimeline, TimelineHandle};
pub use lifecycle::{noop, LifecycleCallback, LifecycleHooks, LifecycleStage};
pub use seek::{SeekCallbackValue, SeekCommand, SeekFn};

/// Timeline adapter result type
pub type Result<T> = core::result::Result<T, AdapterError>;
