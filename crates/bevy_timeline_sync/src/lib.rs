//! Bevy adapter exposing an engine timeline as a declarative component.
//!
//! [`TimelineAdapter`] creates a timeline through the external engine's
//! factory and derives [`TimelineSync`] components bound to it. The plugin
//! wires two chained systems into `Update`: hook subscription when a
//! component is added, prop forwarding on every later change. The component
//! itself is a logic node only; it renders nothing and leaves children of
//! its entity untouched.

pub mod adapter;
pub mod components;
pub mod systems;

pub use adapter::{TimelineAdapter, TimelineParts};
pub use components::TimelineSync;

// Re-export the engine-facing contracts so downstream crates only need this
// crate as a dependency.
pub use timeline_sync_core::{
    noop, AdapterError, AnimationEngine, LifecycleCallback, LifecycleHooks, LifecycleStage,
    SeekCallbackValue, SeekCommand, SeekFn, SharedTimeline, TimelineConfig, TimelineDescriptor,
    TimelineHandle,
};

use bevy::prelude::*;

/// Plugin wiring the timeline sync systems into the update schedule.
///
/// The systems are chained so that hook subscription for a newly added
/// component always precedes any prop forwarding.
pub struct TimelineSyncPlugin;

impl Plugin for TimelineSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::register_lifecycle_hooks_system,
                systems::sync_timeline_props_system,
            )
                .chain(),
        );
    }
}
