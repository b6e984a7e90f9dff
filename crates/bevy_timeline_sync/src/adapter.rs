//! Construction of engine timelines and the components bound to them

use crate::components::TimelineSync;
use serde_json::{Map, Value};
use timeline_sync_core::{AnimationEngine, SharedTimeline, TimelineConfig};
use tracing::debug;

/// Binds one engine timeline to the component that drives it.
///
/// The adapter owns no animation state; it creates the handle through the
/// engine factory and hands out components closed over it.
pub struct TimelineAdapter {
    handle: SharedTimeline,
}

impl TimelineAdapter {
    /// Create a timeline from raw construction attributes.
    ///
    /// Attributes reach the engine factory verbatim, except that `autoplay`
    /// defaults to `false` when unset: playback is driven by explicit play
    /// signaling rather than starting on construction. Malformed attributes
    /// are the engine's concern; there is no error path here.
    pub fn new(engine: &dyn AnimationEngine, attributes: Map<String, Value>) -> Self {
        let config = TimelineConfig::from_attributes(attributes);
        let handle = SharedTimeline::new(engine.create_timeline(config));
        debug!(timeline = %handle.id(), "created engine timeline");
        Self { handle }
    }

    /// Derive a component bound to this adapter's handle.
    ///
    /// Each call yields a distinct component sharing the same underlying
    /// handle, with the timeline snapshot taken at derivation; treat the
    /// handle as a singleton per adapter.
    pub fn derive_component(&self) -> TimelineSync {
        TimelineSync::new(self.handle.clone())
    }

    /// The shared handle itself.
    #[inline]
    pub fn handle(&self) -> SharedTimeline {
        self.handle.clone()
    }

    /// Split the adapter into its imperative and declarative halves.
    ///
    /// `animate` collects target values for animating nodes (under either
    /// the `add` or the `values` name) and answers play, pause, restart,
    /// reverse, and seek directly. `timeline` is the component placed in the
    /// tree to drive the same handle declaratively.
    pub fn init(&self) -> TimelineParts {
        TimelineParts {
            animate: self.handle.clone(),
            timeline: self.derive_component(),
        }
    }
}

/// Imperative handle plus the component that drives it.
#[derive(Debug)]
pub struct TimelineParts {
    /// Shared handle onto the engine timeline.
    pub animate: SharedTimeline,
    /// Component to place in the tree.
    pub timeline: TimelineSync,
}
