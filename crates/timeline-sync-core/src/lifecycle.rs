//! Lifecycle hooks re-exposed from the animation engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback invoked by the engine at a named animation event.
///
/// The engine calls these on its own schedule, so they must be safe to run
/// at arbitrary times relative to component updates.
pub type LifecycleCallback = Arc<dyn Fn() + Send + Sync>;

/// The callback used for any hook the caller omits.
pub fn noop() -> LifecycleCallback {
    Arc::new(|| {})
}

/// Named animation events a timeline reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleStage {
    /// Playback started
    Start,
    /// Animated values changed
    Update,
    /// Playback reached the end
    Complete,
    /// A frame was produced
    Frame,
}

impl LifecycleStage {
    /// All stages, in registration order.
    pub const ALL: [LifecycleStage; 4] = [
        LifecycleStage::Start,
        LifecycleStage::Update,
        LifecycleStage::Complete,
        LifecycleStage::Frame,
    ];

    /// Get the name of this stage
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Update => "update",
            Self::Complete => "complete",
            Self::Frame => "frame",
        }
    }

    /// Parse a stage from its event name.
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "update" => Some(Self::Update),
            "complete" => Some(Self::Complete),
            "frame" => Some(Self::Frame),
            _ => None,
        }
    }
}

/// Mapping from lifecycle stage to callback.
///
/// Hooks are registered against a handle once, when the component that
/// carries them is added to the tree. Omitted stages default to no-ops.
#[derive(Clone)]
pub struct LifecycleHooks {
    /// Invoked when playback starts
    pub start: LifecycleCallback,
    /// Invoked when animated values change
    pub update: LifecycleCallback,
    /// Invoked when playback completes
    pub complete: LifecycleCallback,
    /// Invoked on every engine frame
    pub frame: LifecycleCallback,
}

impl Default for LifecycleHooks {
    fn default() -> Self {
        Self {
            start: noop(),
            update: noop(),
            complete: noop(),
            frame: noop(),
        }
    }
}

impl fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHooks").finish_non_exhaustive()
    }
}

impl LifecycleHooks {
    /// All-noop hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start hook
    #[inline]
    pub fn with_start(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.start = Arc::new(callback);
        self
    }

    /// Set the update hook
    #[inline]
    pub fn with_update(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.update = Arc::new(callback);
        self
    }

    /// Set the complete hook
    #[inline]
    pub fn with_complete(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.complete = Arc::new(callback);
        self
    }

    /// Set the frame hook
    #[inline]
    pub fn with_frame(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.frame = Arc::new(callback);
        self
    }

    /// Callback registered for a stage.
    #[inline]
    pub fn get(&self, stage: LifecycleStage) -> &LifecycleCallback {
        match stage {
            LifecycleStage::Start => &self.start,
            LifecycleStage::Update => &self.update,
            LifecycleStage::Complete => &self.complete,
            LifecycleStage::Frame => &self.frame,
        }
    }

    /// Invoke the callback registered for a stage.
    #[inline]
    pub fn invoke(&self, stage: LifecycleStage) {
        (self.get(stage))()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_stage_names_round_trip() {
        for stage in LifecycleStage::ALL {
            assert_eq!(LifecycleStage::from_name(stage.name()), Some(stage));
        }
        assert_eq!(LifecycleStage::from_name("begin"), None);
    }

    #[test]
    fn test_omitted_hooks_are_noops() {
        let hooks = LifecycleHooks::new();
        // Must not panic; defaults do nothing.
        for stage in LifecycleStage::ALL {
            hooks.invoke(stage);
        }
    }

    #[test]
    fn test_hooks_invoke_registered_callbacks() {
        let starts = Arc::new(AtomicUsize::new(0));
        let frames = Arc::new(AtomicUsize::new(0));

        let starts_in_hook = Arc::clone(&starts);
        let frames_in_hook = Arc::clone(&frames);
        let hooks = LifecycleHooks::new()
            .with_start(move || {
                starts_in_hook.fetch_add(1, Ordering::SeqCst);
            })
            .with_frame(move || {
                frames_in_hook.fetch_add(1, Ordering::SeqCst);
            });

        hooks.invoke(LifecycleStage::Start);
        hooks.invoke(LifecycleStage::Frame);
        hooks.invoke(LifecycleStage::Frame);
        hooks.invoke(LifecycleStage::Complete);

        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(frames.load(Ordering::SeqCst), 2);
    }
}
