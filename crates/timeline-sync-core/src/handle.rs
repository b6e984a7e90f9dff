//! Narrow interface onto the external animation engine

use crate::{LifecycleHooks, TimelineConfig, TimelineDescriptor};
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Imperative surface of one engine-owned animation timeline.
///
/// The adapter never stores playback state of its own; the handle is the
/// single source of truth for play position and duration. Everything beyond
/// this surface (tween math, easing, frame scheduling) belongs to the engine.
pub trait TimelineHandle: Send {
    /// Start or resume playback.
    fn play(&mut self);

    /// Pause playback.
    fn pause(&mut self);

    /// Restart playback from the beginning.
    fn restart(&mut self);

    /// Reverse playback direction.
    fn reverse(&mut self);

    /// Move playback to an absolute position, in the engine's time unit.
    fn seek(&mut self, position: f64);

    /// Total duration reported by the engine.
    fn duration(&self) -> f64;

    /// Register animatable target values on the timeline.
    fn add(&mut self, targets: Value);

    /// Target values registered so far.
    fn targets(&self) -> Vec<Value>;

    /// Subscribe lifecycle callbacks.
    ///
    /// The engine invokes them on its own schedule; subscriptions are never
    /// removed for the lifetime of the handle.
    fn subscribe(&mut self, hooks: LifecycleHooks);
}

/// Factory side of the engine interface.
pub trait AnimationEngine {
    /// Create a timeline from resolved construction attributes.
    ///
    /// The adapter forwards attributes verbatim; malformed configuration is
    /// the engine's concern, so there is no error path here.
    fn create_timeline(&self, config: TimelineConfig) -> Box<dyn TimelineHandle>;
}

/// Shared reference to an engine timeline.
///
/// Every component derived from one adapter points at the same handle;
/// clones are cheap and refer to the same underlying timeline. Treat the
/// handle as a singleton per adapter. The mutex exists because the engine
/// may invoke lifecycle callbacks on its own schedule, concurrently with
/// component updates.
#[derive(Clone)]
pub struct SharedTimeline {
    id: Uuid,
    inner: Arc<Mutex<Box<dyn TimelineHandle>>>,
}

impl SharedTimeline {
    /// Wrap an engine handle for shared access.
    pub fn new(handle: Box<dyn TimelineHandle>) -> Self {
        Self {
            id: Uuid::new_v4(),
            inner: Arc::new(Mutex::new(handle)),
        }
    }

    /// Identifier for log correlation; stable for the handle's lifetime.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn TimelineHandle>> {
        // A hook that panicked mid-call leaves the timeline usable.
        self.inner.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// Start or resume playback.
    #[inline]
    pub fn play(&self) {
        self.lock().play()
    }

    /// Pause playback.
    #[inline]
    pub fn pause(&self) {
        self.lock().pause()
    }

    /// Restart playback from the beginning.
    #[inline]
    pub fn restart(&self) {
        self.lock().restart()
    }

    /// Reverse playback direction.
    #[inline]
    pub fn reverse(&self) {
        self.lock().reverse()
    }

    /// Move playback to an absolute position.
    #[inline]
    pub fn seek(&self, position: f64) {
        self.lock().seek(position)
    }

    /// Total duration reported by the engine.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.lock().duration()
    }

    /// Register animatable target values on the timeline.
    #[inline]
    pub fn add(&self, targets: Value) {
        self.lock().add(targets)
    }

    /// Alias for [`SharedTimeline::add`].
    ///
    /// Target values can be registered under either name; both reach the
    /// same underlying engine operation.
    #[inline]
    pub fn values(&self, targets: Value) {
        self.add(targets)
    }

    /// Target values registered so far.
    #[inline]
    pub fn targets(&self) -> Vec<Value> {
        self.lock().targets()
    }

    /// Subscribe lifecycle callbacks on the handle.
    #[inline]
    pub fn subscribe(&self, hooks: LifecycleHooks) {
        self.lock().subscribe(hooks)
    }

    /// Snapshot the observable state of the timeline.
    #[inline]
    pub fn snapshot(&self) -> TimelineDescriptor {
        TimelineDescriptor::from_handle(self.lock().as_ref())
    }
}

impl fmt::Debug for SharedTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTimeline")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
