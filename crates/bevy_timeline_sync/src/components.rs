use bevy::prelude::*;
use timeline_sync_core::{LifecycleHooks, SeekCommand, SharedTimeline, TimelineDescriptor};

/// Declarative controller for one engine timeline.
///
/// A pure logic node: the component renders nothing of its own and leaves
/// any children of its entity untouched. On every update after the tick it
/// was added, its props are translated into imperative calls on the shared
/// handle in a fixed order (play, pause, restart, reverse, seek), each check
/// independent of the others. The `lifecycle` hooks are subscribed on the
/// handle exactly once, when the component is added.
#[derive(Component, Debug)]
pub struct TimelineSync {
    /// Call `play()` on updates while true.
    pub play: bool,
    /// Call `pause()` on updates while true.
    pub pause: bool,
    /// Call `restart()` on updates while true.
    pub restart: bool,
    /// Call `reverse()` on updates while true.
    pub reverse: bool,
    /// Seek to resolve on updates where one is present.
    pub seek: Option<SeekCommand>,
    /// Hooks subscribed on the handle when the component is added.
    pub lifecycle: LifecycleHooks,
    handle: SharedTimeline,
    descriptor: TimelineDescriptor,
}

impl TimelineSync {
    pub(crate) fn new(handle: SharedTimeline) -> Self {
        let descriptor = handle.snapshot();
        Self {
            play: false,
            pause: false,
            restart: false,
            reverse: false,
            seek: None,
            lifecycle: LifecycleHooks::default(),
            handle,
            descriptor,
        }
    }

    /// The shared handle this component drives.
    #[inline]
    pub fn handle(&self) -> &SharedTimeline {
        &self.handle
    }

    /// Snapshot captured when the component was derived; custom seek
    /// callbacks receive exactly this view.
    #[inline]
    pub fn descriptor(&self) -> &TimelineDescriptor {
        &self.descriptor
    }

    /// Set the play prop
    #[inline]
    pub fn with_play(mut self, play: bool) -> Self {
        self.play = play;
        self
    }

    /// Set the pause prop
    #[inline]
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Set the restart prop
    #[inline]
    pub fn with_restart(mut self, restart: bool) -> Self {
        self.restart = restart;
        self
    }

    /// Set the reverse prop
    #[inline]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set the seek prop
    #[inline]
    pub fn with_seek(mut self, seek: SeekCommand) -> Self {
        self.seek = Some(seek);
        self
    }

    /// Set the lifecycle hooks subscribed on add
    #[inline]
    pub fn with_lifecycle(mut self, lifecycle: LifecycleHooks) -> Self {
        self.lifecycle = lifecycle;
        self
    }
}
