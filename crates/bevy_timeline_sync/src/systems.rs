//! Systems translating component prop changes into handle calls

use crate::components::TimelineSync;
use bevy::prelude::*;
use tracing::debug;

/// Subscribes lifecycle hooks for newly added [`TimelineSync`] components.
///
/// Subscription happens exactly once per component. Hooks stay registered
/// for the lifetime of the handle, even if the component is later removed;
/// the engine drops them together with the handle.
pub fn register_lifecycle_hooks_system(query: Query<&TimelineSync, Added<TimelineSync>>) {
    for sync in query.iter() {
        debug!(timeline = %sync.handle().id(), "subscribing lifecycle hooks");
        sync.handle().subscribe(sync.lifecycle.clone());
    }
}

/// Forwards prop values to the handle on every change after the add tick.
///
/// Checks run in a fixed order and independently; several truthy props in
/// the same update each produce their own call. The add tick itself is
/// skipped: a freshly added component only subscribes its hooks.
pub fn sync_timeline_props_system(query: Query<Ref<TimelineSync>, Changed<TimelineSync>>) {
    for sync in query.iter() {
        if sync.is_added() {
            continue;
        }

        let timeline = sync.handle();
        debug!(timeline = %timeline.id(), "syncing timeline props");

        if sync.play {
            timeline.play();
        }

        if sync.pause {
            timeline.pause();
        }

        if sync.restart {
            timeline.restart();
        }

        if sync.reverse {
            timeline.reverse();
        }

        if let Some(seek) = &sync.seek {
            seek.resolve(timeline, sync.descriptor());
        }
    }
}
