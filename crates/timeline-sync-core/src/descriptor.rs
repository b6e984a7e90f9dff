//! Read-only timeline snapshots for seek customization

use crate::handle::TimelineHandle;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only snapshot of a timeline handle.
///
/// Captured when a component is derived from the adapter and passed into
/// custom seek callbacks. Immutable once created; a fresh view of the
/// timeline is obtained by deriving a new snapshot, never by mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineDescriptor {
    /// Total duration reported by the engine, in its time unit.
    pub duration: f64,
    /// Target values registered on the timeline at snapshot time.
    pub targets: Vec<Value>,
}

impl TimelineDescriptor {
    /// Snapshot the observable state of a handle.
    pub fn from_handle(handle: &dyn TimelineHandle) -> Self {
        Self {
            duration: handle.duration(),
            targets: handle.targets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTimeline;
    use serde_json::json;

    #[test]
    fn test_snapshot_captures_duration_and_targets() {
        let mut timeline = RecordingTimeline::new(1200.0);
        timeline.add(json!({ "targets": ".box", "translateX": 250 }));

        let descriptor = TimelineDescriptor::from_handle(&timeline);
        assert_eq!(descriptor.duration, 1200.0);
        assert_eq!(
            descriptor.targets,
            vec![json!({ "targets": ".box", "translateX": 250 })]
        );
    }

    #[test]
    fn test_snapshot_does_not_track_later_changes() {
        let mut timeline = RecordingTimeline::new(500.0);
        let descriptor = TimelineDescriptor::from_handle(&timeline);

        timeline.add(json!({ "targets": ".circle" }));
        assert!(descriptor.targets.is_empty());
    }
}
