//! Test support: recording engine and timeline fixtures
//!
//! These stand in for the external animation engine in tests, recording
//! every imperative call so assertions can be made after the fact.

use crate::{
    AnimationEngine, LifecycleHooks, LifecycleStage, TimelineConfig, TimelineHandle,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One imperative call received by a [`RecordingTimeline`].
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineCall {
    Play,
    Pause,
    Restart,
    Reverse,
    Seek(f64),
    Add(Value),
}

/// Shared, clonable log of timeline calls.
///
/// Clone it before handing the timeline to an adapter; all clones observe
/// the same call sequence.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<TimelineCall>>>,
}

impl CallLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call.
    pub fn record(&self, call: TimelineCall) {
        self.lock().push(call);
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<TimelineCall> {
        self.lock().clone()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all recorded calls.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TimelineCall>> {
        self.calls.lock().unwrap_or_else(|err| err.into_inner())
    }
}

/// Shared, clonable record of lifecycle subscriptions.
#[derive(Clone, Default)]
pub struct SubscriptionLog {
    hooks: Arc<Mutex<Vec<LifecycleHooks>>>,
}

impl SubscriptionLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscription.
    pub fn record(&self, hooks: LifecycleHooks) {
        self.lock().push(hooks);
    }

    /// Number of subscriptions received.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no subscription was received.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Invoke a stage on every subscription, the way the engine would.
    pub fn fire(&self, stage: LifecycleStage) {
        let hooks: Vec<LifecycleHooks> = self.lock().clone();
        for subscription in hooks {
            subscription.invoke(stage);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LifecycleHooks>> {
        self.hooks.lock().unwrap_or_else(|err| err.into_inner())
    }
}

/// In-memory timeline that records every imperative call.
pub struct RecordingTimeline {
    duration: f64,
    log: CallLog,
    subscriptions: SubscriptionLog,
    targets: Vec<Value>,
}

impl RecordingTimeline {
    /// Timeline with the given reported duration and fresh logs.
    pub fn new(duration: f64) -> Self {
        Self::with_logs(duration, CallLog::new(), SubscriptionLog::new())
    }

    /// Timeline writing into existing logs.
    pub fn with_logs(duration: f64, log: CallLog, subscriptions: SubscriptionLog) -> Self {
        Self {
            duration,
            log,
            subscriptions,
            targets: Vec::new(),
        }
    }

    /// Handle onto the call log; clones observe the same sequence.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    /// Handle onto the subscription log.
    pub fn subscriptions(&self) -> SubscriptionLog {
        self.subscriptions.clone()
    }
}

impl TimelineHandle for RecordingTimeline {
    fn play(&mut self) {
        self.log.record(TimelineCall::Play);
    }

    fn pause(&mut self) {
        self.log.record(TimelineCall::Pause);
    }

    fn restart(&mut self) {
        self.log.record(TimelineCall::Restart);
    }

    fn reverse(&mut self) {
        self.log.record(TimelineCall::Reverse);
    }

    fn seek(&mut self, position: f64) {
        self.log.record(TimelineCall::Seek(position));
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn add(&mut self, targets: Value) {
        self.targets.push(targets.clone());
        self.log.record(TimelineCall::Add(targets));
    }

    fn targets(&self) -> Vec<Value> {
        self.targets.clone()
    }

    fn subscribe(&mut self, hooks: LifecycleHooks) {
        self.subscriptions.record(hooks);
    }
}

/// Engine factory producing [`RecordingTimeline`]s and capturing the
/// configuration each one was created with.
pub struct RecordingEngine {
    duration: f64,
    log: CallLog,
    subscriptions: SubscriptionLog,
    configs: Arc<Mutex<Vec<TimelineConfig>>>,
}

impl RecordingEngine {
    /// Engine whose timelines report the given duration.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            log: CallLog::new(),
            subscriptions: SubscriptionLog::new(),
            configs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the call log shared by every created timeline.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    /// Handle onto the subscription log shared by every created timeline.
    pub fn subscriptions(&self) -> SubscriptionLog {
        self.subscriptions.clone()
    }

    /// Configurations received by the factory, in creation order.
    pub fn configs(&self) -> Vec<TimelineConfig> {
        self.configs
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }
}

impl AnimationEngine for RecordingEngine {
    fn create_timeline(&self, config: TimelineConfig) -> Box<dyn TimelineHandle> {
        self.configs
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .push(config);
        Box::new(RecordingTimeline::with_logs(
            self.duration,
            self.log.clone(),
            self.subscriptions.clone(),
        ))
    }
}
