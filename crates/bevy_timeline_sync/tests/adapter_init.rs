use bevy::prelude::*;
use bevy_timeline_sync::{TimelineAdapter, TimelineSyncPlugin};
use serde_json::{json, Map, Value};
use timeline_sync_core::testing::{RecordingEngine, TimelineCall};

#[test]
fn test_init_exposes_animate_and_timeline_over_one_handle() {
    let engine = RecordingEngine::new(1000.0);
    let log = engine.log();
    let adapter = TimelineAdapter::new(&engine, Map::new());

    let parts = adapter.init();
    assert_eq!(parts.animate.id(), parts.timeline.handle().id());

    // Imperative calls through `animate` hit the same timeline the
    // component drives.
    parts.animate.play();
    parts.timeline.handle().pause();
    assert_eq!(log.calls(), vec![TimelineCall::Play, TimelineCall::Pause]);
}

#[test]
fn test_animate_registers_values_under_either_name() {
    let engine = RecordingEngine::new(1000.0);
    let log = engine.log();
    let adapter = TimelineAdapter::new(&engine, Map::new());

    let parts = adapter.init();
    parts.animate.add(json!({ "targets": ".box", "translateX": 250 }));
    parts
        .animate
        .values(json!({ "targets": ".box", "translateX": 250 }));

    // Both names reach the same underlying operation.
    assert_eq!(
        log.calls(),
        vec![
            TimelineCall::Add(json!({ "targets": ".box", "translateX": 250 })),
            TimelineCall::Add(json!({ "targets": ".box", "translateX": 250 })),
        ]
    );
}

#[test]
fn test_construction_defaults_autoplay_to_false() {
    let engine = RecordingEngine::new(1000.0);
    let _adapter = TimelineAdapter::new(&engine, Map::new());

    let configs = engine.configs();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].get("autoplay"), Some(&Value::Bool(false)));
}

#[test]
fn test_construction_passes_explicit_autoplay_through() {
    let engine = RecordingEngine::new(1000.0);

    let mut attributes = Map::new();
    attributes.insert("autoplay".to_string(), Value::Bool(true));
    attributes.insert("duration".to_string(), json!(1000));
    let _adapter = TimelineAdapter::new(&engine, attributes);

    let configs = engine.configs();
    assert_eq!(configs[0].get("autoplay"), Some(&Value::Bool(true)));
    assert_eq!(configs[0].get("duration"), Some(&json!(1000)));
}

#[test]
fn test_derived_components_share_one_handle() {
    let engine = RecordingEngine::new(1000.0);
    let log = engine.log();
    let adapter = TimelineAdapter::new(&engine, Map::new());

    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(TimelineSyncPlugin);

    let first = app.world_mut().spawn(adapter.derive_component()).id();
    let second = app.world_mut().spawn(adapter.derive_component()).id();
    app.update();

    {
        let mut entity = app.world_mut().entity_mut(first);
        entity.get_mut::<bevy_timeline_sync::TimelineSync>().unwrap().play = true;
    }
    {
        let mut entity = app.world_mut().entity_mut(second);
        entity
            .get_mut::<bevy_timeline_sync::TimelineSync>()
            .unwrap()
            .pause = true;
    }
    app.update();

    // Distinct components, one underlying timeline.
    assert_eq!(log.calls(), vec![TimelineCall::Play, TimelineCall::Pause]);
}
