use bevy::prelude::*;
use bevy_timeline_sync::TimelineSyncPlugin;

#[test]
fn plugin_updates_without_timelines() {
    // it should tick an empty world without panicking
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(TimelineSyncPlugin);

    for _ in 0..5 {
        app.update();
    }
}
