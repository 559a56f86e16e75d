use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

/// Window title.
const WINDOW_TITLE: &str = "Carbon Footprint Calculator";
/// Initial window size; fits both field groups, the report and the chart.
const WINDOW_RESOLUTION: (f32, f32) = (560.0, 900.0);
/// Backdrop behind the egui panel.
const CLEAR_COLOR: Color = Color::srgb(0.137, 0.145, 0.188);

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            resolution: WINDOW_RESOLUTION.into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Nothing animates: only redraw on input, with a slow idle wake-up.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ClearColor(CLEAR_COLOR))
    .add_plugins((emissions::EmissionsPlugin, ui::UiPlugin))
    .add_systems(Startup, spawn_camera);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("{} started", WINDOW_TITLE);
}
