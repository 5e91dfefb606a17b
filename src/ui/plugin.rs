// src/ui/plugin.rs
//
// UiPlugin coordinates the HUD and notice systems.

use bevy::prelude::*;

use crate::interaction::systems::capture_pointer;

use super::{
    hud::systems::{
        handle_hud_buttons, highlight_selection, show_evolution_panel, spawn_hud,
        update_counters, update_feed_label,
    },
    notice::{
        components::{NoticeSettings, NoticeTracker},
        systems::{spawn_notice, update_notices},
    },
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(NoticeSettings::default())
            .insert_resource(NoticeTracker::default())
            .add_systems(Startup, spawn_hud)
            .add_systems(Update, handle_hud_buttons.before(capture_pointer))
            .add_systems(
                Update,
                (
                    update_counters,
                    update_feed_label,
                    highlight_selection,
                    show_evolution_panel,
                    spawn_notice,
                    update_notices.after(spawn_notice),
                ),
            );
    }
}
