// src/ui/notice/systems.rs
//
// Systems spawning, fading and despawning notices.

use bevy::{ecs::message::MessageReader, prelude::*};

use crate::{interaction::events::UserNotice, loading::events::ModelLoadFailed};

use super::components::{NoticePanel, NoticeSettings, NoticeTracker};

const BACKGROUND_COLOR: Color = Color::srgba(0.45, 0.08, 0.08, 0.9);
const TEXT_COLOR: Color = Color::WHITE;

/// Shows the newest notice, replacing any panel already on screen.
/// Asset failures are surfaced here too.
pub fn spawn_notice(
    mut commands: Commands,
    mut tracker: ResMut<NoticeTracker>,
    settings: Res<NoticeSettings>,
    mut notices: MessageReader<UserNotice>,
    mut failures: MessageReader<ModelLoadFailed>,
) {
    let texts: Vec<String> = notices
        .read()
        .map(|notice| notice.text.clone())
        .chain(
            failures
                .read()
                .map(|failure| format!("Could not load {} ({})", failure.name, failure.reason)),
        )
        .collect();
    let Some(text) = texts.last() else {
        return;
    };

    if let Some(old_panel) = tracker.active_panel.take() {
        commands.entity(old_panel).despawn();
    }

    let panel = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(settings.top_offset),
                left: Val::Percent(50.0),
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            NoticePanel::new(settings.lifetime_seconds, settings.fade_seconds),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(text.as_str()),
                TextFont {
                    font_size: settings.font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        })
        .id();

    debug!("Showing notice: {}", text);
    tracker.active_panel = Some(panel);
}

/// Ticks notices, fades them out and despawns them when finished.
pub fn update_notices(
    mut commands: Commands,
    time: Res<Time>,
    mut tracker: ResMut<NoticeTracker>,
    mut panels: Query<(Entity, &mut NoticePanel, &mut BackgroundColor, &Children)>,
    mut texts: Query<&mut TextColor>,
) {
    for (entity, mut panel, mut background, children) in panels.iter_mut() {
        panel.tick(time.delta());

        if panel.is_finished() {
            if tracker.active_panel == Some(entity) {
                tracker.active_panel = None;
            }
            commands.entity(entity).despawn();
            continue;
        }

        let alpha = panel.fade_alpha();
        background.0 = BACKGROUND_COLOR.with_alpha(alpha * 0.9);
        for child in children.iter() {
            if let Ok(mut color) = texts.get_mut(child) {
                color.0 = TEXT_COLOR.with_alpha(alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<NoticeTracker>()
            .init_resource::<NoticeSettings>()
            .add_message::<UserNotice>()
            .add_message::<ModelLoadFailed>()
            .add_systems(Update, spawn_notice);
        app
    }

    fn notice_texts(app: &mut App) -> Vec<String> {
        let world = app.world_mut();
        world
            .query::<&Text>()
            .iter(world)
            .map(|text| text.0.clone())
            .collect()
    }

    #[test]
    fn newer_notice_replaces_the_old_one() {
        let mut app = app();
        app.world_mut()
            .write_message(UserNotice::new("Not enough money!"));
        app.update();

        let first = app
            .world()
            .resource::<NoticeTracker>()
            .active_panel
            .expect("panel spawned");
        assert_eq!(notice_texts(&mut app), vec!["Not enough money!".to_string()]);

        app.world_mut().write_message(UserNotice::new("Again"));
        app.update();

        let second = app
            .world()
            .resource::<NoticeTracker>()
            .active_panel
            .expect("panel replaced");
        assert_ne!(first, second);
        assert!(app.world().get_entity(first).is_err());
        assert_eq!(notice_texts(&mut app), vec!["Again".to_string()]);
    }

    #[test]
    fn load_failures_are_surfaced() {
        let mut app = app();
        let entity = app.world_mut().spawn_empty().id();
        app.world_mut().write_message(ModelLoadFailed {
            entity,
            name: "cake".to_string(),
            reason: "missing file".to_string(),
        });
        app.update();

        assert_eq!(notice_texts(&mut app), vec!["Could not load cake (missing file)".to_string()]);
    }
}
