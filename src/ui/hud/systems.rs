// src/ui/hud/systems.rs
//
// Systems spawning the HUD, mirroring state into it and turning clicks into
// interaction messages.

use bevy::{ecs::message::MessageReader, prelude::*};

use crate::{
    economy::ResourceLedger,
    food::FoodKind,
    interaction::{
        events::{FeedToggleClicked, FoodSelected, SkinSelected},
        InteractionSession,
    },
    slime::{events::SlimeEvolved, Slime, SlimeSkin},
};

use super::components::{
    EvolutionPanel, FeedToggleButton, FeedToggleLabel, FoodButton, FriendshipText, MoneyText,
    SkinButton,
};

const PANEL_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.85);
const BUTTON_COLOR: Color = Color::srgb(0.22, 0.22, 0.25);
const SELECTED_COLOR: Color = Color::srgb(0.35, 0.55, 0.85);
const TEXT_COLOR: Color = Color::WHITE;
const HIGHLIGHT_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const FONT_SIZE: f32 = 18.0;
const EVOLUTION_TEXT: &str = "Your slime evolved!";

/// Spawns the HUD column in the top-left corner and the hidden evolution panel.
pub fn spawn_hud(mut commands: Commands, session: Res<InteractionSession>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(6.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
        ))
        .with_children(|hud| {
            hud.spawn((
                Text::new("Friendship: 0"),
                text_font(),
                TextColor(TEXT_COLOR),
                FriendshipText,
            ));
            hud.spawn((
                Text::new("Money: 0"),
                text_font(),
                TextColor(TEXT_COLOR),
                MoneyText,
            ));

            hud.spawn((button_node(), BackgroundColor(BUTTON_COLOR), Button, FeedToggleButton))
                .with_children(|button| {
                    button.spawn((
                        Text::new(session.feed_button_label()),
                        text_font(),
                        TextColor(TEXT_COLOR),
                        FeedToggleLabel,
                    ));
                });

            hud.spawn(row_node()).with_children(|row| {
                for food in FoodKind::ALL {
                    row.spawn((
                        button_node(),
                        BackgroundColor(BUTTON_COLOR),
                        Button,
                        FoodButton(food),
                    ))
                    .with_children(|button| {
                        button.spawn((Text::new(food.label()), text_font(), TextColor(TEXT_COLOR)));
                    });
                }
            });

            hud.spawn(row_node()).with_children(|row| {
                for skin in SlimeSkin::ALL {
                    row.spawn((
                        button_node(),
                        BackgroundColor(BUTTON_COLOR),
                        Button,
                        SkinButton(skin),
                    ))
                    .with_children(|button| {
                        button.spawn((Text::new(skin.label()), text_font(), TextColor(TEXT_COLOR)));
                    });
                }
            });
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                padding: UiRect::all(Val::Px(12.0)),
                display: Display::None,
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
            EvolutionPanel,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(EVOLUTION_TEXT),
                text_font(),
                TextColor(HIGHLIGHT_COLOR),
            ));
        });
}

fn text_font() -> TextFont {
    TextFont {
        font_size: FONT_SIZE,
        ..default()
    }
}

fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn row_node() -> Node {
    Node {
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::Wrap,
        column_gap: Val::Px(4.0),
        row_gap: Val::Px(4.0),
        max_width: Val::Px(320.0),
        ..default()
    }
}

/// Writes friendship and money (floored) into their text nodes.
pub fn update_counters(
    ledger: Res<ResourceLedger>,
    mut friendship: Query<&mut Text, (With<FriendshipText>, Without<MoneyText>)>,
    mut money: Query<&mut Text, (With<MoneyText>, Without<FriendshipText>)>,
) {
    if !ledger.is_changed() {
        return;
    }
    for mut text in friendship.iter_mut() {
        text.0 = format!("Friendship: {}", ledger.friendship());
    }
    for mut text in money.iter_mut() {
        text.0 = format!("Money: {}", ledger.money_display());
    }
}

pub fn update_feed_label(
    session: Res<InteractionSession>,
    mut labels: Query<&mut Text, With<FeedToggleLabel>>,
) {
    if !session.is_changed() {
        return;
    }
    for mut text in labels.iter_mut() {
        if text.0 != session.feed_button_label() {
            text.0 = session.feed_button_label().to_string();
        }
    }
}

/// Turns HUD button presses into interaction messages.
pub fn handle_hud_buttons(
    buttons: Query<
        (
            &Interaction,
            Option<&FeedToggleButton>,
            Option<&FoodButton>,
            Option<&SkinButton>,
        ),
        Changed<Interaction>,
    >,
    mut toggles: MessageWriter<FeedToggleClicked>,
    mut foods: MessageWriter<FoodSelected>,
    mut skins: MessageWriter<SkinSelected>,
) {
    for (interaction, toggle, food, skin) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if toggle.is_some() {
            toggles.write(FeedToggleClicked);
        }
        if let Some(FoodButton(food)) = food {
            foods.write(FoodSelected { food: *food });
        }
        if let Some(SkinButton(skin)) = skin {
            skins.write(SkinSelected { skin: *skin });
        }
    }
}

/// Highlights the selected food and the active skin.
pub fn highlight_selection(
    session: Res<InteractionSession>,
    slimes: Query<&Slime>,
    mut food_buttons: Query<(&FoodButton, &mut BackgroundColor), Without<SkinButton>>,
    mut skin_buttons: Query<(&SkinButton, &mut BackgroundColor), Without<FoodButton>>,
) {
    let selected_food = session.selected_food();
    for (FoodButton(food), mut background) in food_buttons.iter_mut() {
        let color = if *food == selected_food {
            SELECTED_COLOR
        } else {
            BUTTON_COLOR
        };
        background.set_if_neq(BackgroundColor(color));
    }

    let Ok(slime) = slimes.single() else {
        return;
    };
    for (SkinButton(skin), mut background) in skin_buttons.iter_mut() {
        let color = if *skin == slime.skin() {
            SELECTED_COLOR
        } else {
            BUTTON_COLOR
        };
        background.set_if_neq(BackgroundColor(color));
    }
}

pub fn show_evolution_panel(
    mut evolved: MessageReader<SlimeEvolved>,
    mut panels: Query<&mut Node, With<EvolutionPanel>>,
) {
    if evolved.read().count() == 0 {
        return;
    }
    for mut node in panels.iter_mut() {
        if node.display == Display::None {
            info!("Showing evolution announcement");
            node.display = Display::Flex;
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;
    use crate::core::config::PetConfig;

    fn text_of<C: Component>(app: &mut App) -> String {
        let world = app.world_mut();
        world
            .query_filtered::<&Text, With<C>>()
            .single(world)
            .expect("one text node")
            .0
            .clone()
    }

    fn hud_app() -> App {
        let config = PetConfig::default();
        let mut app = App::new();
        app.insert_resource(ResourceLedger::new(&config.ledger))
            .insert_resource(InteractionSession::new(FoodKind::Apple))
            .add_message::<SlimeEvolved>()
            .add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (update_counters, update_feed_label, show_evolution_panel),
            );
        app
    }

    #[test]
    fn counters_follow_the_ledger() {
        let mut app = hud_app();
        app.update();
        assert_eq!(text_of::<FriendshipText>(&mut app), "Friendship: 0");
        assert_eq!(text_of::<MoneyText>(&mut app), "Money: 100");

        {
            let mut ledger = app.world_mut().resource_mut::<ResourceLedger>();
            ledger.credit_friendship(7);
            ledger.try_spend(10.0).expect("affordable");
            ledger.tick_money_regen(0.5);
        }
        app.update();

        assert_eq!(text_of::<FriendshipText>(&mut app), "Friendship: 7");
        assert_eq!(text_of::<MoneyText>(&mut app), "Money: 91");
    }

    #[test]
    fn feed_label_alternates() {
        let mut app = hud_app();
        app.update();
        assert_eq!(text_of::<FeedToggleLabel>(&mut app), "Feed");

        app.world_mut()
            .resource_mut::<InteractionSession>()
            .toggle_feeding();
        app.update();
        assert_eq!(text_of::<FeedToggleLabel>(&mut app), "Stop");
    }

    #[test]
    fn evolution_panel_appears_on_announcement() {
        let mut app = hud_app();
        app.update();

        let world = app.world_mut();
        let display = world
            .query_filtered::<&Node, With<EvolutionPanel>>()
            .single(world)
            .expect("panel")
            .display;
        assert_eq!(display, Display::None);

        app.world_mut().write_message(SlimeEvolved);
        app.update();

        let world = app.world_mut();
        let display = world
            .query_filtered::<&Node, With<EvolutionPanel>>()
            .single(world)
            .expect("panel")
            .display;
        assert_eq!(display, Display::Flex);
    }

    #[test]
    fn pressed_buttons_emit_messages() {
        let mut app = App::new();
        app.add_message::<FeedToggleClicked>()
            .add_message::<FoodSelected>()
            .add_message::<SkinSelected>()
            .add_systems(Update, handle_hud_buttons);

        app.world_mut()
            .spawn((Interaction::Pressed, FoodButton(FoodKind::Cake)));
        app.world_mut()
            .spawn((Interaction::Hovered, SkinButton(SlimeSkin::Wood)));
        app.world_mut()
            .spawn((Interaction::Pressed, FeedToggleButton));
        app.update();

        let foods = app.world().resource::<Messages<FoodSelected>>();
        let selected: Vec<FoodKind> = foods
            .get_cursor()
            .read(foods)
            .map(|event| event.food)
            .collect();
        assert_eq!(selected, vec![FoodKind::Cake]);

        let skins = app.world().resource::<Messages<SkinSelected>>();
        assert_eq!(skins.get_cursor().read(skins).count(), 0);

        let toggles = app.world().resource::<Messages<FeedToggleClicked>>();
        assert_eq!(toggles.get_cursor().read(toggles).count(), 1);
    }
}
