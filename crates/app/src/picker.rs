//! In-window theme picker
//!
//! A small bevy_ui dropdown pinned to the top-left corner: a toggle button
//! showing the current theme and a menu with one entry per theme. Camera
//! input is locked while the pointer is over the picker so clicks on it do
//! not orbit the scene.

use bathroom_scene::{CameraInputLock, ThemeSelected, ViewportState};
use bathroom_theme::ThemeId;
use bevy::prelude::*;

const BUTTON_IDLE: Color = Color::srgba(0.1, 0.1, 0.1, 0.85);
const BUTTON_HOVER: Color = Color::srgba(0.25, 0.25, 0.25, 0.9);
const BUTTON_CURRENT: Color = Color::srgba(0.2, 0.35, 0.6, 0.9);
const FONT_SIZE: f32 = 14.0;

/// The button opening and closing the menu
#[derive(Component)]
pub struct PickerToggle;

/// Text on the toggle button
#[derive(Component)]
pub struct PickerLabel;

/// Menu container, hidden while closed
#[derive(Component)]
pub struct PickerMenu;

/// One menu entry
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOption(pub ThemeId);

pub struct ThemePickerPlugin;

impl Plugin for ThemePickerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_picker).add_systems(
            Update,
            (
                toggle_menu,
                choose_option,
                lock_camera_while_hovered,
                style_options,
                sync_label,
            ),
        );
    }
}

/// Toggle caption for a theme
pub fn toggle_caption(theme: ThemeId) -> String {
    format!("Theme: {} \u{25BE}", theme.label())
}

fn spawn_picker(mut commands: Commands, state: Option<Res<ViewportState>>) {
    let current = state.map(|s| s.theme).unwrap_or_default();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                ..default()
            },
            ZIndex(1),
            Name::new("Theme Picker"),
        ))
        .with_children(|root| {
            root.spawn((
                Button,
                PickerToggle,
                Node {
                    padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                    ..default()
                },
                BackgroundColor(BUTTON_IDLE),
            ))
            .with_child((
                Text::new(toggle_caption(current)),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                PickerLabel,
            ));

            root.spawn((
                PickerMenu,
                Node {
                    display: Display::None,
                    flex_direction: FlexDirection::Column,
                    ..default()
                },
            ))
            .with_children(|menu| {
                for theme in ThemeId::ALL {
                    menu.spawn((
                        Button,
                        PickerOption(theme),
                        Node {
                            padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_IDLE),
                    ))
                    .with_child((
                        Text::new(theme.label()),
                        TextFont {
                            font_size: FONT_SIZE,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                }
            });
        });
}

fn toggle_menu(
    toggles: Query<&Interaction, (Changed<Interaction>, With<PickerToggle>)>,
    mut menus: Query<&mut Node, With<PickerMenu>>,
) {
    if !toggles.iter().any(|i| *i == Interaction::Pressed) {
        return;
    }
    for mut node in menus.iter_mut() {
        node.display = match node.display {
            Display::None => Display::Flex,
            _ => Display::None,
        };
    }
}

fn choose_option(
    options: Query<(&Interaction, &PickerOption), Changed<Interaction>>,
    mut menus: Query<&mut Node, With<PickerMenu>>,
    mut selections: MessageWriter<ThemeSelected>,
) {
    let Some(chosen) = options
        .iter()
        .find(|(interaction, _)| **interaction == Interaction::Pressed)
        .map(|(_, option)| option.0)
    else {
        return;
    };

    selections.write(ThemeSelected::from(chosen));
    for mut node in menus.iter_mut() {
        node.display = Display::None;
    }
    debug!("Picker selected {}", chosen);
}

fn lock_camera_while_hovered(
    buttons: Query<&Interaction, Or<(With<PickerToggle>, With<PickerOption>)>>,
    mut lock: ResMut<CameraInputLock>,
) {
    let hovered = buttons.iter().any(|i| *i != Interaction::None);
    if lock.locked != hovered {
        lock.locked = hovered;
    }
}

fn style_options(
    mut buttons: Query<
        (&Interaction, Option<&PickerOption>, &mut BackgroundColor),
        Or<(With<PickerToggle>, With<PickerOption>)>,
    >,
    state: Option<Res<ViewportState>>,
) {
    let current = state.map(|s| s.theme);
    for (interaction, option, mut background) in buttons.iter_mut() {
        let color = match interaction {
            Interaction::Pressed | Interaction::Hovered => BUTTON_HOVER,
            Interaction::None if option.is_some_and(|o| Some(o.0) == current) => BUTTON_CURRENT,
            Interaction::None => BUTTON_IDLE,
        };
        if background.0 != color {
            background.0 = color;
        }
    }
}

fn sync_label(state: Res<ViewportState>, mut labels: Query<&mut Text, With<PickerLabel>>) {
    if !state.is_changed() {
        return;
    }
    for mut text in labels.iter_mut() {
        text.0 = toggle_caption(state.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_message::<ThemeSelected>()
            .init_resource::<CameraInputLock>()
            .insert_resource(ViewportState::new(ThemeId::Light))
            .add_plugins(ThemePickerPlugin);
        app.update();
        app
    }

    fn find_option(app: &mut App, theme: ThemeId) -> Entity {
        let world = app.world_mut();
        let mut query = world.query::<(Entity, &PickerOption)>();
        query
            .iter(world)
            .find(|(_, option)| option.0 == theme)
            .map(|(entity, _)| entity)
            .unwrap()
    }

    fn menu_display(app: &mut App) -> Display {
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Node, With<PickerMenu>>();
        query.single(world).unwrap().display
    }

    #[test]
    fn test_picker_lists_every_theme() {
        let mut app = test_app();
        let world = app.world_mut();
        let mut query = world.query::<&PickerOption>();
        let mut options: Vec<ThemeId> = query.iter(world).map(|o| o.0).collect();
        options.sort_by_key(|theme| ThemeId::ALL.iter().position(|t| t == theme));
        assert_eq!(options, ThemeId::ALL.to_vec());
    }

    #[test]
    fn test_menu_starts_closed_and_toggles() {
        let mut app = test_app();
        assert_eq!(menu_display(&mut app), Display::None);

        let world = app.world_mut();
        let toggle = world
            .query_filtered::<Entity, With<PickerToggle>>()
            .single(world)
            .unwrap();
        world.entity_mut(toggle).insert(Interaction::Pressed);
        app.update();
        assert_eq!(menu_display(&mut app), Display::Flex);
    }

    #[test]
    fn test_choosing_option_writes_selection() {
        let mut app = test_app();
        let beach = find_option(&mut app, ThemeId::Beach);
        app.world_mut().entity_mut(beach).insert(Interaction::Pressed);
        app.update();

        let messages = app.world().resource::<Messages<ThemeSelected>>();
        let mut cursor = messages.get_cursor();
        let written: Vec<_> = cursor.read(messages).cloned().collect();
        assert_eq!(written, vec![ThemeSelected("beach".to_string())]);
        assert_eq!(menu_display(&mut app), Display::None);
    }

    #[test]
    fn test_hover_locks_camera() {
        let mut app = test_app();
        let forest = find_option(&mut app, ThemeId::Forest);
        app.world_mut().entity_mut(forest).insert(Interaction::Hovered);
        app.update();
        assert!(app.world().resource::<CameraInputLock>().locked);

        app.world_mut().entity_mut(forest).insert(Interaction::None);
        app.update();
        assert!(!app.world().resource::<CameraInputLock>().locked);
    }

    #[test]
    fn test_label_follows_state() {
        let mut app = test_app();
        app.world_mut().resource_mut::<ViewportState>().theme = ThemeId::Sunset;
        app.update();

        let world = app.world_mut();
        let text = world
            .query_filtered::<&Text, With<PickerLabel>>()
            .single(world)
            .unwrap();
        assert_eq!(text.0, toggle_caption(ThemeId::Sunset));
    }
}
