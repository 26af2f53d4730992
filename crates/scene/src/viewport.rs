//! Viewport state: the selected theme and the viewport size
//!
//! The UI writes [`ThemeSelected`]; the plugin folds selections and window
//! resizes into [`ViewportState`], the single source of truth the fixture
//! systems react to, and reports changes back to the UI.

use bathroom_ipc::SceneToUi;
use bathroom_theme::{ThemeId, ThemePalette};
use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::OutboundUiMessages;

/// Current theme and viewport size in logical pixels
///
/// The size is tracked and reported to the UI only; the render surface
/// follows the window on its own.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewportState {
    pub theme: ThemeId,
    pub width: f32,
    pub height: f32,
}

impl ViewportState {
    pub fn new(theme: ThemeId) -> Self {
        Self {
            theme,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn palette(&self) -> &'static ThemePalette {
        self.theme.palette()
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ThemeId::default())
    }
}

/// A theme picked in the UI, by name. Names outside the theme set select
/// the light theme.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelected(pub String);

impl From<ThemeId> for ThemeSelected {
    fn from(theme: ThemeId) -> Self {
        Self(theme.name().to_string())
    }
}

/// Plugin maintaining [`ViewportState`]
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportState>()
            .add_message::<ThemeSelected>()
            .add_systems(Startup, init_viewport)
            .add_systems(Update, (apply_theme_selection, track_viewport_size));
    }
}

/// Record the initial window size and announce the initial state
pub(crate) fn init_viewport(
    mut state: ResMut<ViewportState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if let Ok(window) = windows.single() {
        state.width = window.width();
        state.height = window.height();
    }
    outbound.send(SceneToUi::initialize(state.theme));
    info!(
        "Viewport initialized: theme {}, {}x{}",
        state.theme, state.width, state.height
    );
}

fn apply_theme_selection(
    mut selections: MessageReader<ThemeSelected>,
    mut state: ResMut<ViewportState>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    for ThemeSelected(name) in selections.read() {
        let theme = ThemeId::from_name_or_default(name);
        if state.theme == theme {
            continue;
        }
        state.theme = theme;
        outbound.send(SceneToUi::ThemeApplied { theme });
        info!("Theme changed to {}", theme);
    }
}

fn track_viewport_size(
    mut resized: MessageReader<WindowResized>,
    primary: Query<(), With<PrimaryWindow>>,
    mut state: ResMut<ViewportState>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    // Only the latest size matters
    let Some(event) = resized
        .read()
        .filter(|event| primary.contains(event.window))
        .last()
    else {
        return;
    };

    if state.width == event.width && state.height == event.height {
        return;
    }
    state.width = event.width;
    state.height = event.height;
    outbound.send(SceneToUi::ViewportResized {
        width: event.width,
        height: event.height,
    });
    debug!("Viewport resized to {}x{}", event.width, event.height);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_message::<WindowResized>()
            .init_resource::<OutboundUiMessages>()
            .add_plugins(ViewportPlugin);
        app.update();
        app.world_mut().resource_mut::<OutboundUiMessages>().drain();
        app
    }

    fn select(app: &mut App, name: &str) {
        app.world_mut().write_message(ThemeSelected(name.to_string()));
        app.update();
    }

    fn theme(app: &App) -> ThemeId {
        app.world().resource::<ViewportState>().theme
    }

    #[test]
    fn test_defaults_to_light() {
        let app = test_app();
        assert_eq!(theme(&app), ThemeId::Light);
    }

    #[test]
    fn test_initial_state_is_announced() {
        let mut app = App::new();
        app.add_message::<WindowResized>()
            .init_resource::<OutboundUiMessages>()
            .add_plugins(ViewportPlugin);
        app.update();

        let sent = app.world_mut().resource_mut::<OutboundUiMessages>().drain();
        assert_eq!(sent, vec![SceneToUi::initialize(ThemeId::Light)]);
    }

    #[test]
    fn test_selection_updates_state_and_reports() {
        let mut app = test_app();
        select(&mut app, "vintage");
        assert_eq!(theme(&app), ThemeId::Vintage);

        let sent = app.world_mut().resource_mut::<OutboundUiMessages>().drain();
        assert_eq!(
            sent,
            vec![SceneToUi::ThemeApplied {
                theme: ThemeId::Vintage
            }]
        );
    }

    #[test]
    fn test_unknown_selection_falls_back_to_light() {
        let mut app = test_app();
        select(&mut app, "dark");
        assert_eq!(theme(&app), ThemeId::Dark);
        select(&mut app, "unknown-theme");
        assert_eq!(theme(&app), ThemeId::Light);
    }

    #[test]
    fn test_reselecting_same_theme_is_quiet() {
        let mut app = test_app();
        select(&mut app, "light");
        assert!(app
            .world_mut()
            .resource_mut::<OutboundUiMessages>()
            .drain()
            .is_empty());
    }

    #[test]
    fn test_primary_window_resize_is_tracked() {
        let mut app = test_app();
        let window = app.world_mut().spawn(PrimaryWindow).id();
        let other = app.world_mut().spawn_empty().id();

        app.world_mut().write_message(WindowResized {
            window,
            width: 800.0,
            height: 600.0,
        });
        app.world_mut().write_message(WindowResized {
            window: other,
            width: 10.0,
            height: 10.0,
        });
        app.update();

        let state = app.world().resource::<ViewportState>();
        assert_eq!((state.width, state.height), (800.0, 600.0));
        assert_eq!(state.theme, ThemeId::Light);

        let sent = app.world_mut().resource_mut::<OutboundUiMessages>().drain();
        assert_eq!(
            sent,
            vec![SceneToUi::ViewportResized {
                width: 800.0,
                height: 600.0
            }]
        );
    }
}
