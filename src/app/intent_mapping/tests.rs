use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::MapStore;
use glam::DVec2;
use std::sync::Arc;

use super::map_intent_to_commands;

fn state_with_surface() -> AppState {
    let mut state = AppState::new();
    state.surface_size = DVec2::new(400.0, 300.0);
    state
}

#[test]
fn pointer_click_maps_to_single_click_command() {
    let state = state_with_surface();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerClicked {
            pos: DVec2::new(17.0, 257.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::Click { pos } => assert_eq!(pos, DVec2::new(17.0, 257.0)),
        ref other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn maps_loaded_sets_maps_then_recomputes_bounds_and_resets_view() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapsLoaded {
            maps: Arc::new(MapStore::default()),
        },
    );

    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], AppCommand::SetMaps { .. }));
    assert!(matches!(commands[1], AppCommand::RecomputeBounds));
    assert!(matches!(commands[2], AppCommand::ResetView));
}
