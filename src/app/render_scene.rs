//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Selektierte IDs ohne Entität in der Szene werden übersprungen.
pub fn build(state: &AppState) -> RenderScene {
    let selected = state
        .selection
        .set
        .iter()
        .filter_map(|id| {
            let entity = state.scene.get(id);
            if entity.is_none() {
                log::warn!("Selektierte Entität {} fehlt in der Szene", id);
            }
            entity.cloned()
        })
        .collect();

    RenderScene {
        selected,
        camera: state.view.camera.clone(),
        screen_size: state.view.screen_size,
        top_bar_px: state.options.top_bar_px,
        viewport: state.view.viewport_rect(&state.options),
        drag_rect: state.pointer.visible_drag_rect(),
        options: state.options.clone(),
    }
}
