//! Zeichnet Akteure.

use super::types::RenderContext;
use super::Canvas;
use crate::core::ActorSnapshot;
use glam::Vec2;

/// Zeichnet alle Akteure, deren Typ sichtbar geschaltet ist.
pub(crate) fn render_actors(
    ctx: &RenderContext,
    canvas: &mut dyn Canvas,
    actors: &[ActorSnapshot],
) {
    let visibility = &ctx.options.visibility;
    let size = Vec2::splat(ctx.options.actor_marker_size_px);

    for actor in actors {
        if !visibility.is_kind_visible(actor.kind) {
            continue;
        }

        let screen = ctx.to_screen(actor.position);
        let color = ctx.options.actor_color(actor.kind);
        canvas.stroke_rect(screen - size / 2.0, size, color);
        if visibility.show_actor_labels {
            canvas.text(screen, &actor.id, color);
        }
    }
}
