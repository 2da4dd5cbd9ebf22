//! Dual-view depth-sorted scene composition.
//!
//! Each tick produces two independent 2-D projections of the same world:
//! the top view shows (X, Y) with Z as the depth axis, the side view shows
//! (X, Z) with Y as the depth axis. Entities are drawn back-to-front so
//! nearer objects occlude farther ones; the compositor only decides order
//! and participation — pixels are each entity's own draw contract.

use glam::{Vec2, Vec3};

use crate::renderer::camera::Camera;
use crate::renderer::color::Color;
use crate::renderer::surface::{DrawSurface, ViewTag, Viewport};
use crate::world::World;

/// Camera scale below which trails are skipped entirely.
pub const TRAIL_SCALE_CUTOFF: f32 = 0.3;

/// Screen-space spacing of the background grid, in pixels.
const GRID_SPACING: f32 = 50.0;
const GRID_COLOR: Color = Color::rgb(0.1, 0.1, 0.1);

/// Project a world position into one view's screen space.
/// Screen = viewport center + (plane coords − camera plane coords) × scale.
pub fn project(world: Vec3, view: ViewTag, camera: &Camera, viewport: Viewport) -> Vec2 {
    viewport.center() + (view.plane(world) - view.plane(camera.position)) * camera.scale()
}

/// Depth of a world position in one view: its depth-axis coordinate
/// relative to the camera. Lower values are farther and draw first.
pub fn depth(world: Vec3, view: ViewTag, camera: &Camera) -> f32 {
    view.depth(world) - view.depth(camera.position)
}

/// The draw contract every composited entity fulfills.
pub trait Drawable {
    /// World-space position used for projection and depth ordering.
    fn position(&self) -> Vec3;

    /// World-space half-extent of the entity's screen footprint, used for
    /// visibility culling. Glow-bearing entities report an enlarged radius.
    fn cull_radius(&self) -> f32;

    /// Draw the entity onto one view. Receives the surface, the view tag,
    /// and the camera; takes `&mut self` so entities may touch their own
    /// render caches.
    fn draw(
        &mut self,
        surface: &mut dyn DrawSurface,
        view: ViewTag,
        camera: &Camera,
        viewport: Viewport,
    );
}

/// Per-view project → sort → cull → draw pass.
pub struct SceneCompositor {
    /// Draw the camera-offset background grid before entities.
    pub grid_enabled: bool,
}

impl SceneCompositor {
    pub fn new() -> Self {
        Self { grid_enabled: true }
    }

    /// Compose one view: background grid, then every entity back-to-front.
    pub fn compose(
        &self,
        world: &mut World,
        camera: &Camera,
        view: ViewTag,
        surface: &mut dyn DrawSurface,
        viewport: Viewport,
    ) {
        if self.grid_enabled {
            self.draw_grid(surface, view, camera, viewport);
        }

        let (star, planets, ship) = world.drawables_mut();

        let mut entries: Vec<(f32, &mut dyn Drawable)> = Vec::with_capacity(planets.len() + 2);
        entries.push((depth(star.position, view, camera), star as &mut dyn Drawable));
        for planet in planets {
            entries.push((
                depth(planet.position(), view, camera),
                planet as &mut dyn Drawable,
            ));
        }
        entries.push((depth(ship.position(), view, camera), ship as &mut dyn Drawable));

        // Stable: ties keep collection order (star, planets, ship).
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, drawable) in entries {
            let screen = project(drawable.position(), view, camera, viewport);
            let half = drawable.cull_radius() * camera.scale();
            if viewport.intersects_box(screen, half) {
                drawable.draw(surface, view, camera, viewport);
            }
        }
    }

    /// Background grid, offset by the camera's in-plane position so it
    /// scrolls with the world.
    fn draw_grid(
        &self,
        surface: &mut dyn DrawSurface,
        view: ViewTag,
        camera: &Camera,
        viewport: Viewport,
    ) {
        let cam_plane = view.plane(camera.position);
        let offset_x = (cam_plane.x % GRID_SPACING) * camera.scale();
        let offset_y = (cam_plane.y % GRID_SPACING) * camera.scale();

        let mut x = -GRID_SPACING;
        while x < viewport.width + GRID_SPACING {
            let draw_x = x - offset_x;
            surface.stroke_polyline(
                &[Vec2::new(draw_x, 0.0), Vec2::new(draw_x, viewport.height)],
                1.0,
                GRID_COLOR,
            );
            x += GRID_SPACING;
        }

        let mut y = -GRID_SPACING;
        while y < viewport.height + GRID_SPACING {
            let draw_y = y - offset_y;
            surface.stroke_polyline(
                &[Vec2::new(0.0, draw_y), Vec2::new(viewport.width, draw_y)],
                1.0,
                GRID_COLOR,
            );
            y += GRID_SPACING;
        }
    }
}

impl Default for SceneCompositor {
    fn default() -> Self {
        Self::new()
    }
}
