use glam::Vec3;

use crate::renderer::camera::Camera;
use crate::renderer::surface::{ViewTag, Viewport};
use crate::systems::compositor::project;
use crate::world::World;

/// Immutable per-tick readout for an external display layer.
///
/// The readout layer pulls one of these after a tick and owns how (or
/// whether) it renders it; the core never writes to display state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub ship_position: Vec3,
    pub ship_velocity: Vec3,
    pub orbiting: bool,
    pub camera_scale: f32,
    pub camera_follow: bool,
    /// Planets whose projected top-view position lands inside the viewport
    /// (with the planet's radius as margin). Recomputed here, independent
    /// of the compositor's own culling pass.
    pub visible_planets: usize,
}

impl Snapshot {
    pub fn capture(world: &World, camera: &Camera, top_viewport: Viewport, tick: u64) -> Self {
        let visible_planets = world
            .planets()
            .iter()
            .filter(|planet| {
                let screen = project(planet.position(), ViewTag::Top, camera, top_viewport);
                top_viewport.contains_with_margin(screen, planet.radius)
            })
            .count();

        let ship = world.ship();
        Self {
            tick,
            ship_position: ship.position(),
            ship_velocity: ship.velocity(),
            orbiting: ship.is_orbiting(),
            camera_scale: camera.scale(),
            camera_follow: camera.follows_target(),
            visible_planets,
        }
    }
}
