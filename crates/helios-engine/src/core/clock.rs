//! The per-frame tick driver.
//!
//! One external render-loop callback drives one discrete tick. Every tick
//! is a fully synchronous sequence — commands, camera, bodies, ship, then
//! both view compositions — so all simulation state for tick *n* is settled
//! before any draw call for tick *n* executes.

use crate::input::queue::{Command, CommandQueue};
use crate::renderer::camera::Camera;
use crate::renderer::surface::{DrawSurface, ViewTag, Viewport};
use crate::systems::compositor::SceneCompositor;
use crate::world::World;

/// One view's output: a surface to draw on plus its pixel dimensions.
/// The host owns per-frame clearing of the surface.
pub struct RenderTarget<'a> {
    pub surface: &'a mut dyn DrawSurface,
    pub viewport: Viewport,
}

/// Drives the simulation one tick per external frame callback.
pub struct SimulationClock {
    pub compositor: SceneCompositor,
    tick_count: u64,
    paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            compositor: SceneCompositor::new(),
            tick_count: 0,
            paused: false,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop advancing. Accumulated state (trails, orbit, camera) is kept
    /// intact; resuming continues from the exact last state.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Run one tick: camera → bodies → commands + ship → compose top →
    /// compose side. No-op while paused. Drains the command queue only
    /// when a tick actually runs.
    pub fn tick(
        &mut self,
        world: &mut World,
        camera: &mut Camera,
        commands: &mut CommandQueue,
        top: RenderTarget<'_>,
        side: RenderTarget<'_>,
    ) {
        if self.paused {
            return;
        }

        camera.update(world.ship().position());
        world.update_bodies();

        for command in commands.drain() {
            match command {
                Command::Thrust(force) => world.ship_mut().apply_force(force),
                Command::ToggleOrbit => world.toggle_orbit(),
                Command::Zoom(dir) => camera.zoom(dir),
                Command::ToggleFollow => camera.toggle_follow(),
            }
        }
        world.update_ship();

        self.compositor
            .compose(world, camera, ViewTag::Top, top.surface, top.viewport);
        self.compositor
            .compose(world, camera, ViewTag::Side, side.surface, side.viewport);

        self.tick_count += 1;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
