//! Headless demo: scripted flight through the default system.
//!
//! Stands in for the browser input/render layers — it feeds a fixed
//! command script into the clock, records draw commands into [`DrawList`]s,
//! and logs a readout snapshot once a second of simulated time.

use glam::Vec3;
use helios_engine::{
    Camera, Command, CommandQueue, DrawList, RenderTarget, Ship, SimulationClock, Snapshot,
    Viewport, WorldManifest, ZoomDir,
};

const MANIFEST: &str = include_str!("../sol.json");
const TICKS: u64 = 600;
const THRUST: f32 = 0.5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let manifest = WorldManifest::from_json(MANIFEST)?;
    let mut world = manifest.build();
    // Start parked on Mercury's initial position.
    *world.ship_mut() = Ship::new(Vec3::new(150.0, 0.0, 0.0));

    let mut camera = Camera::new();
    let mut clock = SimulationClock::new();
    let mut commands = CommandQueue::new();

    let viewport = Viewport::new(800.0, 600.0);
    let mut top = DrawList::new();
    let mut side = DrawList::new();

    log::info!(
        "world ready: {} planets around {}",
        world.planets().len(),
        world.star().name
    );

    for tick in 0..TICKS {
        // Scripted session: latch onto Mercury, ride for a while, release,
        // burn outward, then zoom out to watch the system.
        match tick {
            5 | 300 => commands.push(Command::ToggleOrbit),
            301..=380 => commands.push(Command::Thrust(Vec3::new(THRUST, 0.0, 0.0))),
            400..=460 => commands.push(Command::Zoom(ZoomDir::Out)),
            _ => {}
        }

        top.clear();
        side.clear();
        clock.tick(
            &mut world,
            &mut camera,
            &mut commands,
            RenderTarget { surface: &mut top, viewport },
            RenderTarget { surface: &mut side, viewport },
        );

        if tick % 60 == 0 {
            let snap = Snapshot::capture(&world, &camera, viewport, clock.ticks());
            log::info!(
                "t={:3} pos=({:7.1},{:7.1},{:6.1}) vel=({:5.2},{:5.2},{:5.2}) \
                 orbit={} zoom={:.2} visible={}",
                snap.tick,
                snap.ship_position.x,
                snap.ship_position.y,
                snap.ship_position.z,
                snap.ship_velocity.x,
                snap.ship_velocity.y,
                snap.ship_velocity.z,
                snap.orbiting,
                snap.camera_scale,
                snap.visible_planets,
            );
        }
    }

    let snap = Snapshot::capture(&world, &camera, viewport, clock.ticks());
    println!(
        "{} ticks simulated; ship at ({:.1}, {:.1}, {:.1}), {} draw commands in last top frame",
        snap.tick,
        snap.ship_position.x,
        snap.ship_position.y,
        snap.ship_position.z,
        top.commands().len(),
    );
    Ok(())
}
