//! World construction from configuration data.
//!
//! The set of bodies is a fixed manifest — names, radii, colors, orbital
//! parameters — loaded from JSON at startup. Manifest order becomes world
//! iteration order.

use serde::{Deserialize, Serialize};

use crate::components::body::Planet;
use crate::components::star::Star;
use crate::renderer::color::Color;
use crate::world::World;

/// Complete description of a world's bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldManifest {
    pub star: StarSpec,
    #[serde(default)]
    pub bodies: Vec<BodySpec>,
}

/// The central star's parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarSpec {
    pub name: String,
    #[serde(default = "default_star_radius")]
    pub radius: f32,
    #[serde(default = "default_star_color")]
    pub color: Color,
    #[serde(default = "default_core_color")]
    pub core_color: Color,
    #[serde(default = "default_pulse_speed")]
    pub pulse_speed: f32,
    #[serde(default = "default_pulse_intensity")]
    pub pulse_intensity: f32,
    #[serde(default = "default_light_radius")]
    pub light_radius: f32,
}

/// One orbiting body's parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    pub radius: f32,
    pub color: Color,
    pub orbital_radius: f32,
    pub orbital_speed: f32,
    /// Initial orbital phase in radians.
    #[serde(default)]
    pub orbital_angle: f32,
    /// Orbit-plane tilt in radians.
    #[serde(default)]
    pub inclination: f32,
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    #[serde(default)]
    pub rings: Option<RingSpec>,
    #[serde(default = "default_true")]
    pub trail: bool,
}

/// Ring decoration for a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingSpec {
    pub color: Color,
    /// Outer ring radius; defaults to twice the body radius.
    #[serde(default)]
    pub radius: Option<f32>,
}

fn default_star_radius() -> f32 {
    40.0
}

fn default_star_color() -> Color {
    Color::YELLOW
}

fn default_core_color() -> Color {
    Color::WHITE
}

fn default_pulse_speed() -> f32 {
    0.02
}

fn default_pulse_intensity() -> f32 {
    0.3
}

fn default_light_radius() -> f32 {
    200.0
}

fn default_rotation_speed() -> f32 {
    0.05
}

fn default_true() -> bool {
    true
}

impl WorldManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a runnable world: the star at the origin, every body anchored
    /// to it, in manifest order.
    pub fn build(&self) -> World {
        let star = Star::new(
            self.star.name.clone(),
            self.star.radius,
            self.star.color,
            self.star.core_color,
        )
        .with_pulse(self.star.pulse_speed, self.star.pulse_intensity)
        .with_light_radius(self.star.light_radius);

        let anchor = star.position;
        let mut world = World::new(star);
        for spec in &self.bodies {
            let mut planet = Planet::new(spec.name.clone(), spec.radius, spec.color)
                .with_orbit(anchor, spec.orbital_radius, spec.orbital_speed, spec.orbital_angle)
                .with_inclination(spec.inclination)
                .with_rotation_speed(spec.rotation_speed)
                .with_trail(spec.trail);
            if let Some(rings) = &spec.rings {
                planet = planet.with_rings(rings.color, rings.radius.unwrap_or(spec.radius * 2.0));
            }
            world.add_planet(planet);
        }
        world
    }
}
