use glam::{Vec2, Vec3};

use crate::components::trail::TrailBuffer;
use crate::core::angle::wrap_angle;
use crate::renderer::camera::Camera;
use crate::renderer::color::Color;
use crate::renderer::surface::{DrawSurface, ViewTag, Viewport};
use crate::systems::compositor::{project, Drawable, TRAIL_SCALE_CUTOFF};

/// A body on a kinematic circular orbit around a fixed anchor.
///
/// Position is derived each tick from the orbital angle; it is never set
/// directly while orbiting. Inclination tilts the orbit plane by rotating
/// the in-plane perpendicular axis into Z.
#[derive(Debug, Clone)]
pub struct Planet {
    pub name: String,
    pub radius: f32,
    pub color: Color,

    anchor: Vec3,
    orbital_radius: f32,
    orbital_speed: f32,
    orbital_angle: f32,
    inclination: f32,

    rotation_speed: f32,
    rotation_angle: f32,

    position: Vec3,
    velocity: Vec3,

    pub has_rings: bool,
    pub ring_color: Color,
    pub ring_radius: f32,

    trail: Option<TrailBuffer>,
}

impl Planet {
    pub fn new(name: impl Into<String>, radius: f32, color: Color) -> Self {
        let mut planet = Self {
            name: name.into(),
            radius,
            color,
            anchor: Vec3::ZERO,
            orbital_radius: 200.0,
            orbital_speed: 0.01,
            orbital_angle: 0.0,
            inclination: 0.0,
            rotation_speed: 0.05,
            rotation_angle: 0.0,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            has_rings: false,
            ring_color: Color::rgb8(0xcc, 0xcc, 0xcc),
            ring_radius: radius * 2.0,
            trail: Some(TrailBuffer::default()),
        };
        planet.position = planet.derive_position();
        planet
    }

    // -- Builder pattern --

    pub fn with_orbit(mut self, anchor: Vec3, radius: f32, speed: f32, initial_angle: f32) -> Self {
        self.anchor = anchor;
        self.orbital_radius = radius.max(0.0);
        self.orbital_speed = speed;
        self.orbital_angle = wrap_angle(initial_angle);
        self.position = self.derive_position();
        self
    }

    pub fn with_inclination(mut self, inclination: f32) -> Self {
        self.inclination = inclination;
        self.position = self.derive_position();
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_rings(mut self, color: Color, radius: f32) -> Self {
        self.has_rings = true;
        self.ring_color = color;
        self.ring_radius = radius;
        self
    }

    pub fn with_trail(mut self, enabled: bool) -> Self {
        self.trail = enabled.then(TrailBuffer::default);
        self
    }

    /// Advance one tick: orbital angle, derived position, velocity,
    /// self-rotation, trail. Pure function of previous state.
    pub fn update(&mut self) {
        let prev = self.position;

        self.orbital_angle = wrap_angle(self.orbital_angle + self.orbital_speed);
        self.position = self.derive_position();
        self.velocity = self.position - prev;

        self.rotation_angle = wrap_angle(self.rotation_angle + self.rotation_speed);

        if let Some(trail) = &mut self.trail {
            trail.push(self.position);
        }
    }

    /// Circular-orbit position with inclination applied to the in-plane
    /// perpendicular axis: y' = y·cos(i), z' = y·sin(i).
    fn derive_position(&self) -> Vec3 {
        let x = self.orbital_angle.cos() * self.orbital_radius;
        let y = self.orbital_angle.sin() * self.orbital_radius;
        self.anchor
            + Vec3::new(
                x,
                y * self.inclination.cos(),
                y * self.inclination.sin(),
            )
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position change over the last tick.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn orbital_angle(&self) -> f32 {
        self.orbital_angle
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn orbital_speed(&self) -> f32 {
        self.orbital_speed
    }

    pub fn trail(&self) -> Option<&TrailBuffer> {
        self.trail.as_ref()
    }

    /// Orbital period in ticks. Infinite for a body that does not move.
    pub fn period(&self) -> f32 {
        if self.orbital_speed == 0.0 {
            f32::INFINITY
        } else {
            std::f32::consts::TAU / self.orbital_speed.abs()
        }
    }

    /// Distance from the orbit anchor.
    pub fn distance_to_anchor(&self) -> f32 {
        self.position.distance(self.anchor)
    }

    /// Magnitude of the per-tick velocity.
    pub fn orbital_velocity(&self) -> f32 {
        self.velocity.length()
    }

    fn draw_trail(
        &self,
        surface: &mut dyn DrawSurface,
        view: ViewTag,
        camera: &Camera,
        viewport: Viewport,
    ) {
        let Some(trail) = &self.trail else { return };
        if trail.len() < 2 {
            return;
        }
        // Level-of-detail cutoff: zoomed far out, trails are sub-pixel noise.
        if camera.scale() < TRAIL_SCALE_CUTOFF {
            return;
        }
        let points: Vec<Vec2> = trail
            .iter()
            .map(|p| project(*p, view, camera, viewport))
            .collect();
        surface.stroke_polyline(&points, 1.0, self.color.with_alpha(0.25));
    }

    fn draw_rings(&self, surface: &mut dyn DrawSurface, screen: Vec2, scale: f32) {
        let ring_radius = self.ring_radius * scale;
        let width = (scale * 0.5).max(1.0);
        surface.stroke_circle(screen, ring_radius, width, self.ring_color);
        surface.stroke_circle(screen, ring_radius * 0.8, width, self.ring_color);
    }
}

impl Drawable for Planet {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn cull_radius(&self) -> f32 {
        self.radius
    }

    fn draw(
        &mut self,
        surface: &mut dyn DrawSurface,
        view: ViewTag,
        camera: &Camera,
        viewport: Viewport,
    ) {
        let screen = project(self.position, view, camera, viewport);
        let scale = camera.scale();
        let scaled_radius = self.radius * scale;

        // Trail goes down first so the body occludes its own history.
        self.draw_trail(surface, view, camera, viewport);

        if self.has_rings {
            self.draw_rings(surface, screen, scale);
        }

        surface.fill_circle(screen, scaled_radius, self.color);
        surface.stroke_circle(screen, scaled_radius, scale.max(1.0), Color::WHITE);

        surface.fill_text(
            screen + Vec2::new(0.0, scaled_radius + 15.0 * scale),
            &self.name,
            (12.0 * scale).max(10.0),
            Color::WHITE,
        );
    }
}
