use glam::{Vec2, Vec3};

use crate::core::angle::wrap_angle;
use crate::renderer::camera::Camera;
use crate::renderer::color::Color;
use crate::renderer::surface::{DrawSurface, ViewTag, Viewport};
use crate::systems::compositor::{project, Drawable};
use crate::world::BodyId;

const DEFAULT_MAX_SPEED: f32 = 5.0;
const DEFAULT_FRICTION: f32 = 0.98;
/// Base angular rate every engaged orbit starts from; the orbited body's
/// own orbital speed is added on top. A deliberate simplification, not
/// physically derived.
const ORBIT_BASE_RATE: f32 = 0.02;
const SHIP_SIZE: f32 = 10.0;

const HULL_COLOR: Color = Color::GREEN;
const HULL_FILL: Color = Color::new(0.0, 1.0, 0.0, 0.3);

/// The ship's flight state. Exactly one is active; orbiting suspends
/// free-flight integration entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightMode {
    Free,
    Orbiting {
        body: BodyId,
        radius: f32,
        angle: f32,
        angular_speed: f32,
    },
}

/// The player craft: damped free flight, or a planar kinematic orbit
/// locked around one body.
#[derive(Debug, Clone)]
pub struct Ship {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    max_speed: f32,
    friction: f32,
    size: f32,
    mode: FlightMode,
}

impl Ship {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            max_speed: DEFAULT_MAX_SPEED,
            friction: DEFAULT_FRICTION,
            size: SHIP_SIZE,
            mode: FlightMode::Free,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    pub fn is_orbiting(&self) -> bool {
        matches!(self.mode, FlightMode::Orbiting { .. })
    }

    /// The body currently orbited, if any.
    pub fn orbit_target(&self) -> Option<BodyId> {
        match self.mode {
            FlightMode::Orbiting { body, .. } => Some(body),
            FlightMode::Free => None,
        }
    }

    /// Accumulate thrust for this tick. Silently ignored while orbiting:
    /// orbit position is fully determined by the orbit parameters, so
    /// accepting force there would only build up stale acceleration.
    pub fn apply_force(&mut self, force: Vec3) {
        if self.is_orbiting() {
            log::debug!("thrust ignored while orbiting");
            return;
        }
        self.acceleration += force;
    }

    /// Advance one tick. `orbit_anchor` is the current position of the
    /// orbited body (resolved by the world), unused in free flight.
    pub fn update(&mut self, orbit_anchor: Option<Vec3>) {
        match &mut self.mode {
            FlightMode::Orbiting {
                radius,
                angle,
                angular_speed,
                ..
            } => {
                let Some(anchor) = orbit_anchor else {
                    log::warn!("orbit target has no position; holding");
                    return;
                };
                *angle = wrap_angle(*angle + *angular_speed);
                // Locked to the world X/Y plane regardless of the orbited
                // body's own inclination.
                self.position = anchor + Vec3::new(angle.cos(), angle.sin(), 0.0) * *radius;
            }
            FlightMode::Free => {
                // Integrate, damp, clamp, translate — in that order. Damping
                // before clamping makes sustained thrust approach max_speed
                // asymptotically instead of slamming into the clamp.
                self.velocity += self.acceleration;
                self.velocity *= self.friction;
                self.velocity = self
                    .velocity
                    .clamp(Vec3::splat(-self.max_speed), Vec3::splat(self.max_speed));
                self.position += self.velocity;
                self.acceleration = Vec3::ZERO;
            }
        }
    }

    /// Transition Free → Orbiting around `body`. Orbit radius and phase
    /// come from the ship's current planar (X/Y) offset to the body, so the
    /// ship does not jump on engagement. No-op while already orbiting.
    pub fn engage_orbit(&mut self, body: BodyId, body_position: Vec3, body_orbital_speed: f32) {
        if self.is_orbiting() {
            log::debug!("engage_orbit ignored: already orbiting");
            return;
        }
        let dx = self.position.x - body_position.x;
        let dy = self.position.y - body_position.y;
        let radius = (dx * dx + dy * dy).sqrt();
        let angle = dy.atan2(dx);
        self.mode = FlightMode::Orbiting {
            body,
            radius,
            angle: wrap_angle(angle),
            angular_speed: ORBIT_BASE_RATE + body_orbital_speed,
        };
        log::debug!("orbit engaged: r={radius:.1}");
    }

    /// Transition Orbiting → Free, converting the orbital motion into a
    /// tangential exit velocity so the ship coasts away instead of stopping
    /// dead. No-op while already free.
    pub fn disengage_orbit(&mut self) {
        let FlightMode::Orbiting {
            radius,
            angle,
            angular_speed,
            ..
        } = self.mode
        else {
            log::debug!("disengage_orbit ignored: not orbiting");
            return;
        };
        self.velocity = Vec3::new(-angle.sin(), angle.cos(), 0.0) * radius * angular_speed;
        self.mode = FlightMode::Free;
        log::debug!("orbit disengaged");
    }
}

impl Drawable for Ship {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn cull_radius(&self) -> f32 {
        self.size
    }

    fn draw(
        &mut self,
        surface: &mut dyn DrawSurface,
        view: ViewTag,
        camera: &Camera,
        viewport: Viewport,
    ) {
        let screen = project(self.position, view, camera, viewport);
        let half = self.size / 2.0;

        let hull: Vec<Vec2> = match view {
            // Triangle pointing along -Y in the top view.
            ViewTag::Top => vec![
                screen + Vec2::new(0.0, -half),
                screen + Vec2::new(-half, half),
                screen + Vec2::new(half, half),
            ],
            // Flat rectangle in the side view.
            ViewTag::Side => vec![
                screen + Vec2::new(-half, -half / 2.0),
                screen + Vec2::new(half, -half / 2.0),
                screen + Vec2::new(half, half / 2.0),
                screen + Vec2::new(-half, half / 2.0),
            ],
        };

        surface.fill_polygon(&hull, HULL_FILL);
        surface.stroke_polygon(&hull, 2.0, HULL_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::TAU;

    #[test]
    fn sustained_thrust_approaches_but_never_exceeds_max_speed() {
        let mut ship = Ship::new(Vec3::ZERO);
        let mut last = 0.0;
        for _ in 0..500 {
            ship.apply_force(Vec3::new(1.0, 0.0, 0.0));
            ship.update(None);
            let v = ship.velocity().x;
            assert!(v >= last, "velocity regressed: {v} < {last}");
            assert!(v <= DEFAULT_MAX_SPEED, "velocity overshot: {v}");
            last = v;
        }
        assert_abs_diff_eq!(last, DEFAULT_MAX_SPEED, epsilon = 1e-3);
    }

    #[test]
    fn friction_decays_velocity_without_thrust() {
        let mut ship = Ship::new(Vec3::ZERO);
        ship.apply_force(Vec3::new(2.0, 0.0, 0.0));
        ship.update(None);
        let v0 = ship.velocity().x;
        for _ in 0..100 {
            ship.update(None);
        }
        assert!(ship.velocity().x < v0 * 0.2);
    }

    #[test]
    fn components_clamp_independently() {
        let mut ship = Ship::new(Vec3::ZERO);
        ship.apply_force(Vec3::new(100.0, -100.0, 100.0));
        ship.update(None);
        let v = ship.velocity();
        assert_eq!(v.x, DEFAULT_MAX_SPEED);
        assert_eq!(v.y, -DEFAULT_MAX_SPEED);
        assert_eq!(v.z, DEFAULT_MAX_SPEED);
    }

    #[test]
    fn engage_then_disengage_leaves_position_and_exits_tangentially() {
        let body_pos = Vec3::new(100.0, 50.0, 0.0);
        let start = body_pos + Vec3::new(30.0, 10.0, 0.0);
        let mut ship = Ship::new(start);

        ship.engage_orbit(BodyId(0), body_pos, 0.01);
        ship.disengage_orbit();

        assert_abs_diff_eq!(ship.position().x, start.x, epsilon = 1e-4);
        assert_abs_diff_eq!(ship.position().y, start.y, epsilon = 1e-4);

        let exit = ship.velocity();
        assert!(exit.length() > 0.0);
        assert_eq!(exit.z, 0.0);
        // Perpendicular to the radius vector at exit.
        let radial = (start - body_pos).truncate();
        assert_abs_diff_eq!(radial.dot(exit.truncate()), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn orbit_position_tracks_moving_anchor_in_xy_plane() {
        let mut ship = Ship::new(Vec3::new(20.0, 0.0, 0.0));
        ship.engage_orbit(BodyId(2), Vec3::ZERO, 0.0);

        let anchor = Vec3::new(5.0, -3.0, 7.0);
        ship.update(Some(anchor));

        let FlightMode::Orbiting { radius, angle, .. } = ship.mode() else {
            panic!("expected orbiting mode");
        };
        assert_abs_diff_eq!(radius, 20.0, epsilon = 1e-4);
        let expected = anchor + Vec3::new(angle.cos(), angle.sin(), 0.0) * radius;
        assert_abs_diff_eq!(ship.position().x, expected.x, epsilon = 1e-4);
        assert_abs_diff_eq!(ship.position().y, expected.y, epsilon = 1e-4);
        // Orbit plane is world X/Y: ship z follows the anchor exactly.
        assert_abs_diff_eq!(ship.position().z, anchor.z, epsilon = 1e-4);
    }

    #[test]
    fn orbit_angle_stays_wrapped() {
        let mut ship = Ship::new(Vec3::new(10.0, 0.0, 0.0));
        ship.engage_orbit(BodyId(0), Vec3::ZERO, 0.05);
        for _ in 0..10_000 {
            ship.update(Some(Vec3::ZERO));
            let FlightMode::Orbiting { angle, .. } = ship.mode() else {
                panic!("left orbit unexpectedly");
            };
            assert!((0.0..TAU).contains(&angle));
        }
    }

    #[test]
    fn invalid_transitions_are_no_ops() {
        let mut ship = Ship::new(Vec3::new(10.0, 0.0, 0.0));

        // Disengage while free: nothing changes.
        ship.disengage_orbit();
        assert_eq!(ship.mode(), FlightMode::Free);
        assert_eq!(ship.velocity(), Vec3::ZERO);

        // Engage twice: the second call must not retarget.
        ship.engage_orbit(BodyId(0), Vec3::ZERO, 0.01);
        let first = ship.mode();
        ship.engage_orbit(BodyId(1), Vec3::new(500.0, 0.0, 0.0), 0.2);
        assert_eq!(ship.mode(), first);
    }

    #[test]
    fn thrust_is_ignored_while_orbiting() {
        let mut ship = Ship::new(Vec3::new(10.0, 0.0, 0.0));
        ship.engage_orbit(BodyId(0), Vec3::ZERO, 0.0);
        ship.apply_force(Vec3::new(50.0, 50.0, 50.0));
        ship.update(Some(Vec3::ZERO));
        ship.disengage_orbit();

        // The buffered force must not leak into free flight.
        let tangential = ship.velocity().length();
        ship.update(None);
        assert!(ship.velocity().length() <= tangential + 1e-4);
    }
}
