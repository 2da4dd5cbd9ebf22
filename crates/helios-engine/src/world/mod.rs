pub mod manifest;

use crate::components::body::Planet;
use crate::components::ship::Ship;
use crate::components::star::Star;

use glam::Vec3;

/// Index of a planet in the world's fixed body order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Capture range for orbit engagement, as a multiple of body radius.
pub const CAPTURE_RADIUS_FACTOR: f32 = 5.0;

/// The complete simulated scene: one star, planets in a fixed order, and
/// the ship. Bodies are created at setup and never destroyed.
pub struct World {
    star: Star,
    planets: Vec<Planet>,
    ship: Ship,
}

impl World {
    pub fn new(star: Star) -> Self {
        Self {
            star,
            planets: Vec::new(),
            ship: Ship::new(Vec3::ZERO),
        }
    }

    pub fn with_ship(mut self, ship: Ship) -> Self {
        self.ship = ship;
        self
    }

    /// Register a planet. Insertion order is the world's iteration order,
    /// which the capture scan relies on.
    pub fn add_planet(&mut self, planet: Planet) -> BodyId {
        self.planets.push(planet);
        BodyId(self.planets.len() - 1)
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, id: BodyId) -> Option<&Planet> {
        self.planets.get(id.0)
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    /// Advance the star and every planet one tick.
    pub fn update_bodies(&mut self) {
        self.star.update();
        for planet in &mut self.planets {
            planet.update();
        }
    }

    /// Advance the ship one tick, resolving its orbit anchor to the
    /// orbited body's freshly updated position.
    pub fn update_ship(&mut self) {
        let anchor = self
            .ship
            .orbit_target()
            .and_then(|id| self.planets.get(id.0))
            .map(Planet::position);
        self.ship.update(anchor);
    }

    /// The edge-triggered orbit toggle. Disengages if orbiting; otherwise
    /// scans planets in world order and engages the first one within
    /// `CAPTURE_RADIUS_FACTOR ×` its radius (full 3-D distance).
    /// First match wins — not nearest match.
    pub fn toggle_orbit(&mut self) {
        if self.ship.is_orbiting() {
            self.ship.disengage_orbit();
            return;
        }
        let ship_pos = self.ship.position();
        for (idx, planet) in self.planets.iter().enumerate() {
            let distance = ship_pos.distance(planet.position());
            if distance < CAPTURE_RADIUS_FACTOR * planet.radius {
                self.ship
                    .engage_orbit(BodyId(idx), planet.position(), planet.orbital_speed());
                return;
            }
        }
        log::debug!("toggle_orbit: no body within capture range");
    }

    /// Split borrows for the compositor: every drawable at once.
    pub(crate) fn drawables_mut(&mut self) -> (&mut Star, &mut [Planet], &mut Ship) {
        (&mut self.star, &mut self.planets, &mut self.ship)
    }
}
