use glam::{Vec2, Vec3};

use crate::core::angle::wrap_angle;
use crate::core::rng::Rng;
use crate::renderer::camera::Camera;
use crate::renderer::color::Color;
use crate::renderer::gradient::GradientCache;
use crate::renderer::surface::{DrawSurface, GradientStop, ViewTag, Viewport};
use crate::systems::compositor::{project, Drawable};

/// Number of light rays around the star.
const NUM_RAYS: usize = 8;
/// Ray ring spin per tick.
const RAY_ROTATION_SPEED: f32 = 0.01;
/// Jitter bounds as multiples of the base ray length.
const RAY_MIN_FACTOR: f32 = 0.8;
const RAY_MAX_FACTOR: f32 = 1.5;

/// One decorative light ray.
#[derive(Debug, Clone)]
pub struct LightRay {
    pub angle: f32,
    pub length: f32,
}

/// The central star: fixed anchor of every planetary orbit, plus purely
/// decorative pulse/ray state and a per-zoom gradient cache.
#[derive(Debug, Clone)]
pub struct Star {
    pub name: String,
    pub position: Vec3,
    pub radius: f32,
    pub color: Color,
    pub core_color: Color,

    pulse_speed: f32,
    pulse_intensity: f32,
    pulse_phase: f32,

    rays: Vec<LightRay>,
    ray_rotation: f32,
    base_ray_length: f32,

    light_radius: f32,

    rng: Rng,

    halo_cache: GradientCache,
    ray_cache: GradientCache,
    core_cache: GradientCache,
}

impl Star {
    pub fn new(name: impl Into<String>, radius: f32, color: Color, core_color: Color) -> Self {
        let base_ray_length = radius * 2.0;
        let mut rng = Rng::new(0x5747_4c4f);
        let rays = (0..NUM_RAYS)
            .map(|i| LightRay {
                angle: (i as f32 / NUM_RAYS as f32) * std::f32::consts::TAU,
                length: base_ray_length + rng.next_f32() * 10.0,
            })
            .collect();
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            radius,
            color,
            core_color,
            pulse_speed: 0.02,
            pulse_intensity: 0.3,
            pulse_phase: 0.0,
            rays,
            ray_rotation: 0.0,
            base_ray_length,
            light_radius: 200.0,
            rng,
            halo_cache: GradientCache::new(),
            ray_cache: GradientCache::new(),
            core_cache: GradientCache::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_pulse(mut self, speed: f32, intensity: f32) -> Self {
        self.pulse_speed = speed;
        self.pulse_intensity = intensity;
        self
    }

    pub fn with_light_radius(mut self, light_radius: f32) -> Self {
        self.light_radius = light_radius;
        self
    }

    // -- Factory presets --

    pub fn sun() -> Self {
        Self::new("Sol", 40.0, Color::rgb8(0xff, 0xff, 0x00), Color::WHITE)
            .with_pulse(0.02, 0.2)
            .with_light_radius(300.0)
    }

    pub fn red_giant() -> Self {
        Self::new(
            "Red Giant",
            60.0,
            Color::rgb8(0xff, 0x45, 0x00),
            Color::rgb8(0xff, 0xff, 0x00),
        )
        .with_pulse(0.01, 0.4)
        .with_light_radius(400.0)
    }

    pub fn blue_star() -> Self {
        Self::new("Blue Star", 30.0, Color::rgb8(0x41, 0x69, 0xe1), Color::WHITE)
            .with_pulse(0.05, 0.1)
            .with_light_radius(500.0)
    }

    /// Advance decorative state: pulse phase, ray ring rotation, and the
    /// per-ray length jitter (clamped to [0.8, 1.5] × base length).
    pub fn update(&mut self) {
        self.pulse_phase = wrap_angle(self.pulse_phase + self.pulse_speed);
        self.ray_rotation = wrap_angle(self.ray_rotation + RAY_ROTATION_SPEED);

        let min = self.base_ray_length * RAY_MIN_FACTOR;
        let max = self.base_ray_length * RAY_MAX_FACTOR;
        for ray in &mut self.rays {
            ray.length = (ray.length + self.rng.next_signed()).clamp(min, max);
        }
    }

    pub fn pulse_phase(&self) -> f32 {
        self.pulse_phase
    }

    pub fn rays(&self) -> &[LightRay] {
        &self.rays
    }

    pub fn base_ray_length(&self) -> f32 {
        self.base_ray_length
    }

    /// Light intensity at a point: inverse-square falloff, zero beyond the
    /// light radius.
    pub fn light_intensity_at(&self, point: Vec3) -> f32 {
        let distance = self.position.distance(point);
        if distance > self.light_radius {
            return 0.0;
        }
        (1.0 - (distance * distance) / (self.light_radius * self.light_radius)).max(0.0)
    }

    fn pulse_radius(&self) -> f32 {
        self.radius * (1.0 + self.pulse_intensity * self.pulse_phase.sin())
    }

    fn draw_rays(
        &mut self,
        surface: &mut dyn DrawSurface,
        view: ViewTag,
        screen: Vec2,
        scale: f32,
    ) {
        let color = self.color;
        let gradient = self.ray_cache.get_or_insert_with(view, scale, || {
            surface.create_radial_gradient(&[
                GradientStop::new(0.0, color.with_alpha(0.5)),
                GradientStop::new(1.0, color.with_alpha(0.0)),
            ])
        });

        for ray in &self.rays {
            let angle = self.ray_rotation + ray.angle;
            let dir = Vec2::new(angle.cos(), angle.sin());
            let from = screen + dir * self.radius * scale;
            let to = screen + dir * ray.length * scale;
            surface.stroke_line_gradient(from, to, 3.0 * scale, gradient);
        }
    }

    fn draw_halo(
        &mut self,
        surface: &mut dyn DrawSurface,
        view: ViewTag,
        screen: Vec2,
        scale: f32,
    ) {
        let color = self.color;
        let gradient = self.halo_cache.get_or_insert_with(view, scale, || {
            surface.create_radial_gradient(&[
                GradientStop::new(0.0, color.with_alpha(0.38)),
                GradientStop::new(0.5, color.with_alpha(0.19)),
                GradientStop::new(1.0, color.with_alpha(0.0)),
            ])
        });

        let pulse_radius = self.pulse_radius();
        // Outer corona, then a tighter mid halo with the same ramp.
        surface.fill_circle_gradient(screen, pulse_radius * scale * 1.5, gradient);
        surface.fill_circle_gradient(screen, pulse_radius * scale, gradient);
    }

    fn draw_core(
        &mut self,
        surface: &mut dyn DrawSurface,
        view: ViewTag,
        screen: Vec2,
        scale: f32,
    ) {
        let color = self.color;
        let core_color = self.core_color;
        let gradient = self.core_cache.get_or_insert_with(view, scale, || {
            surface.create_radial_gradient(&[
                GradientStop::new(0.0, core_color),
                GradientStop::new(0.3, color),
                GradientStop::new(1.0, color.with_alpha(0.8)),
            ])
        });

        let scaled_radius = self.radius * scale;
        let pulse_radius =
            scaled_radius * (1.0 + self.pulse_intensity * 0.1 * self.pulse_phase.sin());
        surface.fill_circle_gradient(screen, pulse_radius, gradient);
        surface.fill_circle(screen, scaled_radius * 0.3, core_color);
        surface.stroke_circle(screen, scaled_radius, 2.0 * scale, color.with_alpha(0.66));
    }
}

impl Drawable for Star {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn cull_radius(&self) -> f32 {
        // Glow extends well past the disc.
        self.radius * 2.0
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

        // Rays sit behind the halo, halo behind the core.
        self.draw_rays(surface, view, screen, scale);
        self.draw_halo(surface, view, screen, scale);
        self.draw_core(surface, view, screen, scale);

        surface.fill_text(
            screen + Vec2::new(0.0, scaled_radius + 25.0 * scale),
            &self.name,
            (16.0 * scale).max(14.0),
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::DrawList;
    use std::f32::consts::TAU;

    #[test]
    fn pulse_phase_stays_wrapped() {
        let mut star = Star::sun();
        for _ in 0..10_000 {
            star.update();
            assert!((0.0..TAU).contains(&star.pulse_phase()));
        }
    }

    #[test]
    fn ray_lengths_stay_within_jitter_bounds() {
        let mut star = Star::sun();
        let min = star.base_ray_length() * RAY_MIN_FACTOR;
        let max = star.base_ray_length() * RAY_MAX_FACTOR;
        for _ in 0..5_000 {
            star.update();
            for ray in star.rays() {
                assert!(
                    (min..=max).contains(&ray.length),
                    "ray length {} outside [{min}, {max}]",
                    ray.length
                );
            }
        }
    }

    #[test]
    fn ray_ring_is_evenly_spaced() {
        let star = Star::sun();
        assert_eq!(star.rays().len(), NUM_RAYS);
        let step = TAU / NUM_RAYS as f32;
        for (i, ray) in star.rays().iter().enumerate() {
            assert!((ray.angle - i as f32 * step).abs() < 1e-5);
        }
    }

    #[test]
    fn light_falls_off_with_distance() {
        let star = Star::sun().with_light_radius(100.0);
        assert_eq!(star.light_intensity_at(Vec3::ZERO), 1.0);
        let near = star.light_intensity_at(Vec3::new(10.0, 0.0, 0.0));
        let far = star.light_intensity_at(Vec3::new(90.0, 0.0, 0.0));
        assert!(near > far);
        assert_eq!(star.light_intensity_at(Vec3::new(150.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn stable_zoom_reuses_gradients() {
        let mut star = Star::sun();
        let camera = Camera::new();
        let viewport = Viewport::new(800.0, 600.0);
        let mut surface = DrawList::new();

        star.draw(&mut surface, ViewTag::Top, &camera, viewport);
        let after_first = surface.gradient_count();
        assert_eq!(after_first, 3); // ray, halo, core

        for _ in 0..10 {
            surface.clear();
            star.draw(&mut surface, ViewTag::Top, &camera, viewport);
        }
        assert_eq!(surface.gradient_count(), after_first);
    }

    #[test]
    fn zoom_change_builds_new_entries() {
        let mut star = Star::sun();
        let mut camera = Camera::new();
        let viewport = Viewport::new(800.0, 600.0);
        let mut surface = DrawList::new();

        star.draw(&mut surface, ViewTag::Top, &camera, viewport);
        camera.set_scale(2.0);
        surface.clear();
        star.draw(&mut surface, ViewTag::Top, &camera, viewport);
        assert_eq!(surface.gradient_count(), 6);
    }

    #[test]
    fn factories_differ() {
        assert!(Star::red_giant().radius > Star::sun().radius);
        assert!(Star::blue_star().radius < Star::sun().radius);
    }
}
