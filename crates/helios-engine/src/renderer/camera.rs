use glam::Vec3;

/// Minimum zoom scale.
pub const MIN_SCALE: f32 = 0.2;
/// Maximum zoom scale.
pub const MAX_SCALE: f32 = 3.0;
/// Multiplicative zoom step applied per tick while a zoom command is held.
pub const ZOOM_IN_STEP: f32 = 1.02;
pub const ZOOM_OUT_STEP: f32 = 0.98;
/// Exponential smoothing factor for target tracking. Not time-scaled;
/// assumes the constant tick rate of the simulation clock.
const FOLLOW_SMOOTHING: f32 = 0.1;

/// Zoom command direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDir {
    In,
    Out,
}

/// Tracking camera shared by both projections.
///
/// Holds a full 3-D position so the top view (X, Y) and side view (X, Z)
/// each read the two components they need.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera center in world space.
    pub position: Vec3,
    /// Zoom factor, clamped to [[`MIN_SCALE`], [`MAX_SCALE`]].
    scale: f32,
    /// Whether the camera eases toward the tracked target each tick.
    follow_target: bool,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            follow_target: true,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn follows_target(&self) -> bool {
        self.follow_target
    }

    /// Per-tick update: ease toward the target when following.
    pub fn update(&mut self, target: Vec3) {
        if self.follow_target {
            self.position += (target - self.position) * FOLLOW_SMOOTHING;
        }
    }

    /// Apply one zoom step. Level-triggered: called every tick while held.
    pub fn zoom(&mut self, dir: ZoomDir) {
        let step = match dir {
            ZoomDir::In => ZOOM_IN_STEP,
            ZoomDir::Out => ZOOM_OUT_STEP,
        };
        self.scale = (self.scale * step).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Flip target following. Edge-triggered: the input layer fires this
    /// once per press.
    pub fn toggle_follow(&mut self) {
        self.follow_target = !self.follow_target;
    }

    /// Override the zoom scale directly (still clamped).
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn follow_moves_tenth_of_remaining_distance() {
        let mut cam = Camera::new();
        cam.update(Vec3::new(100.0, 50.0, -20.0));
        assert_abs_diff_eq!(cam.position.x, 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cam.position.y, 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cam.position.z, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn follow_converges_toward_target() {
        let mut cam = Camera::new();
        let target = Vec3::new(100.0, 0.0, 0.0);
        for _ in 0..200 {
            cam.update(target);
        }
        assert!((cam.position.x - 100.0).abs() < 0.01);
    }

    #[test]
    fn disabled_follow_holds_position() {
        let mut cam = Camera::new();
        cam.toggle_follow();
        cam.update(Vec3::new(100.0, 100.0, 100.0));
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn zoom_in_never_exceeds_max() {
        let mut cam = Camera::new();
        for _ in 0..1000 {
            cam.zoom(ZoomDir::In);
        }
        assert!(cam.scale() <= MAX_SCALE);
        assert_abs_diff_eq!(cam.scale(), MAX_SCALE);
    }

    #[test]
    fn zoom_out_never_drops_below_min() {
        let mut cam = Camera::new();
        for _ in 0..1000 {
            cam.zoom(ZoomDir::Out);
        }
        assert!(cam.scale() >= MIN_SCALE);
        assert_abs_diff_eq!(cam.scale(), MIN_SCALE);
    }

    #[test]
    fn set_scale_clamps() {
        let mut cam = Camera::new();
        cam.set_scale(99.0);
        assert_eq!(cam.scale(), MAX_SCALE);
        cam.set_scale(0.0);
        assert_eq!(cam.scale(), MIN_SCALE);
    }
}
