pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;
pub mod world;

// Re-export key types at crate root for convenience
pub use crate::api::snapshot::Snapshot;
pub use crate::components::body::Planet;
pub use crate::components::ship::{FlightMode, Ship};
pub use crate::components::star::{LightRay, Star};
pub use crate::components::trail::TrailBuffer;
pub use crate::core::clock::{RenderTarget, SimulationClock};
pub use crate::core::rng::Rng;
pub use crate::input::queue::{Command, CommandQueue};
pub use crate::renderer::camera::{Camera, ZoomDir};
pub use crate::renderer::color::Color;
pub use crate::renderer::gradient::GradientCache;
pub use crate::renderer::surface::{
    DrawCommand, DrawList, DrawSurface, GradientId, GradientStop, VertexRange, ViewTag, Viewport,
};
pub use crate::systems::compositor::{depth, project, Drawable, SceneCompositor};
pub use crate::world::manifest::{BodySpec, RingSpec, StarSpec, WorldManifest};
pub use crate::world::{BodyId, World, CAPTURE_RADIUS_FACTOR};
