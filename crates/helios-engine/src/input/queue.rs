use glam::Vec3;

use crate::renderer::camera::ZoomDir;

/// Commands the simulation understands.
///
/// A closed set: the input layer maps keys/buttons to these before they
/// reach the core, and performs edge detection for the toggle commands.
/// `Thrust` and `Zoom` are level-triggered (pushed every tick while held);
/// `ToggleOrbit` and `ToggleFollow` must arrive once per press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Accumulate a force on the ship this tick (free flight only).
    Thrust(Vec3),
    /// Engage orbit around the first body in capture range, or disengage
    /// if already orbiting.
    ToggleOrbit,
    /// Apply one multiplicative zoom step to the camera.
    Zoom(ZoomDir),
    /// Flip camera target following.
    ToggleFollow,
}

/// A queue of pending commands.
/// The host writes commands in; the clock drains them each tick.
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    /// Push a new command (called from the input layer).
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Drain all pending commands. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Iterate over pending commands without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = CommandQueue::new();
        q.push(Command::Thrust(Vec3::new(0.5, 0.0, 0.0)));
        q.push(Command::ToggleOrbit);
        assert_eq!(q.len(), 2);
        let commands = q.drain();
        assert_eq!(commands.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = CommandQueue::new();
        q.push(Command::Zoom(ZoomDir::In));
        q.push(Command::ToggleFollow);
        let commands = q.drain();
        assert_eq!(commands[0], Command::Zoom(ZoomDir::In));
        assert_eq!(commands[1], Command::ToggleFollow);
    }
}
