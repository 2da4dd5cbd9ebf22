//! Seedable xorshift64 generator for decorative jitter.

/// Seedable pseudo-random number generator (xorshift64).
/// Used for the star's ray-length jitter; keeps ticks reproducible per seed.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Generate a random float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        self.next_int(1 << 24) as f32 / (1 << 24) as f32
    }

    /// Generate a random float in [-1, 1).
    pub fn next_signed(&mut self) -> f32 {
        self.next_f32() * 2.0 - 1.0
    }
}
