//! RNG trait abstraction for the tick
//!
//! Rules never reach for process-wide randomness; the caller hands a generator
//! into every tick. Tests seed one so runs replay exactly.

/// Random number generator used by material rules and the scheduler
pub trait WorldRng {
    /// Fair coin flip
    fn gen_bool(&mut self) -> bool;

    /// Random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if a random value is less than the probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// -1 or +1 with equal chance, for left/right tie-breaks
    fn gen_direction(&mut self) -> i32 {
        if self.gen_bool() { 1 } else { -1 }
    }
}

// Covers ThreadRng in hosts and seeded generators in tests
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
