//! Implements https://en.wikipedia.org/wiki/Xorshift
//!
//! This is **not** a cryptographically secure random number generator.

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Debug)]
pub struct RNG {
    state: u64,
}

impl RNG {
    const DEFAULT_STATE: u64 = 0xcafebabedeadbeef;

    /// Create a generator that produces a reproducible sequence.
    ///
    /// Xorshift gets stuck on a state of zero, so a zero seed is replaced
    /// with the default state.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let state = if seed == 0 {
            Self::DEFAULT_STATE
        } else {
            seed
        };

        Self { state }
    }

    /// Create a generator seeded from the current system time
    #[must_use]
    pub fn from_time() -> Self {
        let seed = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as u64,
            Err(error) => {
                log::warn!("System clock is set before the unix epoch ({error}), using default seed");
                Self::DEFAULT_STATE
            },
        };

        log::debug!("Seeding random number generator with {seed:#x}");
        Self::with_seed(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() & u32::MAX as u64) as u32
    }

    pub fn next_u16(&mut self) -> u16 {
        (self.next_u64() & u16::MAX as u64) as u16
    }

    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() & u8::MAX as u64) as u8
    }

    /// Produce a value in `0..bound`.
    ///
    /// The value is reduced with a plain modulo, which very slightly favours small
    /// values. The only guarantee is that the result lies within the bounds.
    /// A bound of zero always yields zero.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}

impl Default for RNG {
    fn default() -> Self {
        Self {
            state: Self::DEFAULT_STATE,
        }
    }
}
