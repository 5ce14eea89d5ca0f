//! PCG32 (XSH RR 64/32) with its state exposed as four 32-bit words, so a
//! sketch's random stream can be saved and replayed exactly.
use rand::{Error, RngCore, SeedableRng};

const MULTIPLIER: u64 = 0x5851_f42d_4c95_7f2d;
const DEFAULT_INCREMENT: u64 = 0x1405_7b7e_f767_814f;

const BIT_27: f64 = 134_217_728.0;
const BIT_53: f64 = 9_007_199_254_740_992.0;

/// Seedable 32-bit generator. The sequence for a given seed is fixed forever:
/// rendered sketches are compared against stored output, so the algorithm and
/// constants here must never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// Seed from a 64-bit value given as two 32-bit halves, on the default stream.
    pub fn new(seed_hi: u32, seed_lo: u32) -> Pcg32 {
        Pcg32::seeded(join(seed_hi, seed_lo), DEFAULT_INCREMENT)
    }

    /// Seed from a single 32-bit value (the high half is zero).
    pub fn from_seed_u32(seed: u32) -> Pcg32 {
        Pcg32::new(0, seed)
    }

    /// Seed and stream selection. The low bit of the increment is forced on.
    pub fn with_stream(seed_hi: u32, seed_lo: u32, inc_hi: u32, inc_lo: u32) -> Pcg32 {
        Pcg32::seeded(join(seed_hi, seed_lo), join(inc_hi, inc_lo))
    }

    /// Non-reproducible generator, for sketches that don't care about replay.
    pub fn from_entropy_seed() -> Pcg32 {
        Pcg32::from_seed_u32(rand::random::<u32>())
    }

    fn seeded(seed: u64, increment: u64) -> Pcg32 {
        let mut pcg = Pcg32 {
            state: 0,
            increment: increment | 1,
        };
        pcg.step();
        pcg.state = pcg.state.wrapping_add(seed);
        pcg.step();
        pcg
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }

    /// Next uniformly distributed `u32`.
    pub fn next(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform float in `[0, 1)` with 53 bits of precision, from two draws.
    pub fn number(&mut self) -> f64 {
        let hi = f64::from(self.next() & 0x03ff_ffff);
        let lo = f64::from(self.next() & 0x07ff_ffff);
        (hi * BIT_27 + lo) / BIT_53
    }

    /// Uniform integer in `[0, bound)`, without modulo bias.
    ///
    /// A `bound` of zero yields a raw [`Pcg32::next`] draw.
    pub fn integer(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return self.next();
        }
        if bound & (bound - 1) == 0 {
            return self.next() & (bound - 1);
        }
        let skew = bound.wrapping_neg() % bound;
        let mut num = self.next();
        while num < skew {
            num = self.next();
        }
        num % bound
    }

    /// `[state_hi, state_lo, increment_hi, increment_lo]`
    pub fn get_state(&self) -> [u32; 4] {
        [
            (self.state >> 32) as u32,
            self.state as u32,
            (self.increment >> 32) as u32,
            self.increment as u32,
        ]
    }

    /// Restore a state captured with [`Pcg32::get_state`].
    pub fn set_state(&mut self, state: [u32; 4]) {
        self.state = join(state[0], state[1]);
        self.increment = join(state[2], state[3]) | 1;
    }
}

fn join(hi: u32, lo: u32) -> u64 {
    (u64::from(hi) << 32) | u64::from(lo)
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next());
        let hi = u64::from(self.next());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Pcg32::seed_from_u64(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Pcg32::seeded(state, DEFAULT_INCREMENT)
    }
}
