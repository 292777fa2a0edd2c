use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_BASE_DELAY_MS: u32 = 1000;
pub const DEFAULT_JITTER_MS: u32 = 1000;

/// Browsers treat longer `setTimeout` delays as overflowed and fire right away.
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

/// Delay between two moves, uniform over `[base_ms, base_ms + jitter_ms)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub base_ms: u32,
    pub jitter_ms: u32,
}

impl DelayRange {
    pub const fn new(base_ms: u32, jitter_ms: u32) -> Self {
        Self { base_ms, jitter_ms }
    }

    /// Largest delay that can be sampled.
    pub const fn max_ms(self) -> u32 {
        let max = self.base_ms.saturating_add(self.jitter_ms.saturating_sub(1));
        if max > MAX_DELAY_MS {
            MAX_DELAY_MS
        } else {
            max
        }
    }

    pub fn sample(self, random: &mut impl RandomSource) -> u32 {
        self.delay_for(random.next_unit())
    }

    pub fn delay_for(self, unit: f64) -> u32 {
        let offset = match self.jitter_ms {
            0 => 0,
            jitter_ms => pick_index(jitter_ms as usize, unit) as u32,
        };
        self.base_ms.saturating_add(offset).min(MAX_DELAY_MS)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DELAY_MS, DEFAULT_JITTER_MS)
    }
}
