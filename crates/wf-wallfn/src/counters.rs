//! Viscous-sublayer / log-layer face counters.
//!
//! Counters are owned by the caller: zeroed once per evaluation pass, bumped
//! by exactly one per evaluated face, then summed across mesh partitions for
//! the diagnostic report. The core never reads them back.

use crate::face::Regime;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::atomic::{AtomicU64, Ordering};

/// Plain per-partition tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegimeCounters {
    /// Faces in the viscous sublayer
    pub nsubla: u64,
    /// Faces in the log layer
    pub nlogla: u64,
}

impl RegimeCounters {
    pub fn record(&mut self, regime: Regime) {
        match regime {
            Regime::ViscousSublayer => self.nsubla += 1,
            Regime::LogLayer => self.nlogla += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.nsubla + self.nlogla
    }

    /// Sum over all partitions.
    pub fn reduce<R: PartitionReduce + ?Sized>(&self, reducer: &R) -> Self {
        Self {
            nsubla: reducer.sum_u64(self.nsubla),
            nlogla: reducer.sum_u64(self.nlogla),
        }
    }

    /// Report the counts; call on reduced counters.
    pub fn log_summary(&self, label: &str) {
        tracing::info!(
            label,
            nsubla = self.nsubla,
            nlogla = self.nlogla,
            total = self.total(),
            "wall function regime summary"
        );
    }
}

impl Add for RegimeCounters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            nsubla: self.nsubla + rhs.nsubla,
            nlogla: self.nlogla + rhs.nlogla,
        }
    }
}

impl AddAssign for RegimeCounters {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for RegimeCounters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Sum reduction across mesh partitions, provided by the parallel runtime.
pub trait PartitionReduce: Send + Sync {
    /// Global sum of a partition-local value; every partition gets the result.
    fn sum_u64(&self, local: u64) -> u64;
}

/// Single-partition runs: the local value is the global one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialReduce;

impl PartitionReduce for SerialReduce {
    fn sum_u64(&self, local: u64) -> u64 {
        local
    }
}

/// Lock-free counters for a face loop shared by several threads.
#[derive(Debug)]
pub struct AtomicRegimeCounters {
    nsubla: AtomicU64,
    nlogla: AtomicU64,
}

impl Default for AtomicRegimeCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicRegimeCounters {
    pub const fn new() -> Self {
        Self {
            nsubla: AtomicU64::new(0),
            nlogla: AtomicU64::new(0),
        }
    }

    pub fn record(&self, regime: Regime) {
        let counter = match regime {
            Regime::ViscousSublayer => &self.nsubla,
            Regime::LogLayer => &self.nlogla,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RegimeCounters {
        RegimeCounters {
            nsubla: self.nsubla.load(Ordering::Relaxed),
            nlogla: self.nlogla.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.nsubla.store(0, Ordering::Relaxed);
        self.nlogla.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    /// Every partition holds the same counts.
    struct Replicated(u64);

    impl PartitionReduce for Replicated {
        fn sum_u64(&self, local: u64) -> u64 {
            local * self.0
        }
    }

    #[test]
    fn record_and_sum() {
        let mut a = RegimeCounters::default();
        a.record(Regime::ViscousSublayer);
        a.record(Regime::LogLayer);
        a.record(Regime::LogLayer);
        assert_eq!(a, RegimeCounters { nsubla: 1, nlogla: 2 });

        let total: RegimeCounters = [a, a, RegimeCounters::default()].into_iter().sum();
        assert_eq!(total.total(), 6);

        let mut b = a;
        b += a;
        assert_eq!(b, a + a);
    }

    #[test]
    fn reduce_across_partitions() {
        let local = RegimeCounters { nsubla: 3, nlogla: 5 };
        assert_eq!(local.reduce(&SerialReduce), local);
        let global = local.reduce(&Replicated(4));
        assert_eq!(global, RegimeCounters { nsubla: 12, nlogla: 20 });
        let dyn_reducer: &dyn PartitionReduce = &SerialReduce;
        assert_eq!(local.reduce(dyn_reducer).total(), 8);
    }

    #[test]
    fn atomic_counters_from_threads() {
        let counters = AtomicRegimeCounters::new();
        (0..10_000_u32).into_par_iter().for_each(|i| {
            let regime = if i % 3 == 0 {
                Regime::ViscousSublayer
            } else {
                Regime::LogLayer
            };
            counters.record(regime);
        });
        let snap = counters.snapshot();
        assert_eq!(snap.total(), 10_000);
        assert_eq!(snap.nsubla, 3_334);

        counters.reset();
        assert_eq!(counters.snapshot(), RegimeCounters::default());
    }
}
