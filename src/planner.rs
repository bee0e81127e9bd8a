//! Optional cache of trigonometric tables keyed by transform length.
//!
//! The free functions recompute their tables on every call. An
//! [`FftPlanner`] keeps them instead, so repeated transforms of the same
//! length skip the trigonometry. Outputs are bit-identical to the free
//! functions because the tables are built by the same code.

use alloc::sync::Arc;
use hashbrown::HashMap;

use crate::convolve;
use crate::fft::{self, FftError};
use crate::num::Float;
use crate::twiddle::{TableSource, TrigTable};

#[cfg(feature = "std")]
use std::sync::OnceLock;

/// Default number of distinct lengths cached per table kind.
pub const DEFAULT_MAX_CACHED_LENGTHS: usize = 64;

/// Environment variable overriding [`DEFAULT_MAX_CACHED_LENGTHS`].
pub const CACHE_LIMIT_ENV: &str = "ANYFFT_PLANNER_CACHE_LIMIT";

#[cfg(feature = "std")]
static ENV_CACHE_LIMIT: OnceLock<usize> = OnceLock::new();

#[cfg(feature = "std")]
fn env_cache_limit() -> usize {
    *ENV_CACHE_LIMIT.get_or_init(|| {
        std::env::var(CACHE_LIMIT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_CACHED_LENGTHS)
    })
}

/// Cache sizing for an [`FftPlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Distinct lengths kept per table kind before the cache is cleared.
    /// `0` disables caching.
    pub max_cached_lengths: usize,
}

impl PlannerConfig {
    pub const fn new(max_cached_lengths: usize) -> Self {
        Self { max_cached_lengths }
    }

    /// Recompute every table on every call.
    pub const fn uncached() -> Self {
        Self::new(0)
    }

    /// Default limit, overridden by `ANYFFT_PLANNER_CACHE_LIMIT` when set to
    /// a valid integer. The variable is read once per process.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        Self::new(env_cache_limit())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        #[cfg(feature = "std")]
        {
            Self::from_env()
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(DEFAULT_MAX_CACHED_LENGTHS)
        }
    }
}

type TableCache<T> = HashMap<usize, Arc<TrigTable<T>>>;

pub struct FftPlanner<T: Float> {
    config: PlannerConfig,
    radix2: TableCache<T>,
    chirp: TableCache<T>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            radix2: HashMap::new(),
            chirp: HashMap::new(),
        }
    }

    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    /// Number of cached `(radix-2, chirp)` tables.
    pub fn cached_lengths(&self) -> (usize, usize) {
        (self.radix2.len(), self.chirp.len())
    }

    pub fn clear(&mut self) {
        self.radix2.clear();
        self.chirp.clear();
    }

    /// Twiddle table for an `n`-point radix-2 transform.
    pub fn get_radix2_table(&mut self, n: usize) -> Arc<TrigTable<T>> {
        cached(&mut self.radix2, self.config.max_cached_lengths, n, TrigTable::radix2)
    }

    /// Chirp table for an `n`-point Bluestein transform.
    pub fn get_chirp_table(&mut self, n: usize) -> Arc<TrigTable<T>> {
        cached(&mut self.chirp, self.config.max_cached_lengths, n, TrigTable::chirp)
    }

    /// Cached counterpart of [`crate::transform`].
    pub fn transform(&mut self, real: &mut [T], imag: &mut [T]) -> Result<(), FftError> {
        fft::transform_with(self, real, imag)
    }

    /// Cached counterpart of [`crate::inverse_transform`] (unnormalized).
    pub fn inverse_transform(&mut self, real: &mut [T], imag: &mut [T]) -> Result<(), FftError> {
        fft::inverse_transform_with(self, real, imag)
    }

    /// Cached counterpart of [`crate::inverse_transform_normalized`].
    pub fn inverse_transform_normalized(
        &mut self,
        real: &mut [T],
        imag: &mut [T],
    ) -> Result<(), FftError> {
        fft::inverse_transform_normalized_with(self, real, imag)
    }

    /// Cached counterpart of [`crate::convolve_complex`].
    pub fn convolve_complex(
        &mut self,
        xreal: &[T],
        ximag: &[T],
        yreal: &[T],
        yimag: &[T],
        outreal: &mut [T],
        outimag: &mut [T],
    ) -> Result<(), FftError> {
        convolve::convolve_complex_with(self, xreal, ximag, yreal, yimag, outreal, outimag)
    }

    /// Cached counterpart of [`crate::convolve_real`].
    pub fn convolve_real(&mut self, x: &[T], y: &[T], out: &mut [T]) -> Result<(), FftError> {
        convolve::convolve_real_with(self, x, y, out)
    }
}

impl<T: Float> TableSource<T> for FftPlanner<T> {
    fn radix2_table(&mut self, n: usize) -> Arc<TrigTable<T>> {
        self.get_radix2_table(n)
    }

    fn chirp_table(&mut self, n: usize) -> Arc<TrigTable<T>> {
        self.get_chirp_table(n)
    }
}

fn cached<T: Float>(
    cache: &mut TableCache<T>,
    limit: usize,
    n: usize,
    build: fn(usize) -> TrigTable<T>,
) -> Arc<TrigTable<T>> {
    if limit == 0 {
        return Arc::new(build(n));
    }
    if let Some(table) = cache.get(&n) {
        trace_log!("anyfft: table cache hit, n = {}", n);
        return Arc::clone(table);
    }
    if cache.len() >= limit {
        debug_log!(
            "anyfft: table cache full ({} lengths), clearing before n = {}",
            cache.len(),
            n
        );
        cache.clear();
    }
    trace_log!("anyfft: table cache miss, n = {}", n);
    let table = Arc::new(build(n));
    cache.insert(n, Arc::clone(&table));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn repeated_requests_share_allocation() {
        let mut planner = FftPlanner::<f64>::with_config(PlannerConfig::new(8));
        let t1 = planner.get_radix2_table(16);
        let t2 = planner.get_radix2_table(16);
        assert!(Arc::ptr_eq(&t1, &t2));
        let c1 = planner.get_chirp_table(5);
        let c2 = planner.get_chirp_table(5);
        assert!(Arc::ptr_eq(&c1, &c2));
        assert_eq!(planner.cached_lengths(), (1, 1));
    }

    #[test]
    fn uncached_config_keeps_nothing() {
        let mut planner = FftPlanner::<f64>::with_config(PlannerConfig::uncached());
        let t1 = planner.get_radix2_table(16);
        let t2 = planner.get_radix2_table(16);
        assert!(!Arc::ptr_eq(&t1, &t2));
        assert_eq!(*t1, *t2);
        assert_eq!(planner.cached_lengths(), (0, 0));
    }

    #[test]
    fn full_cache_is_cleared_before_insert() {
        let mut planner = FftPlanner::<f64>::with_config(PlannerConfig::new(2));
        planner.get_radix2_table(2);
        planner.get_radix2_table(4);
        assert_eq!(planner.cached_lengths().0, 2);
        planner.get_radix2_table(8);
        assert_eq!(planner.cached_lengths().0, 1);
    }

    #[test]
    fn bluestein_populates_both_caches() {
        let mut planner = FftPlanner::<f64>::with_config(PlannerConfig::new(8));
        let mut re = vec![1.0, 2.0, 3.0];
        let mut im = vec![0.0; 3];
        planner.transform(&mut re, &mut im).unwrap();
        // chirp for n = 3, radix-2 twiddles for m = 8
        assert_eq!(planner.cached_lengths(), (1, 1));
        planner.clear();
        assert_eq!(planner.cached_lengths(), (0, 0));
    }
}
