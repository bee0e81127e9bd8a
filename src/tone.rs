//! Test-signal generation: silence and sine tones appended to a mono sample
//! buffer at a fixed sample rate. The buffer feeds straight into
//! [`crate::transform`] or [`crate::convolve_real`].

use alloc::vec::Vec;

use crate::num::Float;

/// Sample rate used by [`ToneBuffer::new`], in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Errors that can occur while configuring a [`ToneBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneError {
    /// A sample rate of zero would make every duration map to zero samples.
    InvalidSampleRate,
    /// The requested duration needs more samples than a buffer can hold.
    DurationTooLong,
}

impl core::fmt::Display for ToneError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ToneError::InvalidSampleRate => write!(f, "sample rate must be non-zero"),
            ToneError::DurationTooLong => write!(f, "duration exceeds buffer capacity"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ToneError {}

/// Growable mono buffer of `f64` samples in `[-volume, volume]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ToneBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl Default for ToneBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneBuffer {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    pub fn with_sample_rate(sample_rate: u32) -> Result<Self, ToneError> {
        if sample_rate == 0 {
            return Err(ToneError::InvalidSampleRate);
        }
        Ok(Self {
            samples: Vec::new(),
            sample_rate,
        })
    }

    /// Number of whole samples covering `duration_ms`. Negative and NaN
    /// durations yield zero.
    ///
    /// # Errors
    /// [`ToneError::DurationTooLong`] for an infinite duration or one whose
    /// sample count does not fit in `usize`.
    pub fn samples_for(&self, duration_ms: f64) -> Result<usize, ToneError> {
        let count = duration_ms * (f64::from(self.sample_rate) / 1000.0);
        if count.is_nan() || count <= 0.0 {
            return Ok(0);
        }
        // anything at or above usize::MAX saturates the cast
        if !count.is_finite() || count >= usize::MAX as f64 {
            return Err(ToneError::DurationTooLong);
        }
        // truncates toward zero
        Ok(count as usize)
    }

    /// Make room for `count` more samples, failing without touching the
    /// buffer if the total would overflow or cannot be allocated.
    fn reserve_samples(&mut self, count: usize) -> Result<(), ToneError> {
        self.samples
            .len()
            .checked_add(count)
            .ok_or(ToneError::DurationTooLong)?;
        self.samples
            .try_reserve(count)
            .map_err(|_| ToneError::DurationTooLong)
    }

    /// Append `duration_ms` of silence. Returns the number of samples added.
    pub fn append_silence(&mut self, duration_ms: f64) -> Result<usize, ToneError> {
        let count = self.samples_for(duration_ms)?;
        self.reserve_samples(count)?;
        self.samples.resize(self.samples.len() + count, 0.0);
        trace_log!("anyfft: appended {} samples of silence", count);
        Ok(count)
    }

    /// Append `volume · sin(2π·freq·i / rate)` for `duration_ms`. The phase
    /// restarts at zero on every call. Returns the number of samples added.
    pub fn append_sinewave(
        &mut self,
        freq: f64,
        duration_ms: f64,
        volume: f64,
    ) -> Result<usize, ToneError> {
        let count = self.samples_for(duration_ms)?;
        self.reserve_samples(count)?;
        let rate = f64::from(self.sample_rate);
        let two_pi = 2.0 * core::f64::consts::PI;
        for i in 0..count {
            let phase = two_pi * freq * i as f64 / rate;
            self.samples.push(volume * Float::sin(phase));
        }
        trace_log!("anyfft: appended {} Hz tone, {} samples", freq, count);
        Ok(count)
    }

    /// Append one full-volume tone per frequency, back to back. Returns the
    /// total number of samples added. Either every tone is appended or none.
    pub fn append_sinewaves(
        &mut self,
        freqs: &[f64],
        duration_ms: f64,
    ) -> Result<usize, ToneError> {
        let per_tone = self.samples_for(duration_ms)?;
        let total = per_tone
            .checked_mul(freqs.len())
            .ok_or(ToneError::DurationTooLong)?;
        self.reserve_samples(total)?;
        for &freq in freqs {
            self.append_sinewave(freq, duration_ms, 1.0)?;
        }
        debug_log!(
            "anyfft: appended {} tones, {} samples (nominal {})",
            freqs.len(),
            total,
            duration_ms * freqs.len() as f64 * f64::from(self.sample_rate) / 1000.0
        );
        Ok(total)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
