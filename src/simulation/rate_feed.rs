//! Synthetic exchange-rate feed.
//!
//! Generates a fixed-length buffer of correlated rate observations from a
//! slow sine oscillation plus bounded uniform noise, then replays it as a
//! lazy, looping sequence. Mock data for testing — a production deployment
//! substitutes a real market-data client (CSV ingestion is the stated
//! replacement) behind the same [`RateSource`] trait.

use crate::core::currency::CurrencyPair;
use crate::core::rate::RateObservation;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use std::time::Duration as StdDuration;

/// A producer of timestamped rate observations.
///
/// The capability consuming components depend on: "produce the next
/// observation". Production code swaps the synthetic implementation for a
/// real feed without touching consumers.
pub trait RateSource {
    /// Produce the next observation. Generation cannot fail; a real feed
    /// implementation defines its own error and retry semantics.
    fn next_observation(&mut self) -> RateObservation;

    /// Restart the sequence from its first point.
    fn reset(&mut self);
}

/// Configuration for the synthetic rate curve.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Currency pair the feed quotes.
    pub pair: CurrencyPair,
    /// Center of the rate band.
    pub base_rate: f64,
    /// Amplitude of the slow sine oscillation.
    pub oscillation_amplitude: f64,
    /// Points per oscillation radian; larger means slower movement.
    pub oscillation_period: f64,
    /// Half-width of the uniform noise band added to each point.
    pub noise_amplitude: f64,
    /// Number of precomputed points before the feed loops.
    pub point_count: usize,
    /// Spacing between observation timestamps.
    pub point_spacing: Duration,
    /// How often the driver should emit a point.
    pub tick_interval: StdDuration,
    /// Timestamp of the first observation.
    pub start: DateTime<Utc>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            pair: CurrencyPair::usd_zar(),
            base_rate: 18.5,
            oscillation_amplitude: 0.5,
            oscillation_period: 5.0,
            noise_amplitude: 0.1,
            point_count: 30,
            point_spacing: Duration::days(1),
            tick_interval: StdDuration::from_secs(10),
            start: Utc::now(),
        }
    }
}

/// Looping replay of a precomputed synthetic rate curve.
///
/// Consecutive values are correlated (the sine base moves slowly), never
/// negative, and stay within `base ± (amplitude + noise)`. After the last
/// point the feed wraps back to the first. An optional observer is
/// notified with every emitted observation.
pub struct SyntheticRateFeed {
    config: FeedConfig,
    points: Vec<RateObservation>,
    cursor: usize,
    observer: Option<Box<dyn FnMut(&RateObservation)>>,
}

impl SyntheticRateFeed {
    /// Generate a feed using thread-local randomness for the noise.
    pub fn new(config: FeedConfig) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_rng(config, &mut rng)
    }

    /// Generate a feed from a caller-supplied RNG, for deterministic tests.
    pub fn with_rng<R: Rng>(config: FeedConfig, rng: &mut R) -> Self {
        assert!(config.point_count > 0, "Feed needs at least one point");
        let points = (0..config.point_count)
            .map(|i| {
                let oscillation =
                    (i as f64 / config.oscillation_period).sin() * config.oscillation_amplitude;
                let noise = if config.noise_amplitude > 0.0 {
                    rng.gen_range(-config.noise_amplitude..config.noise_amplitude)
                } else {
                    0.0
                };
                // Clamp strictly positive; observations reject zero rates.
                let rate_f64 = (config.base_rate + oscillation + noise).max(0.0001);
                let rate = Decimal::from_f64_retain(rate_f64)
                    .unwrap_or_else(|| Decimal::from(1))
                    .round_dp(6);
                let timestamp = config.start + config.point_spacing * i as i32;
                RateObservation::new(timestamp, rate)
            })
            .collect();

        Self {
            config,
            points,
            cursor: 0,
            observer: None,
        }
    }

    /// Register the observer invoked with every emitted observation,
    /// replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(&RateObservation) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// The precomputed curve in emission order.
    pub fn points(&self) -> &[RateObservation] {
        &self.points
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// The most recently emitted observation, if any tick has happened.
    pub fn latest(&self) -> Option<&RateObservation> {
        if self.cursor == 0 {
            None
        } else {
            self.points.get(self.cursor - 1)
        }
    }
}

impl RateSource for SyntheticRateFeed {
    fn next_observation(&mut self) -> RateObservation {
        // Wrap to the first point once the buffer is exhausted.
        if self.cursor >= self.points.len() {
            self.cursor = 0;
        }
        let observation = self.points[self.cursor].clone();
        self.cursor += 1;
        if let Some(observer) = &mut self.observer {
            observer(&observation);
        }
        observation
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
