//! Mount-time "roll-up" animation for metric cards.
//!
//! Each card whose value starts with a number gets a plan: a short run of
//! noisy frames around the target followed by one frame with the exact
//! original string. Plans are generated up front so the runtime only has to
//! replay them on timers, and so tests can seed the RNG.

use mohan_types::MetricCard;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+").unwrap());

/// Parsed display value: `"14.2 Days"` → 14.2, one decimal, suffix `" Days"`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTarget {
    pub number: f64,
    pub decimals: usize,
    pub suffix: String,
    pub original: String,
}

impl MetricTarget {
    /// Format `value` with the target's precision and suffix.
    pub fn render(&self, value: f64) -> String {
        if self.decimals == 0 {
            format!("{}{}", value.round() as i64, self.suffix)
        } else {
            format!("{:.*}{}", self.decimals, value, self.suffix)
        }
    }
}

/// Returns `None` when the value has no usable leading number; such cards
/// are displayed as-is.
pub fn parse_metric_value(value: &str) -> Option<MetricTarget> {
    let prefix = NUMERIC_PREFIX.find(value)?.as_str();
    let number: f64 = prefix.parse().ok()?;
    let decimals = prefix
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0);

    Some(MetricTarget {
        number,
        decimals,
        suffix: value[prefix.len()..].to_string(),
        original: value.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub min_steps: u32,
    pub max_steps: u32,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    /// Noise amplitude as a share of the target.
    pub variance_ratio: f64,
    /// Lower bound on the noise amplitude so small targets still move.
    pub min_variance: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            min_steps: 18,
            max_steps: 27,
            min_interval_ms: 40,
            max_interval_ms: 80,
            variance_ratio: 0.3,
            min_variance: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    /// Wait before this frame is shown, measured from the previous frame.
    pub delay: Duration,
    pub text: String,
}

/// Frames for one display slot. The last frame always carries the exact target.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlan {
    pub slot: usize,
    pub frames: Vec<AnimationFrame>,
}

impl AnimationPlan {
    pub fn final_text(&self) -> Option<&str> {
        self.frames.last().map(|f| f.text.as_str())
    }

    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(|f| f.delay).sum()
    }
}

pub fn plan_metric<R: Rng + ?Sized>(
    slot: usize,
    value: &str,
    settings: &AnimationSettings,
    rng: &mut R,
) -> Option<AnimationPlan> {
    let target = parse_metric_value(value)?;

    let max_steps = settings.max_steps.max(settings.min_steps).max(1);
    let steps = rng.gen_range(settings.min_steps.max(1)..=max_steps) as usize;
    let max_interval = settings.max_interval_ms.max(settings.min_interval_ms);
    let variance = (target.number * settings.variance_ratio).max(settings.min_variance);

    let mut frames = Vec::with_capacity(steps);
    for step in 0..steps {
        let delay = Duration::from_millis(rng.gen_range(settings.min_interval_ms..=max_interval));
        let text = if step + 1 == steps {
            target.original.clone()
        } else {
            let noisy = (target.number + rng.gen_range(-1.0..=1.0) * variance).max(0.0);
            target.render(noisy)
        };
        frames.push(AnimationFrame { delay, text });
    }

    Some(AnimationPlan { slot, frames })
}

/// Plans for every animatable card; cards without a numeric prefix are skipped.
pub fn plan_metrics<R: Rng + ?Sized>(
    metrics: &[MetricCard],
    settings: &AnimationSettings,
    rng: &mut R,
) -> Vec<AnimationPlan> {
    metrics
        .iter()
        .enumerate()
        .filter_map(|(slot, metric)| plan_metric(slot, &metric.value, settings, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_decimal_value() {
        let target = parse_metric_value("14.2 Days").unwrap();
        assert_eq!(target.number, 14.2);
        assert_eq!(target.decimals, 1);
        assert_eq!(target.suffix, " Days");
        assert_eq!(target.render(9.96), "10.0 Days");
    }

    #[test]
    fn test_parse_integer_value() {
        let target = parse_metric_value("62%").unwrap();
        assert_eq!(target.number, 62.0);
        assert_eq!(target.decimals, 0);
        assert_eq!(target.render(58.6), "59%");
    }

    #[test]
    fn test_non_numeric_values_are_not_animated() {
        assert!(parse_metric_value("High Waste").is_none());
        assert!(parse_metric_value("").is_none());
        assert!(parse_metric_value(".").is_none());
        assert!(parse_metric_value("1.2.3 units").is_none());
    }

    #[test]
    fn test_plan_converges_to_exact_original() {
        let settings = AnimationSettings::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = plan_metric(0, "340 Hours", &settings, &mut rng).unwrap();
            assert!((18..=27).contains(&plan.frames.len()));
            assert_eq!(plan.final_text(), Some("340 Hours"));
        }
    }

    #[test]
    fn test_frames_respect_interval_and_variance() {
        let settings = AnimationSettings::default();
        let mut rng = StdRng::seed_from_u64(7);
        let plan = plan_metric(2, "14.2 Days", &settings, &mut rng).unwrap();
        assert_eq!(plan.slot, 2);

        for frame in &plan.frames {
            let ms = frame.delay.as_millis();
            assert!((40..=80).contains(&ms), "interval out of range: {ms}");

            let target = parse_metric_value(&frame.text).unwrap();
            assert_eq!(target.decimals, 1);
            assert_eq!(target.suffix, " Days");
            assert!((14.2 - target.number).abs() <= 14.2 * 0.3 + 0.05);
        }
    }

    #[test]
    fn test_small_targets_use_minimum_variance() {
        let settings = AnimationSettings::default();
        let mut rng = StdRng::seed_from_u64(3);
        let plan = plan_metric(0, "2x", &settings, &mut rng).unwrap();
        for frame in &plan.frames {
            let value = parse_metric_value(&frame.text).unwrap().number;
            assert!((1.0..=3.0).contains(&value), "noise exceeded ±1: {value}");
        }
    }

    #[test]
    fn test_plan_metrics_skips_non_numeric_cards() {
        let mut metrics = Catalog::builtin().manager_metrics;
        metrics[1].value = "n/a".to_string();

        let mut rng = StdRng::seed_from_u64(1);
        let plans = plan_metrics(&metrics, &AnimationSettings::default(), &mut rng);
        let slots: Vec<usize> = plans.iter().map(|p| p.slot).collect();
        assert_eq!(slots, vec![0, 2]);
    }

    #[test]
    fn test_same_seed_same_plan() {
        let settings = AnimationSettings::default();
        let a = plan_metric(0, "62%", &settings, &mut StdRng::seed_from_u64(42));
        let b = plan_metric(0, "62%", &settings, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
