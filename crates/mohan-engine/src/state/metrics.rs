use mohan_types::MetricCard;
use serde::Serialize;

use crate::animation::parse_metric_value;

/// Per-card display strings written by animation frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct MetricDisplay {
    slots: Vec<String>,
    /// Frames tagged with any other generation are stale and dropped.
    generation: u64,
}

impl MetricDisplay {
    /// Final values, no animation pending.
    pub fn settled(metrics: &[MetricCard]) -> Self {
        Self {
            slots: metrics.iter().map(|m| m.value.clone()).collect(),
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Start a new animation run: animatable slots go blank until their
    /// first frame, the rest show their value as-is.
    pub fn begin(&mut self, metrics: &[MetricCard]) -> u64 {
        self.generation += 1;
        self.slots = metrics
            .iter()
            .map(|m| match parse_metric_value(&m.value) {
                Some(_) => String::new(),
                None => m.value.clone(),
            })
            .collect();
        self.generation
    }

    /// Invalidate in-flight frames without touching what is displayed.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Replace all slots with final values and invalidate in-flight frames.
    pub fn settle(&mut self, metrics: &[MetricCard]) {
        self.cancel();
        self.slots = metrics.iter().map(|m| m.value.clone()).collect();
    }

    /// Returns false when the frame was dropped.
    pub fn apply_frame(&mut self, generation: u64, slot: usize, text: String) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.slots.get_mut(slot) {
            Some(current) => {
                *current = text;
                true
            }
            None => false,
        }
    }

    pub fn text(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_begin_blanks_only_numeric_slots() {
        let mut metrics = Catalog::builtin().manager_metrics;
        metrics[2].value = "High Waste".to_string();

        let mut display = MetricDisplay::settled(&metrics);
        display.begin(&metrics);
        assert_eq!(display.slots(), &["", "", "High Waste"]);
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let metrics = Catalog::builtin().manager_metrics;
        let mut display = MetricDisplay::default();
        let generation = display.begin(&metrics);

        assert!(display.apply_frame(generation, 0, "13.9 Days".to_string()));
        display.cancel();
        assert!(!display.apply_frame(generation, 0, "99.9 Days".to_string()));
        assert_eq!(display.text(0), Some("13.9 Days"));
    }

    #[test]
    fn test_out_of_range_slot_is_dropped() {
        let metrics = Catalog::builtin().manager_metrics;
        let mut display = MetricDisplay::default();
        let generation = display.begin(&metrics);
        assert!(!display.apply_frame(generation, 10, "x".to_string()));
    }
}
