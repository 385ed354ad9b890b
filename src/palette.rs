//! Per-chart color bookkeeping: one allocator, one color per series.

use indexmap::IndexMap;

use crate::allocator::{ColorAllocator, Swatch};

/// Assigns each series a color on first sight and returns the same color afterwards.
///
/// Series are kept in insertion order. Removing a series frees its entry but
/// does not rewind the allocator, so a later series never reuses a color
/// handed out earlier in the session.
#[derive(Debug, Clone)]
pub struct SeriesPalette {
    allocator: ColorAllocator,
    saturation: Option<f64>,
    value: Option<f64>,
    series: IndexMap<String, Swatch>,
    next_index: usize,
}

impl SeriesPalette {
    #[must_use]
    pub fn new(allocator: ColorAllocator) -> Self {
        Self::with_hsv(allocator, None, None)
    }

    #[must_use]
    pub fn with_hsv(allocator: ColorAllocator, saturation: Option<f64>, value: Option<f64>) -> Self {
        Self {
            allocator,
            saturation,
            value,
            series: IndexMap::new(),
            next_index: 0,
        }
    }

    /// Color for `series`, allocating one if the series is new.
    pub fn color_for(&mut self, series: &str) -> &Swatch {
        if !self.series.contains_key(series) {
            let mut swatch = self.allocator.next_swatch(self.saturation, self.value);
            swatch.index = self.next_index;
            self.next_index += 1;
            swatch.label = Some(series.to_string());
            self.series.insert(series.to_string(), swatch);
        }
        &self.series[series]
    }

    #[must_use]
    pub fn get(&self, series: &str) -> Option<&Swatch> {
        self.series.get(series)
    }

    /// Forget a series. Remaining series keep their colors, indices and order;
    /// the freed index is not reused.
    pub fn remove(&mut self, series: &str) -> Option<Swatch> {
        self.series.shift_remove(series)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Swatch)> {
        self.series.iter().map(|(name, swatch)| (name.as_str(), swatch))
    }

    /// Swatches in insertion order.
    #[must_use]
    pub fn swatches(&self) -> Vec<Swatch> {
        self.series.values().cloned().collect()
    }

    #[must_use]
    pub const fn allocator(&self) -> &ColorAllocator {
        &self.allocator
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
