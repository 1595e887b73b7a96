// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use std::time::Duration;

/// One observable index change. The caller decides how to animate it; the
/// carousel only reports the discrete transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselAdvance {
    pub from: usize,
    pub to: usize,
}

/// An auto-advancing, circularly-indexed sequence. Ticks arrive from an
/// external scheduler; the carousel itself holds no clock. The index only
/// moves forward-circularly, and deactivation preserves it, so reactivation
/// resumes where the carousel left off rather than restarting.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    interval: Duration,
    index: usize,
    active: bool,
}

impl<T> Carousel<T> {
    /// Builds a carousel starting at index 0, active. A zero interval is a
    /// configuration error and fails here, never at tick time.
    pub fn new(items: Vec<T>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            bail!("carousel interval must be positive, got {interval:?}");
        }
        Ok(Self {
            items,
            interval,
            index: 0,
            active: true,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current index, or `None` for an empty carousel.
    pub fn index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Toggles tick responsiveness. The index is kept either way.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Advances on a scheduler tick. No-op (returning `None`) while
    /// inactive or with fewer than two items; otherwise moves to
    /// `(index + 1) % len` and reports the transition.
    pub fn tick(&mut self) -> Option<CarouselAdvance> {
        if !self.active || self.items.len() <= 1 {
            return None;
        }
        let from = self.index;
        self.index = (self.index + 1) % self.items.len();
        Some(CarouselAdvance {
            from,
            to: self.index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Carousel;
    use std::time::Duration;

    const INTERVAL: Duration = Duration::from_secs(4);

    #[test]
    fn zero_interval_is_rejected_at_construction() {
        let result = Carousel::new(vec![1, 2, 3], Duration::ZERO);
        assert!(result.is_err());
    }

    #[test]
    fn empty_carousel_ticks_are_noops() {
        let mut carousel: Carousel<i32> = Carousel::new(Vec::new(), INTERVAL).expect("carousel");
        assert_eq!(carousel.index(), None);
        for _ in 0..5 {
            assert!(carousel.tick().is_none());
        }
        assert_eq!(carousel.index(), None);
        assert!(carousel.current().is_none());
    }

    #[test]
    fn single_item_never_advances() {
        let mut carousel = Carousel::new(vec!["only"], INTERVAL).expect("carousel");
        for _ in 0..5 {
            assert!(carousel.tick().is_none());
        }
        assert_eq!(carousel.index(), Some(0));
    }

    #[test]
    fn five_ticks_over_three_items_land_on_index_two() {
        let mut carousel = Carousel::new(vec!["a", "b", "c"], INTERVAL).expect("carousel");
        for _ in 0..5 {
            carousel.tick();
        }
        assert_eq!(carousel.index(), Some(2));
        assert_eq!(carousel.current(), Some(&"c"));
    }

    #[test]
    fn advance_reports_from_and_to() {
        let mut carousel = Carousel::new(vec!["a", "b", "c"], INTERVAL).expect("carousel");
        let advance = carousel.tick().expect("active carousel should advance");
        assert_eq!(advance.from, 0);
        assert_eq!(advance.to, 1);

        carousel.tick();
        let wrapped = carousel.tick().expect("should wrap");
        assert_eq!(wrapped.from, 2);
        assert_eq!(wrapped.to, 0);
    }

    #[test]
    fn inactive_ticks_preserve_index_until_reactivated() {
        let mut carousel = Carousel::new(vec!["a", "b", "c"], INTERVAL).expect("carousel");
        carousel.tick();
        assert_eq!(carousel.index(), Some(1));

        carousel.set_active(false);
        for _ in 0..7 {
            assert!(carousel.tick().is_none());
        }
        assert_eq!(carousel.index(), Some(1));

        carousel.set_active(true);
        let advance = carousel.tick().expect("resumed carousel should advance");
        assert_eq!(advance.from, 1);
        assert_eq!(advance.to, 2);
    }
}
