//! Transient flash markers
//!
//! A flash is a short-lived visual acknowledgment attached to some UI key
//! (a button that was pressed, a badge whose value changed).  It carries
//! no data of its own: it is either running or gone.  The app asks
//! [`FlashSet::is_active`] or [`FlashSet::progress`] while painting and
//! feeds [`FlashSet::next_deadline`] to the repaint controller so the
//! marker disappears on time even when no input arrives.

use std::time::{Duration, Instant};

/// A single running flash.
#[derive(Debug, Clone)]
struct Flash<K> {
    key: K,
    started: Instant,
    duration: Duration,
}

impl<K> Flash<K> {
    fn deadline(&self) -> Instant {
        self.started + self.duration
    }

    /// Progress in `0.0..=1.0`.
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Set of running flashes, keyed by whatever identifies the flashing widget.
#[derive(Debug, Clone)]
pub struct FlashSet<K> {
    flashes: Vec<Flash<K>>,
}

impl<K> Default for FlashSet<K> {
    fn default() -> Self {
        Self { flashes: Vec::new() }
    }
}

impl<K: PartialEq> FlashSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the flash for `key`.
    pub fn trigger(&mut self, key: K, now: Instant, duration: Duration) {
        self.flashes.retain(|f| f.key != key);
        self.flashes.push(Flash { key, started: now, duration });
    }

    /// Drop every flash whose deadline has passed. Returns how many were removed.
    pub fn update(&mut self, now: Instant) -> usize {
        let before = self.flashes.len();
        self.flashes.retain(|f| f.deadline() > now);
        before - self.flashes.len()
    }

    pub fn is_active(&self, key: &K, now: Instant) -> bool {
        self.flashes
            .iter()
            .any(|f| &f.key == key && f.deadline() > now)
    }

    /// Eased progress of the flash for `key`, `None` when it is not running.
    pub fn progress(&self, key: &K, now: Instant) -> Option<f32> {
        self.flashes
            .iter()
            .find(|f| &f.key == key && f.deadline() > now)
            .map(|f| ease_out_quad(f.progress(now)))
    }

    /// Earliest pending deadline, for scheduling the repaint that clears it.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.flashes.iter().map(Flash::deadline).min()
    }

    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flashes.len()
    }
}

/// Linear interpolation between two values
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out function for smooth deceleration
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_380: Duration = Duration::from_millis(380);

    #[test]
    fn test_flash_expires_after_duration() {
        let t0 = Instant::now();
        let mut set = FlashSet::new();
        set.trigger("badge", t0, MS_380);

        assert!(set.is_active(&"badge", t0));
        assert!(set.is_active(&"badge", t0 + Duration::from_millis(379)));
        assert!(!set.is_active(&"badge", t0 + MS_380));

        assert_eq!(set.update(t0 + Duration::from_millis(100)), 0);
        assert_eq!(set.update(t0 + Duration::from_millis(400)), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn test_retrigger_restarts() {
        let t0 = Instant::now();
        let mut set = FlashSet::new();
        set.trigger(1u32, t0, MS_380);
        let t1 = t0 + Duration::from_millis(300);
        set.trigger(1u32, t1, MS_380);

        assert_eq!(set.len(), 1);
        assert!(set.is_active(&1, t0 + Duration::from_millis(500)));
        assert_eq!(set.next_deadline(), Some(t1 + MS_380));
    }

    #[test]
    fn test_next_deadline_is_earliest() {
        let t0 = Instant::now();
        let mut set = FlashSet::new();
        set.trigger('a', t0 + Duration::from_millis(50), MS_380);
        set.trigger('b', t0, MS_380);
        assert_eq!(set.next_deadline(), Some(t0 + MS_380));
        assert!(FlashSet::<char>::new().next_deadline().is_none());
    }

    #[test]
    fn test_progress_is_eased_and_bounded() {
        let t0 = Instant::now();
        let mut set = FlashSet::new();
        set.trigger(0u8, t0, Duration::from_millis(400));

        assert_eq!(set.progress(&0, t0), Some(0.0));
        let half = set.progress(&0, t0 + Duration::from_millis(200)).unwrap();
        assert!((half - 0.75).abs() < 1e-3);
        assert_eq!(set.progress(&0, t0 + Duration::from_millis(400)), None);
        assert_eq!(set.progress(&1, t0), None);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(1.0, 1.3, 0.0), 1.0);
        assert!((lerp(1.0, 1.3, 1.0) - 1.3).abs() < 1e-6);
    }
}
