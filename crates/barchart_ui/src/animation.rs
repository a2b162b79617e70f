//! Time-based value interpolation for bar fills.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use web_time::Instant;

use crate::constants::FILL_ANIMATION_MS;

/// Values closer than this to the target count as arrived.
const SETTLE_EPSILON: f32 = 1e-4;

/// Ease-out cubic: fast start, gentle landing. Monotonic on `[0, 1]`.
fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// A single animated scalar.
///
/// A tween moves from `from` to `to` over `duration`, starting at the moment of
/// the last [`retarget`](Tween::retarget). It only advances when asked, which
/// the toolkit does on every [`Event::Tick`](crate::Event::Tick).
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    current: f32,
    start: Option<Instant>,
    duration: Duration,
}

impl Tween {
    /// A settled tween resting at `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            from: initial,
            to: initial,
            current: initial,
            start: None,
            duration: Duration::from_millis(FILL_ANIMATION_MS),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Aim at a new target, restarting from the current value.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        if (target - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.current;
        self.to = target;
        self.start = Some(now);
    }

    /// Step to `now`. Returns `true` while still moving.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(start) = self.start else {
            return false;
        };

        let elapsed = now.saturating_duration_since(start);
        if self.duration.is_zero() || elapsed >= self.duration {
            self.current = self.to;
            self.start = None;
            return false;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.current = self.from + (self.to - self.from) * ease_out_cubic(t);
        if (self.current - self.to).abs() < SETTLE_EPSILON {
            self.current = self.to;
            self.start = None;
            return false;
        }
        true
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.start.is_none()
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Shared handle to one tween, owned by the host across view rebuilds.
#[derive(Debug, Clone, Default)]
pub struct FillAnimation {
    tween: Rc<RefCell<Tween>>,
}

impl FillAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.tween.borrow().value()
    }

    /// Retarget and advance in one step. Returns `true` while still moving.
    pub fn drive(&self, target: f32, now: Instant) -> bool {
        let mut tween = self.tween.borrow_mut();
        tween.retarget(target, now);
        tween.advance(now)
    }

    pub fn is_settled(&self) -> bool {
        self.tween.borrow().is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_settled() {
        let t = Tween::new(0.3);
        assert!(t.is_settled());
        assert_eq!(t.value(), 0.3);
    }

    #[test]
    fn test_tween_is_monotonic_and_settles() {
        let start = Instant::now();
        let mut t = Tween::new(0.0);
        t.retarget(1.0, start);

        let mut last = t.value();
        for step in 1..=70 {
            let moving = t.advance(start + Duration::from_millis(step * 10));
            assert!(t.value() >= last, "value went backwards at step {step}");
            last = t.value();
            if !moving {
                break;
            }
        }
        assert!(t.is_settled());
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn test_downward_tween_is_monotonic() {
        let start = Instant::now();
        let mut t = Tween::new(1.0);
        t.retarget(0.25, start);
        let mut last = t.value();
        for step in 1..=70 {
            t.advance(start + Duration::from_millis(step * 10));
            assert!(t.value() <= last);
            last = t.value();
        }
        assert_eq!(t.value(), 0.25);
    }

    #[test]
    fn test_retarget_same_target_keeps_start() {
        let start = Instant::now();
        let mut t = Tween::new(0.0);
        t.retarget(1.0, start);
        t.advance(start + Duration::from_millis(300));
        let mid = t.value();
        t.retarget(1.0, start + Duration::from_millis(300));
        t.advance(start + Duration::from_millis(300));
        assert_eq!(t.value(), mid);
        assert!(!t.advance(start + Duration::from_millis(600)));
    }

    #[test]
    fn test_retarget_midway_continues_from_current() {
        let start = Instant::now();
        let mut t = Tween::new(0.0);
        t.retarget(1.0, start);
        t.advance(start + Duration::from_millis(200));
        let mid = t.value();
        assert!(mid > 0.0 && mid < 1.0);

        let later = start + Duration::from_millis(200);
        t.retarget(0.0, later);
        t.advance(later);
        assert!((t.value() - mid).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let now = Instant::now();
        let mut t = Tween::new(0.0).with_duration(Duration::ZERO);
        t.retarget(0.5, now);
        assert!(!t.advance(now));
        assert_eq!(t.value(), 0.5);
    }

    #[test]
    fn test_fill_animation_shared_handle() {
        let now = Instant::now();
        let anim = FillAnimation::new();
        let clone = anim.clone();
        assert!(anim.drive(1.0, now));
        clone.drive(1.0, now + Duration::from_millis(FILL_ANIMATION_MS));
        assert_eq!(anim.value(), 1.0);
        assert!(anim.is_settled());
    }
}
