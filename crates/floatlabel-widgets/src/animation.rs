//! Time-based linear interpolation for the floating label.
//!
//! [`Animated`] holds no clock. Every query takes the current [`Instant`], so
//! the widget decides when time advances (on frame-timer messages) and tests
//! can drive it with fixed instants.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Default duration of a label transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Values that can be linearly interpolated.
pub trait Lerp {
    /// The value `fraction` of the way from `self` to `target`, with
    /// `fraction` in `0.0..=1.0`.
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * f64::from(fraction)
    }
}

impl Lerp for u8 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        f32::from(*self)
            .lerp(&f32::from(*target), fraction)
            .round()
            .clamp(0.0, 255.0) as u8
    }
}

impl Lerp for Color {
    /// RGB colours blend per channel; any other pair switches halfway.
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        match (*self, *target) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
                r1.lerp(&r2, fraction),
                g1.lerp(&g2, fraction),
                b1.lerp(&b2, fraction),
            ),
            _ if fraction < 0.5 => *self,
            _ => *target,
        }
    }
}

/// Identifies one call to [`Animated::animate_to`].
///
/// A handle only cancels the animation it started; once a newer animation
/// replaces it, cancelling the old handle does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

#[derive(Debug, Clone)]
struct Transition<T> {
    from: T,
    start: Instant,
    duration: Duration,
    handle: AnimationHandle,
}

/// A value that moves linearly towards a target over time.
///
/// ```
/// use std::time::{Duration, Instant};
/// use floatlabel_widgets::animation::Animated;
///
/// let t0 = Instant::now();
/// let mut top = Animated::new(1.0_f32);
/// top.animate_to(0.0, Duration::from_millis(300), t0);
/// assert!((top.value(t0 + Duration::from_millis(150)) - 0.5).abs() < 1e-4);
/// assert!(!top.is_running(t0 + Duration::from_millis(300)));
/// ```
#[derive(Debug, Clone)]
pub struct Animated<T> {
    target: T,
    transition: Option<Transition<T>>,
    next_handle: u64,
}

impl<T: Lerp + Clone> Animated<T> {
    /// A value resting at `value`.
    pub fn new(value: T) -> Self {
        Self {
            target: value,
            transition: None,
            next_handle: 0,
        }
    }

    /// The value at `now`.
    pub fn value(&self, now: Instant) -> T {
        match &self.transition {
            Some(t) => t.from.lerp(&self.target, fraction(t.start, t.duration, now)),
            None => self.target.clone(),
        }
    }

    /// The value the animation is heading to, or resting at.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Whether a transition is still under way at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|t| now.saturating_duration_since(t.start) < t.duration)
    }

    /// Start moving towards `target`, beginning from wherever the value is at
    /// `now`. Replaces any transition in progress.
    pub fn animate_to(&mut self, target: T, duration: Duration, now: Instant) -> AnimationHandle {
        let from = self.value(now);
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        self.target = target;
        self.transition = Some(Transition {
            from,
            start: now,
            duration,
            handle,
        });
        handle
    }

    /// Stop the transition started with `handle`, leaving the value at its
    /// target. Returns `false` for a handle that is stale or already finished.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        match &self.transition {
            Some(t) if t.handle == handle => {
                self.transition = None;
                true
            }
            _ => false,
        }
    }

    /// Jump to `value` without animating.
    pub fn set(&mut self, value: T) {
        self.target = value;
        self.transition = None;
    }

    /// Forget a transition that has completed by `now`.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_running(now) {
            self.transition = None;
        }
    }
}

fn fraction(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Where and how the label is drawn.
///
/// `left` is measured in cells from the start of the text area and `top` in
/// rows from the top border, so `top == 0.0` sits on the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFrame {
    pub left: f32,
    pub top: f32,
    pub color: Color,
}

impl LabelFrame {
    /// Column offset rounded to a whole cell.
    pub fn column(&self) -> u16 {
        self.left.round().max(0.0) as u16
    }

    /// Row offset rounded to a whole cell.
    pub fn row(&self) -> u16 {
        self.top.round().max(0.0) as u16
    }
}

impl Lerp for LabelFrame {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            left: self.left.lerp(&target.left, fraction),
            top: self.top.lerp(&target.top, fraction),
            color: self.color.lerp(&target.color, fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn assert_near(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn resting_value_never_runs() {
        let t0 = Instant::now();
        let a = Animated::new(3.0_f32);
        assert_eq!(a.value(t0), 3.0);
        assert!(!a.is_running(t0));
    }

    #[test]
    fn interpolates_linearly() {
        let t0 = Instant::now();
        let mut a = Animated::new(0.0_f32);
        a.animate_to(10.0, ms(100), t0);
        assert_eq!(a.value(t0), 0.0);
        assert_near(a.value(t0 + ms(25)), 2.5);
        assert_eq!(a.value(t0 + ms(100)), 10.0);
        assert_eq!(a.value(t0 + ms(500)), 10.0);
        assert!(a.is_running(t0 + ms(99)));
        assert!(!a.is_running(t0 + ms(100)));
    }

    #[test]
    fn interrupted_animation_starts_from_current_value() {
        let t0 = Instant::now();
        let mut a = Animated::new(0.0_f32);
        a.animate_to(10.0, ms(100), t0);
        // Halfway there, reverse.
        a.animate_to(0.0, ms(100), t0 + ms(50));
        assert_near(a.value(t0 + ms(50)), 5.0);
        assert_near(a.value(t0 + ms(100)), 2.5);
        assert_eq!(a.value(t0 + ms(150)), 0.0);
    }

    #[test]
    fn cancel_only_matches_current_handle() {
        let t0 = Instant::now();
        let mut a = Animated::new(0.0_f32);
        let first = a.animate_to(1.0, MS_300, t0);
        let second = a.animate_to(2.0, MS_300, t0);
        assert!(!a.cancel(first));
        assert!(a.is_running(t0));
        assert!(a.cancel(second));
        assert!(!a.is_running(t0));
        assert_eq!(a.value(t0), 2.0);
        assert!(!a.cancel(second));
    }

    #[test]
    fn zero_duration_jumps() {
        let t0 = Instant::now();
        let mut a = Animated::new(0.0_f64);
        a.animate_to(4.0, Duration::ZERO, t0);
        assert_eq!(a.value(t0), 4.0);
        assert!(!a.is_running(t0));
    }

    #[test]
    fn set_and_settle() {
        let t0 = Instant::now();
        let mut a = Animated::new(0.0_f32);
        a.animate_to(1.0, MS_300, t0);
        a.settle(t0 + ms(10));
        assert!(a.is_running(t0 + ms(10)));
        a.settle(t0 + MS_300);
        assert!(!a.is_running(t0));
        a.set(7.0);
        assert_eq!(*a.target(), 7.0);
        assert_eq!(a.value(t0), 7.0);
    }

    #[test]
    fn rgb_colors_blend() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(black.lerp(&white, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(Color::Red.lerp(&Color::Blue, 0.4), Color::Red);
        assert_eq!(Color::Red.lerp(&Color::Blue, 0.6), Color::Blue);
    }

    #[test]
    fn label_frame_rounds_to_cells() {
        let down = LabelFrame {
            left: 0.0,
            top: 1.0,
            color: Color::Gray,
        };
        let up = LabelFrame {
            left: 1.0,
            top: 0.0,
            color: Color::Gray,
        };
        let mid = down.lerp(&up, 0.75);
        assert_eq!(mid.column(), 1);
        assert_eq!(mid.row(), 0);
        assert_eq!(down.lerp(&up, 0.25).row(), 1);
    }
}
