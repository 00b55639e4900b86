//! Easing curves and keyframe sampling.

use std::time::Duration;

/// Fraction of `total` covered by `elapsed`, clamped to `[0, 1]`.
///
/// A zero-length window counts as complete.
pub fn progress(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}

/// Cubic ease-out: fast start, gentle stop. `p → 1 − (1 − p)³`.
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Samples evenly spaced keyframes at `t ∈ [0, 1]` with linear interpolation.
pub fn sample_keyframes(frames: &[f64], t: f64) -> f64 {
    match frames.len() {
        0 => 0.0,
        1 => frames[0],
        n => {
            let position = t.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = position.floor() as usize;
            if lower >= n - 1 {
                return frames[n - 1];
            }
            lerp(frames[lower], frames[lower + 1], position - lower as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_out_cubic(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn progress_clamps_and_handles_zero_windows() {
        let total = Duration::from_millis(400);
        assert!((progress(Duration::from_millis(100), total) - 0.25).abs() < 1e-12);
        assert_eq!(progress(Duration::from_millis(900), total), 1.0);
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn keyframes_interpolate_between_neighbours() {
        let frames = [0.0, 10.0, 0.0];
        assert_eq!(sample_keyframes(&frames, 0.0), 0.0);
        assert_eq!(sample_keyframes(&frames, 0.25), 5.0);
        assert_eq!(sample_keyframes(&frames, 0.5), 10.0);
        assert_eq!(sample_keyframes(&frames, 1.0), 0.0);
        assert_eq!(sample_keyframes(&[], 0.3), 0.0);
    }
}
