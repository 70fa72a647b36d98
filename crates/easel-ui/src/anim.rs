//! Frame-rate independent easing for hover and click feedback.

/// Moves `current` toward `target` by the fraction `1 - e^(-rate * dt_ms)`.
///
/// Converges at the same speed regardless of how `dt_ms` is split across
/// frames. The result is clamped to `[0, 1]`.
pub fn ease_toward(current: f64, target: f64, rate: f64, dt_ms: f64) -> f64 {
    let t = 1.0 - (-rate * dt_ms.max(0.0)).exp();
    (current + (target - current) * t).clamp(0.0, 1.0)
}

/// Intensity of the post-click flash: 1 at the click, fading quadratically to
/// 0 after `window_ms`. `None` (never clicked) is fully faded.
pub fn action_flash(elapsed_ms: Option<f64>, window_ms: f64) -> f64 {
    let Some(elapsed) = elapsed_ms else {
        return 0.0;
    };
    if window_ms <= 0.0 {
        return 0.0;
    }
    let k = 1.0 - elapsed.clamp(0.0, window_ms) / window_ms;
    k * k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_converges_monotonically_and_stays_bounded() {
        let mut v = 0.0;
        for _ in 0..200 {
            let next = ease_toward(v, 1.0, 0.012, 16.0);
            assert!(next >= v);
            assert!((0.0..=1.0).contains(&next));
            v = next;
        }
        assert!(v > 0.999);

        for _ in 0..200 {
            let next = ease_toward(v, 0.0, 0.012, 16.0);
            assert!(next <= v);
            assert!(next >= 0.0);
            v = next;
        }
        assert!(v < 0.001);
    }

    #[test]
    fn easing_is_frame_rate_independent() {
        let one_step = ease_toward(0.0, 1.0, 0.012, 32.0);
        let two_steps = ease_toward(ease_toward(0.0, 1.0, 0.012, 16.0), 1.0, 0.012, 16.0);
        assert!((one_step - two_steps).abs() < 1e-12);
        assert_eq!(ease_toward(0.3, 1.0, 0.012, 0.0), 0.3);
    }

    #[test]
    fn flash_decays_quadratically() {
        assert_eq!(action_flash(None, 500.0), 0.0);
        assert_eq!(action_flash(Some(0.0), 500.0), 1.0);
        assert!((action_flash(Some(250.0), 500.0) - 0.25).abs() < 1e-12);
        assert_eq!(action_flash(Some(500.0), 500.0), 0.0);
        assert_eq!(action_flash(Some(9000.0), 500.0), 0.0);
    }
}
