//! Damped spring timing.
//!
//! Browsers have no native spring transition, so the spring is solved here
//! and handed to CSS as a sampled `linear()` easing plus a duration.

/// Longest time a spring is simulated before giving up on settling.
const MAX_SETTLE_SECS: f64 = 10.0;

/// Step used when scanning for the settle time (one 120Hz frame).
const SETTLE_STEP_SECS: f64 = 1.0 / 120.0;

/// A mass-spring-damper driven from rest at 0 toward 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Undamped angular frequency.
    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalized position at `t` seconds.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }

        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time in seconds after which the spring stays within `tolerance` of rest.
    pub fn settle_time(&self, tolerance: f64) -> f64 {
        let mut last_outside = 0.0;
        let mut t = 0.0;
        while t <= MAX_SETTLE_SECS {
            if (1.0 - self.position(t)).abs() >= tolerance {
                last_outside = t;
            }
            t += SETTLE_STEP_SECS;
        }
        (last_outside + SETTLE_STEP_SECS).min(MAX_SETTLE_SECS)
    }

    /// CSS `linear()` easing with `samples` evenly spaced stops over the
    /// settle time. The last stop is pinned to 1.
    pub fn css_easing(&self, samples: usize, tolerance: f64) -> String {
        let samples = samples.max(2);
        let duration = self.settle_time(tolerance);
        let last = samples - 1;

        let stops: Vec<String> = (0..samples)
            .map(|i| {
                if i == last {
                    return "1".to_string();
                }
                let t = duration * i as f64 / last as f64;
                trim_float(self.position(t))
            })
            .collect();

        format!("linear({})", stops.join(", "))
    }

    /// Settle time as a CSS duration, rounded to whole milliseconds.
    pub fn css_duration(&self, tolerance: f64) -> String {
        format!("{}ms", (self.settle_time(tolerance) * 1000.0).round() as u32)
    }
}

/// Four decimals without trailing zeros.
fn trim_float(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
