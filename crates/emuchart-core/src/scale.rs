// File: crates/emuchart-core/src/scale.rs
// Summary: "Nice number" axis range and tick computation.

/// An axis range with its tick positions, `min` and `max` aligned to the
/// tick step.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicks {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

/// Round to 10 decimal digits to shed binary-float artifacts in tick values.
fn round10(v: f64) -> f64 {
    (v * 1e10).round() / 1e10
}

/// Compute a nice axis covering `[min_value, max_value]` with roughly
/// `desired_count` ticks. Steps snap to 1/2/5/10 times a power of ten, so
/// ticks land on human-readable values.
///
/// Equal inputs are expanded symmetrically; non-finite inputs fail soft to
/// `[0, 1]`.
pub fn build_axis_ticks(min_value: f64, max_value: f64, desired_count: usize) -> AxisTicks {
    if !min_value.is_finite() || !max_value.is_finite() {
        return AxisTicks { min: 0.0, max: 1.0, ticks: vec![0.0, 1.0] };
    }

    let (mut min, mut max) = if min_value <= max_value {
        (min_value, max_value)
    } else {
        (max_value, min_value)
    };
    if min == max {
        let delta = if min == 0.0 { 1.0 } else { min.abs() * 0.2 };
        min -= delta;
        max += delta;
    }

    let raw_step = (max - min) / (desired_count.saturating_sub(1).max(1)) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let fraction = raw_step / magnitude;
    let snapped = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = snapped * magnitude;

    let nice_min = (min / step).floor() * step;
    let nice_max = (max / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut t = nice_min;
    // half-step epsilon tolerates accumulated float drift on the walk
    while t <= nice_max + step * 0.5 {
        ticks.push(round10(t));
        t += step;
    }

    AxisTicks { min: round10(nice_min), max: round10(nice_max), ticks }
}

/// Fixed `[0, max]` axis stepped by `step`, for metrics with a policy axis
/// rather than a data-derived one.
pub fn fixed_axis_ticks(max: f64, step: f64) -> AxisTicks {
    if !max.is_finite() || !step.is_finite() || max <= 0.0 || step <= 0.0 {
        return AxisTicks { min: 0.0, max: 1.0, ticks: vec![0.0, 1.0] };
    }
    let mut ticks = Vec::new();
    let mut t = 0.0;
    while t <= max + step * 0.5 {
        ticks.push(round10(t));
        t += step;
    }
    AxisTicks { min: 0.0, max, ticks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_axis_walks_inclusive() {
        let axis = fixed_axis_ticks(120.0, 40.0);
        assert_eq!(axis.ticks, vec![0.0, 40.0, 80.0, 120.0]);
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 120.0);
    }

    #[test]
    fn fixed_axis_rejects_bad_inputs() {
        assert_eq!(fixed_axis_ticks(f64::NAN, 40.0).ticks, vec![0.0, 1.0]);
        assert_eq!(fixed_axis_ticks(100.0, 0.0).ticks, vec![0.0, 1.0]);
    }
}
