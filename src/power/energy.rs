//! Power statistics and energy estimation from sampled power logs.

/// Figures derived from one log's time and power samples
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PowerStats {
    pub avg_power_w: Option<f64>,
    pub duration_s: Option<f64>,
    pub energy_j: Option<f64>,
}

impl PowerStats {
    /// Derive average power, duration and energy from the collected samples.
    ///
    /// `times` and `powers` are collected independently, so they may differ
    /// in length; integration aligns them by position.
    pub fn from_samples(times: &[f64], powers: &[f64]) -> Self {
        let avg_power_w = mean(powers);
        let duration_s = duration(times);
        let energy_j = resolve_energy(integrate_rectangle(times, powers), avg_power_w, duration_s);

        Self {
            avg_power_w,
            duration_s,
            energy_j,
        }
    }
}

/// Arithmetic mean, absent for no samples
///
/// The sum is carried as a Neumaier high/low pair and the division is
/// corrected with the exact remainder, so `[0.1, 0.2, 0.3]` averages to `0.2`.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let n = samples.len() as f64;
    let (sum, compensation) = compensated_sum(samples);
    let quotient = sum / n;
    let remainder = (-quotient).mul_add(n, sum);

    Some(quotient + (remainder + compensation) / n)
}

/// Neumaier summation: the rounded sum and the error it dropped
fn compensated_sum(samples: &[f64]) -> (f64, f64) {
    samples
        .iter()
        .fold((0.0_f64, 0.0_f64), |(sum, compensation), &sample| {
            let total = sum + sample;
            let lost = if sum.abs() >= sample.abs() {
                (sum - total) + sample
            } else {
                (sample - total) + sum
            };
            (total, compensation + lost)
        })
}

/// Last minus first time sample, needs at least two samples
pub fn duration(times: &[f64]) -> Option<f64> {
    match (times.first(), times.last()) {
        (Some(first), Some(last)) if times.len() >= 2 => Some(last - first),
        _ => None,
    }
}

/// Rectangle-rule energy: Σ power[i] · (time[i] − time[i−1]) for i ≥ 1.
///
/// Both sequences are truncated to their common length. Intervals with a
/// non-positive time step contribute nothing. Needs two samples of each.
pub fn integrate_rectangle(times: &[f64], powers: &[f64]) -> Option<f64> {
    if times.len() < 2 || powers.len() < 2 {
        return None;
    }

    let n = times.len().min(powers.len());
    let energy = (1..n)
        .map(|i| {
            let dt = times[i] - times[i - 1];
            if dt > 0.0 { powers[i] * dt } else { 0.0 }
        })
        .sum::<f64>();

    Some(energy)
}

/// Prefer the integrated energy, else average power × duration
pub fn resolve_energy(
    integrated: Option<f64>,
    avg_power_w: Option<f64>,
    duration_s: Option<f64>,
) -> Option<f64> {
    integrated.or_else(|| match (avg_power_w, duration_s) {
        (Some(power), Some(duration)) => Some(power * duration),
        _ => None,
    })
}
