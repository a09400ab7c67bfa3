use crate::configs::analyzer::SimulatorConfig;
use cwnd_report::time_series::{TimePoint, TimeSeries, TimeSeriesKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Synthesizes an illustrative congestion window trace: multiplicative growth
/// below the threshold, additive growth above it, and random backoffs.
pub struct CongestionWindowSimulator {
    config: SimulatorConfig,
    rng: StdRng,
}

impl CongestionWindowSimulator {
    pub fn new(config: SimulatorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> TimeSeries {
        let config = &self.config;
        let mut window = config.initial_window;
        let mut threshold = config.slow_start_threshold;
        let mut points = Vec::with_capacity(config.points);

        for time_ms in evenly_spaced(config.start_ms, config.end_ms, config.points) {
            if window < threshold {
                window *= config.growth_factor;
            } else {
                window += config.additive_increase;
            }

            if self.rng.gen::<f64>() < config.loss_probability && window > config.loss_floor {
                window = (window * config.backoff_factor).max(config.min_window);
                threshold = window;
            }

            window = window.clamp(config.min_window, config.max_window);
            points.push(TimePoint::new(time_ms / 1000.0, window));
        }

        info!("Generated {} simulated window samples", points.len());
        TimeSeries::new(points, TimeSeriesKind::CongestionWindow)
    }
}

/// `count` values from `start` to `end`, both inclusive.
fn evenly_spaced(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| start + step * i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulate(seed: u64) -> TimeSeries {
        CongestionWindowSimulator::new(SimulatorConfig::default(), seed).generate()
    }

    #[test]
    fn should_generate_fixed_length_bounded_trace() {
        let series = simulate(7);

        assert_eq!(series.len(), 500);
        assert!(series.values().all(|v| (1.0..=64.0).contains(&v)));
        assert_eq!(series.points.first().unwrap().time_s, 1.0);
        assert!((series.points.last().unwrap().time_s - 20.0).abs() < 1e-9);
    }

    #[test]
    fn times_should_increase_monotonically() {
        let series = simulate(3);
        assert!(series.points.windows(2).all(|w| w[0].time_s < w[1].time_s));
    }

    #[test]
    fn same_seed_should_reproduce_trace() {
        assert_eq!(simulate(42), simulate(42));
    }

    #[test]
    fn should_grow_exponentially_then_linearly_without_losses() {
        let config = SimulatorConfig {
            loss_probability: 0.0,
            points: 20,
            ..Default::default()
        };
        let series = CongestionWindowSimulator::new(config, 1).generate();
        let values: Vec<f64> = series.values().collect();

        assert!((values[0] - 1.4).abs() < 1e-9);
        assert!((values[1] - 1.96).abs() < 1e-9);
        let first_linear = values.iter().position(|v| *v >= 16.0).unwrap();
        let step = values[first_linear + 1] - values[first_linear];
        assert!((step - 0.8).abs() < 1e-9);
    }

    #[test]
    fn should_back_off_on_certain_loss() {
        let config = SimulatorConfig {
            loss_probability: 1.0,
            points: 50,
            ..Default::default()
        };
        let series = CongestionWindowSimulator::new(config, 1).generate();

        assert!(series.values().all(|v| v <= 64.0));
        assert!(series
            .points
            .windows(2)
            .any(|w| w[1].value < w[0].value));
    }

    #[test]
    fn single_point_span_should_start_at_start() {
        let times: Vec<f64> = evenly_spaced(5.0, 10.0, 1).collect();
        assert_eq!(times, vec![5.0]);
        let times: Vec<f64> = evenly_spaced(0.0, 10.0, 3).collect();
        assert_eq!(times, vec![0.0, 5.0, 10.0]);
    }
}
