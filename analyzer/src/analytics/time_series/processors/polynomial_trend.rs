use super::TimeSeriesProcessor;
use cwnd_report::time_series::{TimePoint, TimeSeries, TimeSeriesKind};
use tracing::warn;

const PIVOT_EPSILON: f64 = 1e-12;

/// Least-squares polynomial in a centered and scaled variable `u = (x - shift) / scale`,
/// which keeps the normal equations well conditioned for millisecond-sized inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit {
    /// Ascending powers of `u`.
    coefficients: Vec<f64>,
    shift: f64,
    scale: f64,
}

impl PolynomialFit {
    /// Fits a polynomial of `degree` through the points. Returns `None` when the
    /// points do not determine one, e.g. fewer distinct `x` than `degree + 1`.
    pub fn fit(xs: &[f64], ys: &[f64], degree: usize) -> Option<Self> {
        if xs.len() != ys.len() || xs.len() <= degree {
            return None;
        }

        let count = xs.len() as f64;
        let shift = xs.iter().sum::<f64>() / count;
        let spread = xs.iter().map(|x| (x - shift).abs()).fold(0.0, f64::max);
        let scale = if spread > 0.0 { spread } else { 1.0 };

        let size = degree + 1;
        // Power sums of u up to 2 * degree, and moments of y.
        let mut power_sums = vec![0.0; 2 * degree + 1];
        let mut moments = vec![0.0; size];
        for (x, y) in xs.iter().zip(ys) {
            let u = (x - shift) / scale;
            let mut power = 1.0;
            for (k, sum) in power_sums.iter_mut().enumerate() {
                *sum += power;
                if k < size {
                    moments[k] += y * power;
                }
                power *= u;
            }
        }

        let mut matrix: Vec<Vec<f64>> = (0..size)
            .map(|row| power_sums[row..row + size].to_vec())
            .collect();
        let coefficients = solve(&mut matrix, &mut moments)?;

        Some(Self {
            coefficients,
            shift,
            scale,
        })
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let u = (x - self.shift) / self.scale;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, coefficient| acc * u + coefficient)
    }
}

/// Gaussian elimination with partial pivoting; consumes the system.
fn solve(matrix: &mut [Vec<f64>], rhs: &mut [f64]) -> Option<Vec<f64>> {
    let size = rhs.len();
    for column in 0..size {
        let pivot = (column..size).max_by(|&a, &b| {
            matrix[a][column]
                .abs()
                .total_cmp(&matrix[b][column].abs())
        })?;
        if matrix[pivot][column].abs() < PIVOT_EPSILON {
            return None;
        }
        matrix.swap(column, pivot);
        rhs.swap(column, pivot);

        for row in column + 1..size {
            let factor = matrix[row][column] / matrix[column][column];
            if factor == 0.0 {
                continue;
            }
            for k in column..size {
                matrix[row][k] -= factor * matrix[column][k];
            }
            rhs[row] -= factor * rhs[column];
        }
    }

    let mut solution = vec![0.0; size];
    for row in (0..size).rev() {
        let tail: f64 = (row + 1..size)
            .map(|k| matrix[row][k] * solution[k])
            .sum();
        solution[row] = (rhs[row] - tail) / matrix[row][row];
    }
    Some(solution)
}

/// Replaces a series by its least-squares polynomial trend, evaluated at every sample time.
pub struct PolynomialTrendProcessor {
    degree: usize,
}

impl PolynomialTrendProcessor {
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }
}

impl TimeSeriesProcessor for PolynomialTrendProcessor {
    fn process(&self, data: &TimeSeries) -> TimeSeries {
        let xs: Vec<f64> = data.times().collect();
        let ys: Vec<f64> = data.values().collect();

        let Some(fit) = PolynomialFit::fit(&xs, &ys, self.degree) else {
            warn!(
                "Cannot fit a degree {} polynomial through {} points",
                self.degree,
                data.len()
            );
            return TimeSeries::new(Vec::new(), TimeSeriesKind::Trend);
        };

        let points = xs
            .iter()
            .map(|&x| TimePoint::new(x, fit.evaluate(x)))
            .collect();
        TimeSeries::new(points, TimeSeriesKind::Trend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn should_recover_exact_cubic() {
        let cubic = |x: f64| 2.0 - 3.0 * x + 0.5 * x * x + 0.25 * x * x * x;
        let xs: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| cubic(x)).collect();

        let fit = PolynomialFit::fit(&xs, &ys, 3).unwrap();

        assert_eq!(fit.coefficients.len(), 4);
        for x in [0.0, 1.3, 4.7, 9.5, 12.0] {
            assert_close(fit.evaluate(x), cubic(x));
        }
    }

    #[test]
    fn should_fit_line_through_noisy_points_by_least_squares() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 2.0, 4.0];

        let fit = PolynomialFit::fit(&xs, &ys, 1).unwrap();

        // slope 0.8, intercept 1.3
        assert_close(fit.evaluate(0.0), 1.3);
        assert_close(fit.evaluate(3.0), 3.7);
    }

    #[test]
    fn should_handle_large_time_offsets() {
        let xs: Vec<f64> = (0..50).map(|i| 1_000.0 + i as f64 * 40.0).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 0.001 * x * x).collect();

        let fit = PolynomialFit::fit(&xs, &ys, 3).unwrap();

        assert!((fit.evaluate(2_000.0) - 4_000.0).abs() < 1e-3);
    }

    #[test]
    fn should_refuse_underdetermined_fit() {
        assert!(PolynomialFit::fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 3).is_none());
        assert!(PolynomialFit::fit(&[1.0; 12], &[2.0; 12], 3).is_none());
    }

    #[test]
    fn processor_should_evaluate_at_every_sample_time() {
        let series = TimeSeries::new(
            (0..12)
                .map(|i| TimePoint::new(i as f64, (i * i) as f64))
                .collect(),
            TimeSeriesKind::CongestionWindow,
        );

        let trend = PolynomialTrendProcessor::new(3).process(&series);

        assert_eq!(trend.len(), series.len());
        assert_eq!(trend.kind, TimeSeriesKind::Trend);
        for (fitted, sample) in trend.points.iter().zip(&series.points) {
            assert_eq!(fitted.time_s, sample.time_s);
            assert_close(fitted.value, sample.value);
        }
    }
}
