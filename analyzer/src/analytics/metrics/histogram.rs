use cwnd_report::histogram::{Histogram, HistogramBin};

/// Equal-width histogram over `[min, max]`, the last bin closed on both ends.
/// A constant series gets the range `[value - 0.5, value + 0.5]`.
pub fn from_values(values: &[f64], bins: usize) -> Histogram {
    let Some(first) = values.first() else {
        return Histogram::default();
    };
    if bins == 0 {
        return Histogram::default();
    }

    let (lo, hi) = values
        .iter()
        .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let (lo, hi) = if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0u64; bins];
    for value in values {
        let index = (((value - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i == bins - 1 {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count,
        })
        .collect();

    Histogram { bins }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_every_value_once() {
        let values: Vec<f64> = (1..=64).map(|v| v as f64).collect();
        let histogram = from_values(&values, 20);

        assert_eq!(histogram.bins.len(), 20);
        assert_eq!(histogram.total(), 64);
        assert_eq!(histogram.range(), Some((1.0, 64.0)));
    }

    #[test]
    fn max_value_should_land_in_last_bin() {
        let histogram = from_values(&[0.0, 5.0, 10.0], 2);

        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[1].count, 2);
    }

    #[test]
    fn constant_values_should_get_unit_range() {
        let histogram = from_values(&[3.0, 3.0, 3.0], 4);

        assert_eq!(histogram.range(), Some((2.5, 3.5)));
        assert_eq!(histogram.total(), 3);
        assert_eq!(histogram.max_count(), 3);
    }

    #[test]
    fn empty_input_gives_empty_histogram() {
        assert!(from_values(&[], 20).is_empty());
    }
}
