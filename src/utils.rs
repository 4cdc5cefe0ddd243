use std::{fs, io, path::Path};

use ordered_float::OrderedFloat;

pub fn create_folder_if_not_exists(dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();
    if dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

/// Mean divided by the sample standard deviation, 0 when there is no spread.
pub fn mean_over_std(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }

    let mean = data.iter().sum::<f64>() / data.len() as f64;
    let variance =
        data.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64;
    let std = variance.sqrt();

    if std > 0.0 {
        mean / std
    } else {
        0.0
    }
}

/// (min, max) over the finite values, if any
pub fn finite_range(data: &[f64]) -> Option<(f64, f64)> {
    let finite = data.iter().copied().filter(|value| value.is_finite());
    let min = finite.clone().map(OrderedFloat).min()?;
    let max = finite.map(OrderedFloat).max()?;
    Some((min.0, max.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_over_std_matches_sample_statistics() {
        // mean 2.5, sample std ~1.2910
        let ratio = mean_over_std(&[1.0, 2.0, 3.0, 4.0]);
        assert!((ratio - 2.5 / 1.290_994_448_735_805_6).abs() < 1e-9);
    }

    #[test]
    fn mean_over_std_is_zero_without_spread() {
        assert_eq!(mean_over_std(&[0.3, 0.3, 0.3]), 0.0);
        assert_eq!(mean_over_std(&[1.0]), 0.0);
        assert_eq!(mean_over_std(&[]), 0.0);
    }

    #[test]
    fn finite_range_skips_nan() {
        assert_eq!(finite_range(&[3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(finite_range(&[f64::NAN]), None);
        assert_eq!(finite_range(&[]), None);
    }
}
