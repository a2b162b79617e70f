//! Demo data generation.

use barchart_ui::chart::{Bar, Dataset};
use rand::Rng;

const START_VALUE: u64 = 235;
const END_VALUE: u64 = 35;
/// Random bars take values in `0..RANDOM_VALUE_LIMIT`
const RANDOM_VALUE_LIMIT: u64 = 100;

/// Build a dataset of `count` bars: a fixed "Start" bar, `count - 2` random
/// columns and a fixed "End" bar. A count of one yields only "Start".
pub fn fill_chart_data<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Dataset {
    let mut bars = Vec::with_capacity(count.max(1));
    bars.push(Bar::new(START_VALUE, "Start"));
    if count > 1 {
        for i in 0..count - 2 {
            bars.push(Bar::new(
                rng.gen_range(0..RANDOM_VALUE_LIMIT),
                format!("Col {}", i + 1),
            ));
        }
        bars.push(Bar::new(END_VALUE, "End"));
    }
    Dataset::new(bars)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_single_column_is_start_only() {
        let ds = fill_chart_data(1, &mut StdRng::seed_from_u64(1));
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.get(0).map(Bar::label), Some("Start"));
        assert_eq!(ds.total(), 235);
    }

    #[test]
    fn test_two_columns_start_and_end() {
        let ds = fill_chart_data(2, &mut StdRng::seed_from_u64(1));
        let labels: Vec<_> = ds.iter().map(Bar::label).collect();
        assert_eq!(labels, ["Start", "End"]);
        assert_eq!(ds.total(), 270);
    }

    #[test]
    fn test_random_columns_in_range() {
        let ds = fill_chart_data(20, &mut StdRng::seed_from_u64(7));
        assert_eq!(ds.len(), 20);
        assert_eq!(ds.get(1).map(Bar::label), Some("Col 1"));
        assert_eq!(ds.get(18).map(Bar::label), Some("Col 18"));
        assert_eq!(ds.get(19).map(Bar::label), Some("End"));
        assert!(ds.bars()[1..19].iter().all(|b| b.value() < 100));
    }

    #[test]
    fn test_zero_count_still_has_start() {
        let ds = fill_chart_data(0, &mut StdRng::seed_from_u64(1));
        assert_eq!(ds.len(), 1);
    }
}
