use super::*;

#[test]
fn test_histogram_last_bin_closed() {
    let values: Vec<f64> = (0..=10).map(|v| v as f64).collect();
    let hist = histogram(&values, 5);
    assert_eq!(hist.edges, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(hist.counts, vec![2, 2, 2, 2, 3]);
    assert_eq!(hist.bin_width(), 2.0);
}

#[test]
fn test_histogram_counts_every_value() {
    let values: Vec<f64> = (0..137).map(|i| (i as f64 * 0.731).sin() * 40.0 + 50.0).collect();
    let hist = histogram(&values, 20);
    assert_eq!(hist.counts.len(), 20);
    assert_eq!(hist.edges.len(), 21);
    assert_eq!(hist.counts.iter().sum::<usize>(), values.len());
}

#[test]
fn test_histogram_degenerate_inputs() {
    let empty = histogram(&[], 20);
    assert_eq!(empty.edges[0], 0.0);
    assert!((empty.edges[20] - 1.0).abs() < 1e-12);
    assert!(empty.counts.iter().all(|&c| c == 0));

    let single = histogram(&[5.0, 5.0], 20);
    assert_eq!(single.edges[0], 4.5);
    assert_eq!(single.counts.iter().sum::<usize>(), 2);
}

#[test]
fn test_kde_peaks_at_center_of_symmetric_data() {
    let values = vec![40.0, 45.0, 50.0, 50.0, 55.0, 60.0];
    let curve = kde_curve(&values, 1.0, 101);
    assert_eq!(curve.len(), 101);
    assert_eq!(curve[0].0, 40.0);
    assert_eq!(curve[100].0, 60.0);
    let (peak_x, _) = curve
        .iter()
        .copied()
        .fold((0.0, f64::NEG_INFINITY), |acc, p| if p.1 > acc.1 { p } else { acc });
    assert!((peak_x - 50.0).abs() < 1e-9);
    assert!((curve[10].1 - curve[90].1).abs() < 1e-9);
}

#[test]
fn test_kde_skipped_without_spread() {
    assert!(kde_curve(&[3.0, 3.0, 3.0], 1.0, 50).is_empty());
    assert!(kde_curve(&[3.0], 1.0, 50).is_empty());
}
