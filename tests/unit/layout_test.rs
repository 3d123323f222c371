//! Unit tests for ratio distribution and column widths

use tessera::layout::ratio;
use tessera::layout::{resolve_widths, ColumnConstraint, ColumnWidths};
use tessera::Measurement;

fn columns(widths: &[usize]) -> Vec<ColumnConstraint> {
    widths
        .iter()
        .map(|w| ColumnConstraint::new(Measurement::new(1, *w)))
        .collect()
}

#[test]
fn distribute_is_exact() {
    let shares = ratio::distribute(10, &[1, 1, 1]);
    assert_eq!(shares.iter().sum::<usize>(), 10);
    assert_eq!(shares, vec![4, 3, 3]);
    assert_eq!(ratio::distribute(7, &[1, 2]), vec![3, 4]);
}

#[test]
fn reduce_never_goes_negative() {
    let reduced = ratio::reduce(5, &[1, 1], &[2, 10], &[2, 10]);
    assert_eq!(reduced.iter().sum::<usize>(), 7);
    assert_eq!(reduced[0], 0);
}

#[test]
fn tied_columns_shrink_together() {
    let widths = resolve_widths(&columns(&[10, 10, 10]), 14, false);
    assert_eq!(widths, ColumnWidths::Fitted(vec![4, 5, 5]));
}

#[test]
fn tie_break_does_not_depend_on_content() {
    let forward = resolve_widths(&columns(&[12, 10, 10]), 20, false);
    let backward = resolve_widths(&columns(&[10, 10, 12]), 20, false);
    let mut a = forward.widths().unwrap().to_vec();
    let mut b = backward.widths().unwrap().to_vec();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
    assert_eq!(a.iter().sum::<usize>(), 20);
}

#[test]
fn fixed_width_columns_are_not_leveled() {
    let mut cols = columns(&[8, 20]);
    cols[0].width = Some(8);
    assert_eq!(
        resolve_widths(&cols, 18, false),
        ColumnWidths::Fitted(vec![8, 10])
    );
}

#[test]
fn zero_ratio_columns_do_not_expand() {
    let mut cols = columns(&[3, 3]);
    cols[0].ratio = 0;
    assert_eq!(
        resolve_widths(&cols, 10, true),
        ColumnWidths::Fitted(vec![3, 7])
    );
}

#[test]
fn collapsed_has_no_widths() {
    let layout = resolve_widths(&columns(&[4, 4]), 1, false);
    assert_eq!(layout, ColumnWidths::Collapsed);
    assert!(layout.widths().is_none());
}
