//! Integer-exact proportional allocation.
//!
//! Every split rounds each share down and hands the leftover cells out one at
//! a time to the earliest entries (in slice order) that still have room. The
//! result depends only on the inputs and their order.

/// Split `total` across entries in proportion to `ratios`, never giving an
/// entry more than `maximums[i]`.
///
/// Entries with a zero ratio get nothing. The shares sum to `total` unless
/// the caps of the eligible entries are smaller, in which case every
/// eligible entry ends up at its cap.
pub fn split(total: usize, ratios: &[usize], maximums: &[usize]) -> Vec<usize> {
    let n = ratios.len().min(maximums.len());
    let mut shares = vec![0usize; n];
    let mut remaining = total;

    loop {
        let open: Vec<usize> = (0..n)
            .filter(|&i| ratios[i] > 0 && shares[i] < maximums[i])
            .collect();
        if remaining == 0 || open.is_empty() {
            break;
        }

        let weight: usize = open.iter().map(|&i| ratios[i]).sum();
        let mut given = 0;
        for &i in &open {
            let share = (remaining as u128 * ratios[i] as u128 / weight as u128) as usize;
            let share = share.min(maximums[i] - shares[i]);
            shares[i] += share;
            given += share;
        }
        remaining -= given;

        for &i in &open {
            if remaining == 0 {
                break;
            }
            if shares[i] < maximums[i] {
                shares[i] += 1;
                remaining -= 1;
            }
        }
    }

    shares
}

/// Split `total` across entries in proportion to `ratios`, without caps.
pub fn distribute(total: usize, ratios: &[usize]) -> Vec<usize> {
    split(total, ratios, &vec![usize::MAX; ratios.len()])
}

/// Remove `total` from `values` in proportion to `ratios`, taking at most
/// `maximums[i]` from each entry and never going below zero.
pub fn reduce(total: usize, ratios: &[usize], maximums: &[usize], values: &[usize]) -> Vec<usize> {
    let caps: Vec<usize> = maximums
        .iter()
        .zip(values)
        .map(|(max, value)| (*max).min(*value))
        .collect();
    let cuts = split(total, ratios, &caps);
    values
        .iter()
        .enumerate()
        .map(|(i, value)| value - cuts.get(i).copied().unwrap_or(0))
        .collect()
}
