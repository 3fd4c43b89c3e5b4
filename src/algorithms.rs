use ncollide2d::na::RealField;

/// Finds the index of the last value in a sorted slice which is less than or equal to the test
/// value. Values before the start of the slice return 0 and values past the end return the last
/// index.
pub fn preceding_index_search<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    if slice.len() <= 1 || slice[1] > test_value {
        return 0;
    }

    let mut a = 1;
    let mut b = slice.len() - 1;
    if slice[b] <= test_value {
        return b;
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= slice[check] {
            a = check;
        } else {
            b = check;
        }
    }
    a
}

/// Finds the knot interval of a piecewise polynomial which should be used to evaluate it at the
/// test value.  The result is always a valid interval start, so values outside of the knot range
/// are assigned to the nearest terminal interval and extrapolated from it.
pub fn knot_interval(knots: &[f64], test_value: f64) -> usize {
    if knots.len() < 2 {
        return 0;
    }

    preceding_index_search(knots, test_value).min(knots.len() - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use test_case::test_case;

    fn naive(slice: &[f64], test_value: f64) -> usize {
        slice
            .iter()
            .rposition(|v| *v <= test_value)
            .unwrap_or(0)
    }

    #[test_case(0, -1.0)]
    #[test_case(0, 0.05)]
    #[test_case(1, 0.1)]
    #[test_case(2, 0.25)]
    #[test_case(4, 0.5)]
    fn test_preceding_index(e: usize, v: f64) {
        let test = [0.0, 0.1, 0.2, 0.3, 0.4];
        assert_eq!(e, preceding_index_search(&test, v));
    }

    #[test_case(0, -1.0)]
    #[test_case(0, 0.0)]
    #[test_case(2, 0.25)]
    #[test_case(3, 0.3)]
    #[test_case(3, 0.4)]
    #[test_case(3, 7.0)]
    fn test_knot_interval(e: usize, v: f64) {
        let knots = [0.0, 0.1, 0.2, 0.3, 0.4];
        assert_eq!(e, knot_interval(&knots, v));
    }

    #[test]
    fn test_knot_interval_degenerate() {
        assert_eq!(0, knot_interval(&[1.0], 5.0));
        assert_eq!(0, knot_interval(&[0.0, 1.0], 5.0));
    }

    #[test]
    fn test_binary_search_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let count: usize = rng.gen_range(2..200);
            let mut values: Vec<f64> = (0..count).map(|_| rng.gen_range(-10.0..10.0)).collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());

            for _ in 0..100 {
                let test = rng.gen_range(-11.0..11.0);
                assert_eq!(naive(&values, test), preceding_index_search(&values, test));
            }
        }
    }
}
