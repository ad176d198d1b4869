// ─── Configuration ───────────────────────────────────────────────

/// Inner loop length; total work is `iterations × INNER_ITERATIONS`.
pub const INNER_ITERATIONS: u32 = 1_000;

// ─── Simulated CPU load ──────────────────────────────────────────

/// Sums `sqrt(i) * sin(j)` for every `i < iterations`, `j < 1000`.
///
/// Pure function: no shared state is touched, so any number of calls can
/// run in parallel. The loop order (outer `i`, inner `j`, left-to-right
/// accumulation) is part of the contract, since it fixes the rounding of
/// the returned total.
pub fn heavy_calculation(iterations: u32) -> f64 {
    let mut total = 0.0_f64;

    for i in 0..iterations {
        let root = f64::from(i).sqrt();
        for j in 0..INNER_ITERATIONS {
            total += root * f64::from(j).sin();
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_returns_zero() {
        assert_eq!(heavy_calculation(0), 0.0);
    }

    #[test]
    fn first_row_contributes_nothing() {
        // sqrt(0) == 0, so the whole i = 0 row adds zeros
        assert_eq!(heavy_calculation(1), 0.0);
    }

    #[test]
    fn two_iterations_sum_the_sine_row_in_order() {
        let mut expected = 0.0_f64;
        for j in 0..INNER_ITERATIONS {
            expected += 1.0_f64 * f64::from(j).sin();
        }

        assert_eq!(heavy_calculation(2).to_bits(), expected.to_bits());
    }

    #[test]
    fn result_is_bit_for_bit_deterministic() {
        let a = heavy_calculation(250);
        let b = heavy_calculation(250);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn parallel_runs_agree_with_a_serial_run() {
        let serial = heavy_calculation(100);

        let results: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| heavy_calculation(100)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for r in results {
            assert_eq!(r.to_bits(), serial.to_bits());
        }
    }
}
