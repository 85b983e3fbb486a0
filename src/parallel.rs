//! Utilities for parallelism

/// Runs the two specified closures in parallel,
/// if and only if `parallel` is set to `true` and the `parallel` feature is enabled
#[allow(unused_variables)] // when `parallel` feature is disabled, the variable is ignored
pub(crate) fn run_maybe_in_parallel<A, B, RA, RB>(parallel: bool, oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            rayon::join(oper_a, oper_b)
        } else {
            (oper_a(), oper_b())
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        (oper_a(), oper_b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_closures_run() {
        for parallel in [false, true] {
            let mut left = vec![1, 2, 3];
            let mut right = vec![4, 5, 6];
            let (a, b) = run_maybe_in_parallel(
                parallel,
                || {
                    left.iter_mut().for_each(|x| *x *= 2);
                    left.iter().sum::<i32>()
                },
                || {
                    right.iter_mut().for_each(|x| *x += 1);
                    right.iter().sum::<i32>()
                },
            );
            assert_eq!((a, b), (12, 18));
        }
    }
}
