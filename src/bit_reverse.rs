//! Bit reversal permutation, the reordering that lets the iterative FFT run in place.
//!
//! Index `i` of an `N = 2^L` point signal trades places with the index whose `L`-bit binary
//! representation is that of `i` read backwards. Every pair is swapped exactly once, and indices
//! that are palindromes in binary stay put, so applying the permutation twice is the identity.

/// Reverses the lowest `bits` bits of `i`.
///
/// The bits are read from least to most significant and written from most to least.
#[inline]
pub const fn reverse_bits(mut i: usize, bits: usize) -> usize {
    let mut rev = 0;
    let mut b = 0;
    while b < bits {
        rev = (rev << 1) | (i & 1);
        i >>= 1;
        b += 1;
    }
    rev
}

/// In-place bit reversal permutation of `buf`, whose length must be `2^log_n`.
///
/// # Panics
///
/// Panics if `buf.len() != 1 << log_n`
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma", // x86_64-v3
    "x86_64+sse4.2", // x86_64-v2
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn bit_reverse_permutation<T>(buf: &mut [T], log_n: usize) {
    assert_eq!(buf.len(), 1 << log_n);

    for i in 0..buf.len() {
        let rev = reverse_bits(i, log_n);
        if i < rev {
            buf.swap(i, rev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Top down bit reverse interleaving. This is a very simple and well known approach that we
    /// only use for testing the in-place permutation.
    fn top_down_bit_reverse_permutation<T: Copy + Clone>(x: &[T]) -> Vec<T> {
        if x.len() == 1 {
            return x.to_vec();
        }

        let mut y = Vec::with_capacity(x.len());
        let mut evens = Vec::with_capacity(x.len() >> 1);
        let mut odds = Vec::with_capacity(x.len() >> 1);

        let mut i = 1;
        while i < x.len() {
            evens.push(x[i - 1]);
            odds.push(x[i]);
            i += 2;
        }

        y.extend_from_slice(&top_down_bit_reverse_permutation(&evens));
        y.extend_from_slice(&top_down_bit_reverse_permutation(&odds));
        y
    }

    #[test]
    fn reversed_indices() {
        assert_eq!(reverse_bits(0b001, 3), 0b100);
        assert_eq!(reverse_bits(0b110, 3), 0b011);
        assert_eq!(reverse_bits(0b101, 3), 0b101);
        assert_eq!(reverse_bits(1, 10), 512);
        assert_eq!(reverse_bits(5, 0), 0);
    }

    #[test]
    fn small_permutations() {
        let n = 3;
        let big_n = 1 << n;
        let mut buf: Vec<f64> = (0..big_n).map(f64::from).collect();
        bit_reverse_permutation(&mut buf, n);
        assert_eq!(buf, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);

        let n = 4;
        let big_n = 1 << n;
        let mut buf: Vec<f64> = (0..big_n).map(f64::from).collect();
        bit_reverse_permutation(&mut buf, n);
        assert_eq!(
            buf,
            vec![
                0.0, 8.0, 4.0, 12.0, 2.0, 10.0, 6.0, 14.0, 1.0, 9.0, 5.0, 13.0, 3.0, 11.0, 7.0,
                15.0,
            ]
        );
    }

    #[test]
    fn matches_top_down_interleaving() {
        for n in 0..16 {
            let big_n = 1 << n;
            let mut v: Vec<_> = (0..big_n).collect();
            bit_reverse_permutation(&mut v, n);

            let x: Vec<_> = (0..big_n).collect();
            assert_eq!(v, top_down_bit_reverse_permutation(&x));
        }
    }

    #[test]
    fn applying_twice_is_identity() {
        for n in 0..14 {
            let big_n = 1usize << n;
            let original: Vec<usize> = (0..big_n).collect();
            let mut v = original.clone();
            bit_reverse_permutation(&mut v, n);
            bit_reverse_permutation(&mut v, n);
            assert_eq!(v, original);
        }
    }

    #[test]
    #[should_panic]
    fn wrong_length_panics() {
        let mut v = vec![0u8; 6];
        bit_reverse_permutation(&mut v, 2);
    }
}
