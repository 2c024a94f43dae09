/// Primality table for `0..=n` by the sieve of Eratosthenes,
/// O(n log log n).
pub fn sieve_is_prime(n: usize) -> Vec<bool> {
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    if n >= 1 {
        is_prime[1] = false;
    }
    let mut i = 2;
    while i * i <= n {
        if is_prime[i] {
            let mut j = i * i;
            while j <= n {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }
    is_prime
}

/// All primes up to and including `n`, ascending.
pub fn sieve_primes(n: usize) -> Vec<usize> {
    sieve_is_prime(n)
        .into_iter()
        .enumerate()
        .filter_map(|(i, p)| p.then_some(i))
        .collect()
}
