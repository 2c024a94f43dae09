mod convolution;
mod modint;
mod sieve;

pub use convolution::{NTT_MOD, convolution};
pub use modint::{FactorialTable, ModInt};
pub use sieve::{sieve_is_prime, sieve_primes};
