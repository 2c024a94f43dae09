use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Integer modulo a compile-time constant `M`.
///
/// Division and `inv` use Fermat's little theorem and therefore require
/// `M` to be prime; everything else works for any modulus `>= 2`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub struct ModInt<const M: u64> {
    value: u64,
}

impl<const M: u64> ModInt<M> {
    pub const fn new(value: u64) -> Self {
        Self { value: value % M }
    }

    pub const fn value(self) -> u64 {
        self.value
    }

    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self::new(1);
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse; `M` must be prime and `self` non-zero.
    pub fn inv(self) -> Self {
        debug_assert_ne!(self.value, 0, "zero has no inverse");
        self.pow(M - 2)
    }
}

impl<const M: u64> From<u64> for ModInt<M> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const M: u64> From<i64> for ModInt<M> {
    fn from(value: i64) -> Self {
        let m = M as i64;
        let mut v = value % m;
        if v < 0 {
            v += m;
        }
        Self { value: v as u64 }
    }
}

impl<const M: u64> Add for ModInt<M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut value = self.value + rhs.value;
        if value >= M {
            value -= M;
        }
        Self { value }
    }
}

impl<const M: u64> Sub for ModInt<M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let value = if self.value >= rhs.value {
            self.value - rhs.value
        } else {
            self.value + M - rhs.value
        };
        Self { value }
    }
}

impl<const M: u64> Mul for ModInt<M> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let value = (self.value as u128 * rhs.value as u128 % M as u128) as u64;
        Self { value }
    }
}

impl<const M: u64> Div for ModInt<M> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl<const M: u64> Neg for ModInt<M> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(0) - self
    }
}

impl<const M: u64> AddAssign for ModInt<M> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const M: u64> SubAssign for ModInt<M> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const M: u64> MulAssign for ModInt<M> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const M: u64> DivAssign for ModInt<M> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const M: u64> fmt::Display for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Precomputed factorials and inverse factorials for binomials in O(1).
#[derive(Clone, Debug)]
pub struct FactorialTable<const M: u64> {
    fact: Vec<ModInt<M>>,
    inv_fact: Vec<ModInt<M>>,
}

impl<const M: u64> FactorialTable<M> {
    /// Tables for arguments up to and including `max_n`, O(max_n).
    pub fn new(max_n: usize) -> Self {
        let mut fact = Vec::with_capacity(max_n + 1);
        fact.push(ModInt::new(1));
        for i in 1..=max_n {
            let prev = fact[i - 1];
            fact.push(prev * ModInt::new(i as u64));
        }

        // One inversion, then walk back down.
        let mut inv_fact = vec![ModInt::new(1); max_n + 1];
        inv_fact[max_n] = fact[max_n].inv();
        for i in (0..max_n).rev() {
            inv_fact[i] = inv_fact[i + 1] * ModInt::new(i as u64 + 1);
        }

        Self { fact, inv_fact }
    }

    pub fn factorial(&self, n: usize) -> ModInt<M> {
        self.fact[n]
    }

    /// `n choose k`; zero when `k > n`.
    pub fn binomial(&self, n: usize, k: usize) -> ModInt<M> {
        if k > n {
            return ModInt::new(0);
        }
        self.fact[n] * self.inv_fact[k] * self.inv_fact[n - k]
    }
}

#[cfg(test)]
mod tests {
    use super::{FactorialTable, ModInt};

    const MOD: u64 = 998_244_353;
    type Mint = ModInt<MOD>;

    #[test]
    fn arithmetic_wraps() {
        let a = Mint::new(MOD - 1);
        let b = Mint::new(2);
        assert_eq!((a + b).value(), 1);
        assert_eq!((b - a).value(), 3);
        assert_eq!((a * a).value(), 1); // (-1)^2
        assert_eq!(Mint::from(-3_i64).value(), MOD - 3);
        assert_eq!((-b).value(), MOD - 2);
    }

    #[test]
    fn pow_and_inverse() {
        let x = Mint::new(123_456_789);
        assert_eq!(x.pow(0).value(), 1);
        assert_eq!((x.inv() * x).value(), 1);
        assert_eq!((x / x).value(), 1);
        assert_eq!(Mint::new(2).pow(29).value(), 1 << 29);
    }

    #[test]
    fn binomials_match_pascal() {
        let table = FactorialTable::<MOD>::new(64);
        for n in 0..64_usize {
            assert_eq!(table.binomial(n, 0).value(), 1);
            assert_eq!(table.binomial(n, n).value(), 1);
            for k in 1..=n {
                // Pascal: C(n+1, k) = C(n, k-1) + C(n, k)
                assert_eq!(
                    table.binomial(n + 1, k),
                    table.binomial(n, k - 1) + table.binomial(n, k)
                );
            }
        }
        assert_eq!(table.binomial(10, 3).value(), 120);
        assert_eq!(table.binomial(3, 10).value(), 0);
    }

    #[test]
    fn factorials() {
        let table = FactorialTable::<MOD>::new(10);
        assert_eq!(table.factorial(0).value(), 1);
        assert_eq!(table.factorial(5).value(), 120);
        assert_eq!(table.factorial(10).value(), 3_628_800);
    }
}
