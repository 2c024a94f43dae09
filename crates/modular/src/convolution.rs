use crate::modint::ModInt;

/// NTT-friendly prime: `998244353 = 119 * 2^23 + 1`.
pub const NTT_MOD: u64 = 998_244_353;
const PRIMITIVE_ROOT: u64 = 3;
const TWO_ADICITY: u32 = 23;

type Mint = ModInt<NTT_MOD>;

/// Polynomial product of `a` and `b` with coefficients mod [`NTT_MOD`],
/// O((n + m) log(n + m)). The result has `a.len() + b.len() - 1`
/// coefficients (empty when either input is empty).
pub fn convolution(a: &[u64], b: &[u64]) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let result_len = a.len() + b.len() - 1;
    let size = result_len.next_power_of_two();
    assert!(
        size <= 1 << TWO_ADICITY,
        "convolution size exceeds the 2-adicity of the modulus"
    );

    let mut fa: Vec<Mint> = a.iter().map(|&x| Mint::new(x)).collect();
    let mut fb: Vec<Mint> = b.iter().map(|&x| Mint::new(x)).collect();
    fa.resize(size, Mint::new(0));
    fb.resize(size, Mint::new(0));

    ntt(&mut fa, false);
    ntt(&mut fb, false);
    for (x, y) in fa.iter_mut().zip(&fb) {
        *x *= *y;
    }
    ntt(&mut fa, true);

    fa.truncate(result_len);
    fa.into_iter().map(|x| x.value()).collect()
}

/// In-place iterative Cooley-Tukey transform over the NTT prime field.
/// `inverse` runs the inverse transform including the 1/n scaling.
fn ntt(values: &mut [Mint], inverse: bool) {
    let n = values.len();
    debug_assert!(n.is_power_of_two());
    if n == 1 {
        return;
    }

    // Bit-reversal permutation.
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            values.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        // Primitive len-th root of unity (inverted for the inverse pass).
        let mut w_len = Mint::new(PRIMITIVE_ROOT).pow((NTT_MOD - 1) / len as u64);
        if inverse {
            w_len = w_len.inv();
        }
        for start in (0..n).step_by(len) {
            let mut w = Mint::new(1);
            for i in start..start + len / 2 {
                let even = values[i];
                let odd = values[i + len / 2] * w;
                values[i] = even + odd;
                values[i + len / 2] = even - odd;
                w *= w_len;
            }
        }
        len <<= 1;
    }

    if inverse {
        let scale = Mint::new(n as u64).inv();
        for v in values.iter_mut() {
            *v *= scale;
        }
    }
}
