/// Manacher radii for odd-length palindromes: `r[i]` counts the characters
/// from center `i` to either edge, center included, so the palindrome has
/// length `2 * r[i] - 1`. O(|s|) total.
pub fn manacher_odd(s: &str) -> Vec<usize> {
    manacher_core(s.as_bytes())
}

/// Radii for even-length palindromes: `r[i]` is the number of characters
/// on each side of the gap between positions `i` and `i + 1` (so the
/// palindrome has length `2 * r[i]`). Output length is `s.len() - 1`,
/// empty for the empty string.
pub fn manacher_even(s: &str) -> Vec<usize> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return Vec::new();
    }
    // Interleave with gap markers; `None` never equals a real byte, so no
    // sentinel can collide with input.
    let mut interleaved = Vec::with_capacity(2 * bytes.len() - 1);
    for (i, &b) in bytes.iter().enumerate() {
        interleaved.push(Some(b));
        if i + 1 < bytes.len() {
            interleaved.push(None);
        }
    }
    let radii = manacher_core(&interleaved);
    radii.iter().skip(1).step_by(2).map(|r| r / 2).collect()
}

fn manacher_core<T: Eq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut radii = vec![0_usize; n];
    let mut i = 0;
    let mut j = 0;
    while i < n {
        while i >= j && i + j < n && s[i - j] == s[i + j] {
            j += 1;
        }
        radii[i] = j;
        let mut k = 1;
        while i >= k && k + radii[i - k] < j {
            radii[i + k] = radii[i - k];
            k += 1;
        }
        i += k;
        j -= k;
    }
    radii
}
