/// Z-array: `z[i]` is the length of the longest common prefix of `s` and
/// `s[i..]`, with `z[0] == s.len()`. O(|s|) total.
pub fn z_algorithm(s: &str) -> Vec<usize> {
    let s = s.as_bytes();
    let n = s.len();
    if n == 0 {
        return Vec::new();
    }

    let mut z = vec![0_usize; n];
    z[0] = n;
    let mut i = 1;
    let mut j = 0;
    while i < n {
        while i + j < n && s[j] == s[i + j] {
            j += 1;
        }
        z[i] = j;
        if j == 0 {
            i += 1;
            continue;
        }
        // Reuse previously computed values inside the matched block.
        let mut k = 1;
        while i + k < n && k + z[k] < j {
            z[i + k] = z[k];
            k += 1;
        }
        i += k;
        j -= k;
    }
    z
}
