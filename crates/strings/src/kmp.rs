/// Prefix function: `pi[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it. O(|pattern|).
pub fn prefix_function(pattern: &str) -> Vec<usize> {
    let s = pattern.as_bytes();
    let mut pi = vec![0_usize; s.len()];
    for i in 1..s.len() {
        let mut k = pi[i - 1];
        while k > 0 && s[i] != s[k] {
            k = pi[k - 1];
        }
        if s[i] == s[k] {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}

/// Byte offsets of every occurrence of `pattern` in `text`, ascending,
/// overlaps included. O(|text| + |pattern|). The empty pattern matches at
/// every offset `0..=text.len()`.
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    if p.is_empty() {
        return (0..=t.len()).collect();
    }

    let pi = prefix_function(pattern);
    let mut matches = Vec::new();
    let mut k = 0;
    for (i, &c) in t.iter().enumerate() {
        while k > 0 && c != p[k] {
            k = pi[k - 1];
        }
        if c == p[k] {
            k += 1;
        }
        if k == p.len() {
            matches.push(i + 1 - k);
            k = pi[k - 1];
        }
    }
    matches
}
