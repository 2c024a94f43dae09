//! Classic string machinery: prefix-function matching, Z-array,
//! palindromic radii and a counting trie.

mod kmp;
mod manacher;
mod trie;
mod z_algorithm;

pub use kmp::{kmp_search, prefix_function};
pub use manacher::{manacher_even, manacher_odd};
pub use trie::Trie;
pub use z_algorithm::z_algorithm;
