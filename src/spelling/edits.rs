//! Single-edit neighborhood generation.
//!
//! A word is split at every char boundary (`len + 1` splits) and each split
//! yields the four edit families: delete, transpose, replace and insert.
//! Replace and insert draw from the lowercase ASCII alphabet only.

use std::collections::hash_set;
use std::slice;

use ahash::AHashSet;

/// Letters used by replace and insert edits.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// All strings exactly one delete, transpose, replace or insert away from `word`.
///
/// Duplicates produced by different split positions collapse into one entry.
/// The word itself can appear, e.g. when a letter is replaced by itself.
///
/// # Examples
///
/// ```
/// use autocorrect::spelling::edits1;
///
/// let edits = edits1("ab");
/// assert!(edits.contains("b"));   // delete
/// assert!(edits.contains("ba"));  // transpose
/// assert!(edits.contains("zb"));  // replace
/// assert!(edits.contains("abc")); // insert
/// ```
pub fn edits1(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = AHashSet::with_capacity(54 * len + 25);

    for i in 0..=len {
        let (left, right) = chars.split_at(i);

        if let Some((_, rest)) = right.split_first() {
            edits.insert(join(&[left, rest]));

            for letter in ALPHABET.chars() {
                edits.insert(join(&[left, slice::from_ref(&letter), rest]));
            }
        }

        if right.len() > 1 {
            let swapped = [right[1], right[0]];
            edits.insert(join(&[left, &swapped[..], &right[2..]]));
        }

        for letter in ALPHABET.chars() {
            edits.insert(join(&[left, slice::from_ref(&letter), right]));
        }
    }

    edits
}

/// All strings two edits away from `word`, produced lazily.
///
/// Equivalent to applying [`edits1`] to every element of `edits1(word)`. The
/// sequence may repeat strings and is never materialized as a whole; only the
/// current first-level neighbor's edits are held in memory.
pub fn edits2(word: &str) -> Edits2 {
    Edits2::new(word)
}

/// Lazy iterator over the two-edit neighborhood of a word.
#[derive(Debug)]
pub struct Edits2 {
    first: hash_set::IntoIter<String>,
    second: hash_set::IntoIter<String>,
}

impl Edits2 {
    /// Start enumerating the two-edit neighborhood of `word`.
    pub fn new(word: &str) -> Self {
        Edits2 {
            first: edits1(word).into_iter(),
            second: AHashSet::new().into_iter(),
        }
    }
}

impl Iterator for Edits2 {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edit) = self.second.next() {
                return Some(edit);
            }
            let neighbor = self.first.next()?;
            self.second = edits1(&neighbor).into_iter();
        }
    }
}

fn join(parts: &[&[char]]) -> String {
    parts.iter().flat_map(|part| part.iter()).collect()
}
