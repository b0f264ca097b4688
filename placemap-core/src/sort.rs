use std::cmp::Ordering;

use itertools::Itertools;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Locale and numeric aware comparison of labels.
///
/// Runs of ASCII digits are compared by their numeric value.
/// Words are compared by their base letters first, so accents
/// and case only decide between otherwise equal labels.
/// On such ties unaccented letters come first, then lowercase
/// ones. The raw strings keep the order total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    cmp_base(a, b)
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| uppercase(a).cmp(uppercase(b)))
        .then_with(|| a.cmp(b))
}

fn cmp_base(a: &str, b: &str) -> Ordering {
    let mut lhs = Chunks::new(a);
    let mut rhs = Chunks::new(b);
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = cmp_chunks(l, r);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn cmp_chunks(lhs: &str, rhs: &str) -> Ordering {
    match (is_number(lhs), is_number(rhs)) {
        (true, true) => cmp_numbers(lhs, rhs),
        // Numbers sort before words
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => base_letters(lhs).cmp(base_letters(rhs)),
    }
}

/// Lowercase letters without diacritics, e.g. `Ó` becomes `o`.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn uppercase(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn cmp_numbers(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

fn is_number(chunk: &str) -> bool {
    chunk.starts_with(|c: char| c.is_ascii_digit())
}

/// Splits a string into alternating runs of digits and non-digits.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    const fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

/// Distinct, non-empty labels in natural order.
pub fn distinct_sorted<'a>(labels: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    labels
        .into_iter()
        .flatten()
        .filter(|label| !label.is_empty())
        .unique()
        .sorted_by(|a, b| natural_cmp(a, b))
        .map(ToOwned::to_owned)
        .collect()
}
