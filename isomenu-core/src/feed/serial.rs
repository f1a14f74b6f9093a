//! Ordering of version serials.
//!
//! Serials in image streams are usually dates such as `20240201`, sometimes with a respin suffix such as
//! `20240201.1`. Comparing them as plain strings goes wrong as soon as two serials have a different number of
//! digits, so they are compared component wise instead.

use core::cmp::Ordering;

/// A version serial, ordered component wise on `.` boundaries.
///
/// Numeric components compare by value with any length and leading zeros, so `0010` and `10` are equal. A
/// numeric component sorts before a non-numeric one, and non-numeric components compare as strings. A serial that
/// is a prefix of another sorts first.
#[derive(Clone, Copy, Debug)]
pub struct Serial<'a>(pub &'a str);

impl Ord for Serial<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut lhs = self.0.split('.');
        let mut rhs = other.0.split('.');
        loop {
            match (lhs.next(), rhs.next()) {
                (Some(a), Some(b)) => match compare_component(a, b) {
                    Ordering::Equal => (),
                    ord => return ord,
                },
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (None, None) => return Ordering::Equal,
            }
        }
    }
}

impl PartialOrd for Serial<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Serial<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Serial<'_> {}

/// Checks if a serial component is made of ASCII digits only.
fn is_numeric(component: &str) -> bool {
    !component.is_empty() && component.bytes().all(|x| x.is_ascii_digit())
}

/// Compares a single component of two serials.
fn compare_component(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => {
            // compare by magnitude first so arbitrarily long numbers never overflow
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}
