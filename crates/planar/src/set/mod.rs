//! Mathematical sets of unique values.
//!
//! Purpose
//! - `Set<T>`: unique values with set algebra (union, difference,
//!   intersection, subset checks) and in-place editing (add, remove, keep).
//! - Presentation order is ascending for orderable element types and
//!   insertion order otherwise, decided per type through [`SetElement`].
//!
//! Storage is a plain `Vec` with uniqueness enforced through `PartialEq`, so
//! tolerant element equality (points, vectors) works without a hash.
//!
//! Code cross-refs: `numeric::{Numeric, Summable}`, `nested`

mod nested;
mod numeric;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

pub use numeric::{CheckedStep, Numeric, Summable};

use crate::geom2::{Circle, Line, Point, Vector};
use crate::interval::Interval;

/// Element types a [`Set`] can hold.
pub trait SetElement: PartialEq {
    /// Ordering used to keep the set sorted. `None` means unordered: the
    /// value is appended after existing elements.
    fn order(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}

impl SetElement for Point {}
impl SetElement for Vector {}
impl SetElement for Line {}
impl SetElement for Circle {}
impl SetElement for Interval {}
impl<T: SetElement> SetElement for Set<T> {}

impl SetElement for String {
    fn order(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl SetElement for &str {
    fn order(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl SetElement for char {
    fn order(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unordered collection of unique values.
#[derive(Clone, Debug)]
pub struct Set<T> {
    items: Vec<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Set<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The set without elements.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cardinality.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Same as [`Set::len`].
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Truthiness of a set: `true` iff it has elements.
    #[inline]
    pub fn is_non_empty(&self) -> bool {
        !self.items.is_empty()
    }

    /// Elements in presentation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: SetElement> Set<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.iter().any(|x| x == value)
    }

    /// Every element of `other` is in `self`.
    pub fn subset(&self, other: &Set<T>) -> bool {
        other.iter().all(|v| self.contains(v))
    }

    /// [`Set::subset`] plus a cardinality difference.
    ///
    /// This keeps the historical definition: the element check runs in the
    /// same direction as `subset` (`other ⊆ self`) and only requires the two
    /// counts to differ.
    pub fn proper_subset(&self, other: &Set<T>) -> bool {
        self.len() != other.len() && self.subset(other)
    }

    /// Insert `value` if absent; returns whether it was inserted.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        let at = self
            .items
            .iter()
            .position(|x| value.order(x) == Some(Ordering::Less))
            .unwrap_or(self.items.len());
        self.items.insert(at, value);
        true
    }

    /// Remove `value` if present; returns whether it was removed.
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.items.iter().position(|x| x == value) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    /// Insert every value not already present.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for v in values {
            self.insert(v);
        }
    }

    /// Remove every listed value that is present.
    pub fn remove_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for v in values {
            self.remove_value(&v);
        }
    }

    /// Retain only elements that also appear in `values`.
    pub fn keep<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let keep: Vec<T> = values.into_iter().collect();
        self.items.retain(|x| keep.contains(x));
    }
}

impl<T: SetElement + Clone> Set<T> {
    /// Elements of either set. Also callable as `Set::union(&a, &b)`.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let mut out = self.clone();
        out.add_all(other.iter().cloned());
        out
    }

    /// Elements of `self` not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        let mut out = self.clone();
        out.items.retain(|x| !other.contains(x));
        out
    }

    /// Elements of both sets.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let mut out = self.clone();
        out.items.retain(|x| other.contains(x));
        out
    }
}

/// Same cardinality and every element of one is found in the other.
impl<T: SetElement> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        for (i, v) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, " }}")
    }
}

impl<T: SetElement> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Set::new();
        out.add_all(iter);
        out
    }
}
impl<T: SetElement, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
impl<T: SetElement> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}
impl<T: SetElement> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// `set + value` inserts.
impl<T: SetElement> Add<T> for Set<T> {
    type Output = Set<T>;
    fn add(mut self, value: T) -> Set<T> {
        self.insert(value);
        self
    }
}
/// `&a + &b` is the union.
impl<T: SetElement + Clone> Add<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn add(self, other: &Set<T>) -> Set<T> {
        self.union(other)
    }
}
/// `set - value` removes.
impl<T: SetElement> Sub<T> for Set<T> {
    type Output = Set<T>;
    fn sub(mut self, value: T) -> Set<T> {
        self.remove_value(&value);
        self
    }
}
/// `&a - &b` is the difference.
impl<T: SetElement + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn sub(self, other: &Set<T>) -> Set<T> {
        self.difference(other)
    }
}
/// `&a * &b` is the intersection.
impl<T: SetElement + Clone> Mul<&Set<T>> for &Set<T> {
    type Output = Set<T>;
    fn mul(self, other: &Set<T>) -> Set<T> {
        self.intersection(other)
    }
}
