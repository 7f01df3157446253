//! A fluent, index-addressable ordered collection.
//!
//! [`Collection<T>`] wraps a `Vec<T>` and exposes construction, inspection and
//! transformation operations that chain. Chaining methods mutate the collection
//! **in place** and hand back `&mut Self`; they never allocate a new collection.
//! The only operations producing a fresh value are [`Collection::split`] and the
//! snapshot accessor [`Collection::to_array`].
//!
//! # Example
//!
//! ```
//! use fluent_collection_core::collection;
//!
//! let mut numbers = collection![1, 2, 4, 5];
//! numbers.add_at(3, 2)?.add(6).cull(|n| n % 2 == 0);
//!
//! assert_eq!(numbers.to_string(), "[2, 4, 6]");
//! # Ok::<(), fluent_collection_core::Error>(())
//! ```
//!
//! Every fallible operation is all-or-nothing: when it returns an [`Error`] the
//! elements are exactly what they were before the call.

use core::{fmt, iter, mem, slice};

use alloc::vec;

use crate::error::{Error, Result};
use crate::{Vec, format};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Collection<T> {
    elements: Vec<T>,
}

static_assertions::assert_eq_size!(Collection<u8>, Vec<u8>);
static_assertions::assert_impl_all!(Collection<u8>: Send, Sync, Clone, Default);

fn out_of_range(operation: &'static str, index: usize, len: usize) -> Error {
    tracing::debug!(operation, index, len, "index out of range");
    Error::IndexOutOfRange { index, len }
}

fn empty(operation: &'static str) -> Error {
    tracing::debug!(operation, "collection is empty");
    Error::EmptyCollection
}

// --- Construction ---

impl<T> Collection<T> {
    /// Create an empty collection.
    ///
    /// Use [`collection!`](crate::collection!) to create one from a list of elements.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_elements(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Replace the elements with the values yielded by `source`, in order.
    ///
    /// Keyed sources contribute their values only: pass `map.into_values()`
    /// rather than the map itself.
    pub fn from_array(&mut self, source: impl IntoIterator<Item = T>) -> &mut Self {
        self.elements = source.into_iter().collect();
        self
    }

    /// Replace the elements with `generator(0), generator(1), ..., generator(count - 1)`.
    ///
    /// The generator runs exactly `count` times, in ascending index order.
    pub fn generate(&mut self, count: usize, generator: impl FnMut(usize) -> T) -> &mut Self {
        self.elements = (0..count).map(generator).collect();
        self
    }

    /// Replace the elements with `count` clones of `value`.
    ///
    /// This is a plain [`Clone`], not a deep copy: filling with an `Rc<_>` yields
    /// `count` handles to the same allocation.
    pub fn fill(&mut self, count: usize, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.elements = vec![value; count];
        self
    }

    /// Replace the elements with `count` default values.
    pub fn fill_default(&mut self, count: usize) -> &mut Self
    where
        T: Default,
    {
        self.elements = iter::repeat_with(T::default).take(count).collect();
        self
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Inspection ---

impl<T> Collection<T> {
    /// Snapshot of the current elements.
    ///
    /// The returned vector is an independent copy; later mutation of the
    /// collection does not affect it.
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the last element, or `None` when the collection is empty.
    pub fn last_index(&self) -> Option<usize> {
        self.elements.len().checked_sub(1)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.elements
            .get(index)
            .ok_or_else(|| out_of_range("get", index, self.elements.len()))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or_else(|| out_of_range("get_mut", index, len))
    }

    pub fn first(&self) -> Result<&T> {
        self.elements.first().ok_or_else(|| empty("first"))
    }

    pub fn last(&self) -> Result<&T> {
        self.elements.last().ok_or_else(|| empty("last"))
    }
}

// --- Mutation ---

impl<T> Collection<T> {
    /// Append `element` at the end.
    pub fn add(&mut self, element: T) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Insert `element` at `index`, shifting everything after it one place right.
    ///
    /// `index` may equal [`count`](Self::count), which appends.
    pub fn add_at(&mut self, element: T, index: usize) -> Result<&mut Self> {
        let len = self.elements.len();
        if index > len {
            return Err(out_of_range("add_at", index, len));
        }
        self.elements.insert(index, element);
        Ok(self)
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<T> {
        self.elements.pop().ok_or_else(|| empty("pop"))
    }

    /// Remove and return the element at `index`, shifting everything after it one place left.
    pub fn pop_from(&mut self, index: usize) -> Result<T> {
        let len = self.elements.len();
        if index >= len {
            return Err(out_of_range("pop_from", index, len));
        }
        Ok(self.elements.remove(index))
    }
}

// --- Bulk transformation ---

impl<T> Collection<T> {
    /// Keep only the elements for which `predicate` holds.
    ///
    /// Each element is visited exactly once, front to back. Survivors keep their
    /// relative order.
    pub fn cull(&mut self, predicate: impl FnMut(&T) -> bool) -> &mut Self {
        self.elements.retain(predicate);
        self
    }

    /// Replace every element with `mapper(element)`, front to back.
    pub fn each(&mut self, mapper: impl FnMut(T) -> T) -> &mut Self {
        self.elements = mem::take(&mut self.elements)
            .into_iter()
            .map(mapper)
            .collect();
        self
    }

    /// Split after `index` into a new collection of two collections.
    ///
    /// The first half holds elements `0..=index` and the second half holds the
    /// rest, so both halves are non-empty. Fails with
    /// [`Error::IndexOutOfRange`] unless `index + 1 < count`.
    ///
    /// `self` is left unchanged; see [`into_split`](Self::into_split) to split
    /// without cloning.
    ///
    /// ```
    /// use fluent_collection_core::collection;
    ///
    /// let halves = collection![1, 2, 3, 4, 5, 6].split(2)?;
    /// assert_eq!(halves.to_string(), "[[1, 2, 3], [4, 5, 6]]");
    /// # Ok::<(), fluent_collection_core::Error>(())
    /// ```
    pub fn split(&self, index: usize) -> Result<Collection<Collection<T>>>
    where
        T: Clone,
    {
        let at = self.split_point("split", index)?;
        let (head, tail) = self.elements.split_at(at);
        Ok(Collection::from([
            Collection::from(head.to_vec()),
            Collection::from(tail.to_vec()),
        ]))
    }

    /// Consuming form of [`split`](Self::split).
    pub fn into_split(self, index: usize) -> Result<Collection<Collection<T>>> {
        let at = self.split_point("into_split", index)?;
        let mut head = self.elements;
        let tail = head.split_off(at);
        Ok(Collection::from([Collection::from(head), Collection::from(tail)]))
    }

    fn split_point(&self, operation: &'static str, index: usize) -> Result<usize> {
        let len = self.elements.len();
        if index >= len.saturating_sub(1) {
            return Err(out_of_range(operation, index, len));
        }
        Ok(index + 1)
    }

    /// Drop `left` elements from the front and `right` from the back.
    ///
    /// `count - left - right` elements remain. Fails with
    /// [`Error::InvalidArgument`] when `left + right` exceeds the count.
    pub fn trim(&mut self, left: usize, right: usize) -> Result<&mut Self> {
        let len = self.elements.len();
        let Some(keep) = left
            .checked_add(right)
            .and_then(|removed| len.checked_sub(removed))
        else {
            tracing::debug!(left, right, len, "trim exceeds collection length");
            return Err(Error::InvalidArgument(format!(
                "cannot trim {left} + {right} elements from a collection of length {len}"
            )));
        };
        self.elements.truncate(left + keep);
        self.elements.drain(..left);
        Ok(self)
    }
}

// --- Representation ---

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

// --- Conversions ---

impl<T> From<Vec<T>> for Collection<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: Vec::from(elements),
        }
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(collection: Collection<T>) -> Self {
        collection.elements
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_elements(iter)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
