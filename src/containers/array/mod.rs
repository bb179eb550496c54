//! Array: exact-size sequence container with value semantics
//!
//! `Array<T>` never keeps spare capacity. Every operation that changes the
//! number of elements allocates a fresh buffer of exactly the new size, moves
//! the surviving elements into it and drops the old one. An empty array owns
//! no buffer at all.
//!
//! Two kinds of API are offered:
//!
//! - **Named operations** (`insert_at`, `remove_first`, `first`, `get`, ...)
//!   recover from bad input locally. The array is left unmodified, the error
//!   is logged and also returned so the caller can inspect it.
//! - **Indexing** (`array[i]`) is for trusted callers. An invalid index is a
//!   hard failure and panics.

use crate::error::{recovered, ArrayError, Result};
use std::fmt;
use std::io::{self, Write};
use std::ops::{Index, IndexMut};

mod concat;
mod mutate;
mod order;

pub use order::{FilterOp, SortOrder};

/// Exact-size, deep-copied sequence container
///
/// # Examples
///
/// ```rust
/// use exactvec::Array;
///
/// let mut array = Array::new();
/// array.append(42);
/// array.append(84);
/// assert_eq!(array.count(), 2);
/// assert_eq!(array[0], 42);
/// assert_eq!(array.capacity(), 2);
/// ```
pub struct Array<T> {
    buffer: Option<Box<[T]>>,
    len: usize,
    empty: bool,
}

impl<T> Array<T> {
    /// Create a new empty array with no buffer
    #[inline]
    pub fn new() -> Self {
        Self {
            buffer: None,
            len: 0,
            empty: true,
        }
    }

    /// Create an array of `len` default-valued elements
    ///
    /// A length of zero or less is rejected with [`ArrayError::InvalidLength`].
    /// The fallback for that case is the empty array:
    ///
    /// ```rust
    /// use exactvec::Array;
    ///
    /// let array: Array<i32> = Array::with_len(-1).unwrap_or_default();
    /// assert!(array.is_empty());
    /// ```
    pub fn with_len(len: isize) -> Result<Self>
    where
        T: Default,
    {
        if len <= 0 {
            return Err(recovered("with_len", ArrayError::invalid_length(len)));
        }
        let len = len as usize;
        let mut elements = Vec::with_capacity(len);
        elements.resize_with(len, T::default);
        Ok(Self::from_exact(elements))
    }

    fn from_exact(elements: Vec<T>) -> Self {
        let mut array = Self::new();
        array.install(elements);
        array
    }

    /// Number of elements
    #[inline]
    pub fn count(&self) -> usize {
        self.len
    }

    /// Number of elements, same as [`count`](Self::count)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Size of the owned buffer. Always equal to [`len`](Self::len).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, |buffer| buffer.len())
    }

    /// Check if a buffer is currently allocated
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.buffer.is_some()
    }

    /// Get the array as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.buffer {
            Some(buffer) => &buffer[..],
            None => &[],
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.buffer {
            Some(buffer) => &mut buffer[..],
            None => &mut [],
        }
    }

    /// Replace the buffer with `elements`, which must already be exact-size.
    fn install(&mut self, elements: Vec<T>) {
        self.len = elements.len();
        self.empty = self.len == 0;
        self.buffer = if self.empty {
            None
        } else {
            Some(elements.into_boxed_slice())
        };
    }

    /// Move the elements out, leaving no buffer behind. Callers must
    /// `install` a replacement before returning.
    fn take_buffer(&mut self) -> Vec<T> {
        self.buffer.take().map(Vec::from).unwrap_or_default()
    }

    /// Reference to the first element
    pub fn first(&self) -> Result<&T> {
        self.as_slice()
            .first()
            .ok_or_else(|| recovered("first", ArrayError::EmptyArray))
    }

    /// Reference to the last element
    pub fn last(&self) -> Result<&T> {
        self.as_slice()
            .last()
            .ok_or_else(|| recovered("last", ArrayError::EmptyArray))
    }

    /// Checked access to the element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        if index < self.len {
            Ok(&self.as_slice()[index])
        } else {
            Err(recovered("get", self.access_error(index)))
        }
    }

    /// Checked mutable access to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index < self.len {
            Ok(&mut self.as_mut_slice()[index])
        } else {
            Err(recovered("get_mut", self.access_error(index)))
        }
    }

    /// Index of the first element equal to `value`
    ///
    /// Returns `Ok(None)` when no element matches and
    /// `Err(ArrayError::EmptyArray)` when there is nothing to search.
    /// `.ok().flatten()` folds both into plain absence.
    pub fn get_first_index_where(&self, value: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        if self.empty {
            return Err(recovered("get_first_index_where", ArrayError::EmptyArray));
        }
        Ok(self.as_slice().iter().position(|element| element == value))
    }

    /// Write one `index: <i> value: <element>` line per element
    pub fn write_array<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        write!(out, "{}", self)
    }

    /// Print the array to standard output, one line per element
    pub fn print_array(&self) -> Result<()>
    where
        T: fmt::Display,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_array(&mut out)?;
        Ok(())
    }

    /// Classify a failed access: empty arrays report `EmptyArray`, anything
    /// else is out of range.
    fn access_error(&self, index: usize) -> ArrayError {
        if self.empty {
            ArrayError::EmptyArray
        } else {
            ArrayError::index_out_of_range(isize::try_from(index).unwrap_or(isize::MAX), self.len)
        }
    }

    #[cold]
    #[track_caller]
    fn fail_access(&self, index: usize) -> ! {
        let error = self.access_error(index);
        log::error!("index {} of {}: {}", index, self.len, error.show_error());
        panic!("{}", error.show_error())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Self::from_exact(self.as_slice().to_vec())
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_exact(elements)
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            self.fail_access(index);
        }
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            self.fail_access(index);
        }
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, element) in self.as_slice().iter().enumerate() {
            writeln!(f, "index: {} value: {}", index, element)?;
        }
        Ok(())
    }
}
