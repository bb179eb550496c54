//! Concatenation (`+`, `+=`) and equality.

use super::Array;
use std::any::Any;
use std::ops::{Add, AddAssign};

impl<T> Array<T> {
    /// Append all elements of `other`, consuming it
    ///
    /// Elements are moved, never cloned.
    pub fn concat(&mut self, mut other: Array<T>) {
        if self.empty && other.empty {
            return;
        }
        let mut next = Vec::with_capacity(self.len + other.len);
        next.extend(self.take_buffer());
        next.extend(other.take_buffer());
        self.install(next);
    }

    /// Append copies of all elements of `other`
    pub fn concat_from(&mut self, other: &Array<T>)
    where
        T: Clone,
    {
        if self.empty && other.empty {
            return;
        }
        let mut next = Vec::with_capacity(self.len + other.len);
        next.extend(self.take_buffer());
        next.extend_from_slice(other.as_slice());
        self.install(next);
    }

    /// Compare against an array of any element type
    ///
    /// Arrays of different element types are never equal; arrays of the same
    /// type compare like `==`.
    ///
    /// ```rust
    /// use exactvec::Array;
    ///
    /// let ints = Array::from(vec![1, 2]);
    /// let longs = Array::from(vec![1i64, 2]);
    /// assert!(ints.eq_any(&ints.clone()));
    /// assert!(!ints.eq_any(&longs));
    /// ```
    pub fn eq_any<U: 'static>(&self, other: &Array<U>) -> bool
    where
        T: PartialEq + 'static,
    {
        match (other as &dyn Any).downcast_ref::<Array<T>>() {
            Some(same) => self == same,
            None => false,
        }
    }
}

impl<T> Add for Array<T> {
    type Output = Array<T>;

    fn add(mut self, rhs: Array<T>) -> Self::Output {
        self.concat(rhs);
        self
    }
}

impl<T: Clone> Add<&Array<T>> for Array<T> {
    type Output = Array<T>;

    fn add(mut self, rhs: &Array<T>) -> Self::Output {
        self.concat_from(rhs);
        self
    }
}

impl<T> AddAssign for Array<T> {
    fn add_assign(&mut self, rhs: Array<T>) {
        self.concat(rhs);
    }
}

impl<T: Clone> AddAssign<&Array<T>> for Array<T> {
    fn add_assign(&mut self, rhs: &Array<T>) {
        self.concat_from(rhs);
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.empty == other.empty
            && self.len == other.len
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Array<T> {}
