//! Comparison-based filtering and the three-way partition sort built on it.

use super::Array;
use crate::error::{ArrayError, Result};
use std::fmt;

/// Comparison applied by [`Array::filter_by`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    /// Keep elements strictly less than the value (`<`)
    Less,
    /// Keep elements strictly greater than the value (`>`)
    Greater,
    /// Keep elements equal to the value (`=`)
    Equal,
}

impl FilterOp {
    /// Operator symbol
    pub fn symbol(self) -> char {
        match self {
            Self::Less => '<',
            Self::Greater => '>',
            Self::Equal => '=',
        }
    }

    /// Check `element op value`
    #[inline]
    pub fn matches<T: PartialOrd>(self, element: &T, value: &T) -> bool {
        match self {
            Self::Less => element < value,
            Self::Greater => element > value,
            Self::Equal => element == value,
        }
    }
}

impl TryFrom<char> for FilterOp {
    type Error = ArrayError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '<' => Ok(Self::Less),
            '>' => Ok(Self::Greater),
            '=' => Ok(Self::Equal),
            other => Err(ArrayError::invalid_operator(other)),
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Direction for [`Array::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest element first
    #[default]
    Ascending,
    /// Largest element first
    Descending,
}

impl SortOrder {
    /// Map a direction symbol: `'<'` is descending, everything else
    /// (including the usual `'>'`) is ascending.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '<' => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

impl<T: PartialOrd + Clone> Array<T> {
    /// New array of the elements satisfying `element op value`, in order
    ///
    /// `op` must be one of `<`, `>`, `=`. Any other symbol fails with
    /// [`ArrayError::InvalidOperator`], which is not recovered here: the
    /// caller is expected to propagate it.
    ///
    /// ```rust
    /// use exactvec::Array;
    ///
    /// let array = Array::from(vec![5, 1, 4, 2]);
    /// let small = array.filter('<', &4)?;
    /// assert_eq!(small.as_slice(), &[1, 2]);
    /// assert!(array.filter('?', &4).is_err());
    /// # Ok::<(), exactvec::ArrayError>(())
    /// ```
    pub fn filter(&self, op: char, value: &T) -> Result<Array<T>> {
        let op = FilterOp::try_from(op)?;
        Ok(self.filter_by(op, value))
    }

    /// Typed form of [`filter`](Self::filter)
    pub fn filter_by(&self, op: FilterOp, value: &T) -> Array<T> {
        let mut result = Array::new();
        for element in self.as_slice() {
            if op.matches(element, value) {
                result.append(element.clone());
            }
        }
        result
    }
}

impl<T: Ord + Clone> Array<T> {
    /// Sort the array in place
    ///
    /// Recursive quicksort: the middle element is the pivot, the array is
    /// split into less/equal/greater partitions with
    /// [`filter_by`](Self::filter_by), and the sorted partitions are
    /// concatenated. Descending order reverses the result.
    pub fn sort(&mut self, order: SortOrder) {
        let sorted = Self::partition_sort(std::mem::take(self));
        match order {
            SortOrder::Ascending => *self = sorted,
            SortOrder::Descending => {
                let mut sorted = sorted;
                let ascending = sorted.take_buffer();
                let mut next = Vec::with_capacity(ascending.len());
                next.extend(ascending.into_iter().rev());
                self.install(next);
            }
        }
    }

    /// Sort using a direction symbol, see [`SortOrder::from_symbol`]
    pub fn sort_by_symbol(&mut self, symbol: char) {
        self.sort(SortOrder::from_symbol(symbol));
    }

    fn partition_sort(array: Array<T>) -> Array<T> {
        if array.count() == 0 {
            return array;
        }
        let pivot = array[array.count() / 2].clone();
        let less = array.filter_by(FilterOp::Less, &pivot);
        let equal = array.filter_by(FilterOp::Equal, &pivot);
        let greater = array.filter_by(FilterOp::Greater, &pivot);
        Self::partition_sort(less) + equal + Self::partition_sort(greater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_ops() {
        let array = Array::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(array.filter('<', &4).unwrap().as_slice(), &[3, 1, 1, 2]);
        assert_eq!(array.filter('>', &4).unwrap().as_slice(), &[5, 9, 6]);
        assert_eq!(array.filter('=', &1).unwrap().as_slice(), &[1, 1]);
        assert!(array.filter('=', &7).unwrap().is_empty());
    }

    #[test]
    fn test_filter_invalid_operator() {
        let array = Array::from(vec![1, 2, 3]);
        let err = array.filter('?', &2).unwrap_err();
        assert!(matches!(err, ArrayError::InvalidOperator { symbol: '?' }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_filter_empty_and_result_is_exact() {
        let empty: Array<i32> = Array::new();
        assert!(empty.filter_by(FilterOp::Less, &0).is_empty());

        let array = Array::from(vec![1, 2, 3, 4]);
        let result = array.filter_by(FilterOp::Greater, &1);
        assert_eq!(result.capacity(), 3);
    }

    #[test]
    fn test_filter_op_symbols() {
        for op in [FilterOp::Less, FilterOp::Greater, FilterOp::Equal] {
            assert_eq!(FilterOp::try_from(op.symbol()).unwrap(), op);
        }
        assert_eq!(FilterOp::Less.to_string(), "<");
        assert!(FilterOp::try_from('!').is_err());
    }

    #[test]
    fn test_filter_partial_ord() {
        let array = Array::from(vec![0.5, f64::NAN, 2.5]);
        assert_eq!(array.filter('>', &1.0).unwrap().as_slice(), &[2.5]);
        assert_eq!(array.filter('<', &1.0).unwrap().as_slice(), &[0.5]);
    }

    #[test]
    fn test_sort_ascending_default() {
        let mut array = Array::from(vec![5, 3, 1, 4, 2]);
        array.sort(SortOrder::default());
        assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_descending() {
        let mut array = Array::from(vec![5, 3, 1, 4, 2]);
        array.sort(SortOrder::Descending);
        assert_eq!(array.as_slice(), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_by_symbol() {
        let mut array = Array::from(vec![5, 3, 1, 4, 2]);
        array.sort_by_symbol('<');
        assert_eq!(array.as_slice(), &[5, 4, 3, 2, 1]);

        array.sort_by_symbol('>');
        assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);

        array.sort_by_symbol('<');
        array.sort_by_symbol('x');
        assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_duplicates_and_edges() {
        let mut array = Array::from(vec![2, 2, 1, 3, 1, 2]);
        array.sort(SortOrder::Ascending);
        assert_eq!(array.as_slice(), &[1, 1, 2, 2, 2, 3]);
        assert_eq!(array.capacity(), 6);

        let mut empty: Array<i32> = Array::new();
        empty.sort(SortOrder::Descending);
        assert!(empty.is_empty());

        let mut single = Array::from(vec![7]);
        single.sort(SortOrder::Descending);
        assert_eq!(single.as_slice(), &[7]);
    }

    #[test]
    fn test_sort_strings() {
        let mut array = Array::from(vec!["pear", "apple", "fig"]);
        array.sort(SortOrder::Ascending);
        assert_eq!(array.as_slice(), &["apple", "fig", "pear"]);
    }
}
