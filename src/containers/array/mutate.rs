//! Size-changing operations. Each one builds a fresh exact-size buffer.

use super::Array;
use crate::error::{recovered, ArrayError, Result};

impl<T> Array<T> {
    /// Append an element to the end of the array
    pub fn append(&mut self, value: T) {
        let mut next = Vec::with_capacity(self.len + 1);
        next.extend(self.take_buffer());
        next.push(value);
        self.install(next);
    }

    /// Insert an element at `index`, shifting later elements right
    ///
    /// `index` may equal the current length, which appends. Anything outside
    /// `0..=len` is rejected with `IndexOutOfRange` and the array is left
    /// untouched.
    pub fn insert_at(&mut self, index: isize, value: T) -> Result<()> {
        if index < 0 || (index as usize) > self.len {
            return Err(recovered(
                "insert_at",
                ArrayError::index_out_of_range(index, self.len),
            ));
        }
        // unreachable: an empty array has len 0, so index != 0 failed above
        if self.empty && index != 0 {
            return Err(recovered("insert_at", ArrayError::EmptyArray));
        }

        let index = index as usize;
        let mut next = Vec::with_capacity(self.len + 1);
        let mut old = self.take_buffer().into_iter();
        next.extend(old.by_ref().take(index));
        next.push(value);
        next.extend(old);
        self.install(next);
        Ok(())
    }

    /// Insert an element at the beginning of the array
    pub fn insert_first(&mut self, value: T) -> Result<()> {
        self.insert_at(0, value)
    }

    /// Remove and return the first element
    pub fn remove_first(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(recovered("remove_first", ArrayError::EmptyArray));
        }
        Ok(self.take_at(0))
    }

    /// Remove and return the last element
    pub fn remove_last(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(recovered("remove_last", ArrayError::EmptyArray));
        }
        Ok(self.take_at(self.len - 1))
    }

    /// Remove and return the element at `index`
    ///
    /// The bounds check rejects `index < 0` and `index > len`. An index equal
    /// to the length passes the check but has no element behind it; reading
    /// it is a trusted access failure and panics like `array[len]` would.
    pub fn remove_at(&mut self, index: isize) -> Result<T> {
        if self.empty {
            return Err(recovered("remove_at", ArrayError::EmptyArray));
        }
        if index < 0 || (index as usize) > self.len {
            return Err(recovered(
                "remove_at",
                ArrayError::index_out_of_range(index, self.len),
            ));
        }

        let index = index as usize;
        if index == self.len {
            self.fail_access(index);
        }
        Ok(self.take_at(index))
    }

    /// Remove the element at `index < len` and repack the rest.
    fn take_at(&mut self, index: usize) -> T {
        let mut old = self.take_buffer();
        let removed = old.remove(index);
        let mut next = Vec::with_capacity(old.len());
        next.extend(old);
        self.install(next);
        removed
    }
}
