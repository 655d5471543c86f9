//! A growable, contiguous array with explicit capacity management.
//!
//! `DynArray` keeps its own power-of-two capacity on top of a `Vec`, grows
//! by doubling through a fallible reservation, and reports every failure
//! instead of aborting. Elements removed with the `pop_*`/`erase` family go
//! through the optional destructor given at construction, elements removed
//! with the `extract_*` family are handed back to the caller untouched.

use std::cmp::Ordering;
use std::mem;

use crate::error::DynArrayError;

/// Largest number of elements a `DynArray` will ever hold
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 8);

/// Smallest physical capacity handed out by `DynArray::new`
const MIN_CAPACITY: usize = 16;

#[derive(Debug)]
pub struct DynArray<T> {
    data: Vec<T>,
    /// Logical capacity, always a power of two
    capacity: usize,
    /// Size in bytes of one element, fixed at construction
    element_size: usize,
    destructor: Option<fn(T)>,
}

impl<T> DynArray<T> {
    /// Creates an empty array able to hold at least `capacity` elements
    /// before growing
    ///
    /// * `capacity` - requested capacity, rounded up to the next power of two
    ///                (minimum 16)
    pub fn new(capacity: usize) -> Result<DynArray<T>, DynArrayError> {
        DynArray::build(capacity, None)
    }

    /// Creates an empty array that runs `destructor` on every element it
    /// erases, pops, clears or drops
    ///
    /// * `capacity` - requested capacity, rounded up to the next power of two
    /// * `destructor` - called with each element removed without extraction
    pub fn with_destructor(capacity: usize, destructor: fn(T)) -> Result<DynArray<T>, DynArrayError> {
        DynArray::build(capacity, Some(destructor))
    }

    fn build(capacity: usize, destructor: Option<fn(T)>) -> Result<DynArray<T>, DynArrayError> {
        let element_size = mem::size_of::<T>();
        if element_size == 0 {
            return Err(DynArrayError::ZeroSizedElement);
        }

        if capacity > MAX_CAPACITY {
            return Err(DynArrayError::CapacityExceeded);
        }

        let capacity = capacity.max(MIN_CAPACITY).next_power_of_two();

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| DynArrayError::AllocationFailed)?;

        Ok(DynArray {
            data,
            capacity,
            element_size,
            destructor,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size in bytes of a single element
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn front(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.data.first_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.data.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn push_back(&mut self, value: T) -> Result<(), DynArrayError> {
        self.insert(self.data.len(), value)
    }

    pub fn push_front(&mut self, value: T) -> Result<(), DynArrayError> {
        self.insert(0, value)
    }

    /// Inserts `value` at `index`, shifting everything after it one slot
    /// towards the back
    ///
    /// * `index` - position in `[0, len]`
    /// * `value` - element to store
    ///
    /// On failure the array is left as it was.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        let len = self.data.len();
        if index > len {
            return Err(DynArrayError::OutOfBounds { index, len });
        }

        self.request_size_increase(1)?;
        self.data.insert(index, value);
        Ok(())
    }

    pub fn pop_back(&mut self) -> Result<(), DynArrayError> {
        let value = self.extract_back()?;
        self.release(value);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<(), DynArrayError> {
        let value = self.extract_front()?;
        self.release(value);
        Ok(())
    }

    /// Removes the element at `index` and runs the destructor on it
    pub fn erase(&mut self, index: usize) -> Result<(), DynArrayError> {
        let value = self.extract(index)?;
        self.release(value);
        Ok(())
    }

    pub fn extract_back(&mut self) -> Result<T, DynArrayError> {
        self.data.pop().ok_or(DynArrayError::Empty)
    }

    pub fn extract_front(&mut self) -> Result<T, DynArrayError> {
        self.extract(0)
    }

    /// Removes the element at `index` and gives it back to the caller.
    /// The destructor is not run, ownership moves out of the array.
    pub fn extract(&mut self, index: usize) -> Result<T, DynArrayError> {
        let len = self.data.len();
        if len == 0 {
            return Err(DynArrayError::Empty);
        }

        if index >= len {
            return Err(DynArrayError::OutOfBounds { index, len });
        }

        Ok(self.data.remove(index))
    }

    /// Removes every element, running the destructor on each of them.
    /// Capacity is kept.
    pub fn clear(&mut self) {
        let destructor = self.destructor;
        for value in self.data.drain(..) {
            if let Some(destruct) = destructor {
                destruct(value);
            }
        }
    }

    /// Sorts the array in place. The sort is not stable.
    ///
    /// * `compare` - total order over the elements
    pub fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.data.sort_unstable_by(compare);
    }

    /// Inserts `value` before the first element it does not order after.
    ///
    /// Keeps the array sorted only if it was already sorted with the same
    /// `compare`.
    pub fn insert_sorted<F>(&mut self, value: T, mut compare: F) -> Result<(), DynArrayError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let position = self
            .data
            .iter()
            .position(|item| compare(&value, item) != Ordering::Greater)
            .unwrap_or(self.data.len());

        self.insert(position, value)
    }

    /// Applies `func` to every element, front to back
    pub fn for_each<F>(&mut self, func: F)
    where
        F: FnMut(&mut T),
    {
        self.data.iter_mut().for_each(func);
    }

    /// Checks that `increment` more elements fit, doubling the capacity
    /// until they do
    fn request_size_increase(&mut self, increment: usize) -> Result<(), DynArrayError> {
        let needed = self
            .data
            .len()
            .checked_add(increment)
            .ok_or(DynArrayError::CapacityExceeded)?;

        if needed <= self.capacity {
            return Ok(());
        }

        if needed > MAX_CAPACITY {
            return Err(DynArrayError::CapacityExceeded);
        }

        let mut new_capacity = self.capacity << 1;
        while new_capacity < needed {
            new_capacity <<= 1;
        }

        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| DynArrayError::AllocationFailed)?;
        self.capacity = new_capacity;

        Ok(())
    }

    fn release(&self, value: T) {
        if let Some(destruct) = self.destructor {
            destruct(value);
        }
    }
}

impl<T: Clone> DynArray<T> {
    /// Builds an array holding a copy of `items`, in order
    pub fn import(items: &[T]) -> Result<DynArray<T>, DynArrayError> {
        let mut array = DynArray::new(items.len())?;
        array.data.extend_from_slice(items);
        Ok(array)
    }

    /// Copies the live elements out of the array
    pub fn export(&self) -> Vec<T> {
        self.data.to_vec()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
