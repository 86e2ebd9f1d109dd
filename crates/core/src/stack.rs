//! Last-in-first-out stack
//!
//! A growable LIFO container. Elements enter and leave through the top only.
//!
//! ## Invariants
//!
//! - `size()` equals pushes minus successful pops since the last `clear()`
//! - `pop()` and `peek()` on an empty stack return [`Error::EmptyStack`];
//!   there is no silent default

use crate::error::{Error, Result};
use std::fmt;

/// Generic LIFO stack bounded only by memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Put `item` on top of the stack
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack has no elements.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// Borrow the top element without removing it
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack has no elements.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyStack)
    }

    /// True iff the stack holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements currently on the stack
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`Stack::size`]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from the top element down to the bottom one
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Push every item in order, so the last item ends up on top
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
