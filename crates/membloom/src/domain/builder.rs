//! Ordered assembly of hash strategies and a membership structure
//!
//! The builder collects construction inputs and delegates the one-time
//! build to the selected structure. It holds no filter state itself and is
//! consumed by a single build.

use tracing::debug;

use super::hash::HashFunction;
use crate::error::FilterError;
use crate::ports::{DataStructure, MemoryCache};

/// Fluent accumulator for a single cache construction.
pub struct CacheBuilder<T> {
    hash_functions: Vec<Box<dyn HashFunction>>,
    structure: Option<Box<dyn DataStructure<T>>>,
}

impl<T> Default for CacheBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CacheBuilder<T> {
    pub fn new() -> Self {
        Self {
            hash_functions: Vec::new(),
            structure: None,
        }
    }

    /// Append a hash strategy. Duplicates are permitted; the order is
    /// preserved and only matters for reproducibility of bit positions.
    pub fn add_hash_function(mut self, hash_function: Box<dyn HashFunction>) -> Self {
        self.hash_functions.push(hash_function);
        self
    }

    /// Select the concrete membership structure. Calling this more than
    /// once replaces the earlier selection; the last call wins.
    pub fn add_data_structure(mut self, structure: Box<dyn DataStructure<T>>) -> Self {
        self.structure = Some(structure);
        self
    }

    /// Validate the assembly and delegate construction to the selected
    /// structure.
    ///
    /// Building without a selected structure is a programming error on the
    /// caller's side and reported as `InvalidArgument`.
    pub fn build_cache(self, input: &[T]) -> Result<Box<dyn MemoryCache<T>>, FilterError> {
        let structure = self.structure.ok_or(FilterError::InvalidArgument(
            "a data structure must be selected before building",
        ))?;
        debug!(
            hash_functions = self.hash_functions.len(),
            items = input.len(),
            "assembling immutable membership cache"
        );
        structure.create_cache(self.hash_functions, input)
    }
}
