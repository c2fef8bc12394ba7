//! Strongly-typed item codes and their allocator.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a stored article. Unique within one store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(u32);

impl ItemCode {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ItemCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ItemCode> for u32 {
    fn from(value: ItemCode) -> Self {
        value.0
    }
}

impl FromStr for ItemCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("ItemCode: {e}")))?;
        Ok(Self(value))
    }
}

/// Monotonic code allocator owned by a single store.
///
/// Codes start at 1 and are never reused, even after the article holding a
/// code is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSequence {
    next: Option<u32>,
}

impl CodeSequence {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Resume allocation after `last`, e.g. when restoring stored records.
    pub fn starting_after(last: ItemCode) -> Self {
        Self {
            next: last.0.checked_add(1),
        }
    }

    /// The code the next call to [`allocate`](Self::allocate) would hand out.
    pub fn peek(&self) -> Option<ItemCode> {
        self.next.map(ItemCode)
    }

    /// Hand out a fresh code.
    pub fn allocate(&mut self) -> DomainResult<ItemCode> {
        let code = self
            .next
            .ok_or_else(|| DomainError::invariant("item code space exhausted"))?;
        self.next = code.checked_add(1);
        Ok(ItemCode(code))
    }
}

impl Default for CodeSequence {
    fn default() -> Self {
        Self::new()
    }
}
