//! `MemoryOwner`: A trait for values that exclusively own a heap allocation.

/// A trait for values that exclusively own at most one heap allocation.
///
/// Implementors must report the allocation they currently hold:
/// - `ptr` is null if and only if the value holds no allocation.
/// - The allocation is never shared with another live owner, so two live
///   owners never report the same non-null `ptr` with a non-zero capacity.
/// - `len <= capacity`.
pub trait MemoryOwner {
    /// Returns information about the owned memory block.
    fn memory(&self) -> MemoryAllocation;
}

/// Describes the allocation held by a [`MemoryOwner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryAllocation {
    /// Pointer to the start of the allocated memory, or null.
    pub ptr: *const u8,
    /// Number of meaningful bytes stored in the allocation.
    pub len: usize,
    /// Total size of the allocation in bytes.
    pub capacity: usize,
}

impl MemoryAllocation {
    /// The report of an owner that holds nothing.
    pub const EMPTY: MemoryAllocation = MemoryAllocation {
        ptr: std::ptr::null(),
        len: 0,
        capacity: 0,
    };

    /// Returns `true` if the owner holds no allocation.
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Returns `true` if both reports describe the same allocation.
    ///
    /// Zero-sized allocations share a dangling address and never compare
    /// as the same block.
    pub fn is_same_block(&self, other: &MemoryAllocation) -> bool {
        !self.is_null() && self.capacity != 0 && std::ptr::eq(self.ptr, other.ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_allocation() {
        let empty = MemoryAllocation::EMPTY;
        assert!(empty.is_null());
        assert_eq!(empty.len, 0);
        assert_eq!(empty.capacity, 0);
        assert!(!empty.is_same_block(&empty));
    }

    #[test]
    fn test_same_block() {
        let data = [1u8, 2, 3, 4];
        let a = MemoryAllocation {
            ptr: data.as_ptr(),
            len: 2,
            capacity: 4,
        };
        let b = MemoryAllocation { len: 4, ..a };
        assert!(a.is_same_block(&b));

        let other = [0u8; 4];
        let c = MemoryAllocation {
            ptr: other.as_ptr(),
            ..a
        };
        assert!(!a.is_same_block(&c));
    }
}
