use std::ops::AddAssign;

use movesem_common::{Result, error::Error};
use movesem_common_traits::memory_owner::{MemoryAllocation, MemoryOwner};

use crate::trace::{self, Event};

/// A byte buffer that exclusively owns a single heap allocation and announces
/// each of its copy, move and destruction operations on the trace sink.
///
/// The buffer is either *empty* (no allocation, `len == capacity == 0`) or
/// *populated* (it holds an allocation of `capacity` bytes, of which the first
/// `len` are meaningful).
///
/// Rust moves (`let b = a;`) are bitwise and untraced; the operations that
/// correspond to a move constructor and a move assignment are the explicit
/// [`OwningBuffer::move_from`] and [`OwningBuffer::move_assign`]. Both hand
/// the allocation over without copying it and leave the source empty.
///
/// # Growth
///
/// Appending checks `capacity >= len + additional`. When the check fails the
/// buffer is reallocated to exactly `capacity + additional` bytes. This is a
/// linear policy: appending `n` chunks costs `O(n)` reallocations.
///
/// # Self-assignment
///
/// Assigning a buffer to itself does not compile, so the allocation can never
/// be released while it is still being read:
///
/// ```compile_fail
/// use movesem::OwningBuffer;
///
/// let mut a = OwningBuffer::from_bytes(b"abc");
/// a.clone_from(&a);
/// ```
///
/// ```compile_fail
/// use movesem::OwningBuffer;
///
/// let mut a = OwningBuffer::from_bytes(b"abc");
/// a.move_assign(&mut a);
/// ```
pub struct OwningBuffer {
    /// The owned allocation; its length is the capacity of the buffer.
    data: Option<Box<[u8]>>,
    /// Number of meaningful bytes at the start of `data`.
    len: usize,
}

impl OwningBuffer {
    /// Creates an empty buffer without allocating.
    pub fn new() -> OwningBuffer {
        trace::emit(Event::BufferDefault);
        OwningBuffer::empty()
    }

    /// Creates a buffer holding a copy of `bytes`, with `capacity == bytes.len()`.
    ///
    /// An empty slice still produces a populated buffer with a zero-sized
    /// allocation, which displays as an empty string rather than as missing data.
    pub fn from_bytes(bytes: &[u8]) -> OwningBuffer {
        OwningBuffer {
            data: Some(Box::from(bytes)),
            len: bytes.len(),
        }
    }

    /// Same as [`OwningBuffer::from_bytes`], but reports allocation failure.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<OwningBuffer> {
        let mut data = try_allocate(bytes.len())?;
        data.copy_from_slice(bytes);
        Ok(OwningBuffer {
            data: Some(data),
            len: bytes.len(),
        })
    }

    /// Creates a populated buffer of length zero that can hold `capacity`
    /// bytes without reallocating.
    pub fn try_with_capacity(capacity: usize) -> Result<OwningBuffer> {
        Ok(OwningBuffer {
            data: Some(try_allocate(capacity)?),
            len: 0,
        })
    }

    /// Takes over the allocation of `other`, leaving `other` empty.
    ///
    /// No bytes are copied and nothing is allocated.
    pub fn move_from(other: &mut OwningBuffer) -> OwningBuffer {
        let moved = OwningBuffer {
            data: other.data.take(),
            len: std::mem::take(&mut other.len),
        };
        trace::emit(Event::BufferMoveConstruct);
        moved
    }

    /// Releases the current allocation and takes over the allocation of
    /// `other`, leaving `other` empty.
    pub fn move_assign(&mut self, other: &mut OwningBuffer) {
        self.release();
        self.data = other.data.take();
        self.len = std::mem::take(&mut other.len);
        trace::emit(Event::BufferMoveAssign);
    }

    /// Appends the content of `other` to this buffer.
    #[inline]
    pub fn append(&mut self, other: &OwningBuffer) {
        self.append_bytes(other.as_slice());
    }

    /// Appends a slice to the buffer.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        self.write_tail(bytes);
    }

    /// Appends the content of `other`, reporting allocation failure instead
    /// of aborting. On error the buffer is left unchanged.
    #[inline]
    pub fn try_append(&mut self, other: &OwningBuffer) -> Result<()> {
        self.try_append_bytes(other.as_slice())
    }

    /// Appends a slice, reporting allocation failure instead of aborting.
    pub fn try_append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.try_reserve(bytes.len())?;
        self.write_tail(bytes);
        Ok(())
    }

    /// Ensures that `additional` more bytes fit without reallocating.
    pub fn reserve(&mut self, additional: usize) {
        if self.fits(additional) {
            return;
        }
        let new_capacity = self.capacity().checked_add(additional).expect("add");
        self.grow(allocate(new_capacity));
    }

    /// Ensures that `additional` more bytes fit, reporting allocation failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        if self.fits(additional) {
            return Ok(());
        }
        let new_capacity = self
            .capacity()
            .checked_add(additional)
            .ok_or_else(|| Error::capacity_overflow(self.capacity(), additional))?;
        self.grow(try_allocate(new_capacity)?);
        Ok(())
    }

    /// Returns the number of meaningful bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer stores no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the size of the owned allocation, zero when there is none.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.len())
    }

    /// Returns `true` if the buffer holds an allocation, even a zero-sized one.
    #[inline]
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Returns the meaningful bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_deref().map_or(&[], |data| &data[..self.len])
    }

    /// Formats the buffer as `"<label> : <content>"`, or as
    /// `"<label> : No data available"` when it holds no allocation.
    pub fn render(&self, label: &str) -> String {
        if self.has_data() {
            format!("{label} : {}", String::from_utf8_lossy(self.as_slice()))
        } else {
            format!("{label} : No data available")
        }
    }

    /// Writes [`OwningBuffer::render`] to the trace sink.
    pub fn display(&self, label: &str) {
        trace::emit_line(self.render(label));
    }
}

impl OwningBuffer {
    fn empty() -> OwningBuffer {
        OwningBuffer { data: None, len: 0 }
    }

    #[inline]
    fn fits(&self, additional: usize) -> bool {
        self.capacity() - self.len >= additional
    }

    /// Moves the meaningful bytes into `data` and adopts it as the new
    /// allocation, releasing the old one.
    #[cold]
    fn grow(&mut self, mut data: Box<[u8]>) {
        log::debug!(
            "growing owning buffer from {} to {} bytes ({} in use)",
            self.capacity(),
            data.len(),
            self.len
        );
        data[..self.len].copy_from_slice(self.as_slice());
        self.data = Some(data);
    }

    /// Copies `bytes` right after the meaningful bytes. The caller has
    /// reserved room for them.
    fn write_tail(&mut self, bytes: &[u8]) {
        let end = self.len + bytes.len();
        let data = self.data.as_deref_mut().unwrap_or_default();
        data[self.len..end].copy_from_slice(bytes);
        self.len = end;
    }

    fn copy_data(&self) -> Option<Box<[u8]>> {
        self.data.as_ref().map(|_| Box::from(self.as_slice()))
    }

    fn release(&mut self) {
        if let Some(data) = self.data.take() {
            log::trace!("releasing {} bytes", data.len());
        }
        self.len = 0;
    }
}

fn allocate(capacity: usize) -> Box<[u8]> {
    vec![0u8; capacity].into_boxed_slice()
}

fn try_allocate(capacity: usize) -> Result<Box<[u8]>> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|e| Error::allocation_failed(capacity, e))?;
    data.resize(capacity, 0u8);
    Ok(data.into_boxed_slice())
}

impl Clone for OwningBuffer {
    /// Copies the meaningful bytes into a fresh allocation of exactly `len` bytes.
    fn clone(&self) -> OwningBuffer {
        let copy = OwningBuffer {
            data: self.copy_data(),
            len: self.len,
        };
        trace::emit(Event::BufferCopyConstruct);
        copy
    }

    /// Releases the current allocation, then copies `source` into a fresh one.
    fn clone_from(&mut self, source: &OwningBuffer) {
        self.release();
        self.data = source.copy_data();
        self.len = source.len;
        trace::emit(Event::BufferCopyAssign);
    }
}

impl Drop for OwningBuffer {
    fn drop(&mut self) {
        self.release();
        trace::emit(Event::BufferDrop);
    }
}

impl Default for OwningBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for OwningBuffer {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AddAssign<&OwningBuffer> for OwningBuffer {
    fn add_assign(&mut self, rhs: &OwningBuffer) {
        self.append(rhs);
    }
}

impl From<&[u8]> for OwningBuffer {
    fn from(bytes: &[u8]) -> Self {
        OwningBuffer::from_bytes(bytes)
    }
}

impl From<&str> for OwningBuffer {
    fn from(s: &str) -> Self {
        OwningBuffer::from_bytes(s.as_bytes())
    }
}

impl PartialEq for OwningBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for OwningBuffer {}

impl std::fmt::Debug for OwningBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwningBuffer")
            .field("values", &self.as_slice())
            .field("len", &self.len())
            .field("cap", &self.capacity())
            .field("has_data", &self.has_data())
            .finish()
    }
}

impl std::io::Write for OwningBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.try_append_bytes(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::OutOfMemory, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl MemoryOwner for OwningBuffer {
    fn memory(&self) -> MemoryAllocation {
        match &self.data {
            Some(data) => MemoryAllocation {
                ptr: data.as_ptr(),
                len: self.len,
                capacity: data.len(),
            },
            None => MemoryAllocation::EMPTY,
        }
    }
}
