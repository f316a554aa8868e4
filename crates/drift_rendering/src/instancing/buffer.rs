//! CPU staging buffer for per-instance data.
//!
//! The length is fixed at creation - the entity set never grows - so the only
//! mutations are indexed overwrites, each of which marks the buffer dirty for
//! the next upload.

use bytemuck::Pod;

/// Update-frequency metadata for a staging buffer.
///
/// Buffers start `Static`; the sync adapter promotes the two per-frame
/// buffers to `Dynamic` during priming, before the external renderer compiles
/// its GPU resources. The flag mirrors what the renderer needs to know when
/// allocating the device-side buffer, it changes nothing CPU-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferUsage {
    /// Written once, uploaded once.
    Static,
    /// Rewritten while the renderer is live; expects repeated uploads.
    Dynamic,
}

/// Fixed-length staging buffer for one per-instance attribute.
///
/// `T` is `Pod` so the whole buffer can be handed to the upload stage as a
/// byte slice without copying.
pub struct StagingBuffer<T: Pod> {
    data: Vec<T>,
    usage: BufferUsage,
    dirty: bool,
}

impl<T: Pod> StagingBuffer<T> {
    /// Creates a zero-filled buffer of `len` elements.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![T::zeroed(); len],
            usage: BufferUsage::Static,
            dirty: false,
        }
    }

    /// Creates a buffer seeded from `values`.
    ///
    /// The fresh buffer starts dirty: seeded contents have not been uploaded
    /// yet.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            usage: BufferUsage::Static,
            dirty: true,
        }
    }

    /// Creates a buffer of `len` elements produced by `fill`.
    ///
    /// Starts dirty, like [`StagingBuffer::from_slice`].
    #[must_use]
    pub fn from_fn(len: usize, fill: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..len).map(fill).collect(),
            usage: BufferUsage::Static,
            dirty: true,
        }
    }

    /// Number of instances the buffer holds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Overwrites one slot and marks the buffer dirty.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. A bad index is a contract violation
    /// by the writer, never something to clamp quietly.
    pub fn write(&mut self, index: usize, value: T) {
        assert!(
            index < self.data.len(),
            "instance write out of range: {index} >= {}",
            self.data.len()
        );
        self.data[index] = value;
        self.dirty = true;
    }

    /// Reads one slot back.
    #[must_use]
    pub fn get(&self, index: usize) -> T {
        self.data[index]
    }

    /// Marks the buffer as requiring repeated (dynamic) updates.
    pub fn mark_dynamic(&mut self) {
        self.usage = BufferUsage::Dynamic;
    }

    /// Current update-frequency metadata.
    #[must_use]
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }

    /// True if the contents changed since the last [`Self::clear_dirty`].
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledges an upload; the buffer is clean until the next write.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// The instance data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The instance data as raw bytes for GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}
