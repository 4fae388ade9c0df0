//! Reusable scalar storage for bulk query results.

use crate::error::NoiseError;

/// Contiguous `f32` storage owned by an engine and overwritten by every bulk query.
///
/// The allocation grows to the largest request seen and is then reused, so a
/// steady stream of same-sized requests allocates once.
#[derive(Debug, Default, Clone)]
pub struct OutputBuffer {
    data: Vec<f32>,
}

impl OutputBuffer {
    /// Creates an empty buffer. Nothing is allocated until the first request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize to exactly `len` elements and hand out the storage for writing.
    ///
    /// Storage is reserved before the previous result is cleared, so a failed
    /// allocation returns [`NoiseError::ExtentOverflow`] and leaves the last
    /// result readable.
    pub fn prepare(&mut self, len: usize) -> Result<&mut [f32], NoiseError> {
        self.data
            .try_reserve_exact(len.saturating_sub(self.data.len()))
            .map_err(|_| NoiseError::ExtentOverflow)?;
        self.data.clear();
        self.data.resize(len, 0.0);
        Ok(&mut self.data)
    }

    /// The result of the most recent request.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Number of elements in the most recent result.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no result has been written yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let buffer = OutputBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 0);
    }

    #[test]
    fn test_prepare_sets_length() {
        let mut buffer = OutputBuffer::new();
        assert_eq!(buffer.prepare(16).unwrap().len(), 16);
        assert_eq!(buffer.len(), 16);
        assert_eq!(buffer.prepare(4).unwrap().len(), 4);
        assert_eq!(buffer.as_slice().len(), 4);
    }

    #[test]
    fn test_allocation_is_reused() {
        let mut buffer = OutputBuffer::new();
        buffer.prepare(1024).unwrap();
        let capacity = buffer.capacity();
        let ptr = buffer.as_slice().as_ptr();

        buffer.prepare(10).unwrap();
        buffer.prepare(1024).unwrap();
        assert_eq!(buffer.capacity(), capacity);
        assert_eq!(buffer.as_slice().as_ptr(), ptr);
    }

    #[test]
    fn test_stale_values_are_cleared() {
        let mut buffer = OutputBuffer::new();
        buffer.prepare(4).unwrap().fill(9.0);
        let fresh = buffer.prepare(4).unwrap();
        assert!(fresh.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_failed_reservation_keeps_previous_result() {
        let mut buffer = OutputBuffer::new();
        buffer.prepare(3).unwrap().copy_from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(buffer.prepare(usize::MAX), Err(NoiseError::ExtentOverflow));
        assert_eq!(buffer.as_slice(), &[1.0, 2.0, 3.0]);
    }
}
