//! Character buffers with a physical capacity separate from the live length.

/// A char buffer the stemmer can rewrite in place.
///
/// The slice returned by [`CharBuffer::as_chars`] is the whole physical
/// buffer; callers track the logical length separately.
pub trait CharBuffer {
    fn as_chars(&self) -> &[char];

    fn as_chars_mut(&mut self) -> &mut [char];

    /// Make the physical buffer at least `len` chars long.
    ///
    /// Returns `false` if the buffer has a fixed capacity below `len`.
    fn reserve_len(&mut self, len: usize) -> bool;

    fn physical_len(&self) -> usize {
        self.as_chars().len()
    }
}

impl CharBuffer for [char] {
    fn as_chars(&self) -> &[char] {
        self
    }

    fn as_chars_mut(&mut self) -> &mut [char] {
        self
    }

    fn reserve_len(&mut self, len: usize) -> bool {
        len <= self.len()
    }
}

impl CharBuffer for Vec<char> {
    fn as_chars(&self) -> &[char] {
        self
    }

    fn as_chars_mut(&mut self) -> &mut [char] {
        self
    }

    fn reserve_len(&mut self, len: usize) -> bool {
        if len > self.len() {
            self.resize(len, '\0');
        }
        true
    }
}
