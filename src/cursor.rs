use crate::atomic::Atomic;

/// Immutable view over the unconsumed part of an input
///
/// A cursor never mutates the buffer it points into. Advancing produces a new
/// cursor sharing the same buffer, so saving a cursor for backtracking is a
/// plain copy.
#[derive(Debug)]
pub struct Cursor<'code, T: Atomic> {
    source: &'code T::Source,
    /// Offset into `source`, in source units
    position: usize,
}

impl<'code, T: Atomic> Cursor<'code, T> {
    pub fn new(source: &'code T::Source) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// Get the token at the current position without consuming it
    pub fn peek(&self) -> Option<T> {
        T::decode(self.remaining()).map(|(token, _)| token)
    }

    /// Take the token at the current position, returning it with the advanced cursor
    pub fn bump(self) -> Option<(T, Self)> {
        T::decode(self.remaining()).map(|(token, width)| {
            let next = Cursor {
                source: self.source,
                position: self.position + width,
            };
            (token, next)
        })
    }

    /// Advance past `n` tokens
    ///
    /// Callers only advance over tokens they have already matched, so running
    /// off the end is a bug. Debug builds assert; release builds stop at the end.
    pub fn advance(self, n: usize) -> Self {
        let mut cursor = self;
        for _ in 0..n {
            match cursor.bump() {
                Some((_, next)) => cursor = next,
                None => {
                    debug_assert!(false, "advanced {} tokens past the end of input", n);
                    break;
                }
            }
        }
        cursor
    }

    pub fn is_empty(&self) -> bool {
        self.position >= T::source_len(self.source)
    }

    /// The unconsumed remainder of the input
    pub fn remaining(&self) -> &'code T::Source {
        T::slice(self.source, self.position, T::source_len(self.source))
    }

    /// Current offset into the source, in source units
    pub fn position(&self) -> usize {
        self.position
    }

    /// The whole input this cursor was created over
    pub fn source(&self) -> &'code T::Source {
        self.source
    }

    /// The input consumed between `earlier` and this cursor
    ///
    /// `earlier` must be a cursor over the same input at or before this one.
    pub fn consumed_since(&self, earlier: &Self) -> &'code T::Source {
        let start = earlier.position.min(self.position);
        T::slice(self.source, start, self.position)
    }
}

impl<'code, T: Atomic> Clone for Cursor<'code, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'code, T: Atomic> Copy for Cursor<'code, T> {}

impl<'code, T: Atomic> PartialEq for Cursor<'code, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source) && self.position == other.position
    }
}

impl<'code, T: Atomic> Eq for Cursor<'code, T> {}

impl<'code> From<&'code str> for Cursor<'code, char> {
    fn from(source: &'code str) -> Self {
        Cursor::new(source)
    }
}

impl<'code> From<&'code [u8]> for Cursor<'code, u8> {
    fn from(source: &'code [u8]) -> Self {
        Cursor::new(source)
    }
}

impl<'code, const N: usize> From<&'code [u8; N]> for Cursor<'code, u8> {
    fn from(source: &'code [u8; N]) -> Self {
        Cursor::new(&source[..])
    }
}

impl<'code> From<&'code [u32]> for Cursor<'code, u32> {
    fn from(source: &'code [u32]) -> Self {
        Cursor::new(source)
    }
}

impl<'code, const N: usize> From<&'code [u32; N]> for Cursor<'code, u32> {
    fn from(source: &'code [u32; N]) -> Self {
        Cursor::new(&source[..])
    }
}
