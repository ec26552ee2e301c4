use std::fmt::Debug;

/// Trait for atomic elements that can be used in parsing
///
/// An atomic element is a single token of input. Every token type names the
/// borrowed `Source` it is read from, so text can be parsed as `char`s straight
/// out of a `&str` while other token streams are plain slices.
pub trait Atomic: Copy + PartialEq + Debug + 'static {
    /// The borrowed sequence tokens of this type are read from
    type Source: ?Sized + Debug + 'static;

    /// Decode the first token of `source` and the number of source units it spans
    fn decode(source: &Self::Source) -> Option<(Self, usize)>;

    /// Length of `source` in source units
    fn source_len(source: &Self::Source) -> usize;

    /// Sub-slice `source` by source-unit offsets
    fn slice(source: &Self::Source, start: usize, end: usize) -> &Self::Source;

    /// Convert a slice of elements to a displayable string for error reporting
    fn slice_to_string(source: &Self::Source) -> String;

    /// Render a single token for error messages
    fn describe(self) -> String;

    /// View this token as a character, if it has a textual meaning
    fn as_char(self) -> Option<char>;
}

impl Atomic for char {
    type Source = str;

    fn decode(source: &str) -> Option<(Self, usize)> {
        source.chars().next().map(|c| (c, c.len_utf8()))
    }

    fn source_len(source: &str) -> usize {
        source.len()
    }

    fn slice(source: &str, start: usize, end: usize) -> &str {
        &source[start..end]
    }

    fn slice_to_string(source: &str) -> String {
        source.to_string()
    }

    fn describe(self) -> String {
        format!("'{}'", self.escape_debug())
    }

    fn as_char(self) -> Option<char> {
        Some(self)
    }
}

impl Atomic for u8 {
    type Source = [u8];

    fn decode(source: &[u8]) -> Option<(Self, usize)> {
        source.first().map(|&b| (b, 1))
    }

    fn source_len(source: &[u8]) -> usize {
        source.len()
    }

    fn slice(source: &[u8], start: usize, end: usize) -> &[u8] {
        &source[start..end]
    }

    fn slice_to_string(source: &[u8]) -> String {
        String::from_utf8_lossy(source).to_string()
    }

    fn describe(self) -> String {
        if self.is_ascii_graphic() || self == b' ' {
            format!("0x{:02X} ('{}')", self, self as char)
        } else {
            format!("0x{:02X}", self)
        }
    }

    fn as_char(self) -> Option<char> {
        self.is_ascii().then_some(self as char)
    }
}

impl Atomic for u32 {
    type Source = [u32];

    fn decode(source: &[u32]) -> Option<(Self, usize)> {
        source.first().map(|&t| (t, 1))
    }

    fn source_len(source: &[u32]) -> usize {
        source.len()
    }

    fn slice(source: &[u32], start: usize, end: usize) -> &[u32] {
        &source[start..end]
    }

    fn slice_to_string(source: &[u32]) -> String {
        format!("{:?}", source)
    }

    fn describe(self) -> String {
        format!("#{}", self)
    }

    fn as_char(self) -> Option<char> {
        char::from_u32(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_decodes_multibyte() {
        assert_eq!(char::decode("ñx"), Some(('ñ', 2)));
        assert_eq!(char::decode(""), None);
    }

    #[test]
    fn test_u8_describe() {
        assert_eq!(b'a'.describe(), "0x61 ('a')");
        assert_eq!(b'\n'.describe(), "0x0A");
    }

    #[test]
    fn test_u8_as_char_rejects_non_ascii() {
        assert_eq!(b'7'.as_char(), Some('7'));
        assert_eq!(0xC3u8.as_char(), None);
    }

    #[test]
    fn test_u32_slice_to_string() {
        let data = [1u32, 2, 3];
        assert_eq!(u32::slice_to_string(u32::slice(&data, 1, 3)), "[2, 3]");
    }
}
