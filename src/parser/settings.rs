use bitflags::bitflags;
use encoding_rs::{Encoding, UTF_8};

bitflags! {
    /// Kinds of leaf tokens kept by the parser.
    ///
    /// Start and end elements are always kept, so the nesting of the
    /// token sequence doesn't depend on the flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TokenCaptureFlags: u8 {
        const TEXT = 0b0000_0001;
        /// Text that consists of whitespace only. Has no effect without `TEXT`.
        const WHITESPACE_TEXT = 0b0000_0010;
        const COMMENTS = 0b0000_0100;
        const PROCESSING_INSTRUCTIONS = 0b0000_1000;
        const DIRECTIVES = 0b0001_0000;
    }
}

impl Default for TokenCaptureFlags {
    #[inline]
    fn default() -> Self {
        TokenCaptureFlags::all()
    }
}

impl TokenCaptureFlags {
    #[inline]
    pub(crate) fn captures_text(self, text: &str) -> bool {
        if !text.is_empty() && text.trim().is_empty() {
            self.contains(TokenCaptureFlags::TEXT | TokenCaptureFlags::WHITESPACE_TEXT)
        } else {
            self.contains(TokenCaptureFlags::TEXT)
        }
    }
}

/// Specifies how input is turned into a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy)]
pub struct ParseSettings {
    /// Encoding of the input bytes. Serialized output uses it as well.
    ///
    /// ### Default
    ///
    /// `UTF-8`.
    pub encoding: &'static Encoding,

    /// Leaf tokens to keep in the document.
    ///
    /// ### Default
    ///
    /// All of them.
    pub capture_flags: TokenCaptureFlags,
}

impl Default for ParseSettings {
    #[inline]
    fn default() -> Self {
        ParseSettings {
            encoding: UTF_8,
            capture_flags: TokenCaptureFlags::default(),
        }
    }
}
