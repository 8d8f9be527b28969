//! The flat-token document model.
//!
//! A document is never materialized as a tree. Its structure is implicit in
//! the pairing of [`Token::StartElement`] and [`Token::EndElement`] tokens in
//! a single ordered sequence that reads as a preorder traversal of the
//! elements.

mod bookmarks;
mod tokens;

pub use self::tokens::*;

use self::bookmarks::Bookmarks;
use crate::errors::ParseError;
use crate::parser::{self, ParseSettings};
use encoding_rs::Encoding;
use std::borrow::Borrow;
use std::cell::RefCell;
use std::hash::Hash;
use std::io::Read;
use std::rc::Rc;

/// A document shared by all cursors created over it.
pub type SharedDocument<K = String> = Rc<RefCell<Document<K>>>;

static NONE: Token = Token::None;

/// Token sequence of a parsed document together with its bookmarks.
///
/// The document has no public editing API: it is modified through
/// [`Cursor`](crate::Cursor)s only.
#[derive(Debug)]
pub struct Document<K = String> {
    tokens: Vec<Token>,
    bookmarks: Bookmarks<K>,
    encoding: &'static Encoding,
}

impl<K: Hash + Eq> Document<K> {
    /// Parses UTF-8 markup with the default settings.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let settings = ParseSettings::default();
        let tokens = parser::parse_tokens(input, settings.capture_flags)?;

        Ok(Document::from_tokens(tokens, settings.encoding))
    }

    /// Parses markup encoded with `settings.encoding`.
    pub fn parse_with_settings(input: &[u8], settings: ParseSettings) -> Result<Self, ParseError> {
        let input = parser::decode(input, settings.encoding)?;
        let tokens = parser::parse_tokens(&input, settings.capture_flags)?;

        Ok(Document::from_tokens(tokens, settings.encoding))
    }

    /// Reads the whole stream and parses it.
    pub fn from_reader(mut reader: impl Read, settings: ParseSettings) -> Result<Self, ParseError> {
        let mut input = Vec::new();

        reader.read_to_end(&mut input)?;

        Document::parse_with_settings(&input, settings)
    }

    fn from_tokens(tokens: Vec<Token>, encoding: &'static Encoding) -> Self {
        Document {
            tokens,
            bookmarks: Bookmarks::default(),
            encoding,
        }
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Encoding of the source, also used for serialized output.
    #[inline]
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Sorted token indices bookmarked with `key`.
    #[inline]
    pub fn bookmark<Q>(&self, key: &Q) -> &[isize]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bookmarks.get(key)
    }

    /// Token at `index`, or [`Token::None`] outside of the sequence.
    #[inline]
    pub(crate) fn token(&self, index: isize) -> &Token {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&NONE)
    }

    #[inline]
    pub(crate) fn kind_at(&self, index: isize) -> TokenKind {
        self.token(index).kind()
    }

    #[inline]
    pub(crate) fn bookmarks(&self) -> &Bookmarks<K> {
        &self.bookmarks
    }

    #[inline]
    pub(crate) fn bookmarks_mut(&mut self) -> &mut Bookmarks<K> {
        &mut self.bookmarks
    }

    /// Splices `tokens` in at `position`, shifting the tail of the sequence
    /// and every bookmark at or after `position` to the right.
    pub(crate) fn insert_tokens(&mut self, position: usize, tokens: Vec<Token>) {
        debug_assert!(position <= self.tokens.len());

        let count = tokens.len();

        trace!(@splice position, count);

        self.bookmarks.rebase(position as isize, count as isize);
        self.tokens.splice(position..position, tokens);
    }
}
