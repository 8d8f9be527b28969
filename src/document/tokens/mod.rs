mod end_element;
mod name;
mod processing_instruction;
mod start_element;

pub use self::end_element::EndElement;
pub use self::name::QName;
pub use self::processing_instruction::ProcessingInstruction;
pub use self::start_element::{Attribute, StartElement};

static EMPTY_NAME: QName = QName {
    local: String::new(),
    namespace: String::new(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Start,
    End,
    Text,
    Comment,
    ProcessingInstruction,
    Directive,
    None,
}

/// One lexical unit of a document.
///
/// [`Token::None`] isn't a part of any document: it's returned whenever a
/// position outside of the token sequence is read or a structural query
/// fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartElement(StartElement),
    EndElement(EndElement),
    Text(String),
    Comment(String),
    ProcessingInstruction(ProcessingInstruction),
    /// Markup declaration such as `<!DOCTYPE html>`, stored without the
    /// surrounding `<!` and `>`.
    Directive(String),
    None,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::StartElement(_) => TokenKind::Start,
            Token::EndElement(_) => TokenKind::End,
            Token::Text(_) => TokenKind::Text,
            Token::Comment(_) => TokenKind::Comment,
            Token::ProcessingInstruction(_) => TokenKind::ProcessingInstruction,
            Token::Directive(_) => TokenKind::Directive,
            Token::None => TokenKind::None,
        }
    }

    /// Name of a start or end element; an empty name for any other token.
    pub fn name(&self) -> &QName {
        match self {
            Token::StartElement(start) => start.name(),
            Token::EndElement(end) => end.name(),
            _ => &EMPTY_NAME,
        }
    }

    /// Payload of a text, comment or directive token; empty for any other token.
    pub fn text(&self) -> &str {
        match self {
            Token::Text(text) | Token::Comment(text) | Token::Directive(text) => text.as_str(),
            _ => "",
        }
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind() == TokenKind::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind() == TokenKind::End
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind() == TokenKind::Text
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind() == TokenKind::Comment
    }

    #[inline]
    pub fn is_processing_instruction(&self) -> bool {
        self.kind() == TokenKind::ProcessingInstruction
    }

    #[inline]
    pub fn is_directive(&self) -> bool {
        self.kind() == TokenKind::Directive
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.kind() == TokenKind::None
    }
}
