//! Conversion of markup into a token sequence.
//!
//! Lexical analysis is delegated to `quick-xml`'s namespace-aware reader;
//! this module maps its events onto [`Token`]s and makes sure that the
//! resulting sequence is properly nested.

mod settings;

pub use self::settings::{ParseSettings, TokenCaptureFlags};

use crate::document::{Attribute, EndElement, ProcessingInstruction, QName, StartElement, Token};
use crate::errors::ParseError;
use encoding_rs::Encoding;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::name::{QName as RawName, ResolveResult};
use quick_xml::NsReader;
use std::borrow::Cow;
use std::str;

pub(crate) fn decode<'i>(
    input: &'i [u8],
    encoding: &'static Encoding,
) -> Result<Cow<'i, str>, ParseError> {
    let (input, has_errors) = encoding.decode_with_bom_removal(input);

    if has_errors {
        Err(ParseError::UndecodableInput {
            encoding: encoding.name(),
        })
    } else {
        Ok(input)
    }
}

pub(crate) fn parse_tokens(
    input: &str,
    capture_flags: TokenCaptureFlags,
) -> Result<Vec<Token>, ParseError> {
    let mut reader = NsReader::from_str(input);
    let mut collector = TokenCollector::new(capture_flags);

    reader.config_mut().check_end_names = true;

    loop {
        let (namespace, event) = match reader.read_resolved_event()? {
            (ResolveResult::Bound(namespace), event) => {
                (str::from_utf8(namespace.as_ref())?.to_owned(), event)
            }
            // NOTE: undeclared prefixes are kept literally in place of a namespace.
            (ResolveResult::Unknown(prefix), event) => (str::from_utf8(&prefix)?.to_owned(), event),
            (ResolveResult::Unbound, event) => (String::new(), event),
        };

        match event {
            Event::Start(start) => collector.start_element(&start, namespace)?,
            Event::Empty(start) => {
                collector.start_element(&start, namespace.clone())?;
                collector.end_element(start.name(), namespace)?;
            }
            Event::End(end) => collector.end_element(end.name(), namespace)?,
            Event::Text(text) => {
                let text = text.unescape().map_err(quick_xml::Error::from)?;

                collector.text(text);
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();

                collector.text(str::from_utf8(&raw)?.into());
            }
            Event::Comment(comment) => {
                let raw = comment.into_inner();

                collector.leaf(TokenCaptureFlags::COMMENTS, || {
                    Ok(Token::Comment(str::from_utf8(&raw)?.to_owned()))
                })?;
            }
            Event::Decl(decl) => {
                collector.leaf(TokenCaptureFlags::PROCESSING_INSTRUCTIONS, || {
                    Ok(Token::ProcessingInstruction(ProcessingInstruction::new(
                        "xml",
                        declaration_instruction(&decl)?,
                    )))
                })?;
            }
            Event::PI(pi) => {
                collector.leaf(TokenCaptureFlags::PROCESSING_INSTRUCTIONS, || {
                    Ok(Token::ProcessingInstruction(ProcessingInstruction::new(
                        str::from_utf8(pi.target())?,
                        str::from_utf8(pi.content())?.trim_start(),
                    )))
                })?;
            }
            Event::DocType(doctype) => {
                let raw = doctype.into_inner();

                collector.leaf(TokenCaptureFlags::DIRECTIVES, || {
                    Ok(Token::Directive(format!(
                        "DOCTYPE {}",
                        str::from_utf8(&raw)?.trim()
                    )))
                })?;
            }
            Event::Eof => break,
        }
    }

    collector.finish()
}

// NOTE: the reader reports the XML declaration separately from other
// processing instructions, so its pseudo-attributes are put back together.
fn declaration_instruction(decl: &BytesDecl<'_>) -> Result<String, ParseError> {
    let version = decl.version().map_err(quick_xml::Error::from)?;
    let mut instruction = format!("version=\"{}\"", str::from_utf8(&version)?);

    if let Some(encoding) = decl.encoding() {
        let encoding = encoding.map_err(quick_xml::Error::from)?;

        instruction.push_str(&format!(" encoding=\"{}\"", str::from_utf8(&encoding)?));
    }

    if let Some(standalone) = decl.standalone() {
        let standalone = standalone.map_err(quick_xml::Error::from)?;

        instruction.push_str(&format!(" standalone=\"{}\"", str::from_utf8(&standalone)?));
    }

    Ok(instruction)
}

fn name_parts(name: RawName<'_>, namespace: String) -> Result<(QName, Option<String>), ParseError> {
    let local = str::from_utf8(name.local_name().as_ref())?.to_owned();
    let prefix = match name.prefix() {
        Some(prefix) => Some(str::from_utf8(prefix.as_ref())?.to_owned()),
        None => None,
    };

    Ok((QName::new(namespace, local), prefix))
}

struct TokenCollector {
    tokens: Vec<Token>,
    open_elements: usize,
    capture_flags: TokenCaptureFlags,
}

impl TokenCollector {
    fn new(capture_flags: TokenCaptureFlags) -> Self {
        TokenCollector {
            tokens: Vec::new(),
            open_elements: 0,
            capture_flags,
        }
    }

    #[inline]
    fn push(&mut self, token: Token) {
        trace!(@parse token);

        self.tokens.push(token);
    }

    fn start_element(&mut self, start: &BytesStart<'_>, namespace: String) -> Result<(), ParseError> {
        let (name, prefix) = name_parts(start.name(), namespace)?;
        let mut attributes = Vec::new();

        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;

            attributes.push(Attribute::new(str::from_utf8(attr.key.as_ref())?, value));
        }

        self.open_elements += 1;
        self.push(Token::StartElement(StartElement::from_parts(
            name, prefix, attributes,
        )));

        Ok(())
    }

    fn end_element(&mut self, name: RawName<'_>, namespace: String) -> Result<(), ParseError> {
        let (name, prefix) = name_parts(name, namespace)?;

        if self.open_elements == 0 {
            return Err(ParseError::UnmatchedEndElement {
                name: name.to_string(),
            });
        }

        self.open_elements -= 1;
        self.push(Token::EndElement(EndElement::from_parts(name, prefix)));

        Ok(())
    }

    fn text(&mut self, text: Cow<'_, str>) {
        if self.capture_flags.captures_text(&text) {
            self.push(Token::Text(text.into_owned()));
        }
    }

    fn leaf(
        &mut self,
        flag: TokenCaptureFlags,
        create_token: impl FnOnce() -> Result<Token, ParseError>,
    ) -> Result<(), ParseError> {
        if self.capture_flags.contains(flag) {
            let token = create_token()?;

            self.push(token);
        }

        Ok(())
    }

    fn finish(self) -> Result<Vec<Token>, ParseError> {
        if self.open_elements > 0 {
            Err(ParseError::UnclosedElements {
                count: self.open_elements,
            })
        } else {
            Ok(self.tokens)
        }
    }
}
