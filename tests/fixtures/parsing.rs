use crate::harness::{cursor, kinds};
use encoding_rs::{UTF_8, WINDOWS_1251};
use xml_cursor::errors::ParseError;
use xml_cursor::{Cursor, Document, ParseSettings, QName, Token, TokenCaptureFlags, TokenKind};

const TOKEN_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" ?><root foo="42">text<!-- comment--><![CDATA["#,
    "\n\t<test> of c data\n\t",
    "]]></root>"
);

#[test]
fn token_types() {
    let mut cursor = cursor(TOKEN_TYPES);

    cursor.to_start_doc();

    assert!(cursor.current_token().is_processing_instruction());
    assert!(cursor.to_next_token().is_start());
    assert!(cursor.to_next_token().is_text());
    assert!(cursor.to_next_token().is_comment());
    assert!(cursor.to_next_token().is_text());
    assert!(cursor.to_next_token().is_end());
    assert!(cursor.to_next_token().is_none());
}

#[test]
fn token_payloads() {
    let cursor = cursor(TOKEN_TYPES);
    let document = cursor.document();
    let tokens = document.tokens();

    match &tokens[0] {
        Token::ProcessingInstruction(pi) => {
            assert_eq!(pi.target(), "xml");
            assert_eq!(pi.instruction(), r#"version="1.0" encoding="UTF-8""#);
        }
        token => panic!("Unexpected token: {token:?}"),
    }

    match &tokens[1] {
        Token::StartElement(start) => {
            assert_eq!(start.name(), &QName::local("root"));
            assert_eq!(start.attribute("foo"), Some("42"));
        }
        token => panic!("Unexpected token: {token:?}"),
    }

    assert_eq!(tokens[3].text(), " comment");
    assert_eq!(tokens[4].text(), "\n\t<test> of c data\n\t");
}

#[test]
fn capture_flags() {
    let settings = ParseSettings {
        capture_flags: TokenCaptureFlags::TEXT,
        ..ParseSettings::default()
    };
    let document: Document =
        Document::parse_with_settings(b"<!DOCTYPE r><r>\n  <a>x</a><!-- c --><?pi?>\n</r>", settings)
            .unwrap();

    assert_eq!(
        document.tokens().iter().map(Token::kind).collect::<Vec<_>>(),
        [
            TokenKind::Start,
            TokenKind::Start,
            TokenKind::Text,
            TokenKind::End,
            TokenKind::End,
        ]
    );
}

#[test]
fn parse_errors() {
    let parse = |input: &str| Document::<String>::parse(input).unwrap_err();

    assert!(matches!(parse("<a><b></a>"), ParseError::Xml(_)));
    assert!(matches!(
        parse("<a><b>"),
        ParseError::UnclosedElements { count: 2 }
    ));
    assert!(matches!(
        Document::<String>::parse_with_settings(&[0xFF, 0xFE, 0xFD], ParseSettings::default())
            .unwrap_err(),
        ParseError::UndecodableInput { encoding: "UTF-8" }
    ));
}

#[test]
fn read_from_stream() {
    let input: &[u8] = b"<a>\xC1\xE0\xE9\xF2</a>";
    let settings = ParseSettings {
        encoding: WINDOWS_1251,
        ..ParseSettings::default()
    };
    let mut cursor: Cursor = Cursor::new(Document::from_reader(input, settings).unwrap());

    assert_eq!(cursor.document().encoding(), WINDOWS_1251);
    assert_eq!(cursor.to_xml_text(), "<a>Байт</a>");

    let mut output = Vec::new();

    cursor.write_xml(&mut |chunk: &[u8]| output.extend_from_slice(chunk));

    assert_eq!(output, input);
}

#[test]
fn empty_document() {
    let cursor = cursor("");

    assert!(cursor.document().is_empty());
    assert!(kinds(&cursor).is_empty());
    assert_eq!(Document::<String>::parse("").unwrap().encoding(), UTF_8);
}
