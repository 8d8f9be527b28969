use crate::harness::{assert_balanced, cursor, fixtures, serialize, ASCII_COMPATIBLE_ENCODINGS};
use xml_cursor::{Cursor, Document, ParseSettings, QName, Token};

// NOTE: CDATA sections are written back as escaped text and merge with
// the text around them once reparsed.
fn merge_text(tokens: &[Token]) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match (merged.last_mut(), token) {
            (Some(Token::Text(last)), Token::Text(text)) => last.push_str(text),
            _ => merged.push(token.clone()),
        }
    }

    merged
}

fn tokens_of(cursor: &Cursor) -> Vec<Token> {
    merge_text(cursor.document().tokens())
}

#[test]
fn serialized_fixtures_reparse_to_same_tokens() {
    let fixtures = fixtures();

    assert!(!fixtures.is_empty());

    for fixture in fixtures {
        let original = cursor(&fixture.input);
        let reparsed = cursor(&serialize(&original));

        assert_eq!(
            tokens_of(&original),
            tokens_of(&reparsed),
            "Token mismatch in `{}`",
            fixture.name
        );
    }
}

#[test]
fn serialization_is_stable() {
    for fixture in fixtures() {
        let once = serialize(&cursor(&fixture.input));
        let twice = serialize(&cursor(&once));

        assert_eq!(once, twice, "Unstable output for `{}`", fixture.name);
    }
}

#[test]
fn round_trip_in_ascii_compatible_encodings() {
    for fixture in fixtures() {
        for encoding in ASCII_COMPATIBLE_ENCODINGS.iter().copied() {
            let settings = || ParseSettings {
                encoding,
                ..ParseSettings::default()
            };
            let (input, _, _) = encoding.encode(&fixture.input);
            let mut original: Cursor =
                Cursor::new(Document::parse_with_settings(&input, settings()).unwrap());
            let mut output = Vec::new();

            original.to_start_doc();
            original.write_xml(&mut |chunk: &[u8]| output.extend_from_slice(chunk));

            let reparsed: Cursor =
                Cursor::new(Document::parse_with_settings(&output, settings()).unwrap());

            assert_eq!(
                tokens_of(&original),
                tokens_of(&reparsed),
                "Token mismatch in `{}` ({})",
                fixture.name,
                encoding.name()
            );
        }
    }
}

#[test]
fn fixtures_are_balanced() {
    for fixture in fixtures() {
        assert_balanced(&cursor(&fixture.input));
    }
}

fn element_names(cursor: &Cursor) -> Vec<QName> {
    cursor
        .document()
        .tokens()
        .iter()
        .filter(|token| token.is_start())
        .map(|token| token.name().clone())
        .collect()
}

#[test]
fn inserted_elements_keep_their_namespace() {
    let catalog = fixtures()
        .into_iter()
        .find(|fixture| fixture.name == "catalog.xml")
        .unwrap();
    let product = QName::new("urn:example:catalog", "product");
    let mut cursor = cursor(&catalog.input);

    assert!(cursor.to_first_child());
    assert!(cursor.to_first_child_by_name(&product));

    cursor.to_end_token();
    cursor.begin_element(QName::local("note"));
    cursor.insert_element_with_text(QName::new("urn:example:catalog", "line"), "text");
    cursor.insert_element(QName::new("urn:other", "ref"));

    let mut reparsed = crate::harness::cursor(&serialize(&cursor));

    assert_eq!(element_names(&reparsed), element_names(&cursor));

    assert!(reparsed.to_first_child());
    assert!(reparsed.to_first_child_by_name(&product));
    assert!(reparsed.to_first_child_by_name(&QName::local("note")));
    assert!(reparsed.to_first_child_by_name(&QName::new("urn:example:catalog", "line")));
}
