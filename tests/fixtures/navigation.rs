use crate::harness::{cursor, fixtures, start_positions};
use xml_cursor::{QName, TokenKind};

const MIXED: &str = "<a>uuu<b>test<c></c>hhh<d></d>qqq<e></e><f></f>ccc</b>ppp</a>";

#[test]
fn move_around() {
    let mut cursor = cursor(MIXED);

    cursor.to_start_doc();

    assert!(cursor.to_first_child());
    assert_eq!(cursor.current_token().name(), &QName::local("b"));

    assert!(cursor.to_first_child_by_name(&QName::local("e")));
    assert_eq!(cursor.current_token().name(), &QName::local("e"));
    assert!(cursor.current_token().is_start());
}

#[test]
fn sibling_traversal_ends_at_last_child() {
    let mut cursor = cursor("<p>1<c1></c1>2<c2><x></x></c2>3<c3/>4</p>");

    cursor.to_start_doc();
    cursor.to_first_child();

    assert_eq!(cursor.current_token().name(), &QName::local("c1"));
    assert!(cursor.to_next_sibling());
    assert_eq!(cursor.current_token().name(), &QName::local("c2"));
    assert!(cursor.to_next_sibling());
    assert_eq!(cursor.current_token().name(), &QName::local("c3"));

    let index = cursor.index();

    assert!(!cursor.to_next_sibling());
    assert_eq!(cursor.index(), index);
}

#[test]
fn missed_moves_leave_cursor_in_place() {
    let mut cursor = cursor(MIXED);

    cursor.to_start_doc();
    cursor.to_first_child();

    let index = cursor.index();

    assert!(!cursor.to_first_child_by_name(&QName::local("z")));
    assert_eq!(cursor.index(), index);

    assert!(!cursor.to_next_sibling_by_name(&QName::local("z")));
    assert_eq!(cursor.index(), index);

    assert!(!cursor.to_next_sibling());
    assert_eq!(cursor.index(), index);

    assert!(cursor.to_first_child_by_name(&QName::local("f")));
    assert!(!cursor.to_first_child());
    assert_eq!(cursor.current_token().name(), &QName::local("f"));
}

#[test]
fn names_are_matched_with_namespace() {
    let mut cursor = cursor(r#"<r xmlns:x="urn:x"><item/><x:item/></r>"#);

    cursor.to_start_doc();

    assert!(cursor.to_first_child_by_name(&QName::new("urn:x", "item")));
    assert_eq!(cursor.index(), 3);

    cursor.to_start_doc();

    assert!(cursor.to_first_child_by_name(&QName::local("item")));
    assert_eq!(cursor.index(), 1);
}

#[test]
fn end_token_matches_start_token_in_fixtures() {
    for fixture in fixtures() {
        let mut cursor = cursor(&fixture.input);

        for position in start_positions(&cursor) {
            cursor.to_start_doc();

            while cursor.index() < position {
                cursor.to_next_token();
            }

            let start = cursor.current_token();
            let end = cursor.to_end_token();

            assert_eq!(end.kind(), TokenKind::End, "No end token in `{}`", fixture.name);
            assert_eq!(end.name(), start.name(), "Name mismatch in `{}`", fixture.name);
        }
    }
}
