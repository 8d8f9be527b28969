use crate::harness::{cursor, fixtures, start_positions};
use xml_cursor::QName;

#[test]
fn set_bookmark() {
    let mut cursor = cursor("<a>uuu<b>ok<c></c>hhh<!-- test --><d></d>qqq<e></e><f></f>ccc</b>ppp</a>");

    cursor.to_start_doc();
    cursor.to_first_child();
    cursor.to_first_child_by_name(&QName::local("e"));
    cursor.set_bookmark("test".to_owned());
    cursor.to_start_doc();

    assert_ne!(cursor.current_token().name(), &QName::local("e"));

    cursor.to_next_token();
    cursor.insert_element_with_text(QName::local("test"), "some text");

    assert!(cursor.to_first_bookmark("test"));
    assert!(cursor.current_token().is_start());
    assert_eq!(cursor.current_token().name(), &QName::local("e"));
}

#[test]
fn bookmarks_follow_their_tokens_in_fixtures() {
    for fixture in fixtures() {
        let mut cursor = cursor(&fixture.input);
        let positions = start_positions(&cursor);
        let mut bookmarked = Vec::new();

        for &position in &positions {
            cursor.to_start_doc();

            while cursor.index() < position {
                cursor.to_next_token();
            }

            cursor.set_bookmark(position.to_string());
            bookmarked.push((position, cursor.current_token()));
        }

        // NOTE: three tokens in front of every element.
        for &position in positions.iter().rev() {
            cursor.to_first_bookmark(&*position.to_string());
            cursor.insert_element_with_text(QName::local("before"), "x");
        }

        for (number, (position, token)) in bookmarked.into_iter().enumerate() {
            let key = position.to_string();

            assert!(cursor.to_first_bookmark(&*key), "Lost bookmark in `{}`", fixture.name);
            assert_eq!(cursor.current_token(), token, "Moved bookmark in `{}`", fixture.name);
            assert_eq!(cursor.index(), position + 3 * (number as isize + 1));
            assert_eq!(cursor.document().bookmark(&*key).len(), 1);
        }
    }
}

#[test]
fn bookmark_walk() {
    let mut cursor = cursor("<list><i>1</i><i>2</i><i>3</i></list>");
    let mut texts = Vec::new();

    cursor.to_start_doc();
    cursor.to_first_child();

    loop {
        cursor.set_bookmark("item".to_owned());

        if !cursor.to_next_sibling() {
            break;
        }
    }

    cursor.clear_bookmark("item");

    assert!(cursor.to_first_bookmark("item"));

    loop {
        texts.push(cursor.to_next_token().text().to_owned());

        if !cursor.to_next_bookmark("item") {
            break;
        }
    }

    assert_eq!(texts, ["1", "2"]);
}
