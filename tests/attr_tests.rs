//! Attribute formatter contract.

use pressml::{Attr, AttrValue, MarkupError, format_attrs};
use pretty_assertions::assert_eq;

#[test]
fn empty_list_renders_empty() {
    assert_eq!(format_attrs(&[]).unwrap(), "");
}

#[test]
fn boolean_attributes() {
    assert_eq!(format_attrs(&[Attr::flag("a")]).unwrap(), " a");
    assert_eq!(
        format_attrs(&[Attr::flag("a"), Attr::flag("b")]).unwrap(),
        " a b"
    );
}

#[test]
fn value_attributes() {
    assert_eq!(format_attrs(&[Attr::value("a", 1)]).unwrap(), r#" a="1""#);
    assert_eq!(
        format_attrs(&[Attr::value("a", 1), Attr::value("b", "2")]).unwrap(),
        r#" a="1" b="2""#
    );
}

#[test]
fn mixed_attributes_preserve_order() {
    assert_eq!(
        format_attrs(&[Attr::flag("a"), Attr::value("b", 2)]).unwrap(),
        r#" a b="2""#
    );
    assert_eq!(
        format_attrs(&[Attr::value("a", 1), Attr::flag("b")]).unwrap(),
        r#" a="1" b"#
    );
}

#[test]
fn video_element_attributes() {
    let attrs = [
        Attr::value("src", "videofile.webm"),
        Attr::flag("autoplay"),
        Attr::value("width", 800),
        Attr::value("height", 600),
    ];
    assert_eq!(
        format_attrs(&attrs).unwrap(),
        r#" src="videofile.webm" autoplay width="800" height="600""#
    );
}

#[test]
fn integers_render_as_decimal() {
    assert_eq!(
        format_attrs(&[Attr::value("width", 640u32)]).unwrap(),
        r#" width="640""#
    );
    assert_eq!(
        format_attrs(&[Attr::value("offset", -12i32)]).unwrap(),
        r#" offset="-12""#
    );
    assert_eq!(
        format_attrs(&[Attr::value("big", u64::MAX)]).unwrap(),
        r#" big="18446744073709551615""#
    );
}

#[test]
fn tuple_and_str_conversions() {
    assert_eq!(Attr::from("autoplay"), Attr::flag("autoplay"));
    assert_eq!(Attr::from(("width", 800)), Attr::value("width", 800));
    assert_eq!(Attr::from(("alt", "a cat")), Attr::value("alt", "a cat"));
    assert_eq!(AttrValue::from(800).as_str(), "800");
}

#[test]
fn formatting_is_pure() {
    let attrs = [Attr::value("a", 1), Attr::flag("b")];
    let first = format_attrs(&attrs).unwrap();
    let second = format_attrs(&attrs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bad_names_are_rejected() {
    for bad in ["", "a b", "x=", "a\"b", "a'b", "<a", "a>", "a/b", "\ta"] {
        let err = format_attrs(&[Attr::flag(bad)]).unwrap_err();
        assert_eq!(err, MarkupError::InvalidAttribute(bad.to_string()));

        let err = format_attrs(&[Attr::value(bad, 1)]).unwrap_err();
        assert_eq!(err, MarkupError::InvalidAttribute(bad.to_string()));
    }
}

#[test]
fn rejection_names_the_offender() {
    let err = format_attrs(&[Attr::flag("ok"), Attr::flag("not ok")]).unwrap_err();
    assert_eq!(err, MarkupError::InvalidAttribute("not ok".to_string()));
    assert!(err.to_string().contains("not ok"));
}
