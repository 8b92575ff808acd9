#![cfg(test)]

use crate::query::query_arguments;

#[test]
fn test_empty_search_strings() {
    assert!(query_arguments("").is_empty());
    assert!(query_arguments("?").is_empty());
}

#[test]
fn test_basic_couples() {
    let args = query_arguments("?a=1&b=two");
    assert_eq!(args.len(), 2);
    assert_eq!(args.get("a").map(String::as_str), Some("1"));
    assert_eq!(args.get("b").map(String::as_str), Some("two"));
}

#[test]
fn test_leading_question_mark_is_optional() {
    assert_eq!(query_arguments("a=1"), query_arguments("?a=1"));
}

#[test]
fn test_bare_key_maps_to_empty_string() {
    let args = query_arguments("?debug&level=3");
    assert_eq!(args.get("debug").map(String::as_str), Some(""));
    assert_eq!(args.get("level").map(String::as_str), Some("3"));
}

#[test]
fn test_value_may_contain_equals() {
    let args = query_arguments("expr=a=b");
    assert_eq!(args.get("expr").map(String::as_str), Some("a=b"));
}

#[test]
fn test_percent_decoding() {
    let args = query_arguments("?name=hello%20world&sym=%3D");
    assert_eq!(args.get("name").map(String::as_str), Some("hello world"));
    assert_eq!(args.get("sym").map(String::as_str), Some("="));
}

#[test]
fn test_plus_is_not_a_space() {
    let args = query_arguments("q=a+b");
    assert_eq!(args.get("q").map(String::as_str), Some("a+b"));
}

#[test]
fn test_malformed_escape_kept_literally() {
    let args = query_arguments("q=100%&r=%zz");
    assert_eq!(args.get("q").map(String::as_str), Some("100%"));
    assert_eq!(args.get("r").map(String::as_str), Some("%zz"));
}

#[test]
fn test_multi_byte_escape_sequence_decodes() {
    let args = query_arguments("price=%E2%82%AC5");
    assert_eq!(args.get("price").map(String::as_str), Some("\u{20ac}5"));
}

#[test]
fn test_non_utf8_escape_kept_in_original_text() {
    // 0xff is a well-formed escape but not valid UTF-8 on its own; it must
    // come through untouched rather than as a replacement character.
    let args = query_arguments("raw=%ff&mixed=%41%ff");
    assert_eq!(args.get("raw").map(String::as_str), Some("%ff"));
    assert_eq!(args.get("mixed").map(String::as_str), Some("A%ff"));

    // A truncated multi-byte sequence also stays literal.
    let args = query_arguments("cut=%E2%82");
    assert_eq!(args.get("cut").map(String::as_str), Some("%E2%82"));
}

#[test]
fn test_later_duplicate_key_wins() {
    let args = query_arguments("a=1&a=2");
    assert_eq!(args.get("a").map(String::as_str), Some("2"));
}
