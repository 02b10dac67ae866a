//! Laws that hold across families of inputs

use request_target::parse;

use crate::helpers::{multi, scalar};

/// Representative strings without `?` or `#`.
const PLAIN_PATHS: &[&str] = &[
    "",
    "/",
    "/users",
    "/users/12/",
    "relative/path",
    "/a%20b/c+d",
    "/José/😀",
    "/with=equals&amp",
    "%",
];

const FRAGMENTS: &[&str] = &["", "top", "a?b=1", "#", "x&y=2", "%zz"];

#[test]
fn test_plain_path_passes_through() {
    for p in PLAIN_PATHS {
        let target = parse(p);
        assert_eq!(target.path, *p);
        assert!(target.query.is_empty(), "unexpected query for {:?}", p);
    }
}

#[test]
fn test_fragment_has_no_effect() {
    let bases = ["", "/users", "/users?a=1&a=2", "?x", "/a??b=1&&c"];
    for s in bases {
        let expected = parse(s);
        for frag in FRAGMENTS {
            let with_fragment = format!("{}#{}", s, frag);
            assert_eq!(parse(&with_fragment), expected, "input {:?}", with_fragment);
        }
    }
}

#[test]
fn test_empty_keys_never_stored() {
    let inputs = [
        "/?=1",
        "/?=1&a=2",
        "/?a=2&=1",
        "/?a=2&=1&b=3",
        "/?&&=&&",
        "/?=&=&=",
    ];
    for input in inputs {
        let target = parse(input);
        assert!(!target.query.contains_key(""), "empty key stored for {:?}", input);
    }
}

#[test]
fn test_repetition_law() {
    for n in 1..=6 {
        let values: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
        let query: Vec<String> = values.iter().map(|v| format!("k={}", v)).collect();
        let target = parse(&format!("/?{}", query.join("&")));

        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        if n == 1 {
            assert_eq!(target.query["k"], scalar("v0"));
        } else {
            assert_eq!(target.query["k"], multi(&refs));
        }
    }
}

#[test]
fn test_repetition_interleaved_with_other_keys() {
    let target = parse("/?k=1&x=a&k=2&y=b&k=3&x=c");
    assert_eq!(target.query["k"], multi(&["1", "2", "3"]));
    assert_eq!(target.query["x"], multi(&["a", "c"]));
    assert_eq!(target.query["y"], scalar("b"));

    let keys: Vec<&str> = target.query.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["k", "x", "y"]);
}

#[test]
fn test_unreserved_round_trip() {
    let unreserved = ('A'..='Z')
        .chain('a'..='z')
        .chain('0'..='9')
        .chain(['-', '.', '_', '~']);

    // The fixed key is longer than one character, so it never collides with
    // the decoded key of the second pair.
    for c in unreserved {
        let target = parse(&format!("/?key_=%{:02X}&%{:02x}=v", c as u32, c as u32));
        assert_eq!(target.query.len(), 2, "input char {:?}", c);
        assert_eq!(target.query["key_"], scalar(&c.to_string()));
        assert_eq!(target.query[c.to_string().as_str()], scalar("v"));
    }
}
