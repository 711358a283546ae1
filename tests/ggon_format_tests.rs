use serde_ggon::{
    decode, decode_with_options, encode, encode_with_options, list_to_map, map_to_list, Error,
    GgonMap, GgonOptions, Value,
};

fn map(entries: &[(&str, &str)]) -> Value {
    let mut map = GgonMap::new();
    for (key, value) in entries {
        map.insert(key.to_string(), Value::from(*value));
    }
    Value::Map(map)
}

fn encode_lists(value: &Value) -> String {
    encode_with_options(value, &GgonOptions::lists())
}

#[test]
fn test_plain_safe_strings_are_bare() {
    for s in ["abc", "12.0", "-5", "+3", "_", "a.b-c+d_e"] {
        assert_eq!(encode(&Value::from(s)), s);
    }
}

#[test]
fn test_other_strings_are_quoted() {
    let cases = [
        ("a b", "'a b'"),
        ("it's", r"'it\'s'"),
        (r"back\slash", r"'back\\slash'"),
        ("line\nbreak", r"'line\nbreak'"),
        ("cr\rtab\tnul\0", r"'cr\rtab\tnul\0'"),
        ("{}", "'{}'"),
        ("caf\u{e9}", "'caf\u{e9}'"),
        ("[x]", "'[x]'"),
    ];
    for (raw, encoded) in cases {
        assert_eq!(encode(&Value::from(raw)), encoded);
        assert_eq!(decode(encoded).unwrap(), Value::from(raw));
    }
}

#[test]
fn test_quoted_and_bare_are_indistinguishable() {
    assert_eq!(decode("'12'").unwrap(), decode("12").unwrap());
    assert_eq!(encode(&decode("'12'").unwrap()), "12");
}

#[test]
fn test_list_decode() {
    let options = GgonOptions::lists();
    assert_eq!(
        decode_with_options("[]", &options).unwrap(),
        map(&[("length", "0")])
    );
    assert_eq!(
        decode_with_options("[a, b]", &options).unwrap(),
        map(&[("length", "2"), ("0", "a"), ("1", "b")])
    );
}

#[test]
fn test_list_encode() {
    assert_eq!(encode_lists(&map(&[("length", "0")])), "[]");
    assert_eq!(
        encode_lists(&map(&[("length", "2"), ("0", "a"), ("1", "b")])),
        "[a,b]"
    );
}

#[test]
fn test_invalid_lists_use_braces() {
    let not_lists = [
        map(&[("length", "a"), ("0", "a"), ("1", "b")]),
        map(&[("length", "3"), ("0", "a"), ("1", "b")]),
        map(&[("length", "3"), ("0", "a"), ("2", "c")]),
        map(&[("length", "1"), ("0", "a"), ("name", "x")]),
        map(&[("length", "01"), ("0", "a")]),
        map(&[("0", "a")]),
    ];
    for value in &not_lists {
        let encoded = encode_lists(value);
        assert!(encoded.starts_with('{'), "{} encoded as a list", encoded);
        assert!(!value.is_list());
    }
}

#[test]
fn test_list_with_length_map_is_not_list() {
    let mut inner = GgonMap::new();
    inner.insert("length".to_string(), Value::Map(GgonMap::new()));
    let value = Value::Map(inner);
    assert!(!value.is_list());
    assert_eq!(encode_lists(&value), "{length:{}}");
    assert!(matches!(map_to_list(&value), Err(Error::Conversion(_))));
}

#[test]
fn test_list_validity_ignores_key_order() {
    let value = map(&[("1", "b"), ("length", "2"), ("0", "a")]);
    assert_eq!(encode_lists(&value), "[a,b]");
    // Minimal encoding keeps the map as written
    assert_eq!(encode(&value), "{1:b,length:2,0:a}");
}

#[test]
fn test_empty_list_helpers() {
    let empty = list_to_map(Vec::new());
    let inner = empty.as_map().unwrap();
    assert_eq!(inner.len(), 1);
    assert_eq!(inner.get("length"), Some(&Value::from("0")));
    assert!(map_to_list(&empty).unwrap().is_empty());
}

#[test]
fn test_nested_lists() {
    let options = GgonOptions::lists();
    let value = decode_with_options("[[], [a, [b]], {k: [c]}]", &options).unwrap();
    assert_eq!(encode_lists(&value), "[[],[a,[b]],{k:[c]}]");
    assert_eq!(
        encode(&value),
        "{length:3,0:{length:0},1:{length:2,0:a,1:{length:1,0:b}},2:{k:{length:1,0:c}}}"
    );
}

#[test]
fn test_whitespace_between_tokens() {
    let value = decode(" \t{\r\n a \n:\n b ,\tc:d\n}\n").unwrap();
    assert_eq!(encode(&value), "{a:b,c:d}");
}

#[test]
fn test_duplicate_keys() {
    let value = decode("{a:1,b:2,a:3}").unwrap();
    assert_eq!(encode(&value), "{a:3,b:2}");
}

#[test]
fn test_syntax_error_positions() {
    let cases = [
        ("{foo;bar}", (1, 5)),
        ("{\n  a: b\n  c: d\n}", (3, 3)),
        ("'a\\xb'", (1, 3)),
        ("{a:b}}", (1, 6)),
        ("}", (1, 1)),
        ("{a:b,}", (1, 6)),
        ("\"a\"", (1, 1)),
    ];
    for (input, position) in cases {
        let err = decode(input).unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }), "{:?}: {:?}", input, err);
        assert_eq!(err.position(), Some(position), "{:?}", input);
    }
}

#[test]
fn test_truncated_input() {
    let cases = [
        ("", (1, 1)),
        ("{", (1, 2)),
        ("{foo:bar", (1, 9)),
        ("{a:\n", (2, 1)),
        ("'abc", (1, 5)),
    ];
    for (input, position) in cases {
        let err = decode(input).unwrap_err();
        assert!(
            matches!(err, Error::UnexpectedEof { .. }),
            "{:?}: {:?}",
            input,
            err
        );
        assert_eq!(err.position(), Some(position), "{:?}", input);
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        decode("{a:b c}").unwrap_err().to_string(),
        "Syntax error at line 1, column 6: unexpected token string \"c\" after value"
    );
    assert_eq!(
        decode("{a:b").unwrap_err().to_string(),
        "Unexpected end of input at line 1, column 5: expected ',' or '}'"
    );
    assert_eq!(
        decode("{a:'x\\y'}").unwrap_err().to_string(),
        "Syntax error at line 1, column 6: unknown escape sequence \"\\y\""
    );
}

#[test]
fn test_depth_limit_is_configurable() {
    let deep = format!("{}x{}", "{a:".repeat(200), "}".repeat(200));
    assert!(decode(&deep).is_err());

    let options = GgonOptions::new().with_max_depth(256);
    let value = decode_with_options(&deep, &options).unwrap();
    assert_eq!(encode(&value), deep);
}
