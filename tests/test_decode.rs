use std::path::PathBuf;

use fileserve::http::decode::{DecodeError, decode_path, percent_decode, percent_encode};

#[test]
fn test_decode_passthrough() {
    assert_eq!(percent_decode(b"index.html").unwrap(), b"index.html".to_vec());
    assert_eq!(percent_decode(b"").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_decode_escapes() {
    assert_eq!(percent_decode(b"my%20file.txt").unwrap(), b"my file.txt".to_vec());
    assert_eq!(percent_decode(b"%41%62c").unwrap(), b"Abc".to_vec());
    assert_eq!(percent_decode(b"%2f%2F").unwrap(), b"//".to_vec());
    assert_eq!(percent_decode(b"%00").unwrap(), vec![0u8]);
}

#[test]
fn test_decode_plus_is_literal() {
    assert_eq!(percent_decode(b"a+b").unwrap(), b"a+b".to_vec());
}

#[test]
fn test_decode_unterminated_percent_is_literal() {
    // Fewer than two bytes after '%': copied as-is
    assert_eq!(percent_decode(b"%").unwrap(), b"%".to_vec());
    assert_eq!(percent_decode(b"abc%").unwrap(), b"abc%".to_vec());
    assert_eq!(percent_decode(b"abc%4").unwrap(), b"abc%4".to_vec());
    assert_eq!(percent_decode(b"%4").unwrap(), b"%4".to_vec());
}

#[test]
fn test_decode_escape_at_very_end() {
    assert_eq!(percent_decode(b"abc%41").unwrap(), b"abcA".to_vec());
}

#[test]
fn test_decode_malformed_escape() {
    assert_eq!(
        percent_decode(b"%zz1"),
        Err(DecodeError::InvalidEscape { offset: 0 })
    );
    assert_eq!(
        percent_decode(b"ab%g0"),
        Err(DecodeError::InvalidEscape { offset: 2 })
    );
    assert_eq!(
        percent_decode(b"%4x"),
        Err(DecodeError::InvalidEscape { offset: 0 })
    );
    assert_eq!(
        percent_decode(b"%%41"),
        Err(DecodeError::InvalidEscape { offset: 0 })
    );
}

#[test]
fn test_decode_never_grows() {
    for input in [&b"%41%42"[..], b"plain", b"%", b"a%2", b"%20%20x"] {
        let decoded = percent_decode(input).unwrap();
        assert!(decoded.len() <= input.len());
    }
}

#[test]
fn test_decode_path_utf8() {
    assert_eq!(decode_path(b"caf%C3%A9.txt").unwrap(), PathBuf::from("café.txt"));
    assert_eq!(decode_path(b"docs/a%20b.txt").unwrap(), PathBuf::from("docs/a b.txt"));
}

#[cfg(unix)]
#[test]
fn test_decode_path_keeps_non_utf8_bytes() {
    use std::os::unix::ffi::OsStrExt;

    let path = decode_path(b"%FF.txt").unwrap();
    assert_eq!(path.as_os_str().as_bytes(), b"\xFF.txt");
}

#[cfg(not(unix))]
#[test]
fn test_decode_path_rejects_non_utf8() {
    assert_eq!(decode_path(b"%FF.txt"), Err(DecodeError::InvalidUtf8));
}

#[test]
fn test_decode_path_malformed_escape() {
    assert_eq!(
        decode_path(b"a%zz"),
        Err(DecodeError::InvalidEscape { offset: 1 })
    );
}

#[test]
fn test_encode_keeps_unreserved() {
    assert_eq!(percent_encode(b"dir/a-b_c.~txt"), "dir/a-b_c.~txt");
    assert_eq!(percent_encode(b"a b%"), "a%20b%25");
}

#[test]
fn test_encode_matches_crate_for_reserved_bytes() {
    assert_eq!(percent_encode(b"?#[]@!$&'()*+,;="), "%3F%23%5B%5D%40%21%24%26%27%28%29%2A%2B%2C%3B%3D");
    assert_eq!(percent_encode(&[0x00, 0x7F, 0xFF]), "%00%7F%FF");
}

#[test]
fn test_decode_inverts_encode() {
    let all_bytes: Vec<u8> = (0..=255).collect();
    let samples: Vec<Vec<u8>> = vec![
        b"hello world.html".to_vec(),
        b"100% sure".to_vec(),
        "caf\u{e9}/\u{1f980}.png".as_bytes().to_vec(),
        b"%41 literal".to_vec(),
        all_bytes,
        Vec::new(),
    ];

    for s in samples {
        let encoded = percent_encode(&s);
        assert_eq!(percent_decode(encoded.as_bytes()).unwrap(), s);
    }
}

#[test]
fn test_decode_error_display() {
    let e = DecodeError::InvalidEscape { offset: 3 };
    assert_eq!(e.to_string(), "invalid percent-escape at byte 3");
}
