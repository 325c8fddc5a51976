//! Canonical byte form of payloads for signing.

use serde_json::Value;

/// Return the bytes to sign for a payload.
///
/// JSON payloads are re-serialized compactly so that two bodies differing
/// only in key order or whitespace sign identically. serde_json's default
/// `Map` keeps object keys sorted, which makes the re-serialization
/// canonical at every nesting level. Anything that does not parse as JSON
/// is signed as-is; this function never fails.
pub fn canonicalize(raw: &[u8]) -> Vec<u8> {
    match serde_json::from_slice::<Value>(raw) {
        Ok(value) => serde_json::to_vec(&value).unwrap_or_else(|_| raw.to_vec()),
        Err(_) => raw.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_sorts_keys_and_strips_whitespace() {
        let a = canonicalize(br#"{ "b": 2, "a": 1 }"#);
        let b = canonicalize(br#"{"a":1,"b":2}"#);
        assert_eq!(a, b);
        assert_eq!(a, br#"{"a":1,"b":2}"#.to_vec());
    }

    #[test]
    fn test_canonicalize_sorts_nested_objects() {
        let a = canonicalize(br#"{"outer": {"z": true, "a": [1, {"y": 0, "x": 0}]}}"#);
        let b = canonicalize(br#"{"outer":{"a":[1,{"x":0,"y":0}],"z":true}}"#);
        assert_eq!(a, b);
    }

    #[test]
    fn test_canonicalize_preserves_array_order() {
        let out = canonicalize(br#"[3, 2, 1]"#);
        assert_eq!(out, b"[3,2,1]".to_vec());
    }

    #[test]
    fn test_canonicalize_passes_non_json_through() {
        let raw = b"not json at all";
        assert_eq!(canonicalize(raw), raw.to_vec());
    }

    #[test]
    fn test_canonicalize_passes_invalid_utf8_through() {
        let raw = [0xff, 0xfe, 0x00, 0x42];
        assert_eq!(canonicalize(&raw), raw.to_vec());
    }

    #[test]
    fn test_canonicalize_handles_scalar_json() {
        assert_eq!(canonicalize(b"  \"hello\"  "), b"\"hello\"".to_vec());
        assert_eq!(canonicalize(b" 42 "), b"42".to_vec());
    }
}
