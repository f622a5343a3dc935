// Pre-pass that lets hand-edited JSON through serde_json: drops `//` and
// `/* */` comments and commas directly before `}` or `]`. String contents
// are copied untouched.
use std::borrow::Cow;

#[derive(Clone, Copy)]
pub struct Leniency {
    pub comments: bool,
    pub trailing_commas: bool,
}

pub fn sanitize(src: &str, lenient: Leniency) -> Cow<'_, str> {
    if !lenient.comments && !lenient.trailing_commas {
        return Cow::Borrowed(src);
    }
    if !src.contains('/') && !src.contains(',') {
        return Cow::Borrowed(src);
    }

    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    // Byte offset in `out` of a comma that may still turn out to be trailing.
    let mut pending_comma: Option<usize> = None;
    let mut i = 0;
    let mut copied_from = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                pending_comma = None;
                let end = string_end(bytes, i);
                i = end;
            }
            b'/' if lenient.comments && bytes.get(i + 1) == Some(&b'/') => {
                out.push_str(&src[copied_from..i]);
                i = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(bytes.len(), |p| i + p);
                copied_from = i;
            }
            b'/' if lenient.comments && bytes.get(i + 1) == Some(&b'*') => {
                let Some(close) = src[i + 2..].find("*/") else {
                    // unterminated, leave it for the parser to report
                    break;
                };
                out.push_str(&src[copied_from..i]);
                // keep tokens on either side apart
                out.push(' ');
                i = i + 2 + close + 2;
                copied_from = i;
            }
            b',' if lenient.trailing_commas => {
                out.push_str(&src[copied_from..i]);
                pending_comma = Some(out.len());
                out.push(',');
                i += 1;
                copied_from = i;
            }
            b'}' | b']' => {
                if let Some(at) = pending_comma.take() {
                    out.push_str(&src[copied_from..i]);
                    out.replace_range(at..at + 1, " ");
                    copied_from = i;
                }
                i += 1;
            }
            b if b.is_ascii_whitespace() => i += 1,
            _ => {
                pending_comma = None;
                i += 1;
            }
        }
    }
    out.push_str(&src[copied_from..]);
    Cow::Owned(out)
}

// Index just past the closing quote of the string starting at `start`.
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: Leniency = Leniency {
        comments: true,
        trailing_commas: true,
    };

    fn parse(src: &str) -> serde_json::Value {
        serde_json::from_str(&sanitize(src, ALL)).unwrap()
    }

    #[test]
    fn strips_line_and_block_comments() {
        let v = parse("{\n  // note\n  \"a\": 1, /* inline */ \"b\": 2\n}");
        assert_eq!(v, serde_json::json!({"a": 1, "b": 2}));
    }

    #[test]
    fn drops_trailing_commas() {
        let v = parse(r#"{"a": [1, 2, ], "b": {"c": true,},}"#);
        assert_eq!(v, serde_json::json!({"a": [1, 2], "b": {"c": true}}));
    }

    #[test]
    fn trailing_comma_followed_by_comment() {
        let v = parse("{\"a\": 1, // last\n}");
        assert_eq!(v, serde_json::json!({"a": 1}));
    }

    #[test]
    fn leaves_string_contents_alone() {
        let v = parse(r#"{"url": "http://x/*y*/", "s": "a,}", "q": "say \"//\""}"#);
        assert_eq!(v["url"], "http://x/*y*/");
        assert_eq!(v["s"], "a,}");
        assert_eq!(v["q"], "say \"//\"");
    }

    #[test]
    fn disabled_leniency_is_a_no_op() {
        let src = "{\"a\": 1,}";
        let none = Leniency {
            comments: false,
            trailing_commas: false,
        };
        assert!(matches!(sanitize(src, none), Cow::Borrowed(_)));
        assert!(serde_json::from_str::<serde_json::Value>(&sanitize(src, none)).is_err());
    }

    #[test]
    fn unterminated_block_comment_still_fails() {
        let src = "{\"a\": 1 /* open";
        assert!(serde_json::from_str::<serde_json::Value>(&sanitize(src, ALL)).is_err());
    }
}
