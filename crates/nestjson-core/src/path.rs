// Splitting of delimiter-separated property paths ("one.two.three").
// There is no escaping: a key that itself contains the delimiter cannot be
// addressed. Pick another delimiter through `PathOptions` for such trees.
use crate::error::{Error, Result};

pub const DEFAULT_DELIMITER: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankSegments {
    /// Any blank segment rejects the whole path.
    #[default]
    Reject,
    /// Segments are trimmed and empty ones dropped ("a..b" reads as "a.b").
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathOptions {
    pub delimiter: char,
    pub blank_segments: BlankSegments,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            blank_segments: BlankSegments::Reject,
        }
    }
}

impl PathOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn skip_blank_segments(mut self) -> Self {
        self.blank_segments = BlankSegments::Skip;
        self
    }
}

/// A parsed property path: one or more non-blank segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> PropertyPath<'a> {
    pub fn parse(raw: &'a str, opts: &PathOptions) -> Result<Self> {
        let invalid = || Error::InvalidPath {
            path: raw.to_string(),
        };
        if raw.trim().is_empty() {
            return Err(invalid());
        }
        let parts = raw.split(opts.delimiter);
        let segments: Vec<&str> = match opts.blank_segments {
            BlankSegments::Reject => {
                let segments: Vec<&str> = parts.collect();
                if segments.iter().any(|s| s.trim().is_empty()) {
                    return Err(invalid());
                }
                segments
            }
            BlankSegments::Skip => parts.map(str::trim).filter(|s| !s.is_empty()).collect(),
        };
        if segments.is_empty() {
            return Err(invalid());
        }
        Ok(Self { raw, segments })
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Splits into the segments to traverse and the final key.
    pub fn split_last(&self) -> (&[&'a str], &'a str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, *last),
            // parse() never yields an empty path
            None => (&[], ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_default_delimiter() {
        let p = PropertyPath::parse("one.two.three", &PathOptions::default()).unwrap();
        assert_eq!(p.segments(), &["one", "two", "three"]);
        let (parents, last) = p.split_last();
        assert_eq!(parents, &["one", "two"]);
        assert_eq!(last, "three");
    }

    #[test]
    fn single_segment_has_no_parents() {
        let p = PropertyPath::parse("one", &PathOptions::default()).unwrap();
        let (parents, last) = p.split_last();
        assert!(parents.is_empty());
        assert_eq!(last, "one");
    }

    #[test]
    fn rejects_blank_paths() {
        for raw in ["", "   ", "\t\n"] {
            let err = PropertyPath::parse(raw, &PathOptions::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidPath { .. }), "{raw:?}");
        }
    }

    #[test]
    fn rejects_blank_segments_by_default() {
        for raw in ["a..b", ".a", "a.", "a. .b"] {
            assert!(PropertyPath::parse(raw, &PathOptions::default()).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn skip_mode_trims_and_drops_empty_segments() {
        let opts = PathOptions::default().skip_blank_segments();
        let p = PropertyPath::parse(" a .. b .", &opts).unwrap();
        assert_eq!(p.segments(), &["a", "b"]);
        assert!(PropertyPath::parse("...", &opts).is_err());
    }

    #[test]
    fn custom_delimiter() {
        let opts = PathOptions::default().with_delimiter('/');
        let p = PropertyPath::parse("a.b/c", &opts).unwrap();
        assert_eq!(p.segments(), &["a.b", "c"]);
    }
}
