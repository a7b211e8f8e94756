//! Splitting and joining text without copying

use tracing::trace;

use crate::error::{Error, Result};
use crate::stage::StageKind;
use crate::view::View;

/// Consecutive `delimiter`-separated spans of `text`, borrowed from it
///
/// Leading, trailing and consecutive delimiters produce empty spans. Empty
/// text produces no spans. An empty delimiter is rejected.
pub fn split<'a>(text: &'a str, delimiter: &'a str) -> Result<View<Split<'a>>> {
    if delimiter.is_empty() {
        trace!(text, "rejecting empty split delimiter");
        return Err(Error::InvalidArgument("split delimiter must not be empty".into()));
    }

    let spans = Split {
        rest: (!text.is_empty()).then_some(text),
        delimiter,
    };
    Ok(View::from_source(spans).tagged(StageKind::Split))
}

/// Concatenate `parts` with `separator` between each of them
pub fn join_str<I>(parts: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for (position, part) in parts.into_iter().enumerate() {
        if position > 0 {
            joined.push_str(separator);
        }
        joined.push_str(part.as_ref());
    }
    joined
}

/// Cursor over the spans of a string
#[derive(Debug, Clone)]
pub struct Split<'a> {
    rest: Option<&'a str>,
    delimiter: &'a str,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find(self.delimiter) {
            Some(at) => {
                let (span, tail) = rest.split_at(at);
                self.rest = tail.strip_prefix(self.delimiter);
                Some(span)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
