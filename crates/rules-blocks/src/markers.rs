//! Marker strings and the three-region splitter.

/// Opening marker of the region that holds all dependency blocks.
pub const WRAPPER_START: &str = "<-- package-rules-start -->";

/// Closing marker of the region that holds all dependency blocks.
pub const WRAPPER_END: &str = "<-- package-rules-end -->";

/// Delimiter that opens the wrapper body, including its trailing newline.
pub(crate) fn wrapper_open() -> String {
    format!("{WRAPPER_START}\n")
}

/// Delimiter that closes the wrapper body, including its leading newline.
pub(crate) fn wrapper_close() -> String {
    format!("\n{WRAPPER_END}")
}

/// Opening marker for a dependency's block.
pub fn block_start(name: &str) -> String {
    format!("<-- {name}-start -->")
}

/// Closing marker for a dependency's block.
pub fn block_end(name: &str) -> String {
    format!("<-- {name}-end -->")
}

/// Text before, between and after a pair of markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions<'a> {
    pub prelude: &'a str,
    pub body: &'a str,
    pub postlude: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Start,
    End,
}

impl Marker {
    fn other(self) -> Self {
        match self {
            Marker::Start => Marker::End,
            Marker::End => Marker::Start,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Prelude,
    Body {
        opened_by: Marker,
        body_start: usize,
        prelude_end: usize,
    },
    Postlude,
}

/// Split `content` into the text around exactly one `start` .. `end` pair.
///
/// The content is scanned left to right for the next occurrence of either
/// marker, the way a multi-delimiter split would. The split succeeds only if
/// the scan sees exactly two marker occurrences, one of each kind. They may
/// appear in either order: `a END b START c` splits into `a`, `b` and `c`.
/// Any other sequence (no markers, a lone marker, a repeated marker) returns
/// `None`.
///
/// # Example
/// ```
/// use rules_blocks::split_regions;
///
/// let regions = split_regions("a[x]b", "[", "]").unwrap();
/// assert_eq!((regions.prelude, regions.body, regions.postlude), ("a", "x", "b"));
///
/// assert!(split_regions("a[x]b[y]", "[", "]").is_none());
/// ```
pub fn split_regions<'a>(content: &'a str, start: &str, end: &str) -> Option<Regions<'a>> {
    let len = |marker: Marker| match marker {
        Marker::Start => start.len(),
        Marker::End => end.len(),
    };

    let mut state = State::Prelude;
    let mut pos = 0;
    let mut found: Option<Regions<'a>> = None;

    loop {
        let next = next_marker(&content[pos..], start, end).map(|(at, m)| (pos + at, m));

        state = match (state, next) {
            (State::Prelude, Some((at, marker))) => {
                pos = at + len(marker);
                State::Body {
                    opened_by: marker,
                    body_start: pos,
                    prelude_end: at,
                }
            }
            (State::Prelude, None) => return None,
            (
                State::Body {
                    opened_by,
                    body_start,
                    prelude_end,
                },
                Some((at, marker)),
            ) if marker == opened_by.other() => {
                pos = at + len(marker);
                found = Some(Regions {
                    prelude: &content[..prelude_end],
                    body: &content[body_start..at],
                    postlude: &content[pos..],
                });
                State::Postlude
            }
            (State::Body { .. }, _) => return None,
            (State::Postlude, Some(_)) => return None,
            (State::Postlude, None) => return found,
        };
    }
}

/// Earliest occurrence of either marker in `haystack`.
///
/// When both match at the same offset the longer marker wins.
fn next_marker(haystack: &str, start: &str, end: &str) -> Option<(usize, Marker)> {
    match (haystack.find(start), haystack.find(end)) {
        (Some(s), Some(e)) if s < e => Some((s, Marker::Start)),
        (Some(s), Some(e)) if e < s => Some((e, Marker::End)),
        (Some(s), Some(_)) if start.len() >= end.len() => Some((s, Marker::Start)),
        (Some(_), Some(e)) => Some((e, Marker::End)),
        (Some(s), None) => Some((s, Marker::Start)),
        (None, Some(e)) => Some((e, Marker::End)),
        (None, None) => None,
    }
}
