//! Indentation style detection.
//!
//! Operates on raw source lines, not tokens. Comment text is stripped
//! first ("dead weight"), then every surviving line votes with its first
//! byte: tab or space. For space-indented files the most likely indent
//! width is inferred by combining every observed leading-space run with
//! the largest one and tallying the resulting candidates.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Detected indentation style of one source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indentation {
    /// Tab-indented. Tab files always report a size of 1.
    pub tabs: bool,
    /// Indent width in characters.
    pub size: u8,
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tabs {
            write!(f, "{} Tabs", self.size)
        } else {
            write!(f, "{} Spaces", self.size)
        }
    }
}

/// Infer the indentation style of `source`.
///
/// Pure and deterministic: candidate ties break toward the smallest
/// size. A file with no indentation evidence reports one space.
pub fn detect(source: &str) -> Indentation {
    let lines: Vec<&str> = source.split('\n').collect();
    let lines = strip_dead_weight(&lines);

    let mut tabs = 0usize;
    let mut spaces = 0usize;
    let mut runs: BTreeSet<usize> = BTreeSet::new();

    for line in lines {
        match line.as_bytes().first() {
            Some(b'\t') => tabs += 1,
            Some(b' ') => {
                spaces += 1;
                if let Some(run) = leading_space_run(line.as_bytes()) {
                    runs.insert(run);
                }
            }
            _ => {}
        }
    }

    if tabs > spaces {
        return Indentation { tabs: true, size: 1 };
    }

    let max_run = runs.iter().copied().max().unwrap_or(0);

    // Consensus: combine each observed run with the largest one and tally
    // the resulting candidates. Candidates of 1 carry no information.
    let mut tallies: BTreeMap<usize, usize> = BTreeMap::new();
    for run in &runs {
        let candidate = combine(*run, max_run);
        if candidate > 1 {
            *tallies.entry(candidate).or_insert(0) += 1;
        }
    }

    let mut size = 1usize;
    let mut best = 0usize;
    // Ascending iteration + strict comparison: ties go to the smallest.
    for (candidate, tally) in &tallies {
        if *tally > best {
            best = *tally;
            size = *candidate;
        }
    }

    Indentation {
        tabs: false,
        size: u8::try_from(size).unwrap_or(u8::MAX),
    }
}

/// Drop comment-only content before indentation analysis.
///
/// Lines whose trimmed form starts a line comment are dropped; a trimmed
/// `/*` opener starts a block region in which every line is dropped, and
/// a line whose trimmed form ends `*/` closes it. Surviving lines are
/// kept untrimmed. Short (one significant byte) lines outside a block
/// keep only the prefix before any inline `//`; blank lines are dropped.
fn strip_dead_weight<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut in_block = false;
    let mut kept = Vec::new();

    for &line in lines {
        let trimmed = line.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() >= 2 {
            if bytes[0] == b'/' && bytes[1] == b'/' {
                continue;
            } else if bytes[0] == b'/' && bytes[1] == b'*' {
                in_block = true;
            } else if in_block {
                // The closer itself is never emitted.
                if bytes[bytes.len() - 2] == b'*' && bytes[bytes.len() - 1] == b'/' {
                    in_block = false;
                }
            } else {
                kept.push(line);
            }
        } else if !bytes.is_empty() && !in_block {
            match memchr::memmem::find(line.as_bytes(), b"//") {
                Some(pos) => kept.push(&line[..pos]),
                None => kept.push(line),
            }
        }
    }

    kept
}

/// Length of the leading run of spaces, when the line has content after
/// it. All-space lines carry no width information.
fn leading_space_run(line: &[u8]) -> Option<usize> {
    let run = line.iter().take_while(|&&b| b == b' ').count();
    (run < line.len()).then_some(run)
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Least common multiple, written as `larger / gcd * smaller` to keep the
/// intermediate small.
fn combine(a: usize, b: usize) -> usize {
    if a > b {
        (a / gcd(a, b)) * b
    } else {
        (b / gcd(a, b)) * a
    }
}
