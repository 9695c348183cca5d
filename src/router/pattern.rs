use std::fmt;

use crate::error::{Error, Result};

use super::Props;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route pattern such as `/details/:genre`.
///
/// Segments are separated by `/`. A segment starting with `:` binds a
/// parameter. Parameters bind exactly one segment, except the final one,
/// which takes the rest of the path as is, slashes and all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let body = pattern
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with `/`"))?;

        let mut segments = Vec::new();
        if !body.is_empty() {
            for part in body.split('/') {
                let segment = match part.strip_prefix(':') {
                    Some("") => return Err(invalid("parameter has no name")),
                    Some(name) => {
                        if segments.contains(&Segment::Param(name.to_string())) {
                            return Err(invalid("parameter bound twice"));
                        }
                        Segment::Param(name.to_string())
                    }
                    None if part.is_empty() => return Err(invalid("empty segment")),
                    None => Segment::Static(part.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// `/`
    pub(crate) fn root() -> Self {
        Self {
            raw: "/".to_string(),
            segments: Vec::new(),
        }
    }

    /// `/details/:genre`
    pub(crate) fn details() -> Self {
        Self {
            raw: "/details/:genre".to_string(),
            segments: vec![
                Segment::Static("details".to_string()),
                Segment::Param("genre".to_string()),
            ],
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameters in declaration order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match `path` against the pattern, binding parameters on success.
    pub fn matches(&self, path: &str) -> Option<Props> {
        let mut rest = path.strip_prefix('/')?;
        let mut props = Props::new();
        let last = self.segments.len().saturating_sub(1);

        for (index, segment) in self.segments.iter().enumerate() {
            let (head, tail) = if index == last {
                (rest, "")
            } else {
                rest.split_once('/')?
            };
            match segment {
                Segment::Static(expected) if head == expected => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    // A parameter before the end must bind a whole segment.
                    if index != last && head.is_empty() {
                        return None;
                    }
                    props.insert(name.clone(), head.to_string());
                }
            }
            rest = tail;
        }

        if self.segments.is_empty() && !rest.is_empty() {
            return None;
        }
        Some(props)
    }

    /// Build a concrete path by substituting `params`.
    pub(crate) fn fill(&self, params: &Props) -> std::result::Result<String, String> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| name.clone())?;
                    path.push_str(value);
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw)
    }
}
