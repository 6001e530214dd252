use std::fmt;

use crate::region::{CONTENT_REGION, HEADER_REGION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRegion {
    Header,
    Content,
    Both,
}

impl MissingRegion {
    pub(crate) fn from_lookup(header_found: bool, content_found: bool) -> Option<Self> {
        match (header_found, content_found) {
            (true, true) => None,
            (false, true) => Some(MissingRegion::Header),
            (true, false) => Some(MissingRegion::Content),
            (false, false) => Some(MissingRegion::Both),
        }
    }
}

/// The host has no region under one of the required names.
///
/// Not retried: the container layout has to be fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionNotFoundError {
    pub missing: MissingRegion,
    pub header: &'static str,
    pub content: &'static str,
}

impl RegionNotFoundError {
    pub(crate) fn new(missing: MissingRegion) -> Self {
        Self {
            missing,
            header: HEADER_REGION,
            content: CONTENT_REGION,
        }
    }
}

impl fmt::Display for RegionNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = match self.missing {
            MissingRegion::Header => "header",
            MissingRegion::Content => "content",
            MissingRegion::Both => "header and content",
        };
        write!(
            f,
            "{missing} region not found; the container needs regions named \"{}\" and \"{}\"",
            self.header, self.content
        )
    }
}

impl std::error::Error for RegionNotFoundError {}
