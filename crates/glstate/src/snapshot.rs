//! An owned, in-memory state source.
//!
//! A [`StateSnapshot`] holds values that were queried earlier, grouped into
//! sections by the API version that introduced them. Sections newer than the
//! snapshot's version still list their attributes, but every value renders as
//! `n/a`.

use alloc::{format, string::String, vec::Vec};
use core::fmt;

use crate::{
    error::ReportError,
    state::{Capture, StateSource, StateValue},
};

/// A `major.minor` API version. Orders by major, then minor.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl ApiVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Attributes introduced by one API version.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Headline text; `None` for the leading section that has no headline.
    pub title: Option<String>,
    /// Oldest version in which these attributes exist.
    pub since: ApiVersion,
    pub attributes: Vec<(String, StateValue)>,
}

impl Section {
    pub fn untitled(since: ApiVersion) -> Self {
        Self {
            title: None,
            since,
            attributes: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<String>, since: ApiVersion) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::untitled(since)
        }
    }

    /// A section headed `GL_VERSION_<major>_<minor>`.
    pub fn for_version(since: ApiVersion) -> Self {
        Self::titled(format!("GL_VERSION_{}_{}", since.major, since.minor), since)
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<StateValue>) {
        self.attributes.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StateValue>) -> Self {
        self.push(name, value);
        self
    }
}

#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Version of the context the values were read from.
    pub version: ApiVersion,
    pub sections: Vec<Section>,
}

impl StateSnapshot {
    pub fn new(version: ApiVersion) -> Self {
        Self {
            version,
            sections: Vec::new(),
        }
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.push_section(section);
        self
    }
}

impl StateSource for StateSnapshot {
    fn capture(&self, capture: &mut Capture<'_>) -> Result<(), ReportError> {
        for section in &self.sections {
            if let Some(title) = &section.title {
                capture.section(title)?;
            }

            if section.since <= self.version {
                for (name, value) in &section.attributes {
                    capture.attribute(name, value)?;
                }
            } else {
                log::trace!(
                    "section {:?} needs {}, context is {}",
                    section.title,
                    section.since,
                    self.version
                );
                for (name, _) in &section.attributes {
                    capture.unavailable(name)?;
                }
            }
        }
        Ok(())
    }
}
