use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single video in the catalog
///
/// Title, id and tags are fixed at creation; the flag is the only
/// mutable part and is written through `set_flag`/`clear_flag` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Video title
    title: String,

    /// Unique identifier for this video
    id: String,

    /// Tags, in their given order
    tags: Vec<String>,

    /// Flag reason when the video is flagged, `None` otherwise.
    /// `Some` doubles as the flagged marker, so reason-without-flag
    /// (or the reverse) cannot be represented.
    flag: Option<String>,
}

impl Video {
    /// Create a new unflagged video
    pub fn new(
        title: impl Into<String>,
        id: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            flag: None,
        }
    }

    /// Video title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unique video id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tags in stored order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Flag reason, present only while flagged
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Mark the video as flagged with the given reason
    pub fn set_flag(&mut self, reason: impl Into<String>) {
        self.flag = Some(reason.into());
    }

    /// Remove the flag and its reason
    pub fn clear_flag(&mut self) {
        self.flag = None;
    }
}

/// Canonical one-line rendering used by every listing:
/// `<title> (<id>) [<tag1> <tag2> ...]`, with a
/// ` - FLAGGED (reason: <reason>)` suffix while flagged.
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))?;
        if let Some(reason) = &self.flag {
            write!(f, " - FLAGGED (reason: {reason})")?;
        }
        Ok(())
    }
}
