//! Structured replies sent back to the origin of a command.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a reply reports success or a business-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// The command was carried out or produced information.
    Info,
    /// The command was rejected; the board is unchanged.
    Failure,
}

/// Named section of a reply, such as one board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyField {
    /// Section heading.
    pub name: String,
    /// Section body.
    pub value: String,
    /// Whether chat clients may lay the field out next to its neighbours.
    pub inline: bool,
}

/// Reply to a command, shaped like a chat embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Success or failure.
    pub kind: ReplyKind,
    /// Optional heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Main text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ReplyField>,
}

impl Reply {
    /// Creates an informational reply with a description.
    #[must_use]
    pub fn info(description: impl Into<String>) -> Self {
        Self::with_kind(ReplyKind::Info, description)
    }

    /// Creates a failure reply with a description.
    #[must_use]
    pub fn failure(description: impl Into<String>) -> Self {
        Self::with_kind(ReplyKind::Failure, description)
    }

    /// Creates an informational reply with only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Info,
            title: Some(title.into()),
            description: None,
            fields: Vec::new(),
        }
    }

    fn with_kind(kind: ReplyKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            description: Some(description.into()),
            fields: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(ReplyField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Returns `true` for failure replies.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.kind == ReplyKind::Failure
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections = Vec::new();
        if let Some(title) = &self.title {
            sections.push(title.clone());
        }
        if let Some(description) = &self.description {
            sections.push(description.clone());
        }
        for field in &self.fields {
            sections.push(format!("{}\n{}", field.name, field.value));
        }
        f.write_str(&sections.join("\n\n"))
    }
}
