use std::fmt;

pub type SnippetId = u64;

/// Classification label assigned by the backend. The vocabulary is open:
/// unrecognized labels are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Technical,
    Urgent,
    General,
    Other(String),
}

impl Tag {
    /// Tags offered in the filter bar, after the `All` entry.
    pub const KNOWN: [Tag; 3] = [Tag::Technical, Tag::Urgent, Tag::General];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Technical" => Tag::Technical,
            "Urgent" => Tag::Urgent,
            "General" => Tag::General,
            other => Tag::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Tag::Technical => "Technical",
            Tag::Urgent => "Urgent",
            Tag::General => "General",
            Tag::Other(label) => label,
        }
    }

    pub fn accent(&self) -> TagAccent {
        match self {
            Tag::Technical => TagAccent::Technical,
            Tag::Urgent => TagAccent::Urgent,
            Tag::General => TagAccent::General,
            Tag::Other(_) => TagAccent::Neutral,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation hint for a tag; `Neutral` is the fallback for unknown labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAccent {
    All,
    Technical,
    Urgent,
    General,
    Neutral,
}

/// Active tag selection in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Only(Tag),
}

impl TagFilter {
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            TagFilter::All
        } else {
            TagFilter::Only(Tag::from_label(label))
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => "All",
            TagFilter::Only(tag) => tag.label(),
        }
    }

    pub fn accent(&self) -> TagAccent {
        match self {
            TagFilter::All => TagAccent::All,
            TagFilter::Only(tag) => tag.accent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: SnippetId,
    pub content: String,
    pub ai_tag: Tag,
    /// Server timestamp, kept as received (RFC 3339).
    pub created_at: String,
}
