/// Maximum snippet length in characters, counted after trimming.
pub const MAX_CONTENT_CHARS: usize = 500;

/// Character count above which the creation form shows a warning.
pub const CHAR_WARN_THRESHOLD: usize = 450;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentError {
    Blank,
    TooLong { chars: usize },
}

impl ContentError {
    pub fn message(self) -> &'static str {
        match self {
            ContentError::Blank => "Please enter some content.",
            ContentError::TooLong { .. } => "Content too long (max 500 chars).",
        }
    }
}

pub fn is_blank(content: &str) -> bool {
    content.trim().is_empty()
}

/// Returns the trimmed content when it is non-blank and within the length limit.
pub fn validate_content(content: &str) -> Result<&str, ContentError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ContentError::Blank);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_CONTENT_CHARS {
        return Err(ContentError::TooLong { chars });
    }
    Ok(trimmed)
}
