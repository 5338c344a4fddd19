use crate::domain::{next_local_id, Announcement, Comment, Declaration, DeclarationType};
use crate::forms::{require, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub content: String,
    pub anonymous: bool,
}

impl CommentDraft {
    pub fn new(content: impl Into<String>, anonymous: bool) -> Self {
        Self {
            content: content.into(),
            anonymous,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.content, "댓글")
    }

    pub fn placeholder(&self, post_id: i64) -> Comment {
        Comment::placeholder(next_local_id(), post_id, &self.content, self.anonymous)
    }

    /// What the list should show once the server has stored the comment.
    pub fn finish(&self, saved: Comment) -> Comment {
        if self.anonymous {
            saved.anonymize()
        } else {
            saved
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementDraft {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

impl AnnouncementDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::collect(
            [require(&self.title, "제목"), require(&self.content, "내용")]
                .into_iter()
                .filter_map(Result::err)
                .collect(),
        )
    }

    pub fn image_url(&self) -> &str {
        self.image_url.as_deref().unwrap_or("")
    }

    pub fn placeholder(&self) -> Announcement {
        Announcement::placeholder(
            next_local_id(),
            &self.title,
            &self.content,
            self.image_url.as_deref(),
        )
    }
}

/// Report form. `link` comes from the post being reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationDraft {
    pub link: String,
    pub kind: Option<DeclarationType>,
    pub content: String,
}

impl DeclarationDraft {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..Self::default()
        }
    }

    /// Both reason and description are required.
    pub fn into_declaration(self) -> Result<Declaration, ValidationError> {
        match self.kind {
            Some(kind) if !self.content.is_empty() => Ok(Declaration {
                link: self.link,
                kind,
                content: self.content,
            }),
            Some(_) => Err(ValidationError::Required("신고 내용")),
            None => Err(ValidationError::Required("신고 사유")),
        }
    }
}
