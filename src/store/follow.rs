//! Tags the signed-in member follows.

use crate::app::{HanjanError, Result};
use crate::domain::FollowTag;
use crate::fetcher::Api;
use crate::store::merge::{Collection, MergeStrategy};

pub const NO_FOLLOW_TAGS: &str = "팔로우한 태그가 없습니다.";

#[derive(Debug, Clone, Default)]
pub struct FollowTagList {
    tags: Collection<FollowTag>,
    member_id: Option<i64>,
}

impl FollowTagList {
    /// Without a member id nothing counts as followed.
    pub fn new(member_id: Option<i64>) -> Self {
        Self {
            tags: Collection::new(),
            member_id,
        }
    }

    pub fn member_id(&self) -> Option<i64> {
        self.member_id
    }

    /// Replace the whole list, every member's follows included.
    pub fn load(&mut self, tags: Vec<FollowTag>) {
        self.tags.merge(tags, MergeStrategy::Replace);
    }

    pub fn mine(&self) -> Vec<&FollowTag> {
        match self.member_id {
            Some(member_id) => self.tags.iter().filter(|t| t.member_id == member_id).collect(),
            None => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mine().is_empty()
    }

    /// Drops the member's follow of `tag_id`; other members' follows of the
    /// same tag stay.
    pub fn remove(&mut self, tag_id: i64) -> Option<FollowTag> {
        let member_id = self.member_id?;
        self.tags.remove(&(member_id, tag_id))
    }

    /// Leaves the current list untouched on failure.
    pub async fn fetch(&mut self, api: &Api) -> Result<()> {
        match api.follow_tags().await {
            Ok(tags) => {
                self.load(tags);
                tracing::debug!("loaded {} follow tags", self.mine().len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching follow tags: {}", e);
                Err(e)
            }
        }
    }

    /// Removes the tag locally first and puts it back if the server refuses.
    pub async fn unfollow(&mut self, api: &Api, tag_id: i64) -> Result<FollowTag> {
        let removed = self
            .remove(tag_id)
            .ok_or_else(|| HanjanError::NotFound(format!("follow tag {}", tag_id)))?;

        match api.unfollow_tag(tag_id).await {
            Ok(()) => Ok(removed),
            Err(e) => {
                tracing::error!("Error unfollowing tag {}: {}", tag_id, e);
                self.tags.merge(vec![removed], MergeStrategy::AppendDedup);
                Err(e)
            }
        }
    }
}
