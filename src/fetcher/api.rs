//! Typed REST endpoints of the community backend.

use async_trait::async_trait;

use crate::app::{HanjanError, Result};
use crate::domain::{
    Announcement, AnnouncementWrite, Comment, CommentWrite, Declaration, FollowTag, Notification,
    PageEnvelope, PageRequest, PostDetail, Receipt, SpecialtyDrink,
};
use crate::fetcher::{HttpClient, ItemFetcher, PageFetcher};

/// Static drink catalog, resolved against the API base like every endpoint.
pub const SPECIALTY_CATALOG: &str = "specialtyDrink.json";

pub struct Api {
    http: HttpClient,
}

impl Api {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    fn page_query(request: &PageRequest) -> Result<[(&'static str, String); 2]> {
        if !request.is_valid() {
            return Err(HanjanError::InvalidRequest(format!(
                "page size must be positive, got {}",
                request.size
            )));
        }
        Ok([
            ("page", request.page.to_string()),
            ("size", request.size.to_string()),
        ])
    }

    pub async fn comments(&self, post_id: i64, request: PageRequest) -> Result<PageEnvelope<Comment>> {
        let query = Self::page_query(&request)?;
        self.http
            .get(&format!("posts/{}/comments", post_id), &query)
            .await
    }

    pub async fn write_comment(&self, post_id: i64, content: &str) -> Result<Comment> {
        self.http
            .post(&format!("posts/{}/comments", post_id), &CommentWrite { content })
            .await
    }

    pub async fn notifications(&self, request: PageRequest) -> Result<PageEnvelope<Notification>> {
        let query = Self::page_query(&request)?;
        self.http.get("notifications", &query).await
    }

    pub async fn post_detail(&self, post_id: i64) -> Result<PostDetail> {
        self.http.get(&format!("posts/{}", post_id), &[]).await
    }

    pub async fn announcement(&self, id: i64) -> Result<Announcement> {
        self.http.get(&format!("announcements/{}", id), &[]).await
    }

    pub async fn write_announcement(
        &self,
        title: &str,
        content: &str,
        image_url: &str,
    ) -> Result<Announcement> {
        let body = AnnouncementWrite {
            title,
            content,
            image_url,
        };
        self.http.post("announcements", &body).await
    }

    pub async fn declare(&self, declaration: &Declaration) -> Result<Receipt> {
        self.http.post("declarations", declaration).await
    }

    pub async fn specialty_drinks(&self) -> Result<Vec<SpecialtyDrink>> {
        self.http.get(SPECIALTY_CATALOG, &[]).await
    }

    /// Follows of every member; not paginated.
    pub async fn follow_tags(&self) -> Result<Vec<FollowTag>> {
        self.http.get("follow-tags", &[]).await
    }

    pub async fn unfollow_tag(&self, tag_id: i64) -> Result<()> {
        self.http.delete(&format!("follow-tags/{}", tag_id)).await
    }
}

#[async_trait]
impl PageFetcher<Comment> for Api {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageEnvelope<Comment>> {
        let post_id = request
            .resource_id
            .ok_or_else(|| HanjanError::InvalidRequest("comments need a post id".into()))?;
        self.comments(post_id, request).await
    }
}

#[async_trait]
impl PageFetcher<Notification> for Api {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageEnvelope<Notification>> {
        self.notifications(request).await
    }
}

#[async_trait]
impl ItemFetcher<PostDetail> for Api {
    async fn fetch_item(&self, id: &i64) -> Result<PostDetail> {
        self.post_detail(*id).await
    }
}

#[async_trait]
impl ItemFetcher<Announcement> for Api {
    async fn fetch_item(&self, id: &i64) -> Result<Announcement> {
        self.announcement(*id).await
    }
}
