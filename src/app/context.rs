use std::path::Path;
use std::sync::Arc;

use crate::app::{HanjanError, Result};
use crate::auth::{self, JwtToken, Route, TokenSource};
use crate::config::Config;
use crate::domain::{Announcement, Comment, Notification, PageRequest, PostDetail, Receipt};
use crate::fetcher::{Api, HttpClient};
use crate::forms::{AnnouncementDraft, CommentDraft, DeclarationDraft};
use crate::store::{FetchOutcome, ResourceStore, StoreOptions};

/// Session-scoped wiring: one instance per running client, passed to
/// whatever needs the stores.
pub struct AppContext {
    pub config: Config,
    pub api: Arc<Api>,
    pub tokens: Arc<dyn TokenSource>,
    pub comments: ResourceStore<Comment>,
    pub notifications: ResourceStore<Notification>,
    pub posts: ResourceStore<PostDetail>,
    pub announcements: ResourceStore<Announcement>,
}

impl AppContext {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| HanjanError::Config(e.to_string()))?
        .with_env();

        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let http = HttpClient::new(
            &config.api.base_url,
            config.api.timeout(),
            config.api.token.clone(),
        )?;
        let tokens: Arc<dyn TokenSource> = Arc::new(JwtToken::new(config.api.token.clone()));

        Ok(Self {
            api: Arc::new(Api::new(http)),
            tokens,
            comments: ResourceStore::new("comments", config.comments.store_options()),
            notifications: ResourceStore::new(
                "notifications",
                config.notifications.store_options(),
            ),
            posts: ResourceStore::new("posts", StoreOptions::details()),
            announcements: ResourceStore::new("announcements", StoreOptions::details()),
            config,
        })
    }

    pub async fn fetch_comments(&self, post_id: i64, page: u32, size: Option<u32>) -> FetchOutcome {
        let size = size.unwrap_or(self.config.comments.page_size);
        self.comments
            .fetch(self.api.as_ref(), PageRequest::new(Some(post_id), page, size))
            .await
    }

    pub async fn fetch_notifications(&self) -> FetchOutcome {
        let size = self.config.notifications.page_size;
        self.notifications
            .fetch(self.api.as_ref(), PageRequest::new(None, 0, size))
            .await
    }

    pub async fn write_comment(&self, post_id: i64, draft: &CommentDraft) -> Result<Comment> {
        draft.validate()?;
        self.comments.scope(Some(post_id));

        let api = self.api.clone();
        let content = draft.content.clone();
        self.comments
            .submit(draft.placeholder(post_id), async move {
                let saved = api.write_comment(post_id, &content).await?;
                Ok(draft.finish(saved))
            })
            .await
    }

    pub async fn write_announcement(&self, draft: &AnnouncementDraft) -> Result<Announcement> {
        draft.validate()?;

        let api = self.api.clone();
        self.announcements
            .submit(draft.placeholder(), async move {
                api.write_announcement(&draft.title, &draft.content, draft.image_url())
                    .await
            })
            .await
    }

    pub async fn declare(&self, draft: DeclarationDraft) -> Result<Receipt> {
        let declaration = draft.into_declaration()?;
        let receipt = self.api.declare(&declaration).await?;
        tracing::info!("report filed for {}", declaration.link);
        Ok(receipt)
    }

    pub fn authorize(&self, route: Route) -> Result<()> {
        auth::authorize(route, self.tokens.as_ref())?;
        Ok(())
    }

    pub fn web_url(&self, route: Route) -> String {
        format!(
            "{}{}",
            self.config.web.base_url.trim_end_matches('/'),
            route.path()
        )
    }
}
