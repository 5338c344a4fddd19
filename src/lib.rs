//! # Hanjan
//!
//! Client-side data layer for the hanjan drinks community: paginated
//! comment threads, a notification inbox with read state, post and
//! announcement detail views, reports and the specialty drink catalog.
//!
//! ## Architecture
//!
//! Every collection flows through the same pipeline:
//!
//! ```text
//! Fetcher → Merge → Pagination / Read-state → Store → View
//! ```
//!
//! - [`fetcher`]: REST client returning page envelopes or single items
//! - [`store`]: merge strategies, pagination tracking, read-state ledger
//!   and the observable [`ResourceStore`](store::ResourceStore) facade
//! - [`cli`]: a thin command-line view over the stores
//!
//! ## Quick Start
//!
//! ```bash
//! # First page of comments on post 12
//! hanjan comments 12
//!
//! # Inbox, marking one notification as read
//! hanjan notifications --mark-read 3
//!
//! # Write an anonymous comment
//! hanjan comment 12 "잘 봤습니다" --anonymous
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context, error types and notices
//! - [`auth`]: Token role lookup and gated routes
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: TOML configuration
//! - [`domain`]: Resource models (Comment, Notification, PostDetail, ...)
//! - [`fetcher`]: HTTP fetching
//! - [`forms`]: Drafts and client-side validation
//! - [`store`]: Resource stores

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the API
/// client, the token source and one store per resource.
pub mod app;

/// Role lookup from the session token.
///
/// - [`JwtToken`](auth::JwtToken): reads the `role` claim
/// - [`Route`](auth::Route): menu destinations, some manager-only
pub mod auth;

/// Command-line interface using clap.
///
/// - `comments <post-id>` - List a page of comments
/// - `comment <post-id> <content>` - Write a comment
/// - `notifications` - Show the inbox
/// - `post <id>` / `announcement show <id>` - Detail views
/// - `report` - File a report
/// - `drinks` - Specialty drink types
/// - `follow-tags` - Tags you follow
/// - `open <route>` - Open a page in the browser
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/hanjan/config.toml`, supporting:
/// - API endpoint, timeout and token
/// - Per-store page size and failure policy
pub mod config;

/// Resource models.
///
/// - [`Resource`](domain::Resource): identity and timestamp of a stored item
/// - [`PageEnvelope`](domain::PageEnvelope): one page as the server returns it
pub mod domain;

/// HTTP fetching.
///
/// - [`PageFetcher`](fetcher::PageFetcher): async trait for paged collections
/// - [`ItemFetcher`](fetcher::ItemFetcher): async trait for detail views
/// - [`Api`](fetcher::Api): reqwest-based implementation of both
pub mod fetcher;

/// Drafts and validation for the comment, announcement, report and
/// signup forms.
pub mod forms;

/// Client-side resource stores.
///
/// - [`Collection`](store::Collection): ordered, id-unique items
/// - [`MergeStrategy`](store::MergeStrategy): how a fetched page is merged
/// - [`PaginationState`](store::PaginationState): last applied page
/// - [`ResourceStore`](store::ResourceStore): observable facade
pub mod store;
