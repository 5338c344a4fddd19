pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::auth::Route;
use crate::domain::DeclarationType;

#[derive(Parser)]
#[command(name = "hanjan")]
#[command(about = "Command-line client for the hanjan drinks community", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/hanjan/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List comments on a post
    Comments {
        post_id: i64,
        /// Zero-based page number
        #[arg(short, long, default_value_t = 0)]
        page: u32,
        /// Page size (defaults to the configured size)
        #[arg(short, long)]
        size: Option<u32>,
    },
    /// Write a comment on a post
    Comment {
        post_id: i64,
        content: String,
        /// Hide your name
        #[arg(long)]
        anonymous: bool,
    },
    /// Show notifications
    Notifications {
        /// Mark a notification as read after loading
        #[arg(long, value_name = "ID")]
        mark_read: Option<i64>,
    },
    /// Show a post with its first page of comments
    Post { id: i64 },
    /// Announcements
    Announcement {
        #[command(subcommand)]
        action: AnnouncementAction,
    },
    /// Report a post or link
    Report {
        #[arg(long)]
        link: String,
        /// One of: "18세 미만", 사기, 허위, "정보 오류", 기타
        #[arg(long = "type")]
        kind: DeclarationType,
        #[arg(long)]
        content: String,
        /// Open the reported link in the browser afterwards
        #[arg(long)]
        open_link: bool,
    },
    /// List specialty drink types
    Drinks {
        /// Toggle a type in the selection before printing
        #[arg(long, value_name = "TYPE")]
        toggle: Vec<String>,
    },
    /// List the tags you follow
    FollowTags {
        /// Stop following a tag before printing
        #[arg(long, value_name = "TAG_ID")]
        unfollow: Option<i64>,
    },
    /// Open a web page (announcement, faq, specialty-drink, report)
    Open { route: Route },
}

#[derive(Subcommand)]
pub enum AnnouncementAction {
    /// Show one announcement
    Show { id: i64 },
    /// Write an announcement
    Write {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        image_url: Option<String>,
    },
}
