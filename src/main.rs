use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hanjan::app::{AppContext, Notice, Result};
use hanjan::cli::{commands, AnnouncementAction, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.as_deref())?;

    if let Err(e) = run(&ctx, cli.command).await {
        if e.is_network() {
            tracing::warn!("request failed: {}", e);
        } else {
            tracing::error!("{}", e);
        }
        eprintln!("{}", Notice::from_error(&e));
        return Err(e.into());
    }

    Ok(())
}

async fn run(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Comments {
            post_id,
            page,
            size,
        } => {
            commands::list_comments(ctx, post_id, page, size).await?;
        }
        Commands::Comment {
            post_id,
            content,
            anonymous,
        } => {
            commands::write_comment(ctx, post_id, &content, anonymous).await?;
        }
        Commands::Notifications { mark_read } => {
            commands::show_notifications(ctx, mark_read).await?;
        }
        Commands::Post { id } => {
            commands::show_post(ctx, id).await?;
        }
        Commands::Announcement { action } => match action {
            AnnouncementAction::Show { id } => {
                commands::show_announcement(ctx, id).await?;
            }
            AnnouncementAction::Write {
                title,
                content,
                image_url,
            } => {
                commands::write_announcement(ctx, title, content, image_url).await?;
            }
        },
        Commands::Report {
            link,
            kind,
            content,
            open_link,
        } => {
            commands::report(ctx, link, kind, content, open_link).await?;
        }
        Commands::Drinks { toggle } => {
            commands::list_drinks(ctx, &toggle).await?;
        }
        Commands::FollowTags { unfollow } => {
            commands::follow_tags(ctx, unfollow).await?;
        }
        Commands::Open { route } => {
            commands::open_route(ctx, route)?;
        }
    }

    Ok(())
}
