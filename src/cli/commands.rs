use crate::app::{AppContext, HanjanError, Notice, Result};
use crate::auth::Route;
use crate::domain::{Comment, DeclarationType, Resource};
use crate::forms::{AnnouncementDraft, CommentDraft, DeclarationDraft};
use crate::store::{DrinkTypeSelection, FetchOutcome, FollowTagList, ResourceStore, NO_FOLLOW_TAGS};

pub async fn list_comments(ctx: &AppContext, post_id: i64, page: u32, size: Option<u32>) -> Result<()> {
    let outcome = ctx.fetch_comments(post_id, page, size).await;
    check_outcome(&ctx.comments, outcome)?;

    print_comments(&ctx.comments);
    Ok(())
}

pub async fn write_comment(ctx: &AppContext, post_id: i64, content: &str, anonymous: bool) -> Result<()> {
    let draft = CommentDraft::new(content, anonymous);
    let saved = ctx.write_comment(post_id, &draft).await?;

    println!("{}", Notice::success("댓글이 등록되었습니다."));
    println!("  #{} {}: {}", saved.id, saved.display_name(), saved.content);
    Ok(())
}

pub async fn show_notifications(ctx: &AppContext, mark_read: Option<i64>) -> Result<()> {
    let outcome = ctx.fetch_notifications().await;
    check_outcome(&ctx.notifications, outcome)?;

    if let Some(id) = mark_read {
        if !ctx.notifications.mark_read(&id) {
            return Err(HanjanError::NotFound(format!("notification {}", id)));
        }
    }

    let state = ctx.notifications.snapshot();
    if state.items.is_empty() {
        println!("No notifications");
        return Ok(());
    }

    for notification in &state.items {
        let marker = if notification.unread() { "●" } else { " " };
        println!(
            "{} #{} {} [{}] {}",
            marker,
            notification.id,
            notification.created_at.format("%Y-%m-%d %H:%M"),
            notification.kind,
            notification.content
        );
    }
    println!("{} unread", state.unread_count);
    Ok(())
}

pub async fn show_post(ctx: &AppContext, id: i64) -> Result<()> {
    let post = ctx
        .posts
        .load_one(ctx.api.as_ref(), &id)
        .await
        .ok_or_else(|| failure(&ctx.posts, format!("post {}", id)))?;

    println!("{}", post.headline());
    println!(
        "  {} · ★{:.1} · 조회 {}",
        post.member_name, post.rating, post.view_count
    );
    println!(
        "  {} {}도 · {}원",
        post.drink.drink_type, post.drink.degree, post.drink.cost
    );
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t.tag_name)).collect();
        println!("  {}", tags.join(" "));
    }
    println!("\n{}\n", post.content);

    // Comments are secondary here; a failure is reported but not fatal.
    match ctx.fetch_comments(id, 0, None).await {
        FetchOutcome::Applied => print_comments(&ctx.comments),
        _ => eprintln!("댓글을 불러오지 못했습니다."),
    }
    Ok(())
}

pub async fn show_announcement(ctx: &AppContext, id: i64) -> Result<()> {
    let announcement = ctx
        .announcements
        .load_one(ctx.api.as_ref(), &id)
        .await
        .ok_or_else(|| failure(&ctx.announcements, format!("announcement {}", id)))?;

    println!("{}", announcement.title);
    println!("  {}", announcement.display_date());
    if let Some(image) = announcement.image_url.as_deref().filter(|u| !u.is_empty()) {
        println!("  {}", image);
    }
    println!("\n{}", announcement.content);
    Ok(())
}

pub async fn write_announcement(
    ctx: &AppContext,
    title: String,
    content: String,
    image_url: Option<String>,
) -> Result<()> {
    let draft = AnnouncementDraft {
        title,
        content,
        image_url,
    };
    let saved = ctx.write_announcement(&draft).await?;

    println!("{}", Notice::success("공지사항이 등록되었습니다."));
    println!("  #{} {}", saved.id, saved.title);
    Ok(())
}

pub async fn report(
    ctx: &AppContext,
    link: String,
    kind: DeclarationType,
    content: String,
    open_link: bool,
) -> Result<()> {
    let draft = DeclarationDraft {
        link: link.clone(),
        kind: Some(kind),
        content,
    };
    let receipt = ctx.declare(draft).await?;

    println!("{}", Notice::success("신고가 접수되었습니다."));
    if let Some(id) = receipt.id {
        println!("  접수 번호 {}", id);
    }

    if open_link {
        open::that(&link)?;
    }
    Ok(())
}

pub async fn list_drinks(ctx: &AppContext, toggle: &[String]) -> Result<()> {
    let mut selection = DrinkTypeSelection::new();
    selection.fetch(&ctx.api).await?;

    for kind in toggle {
        selection.toggle(kind);
    }

    if selection.all().is_empty() {
        println!("No drink types");
        return Ok(());
    }

    for kind in selection.all() {
        let marker = if selection.is_selected(kind) { "x" } else { " " };
        println!("[{}] {}", marker, kind);
    }
    Ok(())
}

pub async fn follow_tags(ctx: &AppContext, unfollow: Option<i64>) -> Result<()> {
    let mut list = FollowTagList::new(ctx.tokens.member_id());
    list.fetch(&ctx.api).await?;

    if let Some(tag_id) = unfollow {
        let removed = list.unfollow(&ctx.api, tag_id).await?;
        println!("{}", Notice::success(format!("{} 팔로우를 취소했습니다.", removed.label())));
    }

    if list.is_empty() {
        println!("{}", NO_FOLLOW_TAGS);
        return Ok(());
    }

    for tag in list.mine() {
        println!("{}", tag.label());
    }
    Ok(())
}

pub fn open_route(ctx: &AppContext, route: Route) -> Result<()> {
    ctx.authorize(route)?;

    let url = ctx.web_url(route);
    println!("Opening {}", url);
    open::that(&url)?;
    Ok(())
}

fn print_comments(store: &ResourceStore<Comment>) {
    let state = store.snapshot();
    if state.items.is_empty() {
        println!("No comments");
        return;
    }

    for comment in &state.items {
        println!(
            "#{} {} {}",
            comment.id,
            comment.display_name(),
            comment.created_at.format("%Y-%m-%d %H:%M")
        );
        println!("  {}", comment.content);
    }

    let page = state.pagination;
    println!(
        "page {}/{} ({} total){}",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements,
        if page.has_next() { ", more with --page" } else { "" }
    );
}

fn check_outcome<T: Resource>(store: &ResourceStore<T>, outcome: FetchOutcome) -> Result<()> {
    match outcome {
        FetchOutcome::Applied | FetchOutcome::Discarded => Ok(()),
        FetchOutcome::Rejected => Err(HanjanError::InvalidRequest(format!(
            "{}: page size must be positive",
            store.name()
        ))),
        FetchOutcome::Failed => Err(failure(store, store.name().to_string())),
    }
}

fn failure<T: Resource>(store: &ResourceStore<T>, what: String) -> HanjanError {
    match store.last_error() {
        Some(message) => HanjanError::Fetch {
            resource: what,
            message,
        },
        None => HanjanError::NotFound(what),
    }
}
