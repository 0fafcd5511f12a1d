//! Notification inbox commands.

use golden_fig_commerce::NotificationDraft;

use super::{CliError, open_store, resolve_identity};

/// Print the inbox, newest first.
pub fn list(user: Option<&str>, unread_only: bool) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let store = open_store()?;
    let inbox = store.notifications(&identity);

    if inbox.is_empty() {
        tracing::info!("Inbox for {identity} is empty");
        return Ok(());
    }

    tracing::info!(
        "Inbox for {identity} ({} unread):",
        store.unread_count(&identity)
    );
    for entry in inbox.iter().filter(|n| !unread_only || !n.read) {
        let marker = if entry.read { " " } else { "*" };
        tracing::info!(
            "{marker} [{}] {} - {}",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.title,
            entry.body
        );
    }
    Ok(())
}

/// Deliver a notification.
pub fn add(title: &str, body: &str, user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let mut store = open_store()?;

    let ack = store.add_notification(&identity, NotificationDraft::new(title, body));
    tracing::info!("{ack}");
    Ok(())
}

/// Mark everything read.
pub fn mark_read(user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let mut store = open_store()?;

    store.mark_all_read(&identity);
    tracing::info!("Inbox for {identity} marked read");
    Ok(())
}

/// Empty the inbox.
pub fn clear(user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let mut store = open_store()?;

    store.clear_notifications(&identity);
    tracing::info!("Inbox for {identity} cleared");
    Ok(())
}
