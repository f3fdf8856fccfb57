//! Command handlers: render catalog data and errors for the terminal.

use std::io::{self, Write};

use eyre::Result;
use shelfmark_catalog::{BookId, CatalogError, CatalogManager, View};
use tracing::debug;

use crate::cli::Commands;

pub async fn handle_command(cmd: Commands, manager: &mut CatalogManager) -> Result<()> {
    match cmd {
        Commands::Add { title, author } => handle_add(manager, &title, &author).await,
        Commands::List { view, search } => {
            handle_list(manager, view.map_or(View::All, Into::into), search)
        }
        Commands::Update { id, title, author } => {
            handle_update(manager, &id, &title, &author).await
        }
        Commands::Remove { id, force } => handle_remove(manager, &id, force).await,
        Commands::Toggle { id } => handle_toggle(manager, &id).await,
        Commands::Clear { force } => handle_clear(manager, force).await,
        Commands::Stats => handle_stats(manager),
    }
}

async fn handle_add(manager: &mut CatalogManager, title: &str, author: &str) -> Result<()> {
    match manager.add_book(title, author).await {
        Ok(book) => {
            println!("✓ Added '{}' by {}", book.title, book.author);
            println!("  id: {}", book.id);
        }
        Err(e) => report_error(&e),
    }
    Ok(())
}

fn handle_list(manager: &mut CatalogManager, view: View, search: Option<String>) -> Result<()> {
    manager.set_view(view);
    if let Some(term) = search {
        manager.set_search(term);
    }

    let books = manager.filtered_books();
    if books.is_empty() {
        println!("No books to show.");
        return Ok(());
    }

    println!("Reading list ({} books, view: {}):", books.len(), view);
    println!(
        "{:<6} {:<38} {:<40} {:<30}",
        "READ", "ID", "TITLE", "AUTHOR"
    );
    println!("{}", "-".repeat(116));
    for book in &books {
        let marker = if book.is_read { "[x]" } else { "[ ]" };
        println!(
            "{:<6} {:<38} {:<40} {:<30}",
            marker,
            book.id,
            truncate(&book.title, 38),
            truncate(&book.author, 28)
        );
    }
    Ok(())
}

async fn handle_update(
    manager: &mut CatalogManager,
    id: &str,
    title: &str,
    author: &str,
) -> Result<()> {
    let id = BookId::from(id);
    match manager.update_book(&id, title, author).await {
        Ok(book) => println!("✓ Updated '{}' by {}", book.title, book.author),
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn handle_remove(manager: &mut CatalogManager, id: &str, force: bool) -> Result<()> {
    let id = BookId::from(id);

    let Some(book) = manager.get_book(&id).cloned() else {
        println!("✗ Book not found: {id}");
        return Ok(());
    };

    if !force && !confirm(&format!("Remove '{}' by {}?", book.title, book.author))? {
        println!("Cancelled.");
        return Ok(());
    }

    match manager.remove_book(&id).await {
        Ok(()) => println!("✓ Removed '{}'", book.title),
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn handle_toggle(manager: &mut CatalogManager, id: &str) -> Result<()> {
    let id = BookId::from(id);
    match manager.toggle_read(&id).await {
        Ok(book) => {
            let status = if book.is_read { "read" } else { "not read" };
            println!("✓ Marked '{}' as {}", book.title, status);
        }
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn handle_clear(manager: &mut CatalogManager, force: bool) -> Result<()> {
    let total = manager.stats().total;
    if total == 0 {
        println!("The list is already empty.");
        return Ok(());
    }

    if !force && !confirm(&format!("Remove all {total} books?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    match manager.clear_all().await {
        Ok(()) => println!("✓ Cleared the reading list"),
        Err(e) => report_error(&e),
    }
    Ok(())
}

fn handle_stats(manager: &CatalogManager) -> Result<()> {
    let stats = manager.stats();
    println!("Reading list:");
    println!("  total:   {}", stats.total);
    println!("  read:    {}", stats.read);
    println!("  to read: {}", stats.to_read);
    Ok(())
}

/// Render a catalog error as a user-facing message.
fn report_error(error: &CatalogError) {
    debug!("Catalog operation failed: {:?}", error);
    match error {
        CatalogError::Validation { .. }
        | CatalogError::Duplicate { .. }
        | CatalogError::BookNotFound { .. } => println!("✗ {error}"),
        // Storage-side failures; memory kept the change, the file did not.
        _ => println!("✗ Could not save your reading list: {error}"),
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ViewArg;
    use shelfmark_catalog::FilesystemStore;
    use tempfile::TempDir;

    async fn catalog_in(temp_dir: &TempDir) -> CatalogManager {
        let store = FilesystemStore::new(temp_dir.path());
        store.initialize().await.unwrap();
        let mut manager = CatalogManager::open(Box::new(store)).await.unwrap();
        manager.clear_all().await.unwrap();
        manager
    }

    #[tokio::test]
    async fn add_command_persists_the_book() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = catalog_in(&temp_dir).await;

        handle_command(
            Commands::Add {
                title: "Clean Code".to_string(),
                author: "Robert Martin".to_string(),
            },
            &mut manager,
        )
        .await
        .unwrap();

        assert_eq!(manager.stats().total, 1);
        assert_eq!(manager.books()[0].title, "Clean Code");
    }

    #[tokio::test]
    async fn rejected_add_reports_instead_of_failing_the_command() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = catalog_in(&temp_dir).await;

        // An empty title is a user mistake, not a CLI failure.
        let result = handle_command(
            Commands::Add {
                title: "".to_string(),
                author: "Robert Martin".to_string(),
            },
            &mut manager,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(manager.stats().total, 0);
    }

    #[tokio::test]
    async fn forced_remove_skips_the_prompt_and_deletes() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = catalog_in(&temp_dir).await;
        let book = manager.add_book("Clean Code", "Robert Martin").await.unwrap();

        handle_command(
            Commands::Remove {
                id: book.id.to_string(),
                force: true,
            },
            &mut manager,
        )
        .await
        .unwrap();

        assert_eq!(manager.stats().total, 0);
    }

    #[tokio::test]
    async fn remove_with_unknown_id_leaves_the_list_alone() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = catalog_in(&temp_dir).await;
        manager.add_book("Clean Code", "Robert Martin").await.unwrap();

        handle_command(
            Commands::Remove {
                id: "no-such-book".to_string(),
                force: true,
            },
            &mut manager,
        )
        .await
        .unwrap();

        assert_eq!(manager.stats().total, 1);
    }

    #[tokio::test]
    async fn forced_clear_empties_the_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = catalog_in(&temp_dir).await;
        manager.add_book("Book A", "Author A").await.unwrap();
        manager.add_book("Book B", "Author B").await.unwrap();

        handle_command(Commands::Clear { force: true }, &mut manager)
            .await
            .unwrap();

        assert_eq!(manager.stats().total, 0);
    }

    #[tokio::test]
    async fn toggle_command_flips_read_status() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = catalog_in(&temp_dir).await;
        let book = manager.add_book("Clean Code", "Robert Martin").await.unwrap();

        handle_command(
            Commands::Toggle {
                id: book.id.to_string(),
            },
            &mut manager,
        )
        .await
        .unwrap();

        assert!(manager.get_book(&book.id).unwrap().is_read);
    }

    #[tokio::test]
    async fn list_command_applies_the_requested_view_and_search() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = catalog_in(&temp_dir).await;
        let read_one = manager.add_book("Clean Code", "Robert Martin").await.unwrap();
        manager.add_book("Explore It!", "Elisabeth Hendrickson").await.unwrap();
        manager.toggle_read(&read_one.id).await.unwrap();

        handle_command(
            Commands::List {
                view: Some(ViewArg::Read),
                search: Some("martin".to_string()),
            },
            &mut manager,
        )
        .await
        .unwrap();

        assert_eq!(manager.current_view(), View::Read);
        assert_eq!(manager.search_term(), "martin");
        let visible = manager.filtered_books();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, read_one.id);
    }
}
