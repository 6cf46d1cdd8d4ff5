use std::path::Path;
use std::sync::Arc;

use gretp_portal::chat::{QUICK_RESPONSES, WELCOME_MESSAGE};
use gretp_portal::models::sample;
use gretp_portal::{Action, AppConfig, ChatWidget, FileStorage, SearchQuery, SortKey, Store};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(Path::new(AppConfig::filename())).await?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🏠 GRETP Property Portal");
    info!("Persisting session state to {}", config.storage.dir.display());

    let storage = FileStorage::new(&config.storage.dir);
    let mut store = Store::load(storage).await;

    store.dispatch(Action::SetLoading(true)).await?;
    store.dispatch(Action::SetProperties(sample::properties())).await?;
    store
        .dispatch(Action::SetNotifications(sample::notifications()))
        .await?;

    // Optional free-text query and sort key from the command line
    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_default();
    let sort: SortKey = args.next().unwrap_or_default().parse()?;
    let query = SearchQuery::new(text, sort);

    let state = store.state();
    let listings = query.run(&state.properties, &state.search_filters);

    info!("Found {} matching properties", listings.len());
    for (i, property) in listings.iter().enumerate() {
        let marker = if state.is_favorite(property.id) { "★" } else { " " };
        println!("{}{}. {} ({} AED)", marker, i + 1, property.title, property.price);
        println!(
            "   {} · {} · {} bd / {} ba",
            property.location, property.kind, property.bedrooms, property.bathrooms
        );
        println!(
            "   Rating {} · Energy {} · Built {}",
            property.rating, property.energy_rating, property.year_built
        );
        println!("   Features: {}", property.features.join(", "));
        println!();
    }
    println!(
        "{} favorites · {} unread notifications",
        state.favorites.len(),
        state.unread_notifications()
    );

    if let Some(top) = listings.first() {
        if let Err(e) = store.dispatch(Action::ToggleFavorite(top.id)).await {
            warn!("Favorite not saved: {:#}", e);
        }
    }

    let reply_delay = config.chat.reply_delay();
    let store = store.into_shared();
    let mut chat = ChatWidget::from_config(Arc::clone(&store), &config.chat);

    if store.lock().await.state().chat_messages.is_empty() {
        println!("🤖 {}", WELCOME_MESSAGE);
    }
    println!("Quick responses: {}", QUICK_RESPONSES.join(" | "));

    let sent = match chat.submit(QUICK_RESPONSES[1]).await {
        Ok(sent) => sent,
        Err(e) => {
            warn!("Chat message not saved: {:#}", e);
            true
        }
    };
    if sent {
        tokio::time::sleep(reply_delay + std::time::Duration::from_millis(50)).await;
    }
    chat.close();

    let store = store.lock().await;
    if let Some(reply) = store.state().chat_messages.last() {
        println!("🤖 {}", reply.text);
    }

    info!("💾 Session saved to {}", config.storage.dir.display());

    Ok(())
}
