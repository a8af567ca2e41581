use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use carebook::config::AppConfig;
use carebook::services::account::fixed::FixedAccount;
use carebook::services::display::{
    badge_labels, SERVICE_BADGE_LIMIT, SPECIALTY_BADGE_LIMIT,
};
use carebook::session::CareSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_base_url, "connecting to care services");

    let account = Arc::new(FixedAccount::new(config.family_user_id, Vec::new()));
    let session = CareSession::connect(&config, account);

    let engine = session.search().await;
    if let Some(message) = engine.error() {
        anyhow::bail!("provider search failed: {message}");
    }

    tracing::info!(count = engine.providers().len(), "providers found");
    for provider in engine.providers() {
        let service_names: Vec<String> = provider
            .services
            .iter()
            .map(|s| s.name.clone())
            .collect();
        tracing::info!(
            name = %provider.display_name(),
            category = provider.category.label(),
            rating = provider.rating,
            reviews = provider.total_reviews,
            verified = provider.is_verified,
            price = %provider.price_label(),
            specialties = %badge_labels(&provider.specialties, SPECIALTY_BADGE_LIMIT).join(", "),
            services = %badge_labels(&service_names, SERVICE_BADGE_LIMIT).join(", "),
            "provider"
        );
    }

    let upcoming = session.upcoming_bookings().await?;
    for booking in &upcoming {
        tracing::info!(
            id = booking.id,
            status = booking.status.as_str(),
            scheduled = %booking.scheduled_date,
            "upcoming booking"
        );
    }

    Ok(())
}
