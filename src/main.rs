use simsar::advice::{get_property_advice, GeminiAdvisor};
use simsar::auth::{AuthFlow, FlowStep, SimulatedAuthBackend};
use simsar::dashboard::CompanyStats;
use simsar::{Action, AppState, Config, Outcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEMO_ADMIN_PHONE: &str = "65814909";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Simsar - Kuwait property listings");

    let config = Config::from_env()?;
    let mut state = AppState::with_mock_data()?;

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !query.is_empty() {
        info!("Searching for '{}'", query);
        state.apply(Action::SetQuery(query));
    }

    let listings = state.visible_listings();
    info!("✅ {} matching listings\n", listings.len());

    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, listing.price_label());
        println!(
            "   {} {} · {} غرف · {} م²",
            listing.category, listing.purpose, listing.rooms, listing.space_sqm
        );
        println!("   {} - {}", listing.area, listing.governorate);
        println!("   ID: {}", listing.id);
        println!("   WhatsApp: {}", listing.whatsapp_link());
        println!();
    }

    if let Some(first) = listings.first() {
        match &config.advice.api_key {
            Some(key) => {
                let advisor = GeminiAdvisor::new(key.clone(), &config.advice)?;
                let advice =
                    get_property_advice(&advisor, &first.title, first.price, &first.area).await;
                println!("💡 {}", advice);
            }
            None => warn!("GEMINI_API_KEY not set, skipping advice"),
        }
    }

    // Sign in as the sample company admin and show the dashboard summary
    let mut flow = AuthFlow::new(SimulatedAuthBackend::new(config.auth_delay));
    flow.set_phone(DEMO_ADMIN_PHONE);
    flow.set_password("demo-password");
    if let FlowStep::Completed(success) = flow.submit().await? {
        state.apply(Action::LoginSucceeded(success));
    }

    if state.apply(Action::OpenDashboard) == Outcome::Updated {
        if let Some(user) = state.user() {
            let stats = CompanyStats::for_user(user, state.company(), state.listings());
            info!(
                "📊 {}: {} listings, {} of {} credits left",
                state.company().name,
                stats.active_listings,
                stats.remaining_credits,
                stats.total_credits
            );
        }
    }

    Ok(())
}
