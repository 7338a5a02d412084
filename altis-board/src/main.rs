use altis_board::{build_flight, Config, LogCardEmitter};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "altis_board=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Loaded {} flight(s)", config.flights.len());

    let mut emitter = LogCardEmitter::new();
    for manifest in &config.flights {
        let flight = build_flight(manifest)?;
        tracing::info!(
            flight = %flight.number(),
            available = flight.num_available_seats(),
            "Issuing boarding cards"
        );
        flight.make_boarding_cards(&mut emitter);
    }

    tracing::info!("Issued {} boarding card(s)", emitter.issued());
    Ok(())
}
