use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use station_finder::config::AppConfig;
use station_finder::domain::Station;
use station_finder::engine::score_breakdown;
use station_finder::live::LiveStations;
use station_finder::seed::Seed;
use station_finder::store::StationStore;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let seed = match &config.seed_path {
        Some(path) => Seed::load(path),
        None => Seed::builtin(),
    };
    let seed = match seed {
        Ok(seed) => seed,
        Err(e) => {
            error!("failed to load stations: {e}");
            return ExitCode::FAILURE;
        }
    };

    let live = LiveStations::new(StationStore::from_seed(seed));
    info!(
        lat = config.user_lat,
        lng = config.user_lng,
        limit = config.limit,
        "finding stations"
    );

    print_recommendations(&live, &config).await;

    if config.ticks > 0 {
        info!(
            ticks = config.ticks,
            every_secs = config.tick_secs,
            "simulating live status"
        );
        let mut rng = StdRng::from_os_rng();
        let mut interval = tokio::time::interval(config.tick_interval());
        interval.tick().await; // First tick is immediate, skip it
        for _ in 0..config.ticks {
            interval.tick().await;
            live.tick(&mut rng).await;
            print_recommendations(&live, &config).await;
        }
    }

    ExitCode::SUCCESS
}

async fn print_recommendations(live: &LiveStations, config: &AppConfig) {
    let stations = live
        .recommend(config.user_lat, config.user_lng, config.limit)
        .await;

    if stations.is_empty() {
        println!("No stations available near you.");
        return;
    }

    println!("Recommended stations:");
    for (rank, station) in stations.iter().enumerate() {
        print_station(rank + 1, station, config);
    }
    println!();
}

fn print_station(rank: usize, station: &Station, config: &AppConfig) {
    let breakdown = score_breakdown(station, config.user_lat, config.user_lng);
    let connectors: Vec<&str> = station.connector_types.iter().map(|c| c.as_str()).collect();

    println!(
        "  {rank}. {} ({}) - {:.1} km away, score {:.2}",
        station.name, station.status, breakdown.distance_km, breakdown.total
    );
    println!(
        "     {}/{} in use, rated {:.1} ({} reviews), ${:.2}/kWh, {}",
        station.current_users,
        station.max_capacity,
        station.average_rating,
        station.total_reviews,
        station.price_per_kwh,
        connectors.join(", ")
    );
}
