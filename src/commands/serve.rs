use crate::server;
use crate::services::{HealthStats, SharedHealthStats};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

pub async fn run(port: u16) {
    println!("🚀 Starting stockboard server on port {}", port);

    let start_time = Instant::now();
    let shared_health_stats: SharedHealthStats = Arc::new(RwLock::new(HealthStats::default()));

    // Spawn uptime tracker
    let uptime_health_stats = shared_health_stats.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
            let mut health = uptime_health_stats.write().await;
            health.uptime_secs = start_time.elapsed().as_secs();
        }
    });

    println!("🌐 Dashboard: http://localhost:{}/", port);
    println!("   Upload a CSV (Date, Open, High, Low, Close, Adj Close, Volume) to render charts");
    println!();

    if let Err(e) = server::serve(shared_health_stats, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
