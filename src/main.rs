use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use swarm_tracker::common::common::setup_logging;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::http::http_service;
use swarm_tracker::http::structs::http_service_data::HttpServiceData;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(TorrentTracker::new(config.clone()));
            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

            let mut deadlocks_handler = shutdown_rx.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.changed() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if http_server_object.enabled {
                    let address: SocketAddr = match http_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(e) => {
                            error!("[HTTP] Invalid bind address {}: {}", http_server_object.bind_address, e);
                            exit(1);
                        }
                    };
                    let data = Arc::new(HttpServiceData {
                        torrent_tracker: tracker.clone(),
                        http_trackers_config: Arc::new(http_server_object.clone())
                    });
                    let (handle, future) = match http_service(address, data) {
                        Ok(result) => result,
                        Err(e) => {
                            error!("[HTTP] Unable to bind {}: {}", address, e);
                            exit(1);
                        }
                    };
                    http_handles.push(handle);
                    http_futures.push(future);
                }
            }
            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(e) = try_join_all(http_futures).await {
                        error!("[HTTP] Server stopped with error: {}", e);
                    }
                });
            }

            let mut stats_handler = shutdown_rx.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Hosts: {} - Swarms: {} | Announces: {} - Stops: {} - Scrapes: {} - Rejected: {} - 404: {}",
                                stats.hosts, stats.swarms, stats.announces_handled, stats.stops_handled,
                                stats.scrapes_handled, stats.requests_rejected, stats.not_found
                            );
                        }
                        _ = stats_handler.changed() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Unable to listen for the shutdown signal: {}", e);
            }
            info!("Shutdown request received, shutting down...");
            let _ = shutdown_tx.send(true);
            for handle in http_handles {
                handle.stop(true).await;
            }
            info!("Server shutting down completed");
            Ok(())
        })
}
