//! `--health` command: probe the prediction service and report.

use crate::client::{PredictionClient, ServiceStatus};

/// One-line report for a probe outcome.
pub fn describe_status(url: &str, status: ServiceStatus) -> String {
    match status {
        ServiceStatus::Online { response_time_ms } => {
            format!("{} is online ({}ms)", url, response_time_ms)
        }
        ServiceStatus::Offline | ServiceStatus::Unknown => format!("{} is offline", url),
    }
}

/// Probe the service, print the outcome, and return whether it is up.
pub async fn handle_health_command(client: &PredictionClient, base_url: &str) -> bool {
    let status = client.health_check().await;
    let report = describe_status(base_url, status);
    match status {
        ServiceStatus::Online { .. } => {
            println!("{}", report);
            true
        }
        _ => {
            eprintln!("{}", report);
            false
        }
    }
}
