// src/handlers/health.rs
use std::path::Path;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};
use sysinfo::{get_current_pid, Disks, System};
use tracing::{instrument, warn};

/// The service reports unhealthy once the root disk is more than half full.
const DISK_THRESHOLD: f64 = 0.5;

/// The service reports unhealthy once its resident set exceeds 150 MiB.
const MEMORY_RSS_LIMIT: u64 = 150 * 1024 * 1024;

fn disk_used_ratio(total: u64, available: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (total - available) as f64 / total as f64
}

fn storage_healthy(used_ratio: f64) -> bool {
    used_ratio <= DISK_THRESHOLD
}

fn memory_healthy(rss: u64) -> bool {
    rss <= MEMORY_RSS_LIMIT
}

/// Used ratio of the disk mounted at `/`, falling back to the fullest disk
/// when no root mount is visible.
fn root_disk_usage() -> f64 {
    let disks = Disks::new_with_refreshed_list();

    disks
        .list()
        .iter()
        .find(|d| d.mount_point() == Path::new("/"))
        .map(|d| disk_used_ratio(d.total_space(), d.available_space()))
        .unwrap_or_else(|| {
            disks
                .list()
                .iter()
                .map(|d| disk_used_ratio(d.total_space(), d.available_space()))
                .fold(0.0, f64::max)
        })
}

fn process_rss() -> u64 {
    let Ok(pid) = get_current_pid() else {
        warn!("Could not resolve current pid for health check");
        return 0;
    };

    let mut sys = System::new();
    sys.refresh_process(pid);
    sys.process(pid).map(|p| p.memory()).unwrap_or(0)
}

// GET /health - Disk and memory health report
#[instrument]
pub async fn health_check() -> (StatusCode, Json<Value>) {
    let used_ratio = root_disk_usage();
    let rss = process_rss();

    let storage_up = storage_healthy(used_ratio);
    let memory_up = memory_healthy(rss);

    let indicator = |up: bool| if up { "up" } else { "down" };
    let info = json!({
        "storage": { "status": indicator(storage_up), "used_ratio": used_ratio },
        "memory_rss": { "status": indicator(memory_up), "bytes": rss },
    });

    if storage_up && memory_up {
        (StatusCode::OK, Json(json!({ "status": "ok", "info": info })))
    } else {
        warn!(used_ratio, rss, "Health check failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "info": info })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_full_disk_is_still_healthy() {
        assert!(storage_healthy(0.5));
        assert!(!storage_healthy(0.51));
    }

    #[test]
    fn empty_disk_reports_zero_usage() {
        assert_eq!(disk_used_ratio(0, 0), 0.0);
        assert_eq!(disk_used_ratio(100, 100), 0.0);
        assert_eq!(disk_used_ratio(100, 25), 0.75);
    }

    #[test]
    fn memory_limit_is_inclusive() {
        assert!(memory_healthy(MEMORY_RSS_LIMIT));
        assert!(!memory_healthy(MEMORY_RSS_LIMIT + 1));
    }
}
