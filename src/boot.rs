use log::{error, info, warn};
use std::fs;
use std::path::Path;

use crate::config::GalleryConfig;
use crate::loader::DataSource;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

/// Run boot checks before Rocket launches. Nothing here is fatal: a missing
/// data file only means the sample gallery is served.
pub fn run(config: &GalleryConfig) -> BootReport {
    info!("Gallery boot check starting...");

    let mut report = BootReport::default();

    // ── 1. Data directory ──────────────────────────────
    let dir = Path::new(&config.data_dir);
    if !dir.exists() {
        match fs::create_dir_all(dir) {
            Ok(_) => info!("  Created directory: {}", config.data_dir),
            Err(e) => {
                error!("  FAILED to create directory {}: {}", config.data_dir, e);
                report.errors += 1;
            }
        }
    }

    // ── 2. Gallery source ──────────────────────────────
    match config.data_source() {
        DataSource::File(path) if !path.exists() => {
            warn!(
                "  Gallery data not found: {} (sample gallery will be served)",
                path.display()
            );
            report.warnings += 1;
        }
        DataSource::File(_) => {}
        DataSource::Remote(url) => info!("  Gallery data will be fetched from {}", url),
    }

    if report.errors > 0 {
        error!(
            "Boot check finished with {} error(s), {} warning(s)",
            report.errors, report.warnings
        );
    } else if report.warnings > 0 {
        warn!("Boot check passed with {} warning(s)", report.warnings);
    } else {
        info!("Boot check passed");
    }
    report
}
