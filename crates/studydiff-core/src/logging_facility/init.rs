//! Logging initialization

use serde::Deserialize;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Logging profile, selectable from the `[logging]` config section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output, debug level for studydiff crates
    #[default]
    Development,
    /// JSON output, info level
    Production,
    /// No output; tests install the capture layer instead
    Test,
}

const DEV_FILTER: &str = "studydiff_core=debug,studydiff_engine=debug";
const PROD_FILTER: &str = "studydiff_core=info,studydiff_engine=info";

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call has an effect. `RUST_LOG` overrides the profile's
/// default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEV_FILTER)),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(PROD_FILTER)),
                )
                .init();
        }
        Profile::Test => {
            // capture is installed separately via init_test_capture()
        }
    });
}
