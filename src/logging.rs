// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logging setup
//!
//! Uses `tracing` with a `fmt` subscriber writing to stderr. The level
//! defaults to `info` and can be overridden with `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialises the global tracing subscriber
///
/// # Arguments
///
/// * `default_level` - Filter used when `RUST_LOG` is unset (e.g. `"info"`)
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    tracing::debug!("observer-demo v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
