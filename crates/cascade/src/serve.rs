// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `cascade serve` command implementation.

use cascade_config::CascadeConfig;
use cascade_core::CascadeError;
use cascade_gateway::{start_server, GatewayState, ServerConfig};
use tracing::info;

use crate::runtime::Runtime;

/// Serve the icon font catalogue until the process is stopped.
pub async fn run_serve(config: &CascadeConfig, runtime: Runtime) -> Result<(), CascadeError> {
    let server = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    info!(
        plugin_types = runtime.registry.len(),
        addr = %server.addr(),
        "starting cascade serve"
    );
    start_server(&server, GatewayState::new(runtime.catalogue)).await
}
