//! CLI Command Handlers
//!
//! Implements the scriptable subcommands by calling the API client.
//! Each handler takes CLI args and Output, returns ExitCode.

use serde::Serialize;

use crate::api::{ApiError, CatalogClient};
use crate::cli::{ExitCode, Output, ReloadCmd, ShowCmd, ShowsCmd};

fn exit_code_for(err: &ApiError) -> ExitCode {
    match err {
        ApiError::NotFound => ExitCode::NotFound,
        _ => ExitCode::NetworkError,
    }
}

// =============================================================================
// Shows Command
// =============================================================================

pub async fn shows_cmd(_cmd: ShowsCmd, client: &CatalogClient, output: &Output) -> ExitCode {
    output.info("Fetching catalog...");

    match client.list_shows().await {
        Ok(shows) => {
            if let Err(e) = output.print(&shows) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Catalog fetch failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Show Command
// =============================================================================

/// Detail response enriched with the derived media URLs, so scripts don't
/// have to reconstruct them
#[derive(Debug, Serialize)]
struct ShowOutput {
    #[serde(flatten)]
    detail: crate::models::ShowDetail,
    thumb_url: String,
}

pub async fn show_cmd(cmd: ShowCmd, client: &CatalogClient, output: &Output) -> ExitCode {
    output.info(format!("Fetching show: {}", cmd.id));

    match client.get_show(&cmd.id).await {
        Ok(detail) => {
            let thumb_url = client.thumb_url(&detail.id);
            let out = ShowOutput { detail, thumb_url };
            if let Err(e) = output.print(&out) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Show fetch failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Reload Command
// =============================================================================

#[derive(Debug, Serialize)]
struct ReloadOutput {
    status: &'static str,
}

pub async fn reload_cmd(_cmd: ReloadCmd, client: &CatalogClient, output: &Output) -> ExitCode {
    output.info("Triggering library reload...");

    match client.trigger_reload().await {
        Ok(()) => {
            if let Err(e) = output.print(&ReloadOutput { status: "accepted" }) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Reload failed: {}", e), exit_code_for(&e)),
    }
}
