//! Changelog command with boundary logging.
//!
//! ## Logging Ownership
//!
//! - `log_op_start!` at entry
//! - `log_op_end!` on success, with row count and digest
//! - `log_op_error!` on failure
//!
//! The core below uses only `tracing::debug!()`.

use serde::Serialize;
use studydiff_core::errors::{ChangelogError, ExError};
use studydiff_core::{changelog_digest, compute_changelog, ChangelogRequest, ChangelogRow, EngineOptions};
use studydiff_core::{log_op_end, log_op_error, log_op_start};
use studydiff_core_types::RequestContext;

use crate::config::EngineConfig;

const OP: &str = "changelog_compute";

/// Rows of one changelog computation and their digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogOutcome {
    pub rows: Vec<ChangelogRow>,
    /// SHA-256 hex digest of `rows`, see [`changelog_digest`]
    pub digest: String,
}

/// Compute the changelog for `request` under `config`.
///
/// ## Errors
///
/// The core's `ChangelogError` converted to `ExError`, stamped with the
/// operation name and the request/trace ids of `ctx`.
pub fn changelog_compute(
    ctx: &RequestContext,
    request: &ChangelogRequest,
    config: &EngineConfig,
) -> Result<ChangelogOutcome, ExError> {
    log_op_start!(
        OP,
        request_id = ctx.request_id.as_str(),
        current_study_id = request.current_study_id.as_str(),
        parent_study_id = request.parent_study_id.as_ref().map_or("", |p| p.as_str())
    );
    let start = std::time::Instant::now();

    let outcome = changelog_compute_impl(request, &config.engine).map_err(|e| {
        log_op_error!(
            OP,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str()
        );
        boundary_error(e, ctx)
    })?;

    log_op_end!(
        OP,
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = ctx.request_id.as_str(),
        row_count = outcome.rows.len() as u64,
        digest = outcome.digest.as_str()
    );

    Ok(outcome)
}

/// Parse a JSON request document and compute its changelog.
///
/// ## Errors
///
/// `ERR_SERIALIZATION` if the document does not parse, otherwise as
/// [`changelog_compute`].
pub fn changelog_compute_json(
    ctx: &RequestContext,
    bytes: &[u8],
    config: &EngineConfig,
) -> Result<ChangelogOutcome, ExError> {
    let request = ChangelogRequest::from_json(bytes).map_err(|e| {
        tracing::debug!(request_id = ctx.request_id.as_str(), error = %e, "request rejected");
        boundary_error(e, ctx)
    })?;
    changelog_compute(ctx, &request, config)
}

fn changelog_compute_impl(
    request: &ChangelogRequest,
    options: &EngineOptions,
) -> Result<ChangelogOutcome, ChangelogError> {
    let rows = compute_changelog(request, options)?;
    let digest = changelog_digest(&rows)?;
    Ok(ChangelogOutcome { rows, digest })
}

fn boundary_error(err: ChangelogError, ctx: &RequestContext) -> ExError {
    let ex_err = ExError::from(err)
        .with_op(OP)
        .with_request_id(ctx.request_id.clone());
    match &ctx.trace_id {
        Some(trace_id) => ex_err.with_trace_id(trace_id.clone()),
        None => ex_err,
    }
}
