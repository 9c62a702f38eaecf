//! Update and delete execution
//!
//! Mutations run the statement as-is, request no row formatting, and
//! report the gateway's affected-row count. There is no rewrite step
//! and no result shaping beyond the count.

use crate::api::{DataError, DataRequest, DataResult, MutationResponse};
use crate::gateway::{ConnectionContext, RecordFormat};
use crate::observability::Logger;

/// Execute an update or delete operation
pub async fn execute(
    request: &DataRequest,
    ctx: &ConnectionContext,
) -> DataResult<MutationResponse> {
    let parameters = request.flat_parameters()?;
    let input = ctx.statement(request.sql.clone(), parameters, RecordFormat::None);
    let output = ctx
        .gateway()
        .execute(input)
        .await
        .map_err(DataError::from_gateway)?;

    let records_affected = output.number_of_records_updated.unwrap_or(0);

    let affected_field = records_affected.to_string();
    Logger::trace(
        "MUTATION_COMPLETE",
        &[
            ("operation", request.operation.as_str()),
            ("records_affected", affected_field.as_str()),
        ],
    );
    Ok(MutationResponse { records_affected })
}
