//! Create execution
//!
//! One executor, two modes, chosen purely by parameter shape: a flat
//! binding list runs as a single insert, a list of binding lists runs
//! as a batched insert. Callers signal bulk inserts only through that
//! shape.

use crate::api::{CreateResponse, DataError, DataRequest, DataResult};
use crate::gateway::{ConnectionContext, RecordFormat};
use crate::observability::Logger;
use crate::records::normalize_record;

/// Execute a create operation
pub async fn execute(
    request: &DataRequest,
    ctx: &ConnectionContext,
) -> DataResult<CreateResponse> {
    if request.is_bulk() {
        bulk_insert(request, ctx).await
    } else {
        single_insert(request, ctx).await
    }
}

/// Execute one insert and return its first returned row, when any
async fn single_insert(
    request: &DataRequest,
    ctx: &ConnectionContext,
) -> DataResult<CreateResponse> {
    let parameters = request.flat_parameters()?;
    let input = ctx.statement(request.sql.clone(), parameters, RecordFormat::Json);
    let output = ctx
        .gateway()
        .execute(input)
        .await
        .map_err(DataError::from_gateway)?;

    let rows = output
        .decode_records()
        .map_err(|_| DataError::bad_request("Failed to process query results"))?;
    let record = rows.into_iter().map(normalize_record).next();

    Logger::trace("CREATE_COMPLETE", &[("mode", "single")]);
    Ok(CreateResponse::single(record))
}

/// Execute one statement across all parameter sets and count results
async fn bulk_insert(
    request: &DataRequest,
    ctx: &ConnectionContext,
) -> DataResult<CreateResponse> {
    let parameter_sets = request.parameter_sets()?;
    let input = ctx.batch_statement(request.sql.clone(), parameter_sets);
    let output = ctx
        .gateway()
        .execute_batch(input)
        .await
        .map_err(DataError::from_gateway)?;

    let records_created = output.update_results.len() as u64;

    let created_field = records_created.to_string();
    Logger::trace(
        "CREATE_COMPLETE",
        &[("mode", "bulk"), ("records_created", created_field.as_str())],
    );
    Ok(CreateResponse::bulk(records_created))
}
