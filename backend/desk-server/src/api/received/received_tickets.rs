use crate::{ApiResult, AppState, ChangeStateQuery, ListReceivedQuery, ReadReceivedQuery};

use desk_core::{Page, ReceivedTicketView};
use desk_service::RequestContext;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

fn context(receiver: Option<&str>) -> RequestContext {
    RequestContext::new(receiver.unwrap_or("anonymous"))
}

/// GET /api/tickets/received
pub async fn list_received_tickets(
    State(state): State<AppState>,
    query: Result<Query<ListReceivedQuery>, QueryRejection>,
) -> ApiResult<Json<Page<ReceivedTicketView>>> {
    let Query(query) = query?;
    let ctx = context(query.receiver.as_deref());

    let page = state
        .inbox
        .list_received(
            &ctx,
            query.receiver.as_deref(),
            query.filter(),
            &query.page_params(),
        )
        .await?;

    Ok(Json(page))
}

/// GET /api/tickets/received/by-pno/{pno}
pub async fn read_received_by_pno(
    State(state): State<AppState>,
    pno: Result<Path<i64>, PathRejection>,
    query: Result<Query<ReadReceivedQuery>, QueryRejection>,
) -> ApiResult<Json<ReceivedTicketView>> {
    let Path(pno) = pno?;
    let Query(query) = query?;
    let ctx = context(query.receiver.as_deref());

    let view = state
        .inbox
        .read_received(&ctx, pno, query.receiver.as_deref(), query.mark_as_read)
        .await?;

    Ok(Json(view))
}

/// GET /api/tickets/received/by-tno/{tno}
pub async fn read_received_by_tno(
    State(state): State<AppState>,
    tno: Result<Path<i64>, PathRejection>,
    query: Result<Query<ReadReceivedQuery>, QueryRejection>,
) -> ApiResult<Json<ReceivedTicketView>> {
    let Path(tno) = tno?;
    let Query(query) = query?;
    let ctx = context(query.receiver.as_deref());

    let view = state
        .inbox
        .read_received_by_ticket(&ctx, tno, query.receiver.as_deref(), query.mark_as_read)
        .await?;

    Ok(Json(view))
}

/// Overwrite the workflow state of the caller's own entry
///
/// PATCH /api/tickets/received/{pno}/state?receiver=&state=
pub async fn change_received_state(
    State(state): State<AppState>,
    pno: Result<Path<i64>, PathRejection>,
    query: Result<Query<ChangeStateQuery>, QueryRejection>,
) -> ApiResult<Json<ReceivedTicketView>> {
    let Path(pno) = pno?;
    let Query(query) = query?;
    let ctx = context(query.receiver.as_deref());

    let view = state
        .inbox
        .change_state(
            &ctx,
            pno,
            query.receiver.as_deref(),
            query.state.as_deref(),
        )
        .await?;

    Ok(Json(view))
}
