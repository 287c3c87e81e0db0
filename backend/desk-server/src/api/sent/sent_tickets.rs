use crate::{ApiResult, AppState, CreateTicketRequest, ListSentQuery, WriterQuery};

use desk_core::{Page, SentTicketView};
use desk_service::RequestContext;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

const ANONYMOUS: &str = "anonymous";

fn context(writer: Option<&str>) -> RequestContext {
    RequestContext::new(writer.unwrap_or(ANONYMOUS))
}

/// Create a ticket addressed to one or more receivers
///
/// POST /api/tickets?writer=
pub async fn create_ticket(
    State(state): State<AppState>,
    query: Result<Query<WriterQuery>, QueryRejection>,
    body: Result<Json<CreateTicketRequest>, JsonRejection>,
) -> ApiResult<Json<SentTicketView>> {
    let Query(query) = query?;
    let Json(request) = body?;
    let ctx = context(query.writer.as_deref());

    let view = state
        .tickets
        .create(&ctx, query.writer.as_deref(), request.into())
        .await?;

    Ok(Json(view))
}

/// GET /api/tickets/sent
pub async fn list_sent_tickets(
    State(state): State<AppState>,
    query: Result<Query<ListSentQuery>, QueryRejection>,
) -> ApiResult<Json<Page<SentTicketView>>> {
    let Query(query) = query?;
    let ctx = context(query.writer.as_deref());

    let page = state
        .tickets
        .list_sent(
            &ctx,
            query.writer.as_deref(),
            query.filter(),
            &query.page_params(),
        )
        .await?;

    Ok(Json(page))
}

/// GET /api/tickets/sent/{tno}
pub async fn read_sent_ticket(
    State(state): State<AppState>,
    tno: Result<Path<i64>, PathRejection>,
    query: Result<Query<WriterQuery>, QueryRejection>,
) -> ApiResult<Json<SentTicketView>> {
    let Path(tno) = tno?;
    let Query(query) = query?;
    let ctx = context(query.writer.as_deref());

    let view = state
        .tickets
        .read_sent(&ctx, tno, query.writer.as_deref())
        .await?;

    Ok(Json(view))
}

/// Delete a ticket with all of its personal records
///
/// DELETE /api/tickets/{tno} and DELETE /api/tickets/sent/{tno}
pub async fn delete_sent_ticket(
    State(state): State<AppState>,
    tno: Result<Path<i64>, PathRejection>,
    query: Result<Query<WriterQuery>, QueryRejection>,
) -> ApiResult<StatusCode> {
    let Path(tno) = tno?;
    let Query(query) = query?;
    let ctx = context(query.writer.as_deref());

    state
        .tickets
        .delete_sent(&ctx, tno, query.writer.as_deref())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
