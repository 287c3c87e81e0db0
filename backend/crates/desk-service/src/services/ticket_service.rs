use crate::{
    FilterParams, PageParams, RequestContext, Result as ServiceResult, ServiceError,
    TicketDraft, TicketValidator, log_handler_entry, log_handler_exit,
};

use desk_config::{PagingConfig, ValidationConfig};
use desk_core::{Page, SentSortField, SentTicketView};
use desk_db::{TicketRepository, WriterScope};

use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;

/// Writer-side operations: create, list, read and delete sent tickets
#[derive(Debug, Clone)]
pub struct TicketService {
    pool: SqlitePool,
    paging: PagingConfig,
    validation: ValidationConfig,
}

impl TicketService {
    pub fn new(pool: SqlitePool, paging: PagingConfig, validation: ValidationConfig) -> Self {
        Self {
            pool,
            paging,
            validation,
        }
    }

    /// Create a ticket with one personal record per distinct receiver
    pub async fn create(
        &self,
        ctx: &RequestContext,
        writer: Option<&str>,
        draft: TicketDraft,
    ) -> ServiceResult<SentTicketView> {
        log_handler_entry!(ctx, "CreateTicket");

        let result: ServiceResult<SentTicketView> = async {
            let new_ticket = TicketValidator::validate_create(writer, draft, &self.validation)?;

            let mut tx = self.pool.begin().await?;
            let aggregate = TicketRepository::insert(&mut tx, &new_ticket, Utc::now()).await?;
            tx.commit().await?;

            debug!(
                "{} Created ticket {} for {} receivers",
                ctx.log_prefix(),
                aggregate.ticket.tno,
                aggregate.personals.len()
            );

            Ok(SentTicketView::from(aggregate))
        }
        .await;

        log_handler_exit!(ctx, "CreateTicket", result);
        result
    }

    pub async fn list_sent(
        &self,
        ctx: &RequestContext,
        writer: Option<&str>,
        filter: FilterParams,
        params: &PageParams,
    ) -> ServiceResult<Page<SentTicketView>> {
        log_handler_entry!(ctx, "ListSentTickets");

        let result: ServiceResult<Page<SentTicketView>> = async {
            let writer = TicketValidator::identity(writer, "writer", &self.validation)?;
            let filter = filter.into_filter()?;
            let request = params.resolve::<SentSortField>(&self.paging)?;

            let mut conn = self.pool.acquire().await?;
            let page =
                TicketRepository::list(&mut conn, &WriterScope(&writer), &filter, &request).await?;

            Ok(page.map(SentTicketView::from))
        }
        .await;

        log_handler_exit!(ctx, "ListSentTickets", result);
        result
    }

    pub async fn read_sent(
        &self,
        ctx: &RequestContext,
        tno: i64,
        writer: Option<&str>,
    ) -> ServiceResult<SentTicketView> {
        log_handler_entry!(ctx, "ReadSentTicket");

        let result: ServiceResult<SentTicketView> = async {
            let writer = TicketValidator::identity(writer, "writer", &self.validation)?;

            let mut conn = self.pool.acquire().await?;
            let aggregate = TicketRepository::find_owned(&mut conn, tno, &WriterScope(&writer))
                .await?
                .ok_or_else(|| ticket_not_found(tno))?;

            Ok(SentTicketView::from(aggregate))
        }
        .await;

        log_handler_exit!(ctx, "ReadSentTicket", result);
        result
    }

    /// Delete a ticket and, by cascade, every personal record it owns
    pub async fn delete_sent(
        &self,
        ctx: &RequestContext,
        tno: i64,
        writer: Option<&str>,
    ) -> ServiceResult<()> {
        log_handler_entry!(ctx, "DeleteSentTicket");

        let result: ServiceResult<()> = async {
            let writer = TicketValidator::identity(writer, "writer", &self.validation)?;

            let mut tx = self.pool.begin().await?;
            if !TicketRepository::delete_owned(&mut tx, tno, &WriterScope(&writer)).await? {
                return Err(ticket_not_found(tno));
            }
            tx.commit().await?;

            Ok(())
        }
        .await;

        log_handler_exit!(ctx, "DeleteSentTicket", result);
        result
    }
}

#[track_caller]
fn ticket_not_found(tno: i64) -> ServiceError {
    ServiceError::not_found(format!("Ticket {} not found", tno))
}
