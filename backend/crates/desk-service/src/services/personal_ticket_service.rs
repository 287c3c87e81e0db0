use crate::{
    FilterParams, PageParams, RequestContext, Result as ServiceResult, ServiceError,
    TicketValidator, log_handler_entry, log_handler_exit,
};

use desk_config::{PagingConfig, ValidationConfig};
use desk_core::{InboxEntry, Page, ReceivedSortField, ReceivedTicketView, TicketState};
use desk_db::{PersonalRepository, ReceiverScope};

use sqlx::SqlitePool;

/// Receiver-side operations on personal records (the inbox)
#[derive(Debug, Clone)]
pub struct PersonalTicketService {
    pool: SqlitePool,
    paging: PagingConfig,
    validation: ValidationConfig,
}

/// How an inbox entry is looked up
#[derive(Debug, Clone, Copy)]
enum EntryKey {
    Pno(i64),
    Tno(i64),
}

impl PersonalTicketService {
    pub fn new(pool: SqlitePool, paging: PagingConfig, validation: ValidationConfig) -> Self {
        Self {
            pool,
            paging,
            validation,
        }
    }

    pub async fn list_received(
        &self,
        ctx: &RequestContext,
        receiver: Option<&str>,
        filter: FilterParams,
        params: &PageParams,
    ) -> ServiceResult<Page<ReceivedTicketView>> {
        log_handler_entry!(ctx, "ListReceivedTickets");

        let result: ServiceResult<Page<ReceivedTicketView>> = async {
            let receiver = TicketValidator::identity(receiver, "receiver", &self.validation)?;
            let filter = filter.into_filter()?;
            let request = params.resolve::<ReceivedSortField>(&self.paging)?;

            let mut conn = self.pool.acquire().await?;
            let page =
                PersonalRepository::list(&mut conn, &ReceiverScope(&receiver), &filter, &request)
                    .await?;

            Ok(page.map(ReceivedTicketView::from))
        }
        .await;

        log_handler_exit!(ctx, "ListReceivedTickets", result);
        result
    }

    /// Inbox entry by `pno`, optionally marking it read first
    pub async fn read_received(
        &self,
        ctx: &RequestContext,
        pno: i64,
        receiver: Option<&str>,
        mark_as_read: bool,
    ) -> ServiceResult<ReceivedTicketView> {
        log_handler_entry!(ctx, "ReadReceivedTicket");

        let result = self
            .read_entry(EntryKey::Pno(pno), receiver, mark_as_read)
            .await;

        log_handler_exit!(ctx, "ReadReceivedTicket", result);
        result
    }

    /// Inbox entry for ticket `tno` addressed to `receiver`
    pub async fn read_received_by_ticket(
        &self,
        ctx: &RequestContext,
        tno: i64,
        receiver: Option<&str>,
        mark_as_read: bool,
    ) -> ServiceResult<ReceivedTicketView> {
        log_handler_entry!(ctx, "ReadReceivedTicketByTno");

        let result = self
            .read_entry(EntryKey::Tno(tno), receiver, mark_as_read)
            .await;

        log_handler_exit!(ctx, "ReadReceivedTicketByTno", result);
        result
    }

    /// Overwrite the workflow state of the receiver's own record
    pub async fn change_state(
        &self,
        ctx: &RequestContext,
        pno: i64,
        receiver: Option<&str>,
        state: Option<&str>,
    ) -> ServiceResult<ReceivedTicketView> {
        log_handler_entry!(ctx, "ChangeTicketState");

        let result: ServiceResult<ReceivedTicketView> = async {
            let receiver = TicketValidator::identity(receiver, "receiver", &self.validation)?;
            let state = match state.map(str::trim).filter(|s| !s.is_empty()) {
                Some(s) => s.parse::<TicketState>()?,
                None => return Err(ServiceError::validation("state is required", "state")),
            };
            let scope = ReceiverScope(&receiver);

            let mut tx = self.pool.begin().await?;
            if !PersonalRepository::update_state(&mut tx, pno, &scope, state).await? {
                return Err(entry_not_found(EntryKey::Pno(pno)));
            }
            let entry = PersonalRepository::find_owned(&mut tx, pno, &scope)
                .await?
                .ok_or_else(|| entry_not_found(EntryKey::Pno(pno)))?;
            tx.commit().await?;

            Ok(ReceivedTicketView::from(entry))
        }
        .await;

        log_handler_exit!(ctx, "ChangeTicketState", result);
        result
    }

    /// Mark-as-read and the read share one transaction so the response
    /// reflects the stored flag
    async fn read_entry(
        &self,
        key: EntryKey,
        receiver: Option<&str>,
        mark_as_read: bool,
    ) -> ServiceResult<ReceivedTicketView> {
        let receiver = TicketValidator::identity(receiver, "receiver", &self.validation)?;
        let scope = ReceiverScope(&receiver);

        let entry = if mark_as_read {
            let mut tx = self.pool.begin().await?;
            let marked = match key {
                EntryKey::Pno(pno) => PersonalRepository::mark_read(&mut tx, pno, &scope).await?,
                EntryKey::Tno(tno) => {
                    PersonalRepository::mark_read_by_ticket(&mut tx, tno, &scope).await?
                }
            };
            if !marked {
                return Err(entry_not_found(key));
            }
            let entry = Self::find(&mut tx, key, &scope).await?;
            tx.commit().await?;
            entry
        } else {
            let mut conn = self.pool.acquire().await?;
            Self::find(&mut conn, key, &scope).await?
        };

        Ok(ReceivedTicketView::from(entry))
    }

    async fn find(
        conn: &mut sqlx::SqliteConnection,
        key: EntryKey,
        scope: &ReceiverScope<'_>,
    ) -> ServiceResult<InboxEntry> {
        let entry = match key {
            EntryKey::Pno(pno) => PersonalRepository::find_owned(conn, pno, scope).await?,
            EntryKey::Tno(tno) => {
                PersonalRepository::find_owned_by_ticket(conn, tno, scope).await?
            }
        };

        entry.ok_or_else(|| entry_not_found(key))
    }
}

#[track_caller]
fn entry_not_found(key: EntryKey) -> ServiceError {
    match key {
        EntryKey::Pno(pno) => ServiceError::not_found(format!("Inbox entry {} not found", pno)),
        EntryKey::Tno(tno) => {
            ServiceError::not_found(format!("Inbox entry for ticket {} not found", tno))
        }
    }
}
