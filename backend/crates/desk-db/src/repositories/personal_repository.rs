use crate::repositories::listing::{count_to_u64, push_order_and_page, push_received_where};
use crate::repositories::rows::{INBOX_COLUMNS, InboxRow};
use crate::{OwnerScope, ReceiverScope, Result as DbErrorResult};

use desk_core::{InboxEntry, Page, PageRequest, ReceivedSortField, TicketFilter, TicketState};

use sqlx::{QueryBuilder, Sqlite, SqliteConnection, Transaction};

/// How a single personal record is addressed
#[derive(Debug, Clone, Copy)]
enum PersonalKey {
    Pno(i64),
    Tno(i64),
}

impl PersonalKey {
    fn push_predicate(self, qb: &mut QueryBuilder<'_, Sqlite>) {
        match self {
            Self::Pno(pno) => qb.push("p.pno = ").push_bind(pno),
            Self::Tno(tno) => qb.push("p.tno = ").push_bind(tno),
        };
    }
}

pub struct PersonalRepository;

impl PersonalRepository {
    /// Inbox entry by `pno`, only when `scope` is its receiver
    pub async fn find_owned(
        conn: &mut SqliteConnection,
        pno: i64,
        scope: &ReceiverScope<'_>,
    ) -> DbErrorResult<Option<InboxEntry>> {
        Self::find(conn, PersonalKey::Pno(pno), scope).await
    }

    /// Inbox entry for ticket `tno` addressed to `scope`
    pub async fn find_owned_by_ticket(
        conn: &mut SqliteConnection,
        tno: i64,
        scope: &ReceiverScope<'_>,
    ) -> DbErrorResult<Option<InboxEntry>> {
        Self::find(conn, PersonalKey::Tno(tno), scope).await
    }

    /// Set the read flag. Idempotent; `false` when no owned record matched.
    pub async fn mark_read(
        tx: &mut Transaction<'_, Sqlite>,
        pno: i64,
        scope: &ReceiverScope<'_>,
    ) -> DbErrorResult<bool> {
        Self::update(tx, "is_read = 1", None, PersonalKey::Pno(pno), scope).await
    }

    pub async fn mark_read_by_ticket(
        tx: &mut Transaction<'_, Sqlite>,
        tno: i64,
        scope: &ReceiverScope<'_>,
    ) -> DbErrorResult<bool> {
        Self::update(tx, "is_read = 1", None, PersonalKey::Tno(tno), scope).await
    }

    /// Overwrite the workflow state. `false` when no owned record matched.
    pub async fn update_state(
        tx: &mut Transaction<'_, Sqlite>,
        pno: i64,
        scope: &ReceiverScope<'_>,
        state: TicketState,
    ) -> DbErrorResult<bool> {
        Self::update(tx, "state = ", Some(state.as_str()), PersonalKey::Pno(pno), scope).await
    }

    /// One page of the receiver's inbox
    pub async fn list(
        conn: &mut SqliteConnection,
        scope: &ReceiverScope<'_>,
        filter: &TicketFilter,
        request: &PageRequest<ReceivedSortField>,
    ) -> DbErrorResult<Page<InboxEntry>> {
        let mut count_qb = QueryBuilder::<Sqlite>::new(
            "SELECT COUNT(*) FROM ticket_personals p JOIN tickets t ON t.tno = p.tno",
        );
        push_received_where(&mut count_qb, scope, filter);
        let total: i64 = count_qb.build_query_scalar().fetch_one(&mut *conn).await?;

        let mut qb = QueryBuilder::<Sqlite>::new("SELECT ");
        qb.push(INBOX_COLUMNS)
            .push(" FROM ticket_personals p JOIN tickets t ON t.tno = p.tno");
        push_received_where(&mut qb, scope, filter);
        push_order_and_page(&mut qb, request);

        let rows: Vec<InboxRow> = qb.build_query_as().fetch_all(&mut *conn).await?;
        let content = rows
            .into_iter()
            .map(InboxEntry::try_from)
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(Page::new(content, request, count_to_u64(total)))
    }

    /// Number of personal records referencing a ticket, regardless of receiver
    pub async fn count_by_ticket(conn: &mut SqliteConnection, tno: i64) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ticket_personals WHERE tno = ?")
            .bind(tno)
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }

    async fn find(
        conn: &mut SqliteConnection,
        key: PersonalKey,
        scope: &ReceiverScope<'_>,
    ) -> DbErrorResult<Option<InboxEntry>> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT ");
        qb.push(INBOX_COLUMNS)
            .push(" FROM ticket_personals p JOIN tickets t ON t.tno = p.tno WHERE ");
        key.push_predicate(&mut qb);
        qb.push(" AND ");
        scope.push_predicate(&mut qb);

        let row: Option<InboxRow> = qb.build_query_as().fetch_optional(&mut *conn).await?;
        row.map(InboxEntry::try_from).transpose()
    }

    /// `UPDATE ... SET <assignment>` restricted to the owned record
    async fn update(
        tx: &mut Transaction<'_, Sqlite>,
        assignment: &'static str,
        value: Option<&'static str>,
        key: PersonalKey,
        scope: &ReceiverScope<'_>,
    ) -> DbErrorResult<bool> {
        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE ticket_personals SET ");
        qb.push(assignment);
        if let Some(value) = value {
            qb.push_bind(value);
        }
        qb.push(" WHERE pno IN (SELECT p.pno FROM ticket_personals p WHERE ");
        key.push_predicate(&mut qb);
        qb.push(" AND ");
        scope.push_predicate(&mut qb);
        qb.push(")");

        let result = qb.build().execute(&mut **tx).await?;

        Ok(result.rows_affected() > 0)
    }
}
