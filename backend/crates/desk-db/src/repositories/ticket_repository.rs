use crate::repositories::listing::{count_to_u64, push_order_and_page, push_sent_where};
use crate::repositories::rows::{PERSONAL_COLUMNS, PersonalRow, TICKET_COLUMNS, TicketRow};
use crate::{OwnerScope, Result as DbErrorResult, WriterScope};

use desk_core::{
    NewTicket, Page, PageRequest, SentSortField, Ticket, TicketAggregate, TicketFilter,
    TicketPersonal, TicketState,
};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::debug;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, Transaction};

pub struct TicketRepository;

impl TicketRepository {
    /// Insert a ticket and one unread `NEW` personal record per receiver.
    ///
    /// Must run inside the caller's transaction so the aggregate is created
    /// whole or not at all.
    pub async fn insert(
        tx: &mut Transaction<'_, Sqlite>,
        new_ticket: &NewTicket,
        birth: DateTime<Utc>,
    ) -> DbErrorResult<TicketAggregate> {
        let birth_secs = birth.timestamp();
        let deadline_secs = new_ticket.deadline.and_utc().timestamp();

        let tno = sqlx::query(
            r#"
                INSERT INTO tickets (
                    title, content, purpose, requirement, grade, deadline, birth, writer
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_ticket.title)
        .bind(&new_ticket.content)
        .bind(&new_ticket.purpose)
        .bind(&new_ticket.requirement)
        .bind(new_ticket.grade.as_str())
        .bind(deadline_secs)
        .bind(birth_secs)
        .bind(&new_ticket.writer)
        .execute(&mut **tx)
        .await?
        .last_insert_rowid();

        let mut personals = Vec::with_capacity(new_ticket.receivers.len());
        for receiver in &new_ticket.receivers {
            let state = TicketState::default();
            let pno = sqlx::query(
                "INSERT INTO ticket_personals (tno, receiver, is_read, state) VALUES (?, ?, 0, ?)",
            )
            .bind(tno)
            .bind(receiver)
            .bind(state.as_str())
            .execute(&mut **tx)
            .await?
            .last_insert_rowid();

            personals.push(TicketPersonal {
                pno,
                tno,
                receiver: receiver.clone(),
                read: false,
                state,
            });
        }

        debug!(
            "Inserted ticket {} with {} personal records",
            tno,
            personals.len()
        );

        // Re-read the stored row so second-truncated timestamps match later reads
        let ticket = Self::find_ticket(&mut **tx, tno)
            .await?
            .ok_or_else(|| crate::DbError::decode(format!("Inserted ticket {} not found", tno)))?;

        Ok(TicketAggregate { ticket, personals })
    }

    /// Ticket with its personal records, only when `scope` is its writer
    pub async fn find_owned(
        conn: &mut SqliteConnection,
        tno: i64,
        scope: &WriterScope<'_>,
    ) -> DbErrorResult<Option<TicketAggregate>> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT ");
        qb.push(TICKET_COLUMNS)
            .push(" FROM tickets t WHERE t.tno = ")
            .push_bind(tno)
            .push(" AND ");
        scope.push_predicate(&mut qb);

        let row: Option<TicketRow> = qb.build_query_as().fetch_optional(&mut *conn).await?;
        let Some(row) = row else {
            return Ok(None);
        };

        let ticket = Ticket::try_from(row)?;
        let personals = Self::load_personals(conn, &[ticket.tno])
            .await?
            .remove(&ticket.tno)
            .unwrap_or_default();

        Ok(Some(TicketAggregate { ticket, personals }))
    }

    /// One page of the writer's tickets, each with all of its personal records
    pub async fn list(
        conn: &mut SqliteConnection,
        scope: &WriterScope<'_>,
        filter: &TicketFilter,
        request: &PageRequest<SentSortField>,
    ) -> DbErrorResult<Page<TicketAggregate>> {
        let mut count_qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM tickets t");
        push_sent_where(&mut count_qb, scope, filter);
        let total: i64 = count_qb.build_query_scalar().fetch_one(&mut *conn).await?;

        let mut qb = QueryBuilder::<Sqlite>::new("SELECT ");
        qb.push(TICKET_COLUMNS).push(" FROM tickets t");
        push_sent_where(&mut qb, scope, filter);
        push_order_and_page(&mut qb, request);

        let rows: Vec<TicketRow> = qb.build_query_as().fetch_all(&mut *conn).await?;
        let tickets = rows
            .into_iter()
            .map(Ticket::try_from)
            .collect::<DbErrorResult<Vec<_>>>()?;

        let tnos: Vec<i64> = tickets.iter().map(|t| t.tno).collect();
        let mut personals = Self::load_personals(conn, &tnos).await?;

        let content = tickets
            .into_iter()
            .map(|ticket| TicketAggregate {
                personals: personals.remove(&ticket.tno).unwrap_or_default(),
                ticket,
            })
            .collect();

        Ok(Page::new(content, request, count_to_u64(total)))
    }

    /// Delete a ticket (personal records cascade) owned by `scope`.
    ///
    /// Returns `false` when nothing matched: unknown ticket, another writer's
    /// ticket, or a ticket without personal records.
    pub async fn delete_owned(
        tx: &mut Transaction<'_, Sqlite>,
        tno: i64,
        scope: &WriterScope<'_>,
    ) -> DbErrorResult<bool> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "DELETE FROM tickets WHERE tno IN (SELECT t.tno FROM tickets t WHERE t.tno = ",
        );
        qb.push_bind(tno).push(" AND ");
        scope.push_predicate(&mut qb);
        qb.push(" AND EXISTS (SELECT 1 FROM ticket_personals p WHERE p.tno = t.tno))");

        let result = qb.build().execute(&mut **tx).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether a ticket row exists, regardless of owner
    pub async fn exists(conn: &mut SqliteConnection, tno: i64) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM tickets WHERE tno = ?")
            .bind(tno)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(found.is_some())
    }

    async fn find_ticket(
        conn: &mut SqliteConnection,
        tno: i64,
    ) -> DbErrorResult<Option<Ticket>> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT ");
        qb.push(TICKET_COLUMNS)
            .push(" FROM tickets t WHERE t.tno = ")
            .push_bind(tno);

        let row: Option<TicketRow> = qb.build_query_as().fetch_optional(&mut *conn).await?;
        row.map(Ticket::try_from).transpose()
    }

    /// Personal records of the given tickets, grouped by `tno`, `pno` ascending
    async fn load_personals(
        conn: &mut SqliteConnection,
        tnos: &[i64],
    ) -> DbErrorResult<HashMap<i64, Vec<TicketPersonal>>> {
        let mut grouped: HashMap<i64, Vec<TicketPersonal>> = HashMap::new();
        if tnos.is_empty() {
            return Ok(grouped);
        }

        let mut qb = QueryBuilder::<Sqlite>::new("SELECT ");
        qb.push(PERSONAL_COLUMNS)
            .push(" FROM ticket_personals p WHERE p.tno IN (");
        let mut separated = qb.separated(", ");
        for tno in tnos {
            separated.push_bind(*tno);
        }
        separated.push_unseparated(") ORDER BY p.tno, p.pno");

        let rows: Vec<PersonalRow> = qb.build_query_as().fetch_all(&mut *conn).await?;
        for row in rows {
            let personal = TicketPersonal::try_from(row)?;
            grouped.entry(personal.tno).or_default().push(personal);
        }

        Ok(grouped)
    }
}
