//! Ownership predicates for the data-access boundary.
//!
//! Every owned lookup, update and delete pushes its scope into the SQL
//! `WHERE` clause. A row that belongs to someone else is therefore
//! indistinguishable from a row that does not exist: both match nothing.
//!
//! Queries alias `tickets` as `t` and `ticket_personals` as `p`.

use sqlx::{QueryBuilder, Sqlite};

pub trait OwnerScope {
    /// Qualified column holding the owner identity
    const COLUMN: &'static str;

    fn identity(&self) -> &str;

    /// Append `<column> = ?` with the identity bound
    fn push_predicate(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push(Self::COLUMN)
            .push(" = ")
            .push_bind(self.identity().to_string());
    }
}

/// Restricts ticket queries to tickets written by one identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterScope<'a>(pub &'a str);

impl OwnerScope for WriterScope<'_> {
    const COLUMN: &'static str = "t.writer";

    fn identity(&self) -> &str {
        self.0
    }
}

/// Restricts personal-record queries to one receiver's records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiverScope<'a>(pub &'a str);

impl OwnerScope for ReceiverScope<'_> {
    const COLUMN: &'static str = "p.receiver";

    fn identity(&self) -> &str {
        self.0
    }
}
