//! Filter, ordering and paging fragments shared by the two listings.

use crate::OwnerScope;

use desk_core::{
    PageRequest, ReceivedSortField, SentSortField, SortDirection, SortField, TicketFilter,
    TicketGrade, TicketState,
};

use std::sync::LazyLock;

use sqlx::{QueryBuilder, Sqlite};

/// Grades ordered by severity rather than by name
static GRADE_RANK: LazyLock<String> = LazyLock::new(|| {
    rank_case(
        "t.grade",
        TicketGrade::ALL.iter().map(|g| (g.as_str(), g.rank())),
    )
});

/// States in workflow order
static STATE_ORDER: LazyLock<String> = LazyLock::new(|| {
    rank_case(
        "p.state",
        TicketState::ALL.iter().zip(0..).map(|(s, i)| (s.as_str(), i)),
    )
});

/// `CASE <column> WHEN '<name>' THEN <rank> ... END`
pub(crate) fn rank_case<'a>(column: &str, ranks: impl Iterator<Item = (&'a str, i32)>) -> String {
    let mut sql = format!("CASE {}", column);
    for (name, rank) in ranks {
        sql.push_str(&format!(" WHEN '{}' THEN {}", name, rank));
    }
    sql.push_str(" END");
    sql
}

/// Column (or expression) a listing is ordered by
pub(crate) trait OrderColumn: SortField {
    fn column(&self) -> &'static str;

    /// Identity column appended so equal sort keys page deterministically
    const TIE_BREAKER: &'static str;
}

impl OrderColumn for SentSortField {
    const TIE_BREAKER: &'static str = "t.tno";

    fn column(&self) -> &'static str {
        match self {
            Self::Tno => "t.tno",
            Self::Title => "t.title",
            Self::Grade => GRADE_RANK.as_str(),
            Self::Deadline => "t.deadline",
            Self::Birth => "t.birth",
        }
    }
}

impl OrderColumn for ReceivedSortField {
    const TIE_BREAKER: &'static str = "p.pno";

    fn column(&self) -> &'static str {
        match self {
            Self::Pno => "p.pno",
            Self::Tno => "t.tno",
            Self::Title => "t.title",
            Self::Grade => GRADE_RANK.as_str(),
            Self::Deadline => "t.deadline",
            Self::Birth => "t.birth",
            Self::State => STATE_ORDER.as_str(),
            Self::Read => "p.is_read",
        }
    }
}

/// Escape `\`, `%` and `_` and wrap in wildcards for `LIKE ... ESCAPE '\'`
pub(crate) fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `WHERE <owner> [AND <filters>]` for the sent listing (grade, keyword)
pub(crate) fn push_sent_where<S: OwnerScope>(
    qb: &mut QueryBuilder<'_, Sqlite>,
    scope: &S,
    filter: &TicketFilter,
) {
    qb.push(" WHERE ");
    scope.push_predicate(qb);
    push_ticket_filters(qb, filter);
}

/// `WHERE <owner> [AND <filters>]` for the inbox (grade, read, state, keyword)
pub(crate) fn push_received_where<S: OwnerScope>(
    qb: &mut QueryBuilder<'_, Sqlite>,
    scope: &S,
    filter: &TicketFilter,
) {
    qb.push(" WHERE ");
    scope.push_predicate(qb);
    push_ticket_filters(qb, filter);

    if let Some(read) = filter.read {
        qb.push(" AND p.is_read = ").push_bind(read);
    }
    if let Some(state) = filter.state {
        qb.push(" AND p.state = ").push_bind(state.as_str());
    }
}

fn push_ticket_filters(qb: &mut QueryBuilder<'_, Sqlite>, filter: &TicketFilter) {
    if let Some(grade) = filter.grade {
        qb.push(" AND t.grade = ").push_bind(grade.as_str());
    }
    if let Some(keyword) = filter.keyword() {
        let pattern = like_pattern(keyword);
        qb.push(" AND (t.title LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR t.content LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
}

/// `ORDER BY <field> <dir>[, <tie-breaker> DESC] LIMIT ? OFFSET ?`
pub(crate) fn push_order_and_page<F: OrderColumn>(
    qb: &mut QueryBuilder<'_, Sqlite>,
    request: &PageRequest<F>,
) {
    let column = request.sort.field.column();
    let direction = match request.sort.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };

    qb.push(" ORDER BY ").push(column).push(" ").push(direction);
    if column != F::TIE_BREAKER {
        qb.push(", ").push(F::TIE_BREAKER).push(" DESC");
    }

    qb.push(" LIMIT ")
        .push_bind(request.limit())
        .push(" OFFSET ")
        .push_bind(request.offset());
}

pub(crate) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
