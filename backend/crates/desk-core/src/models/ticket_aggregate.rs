use crate::{Ticket, TicketPersonal};

/// A ticket together with every personal record it owns.
///
/// Personal records are ordered by `pno` ascending, which is receiver order
/// at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketAggregate {
    pub ticket: Ticket,
    pub personals: Vec<TicketPersonal>,
}

impl TicketAggregate {
    pub fn personal_for(&self, receiver: &str) -> Option<&TicketPersonal> {
        self.personals.iter().find(|p| p.receiver == receiver)
    }

    pub fn receivers(&self) -> Vec<&str> {
        self.personals.iter().map(|p| p.receiver.as_str()).collect()
    }
}
