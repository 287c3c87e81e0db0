use crate::{Ticket, TicketPersonal};

/// A ticket as seen through exactly one receiver's personal record
#[derive(Debug, Clone, PartialEq)]
pub struct InboxEntry {
    pub ticket: Ticket,
    pub personal: TicketPersonal,
}
