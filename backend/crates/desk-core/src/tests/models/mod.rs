mod deadline_format;
mod ticket_filter;
mod ticket_grade;
mod ticket_state;
mod views;
