mod error;
mod logging;
mod queries;
