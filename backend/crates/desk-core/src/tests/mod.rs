mod models;
mod paging;
