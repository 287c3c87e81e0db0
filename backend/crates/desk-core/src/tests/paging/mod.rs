mod page;
mod sort;
