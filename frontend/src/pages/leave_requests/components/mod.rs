pub mod search;
pub mod table;
