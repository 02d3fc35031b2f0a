pub mod discovery;
pub mod mixing;
pub mod reaction_table;
