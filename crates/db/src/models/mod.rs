pub mod staff;
pub mod table;
