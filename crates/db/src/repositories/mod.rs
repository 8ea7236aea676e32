pub mod staff_repo;
pub mod table_repo;

pub use staff_repo::StaffRepo;
pub use table_repo::TableRepo;
