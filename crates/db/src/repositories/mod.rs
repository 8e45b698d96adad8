pub mod admin_user_repo;
pub mod project_repo;

pub use admin_user_repo::AdminUserRepo;
pub use project_repo::ProjectRepo;
