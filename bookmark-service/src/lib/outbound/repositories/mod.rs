pub mod bookmark;
pub mod user;

pub use bookmark::PostgresBookmarkRepository;
pub use user::PostgresUserRepository;
