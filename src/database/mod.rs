pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryStore;
pub use models::{Task, User};
pub use postgres::PgStore;
pub use repository::{TaskStore, UserStore};
