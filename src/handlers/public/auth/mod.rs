// handlers/public/auth/mod.rs - Token acquisition endpoints (no authentication required)

pub mod login; // POST /login - authenticate and get a bearer token
pub mod register; // POST /register - create a new account
pub mod utils;

pub use login::login_post;
pub use register::register_post;
pub use utils::Credentials;
