// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Security Level: JWT Authentication Required
// Middleware: jwt_auth_middleware (attaches AuthUser)
//
// Every task mutation is scoped to the caller: the store matches on both the
// task id and the AuthUser's id, and a miss is reported as 403 whether the
// task is absent or belongs to someone else.

pub mod auth;
pub mod tasks;

pub use auth::*;
pub use tasks::*;
