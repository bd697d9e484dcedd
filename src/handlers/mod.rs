// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer token)

pub mod public; // /register, /login
pub mod protected; // /tasks, /create, /update, /delete, /whoami
