pub mod whoami; // GET /whoami

pub use whoami::whoami_get;
