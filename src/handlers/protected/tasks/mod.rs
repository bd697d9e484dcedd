pub mod create; // POST /create?title=
pub mod delete; // POST /delete?id=
pub mod list; // GET /tasks
pub mod update; // POST /update?id=
pub mod utils;

pub use create::create_post;
pub use delete::delete_post;
pub use list::list_get;
pub use update::update_post;
