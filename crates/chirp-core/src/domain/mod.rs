//! Domain entities - the core business objects.

mod follow;
mod post;
mod timeline;
mod user;

pub use follow::Follow;
pub use post::{MAX_CONTENT_LEN, Post};
pub use timeline::Timeline;
pub use user::User;
