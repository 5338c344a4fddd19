pub mod announcement;
pub mod comment;
pub mod declaration;
pub mod follow;
pub mod notification;
pub mod page;
pub mod post;
pub mod resource;
pub mod specialty;
pub mod timestamp;

pub use announcement::{Announcement, AnnouncementWrite};
pub use comment::{Comment, CommentWrite, ANONYMOUS_NAME};
pub use declaration::{Declaration, DeclarationType, Receipt};
pub use follow::FollowTag;
pub use notification::Notification;
pub use page::{PageEnvelope, PageRequest};
pub use post::{Drink, PostDetail, PostType, Tag};
pub use resource::{is_local_id, next_local_id, Resource};
pub use specialty::SpecialtyDrink;
