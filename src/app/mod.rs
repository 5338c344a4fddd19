pub mod context;
pub mod error;
pub mod notice;

pub use context::AppContext;
pub use error::{HanjanError, Result};
pub use notice::{Notice, NoticeKind};
