pub mod follow;
pub mod ledger;
pub mod merge;
pub mod pagination;
pub mod resource;
pub mod selection;

pub use follow::{FollowTagList, NO_FOLLOW_TAGS};
pub use merge::{Collection, MergeStrategy};
pub use pagination::PaginationState;
pub use resource::{FailurePolicy, FetchOutcome, ResourceStore, StoreOptions, StoreState};
pub use selection::DrinkTypeSelection;
