pub mod enums;
pub mod ids;
pub mod task;
pub mod views;

pub use enums::{FilterMode, SortMode, UiMode};
pub use ids::{IdGenerator, UuidGenerator};
pub use task::{is_valid_text, Task};
pub use views::{count_completed, display_tasks};
