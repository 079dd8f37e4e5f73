pub mod add;
pub mod config;
pub mod list;
pub mod menu;
pub mod random;
pub mod rate;
pub mod remove;
pub mod search;
pub mod sort;
pub mod stats;
pub mod website;

pub use add::run_add;
pub use list::run_list;
pub use menu::run_menu;
pub use random::run_random;
pub use rate::run_rate;
pub use remove::run_remove;
pub use search::run_search;
pub use sort::run_sort;
pub use stats::run_stats;
pub use website::run_website;
