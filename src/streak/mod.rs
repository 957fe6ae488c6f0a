pub mod calculate;
pub mod exec;
pub mod output;

pub use calculate::{calculate_streak, streak_from_payload, Calendar};
pub use exec::exec;
pub use output::{output_json, output_summary};
