pub mod exec;
pub mod patch;
pub mod render;

pub use exec::{exec, run, UpdateOutcome};
pub use patch::{
    patch_document, replace_section, replace_timestamp, PatchReport, LANGUAGES_SECTION,
    STREAK_SECTION,
};
pub use render::{languages_section, streak_section, NO_LANGUAGE_DATA};
