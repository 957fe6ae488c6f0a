pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{languages_from_payload, repositories_from_payload, LanguageSizes};
pub use exec::exec;
pub use output::{output_json, output_ndjson, output_table};
