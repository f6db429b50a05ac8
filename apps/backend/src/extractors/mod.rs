pub mod pit_path;
pub mod validated_json;

pub use pit_path::PitPath;
pub use validated_json::ValidatedJson;
