// Extraction pipeline: uploaded bytes → plain text → structured profile.
// All three stages are pure with respect to request state.

pub mod fields;
pub mod loader;
pub mod skills;
