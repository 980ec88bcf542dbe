mod custom_collaborators;
mod error_coverage;
