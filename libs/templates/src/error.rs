use thiserror::Error;

/// Errors surfaced by the strict template construction paths.
///
/// The permissive content-map parser never produces these; a payload that
/// fails its required-field checks is simply absent from the parsed output.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A self-describing JSON document could not be decoded into a template.
    #[error("failed to construct a UI template from the provided JSON document: {0}")]
    ConstructionFailed(#[from] serde_json::Error),
}
