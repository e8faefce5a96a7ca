use std::path::PathBuf;

use bon::Builder;

/// Read-only values supplied by the hosting CI environment.
///
/// Captured once at the start of a run and injected into the
/// resolver and the pipeline instead of being read from
/// process-global state.
#[derive(Debug, Clone, Builder)]
pub struct CiContext {
    /// The identity that triggered the run.
    #[builder(into)]
    pub actor: String,

    /// The full `owner/repo` name of the current repository.
    #[builder(into)]
    pub repository: String,

    /// The git reference the run was triggered for,
    /// e.g. `refs/heads/main` or `refs/pull/42/merge`.
    #[builder(into)]
    pub git_ref: String,

    /// The root of the source checkout.
    #[builder(into)]
    pub workspace: PathBuf,

    /// The home directory of the CI user.
    #[builder(into)]
    pub home: PathBuf,
}
