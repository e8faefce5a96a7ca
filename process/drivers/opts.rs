use std::{borrow::Cow, path::Path};

use bon::Builder;
use forgepush_utils::secret::SecretValue;

/// Options for logging into a registry.
#[derive(Debug, Builder)]
pub struct LoginOpts<'scope> {
    #[builder(into)]
    pub registry: Cow<'scope, str>,

    #[builder(into)]
    pub username: Cow<'scope, str>,

    pub password: &'scope SecretValue,
}

/// Options for building an image.
#[derive(Debug, Clone, Builder)]
pub struct BuildOpts<'scope> {
    /// The fully-qualified reference to tag the image with.
    #[builder(into)]
    pub image: Cow<'scope, str>,

    /// The directory to use as the build context.
    #[builder(into)]
    pub context_dir: Cow<'scope, Path>,

    /// Extra tokens appended verbatim to the build command,
    /// e.g. `--build-arg KEY=VALUE` pairs.
    #[builder(default, into)]
    pub extra_args: Vec<String>,
}

/// Options for pushing an image.
#[derive(Debug, Clone, Builder)]
pub struct PushOpts<'scope> {
    #[builder(into)]
    pub image: Cow<'scope, str>,
}
