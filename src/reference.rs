use std::{borrow::Cow, fmt};

use bon::Builder;
use forgepush_process_management::drivers::types::CiContext;
use forgepush_utils::constants::GITHUB_PACKAGE_REGISTRY;

/// The fully-qualified reference identifying the built artifact.
///
/// Resolved once per run and immutable afterwards. Repository and
/// image name are always lower-cased since registry path segments
/// are not case-safe by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub registry: String,
    pub repository: String,
    pub image_name: String,
    pub tag: String,
}

/// Layered inputs for resolving an [`ImageReference`].
///
/// Every explicit value short-circuits its fallback. Values are
/// trimmed first and whitespace-only strings count as absent so
/// that unset action inputs (which arrive as empty env vars) fall
/// through.
#[derive(Debug, Clone, Builder)]
pub struct ResolveOpts<'scope> {
    pub ctx: &'scope CiContext,

    #[builder(into)]
    pub repository: Option<Cow<'scope, str>>,

    #[builder(into)]
    pub image_name: Option<Cow<'scope, str>>,

    #[builder(into)]
    pub tag: Option<Cow<'scope, str>>,

    #[builder(into)]
    pub tag_prefix: Option<Cow<'scope, str>>,

    #[builder(into)]
    pub tag_suffix: Option<Cow<'scope, str>>,
}

impl ImageReference {
    /// Resolves the reference from explicit inputs and ambient
    /// CI context. Pure: same inputs, same reference.
    #[must_use]
    pub fn resolve(opts: &ResolveOpts) -> Self {
        let ctx = opts.ctx;

        let repository = non_empty(opts.repository.as_deref())
            .unwrap_or(&ctx.repository)
            .to_lowercase();

        // Falls back to the last repository segment, which is
        // already lower-case.
        let image_name = non_empty(opts.image_name.as_deref()).map_or_else(
            || {
                repository
                    .rsplit('/')
                    .next()
                    .unwrap_or(&repository)
                    .to_owned()
            },
            str::to_lowercase,
        );

        let mut tag = non_empty(opts.tag.as_deref())
            .map_or_else(|| derive_tag_base(&ctx.git_ref), ToOwned::to_owned);
        if let Some(prefix) = non_empty(opts.tag_prefix.as_deref()) {
            tag = format!("{prefix}{tag}");
        }
        if let Some(suffix) = non_empty(opts.tag_suffix.as_deref()) {
            tag.push_str(suffix);
        }

        Self {
            registry: GITHUB_PACKAGE_REGISTRY.to_owned(),
            repository,
            image_name,
            tag,
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}:{}",
            self.registry, self.repository, self.image_name, self.tag
        )
    }
}

/// Resolves the registry username: the explicit value when
/// non-empty, otherwise the actor that triggered the run.
#[must_use]
pub fn resolve_username<'scope>(explicit: Option<&'scope str>, ctx: &'scope CiContext) -> &'scope str {
    non_empty(explicit).unwrap_or(&ctx.actor)
}

/// Derives the tag base from a git reference.
///
/// Pull-request merge refs arrive as `refs/pull/<N>/merge`, so the
/// numeric identifier sits second-to-last and the literal `merge`
/// segment is replaced with an `mr` marker. A ref with a single
/// segment never triggers the special case.
fn derive_tag_base(git_ref: &str) -> String {
    let segments = git_ref.split('/').collect::<Vec<_>>();

    match segments.as_slice() {
        [.., number, "merge"] => format!("mr{number}"),
        [.., last] => (*last).to_owned(),
        [] => String::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
