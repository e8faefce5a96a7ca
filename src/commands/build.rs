use std::{convert::Infallible, path::PathBuf};

use bon::Builder;
use clap::Args;
use forgepush_process_management::drivers::{
    BuildDriver, CiDriver, DockerDriver, GithubDriver,
    opts::{BuildOpts, LoginOpts, PushOpts},
    types::CiContext,
};
use forgepush_utils::{
    constants::{
        DOCKER_CONFIG_PATH, GITHUB_PACKAGE_REGISTRY, INPUT_ACCESS_TOKEN, INPUT_BUILD_ARG,
        INPUT_CONTEXT, INPUT_IMAGE_NAME, INPUT_IMAGE_TAG, INPUT_IMAGE_TAG_PREFIX,
        INPUT_IMAGE_TAG_SUFFIX, INPUT_REPOSITORY_NAME, INPUT_USERNAME, OUTPUT_IMAGE_URL,
    },
    secret::SecretValue,
};
use log::{debug, info, trace};
use miette::Result;

use crate::{
    build_args,
    reference::{ImageReference, ResolveOpts, resolve_username},
};

use super::ForgepushCommand;

#[derive(Debug, Args, Builder)]
pub struct BuildCommand {
    /// The subdirectory of the workspace
    /// to use as the build context.
    #[arg(short, long, env = INPUT_CONTEXT, value_parser = trimmed_path)]
    #[builder(into)]
    context: PathBuf,

    /// The username to log into the registry with.
    ///
    /// Defaults to the actor that triggered the run.
    #[arg(short, long, env = INPUT_USERNAME)]
    #[builder(into)]
    username: Option<String>,

    /// The token used to authenticate against the registry.
    #[arg(short = 'T', long, env = INPUT_ACCESS_TOKEN, hide_env_values = true)]
    #[builder(into)]
    access_token: SecretValue,

    /// The `owner/repo` to publish the image under.
    ///
    /// Defaults to the current repository.
    #[arg(short, long, env = INPUT_REPOSITORY_NAME)]
    #[builder(into)]
    repository_name: Option<String>,

    /// The name of the image.
    ///
    /// Defaults to the last path segment
    /// of the resolved repository.
    #[arg(short, long, env = INPUT_IMAGE_NAME)]
    #[builder(into)]
    image_name: Option<String>,

    /// The tag of the image.
    ///
    /// Defaults to a value derived from the git
    /// reference the run was triggered for.
    #[arg(short = 't', long, env = INPUT_IMAGE_TAG)]
    #[builder(into)]
    image_tag: Option<String>,

    /// Prepended to the resolved tag when set.
    #[arg(long, env = INPUT_IMAGE_TAG_PREFIX)]
    #[builder(into)]
    image_tag_prefix: Option<String>,

    /// Appended to the resolved tag when set.
    #[arg(long, env = INPUT_IMAGE_TAG_SUFFIX)]
    #[builder(into)]
    image_tag_suffix: Option<String>,

    /// Whitespace-delimited `KEY=VALUE` pairs
    /// passed to the build as `--build-arg`.
    #[arg(short, long, env = INPUT_BUILD_ARG)]
    #[builder(into)]
    build_arg: Option<String>,
}

// Action inputs arrive with whatever whitespace the workflow
// file carried; strip it before treating the value as a path.
#[allow(clippy::unnecessary_wraps)] // clap wants a fallible parser
fn trimmed_path(raw: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(raw.trim()))
}

impl ForgepushCommand for BuildCommand {
    fn try_run(&mut self) -> Result<()> {
        trace!("BuildCommand::try_run()");

        let ctx = GithubDriver::ci_context()?;
        let image = self.run_pipeline::<_, GithubDriver>(&ctx, &DockerDriver)?;

        info!("Successfully published {image}");
        Ok(())
    }
}

impl BuildCommand {
    /// Runs the pipeline: login, resolve, build, push, report,
    /// credential cleanup. Strictly sequential, no retries; the
    /// first failing operation aborts everything after it,
    /// cleanup included.
    fn run_pipeline<D, C>(&self, ctx: &CiContext, driver: &D) -> Result<ImageReference>
    where
        D: BuildDriver,
        C: CiDriver,
    {
        let username = resolve_username(self.username.as_deref(), ctx);

        debug!("Logging into {GITHUB_PACKAGE_REGISTRY} as {username}");
        driver.login(
            &LoginOpts::builder()
                .registry(GITHUB_PACKAGE_REGISTRY)
                .username(username)
                .password(&self.access_token)
                .build(),
        )?;

        let image = ImageReference::resolve(
            &ResolveOpts::builder()
                .ctx(ctx)
                .maybe_repository(self.repository_name.as_deref())
                .maybe_image_name(self.image_name.as_deref())
                .maybe_tag(self.image_tag.as_deref())
                .maybe_tag_prefix(self.image_tag_prefix.as_deref())
                .maybe_tag_suffix(self.image_tag_suffix.as_deref())
                .build(),
        );
        let extra_args = build_args::expand(self.build_arg.as_deref().unwrap_or_default());
        let context_dir = ctx.workspace.join(&self.context);

        info!("Building image {image}");
        driver.build(
            &BuildOpts::builder()
                .image(image.to_string())
                .context_dir(context_dir)
                .extra_args(extra_args)
                .build(),
        )?;

        info!("Pushing image {image}");
        driver.push(&PushOpts::builder().image(image.to_string()).build())?;

        C::set_output(OUTPUT_IMAGE_URL, &image.to_string())?;

        // Hygiene, not correctness: the outcome is discarded.
        driver.remove_config(&ctx.home.join(DOCKER_CONFIG_PATH));

        Ok(image)
    }
}
