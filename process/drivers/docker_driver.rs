use std::path::Path;

use forgepush_utils::cmd;
use log::{debug, info, trace, warn};
use miette::{IntoDiagnostic, Result, bail};

use super::{
    BuildDriver,
    opts::{BuildOpts, LoginOpts, PushOpts},
};

/// Drives the `docker` CLI on the runner.
#[derive(Debug)]
pub struct DockerDriver;

impl BuildDriver for DockerDriver {
    fn login(&self, opts: &LoginOpts) -> Result<()> {
        trace!("docker login -u {} -p [MASKED] {}", opts.username, opts.registry);
        let output = cmd!(
            "docker",
            "login",
            "-u",
            opts.username.as_ref(),
            "-p",
            opts.password.value(),
            opts.registry.as_ref()
        )
        .output()
        .into_diagnostic()?;

        if !output.status.success() {
            let err_out = String::from_utf8_lossy(&output.stderr);
            bail!("Failed to login for docker: {err_out}");
        }
        debug!("Logged into {}", opts.registry);
        Ok(())
    }

    fn build(&self, opts: &BuildOpts) -> Result<()> {
        trace!("DockerDriver::build({opts:#?})");

        let mut command = cmd!(
            "docker",
            "build",
            "--tag",
            opts.image.as_ref(),
            opts.context_dir.as_ref()
        );
        opts.extra_args.iter().for_each(|arg| {
            cmd!(command, arg);
        });

        trace!("{command:?}");
        let status = command.status().into_diagnostic()?;

        if status.success() {
            info!("Successfully built {}", opts.image);
        } else {
            bail!("Failed to build {}", opts.image);
        }
        Ok(())
    }

    fn push(&self, opts: &PushOpts) -> Result<()> {
        trace!("docker push {}", opts.image);
        let status = cmd!("docker", "push", opts.image.as_ref())
            .status()
            .into_diagnostic()?;

        if status.success() {
            info!("Successfully pushed {}!", opts.image);
        } else {
            bail!("Failed to push image {}", opts.image);
        }
        Ok(())
    }

    fn remove_config(&self, path: &Path) {
        trace!("rm -v {}", path.display());

        // Spawned and left to finish on its own; the process is
        // about to exit and a leftover credential file is not a
        // reason to fail an otherwise successful run.
        debug!("Removing {}", path.display());
        if let Err(e) = cmd!("rm", "-v", path).spawn() {
            warn!("Unable to remove {}: {e}", path.display());
        }
    }
}
