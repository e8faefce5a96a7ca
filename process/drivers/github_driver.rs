use std::path::PathBuf;

use forgepush_utils::{
    append_to_file,
    constants::{
        GITHUB_ACTOR, GITHUB_OUTPUT, GITHUB_REF, GITHUB_REPOSITORY, GITHUB_WORKSPACE, HOME,
    },
};
use log::trace;
use miette::Result;

#[cfg(not(test))]
use forgepush_utils::get_env_var;

#[cfg(test)]
use forgepush_utils::test_utils::get_env_var;

use super::{CiDriver, types::CiContext};

pub struct GithubDriver;

impl CiDriver for GithubDriver {
    fn ci_context() -> Result<CiContext> {
        Ok(CiContext::builder()
            .actor(get_env_var(GITHUB_ACTOR)?)
            .repository(get_env_var(GITHUB_REPOSITORY)?)
            .git_ref(get_env_var(GITHUB_REF)?)
            .workspace(PathBuf::from(get_env_var(GITHUB_WORKSPACE)?))
            .home(PathBuf::from(get_env_var(HOME)?))
            .build())
    }

    fn set_output(name: &str, value: &str) -> Result<()> {
        trace!("GithubDriver::set_output({name}, {value})");

        match get_env_var(GITHUB_OUTPUT) {
            Ok(path) if !path.is_empty() => append_to_file(&path, &format!("{name}={value}")),
            // Runners predating the output file only understand
            // the workflow command.
            _ => {
                println!("::set-output name={name}::{value}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use forgepush_utils::{
        constants::{
            GITHUB_ACTOR, GITHUB_OUTPUT, GITHUB_REF, GITHUB_REPOSITORY, GITHUB_WORKSPACE, HOME,
        },
        test_utils::set_env_var,
    };

    use crate::drivers::CiDriver;

    use super::GithubDriver;

    fn setup() {
        set_env_var(GITHUB_ACTOR, "octocat");
        set_env_var(GITHUB_REPOSITORY, "Test-Owner/Test-Repo");
        set_env_var(GITHUB_REF, "refs/heads/main");
        set_env_var(GITHUB_WORKSPACE, "/workspace");
        set_env_var(HOME, "/home/runner");
    }

    #[test]
    fn ci_context() {
        setup();

        let ctx = GithubDriver::ci_context().unwrap();

        assert_eq!(ctx.actor, "octocat");
        assert_eq!(ctx.repository, "Test-Owner/Test-Repo");
        assert_eq!(ctx.git_ref, "refs/heads/main");
        assert_eq!(ctx.workspace.to_str().unwrap(), "/workspace");
        assert_eq!(ctx.home.to_str().unwrap(), "/home/runner");
    }

    #[test]
    fn ci_context_missing_env() {
        set_env_var(GITHUB_ACTOR, "octocat");

        assert!(GithubDriver::ci_context().is_err());
    }

    #[test]
    fn set_output_appends_to_output_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let output_path = tempdir.path().join("output");
        set_env_var(GITHUB_OUTPUT, output_path.to_str().unwrap());

        GithubDriver::set_output("imageURL", "registry/owner/repo/image:tag").unwrap();
        GithubDriver::set_output("imageURL", "second").unwrap();

        let contents = fs::read_to_string(&output_path).unwrap();
        assert_eq!(contents, "imageURL=registry/owner/repo/image:tag\nimageURL=second\n");
    }

    #[test]
    fn set_output_without_output_file() {
        GithubDriver::set_output("imageURL", "registry/owner/repo/image:tag").unwrap();
    }
}
