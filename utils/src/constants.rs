// Action inputs
//
// GitHub Actions exposes every step input as `INPUT_<NAME>` with the
// name upper-cased, which is why the values drop the underscores.
pub const INPUT_ACCESS_TOKEN: &str = "INPUT_ACCESSTOKEN";
pub const INPUT_BUILD_ARG: &str = "INPUT_BUILDARG";
pub const INPUT_CONTEXT: &str = "INPUT_CONTEXT";
pub const INPUT_IMAGE_NAME: &str = "INPUT_IMAGENAME";
pub const INPUT_IMAGE_TAG: &str = "INPUT_IMAGETAG";
pub const INPUT_IMAGE_TAG_PREFIX: &str = "INPUT_IMAGETAGPREFIX";
pub const INPUT_IMAGE_TAG_SUFFIX: &str = "INPUT_IMAGETAGSUFFIX";
pub const INPUT_REPOSITORY_NAME: &str = "INPUT_REPOSITORYNAME";
pub const INPUT_USERNAME: &str = "INPUT_USERNAME";

// GitHub CI vars
pub const GITHUB_ACTOR: &str = "GITHUB_ACTOR";
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
pub const GITHUB_REF: &str = "GITHUB_REF";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_WORKSPACE: &str = "GITHUB_WORKSPACE";
pub const HOME: &str = "HOME";

// Misc
pub const DOCKER_CONFIG_PATH: &str = ".docker/config.json";
pub const GITHUB_PACKAGE_REGISTRY: &str = "docker.pkg.github.com";
pub const OUTPUT_IMAGE_URL: &str = "imageURL";
