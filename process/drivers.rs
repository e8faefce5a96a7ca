//! Drivers for the external collaborators of a run: the container
//! tool that logs in, builds and pushes the image, and the CI system
//! that supplies ambient context and receives the run's output.

pub mod opts;
pub mod types;

mod docker_driver;
mod github_driver;
mod traits;

pub use docker_driver::DockerDriver;
pub use github_driver::GithubDriver;
pub use traits::{BuildDriver, CiDriver};
