/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the Go workspace, git,
/// the GitHub API and the console.
pub mod outbound;
