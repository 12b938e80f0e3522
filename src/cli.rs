use clap::Parser;

/// The snapshot directory comes from SNAPSWEEP_DIR or the `directory` key in
/// config.toml; there are no flags so a scheduler can invoke it bare.
#[derive(Parser)]
#[command(name = "snapsweep")]
#[command(about = "Delete camera snapshots older than 24 hours")]
#[command(version)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_parses() {
        assert!(Cli::try_parse_from(["snapsweep"]).is_ok());
    }

    #[test]
    fn arguments_rejected() {
        assert!(Cli::try_parse_from(["snapsweep", "/tmp"]).is_err());
        assert!(Cli::try_parse_from(["snapsweep", "--dry-run"]).is_err());
    }
}
