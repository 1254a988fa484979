use anyhow::bail;
use clap::Parser;

/// Runtime configuration for the identifier service.
///
/// All values are parsed from CLI arguments or environment variables, with
/// defaults suitable for a developer workstation.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "quotid-axum",
    version,
    about = "HTTP service issuing reversible quote identifiers"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:3000"))]
    pub server_addr: String,

    /// Deployment environment selector (dev, ci, qa, prod).
    ///
    /// `dev` switches logging to pretty, colored output at `debug`;
    /// everything else logs JSON at `info`.
    ///
    /// Environment variable: `ENVIRONMENT`
    #[arg(long, env = "ENVIRONMENT", default_value_t = String::from("dev"))]
    pub environment: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub environment: String,
}

impl ServerConfig {
    /// Whether this process runs in a developer environment.
    pub fn is_dev(&self) -> bool {
        self.environment.eq_ignore_ascii_case("dev")
    }
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.server_addr.trim().is_empty() {
            bail!("SERVER_ADDR must not be blank");
        }
        if args.environment.trim().is_empty() {
            bail!("ENVIRONMENT must not be blank");
        }
        Ok(Self {
            server_addr: args.server_addr,
            environment: args.environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(server_addr: &str, environment: &str) -> CliArgs {
        CliArgs {
            server_addr: server_addr.to_owned(),
            environment: environment.to_owned(),
        }
    }

    #[test]
    fn defaults_parse_and_validate() {
        let args = CliArgs::try_parse_from(["quotid-axum"]).unwrap();
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:3000");
        assert!(config.is_dev());
    }

    #[test]
    fn blank_values_are_rejected() {
        assert!(ServerConfig::try_from(args(" ", "dev")).is_err());
        assert!(ServerConfig::try_from(args("0.0.0.0:3000", "")).is_err());
    }

    #[test]
    fn environment_selector_is_case_insensitive() {
        let config = ServerConfig::try_from(args("127.0.0.1:0", "DEV")).unwrap();
        assert!(config.is_dev());
        let config = ServerConfig::try_from(args("127.0.0.1:0", "prod")).unwrap();
        assert!(!config.is_dev());
    }
}
