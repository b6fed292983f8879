use clap::Parser;

/// Generic function to get environment variable, parsing it to the desired type.
pub fn get_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Parses from the command line arguments. On Android there is no command line; the
/// host is configured entirely by [`crate::HostConfig`].
#[allow(dead_code)]
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    T::try_parse()
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Run the activity bootstrap on the desktop against a simulated Android platform
pub struct SimulationArgs {
    /// Package identity used for the settings redirect
    #[clap(short, long, default_value = "dev.moon.littlerenderer")]
    pub package: String,

    /// Pretend all-files access is already granted
    #[clap(short, long, default_value = "false")]
    pub granted: bool,

    /// Renderer module name or path (defaults to $RENDERER_MODULE, then the app's module)
    #[clap(short, long, value_name = "NAME")]
    pub module: Option<String>,

    /// Really load the module with the dynamic loader and drive its lifecycle entry points
    #[clap(long, default_value = "false")]
    pub load_module: bool,

    /// Time spent running before the activity is destroyed
    #[clap(long, default_value = "0", value_name = "MILLIS")]
    pub run_millis: u64,
}

impl SimulationArgs {
    /// Module to load: `--module`, then `$RENDERER_MODULE`, then `default`.
    pub fn module_name(&self, default: &str) -> String {
        self.module
            .clone()
            .or_else(|| get_env::<String>("RENDERER_MODULE"))
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = SimulationArgs::try_parse_from(["host"]).unwrap();
        assert_eq!(args.package, "dev.moon.littlerenderer");
        assert!(!args.granted);
        assert!(!args.load_module);
        assert_eq!(args.run_millis, 0);
    }

    #[test]
    fn test_explicit_module_wins() {
        let args =
            SimulationArgs::try_parse_from(["host", "--module", "/tmp/librenderer.so", "--granted"])
                .unwrap();
        assert!(args.granted);
        assert_eq!(args.module_name("renderer"), "/tmp/librenderer.so");
    }

    #[test]
    fn test_get_env_parses() {
        assert_eq!(get_env::<u64>("NATIVE_ACTIVITY_HOST_SURELY_UNSET"), None);
        assert!(get_env::<String>("CARGO_MANIFEST_DIR").is_some());
    }
}
