use crate::state::{HostState, Transition};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can go wrong while bootstrapping or tearing down the host.
///
/// None of these are recovered locally: the entry points log them and abort
/// the process (see [`crate::terminator::fatal`]).
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to load native module `{name}`: {source}")]
    ModuleLoad {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("native module `{module}` does not export `{symbol}`: {source}")]
    MissingSymbol {
        module: String,
        symbol: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("invalid lifecycle transition {transition:?} from state {from:?}")]
    InvalidTransition {
        from: HostState,
        transition: Transition,
    },

    #[cfg(target_os = "android")]
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),

    #[error("platform error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, HostError>;
