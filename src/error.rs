use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config load error: {0}")]
    ConfigLoad(String),

    #[error("cannot write report: {0}")]
    Report(#[from] std::io::Error),
}
