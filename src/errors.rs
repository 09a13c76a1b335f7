#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task panicked: {0}")]
    Panic(String),

    #[error("result channel closed")]
    ChannelClosed,

    #[error("config error: {0}")]
    Config(String),
}
