use super::errors::TaskError;

pub type TaskResult<T> = std::result::Result<T, TaskError>;
