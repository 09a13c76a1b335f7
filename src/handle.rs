use super::{
    errors::TaskError,
    result::TaskResult,
};
use crossbeam::channel::Receiver;


pub type Task = Box<dyn FnOnce() + Send + 'static>;


/// Handle на результат задачи: читающая сторона one-shot канала
pub struct JoinHandle<T> {
    receiver: Receiver<TaskResult<T>>,
}

impl<T> JoinHandle<T> {

    pub fn new(receiver: Receiver<TaskResult<T>>) -> Self {
        Self {
            receiver
        }
    }

    /// Блокирует вызывающий поток до готовности результата.
    /// Если задача была дропнута без выполнения, возвращает ChannelClosed.
    #[inline(always)]
    pub fn get(self) -> TaskResult<T> {
        self.receiver.recv().unwrap_or(Err(TaskError::ChannelClosed))
    }
}
