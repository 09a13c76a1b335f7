use super::handle::Task;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;


struct QueueState {
    tasks: VecDeque<Task>,
    stopping: bool,
}

/// FIFO очередь задач: один mutex + один condvar.
/// Вся мутация только под блокировкой, предикат ожидания —
/// "очередь непуста ИЛИ stopping".
pub struct TaskQueue {
    state: Mutex<QueueState>,
    status_update: Condvar,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                tasks: VecDeque::new(),
                stopping: false,
            }),
            status_update: Condvar::new(),
        }
    }

    /// Ставит задачу в хвост и будит одного воркера.
    /// false если очередь уже закрыта — задача дропается без выполнения.
    pub fn push(&self, task: Task) -> bool {
        {
            let mut state = self.state.lock();
            if state.stopping {
                return false;
            }
            state.tasks.push_back(task);
        }
        self.status_update.notify_one();
        true
    }

    /// Блокирует воркера до появления задачи или закрытия очереди.
    /// None означает "работы больше не будет": очередь закрыта и пуста.
    pub fn pop_or_wait(&self) -> Option<Task> {
        let mut state = self.state.lock();
        while state.tasks.is_empty() && !state.stopping {
            self.status_update.wait(&mut state);
        }
        state.tasks.pop_front()
    }

    /// Выставляет stopping под блокировкой и будит всех воркеров.
    /// Уже стоящие в очереди задачи будут дообработаны (drain).
    pub fn close(&self) {
        {
            let mut state = self.state.lock();
            state.stopping = true;
        }
        self.status_update.notify_all();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.lock().tasks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}
