use super::{
    errors::TaskError,
    result::TaskResult,
    handle::{
        Task,
        JoinHandle,
    },
    model::PoolMetrics,
    queue::TaskQueue,
};
use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
};
use crossbeam::channel::bounded;
use log::{debug, info, warn};


/// Конфигурация пула потоков
#[derive(Debug, Clone)]
pub struct Config {
    pub num_threads: usize,
    pub thread_name_prefix: String,
    pub stack_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_threads: 1,
            thread_name_prefix: "pool-worker".to_string(),
            stack_size: None,
        }
    }
}

impl Config {
    pub fn cpu_bound() -> Self {
        Self {
            num_threads: num_cpus::get(),
            ..Default::default()
        }
    }

    pub fn io_bound() -> Self {
        Self {
            num_threads: num_cpus::get() * 2,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> TaskResult<()> {
        if self.num_threads == 0 {
            return Err(TaskError::Config("num_threads must be > 0".into()));
        }
        Ok(())
    }
}


fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}


/// Основной пул потоков: N долгоживущих воркеров над общей FIFO очередью
pub struct ThreadPool {
    queue: Arc<TaskQueue>,
    active_tasks: Arc<AtomicUsize>,
    idle_workers: Arc<AtomicUsize>,
    total_spawned: Arc<AtomicUsize>,
    completed_tasks: Arc<AtomicUsize>,
    failed_tasks: Arc<AtomicUsize>,
    workers: Vec<Option<thread::JoinHandle<()>>>,
    config: Config,
}

impl ThreadPool {
    pub fn new(num_threads: usize) -> TaskResult<Self> {
        let config = Config {
            num_threads,
            ..Default::default()
        };
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> TaskResult<Self> {
        config.validate()?;

        let queue = Arc::new(TaskQueue::new());
        let active_tasks = Arc::new(AtomicUsize::new(0));
        let idle_workers = Arc::new(AtomicUsize::new(0));
        let total_spawned = Arc::new(AtomicUsize::new(0));
        let completed_tasks = Arc::new(AtomicUsize::new(0));
        let failed_tasks = Arc::new(AtomicUsize::new(0));

        let mut workers = Vec::with_capacity(config.num_threads);

        for id in 0..config.num_threads {
            let worker_queue = queue.clone();
            let worker_active = active_tasks.clone();
            let worker_idle = idle_workers.clone();

            let mut builder = thread::Builder::new()
                .name(format!("{}-{}", config.thread_name_prefix, id));
            if let Some(stack_size) = config.stack_size {
                builder = builder.stack_size(stack_size);
            }

            match builder.spawn(move || worker_loop(worker_queue, worker_active, worker_idle)) {
                Ok(handle) => workers.push(Some(handle)),
                Err(e) => {
                    // Уже запущенных воркеров нельзя бросать в pop_or_wait:
                    // закрываем очередь и дожидаемся их выхода перед возвратом ошибки.
                    queue.close();
                    for worker in &mut workers {
                        if let Some(handle) = worker.take() {
                            let _ = handle.join();
                        }
                    }
                    return Err(TaskError::Config(format!("failed to spawn worker: {}", e)));
                }
            }
        }

        info!("thread pool started: {} workers", config.num_threads);

        Ok(Self {
            queue,
            active_tasks,
            idle_workers,
            total_spawned,
            completed_tasks,
            failed_tasks,
            workers,
            config,
        })
    }

    /// Оборачивает вызов в type-erased задачу, ставит её в очередь и сразу
    /// возвращает handle. Результат или паника задачи уходят в handle через
    /// one-shot канал; `submit` никогда не ждет выполнения.
    pub fn submit<F, R>(&self, f: F) -> JoinHandle<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (tx, rx) = bounded(1);
        let completed_tasks = self.completed_tasks.clone();
        let failed_tasks = self.failed_tasks.clone();

        self.total_spawned.fetch_add(1, Ordering::Relaxed);

        let task: Task = Box::new(move || {
            let result: TaskResult<R> = catch_unwind(AssertUnwindSafe(f))
                .map_err(|payload| {
                    let msg = panic_message(payload);
                    warn!("task panicked: {}", msg);
                    TaskError::Panic(msg)
                });

            if result.is_ok() {
                completed_tasks.fetch_add(1, Ordering::Relaxed);
            } else {
                failed_tasks.fetch_add(1, Ordering::Relaxed);
            }

            let _ = tx.send(result);
        });

        // Закрытая очередь: задача дропается, sender вместе с ней,
        // и get() на handle вернет ChannelClosed вместо зависания.
        if !self.queue.push(task) {
            warn!("submit on a closed queue, task dropped");
        }

        JoinHandle::new(rx)
    }

    #[inline]
    pub fn metrics(&self) -> PoolMetrics {
        PoolMetrics {
            active_tasks: self.active_tasks.load(Ordering::Relaxed),
            idle_workers: self.idle_workers.load(Ordering::Relaxed),
            queued_tasks: self.queue.len(),
            total_spawned: self.total_spawned.load(Ordering::Relaxed),
            completed_tasks: self.completed_tasks.load(Ordering::Relaxed),
            failed_tasks: self.failed_tasks.load(Ordering::Relaxed),
        }
    }

    #[inline]
    pub fn num_threads(&self) -> usize {
        self.config.num_threads
    }
}

impl Drop for ThreadPool {
    /// Единственный путь остановки: закрыть очередь (stopping под блокировкой,
    /// broadcast) и дождаться каждого воркера. Уже поставленные задачи
    /// дообрабатываются до выхода воркеров.
    fn drop(&mut self) {
        self.queue.close();
        for worker in &mut self.workers {
            if let Some(handle) = worker.take() {
                let _ = handle.join();
            }
        }
        info!("thread pool shut down");
    }
}


fn worker_loop(
    queue: Arc<TaskQueue>,
    active_tasks: Arc<AtomicUsize>,
    idle_workers: Arc<AtomicUsize>,
) {
    loop {
        idle_workers.fetch_add(1, Ordering::Release);
        let task = queue.pop_or_wait();
        idle_workers.fetch_sub(1, Ordering::Acquire);

        match task {
            Some(task) => {
                active_tasks.fetch_add(1, Ordering::Release);
                // выполнение всегда вне блокировки очереди
                task();
                active_tasks.fetch_sub(1, Ordering::Release);
            }
            // очередь закрыта и пуста
            None => break,
        }
    }

    debug!(
        "worker {} terminated",
        thread::current().name().unwrap_or("unnamed")
    );
}
