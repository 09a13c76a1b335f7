//! Пул рабочих потоков фиксированного размера с promise/future доставкой результатов
//!
//! # Features
//! - FIFO очередь задач под одним mutex + condvar
//! - Блокирующий `JoinHandle::get` для получения результата или ошибки
//! - Изоляция паник: паника задачи уходит в её handle, воркер продолжает работу
//! - Graceful drain: Drop дожидается выполнения всех поставленных задач
//! - Метрики пула и конфигурация для CPU-bound и I/O-bound workloads

pub mod errors;
pub mod handle;
pub mod model;
pub mod pool;
pub mod queue;
pub mod result;

pub use pool::{ThreadPool, Config};
