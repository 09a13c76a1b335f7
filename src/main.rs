use promise_pool::ThreadPool;
use std::time::Instant;


fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn main() {
    env_logger::init();

    let pool = ThreadPool::new(4).unwrap();

    let sum = pool.submit(|| add(1.0, 2.0));
    let product = pool.submit(|| multiply(3.0, 4.0));

    println!("add(1.0, 2.0) = {}", sum.get().unwrap());
    println!("multiply(3.0, 4.0) = {}", product.get().unwrap());

    let now = Instant::now();
    let handles: Vec<_> = (0..1_000_000)
        .map(|i| pool.submit(move || i))
        .collect();
    for handle in handles {
        let _ = handle.get();
    }
    println!("elapsed: {:?}", now.elapsed());
}
