use std::ops::Range;

use itertools::Itertools;
use rayon::{ThreadPool, ThreadPoolBuildError};

use crate::debug_println;

/// Items handled by `worker` when `len` items are split over `workers`.
///
/// Ranges are contiguous and ordered; the first `len % workers` workers get
/// one extra item.
pub(crate) fn worker_range(len: usize, workers: usize, worker: usize) -> Range<usize> {
    debug_assert!(worker < workers);

    let (base, extra) = (len / workers, len % workers);
    let start = worker * base + worker.min(extra);
    start..start + base + usize::from(worker < extra)
}

fn lowering_pool(workers: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|idx| format!("casecompat-lower-{idx}"))
        .start_handler(|idx| debug_println!("casecompat-lower-{idx} up"))
        .exit_handler(|idx| debug_println!("casecompat-lower-{idx} down"))
        .build()
}

fn map_items_parallel<I, T, F1, F2>(
    items: &[I],
    jobs: usize,
    make_func: F1,
) -> Result<Vec<T>, ThreadPoolBuildError>
where
    I: Sync,
    T: Send,
    F1: Fn() -> F2,
    F2: Fn(&I) -> T + Send,
{
    let len = items.len();
    let workers = jobs.min(len);
    debug_println!("lowering {len} items on {workers} workers");

    let pool = lowering_pool(workers)?;
    let (results_tx, results_rx) = crossbeam_channel::unbounded();

    // one closure per worker, built here so `make_func` never crosses threads
    let funcs = (0..workers).map(|_| make_func()).collect::<Vec<_>>();

    pool.scope(move |scope| {
        for (worker, func) in funcs.into_iter().enumerate() {
            let range = worker_range(len, workers, worker);
            let results_tx = results_tx.clone();

            scope.spawn(move |_| {
                debug_println!("worker {worker} takes {range:?}");
                let offset = range.start;
                for (i, item) in items[range].iter().enumerate() {
                    // receiver outlives the scope, so send can't fail
                    let _ = results_tx.send((offset + i, func(item)));
                }
            });
        }
    });

    let results = results_rx
        .into_iter()
        .sorted_by_key(|(i, _)| *i)
        .map(|(_, result)| result)
        .collect::<Vec<_>>();
    debug_assert_eq!(results.len(), len);

    Ok(results)
}

/// Apply a per-item function to every item, keeping input order.
///
/// `make_func` is called once per worker so each thread owns its closure.
pub fn map_items<I, T, F1, F2>(
    items: &[I],
    jobs: usize,
    make_func: F1,
) -> Result<Vec<T>, ThreadPoolBuildError>
where
    I: Sync,
    T: Send,
    F1: Fn() -> F2,
    F2: Fn(&I) -> T + Send,
{
    if jobs <= 1 || items.len() <= 1 {
        debug_println!("lowering {} items in place", items.len());
        let func = make_func();
        Ok(items.iter().map(|item| func(item)).collect())
    } else {
        map_items_parallel(items, jobs, make_func)
    }
}
