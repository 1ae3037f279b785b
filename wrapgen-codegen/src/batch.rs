//! Batch results and the phase-2 worker pool.

use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
};

use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use serde::Serialize;
use wrapgen_core::{File, WriteResult};

use crate::ClassError;

/// One generated source file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    pub path: PathBuf,
    pub content: String,
}

/// A class that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassFailure {
    /// Qualified host name of the class.
    pub class: String,
    pub error: ClassError,
}

impl ClassFailure {
    pub fn new(class: impl Into<String>, error: impl Into<ClassError>) -> Self {
        Self {
            class: class.into(),
            error: error.into(),
        }
    }
}

/// Outcome of one generation run.
///
/// Generated sources are keyed by qualified host name, in input order.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub generated: IndexMap<String, GeneratedSource>,
    pub failures: Vec<ClassFailure>,
}

impl BatchResult {
    /// Returns true if no class failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Write every generated source below `dir`, returning each path and outcome.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<(PathBuf, WriteResult)>> {
        self.generated
            .values()
            .map(|source| {
                let path = dir.join(&source.path);
                let result = File::new(&path, source.content.as_str())
                    .write()
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                Ok((path, result))
            })
            .collect()
    }
}

/// Resolve a configured job count, 0 meaning the available parallelism.
pub fn worker_count(jobs: usize) -> usize {
    if jobs > 0 {
        jobs
    } else {
        thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }
}

/// Apply `f` to every item on up to `jobs` scoped threads.
///
/// Items are pulled from a shared counter; results come back in input order
/// regardless of which worker produced them. Once any call fails no further
/// items are handed out, and the failure with the lowest index is returned.
pub fn try_run_parallel<I, O, E, F>(items: &[I], jobs: usize, f: F) -> Result<Vec<O>, E>
where
    I: Sync,
    O: Send,
    E: Send,
    F: Fn(&I) -> Result<O, E> + Sync,
{
    let workers = worker_count(jobs).min(items.len());
    if workers <= 1 {
        return items.iter().map(&f).collect();
    }

    let next = AtomicUsize::new(0);
    let failed = AtomicBool::new(false);
    let mut indexed: Vec<(usize, Result<O, E>)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(|| {
                    let mut done = Vec::new();
                    while !failed.load(Ordering::Relaxed) {
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        let Some(item) = items.get(index) else {
                            break;
                        };
                        let outcome = f(item);
                        if outcome.is_err() {
                            failed.store(true, Ordering::Relaxed);
                        }
                        done.push((index, outcome));
                    }
                    done
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(done) => done,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, outcome)| outcome).collect()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::ExtractionError;

    #[test]
    fn test_run_parallel_keeps_input_order() {
        let items: Vec<usize> = (0..200).collect();
        let squares: Result<Vec<_>, ()> = try_run_parallel(&items, 8, |n| Ok(n * n));
        assert_eq!(squares.unwrap(), items.iter().map(|n| n * n).collect::<Vec<_>>());
    }

    #[test]
    fn test_run_parallel_sequential_and_empty() {
        let plus_one: Result<Vec<_>, ()> = try_run_parallel(&[1, 2, 3], 1, |n| Ok(n + 1));
        assert_eq!(plus_one.unwrap(), [2, 3, 4]);
        let empty: Result<Vec<u8>, ()> = try_run_parallel(&[] as &[u8], 4, |n| Ok(*n));
        assert!(empty.unwrap().is_empty());
    }

    #[test]
    fn test_run_parallel_stops_after_failure() {
        let items: Vec<usize> = (0..10_000).collect();
        let calls = AtomicUsize::new(0);
        let result = try_run_parallel(&items, 4, |n| {
            calls.fetch_add(1, Ordering::Relaxed);
            if *n == 3 {
                return Err(*n);
            }
            thread::sleep(std::time::Duration::from_micros(200));
            Ok(*n)
        });
        assert_eq!(result, Err(3));
        assert!(calls.load(Ordering::Relaxed) < items.len());

        let sequential = try_run_parallel(&items, 1, |n| if *n >= 5 { Err(*n) } else { Ok(*n) });
        assert_eq!(sequential, Err(5));
    }

    #[test]
    fn test_worker_count() {
        assert_eq!(worker_count(3), 3);
        assert!(worker_count(0) >= 1);
    }

    #[test]
    fn test_write_to() {
        let temp = TempDir::new().unwrap();
        let mut result = BatchResult::default();
        result.generated.insert(
            "example.Customer".into(),
            GeneratedSource {
                path: PathBuf::from("example/wrappers/Customer.scala"),
                content: "package example.wrappers\n".into(),
            },
        );
        result.failures.push(ClassFailure::new(
            "example.Broken",
            ExtractionError::new("example.Broken", "bad"),
        ));

        let written = result.write_to(temp.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].1, WriteResult::Written);
        assert!(temp.path().join("example/wrappers/Customer.scala").exists());
        assert!(!result.is_complete());

        let again = result.write_to(temp.path()).unwrap();
        assert_eq!(again[0].1, WriteResult::Unchanged);
    }
}
