//! Shared folders
//!
//! Wraps folders in an async mutex so structural operations from concurrent
//! tasks run one at a time per folder.

use log::debug;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::storage::folder::Folder;

/// Thread-safe folder handle
pub type SharedFolder = Arc<Mutex<Folder>>;

pub fn share(folder: Folder) -> SharedFolder {
    Arc::new(Mutex::new(folder))
}

/// Moves the file called `name` from `source` into `destination`, holding
/// both locks for the whole operation.
pub async fn move_between(source: &SharedFolder, name: &str, destination: &SharedFolder) -> bool {
    if Arc::ptr_eq(source, destination) {
        debug!("Move of {} within the same folder handle", name);
        return true;
    }

    let (mut source, mut destination) = lock_pair(source, destination).await;
    source.move_file_to(name, &mut destination)
}

/// Copies the file called `name` from `source` into `destination`, holding
/// both locks for the whole operation.
pub async fn copy_between(source: &SharedFolder, name: &str, destination: &SharedFolder) -> bool {
    if Arc::ptr_eq(source, destination) {
        debug!("Copy of {} within the same folder handle", name);
        return true;
    }

    let (mut source, mut destination) = lock_pair(source, destination).await;
    source.copy_file_to(name, &mut destination)
}

/// Locks two distinct folders in address order, returning the guards in
/// argument order.
async fn lock_pair<'a>(
    first: &'a SharedFolder,
    second: &'a SharedFolder,
) -> (MutexGuard<'a, Folder>, MutexGuard<'a, Folder>) {
    if Arc::as_ptr(first) < Arc::as_ptr(second) {
        let first_guard = first.lock().await;
        let second_guard = second.lock().await;
        (first_guard, second_guard)
    } else {
        let second_guard = second.lock().await;
        let first_guard = first.lock().await;
        (first_guard, second_guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::File;

    async fn shared_with(name: &str, files: &[&str]) -> SharedFolder {
        let shared = share(Folder::new(name).unwrap());
        {
            let mut folder = shared.lock().await;
            for file_name in files {
                let mut file = File::new(file_name, "", None).unwrap();
                assert!(folder.add_file(&mut file));
            }
        }
        shared
    }

    #[tokio::test]
    async fn test_move_between_distinct_handles() {
        let a = shared_with("A", &["one", "two"]).await;
        let b = shared_with("B", &[]).await;

        assert!(move_between(&a, "one.txt", &b).await);
        assert_eq!(a.lock().await.file_names(), vec!["two.txt"]);
        assert_eq!(b.lock().await.file_names(), vec!["one.txt"]);

        // and back again, exercising the opposite lock order
        assert!(move_between(&b, "one.txt", &a).await);
        assert_eq!(a.lock().await.file_names(), vec!["one.txt", "two.txt"]);
        assert!(b.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_same_handle_is_trivial_success() {
        let a = shared_with("A", &["one"]).await;
        assert!(move_between(&a, "one.txt", &a).await);
        assert!(copy_between(&a, "missing.txt", &a).await);
        assert_eq!(a.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_copy_between() {
        let a = shared_with("A", &["one"]).await;
        let b = shared_with("B", &[]).await;

        assert!(copy_between(&a, "one.txt", &b).await);
        assert!(!copy_between(&a, "one.txt", &b).await);
        assert_eq!(a.lock().await.len(), 1);
        assert_eq!(b.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_cross_moves_complete() {
        let a = shared_with("A", &["a1", "a2", "a3"]).await;
        let b = shared_with("B", &["b1", "b2", "b3"]).await;

        let mut tasks = Vec::new();
        for i in 1..=3 {
            let (a1, b1) = (Arc::clone(&a), Arc::clone(&b));
            tasks.push(tokio::spawn(async move {
                move_between(&a1, &format!("a{}.txt", i), &b1).await
            }));
            let (a2, b2) = (Arc::clone(&a), Arc::clone(&b));
            tasks.push(tokio::spawn(async move {
                move_between(&b2, &format!("b{}.txt", i), &a2).await
            }));
        }
        for task in tasks {
            assert!(task.await.unwrap());
        }

        assert_eq!(
            a.lock().await.file_names(),
            vec!["b1.txt", "b2.txt", "b3.txt"]
        );
        assert_eq!(
            b.lock().await.file_names(),
            vec!["a1.txt", "a2.txt", "a3.txt"]
        );
    }
}
