use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed-size worker pool the blocking transport runs exchanges on.
///
/// Workers pull jobs off a shared channel. Dropping the pool closes the
/// channel; workers finish whatever is queued and then exit.
pub(crate) struct ThreadPool {
    sender: Option<Sender<Job>>,
    // Handles are kept so the workers stay attached to the pool's lifetime.
    // Never joined - workers drain the queue on their own after drop.
    #[allow(dead_code)]
    workers: Vec<thread::JoinHandle<()>>,
}

impl ThreadPool {
    pub(crate) fn new(size: usize) -> Self {
        let (sender, receiver) = channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..size.max(1))
            .map(|_| {
                let receiver = Arc::clone(&receiver);
                thread::spawn(move || loop {
                    let job = receiver.lock().expect("poisoned").recv();
                    match job {
                        Ok(job) => job(),
                        Err(_) => break,
                    }
                })
            })
            .collect();

        ThreadPool {
            sender: Some(sender),
            workers,
        }
    }

    pub(crate) fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            let _ = sender.send(Box::new(job));
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        // Closing the channel ends each worker's recv loop once the queue
        // has drained.
        self.sender.take();
    }
}
