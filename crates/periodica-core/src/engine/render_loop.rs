use super::error::RenderLoopError;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

/// What a draw callback receives on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// 0 for the first frame.
    pub index: u64,
    /// Time since the loop started.
    pub elapsed: Duration,
}

/// A background frame driver that calls a draw function on a fixed interval.
///
/// The loop is owned by this handle: [`stop`](Self::stop) or dropping the
/// handle signals the driver thread and waits for it to finish, so no frame
/// is drawn once either has returned.
#[derive(Debug)]
pub struct RenderLoop {
    stop_signal: Option<Sender<()>>,
    driver: Option<JoinHandle<u64>>,
}

impl RenderLoop {
    pub fn start<F>(interval: Duration, mut draw: F) -> Result<Self, RenderLoopError>
    where
        F: FnMut(Frame) + Send + 'static,
    {
        if interval.is_zero() {
            return Err(RenderLoopError::ZeroInterval);
        }
        let (stop_signal, stop_requested) = mpsc::channel::<()>();

        let driver = thread::Builder::new()
            .name("periodica-render-loop".to_string())
            .spawn(move || {
                let started = Instant::now();
                let mut index = 0u64;
                loop {
                    draw(Frame {
                        index,
                        elapsed: started.elapsed(),
                    });
                    index += 1;
                    match stop_requested.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                index
            })
            .map_err(RenderLoopError::Spawn)?;

        debug!("Render loop started with a {:?} interval.", interval);
        Ok(Self {
            stop_signal: Some(stop_signal),
            driver: Some(driver),
        })
    }

    pub fn is_running(&self) -> bool {
        self.driver
            .as_ref()
            .is_some_and(|driver| !driver.is_finished())
    }

    /// Stops the loop and returns the number of frames drawn.
    pub fn stop(mut self) -> Result<u64, RenderLoopError> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<u64, RenderLoopError> {
        // Disconnecting the channel ends the driver's wait.
        self.stop_signal.take();
        match self.driver.take() {
            Some(driver) => {
                let frames = driver.join().map_err(|_| RenderLoopError::Panicked)?;
                debug!("Render loop stopped after {} frames.", frames);
                Ok(frames)
            }
            None => Ok(0),
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            debug!("Render loop ended abnormally: {}", e);
        }
    }
}
