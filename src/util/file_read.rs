//! Reading a user-selected image into a `data:` URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! The compose flow stores images inline in the persisted post, so the file
//! picked in the modal is read with a `FileReader` and bridged into a future.
//!
//! ERROR HANDLING
//! ==============
//! A read either resolves with the URL or fails with [`FileReadError`];
//! [`read_data_url_within`] also fails once the timeout elapses so the modal
//! never waits forever.

#[cfg(test)]
#[path = "file_read_test.rs"]
mod file_read_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use futures::channel::oneshot;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Error returned when a selected file cannot be turned into a `data:` URL.
#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    /// `FileReader` could not be created.
    #[error("file reader is not available")]
    Unavailable,
    /// The browser reported an error while reading.
    #[error("failed to read file: {0}")]
    Read(String),
    /// The read did not finish within the allowed time.
    #[error("reading the file timed out")]
    TimedOut,
}

#[cfg(feature = "csr")]
type ReadResult = Result<String, FileReadError>;

/// Keeps the reader callbacks alive while a read is pending and detaches them
/// when the read completes or is abandoned.
#[cfg(feature = "csr")]
struct PendingRead {
    reader: web_sys::FileReader,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

#[cfg(feature = "csr")]
impl Drop for PendingRead {
    fn drop(&mut self) {
        self.reader.set_onload(None);
        self.reader.set_onerror(None);
        self.reader.abort();
    }
}

#[cfg(feature = "csr")]
fn deliver(slot: &Rc<RefCell<Option<oneshot::Sender<ReadResult>>>>, result: ReadResult) {
    let Some(tx) = slot.borrow_mut().take() else {
        return;
    };
    if tx.send(result).is_err() {
        log::debug!("file read finished after its caller went away");
    }
}

/// Read `file` as a `data:` URL.
#[cfg(feature = "csr")]
pub async fn read_data_url(file: web_sys::File) -> Result<String, FileReadError> {
    let reader = web_sys::FileReader::new().map_err(|_| FileReadError::Unavailable)?;
    let (tx, rx) = oneshot::channel::<ReadResult>();
    let slot = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let slot = slot.clone();
        let reader = reader.clone();
        Closure::wrap(Box::new(move || {
            let result = match reader.result() {
                Ok(value) => value
                    .as_string()
                    .ok_or_else(|| FileReadError::Read("reader result is not a string".to_owned())),
                Err(err) => Err(FileReadError::Read(format!("{err:?}"))),
            };
            deliver(&slot, result);
        }) as Box<dyn FnMut()>)
    };
    let on_error = {
        let slot = slot.clone();
        let reader = reader.clone();
        Closure::wrap(Box::new(move || {
            let message = reader
                .error()
                .map_or_else(|| "unknown error".to_owned(), |err| err.message());
            deliver(&slot, Err(FileReadError::Read(message)));
        }) as Box<dyn FnMut()>)
    };
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let pending = PendingRead { reader, _on_load: on_load, _on_error: on_error };
    pending
        .reader
        .read_as_data_url(&file)
        .map_err(|err| FileReadError::Read(format!("{err:?}")))?;

    let outcome = rx.await;
    drop(pending);
    outcome.unwrap_or_else(|_| Err(FileReadError::Read("reader dropped".to_owned())))
}

/// Read `file` as a `data:` URL, giving up after `timeout`.
#[cfg(feature = "csr")]
pub async fn read_data_url_within(file: web_sys::File, timeout: std::time::Duration) -> Result<String, FileReadError> {
    race_timeout(read_data_url(file), gloo_timers::future::sleep(timeout)).await
}

/// Resolve with `read` unless `timer` fires first.
///
/// The losing future is dropped before returning; for a browser read that
/// drops its [`PendingRead`] guard, detaching the callbacks and aborting.
#[cfg(any(test, feature = "csr"))]
async fn race_timeout<R, T>(read: R, timer: T) -> Result<String, FileReadError>
where
    R: Future<Output = Result<String, FileReadError>>,
    T: Future<Output = ()>,
{
    let read = std::pin::pin!(read);
    let timer = std::pin::pin!(timer);
    match futures::future::select(read, timer).await {
        futures::future::Either::Left((result, _)) => result,
        futures::future::Either::Right(((), _)) => Err(FileReadError::TimedOut),
    }
}
