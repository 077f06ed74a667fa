use crate::source::{AccessRecord, RecordDecoder, SourceError};
use std::any::Any;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

pub const DEFAULT_QUEUE_CAPACITY: usize = 50;

type Item = Result<AccessRecord, SourceError>;

/// Records decoded on a background reader thread, in arrival order.
///
/// The reader and the consumer share one bounded queue: the reader blocks while the queue is
/// full and the consumer blocks while it is empty. End of input is signalled by the reader
/// hanging up, never by a sentinel record. A decode error is forwarded as the last item.
pub struct RecordStream {
    rx: Receiver<Item>,
    handle: Option<JoinHandle<()>>,
}

impl RecordStream {
    /// Opens `path` on the calling thread, then starts decoding it in the background.
    pub fn spawn(path: impl AsRef<Path>, capacity: usize) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SourceError::open(path, e))?;

        tracing::debug!(path = %path.display(), capacity, "opened access log");

        Self::from_reader(file, capacity)
    }

    pub fn from_reader<R>(input: R, capacity: usize) -> Result<Self, SourceError>
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel::<Item>(capacity);

        let handle = thread::Builder::new()
            .name("logwatch-reader".to_string())
            .spawn(move || {
                let mut decoder = RecordDecoder::new(input);

                for item in decoder.by_ref() {
                    // If the consumer is gone, stop early.
                    if tx.send(item).is_err() {
                        tracing::debug!("record consumer hung up, stopping reader");
                        return;
                    }
                }

                tracing::debug!(rows = decoder.rows_decoded(), "reader finished");
                // tx is dropped here, which disconnects rx.
            })
            .map_err(SourceError::Spawn)?;

        Ok(Self {
            rx,
            handle: Some(handle),
        })
    }
}

impl Iterator for RecordStream {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.rx.recv() {
            Ok(item) => Some(item),
            Err(_) => {
                // A reader that died mid-stream also disconnects; that must not pass for
                // a clean end of input.
                let handle = self.handle.take()?;
                let payload = handle.join().err()?;

                let message = panic_message(payload.as_ref());
                tracing::error!(%message, "record reader panicked");
                Some(Err(SourceError::ReaderPanicked { message }))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
