#![cfg_attr(not(feature = "test"), warn(missing_docs))]
//! A tool for downloading the spell-check dictionaries (`.dic`) and affix files (`.aff`) of
//! several languages into a local directory.

pub mod args;
pub mod entry;
pub mod error;
pub mod fetcher;
pub mod manifest;
pub mod reporting;
pub mod resource;
pub mod world;

#[cfg(feature = "test")]
pub use test_utils::*;

#[cfg(feature = "test")]
mod test_utils {
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};

    /// A log that keeps everything written to it in memory. Clones share the same buffer, so a
    /// test can hand a clone to the world and inspect the output afterwards.
    #[derive(Debug, Clone, Default)]
    pub struct VecLog(Arc<Mutex<Vec<u8>>>);

    impl VecLog {
        /// Creates an empty log.
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the log's content, replacing invalid UTF-8.
        pub fn get_lossy(&self) -> String {
            let buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&buffer).into_owned()
        }
    }

    impl io::Write for VecLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
