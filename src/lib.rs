//! Cross-thread notification bridge for crash minidumps.
//!
//! A native crash handler notifies [`CrashDumpBridge::try_to_upload_minidump`]
//! with a file path on a background thread. The bridge validates the path,
//! opens the file, and posts the handoff to the UI thread, where a single
//! registered [`UploadMinidumpCallback`] continues the upload processing.
//!
//! Generating minidumps and actually uploading them both live outside this
//! crate.

pub mod bridge;
pub mod dispatcher;
pub mod errors;
pub mod minidump;

pub use bridge::{CrashDumpBridge, UploadMinidumpCallback};
pub use dispatcher::{UiDispatcher, UiPoster};
pub use errors::{BridgeError, MinidumpError};
pub use minidump::Minidump;
