use crate::{
    dispatcher::UiPoster,
    errors::BridgeError,
    minidump::Minidump,
};
use std::{
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

/// The callback that continues upload processing for a minidump.
///
/// Registered on, and always invoked on, the UI thread.
pub trait UploadMinidumpCallback: Send {
    fn try_to_upload_minidump(&mut self, minidump: Minidump);
}

impl<F> UploadMinidumpCallback for F
where
    F: FnMut(Minidump) + Send,
{
    fn try_to_upload_minidump(&mut self, minidump: Minidump) {
        self(minidump)
    }
}

struct Shared {
    callback: Mutex<Option<Box<dyn UploadMinidumpCallback>>>,
}

/// Bridges minidump notifications from a background thread to a single
/// upload callback on the UI thread.
///
/// The bridge is owned by the application context and cloned to whoever
/// raises notifications, typically the native crash handler glue. There is
/// exactly one callback slot, filled at most once.
#[derive(Clone)]
pub struct CrashDumpBridge {
    shared: Arc<Shared>,
    poster: UiPoster,
}

impl CrashDumpBridge {
    pub fn new(poster: UiPoster) -> Self {
        Self {
            shared: Arc::new(Shared {
                callback: Mutex::new(None),
            }),
            poster,
        }
    }

    /// Registers the callback to trigger when a new minidump is notified.
    ///
    /// May succeed at most once. Must be called on the UI thread, before any
    /// notification that should observe the callback.
    pub fn register_upload_callback(
        &self,
        callback: impl UploadMinidumpCallback + 'static,
    ) -> Result<(), BridgeError> {
        assert!(
            self.poster.on_ui_thread(),
            "register_upload_callback must be called on the UI thread"
        );

        let mut slot = self
            .shared
            .callback
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(BridgeError::CallbackAlreadyRegistered);
        }
        *slot = Some(Box::new(callback));
        Ok(())
    }

    /// Attempts to hand the minidump at `path` to the registered callback,
    /// or does nothing if the path is invalid or no callback is registered.
    ///
    /// Called by crash-handler code on a background thread; the file
    /// validation below is why it must stay off the UI thread. Failures are
    /// logged and absorbed, nothing is reported back to the caller.
    pub fn try_to_upload_minidump(&self, path: impl AsRef<Path>) {
        assert!(
            !self.poster.on_ui_thread(),
            "try_to_upload_minidump must be called on a background thread"
        );

        let minidump = match Minidump::open(path.as_ref()) {
            Ok(minidump) => minidump,
            Err(err) => {
                log::error!("{err}! Bailing...");
                return;
            }
        };

        // The callback slot is only touched on the UI thread.
        let shared = self.shared.clone();
        self.poster.post(move || {
            let mut slot = shared
                .callback
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match slot.as_mut() {
                Some(callback) => callback.try_to_upload_minidump(minidump),
                None => {
                    log::warn!("Ignoring crash observed before a callback was registered...");
                }
            }
        });
    }
}
