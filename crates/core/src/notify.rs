//! Toast notifications.
//!
//! The host provides the presentation surfaces; this module only picks one
//! per platform and forwards messages to it.

use scalekit_protocol::Platform;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("native toast module is not registered")]
    MissingNativeModule,
    #[error("native module {module}: {reason}")]
    NativeModule { module: String, reason: String },
    #[error("toast presenter: {0}")]
    Presenter(String),
}

/// Something that can show a short message to the user.
pub trait Notifier {
    fn show(&self, message: &str) -> Result<(), NotifyError>;
}

/// A host native module exposing a single `show(message)` method.
pub trait NativeToastModule {
    /// Name the module is registered under on the host side.
    fn name(&self) -> &str;
    fn show(&self, message: &str) -> Result<(), NotifyError>;
}

/// A cross-platform toast library's info popup.
pub trait ToastPresenter {
    fn info(&self, message: &str) -> Result<(), NotifyError>;
}

pub struct NativeModuleNotifier {
    module: Box<dyn NativeToastModule>,
}

impl NativeModuleNotifier {
    pub fn new(module: Box<dyn NativeToastModule>) -> Self {
        Self { module }
    }
}

impl Notifier for NativeModuleNotifier {
    fn show(&self, message: &str) -> Result<(), NotifyError> {
        tracing::debug!(module = self.module.name(), "forwarding toast to native module");
        self.module.show(message)
    }
}

pub struct ToastLibraryNotifier {
    presenter: Box<dyn ToastPresenter>,
}

impl ToastLibraryNotifier {
    pub fn new(presenter: Box<dyn ToastPresenter>) -> Self {
        Self { presenter }
    }
}

impl Notifier for ToastLibraryNotifier {
    fn show(&self, message: &str) -> Result<(), NotifyError> {
        self.presenter.info(message)
    }
}

/// Choose the notification surface for `platform`.
///
/// Android uses the native module, iOS uses the toast library. Selecting
/// Android without a native module fails here rather than on first use.
pub fn select_notifier(
    platform: Platform,
    native: Option<Box<dyn NativeToastModule>>,
    toast: Box<dyn ToastPresenter>,
) -> Result<Box<dyn Notifier>, NotifyError> {
    match platform {
        Platform::Android => {
            let module = native.ok_or(NotifyError::MissingNativeModule)?;
            tracing::debug!(module = module.name(), "using native toast module");
            Ok(Box::new(NativeModuleNotifier::new(module)))
        }
        Platform::Ios => {
            tracing::debug!("using toast library");
            Ok(Box::new(ToastLibraryNotifier::new(toast)))
        }
    }
}
