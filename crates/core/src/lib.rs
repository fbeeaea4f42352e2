pub mod fit;
pub mod ident;
pub mod metrics;
pub mod notify;
pub mod remote_image;
pub mod scaling;
pub mod time_format;

pub use fit::{FitError, fit_image};
pub use ident::{generate_uuid, generate_uuid_with};
pub use metrics::{MetricsError, parse_metrics, parse_platform, validate_metrics};
pub use notify::{
    NativeModuleNotifier, NativeToastModule, Notifier, NotifyError, ToastLibraryNotifier,
    ToastPresenter, select_notifier,
};
pub use remote_image::transform_remote_image_url;
pub use scaling::{BASE_HEIGHT, BASE_WIDTH, ScalingUtility, scale_factors};
pub use time_format::{TimeFormatError, format_timestamp, format_timestamp_in};

pub use scalekit_protocol as protocol;
