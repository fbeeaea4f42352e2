//! Integration test: load host metrics snapshots for several devices, wire up
//! a utility per device with the platform's notifier, and check sizing and
//! notification routing end to end.

use std::cell::RefCell;
use std::rc::Rc;

use scalekit_core::protocol::{ImageBox, Platform, TimeFormatOptions};
use scalekit_core::{
    NativeToastModule, NotifyError, ScalingUtility, ToastPresenter, parse_metrics, select_notifier,
};

type Shown = Rc<RefCell<Vec<(&'static str, String)>>>;

struct HostModule(Shown);

impl NativeToastModule for HostModule {
    fn name(&self) -> &str {
        "CustomerModule"
    }

    fn show(&self, message: &str) -> Result<(), NotifyError> {
        self.0.borrow_mut().push(("native", message.to_string()));
        Ok(())
    }
}

struct HostToast(Shown);

impl ToastPresenter for HostToast {
    fn info(&self, message: &str) -> Result<(), NotifyError> {
        self.0.borrow_mut().push(("toast", message.to_string()));
        Ok(())
    }
}

fn load(data: &[u8], shown: &Shown) -> ScalingUtility {
    let metrics = parse_metrics(data).expect("fixture should parse");
    let notifier = select_notifier(
        metrics.platform,
        Some(Box::new(HostModule(shown.clone()))),
        Box::new(HostToast(shown.clone())),
    )
    .expect("notifier should be selected");
    ScalingUtility::new(metrics, notifier).expect("fixture metrics are valid")
}

#[test]
fn iphone_x_snapshot() {
    let shown = Shown::default();
    let u = load(include_bytes!("fixtures/iphone-x.json"), &shown);

    assert_eq!(u.platform(), Platform::Ios);
    assert!(u.is_iphone_x_like_device());
    assert_eq!(u.scale_by_width(100.0), 100.0);
    assert!((u.scale_by_height(667.0) - 812.0).abs() < 1e-9);
    // Width is the smaller axis factor here.
    assert_eq!(u.scale_font_size(14.0, false), 14.0);

    u.show_notification("welcome").unwrap();
    assert_eq!(*shown.borrow(), vec![("toast", "welcome".to_string())]);
}

#[test]
fn android_tablet_snapshot() {
    let shown = Shown::default();
    let u = load(include_bytes!("fixtures/pixel-tablet.json"), &shown);

    assert!(!u.is_iphone_x_like_device());
    let factors = u.scale_factors();
    assert_eq!(factors.scale_x, 800.0 / 375.0);
    assert_eq!(factors.scale_y, 1280.0 / 667.0);

    // min(2.133.., 1.919..) = scale_y, then the 1.3 OS text scale is divided out.
    let expected = 20.0 * (1280.0 / 667.0) / 1.3;
    assert!((u.scale_font_size(20.0, false) - expected).abs() < 1e-12);
    assert!(u.scale_font_size(20.0, true) > u.scale_font_size(20.0, false));

    u.show_notification("synced").unwrap();
    assert_eq!(*shown.borrow(), vec![("native", "synced".to_string())]);
}

#[test]
fn reference_device_leaves_design_sizes_alone() {
    let shown = Shown::default();
    let u = load(include_bytes!("fixtures/iphone-se.json"), &shown);

    assert_eq!(u.metrics().font_scale, 1.0);
    assert_eq!(u.scale_by_width(44.0), 44.0);
    assert_eq!(u.scale_by_height(44.0), 44.0);
    assert_eq!(u.scale_font_size(17.0, false), 17.0);
}

#[test]
fn image_thumbnail_fits_inside_scaled_box() {
    let shown = Shown::default();
    let u = load(include_bytes!("fixtures/pixel-tablet.json"), &shown);

    let max_w = u.scale_by_width(300.0);
    let max_h = u.scale_by_height(200.0);
    let fitted = u.fit_image(max_w, max_h, 4032.0, 3024.0).unwrap();

    assert!(fitted.width <= max_w + 1e-9);
    assert!(fitted.height <= max_h + 1e-9);
    assert!((fitted.aspect_ratio() - 4032.0 / 3024.0).abs() < 1e-9);

    let small = u.fit_image(max_w, max_h, 64.0, 64.0).unwrap();
    assert_eq!(small, ImageBox::new(64.0, 64.0));
}

#[test]
fn formatting_and_ids_work_through_the_utility() {
    let shown = Shown::default();
    let u = load(include_bytes!("fixtures/iphone-se.json"), &shown);

    let stamp = u
        .format_timestamp(&TimeFormatOptions::default().with_date_separator("/"))
        .unwrap();
    assert_eq!(stamp.formatted.matches('/').count(), 2);

    let a = u.generate_uuid();
    let b = u.generate_uuid();
    assert_ne!(a, b);
    assert_eq!(&a[14..15], "4");

    assert_eq!(u.transform_remote_image_url("http://x", 0), "http://x");
}
