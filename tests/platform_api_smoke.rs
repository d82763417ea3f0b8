use wallstudio::platform::{detect, DownloadSurface, MemorySurface, ScreenMetrics, StaticScreen};
use wallstudio::{CardCatalog, Resolution, DETECTED_ID};

#[test]
fn platform_smoke() {
    // device
    let screen = StaticScreen::new(ScreenMetrics {
        width: 820.0,
        height: 1180.0,
        dpr: 2.0,
        user_agent: "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)".into(),
    });
    let device = detect(&screen);
    assert_eq!(device.label, "iPad");
    assert_eq!(device.resolution, Resolution::new(1640, 2360));

    let catalog = CardCatalog::with_detection(&device);
    assert_eq!(catalog.get(DETECTED_ID).unwrap().name, "iPad");

    // download
    let surface = MemorySurface::new();
    let receipt = surface.deliver("wallpaper-1640x2360.png", b"\x89PNG").unwrap();
    assert_eq!(receipt.bytes, 4);
    assert_eq!(surface.files().len(), 1);
}
