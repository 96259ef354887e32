use signcam_camera::CaptureError;
use std::io;

#[test]
fn test_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "recording not found");
    let err: CaptureError = io_err.into();

    match err {
        CaptureError::Io(msg) => assert!(msg.contains("recording not found")),
        _ => panic!("Expected CaptureError::Io variant"),
    }
}

#[test]
fn test_error_display() {
    let device_err = CaptureError::Device("OV7675 timeout".to_string());
    assert!(device_err.to_string().contains("OV7675 timeout"));

    let format_err = CaptureError::Format("odd length".to_string());
    assert!(format_err.to_string().contains("odd length"));

    assert_eq!(CaptureError::Exhausted.to_string(), "no frames left in source");
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(CaptureError::Exhausted);
    assert!(err.source().is_none());
}
