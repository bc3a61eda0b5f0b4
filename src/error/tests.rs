use super::*;

#[test]
fn test_error_display() {
    let err = SeamError::new(ErrorKind::Io, "IO_ERROR", "file vanished");
    assert_eq!(err.to_string(), "[ERROR] IO(IO_ERROR): file vanished");
}

#[test]
fn test_critical_severity() {
    let err = SeamError::critical(ErrorKind::Terminal, "TERMINAL_TOO_SMALL", "16x2 required");
    assert_eq!(err.severity, ErrorSeverity::Critical);
    assert!(err.to_string().starts_with("[CRITICAL]"));
}

#[test]
fn test_severity_ordering() {
    assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
    assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
}

#[test]
fn test_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: SeamError = io_err.into();
    assert_eq!(err.kind, ErrorKind::Io);
    assert!(err.contains_msg("missing"));
}

#[test]
fn test_from_string() {
    let err: SeamError = String::from("something odd").into();
    assert_eq!(err.kind, ErrorKind::Other);
    assert_eq!(err.severity, ErrorSeverity::Error);
}
