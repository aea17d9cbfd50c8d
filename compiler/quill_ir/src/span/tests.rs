use super::*;

#[test]
fn test_span_to_range() {
    let span = Span::new(10, 20);
    assert_eq!(span.to_range(), 10..20);
    assert_eq!(Span::default().to_range(), 0..0);
}

#[test]
fn test_try_from_range_ok() {
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_try_from_range_too_large() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(too_big..too_big),
        Err(SpanError::StartTooLarge(too_big))
    );
}

#[test]
fn test_debug_and_display() {
    let span = Span::new(1, 4);
    assert_eq!(format!("{span:?}"), "1..4");
    assert_eq!(span.to_string(), "1..4");
}
