//! Response Tests
//!
//! Tests for parsing (and building) gateway ACK/NAK responses, including
//! the order in which malformed frames are rejected.

use mbus_ascii::protocol::{
    compute_checksum, encode_response, parse_response, parse_response_with, AckResult,
    ErrorCode, Field, NakResult, Response, ACK, ETX, NAK,
};
use mbus_ascii::{DigitPolicy, MbusAsciiError};

/// Hand-build an ACK frame, appending the checksum when `pid == 1`
fn ack_frame(tid: u8, pid: u8, adr: u8, value: &[u8]) -> Vec<u8> {
    let mut frame = vec![ACK];
    frame.extend_from_slice(format!("{:02}{:02}{:02}", tid, pid, adr).as_bytes());
    frame.extend_from_slice(value);
    if pid == 1 {
        let sum = compute_checksum(&frame[1..]);
        frame.extend_from_slice(format!("{:02X}", sum).as_bytes());
    }
    frame.push(ETX);
    frame
}

// =============================================================================
// ACK Tests
// =============================================================================

#[test]
fn test_ack_without_checksum() {
    let bytes = [0x06, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x32, 0x32, 0x2E, 0x33, 0x03];
    let response = parse_response(&bytes).unwrap();

    assert_eq!(
        response,
        Response::Ack(AckResult {
            tid: 1,
            pid: 0,
            adr: 0,
            value: "22.3".to_string(),
        })
    );
    assert!(response.is_ack());
    assert!(!response.checksum_included());
}

#[test]
fn test_ack_with_checksum() {
    let bytes = [
        0x06, 0x30, 0x32, 0x30, 0x31, 0x30, 0x30, 0x32, 0x32, 0x2E, 0x33, 0x45, 0x38, 0x03,
    ];
    let response = parse_response(&bytes).unwrap();

    assert_eq!(response, Response::ack(2, 1, 0, "22.3"));
    assert!(response.checksum_included());
}

#[test]
fn test_ack_recovers_header_fields() {
    for tid in 0..=99u8 {
        for pid in 0..=99u8 {
            for adr in 0..=99u8 {
                let response = Response::ack(tid, pid, adr, "1234.5");
                let frame = encode_response(&response).unwrap();
                let decoded = parse_response(&frame).unwrap();

                assert_eq!((decoded.tid(), decoded.pid(), decoded.adr()), (tid, pid, adr));
            }
        }
    }
}

#[test]
fn test_hand_built_ack_recovers_header_fields() {
    for (tid, pid, adr) in [(0, 0, 0), (9, 0, 10), (99, 1, 99), (13, 37, 42)] {
        let frame = ack_frame(tid, pid, adr, b"1234.5");
        assert_eq!(parse_response(&frame).unwrap(), Response::ack(tid, pid, adr, "1234.5"));
    }
}

#[test]
fn test_ack_pid_two_means_no_checksum() {
    // The last two payload bytes are value, not a checksum
    let frame = ack_frame(0, 2, 0, b"AB");
    assert_eq!(parse_response(&frame).unwrap(), Response::ack(0, 2, 0, "AB"));
}

#[test]
fn test_ack_minimum_checksum_frame_has_empty_value() {
    let frame = ack_frame(0, 1, 0, b"");
    assert_eq!(frame.len(), 10);
    assert_eq!(parse_response(&frame).unwrap(), Response::ack(0, 1, 0, ""));
}

#[test]
fn test_ack_value_bytes_map_to_chars() {
    let frame = ack_frame(0, 0, 0, &[b'2', b'1', 0xB0]);
    assert_eq!(parse_response(&frame).unwrap(), Response::ack(0, 0, 0, "21\u{B0}"));
}

// =============================================================================
// NAK Tests
// =============================================================================

#[test]
fn test_nak_unknown_item() {
    let bytes = [0x15, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x49, 0x03];
    let response = parse_response(&bytes).unwrap();

    match response {
        Response::Nak(nak) => {
            assert_eq!(nak.code, 0x49);
            assert_eq!(nak.description, "Unknown item ID");
            assert_eq!(nak.error_code(), ErrorCode::UnknownItem);
        }
        _ => panic!("Expected NAK response"),
    }
}

#[test]
fn test_nak_with_checksum() {
    // "050100I" sums to 0x6F
    let bytes = [0x15, b'0', b'5', b'0', b'1', b'0', b'0', b'I', b'6', b'F', 0x03];
    let response = parse_response(&bytes).unwrap();

    assert_eq!(response, Response::Nak(NakResult::new(5, 1, 0, b'I')));
}

#[test]
fn test_nak_every_documented_code() {
    let table = [
        (b'C', "Checksum fault"),
        (b'D', "Invalid data type; expected a string-typed value"),
        (b'I', "Unknown item ID"),
        (b'M', "Timeout on the hub's master port"),
        (b'O', "Too many read items"),
        (b'T', "Timeout on the hub's slave port"),
        (b'V', "Validation: write value out of range"),
        (b'X', "Internal: wrong multi-drop address"),
    ];

    for (code, description) in table {
        let bytes = [NAK, b'0', b'0', b'0', b'0', b'0', b'0', code, ETX];
        match parse_response(&bytes).unwrap() {
            Response::Nak(nak) => assert_eq!(nak.description, description),
            _ => panic!("Expected NAK response"),
        }
    }
}

#[test]
fn test_nak_unknown_code_is_not_an_error() {
    let bytes = [NAK, b'0', b'0', b'0', b'0', b'0', b'0', b'Q', ETX];
    match parse_response(&bytes).unwrap() {
        Response::Nak(nak) => {
            assert_eq!(nak.code, b'Q');
            assert_eq!(nak.description, "Unknown error code");
        }
        _ => panic!("Expected NAK response"),
    }
}

#[test]
fn test_nak_payload_must_be_one_byte() {
    let bytes = [NAK, b'0', b'0', b'0', b'0', b'0', b'0', b'I', b'X', ETX];
    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::InvalidNakPayload(2)
    );

    let bytes = [NAK, b'0', b'0', b'0', b'0', b'0', b'0', ETX];
    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::InvalidNakPayload(0)
    );
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_too_short() {
    let bytes = [0x06, 0x30, 0x31, 0x30, 0x30, 0x30, 0x03];
    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::TooShort {
            expected: 8,
            actual: 7,
        }
    );
    assert!(matches!(
        parse_response(&[]),
        Err(MbusAsciiError::TooShort { actual: 0, .. })
    ));
}

#[test]
fn test_unknown_sentinel() {
    let bytes = [0x02, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x32, 0x03];
    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::UnknownSentinel(0x02)
    );
}

#[test]
fn test_missing_terminator() {
    let bytes = [0x06, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x32, 0x32];
    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::MissingTerminator(0x32)
    );
}

#[test]
fn test_too_short_for_checksum() {
    let bytes = [ACK, b'0', b'0', b'0', b'1', b'0', b'0', b'x', ETX];
    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::TooShortForChecksum {
            expected: 10,
            actual: 9,
        }
    );
}

#[test]
fn test_checksum_mismatch() {
    // Same as the documented frame but with trailer "E9"
    let bytes = [
        0x06, 0x30, 0x32, 0x30, 0x31, 0x30, 0x30, 0x32, 0x32, 0x2E, 0x33, 0x45, 0x39, 0x03,
    ];
    let err = parse_response(&bytes).unwrap_err();

    assert_eq!(
        err,
        MbusAsciiError::ChecksumMismatch {
            computed: 0xE8,
            found: "E9".to_string(),
        }
    );
    assert!(err.to_string().contains("Invalid checksum"));
}

#[test]
fn test_corrupted_value_fails_checksum() {
    let mut frame = ack_frame(3, 1, 4, b"22.3");
    frame[8] ^= 0x01;
    assert!(matches!(
        parse_response(&frame),
        Err(MbusAsciiError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_malformed_digits_rejected_by_default() {
    let frame = ack_frame(0, 0, 0, b"5");
    let mut bytes = frame.clone();
    bytes[2] = b':';

    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::MalformedDigits {
            field: Field::Tid,
            bytes: [b'0', b':'],
        }
    );
}

#[test]
fn test_lenient_digits_decode_arithmetically() {
    let mut bytes = ack_frame(0, 0, 0, b"5");
    bytes[2] = b':';

    let response = parse_response_with(&bytes, DigitPolicy::Lenient).unwrap();
    assert_eq!(response, Response::ack(10, 0, 0, "5"));
}

// =============================================================================
// Check Order Tests
// =============================================================================

#[test]
fn test_length_checked_before_sentinel() {
    let bytes = [0xFF, 0x00, 0x00];
    assert!(matches!(
        parse_response(&bytes),
        Err(MbusAsciiError::TooShort { .. })
    ));
}

#[test]
fn test_sentinel_checked_before_terminator() {
    let bytes = [0xFF, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0xFF];
    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::UnknownSentinel(0xFF)
    );
}

#[test]
fn test_terminator_checked_before_digits() {
    let bytes = [ACK, b'A', b'B', b'0', b'0', b'0', b'0', b'1', 0x00];
    assert_eq!(
        parse_response(&bytes).unwrap_err(),
        MbusAsciiError::MissingTerminator(0x00)
    );
}

#[test]
fn test_digits_checked_before_checksum() {
    let mut bytes = ack_frame(0, 1, 0, b"22.3");
    bytes[5] = b'Z';
    assert!(matches!(
        parse_response(&bytes),
        Err(MbusAsciiError::MalformedDigits { field: Field::Adr, .. })
    ));
}

#[test]
fn test_checksum_checked_before_nak_payload() {
    let bytes = [NAK, b'0', b'0', b'0', b'1', b'0', b'0', b'I', b'X', b'0', b'0', ETX];
    assert!(matches!(
        parse_response(&bytes),
        Err(MbusAsciiError::ChecksumMismatch { .. })
    ));
}

// =============================================================================
// Response Encoding Tests
// =============================================================================

#[test]
fn test_encode_response_matches_documented_frame() {
    let frame = encode_response(&Response::ack(2, 1, 0, "22.3")).unwrap();
    assert_eq!(
        frame,
        vec![0x06, 0x30, 0x32, 0x30, 0x31, 0x30, 0x30, 0x32, 0x32, 0x2E, 0x33, 0x45, 0x38, 0x03]
    );
}

#[test]
fn test_encode_then_parse_nak() {
    let response = Response::nak(11, 1, 22, b'T');
    let frame = encode_response(&response).unwrap();
    assert_eq!(parse_response(&frame).unwrap(), response);
}

#[test]
fn test_encode_response_rejects_non_ascii_nak_code() {
    let result = encode_response(&Response::nak(0, 0, 0, 0xB0));
    assert!(matches!(result, Err(MbusAsciiError::Encoding(_))));
    assert!(result.unwrap_err().to_string().contains("NAK code"));
}

#[test]
fn test_encode_response_rejects_non_ascii_value() {
    let result = encode_response(&Response::ack(0, 0, 0, "21°"));
    assert!(matches!(result, Err(MbusAsciiError::Encoding(_))));
}
