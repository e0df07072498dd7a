//! Concurrency Tests
//!
//! The codec holds no state, so many threads can encode and decode at once.

use mbus_ascii::protocol::{build_request, encode_response, parse_request, parse_response, Response};

#[test]
fn test_concurrent_encode_decode() {
    crossbeam::thread::scope(|s| {
        for thread_id in 0..8u8 {
            s.spawn(move |_| {
                for i in 0..100u8 {
                    let tid = (thread_id * 10 + i) % 100;
                    let pid = i % 2;
                    let item = format!("Gateway.Meter{}.Temperature", thread_id);

                    let frame = build_request(tid, pid, i % 100, &item).unwrap();
                    let request = parse_request(&frame).unwrap();
                    assert_eq!(request.tid, tid);
                    assert_eq!(request.item, item);

                    let value = format!("{}.{}", thread_id, i);
                    let response = Response::ack(tid, pid, i % 100, value);
                    let frame = encode_response(&response).unwrap();
                    assert_eq!(parse_response(&frame).unwrap(), response);
                }
            });
        }
    })
    .unwrap();
}
