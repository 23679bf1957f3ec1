use tinyweb::http::response::{NOT_FOUND_MESSAGE, ResponseHead, STATUS_LINE};

#[test]
fn test_status_line_is_fixed() {
    assert_eq!(STATUS_LINE, "HTTP/1.1 200 OK");
}

#[test]
fn test_head_bytes_exact() {
    let head = ResponseHead::new("image/png", 4096);

    assert_eq!(
        String::from_utf8(head.to_bytes()).unwrap(),
        "HTTP/1.1 200 OK\r\n\
         Content-Type: image/png\r\n\
         Content-Length: 4096\r\n\
         Connection: close\r\n\
         \r\n"
    );
}

#[test]
fn test_head_zero_length() {
    let head = ResponseHead::new("text/plain", 0).to_bytes();

    assert!(head.ends_with(b"Content-Length: 0\r\nConnection: close\r\n\r\n"));
}

#[test]
fn test_not_found_head() {
    let head = ResponseHead::not_found();

    assert_eq!(head.content_type, "text/plain");
    assert_eq!(head.content_length, 15);
    assert_eq!(NOT_FOUND_MESSAGE, b"File not found\n");
    assert_eq!(head.content_length, NOT_FOUND_MESSAGE.len() as u64);
}
