use super::*;

#[test]
fn encode_then_decode_preserves_content() {
    let content = SiteContent::default();
    let decoded = decode_site_content(&encode_site_content(&content));
    assert_eq!(decoded, Some(content));
}

#[test]
fn encode_escapes_closing_tags() {
    let mut content = SiteContent::default();
    content.greeting = "</script><script>alert(1)</script>".to_owned();
    let encoded = encode_site_content(&content);
    assert!(!encoded.contains("</script>"));
    assert_eq!(decode_site_content(&encoded).map(|c| c.greeting), Some(content.greeting));
}

#[test]
fn decode_rejects_garbage() {
    assert_eq!(decode_site_content("{\"greeting\":1}"), None);
    assert_eq!(decode_site_content(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_embedded_content_is_none_outside_browser() {
    assert_eq!(read_embedded_content(), None);
}
