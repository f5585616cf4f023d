use bytes::Bytes;

use resona::domain::{MediaItem, MediaSource, DEFAULT_AUDIO_MIME};

#[test]
fn given_bytes_when_constructing_then_mime_and_payload_are_kept() {
    let item = MediaItem::from_bytes("audio/wav", Bytes::from_static(b"RIFF"));

    assert_eq!(item.mime_type, "audio/wav");
    assert_eq!(item.source, MediaSource::Bytes(Bytes::from_static(b"RIFF")));
}

#[test]
fn given_url_when_constructing_then_source_stays_lazy() {
    let item = MediaItem::from_url("audio/ogg", "http://example.com/clip.ogg");

    assert_eq!(item.mime_type, "audio/ogg");
    assert_eq!(
        item.source,
        MediaSource::Url("http://example.com/clip.ogg".to_string())
    );
}

#[test]
fn given_default_mime_then_it_is_mp3() {
    assert_eq!(DEFAULT_AUDIO_MIME, "audio/mp3");
}
