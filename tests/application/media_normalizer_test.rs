use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;

use resona::application::services::{
    determine_audio_mime_type, validate_audio_content_type, AnalysisError, Base64Audio,
    UploadedAudio,
};
use resona::domain::{MediaSource, DEFAULT_AUDIO_MIME};

use crate::helpers::{spawn_audio_server, test_normalizer};

fn normalizer_in(dir: &tempfile::TempDir) -> resona::application::services::MediaNormalizer {
    test_normalizer(dir.path().to_path_buf())
}

#[test]
fn given_wav_content_types_when_classifying_then_maps_to_wav() {
    assert_eq!(determine_audio_mime_type(Some("audio/wav")), "audio/wav");
    assert_eq!(determine_audio_mime_type(Some("audio/x-wav")), "audio/wav");
    assert_eq!(determine_audio_mime_type(Some("Audio/WAV")), "audio/wav");
}

#[test]
fn given_other_content_types_when_classifying_then_falls_back_to_mp3() {
    assert_eq!(determine_audio_mime_type(Some("audio/mpeg")), "audio/mp3");
    assert_eq!(determine_audio_mime_type(Some("audio/ogg")), "audio/mp3");
    assert_eq!(
        determine_audio_mime_type(Some("application/octet-stream")),
        "audio/mp3"
    );
    assert_eq!(determine_audio_mime_type(None), DEFAULT_AUDIO_MIME);
}

#[test]
fn given_audio_content_type_when_validating_then_kept_verbatim() {
    let mime = validate_audio_content_type(Some("audio/flac"), "http://x/clip").unwrap();
    assert_eq!(mime, "audio/flac");
}

#[test]
fn given_non_audio_content_type_when_validating_then_invalid_mime_type() {
    let result = validate_audio_content_type(Some("text/html"), "http://x/clip");
    assert!(matches!(
        result,
        Err(AnalysisError::InvalidMimeType { .. })
    ));

    let result = validate_audio_content_type(None, "http://x/clip");
    assert!(matches!(
        result,
        Err(AnalysisError::InvalidMimeType { .. })
    ));
}

#[test]
fn given_bytes_when_base64_round_trip_then_identical() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    let original: Vec<u8> = (0u8..=255).collect();
    let items = vec![Base64Audio {
        mime_type: "audio/wav".to_string(),
        data: BASE64.encode(&original),
    }];

    let media = normalizer.from_base64(items).unwrap();
    assert_eq!(media[0].mime_type, "audio/wav");
    match &media[0].source {
        MediaSource::Bytes(b) => assert_eq!(b.as_ref(), original.as_slice()),
        other => panic!("expected in-memory bytes, got {:?}", other),
    }
}

#[test]
fn given_corrupted_base64_when_decoding_then_decode_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    let mut encoded = BASE64.encode(b"some-audio-bytes");
    // Flip one character to something outside the alphabet.
    encoded.replace_range(0..1, "!");

    let result = normalizer.from_base64(vec![Base64Audio {
        mime_type: "audio/mp3".to_string(),
        data: encoded,
    }]);

    assert!(matches!(result, Err(AnalysisError::DecodeFailed(_))));
}

#[test]
fn given_blank_mime_or_data_when_decoding_then_invalid_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    let result = normalizer.from_base64(vec![Base64Audio {
        mime_type: "  ".to_string(),
        data: "YXVkaW8=".to_string(),
    }]);
    assert!(matches!(result, Err(AnalysisError::InvalidInput)));

    let result = normalizer.from_base64(vec![Base64Audio {
        mime_type: "audio/mp3".to_string(),
        data: "".to_string(),
    }]);
    assert!(matches!(result, Err(AnalysisError::InvalidInput)));
}

#[test]
fn given_empty_base64_list_when_normalizing_then_empty_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    let result = normalizer.from_base64(Vec::new());
    assert!(matches!(result, Err(AnalysisError::EmptyInput(_))));
}

#[test]
fn given_uploads_with_zero_length_entries_when_normalizing_then_filtered_out() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    let files = vec![
        UploadedAudio {
            content_type: Some("audio/wav".to_string()),
            data: Bytes::from_static(b""),
        },
        UploadedAudio {
            content_type: Some("audio/wav".to_string()),
            data: Bytes::from_static(b"RIFF"),
        },
    ];

    let media = normalizer.from_uploads(files).unwrap();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].mime_type, "audio/wav");
}

#[test]
fn given_only_zero_length_uploads_when_normalizing_then_empty_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    let files = vec![UploadedAudio {
        content_type: None,
        data: Bytes::new(),
    }];

    let result = normalizer.from_uploads(files);
    assert!(matches!(result, Err(AnalysisError::EmptyInput(_))));
}

#[tokio::test]
async fn given_blank_bundled_name_when_normalizing_then_empty_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    let result = normalizer.from_bundled("   ").await;
    assert!(matches!(result, Err(AnalysisError::EmptyInput(_))));
}

#[tokio::test]
async fn given_present_bundled_file_when_normalizing_then_default_mime() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("clip.mp3"), b"mp3-bytes").unwrap();
    let normalizer = normalizer_in(&dir);

    let item = normalizer.from_bundled("clip.mp3").await.unwrap();
    assert_eq!(item.mime_type, DEFAULT_AUDIO_MIME);
    assert_eq!(item.source, MediaSource::Bytes(Bytes::from_static(b"mp3-bytes")));
}

#[tokio::test]
async fn given_empty_url_list_when_normalizing_then_empty_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    let result = normalizer.from_urls(&[]).await;
    assert!(matches!(result, Err(AnalysisError::EmptyInput(_))));
}

#[tokio::test]
async fn given_audio_url_when_normalizing_then_lazy_item_with_exact_mime() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);
    let url = spawn_audio_server("audio/flac", b"flac-bytes").await;

    let media = normalizer.from_urls(&[url.clone()]).await.unwrap();
    assert_eq!(media[0].mime_type, "audio/flac");
    assert_eq!(media[0].source, MediaSource::Url(url));
}

#[tokio::test]
async fn given_non_audio_url_when_normalizing_then_invalid_mime_type() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);
    let url = spawn_audio_server("application/json", b"{}").await;

    let result = normalizer.from_urls(&[url]).await;
    assert!(matches!(
        result,
        Err(AnalysisError::InvalidMimeType { .. })
    ));
}

#[tokio::test]
async fn given_unreachable_url_when_normalizing_then_fetch_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = normalizer_in(&dir);

    // Bind then drop to find a port with nothing listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{}/clip", addr);
    let result = normalizer.from_urls(&[url.clone()]).await;

    match result {
        Err(AnalysisError::FetchFailed { url: failed, .. }) => assert_eq!(failed, url),
        Err(other) => panic!("expected FetchFailed, got {:?}", other),
        Ok(_) => panic!("expected FetchFailed, got media items"),
    }
}
