//! Data Source Tests

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::domain::{DataSourceError, Photo, SourceResult};
    use crate::source::{load_photos, parse_photos, PhotoSource};

    /// In-memory source answering with a fixed body or status
    enum FakeSource {
        Body(&'static str),
        Status(u16),
    }

    #[async_trait]
    impl PhotoSource for FakeSource {
        async fn fetch_all(&self) -> SourceResult<Vec<Photo>> {
            match self {
                FakeSource::Body(body) => parse_photos(body.as_bytes()),
                FakeSource::Status(code) => Err(DataSourceError::Status(*code)),
            }
        }

        fn describe(&self) -> String {
            "fake".to_string()
        }
    }

    const SAMPLE: &str = r#"[
        {"id":1,"title":"A","thumbnailUrl":"u1"},
        {"id":2,"title":"B","thumbnailUrl":"u2"}
    ]"#;

    #[test]
    fn test_parse_sample_payload() {
        let photos = parse_photos(SAMPLE.as_bytes()).unwrap();
        assert_eq!(photos, vec![Photo::new(1, "A", "u1"), Photo::new(2, "B", "u2")]);
    }

    #[test]
    fn test_parse_keeps_extra_fields_and_order() {
        let body = br#"[
            {"albumId":1,"id":3,"title":"c","url":"https://x/3","thumbnailUrl":"t3"},
            {"albumId":1,"id":1,"title":"a","url":"https://x/1","thumbnailUrl":"t1"}
        ]"#;
        let photos = parse_photos(body).unwrap();
        assert_eq!(photos.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(photos[0].album_id, Some(1));
        assert_eq!(photos[0].url.as_deref(), Some("https://x/3"));
    }

    #[test]
    fn test_parse_tolerates_missing_title_and_thumbnail() {
        let photos = parse_photos(br#"[{"id":9}]"#).unwrap();
        assert_eq!(photos, vec![Photo::new(9, "", "")]);
    }

    #[test]
    fn test_parse_rejects_bad_bodies() {
        assert!(matches!(parse_photos(b"<html>502</html>"), Err(DataSourceError::Decode(_))));
        assert!(matches!(parse_photos(br#"{"id":1}"#), Err(DataSourceError::Decode(_))));
        assert!(matches!(parse_photos(br#"[{"title":"no id"}]"#), Err(DataSourceError::Decode(_))));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_photos(b"[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_photos_success() {
        let photos = load_photos(&FakeSource::Body(SAMPLE)).await.unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].title, "A");
    }

    #[tokio::test]
    async fn test_load_photos_passes_failure_through() {
        let err = load_photos(&FakeSource::Status(503)).await.unwrap_err();
        assert_eq!(err.to_string(), "unexpected status 503");

        let err = load_photos(&FakeSource::Body("not json")).await.unwrap_err();
        assert!(err.to_string().starts_with("invalid photo payload"));
    }
}
