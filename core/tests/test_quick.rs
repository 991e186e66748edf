#[cfg(test)]
mod tests {
    use zstd_session::{
        compression::{CodecError, LevelTier},
        config::ServiceConfig,
        constants::{DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL},
        service::ZstdService,
        types::{ErrorKind, ErrorReport, SessionError},
    };

    #[test]
    fn quick_empty_roundtrip() {
        let svc = ZstdService::default();
        let frame = svc.quick_compress(b"", 3).unwrap();
        assert!(svc.quick_decompress(&frame).unwrap().is_empty());
    }

    #[test]
    fn quick_roundtrip_every_tier() {
        let svc = ZstdService::default();
        let data = b"the quick brown fox jumps over the lazy dog ".repeat(64);
        for tier in [LevelTier::Fastest, LevelTier::Default, LevelTier::Better, LevelTier::Best, LevelTier::Ultra] {
            let frame = svc.quick_compress(&data, tier.level()).unwrap();
            assert!(frame.len() < data.len(), "{tier} did not shrink repetitive input");
            assert_eq!(svc.quick_decompress(&frame).unwrap(), data);
        }
    }

    #[test]
    fn quick_output_decodes_in_any_session() {
        let svc = ZstdService::default();
        let frame = svc.quick_compress(b"shared frame format", 6).unwrap();
        let session = svc.create_session(19, 30).unwrap();
        assert_eq!(session.decompress(&frame).unwrap(), b"shared frame format");
    }

    #[test]
    fn quick_compress_rejects_bad_level() {
        let svc = ZstdService::default();
        assert!(matches!(svc.quick_compress(b"x", 0), Err(SessionError::InvalidLevel(0))));
        assert!(matches!(svc.quick_compress(b"x", 23), Err(SessionError::InvalidLevel(23))));
    }

    #[test]
    fn quick_decompress_of_nothing_is_nothing() {
        let svc = ZstdService::default();
        assert!(svc.quick_decompress(b"").unwrap().is_empty());
    }

    #[test]
    fn quick_decompress_rejects_garbage() {
        let svc = ZstdService::default();
        let err = svc.quick_decompress(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]).unwrap_err();
        assert!(matches!(err, SessionError::DecompressionFailed(CodecError::CorruptData { .. })));

        let report = ErrorReport::from_error(&err);
        assert_eq!(report.kind, ErrorKind::Data);
        assert!(report.cause.is_some());
    }

    #[test]
    fn quick_decompress_honours_ceiling() {
        let svc = ZstdService::new(ServiceConfig::new(None, None, Some(100))).unwrap();
        let frame = svc.quick_compress(&[0u8; 101], 3).unwrap();
        assert!(matches!(
            svc.quick_decompress(&frame),
            Err(SessionError::DecompressionFailed(CodecError::OutputTooLarge { size: 101, limit: 100 }))
        ));
    }

    #[test]
    fn codec_info_reports_level_range() {
        let info = ZstdService::default().codec_info();
        assert_eq!(info.codec, "zstd");
        assert_eq!(info.min_level, MIN_LEVEL);
        assert_eq!(info.max_level, MAX_LEVEL);
        assert_eq!(info.default_level, DEFAULT_LEVEL);
        assert!(!info.version.is_empty());

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["maxLevel"], 22);
        assert_eq!(json["defaultLevel"], 3);
    }

    #[test]
    fn level_tier_names() {
        assert_eq!(LevelTier::describe(19), "Ultra");
        assert_eq!(LevelTier::describe(7), "level 7");
        assert_eq!(LevelTier::try_from(6).unwrap(), LevelTier::Better);
    }
}
