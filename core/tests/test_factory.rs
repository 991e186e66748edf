#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{mpsc, OnceLock};
    use std::thread;
    use std::time::Duration;

    use zstd_session::{
        compression::{create_codec, Codec, CodecError, CodecOptions},
        config::ServiceConfig,
        session::SessionRegistry,
        types::{ErrorKind, SessionError},
    };

    fn refusing_factory(_: CodecOptions) -> Result<Box<dyn Codec>, CodecError> {
        Err(CodecError::CodecInitFailed { codec: "zstd".into(), msg: "refused".into() })
    }

    static LIVE_CODECS: AtomicUsize = AtomicUsize::new(0);

    /// Pass-through codec that tracks how many instances are alive.
    struct CountedCodec;

    impl CountedCodec {
        fn new() -> Self {
            LIVE_CODECS.fetch_add(1, Ordering::SeqCst);
            CountedCodec
        }
    }

    impl Drop for CountedCodec {
        fn drop(&mut self) {
            LIVE_CODECS.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl Codec for CountedCodec {
        fn compress(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
            Ok(input.to_vec())
        }

        fn decompress(&mut self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
            Ok(input.to_vec())
        }
    }

    fn counted_factory(_: CodecOptions) -> Result<Box<dyn Codec>, CodecError> {
        Ok(Box::new(CountedCodec::new()))
    }

    static SHARED: OnceLock<SessionRegistry> = OnceLock::new();
    static LOOKUP_BLOCKED: AtomicBool = AtomicBool::new(false);

    /// Reads the shared registry from another thread while building the codec.
    fn lookup_factory(options: CodecOptions) -> Result<Box<dyn Codec>, CodecError> {
        if let Some(registry) = SHARED.get() {
            let registry = registry.clone();
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                let _ = tx.send(registry.len());
            });
            if rx.recv_timeout(Duration::from_secs(2)).is_err() {
                LOOKUP_BLOCKED.store(true, Ordering::SeqCst);
            }
        }
        create_codec(options)
    }

    #[test]
    fn codec_failure_leaves_no_entry() {
        let registry = SessionRegistry::with_codec_factory(ServiceConfig::default(), refusing_factory).unwrap();

        let err = registry.create(Some("doomed"), 3, 22).unwrap_err();
        assert!(matches!(err, SessionError::CodecFailure(CodecError::CodecInitFailed { .. })));
        assert_eq!(err.kind(), ErrorKind::Codec);
        assert!(!registry.contains("doomed"));

        assert!(registry.create(None, 3, 22).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn codecs_live_only_as_long_as_their_session() {
        let registry = SessionRegistry::with_codec_factory(ServiceConfig::default(), counted_factory).unwrap();

        let session = registry.create(Some("counted"), 3, 22).unwrap();
        assert_eq!(LIVE_CODECS.load(Ordering::SeqCst), 1);

        assert!(matches!(
            registry.create(Some("counted"), 5, 22),
            Err(SessionError::DuplicateName(_))
        ));
        assert_eq!(LIVE_CODECS.load(Ordering::SeqCst), 1);

        assert_eq!(session.compress(b"abc").unwrap(), b"abc");
        assert_eq!(session.stats().unwrap().compression_ratio, 1.0);

        session.close().unwrap();
        assert_eq!(LIVE_CODECS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn registry_stays_readable_while_a_codec_is_built() {
        let registry = SHARED.get_or_init(|| {
            SessionRegistry::with_codec_factory(ServiceConfig::default(), lookup_factory).unwrap()
        });

        registry.create(Some("first"), 3, 22).unwrap();
        registry.create(None, 3, 22).unwrap();

        assert!(!LOOKUP_BLOCKED.load(Ordering::SeqCst));
        assert_eq!(registry.len(), 2);
    }
}
