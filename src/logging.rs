//! tracing 기반 로깅 초기화.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 전역 로깅 구독자를 설치한다.
///
/// `RUST_LOG`가 있으면 우선하고, 없으면 설정의 레벨(`info`, `debug` 등)을 쓴다.
/// 이미 설치된 경우에는 조용히 무시한다.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr),
    );
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_ignored() {
        init_logging("debug");
        init_logging("not a valid filter [");
        tracing::debug!("still alive");
    }
}
