//! 외부에서 설정한 공유 키로 화면 접근을 막는다.
//!
//! 키는 설정 파일에 저장하지 않고 `AccessConfig::key_env`가 가리키는 환경변수에서만 읽는다.
//! 환경변수가 없거나 비어 있으면 게이트를 열어 둔다.

use crate::config::AccessConfig;

/// 접근 게이트 상태.
#[derive(Clone)]
pub struct AccessGate {
    expected: Option<Vec<u8>>,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("required", &self.is_required())
            .finish()
    }
}

impl AccessGate {
    /// 설정에 지정된 환경변수에서 키를 읽는다.
    pub fn from_config(cfg: &AccessConfig) -> Self {
        let key = std::env::var(&cfg.key_env).ok();
        Self::with_key(key.as_deref())
    }

    pub fn with_key(key: Option<&str>) -> Self {
        let expected = key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| k.as_bytes().to_vec());
        Self { expected }
    }

    pub fn is_required(&self) -> bool {
        self.expected.is_some()
    }

    /// 입력한 키가 맞는지 확인한다. 게이트가 열려 있으면 항상 true.
    pub fn verify(&self, candidate: &str) -> bool {
        match &self.expected {
            None => true,
            Some(expected) => {
                let ok = constant_time_eq(expected, candidate.trim().as_bytes());
                if !ok {
                    tracing::warn!("접근 키 불일치");
                }
                ok
            }
        }
    }
}

/// 길이가 같으면 내용과 무관하게 모든 바이트를 비교한다.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_without_key() {
        let gate = AccessGate::with_key(None);
        assert!(!gate.is_required());
        assert!(gate.verify(""));
        assert!(!AccessGate::with_key(Some("   ")).is_required());
    }

    #[test]
    fn checks_configured_key() {
        let gate = AccessGate::with_key(Some("rotated-secret"));
        assert!(gate.is_required());
        assert!(gate.verify("rotated-secret"));
        assert!(gate.verify(" rotated-secret\n"));
        assert!(!gate.verify("rotated-secreT"));
        assert!(!gate.verify("rotated"));
    }

    #[test]
    fn debug_does_not_leak_key() {
        let gate = AccessGate::with_key(Some("hunter2"));
        assert!(!format!("{gate:?}").contains("hunter2"));
    }
}
