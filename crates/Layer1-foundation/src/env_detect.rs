//! Environment Detection - 터미널/OS 환경 자동 감지
//!
//! LLM이 올바른 명령어를 생성하도록 환경 정보를 제공합니다.

/// 운영체제 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsType {
    Windows,
    MacOS,
    Linux,
    Unknown,
}

impl OsType {
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Unknown
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOS => "macOS",
            Self::Linux => "Linux",
            Self::Unknown => "Unknown",
        }
    }

    /// 실행 전략 및 프롬프트 힌트에 사용하는 2분류
    pub fn family(&self) -> PlatformFamily {
        match self {
            Self::Windows => PlatformFamily::Windows,
            // macOS/BSD included - everything non-Windows behaves Unix-like
            _ => PlatformFamily::Linux,
        }
    }
}

/// Two-valued platform classification used for prompt hints and to choose
/// between batch-script and sequential execution modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Windows,
    Linux,
}

impl PlatformFamily {
    /// Detect the current platform family
    pub fn detect() -> Self {
        OsType::detect().family()
    }

    /// Name embedded in the model prompt
    pub fn name(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}
