//! Pattern Catalog - 정적 패턴 테이블
//!
//! 도구 감지 가중치, 위험도 패턴, 대화형 쿼리 패턴을 한 곳에서 관리합니다.
//! 프로세스 시작 시 한 번 컴파일되어 읽기 전용으로 공유됩니다 (OnceLock).

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ============================================================
// 위험도 등급
// ============================================================

/// Command risk tier, totally ordered by severity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Read-only commands (ls, git status)
    Safe,
    /// Minor changes (git commit, mkdir)
    LowRisk,
    /// State modifications, generally recoverable (git push, docker stop)
    ModerateRisk,
    /// Potential data loss or system harm (rm -rf, chmod 777)
    Dangerous,
}

impl RiskTier {
    /// Severity rank used by safety-floor reconciliation
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Wire name ("safe", "low_risk", "moderate_risk", "dangerous")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::LowRisk => "low_risk",
            Self::ModerateRisk => "moderate_risk",
            Self::Dangerous => "dangerous",
        }
    }

    /// Parse a wire name; unknown strings map to None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "safe" => Some(Self::Safe),
            "low_risk" => Some(Self::LowRisk),
            "moderate_risk" => Some(Self::ModerateRisk),
            "dangerous" => Some(Self::Dangerous),
            _ => None,
        }
    }
}

// ============================================================
// 도구 식별자
// ============================================================

/// Closed set of tools the detector can identify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Git,
    Docker,
    NodeJs,
    Linux,
    Windows,
}

impl ToolId {
    /// Declared order - also the detector's tie-break priority
    pub const ALL: [ToolId; 5] = [
        ToolId::Git,
        ToolId::Docker,
        ToolId::NodeJs,
        ToolId::Linux,
        ToolId::Windows,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Docker => "docker",
            Self::NodeJs => "nodejs",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

// ============================================================
// 도구 가중치 테이블
// ============================================================

/// Keyword weights per tool (whole-word, case-insensitive matches)
fn keyword_weights(tool: ToolId) -> &'static [(&'static str, i32)] {
    match tool {
        ToolId::Git => &[
            ("git", 120),
            ("commit", 100),
            ("branch", 100),
            ("push", 100),
            ("pull", 100),
            ("merge", 100),
            ("clone", 100),
            ("repository", 90),
            ("repo", 90),
            ("checkout", 90),
            ("main", 80),
            ("master", 80),
            ("origin", 80),
            ("staged", 80),
            ("status", 70),
            ("log", 60),
            ("diff", 60),
            ("fetch", 60),
        ],
        ToolId::Docker => &[
            ("docker", 120),
            ("container", 110),
            ("image", 100),
            ("volume", 100),
            ("compose", 100),
            ("dockerfile", 100),
            ("registry", 90),
            ("hub", 80),
            ("build", 70),
            ("pull", 70),
            ("push", 70),
            ("run", 70),
            ("exec", 70),
            ("stop", 70),
            ("start", 70),
            ("restart", 70),
            ("remove", 70),
            ("ps", 70),
        ],
        ToolId::NodeJs => &[
            ("node", 120),
            ("npm", 120),
            ("yarn", 120),
            ("javascript", 100),
            ("js", 110),
            ("package.json", 110),
            ("package", 70),
            ("module", 70),
            ("server.js", 110),
            ("express", 90),
            ("react", 80),
            ("vue", 80),
            ("angular", 80),
            ("next", 80),
            ("start", 60),
            ("install", 70),
            ("dependency", 70),
            ("dev", 60),
        ],
        ToolId::Linux => &[
            ("ls", 70),
            ("cd", 70),
            ("mv", 70),
            ("cp", 70),
            ("rm", 70),
            ("mkdir", 70),
            ("touch", 70),
            ("chmod", 70),
            ("chown", 70),
            ("grep", 70),
            ("find", 70),
            ("cat", 70),
            ("echo", 70),
            ("sudo", 70),
            ("apt", 70),
            ("yum", 70),
            ("dnf", 70),
            ("bash", 80),
            ("shell", 80),
            ("terminal", 80),
            ("command", 60),
            ("linux", 80),
            ("file", 60),
            ("directory", 60),
            ("folder", 60),
            ("permission", 60),
        ],
        ToolId::Windows => &[
            ("cmd", 90),
            ("powershell", 90),
            ("batch", 80),
            ("dir", 80),
            ("del", 80),
            ("copy", 70),
            ("move", 70),
            ("ren", 70),
            ("type", 70),
            ("findstr", 70),
            ("windows", 90),
            ("exe", 70),
            ("bat", 70),
            ("taskkill", 80),
            ("tasklist", 80),
            ("reg", 80),
            ("netsh", 80),
            ("sfc", 80),
            ("dism", 80),
            ("wmic", 80),
        ],
    }
}

/// Filesystem-name substrings used as weak corroborating evidence
fn context_clues(tool: ToolId) -> &'static [&'static str] {
    match tool {
        ToolId::Git => &[".git", "git"],
        ToolId::Docker => &["docker", "Dockerfile", "docker-compose.yml"],
        ToolId::NodeJs => &["package.json", "node_modules", ".js", ".ts", ".jsx", ".tsx"],
        ToolId::Linux => &["/etc", "/var", "/home", "/usr", "/bin"],
        ToolId::Windows => &[".exe", ".bat", ".ps1", "C:\\", "Windows"],
    }
}

// ============================================================
// 위험도 패턴
// ============================================================

/// Ordered risk pattern sources, most severe first. The order here IS the
/// classification priority ("dangerous wins").
fn risk_pattern_sources() -> [(RiskTier, &'static [&'static str]); 3] {
    [
        (
            RiskTier::Dangerous,
            &[
                r"rm\s+-rf",
                r"rm\s+.*-f",
                r"rm\s+.*--force",
                r"dd\s+if=.*of=.*",
                r":\(\)\{.*\};:",
                r"chmod\s+777",
                r"chmod\s+.*a=rwx",
                r"sudo\s+.*rm",
                r"sudo\s+rm",
                r"mv\s+.*\s+/dev/null",
                r">\s+/dev/sda",
                r"mkfs",
                r"fdisk",
                r"drop\s+.*database",
                r"drop\s+.*table",
                r"format",
                r"del\s+.*\s+/s\s+/q",
                r"rd\s+.*\s+/s\s+/q",
                r"taskkill\s+.*\s+/f",
            ],
        ),
        (
            RiskTier::ModerateRisk,
            &[
                r"git\s+push",
                r"git\s+merge",
                r"git\s+rebase",
                r"docker\s+stop",
                r"docker\s+rm",
                r"docker\s+kill",
                r"docker\s+system\s+prune",
                r"npm\s+install\s+.*--global",
                r"pip\s+install",
                r"apt\s+.*remove",
                r"apt\s+.*purge",
                r"yum\s+.*remove",
                r"dnf\s+.*remove",
                r"mv\s+.*\s+.*",
                r"shutdown",
                r"reboot",
                r"systemctl\s+.*stop",
                r"systemctl\s+.*restart",
                r"kill",
                r"pkill",
            ],
        ),
        (
            RiskTier::LowRisk,
            &[
                r"git\s+commit",
                r"git\s+add",
                r"git\s+pull",
                r"docker\s+build",
                r"docker\s+pull",
                r"docker\s+run",
                r"npm\s+install\s+.*--save",
                r"npm\s+install\s+.*--save-dev",
                r"touch",
                r"mkdir",
                r"rmdir",
                r"cat\s+.*\s+>",
                r">\s+.*\.txt",
                r">\s+.*\.log",
            ],
        ),
    ]
}

/// General conversation patterns - matched queries never reach the model
fn general_query_sources() -> &'static [&'static str] {
    &[
        r"(?:how|what)\s+are\s+you",
        r"(?:who|what)\s+(?:are|is)\s+(?:you|this)",
        r"hello|hi|hey|greetings",
        r"(?:can|could)\s+you\s+(?:help|assist)",
        r"(?:tell|talk)\s+(?:me|us)\s+about\s+(?:yourself|you)",
        r"(?:what|how)\s+(?:do|can|could)\s+you\s+do",
        r"thanks|thank\s+you",
        r"bye|goodbye",
    ]
}

// ============================================================
// 컴파일된 카탈로그
// ============================================================

/// Compiled per-tool profile
pub struct ToolProfile {
    pub id: ToolId,
    /// Whole-word keyword matchers with their weights
    pub keywords: Vec<(Regex, i32)>,
    pub context_clues: &'static [&'static str],
}

/// One tier's ordered pattern list
pub struct RiskPattern {
    pub tier: RiskTier,
    pub patterns: Vec<Regex>,
}

/// Immutable pattern catalog, compiled once at first use
pub struct PatternCatalog {
    pub tools: Vec<ToolProfile>,
    /// Strict priority order: dangerous, moderate, low
    pub risk_patterns: Vec<RiskPattern>,
    pub general_queries: Vec<Regex>,
    /// `*.js`-like filename token in the query
    pub js_filename: Regex,
    /// "list/show/display ... container" phrasing
    pub container_listing: Regex,
}

static CATALOG: OnceLock<PatternCatalog> = OnceLock::new();

/// 전역 카탈로그 접근
pub fn catalog() -> &'static PatternCatalog {
    CATALOG.get_or_init(PatternCatalog::compile)
}

fn regex_ci(pattern: &str) -> Regex {
    // Static pattern tables - a failure here is a programming error caught
    // by the catalog tests, never reachable from user input
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid catalog pattern {pattern:?}: {e}"))
}

impl PatternCatalog {
    fn compile() -> Self {
        let tools = ToolId::ALL
            .iter()
            .map(|&id| ToolProfile {
                id,
                keywords: keyword_weights(id)
                    .iter()
                    .map(|&(keyword, weight)| {
                        let pattern = format!(r"\b{}\b", regex::escape(keyword));
                        (regex_ci(&pattern), weight)
                    })
                    .collect(),
                context_clues: context_clues(id),
            })
            .collect();

        let risk_patterns = risk_pattern_sources()
            .into_iter()
            .map(|(tier, sources)| RiskPattern {
                tier,
                patterns: sources.iter().map(|p| regex_ci(p)).collect(),
            })
            .collect();

        let general_queries = general_query_sources()
            .iter()
            .map(|p| regex_ci(p))
            .collect();

        Self {
            tools,
            risk_patterns,
            general_queries,
            js_filename: regex_ci(r"\b[\w-]+\.js\b"),
            container_listing: regex_ci(r"\b(list|show|display).*container"),
        }
    }

    /// 대화형 쿼리인지 확인 (명령 생성 대상이 아님)
    pub fn is_general_query(&self, query: &str) -> bool {
        self.general_queries.iter().any(|p| p.is_match(query))
    }
}
