use serde::{Deserialize, Serialize};

/// Ranked most severe first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Weakness classes the guarded operations protect against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Hazard {
    OutOfBoundsRead,
    IntegerOverflow,
    DivideByZero,
}

struct HazardInfo {
    cwe: &'static str,
    name: &'static str,
    severity: Severity,
}

static OUT_OF_BOUNDS_READ: HazardInfo = HazardInfo {
    cwe: "CWE-125",
    name: "Out-of-bounds Read",
    severity: Severity::High,
};

static INTEGER_OVERFLOW: HazardInfo = HazardInfo {
    cwe: "CWE-190",
    name: "Integer Overflow",
    severity: Severity::Medium,
};

static DIVIDE_BY_ZERO: HazardInfo = HazardInfo {
    cwe: "CWE-369",
    name: "Divide By Zero",
    severity: Severity::Medium,
};

impl Hazard {
    pub const ALL: [Hazard; 3] = [
        Hazard::OutOfBoundsRead,
        Hazard::IntegerOverflow,
        Hazard::DivideByZero,
    ];

    fn info(self) -> &'static HazardInfo {
        match self {
            Self::OutOfBoundsRead => &OUT_OF_BOUNDS_READ,
            Self::IntegerOverflow => &INTEGER_OVERFLOW,
            Self::DivideByZero => &DIVIDE_BY_ZERO,
        }
    }

    pub fn cwe(self) -> &'static str {
        self.info().cwe
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn severity(self) -> Severity {
        self.info().severity
    }
}

impl std::fmt::Display for Hazard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.cwe(), self.name())
    }
}
