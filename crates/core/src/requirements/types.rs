use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RequirementPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for RequirementPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequirementPriority::Critical => write!(f, "Critical"),
            RequirementPriority::High => write!(f, "High"),
            RequirementPriority::Medium => write!(f, "Medium"),
            RequirementPriority::Low => write!(f, "Low"),
        }
    }
}

/// One product requirement derived from audit results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub requirement: String,
    pub benefit: String,
    pub user_impact: String,
    pub implementation: String,
    pub priority: RequirementPriority,
    pub affected_elements: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Functional,
    Technical,
    Testing,
    Compliance,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::Functional,
        Bucket::Technical,
        Bucket::Testing,
        Bucket::Compliance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Functional => "Functional Requirements",
            Bucket::Technical => "Technical Requirements",
            Bucket::Testing => "Testing Requirements",
            Bucket::Compliance => "Compliance Requirements",
        }
    }
}

/// Requirements grouped into the four PRD buckets. All four keys are required
/// when parsing a generated response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    pub functional: Vec<Requirement>,
    pub technical: Vec<Requirement>,
    pub testing: Vec<Requirement>,
    pub compliance: Vec<Requirement>,
}

impl RequirementSet {
    pub fn bucket(&self, bucket: Bucket) -> &[Requirement] {
        match bucket {
            Bucket::Functional => &self.functional,
            Bucket::Technical => &self.technical,
            Bucket::Testing => &self.testing,
            Bucket::Compliance => &self.compliance,
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Requirement> {
        match bucket {
            Bucket::Functional => &mut self.functional,
            Bucket::Technical => &mut self.technical,
            Bucket::Testing => &mut self.testing,
            Bucket::Compliance => &mut self.compliance,
        }
    }

    pub fn len(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.bucket(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which strategy produced a requirement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementSource {
    Generated,
    Fallback,
}
