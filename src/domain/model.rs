use serde::{Deserialize, Serialize};

/// Classification outcome for a single domain.
///
/// `Cn` is decided by suffix alone; `Ok`/`Fail` by the probe exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Cn,
    Ok,
    Fail,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Cn => "cn",
            Label::Ok => "ok",
            Label::Fail => "fail",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedDomain {
    pub domain: String,
    pub label: Label,
}

/// Output of the transform stage: the ordered decisions plus the three
/// bucket bodies, each domain newline-terminated, ready to be loaded.
#[derive(Debug, Clone)]
pub struct ClassifyResult {
    pub records: Vec<ClassifiedDomain>,
    pub cn_output: String,
    pub ok_output: String,
    pub fail_output: String,
}

impl ClassifyResult {
    pub fn count(&self, label: Label) -> usize {
        self.records.iter().filter(|r| r.label == label).count()
    }
}
