//! Summary of an emission pass.

use std::fmt;

use scriptdefs_core::DataType;

/// Number of entries written into one container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupCount {
    pub container: String,
    pub entries: usize,
}

/// A literal emitted through the fallback rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fallback {
    pub container: String,
    pub record: String,
    pub datatype: DataType,
    pub value: String,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: `{}` emitted as-is for {} (in `{}`)",
            self.container, self.value, self.datatype, self.record
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub groups: Vec<GroupCount>,
    pub fallbacks: Vec<Fallback>,
}

impl EmitReport {
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.entries).sum()
    }

    pub fn entries(&self, container: &str) -> Option<usize> {
        self.groups
            .iter()
            .find(|g| g.container == container)
            .map(|g| g.entries)
    }

    pub fn has_fallbacks(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

/// `KOTOR_CONSTANTS: 3, TSL_CONSTANTS: 4`
impl fmt::Display for EmitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", group.container, group.entries)?;
        }
        Ok(())
    }
}

/// Generated source text with its report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub report: EmitReport,
}
