pub mod compare;
pub mod math;
pub mod number;
pub mod random;
pub mod stats;
pub mod utils;

use std::fmt;

pub const GLOBAL: &str = "Global";
pub const MATH: &str = "Math";
pub const NUMBER: &str = "Number";

/// Named groups of builtins that can be installed independently.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BuiltinGroup {
    /// `$$num` / `$$str` chained comparators.
    Global,
    /// Aggregates, statistics, `rangedRandom`, `distance`, `logBase`.
    Math,
    /// `clamp` and `toFixedNum`.
    Number,
}

impl BuiltinGroup {
    pub const ALL: [BuiltinGroup; 3] = [Self::Global, Self::Math, Self::Number];

    pub fn name(self) -> &'static str {
        match self {
            Self::Global => GLOBAL,
            Self::Math => MATH,
            Self::Number => NUMBER,
        }
    }

    /// Resolves a group from any casing of its name (`"math"`, `"MATH"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let titled = title_case(name.trim());
        Self::ALL.into_iter().find(|g| g.name() == titled)
    }

    pub fn install(self) {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("install_group", group = self.name()).entered();
        match self {
            Self::Global => compare::register_builtins(),
            Self::Math => {
                math::register_builtins();
                stats::register_builtins();
                random::register_builtins();
            }
            Self::Number => number::register_builtins(),
        }
    }
}

impl fmt::Display for BuiltinGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) => head
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Installs every group.
pub fn load_builtins() {
    for group in BuiltinGroup::ALL {
        group.install();
    }
}

/// Installs the named groups and returns the ones that were recognised, in
/// request order. An empty request installs everything. Unknown names are
/// skipped.
pub fn load_groups<S: AsRef<str>>(names: &[S]) -> Vec<BuiltinGroup> {
    if names.is_empty() {
        load_builtins();
        return BuiltinGroup::ALL.to_vec();
    }
    let mut installed = Vec::with_capacity(names.len());
    for name in names {
        match BuiltinGroup::from_name(name.as_ref()) {
            Some(group) => {
                group.install();
                if !installed.contains(&group) {
                    installed.push(group);
                }
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(group = name.as_ref(), "unknown builtin group skipped");
            }
        }
    }
    installed
}
