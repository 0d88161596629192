use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

id_type!(
    /// Identity of the originating live record, shared by every snapshot copy
    StableId
);

id_type!(
    /// Storage key of a single snapshot row; meaningful inside one study only
    SnapshotId
);

id_type!(
    /// Study version identifier
    StudyId
);

id_type!(
    /// Questionnaire module a question belongs to (a live record, not snapshotted)
    ModuleId
);

impl ModuleId {
    /// Blank module ids count as "no module"
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}
