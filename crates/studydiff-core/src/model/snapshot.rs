//! Snapshot records, one type per questionnaire level
//!
//! Each level publishes an explicit tracked-field table. The comparator only
//! looks at the fields listed there, so the set of audited columns is a
//! plain, testable artifact instead of something discovered at runtime.

use serde::{Deserialize, Serialize};

use super::changelog::RelatedObject;
use super::ids::{ModuleId, SnapshotId, StableId, StudyId};
use super::value::FieldValue;

/// Questionnaire hierarchy level, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Question,
    Answer,
    ManagedList,
    ManagedListEntity,
}

impl Level {
    /// Changelog object kind for rows emitted at this level
    pub fn related_object(self) -> RelatedObject {
        match self {
            Level::Question => RelatedObject::Question,
            Level::Answer => RelatedObject::Answer,
            Level::ManagedList => RelatedObject::ManagedList,
            Level::ManagedListEntity => RelatedObject::ManagedListEntity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Question => "Question",
            Level::Answer => "Answer",
            Level::ManagedList => "ManagedList",
            Level::ManagedListEntity => "ManagedListEntity",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audited column: its changelog name and how to read it
pub struct TrackedField<T> {
    pub name: &'static str,
    pub read: fn(&T) -> FieldValue,
}

impl<T> TrackedField<T> {
    pub fn value(&self, snapshot: &T) -> FieldValue {
        (self.read)(snapshot)
    }
}

/// Common view over the four snapshot levels
pub trait Snapshot: Sized + 'static {
    const LEVEL: Level;

    fn stable_id(&self) -> &StableId;
    fn snapshot_id(&self) -> &SnapshotId;
    fn study_id(&self) -> &StudyId;
    /// Position within the owner scope; `None` sorts last
    fn display_order(&self) -> Option<i32>;
    fn tracked_fields() -> &'static [TrackedField<Self>];
}

macro_rules! snapshot_identity {
    ($ty:ty, $level:expr, $fields:expr) => {
        impl Snapshot for $ty {
            const LEVEL: Level = $level;

            fn stable_id(&self) -> &StableId {
                &self.stable_id
            }

            fn snapshot_id(&self) -> &SnapshotId {
                &self.snapshot_id
            }

            fn study_id(&self) -> &StudyId {
                &self.study_id
            }

            fn display_order(&self) -> Option<i32> {
                self.display_order
            }

            fn tracked_fields() -> &'static [TrackedField<Self>] {
                $fields
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// Snapshot of a questionnaire line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSnapshot {
    pub snapshot_id: SnapshotId,
    pub stable_id: StableId,
    pub study_id: StudyId,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub module: Option<ModuleId>,
    #[serde(default)]
    pub variable_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub scripter_notes: Option<String>,
    #[serde(default)]
    pub answer_min: Option<i32>,
    #[serde(default)]
    pub answer_max: Option<i32>,
    #[serde(default)]
    pub format_details: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub is_dummy: bool,
}

impl QuestionSnapshot {
    pub fn new(
        snapshot_id: impl Into<SnapshotId>,
        stable_id: impl Into<StableId>,
        study_id: impl Into<StudyId>,
    ) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            stable_id: stable_id.into(),
            study_id: study_id.into(),
            display_order: None,
            module: None,
            variable_name: None,
            title: None,
            text: None,
            question_type: None,
            scripter_notes: None,
            answer_min: None,
            answer_max: None,
            format_details: None,
            rationale: None,
            is_dummy: false,
        }
    }

    /// Module this question belongs to, ignoring blank ids
    pub fn module_id(&self) -> Option<&ModuleId> {
        self.module.as_ref().filter(|m| !m.is_blank())
    }
}

static QUESTION_FIELDS: &[TrackedField<QuestionSnapshot>] = &[
    TrackedField {
        name: "QuestionVariableName",
        read: |q: &QuestionSnapshot| FieldValue::text(q.variable_name.as_deref()),
    },
    TrackedField {
        name: "QuestionTitle",
        read: |q: &QuestionSnapshot| FieldValue::text(q.title.as_deref()),
    },
    TrackedField {
        name: "QuestionText",
        read: |q: &QuestionSnapshot| FieldValue::text(q.text.as_deref()),
    },
    TrackedField {
        name: "QuestionType",
        read: |q: &QuestionSnapshot| FieldValue::text(q.question_type.as_deref()),
    },
    TrackedField {
        name: "ScripterNotes",
        read: |q: &QuestionSnapshot| FieldValue::text(q.scripter_notes.as_deref()),
    },
    TrackedField {
        name: "AnswerMin",
        read: |q: &QuestionSnapshot| FieldValue::integer(q.answer_min),
    },
    TrackedField {
        name: "AnswerMax",
        read: |q: &QuestionSnapshot| FieldValue::integer(q.answer_max),
    },
    TrackedField {
        name: "QuestionFormatDetails",
        read: |q: &QuestionSnapshot| FieldValue::text(q.format_details.as_deref()),
    },
    TrackedField {
        name: "QuestionRationale",
        read: |q: &QuestionSnapshot| FieldValue::text(q.rationale.as_deref()),
    },
    TrackedField {
        name: "IsDummyQuestion",
        read: |q: &QuestionSnapshot| FieldValue::flag(q.is_dummy),
    },
    TrackedField {
        name: "Module",
        read: |q: &QuestionSnapshot| FieldValue::module(q.module.as_ref()),
    },
];

snapshot_identity!(QuestionSnapshot, Level::Question, QUESTION_FIELDS);

// ---------------------------------------------------------------------------
// Answer
// ---------------------------------------------------------------------------

/// Snapshot of an answer attached to a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSnapshot {
    pub snapshot_id: SnapshotId,
    pub stable_id: StableId,
    pub study_id: StudyId,
    /// Owning question snapshot in the same study
    pub question: SnapshotId,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub is_exclusive: bool,
    #[serde(default)]
    pub is_fixed: bool,
    #[serde(default)]
    pub is_translatable: bool,
    #[serde(default)]
    pub custom_property: Option<String>,
}

impl AnswerSnapshot {
    pub fn new(
        snapshot_id: impl Into<SnapshotId>,
        stable_id: impl Into<StableId>,
        study_id: impl Into<StudyId>,
        question: impl Into<SnapshotId>,
    ) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            stable_id: stable_id.into(),
            study_id: study_id.into(),
            question: question.into(),
            display_order: None,
            text: None,
            code: None,
            is_open: false,
            is_exclusive: false,
            is_fixed: false,
            is_translatable: false,
            custom_property: None,
        }
    }
}

static ANSWER_FIELDS: &[TrackedField<AnswerSnapshot>] = &[
    TrackedField {
        name: "AnswerText",
        read: |a: &AnswerSnapshot| FieldValue::text(a.text.as_deref()),
    },
    TrackedField {
        name: "AnswerCode",
        read: |a: &AnswerSnapshot| FieldValue::text(a.code.as_deref()),
    },
    TrackedField {
        name: "IsOpen",
        read: |a: &AnswerSnapshot| FieldValue::flag(a.is_open),
    },
    TrackedField {
        name: "IsExclusive",
        read: |a: &AnswerSnapshot| FieldValue::flag(a.is_exclusive),
    },
    TrackedField {
        name: "IsFixed",
        read: |a: &AnswerSnapshot| FieldValue::flag(a.is_fixed),
    },
    TrackedField {
        name: "IsTranslatable",
        read: |a: &AnswerSnapshot| FieldValue::flag(a.is_translatable),
    },
    TrackedField {
        name: "CustomProperty",
        read: |a: &AnswerSnapshot| FieldValue::text(a.custom_property.as_deref()),
    },
];

snapshot_identity!(AnswerSnapshot, Level::Answer, ANSWER_FIELDS);

// ---------------------------------------------------------------------------
// Managed list
// ---------------------------------------------------------------------------

/// Snapshot of a managed list used by a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedListSnapshot {
    pub snapshot_id: SnapshotId,
    pub stable_id: StableId,
    pub study_id: StudyId,
    /// Owning question snapshot in the same study
    pub question: SnapshotId,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sources: Option<String>,
    #[serde(default)]
    pub everyone_sees: bool,
}

impl ManagedListSnapshot {
    pub fn new(
        snapshot_id: impl Into<SnapshotId>,
        stable_id: impl Into<StableId>,
        study_id: impl Into<StudyId>,
        question: impl Into<SnapshotId>,
    ) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            stable_id: stable_id.into(),
            study_id: study_id.into(),
            question: question.into(),
            display_order: None,
            name: None,
            sources: None,
            everyone_sees: false,
        }
    }
}

static MANAGED_LIST_FIELDS: &[TrackedField<ManagedListSnapshot>] = &[
    TrackedField {
        name: "ListName",
        read: |l: &ManagedListSnapshot| FieldValue::text(l.name.as_deref()),
    },
    TrackedField {
        name: "Sources",
        read: |l: &ManagedListSnapshot| FieldValue::text(l.sources.as_deref()),
    },
    TrackedField {
        name: "EveryoneSees",
        read: |l: &ManagedListSnapshot| FieldValue::flag(l.everyone_sees),
    },
];

snapshot_identity!(ManagedListSnapshot, Level::ManagedList, MANAGED_LIST_FIELDS);

// ---------------------------------------------------------------------------
// Managed list entity
// ---------------------------------------------------------------------------

/// Snapshot of one entry of a managed list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedListEntitySnapshot {
    pub snapshot_id: SnapshotId,
    pub stable_id: StableId,
    pub study_id: StudyId,
    /// Owning managed list snapshot in the same study
    pub managed_list: SnapshotId,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub is_fixed: bool,
    #[serde(default)]
    pub is_exclusive: bool,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub definition: Option<String>,
}

impl ManagedListEntitySnapshot {
    pub fn new(
        snapshot_id: impl Into<SnapshotId>,
        stable_id: impl Into<StableId>,
        study_id: impl Into<StudyId>,
        managed_list: impl Into<SnapshotId>,
    ) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            stable_id: stable_id.into(),
            study_id: study_id.into(),
            managed_list: managed_list.into(),
            display_order: None,
            text: None,
            code: None,
            is_fixed: false,
            is_exclusive: false,
            is_open: false,
            definition: None,
        }
    }
}

static MANAGED_LIST_ENTITY_FIELDS: &[TrackedField<ManagedListEntitySnapshot>] = &[
    TrackedField {
        name: "EntityText",
        read: |e: &ManagedListEntitySnapshot| FieldValue::text(e.text.as_deref()),
    },
    TrackedField {
        name: "EntityCode",
        read: |e: &ManagedListEntitySnapshot| FieldValue::text(e.code.as_deref()),
    },
    TrackedField {
        name: "IsFixed",
        read: |e: &ManagedListEntitySnapshot| FieldValue::flag(e.is_fixed),
    },
    TrackedField {
        name: "IsExclusive",
        read: |e: &ManagedListEntitySnapshot| FieldValue::flag(e.is_exclusive),
    },
    TrackedField {
        name: "IsOpen",
        read: |e: &ManagedListEntitySnapshot| FieldValue::flag(e.is_open),
    },
    TrackedField {
        name: "Definition",
        read: |e: &ManagedListEntitySnapshot| FieldValue::text(e.definition.as_deref()),
    },
];

snapshot_identity!(
    ManagedListEntitySnapshot,
    Level::ManagedListEntity,
    MANAGED_LIST_ENTITY_FIELDS
);
