use studydiff_core::model::{
    AnswerSnapshot, ManagedListEntitySnapshot, ManagedListSnapshot, ModuleId, QuestionSnapshot, StudyId,
};
use studydiff_core::{ChangelogRequest, SnapshotsByLevel};

#[allow(dead_code)]
pub const PARENT: &str = "study-1";
#[allow(dead_code)]
pub const CURRENT: &str = "study-2";

/// Snapshot ids are study-local; derive them from study and stable id so
/// each test reads in terms of stable ids only.
fn snapshot_id(study: &str, stable: &str) -> String {
    format!("{}:{}", study, stable)
}

#[allow(dead_code)]
pub fn question(study: &str, stable: &str, order: i32) -> QuestionSnapshot {
    let mut q = QuestionSnapshot::new(snapshot_id(study, stable).as_str(), stable, study);
    q.display_order = Some(order);
    q.variable_name = Some(stable.to_uppercase());
    q
}

#[allow(dead_code)]
pub fn question_in_module(study: &str, stable: &str, order: i32, module: &str) -> QuestionSnapshot {
    let mut q = question(study, stable, order);
    q.module = Some(ModuleId::new(module));
    q
}

#[allow(dead_code)]
pub fn answer(study: &str, stable: &str, question: &str, order: i32) -> AnswerSnapshot {
    let mut a = AnswerSnapshot::new(
        snapshot_id(study, stable).as_str(),
        stable,
        study,
        snapshot_id(study, question).as_str(),
    );
    a.display_order = Some(order);
    a
}

#[allow(dead_code)]
pub fn managed_list(study: &str, stable: &str, question: &str) -> ManagedListSnapshot {
    let mut l = ManagedListSnapshot::new(
        snapshot_id(study, stable).as_str(),
        stable,
        study,
        snapshot_id(study, question).as_str(),
    );
    l.name = Some(stable.to_string());
    l
}

#[allow(dead_code)]
pub fn entity(study: &str, stable: &str, list: &str, order: i32) -> ManagedListEntitySnapshot {
    let mut e = ManagedListEntitySnapshot::new(
        snapshot_id(study, stable).as_str(),
        stable,
        study,
        snapshot_id(study, list).as_str(),
    );
    e.display_order = Some(order);
    e
}

/// Same questions in both studies, in the given order
#[allow(dead_code)]
pub fn questions_on_both_sides(stable_ids: &[&str]) -> Vec<QuestionSnapshot> {
    let mut out = Vec::new();
    for study in [PARENT, CURRENT] {
        for (i, id) in stable_ids.iter().enumerate() {
            out.push(question(study, id, i as i32 + 1));
        }
    }
    out
}

#[allow(dead_code)]
pub fn request(snapshots: SnapshotsByLevel) -> ChangelogRequest {
    ChangelogRequest::new(StudyId::new(CURRENT), StudyId::new(PARENT), snapshots)
}
