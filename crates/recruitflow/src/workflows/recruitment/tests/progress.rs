use super::common::{drive, posted};
use crate::workflows::recruitment::methodology::SelectionMethodology;
use crate::workflows::recruitment::progress::{
    classify, percent_complete, stage_percent, ConsistencyError, StageMark, StoredStageRow,
};
use crate::workflows::recruitment::taxonomy::{Stage, SubStage};
use crate::workflows::recruitment::views::ProgressBoard;

#[test]
fn classification_partitions_by_order() {
    for current in SubStage::ordered() {
        let mut current_count = 0;
        for other in SubStage::ordered() {
            let mark = classify(current, other);
            if other.order() < current.order() {
                assert_eq!(mark, StageMark::Completed);
            } else if other == current {
                assert_eq!(mark, StageMark::Current);
                current_count += 1;
            } else {
                assert_eq!(mark, StageMark::Upcoming);
            }
        }
        assert_eq!(current_count, 1, "exactly one current sub-stage");
    }
}

#[test]
fn percent_hits_both_boundaries() {
    assert_eq!(percent_complete(SubStage::NotificationPublished), 5);
    assert_eq!(percent_complete(SubStage::RecruitmentComplete), 100);
}

#[test]
fn percent_is_strictly_increasing_in_order() {
    let stages = SubStage::ordered();
    for pair in stages.windows(2) {
        assert!(
            percent_complete(pair[0]) < percent_complete(pair[1]),
            "{} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn coarse_and_fine_percentages_are_different_projections() {
    // Verification phase, last sub-stage: 6/19 vs 3/6.
    assert_eq!(percent_complete(SubStage::MeritListPublished), 32);
    assert_eq!(stage_percent(Stage::Verification), 50);
    assert_ne!(
        percent_complete(SubStage::MeritListPublished),
        stage_percent(Stage::Verification)
    );
}

#[test]
fn interview_only_drive_at_interview_conducted_projects_screening() {
    let mut rec = drive(SelectionMethodology::InterviewOnly);
    for target in [
        SubStage::ApplicationsOpen,
        SubStage::ApplicationsClosed,
        SubStage::AutoShortlisting,
        SubStage::DocumentVerification,
        SubStage::MeritListPublished,
        SubStage::InterviewScheduled,
        SubStage::InterviewConducted,
    ] {
        rec.advance(target, posted(), None, None).expect("advances");
    }

    assert_eq!(rec.current_stage(), Stage::Screening);
    assert_eq!(rec.stage_progress(), 4);
    assert_eq!(rec.sub_stage_progress(), 10);
    assert_eq!(rec.percent_complete(), 53);

    // Exam stages are irrelevant to this methodology but still classify by
    // global order against the drive's position.
    assert_eq!(
        rec.classify(SubStage::ExamScheduled),
        classify(SubStage::InterviewConducted, SubStage::ExamScheduled)
    );
    assert_eq!(rec.classify(SubStage::ResultsPublished), StageMark::Upcoming);
    assert_eq!(
        rec.classify(SubStage::MeritListPublished),
        StageMark::Completed
    );
}

#[test]
fn board_narrows_screening_rows_to_methodology() {
    let rec = drive(SelectionMethodology::ExamOnly);
    let board = ProgressBoard::for_recruitment(&rec);

    assert_eq!(board.percent_complete, 5);
    assert_eq!(board.stage_number, 1);
    assert_eq!(board.stages.len(), 6);
    assert_eq!(board.sub_stages.len(), 17);
    assert!(board
        .sub_stages
        .iter()
        .all(|entry| entry.sub_stage != SubStage::InterviewScheduled));

    let current_rows = board
        .sub_stages
        .iter()
        .filter(|entry| entry.mark == StageMark::Current)
        .count();
    assert_eq!(current_rows, 1);
}

#[test]
fn derived_rows_always_validate() {
    for sub_stage in SubStage::ordered() {
        StoredStageRow::derive(sub_stage)
            .validate()
            .expect("derived row is consistent");
    }
}

#[test]
fn stage_disagreement_is_surfaced_not_repaired() {
    let mut row = StoredStageRow::derive(SubStage::ExamConducted);
    row.current_stage = Stage::Evaluation;

    match row.validate() {
        Err(ConsistencyError::StageMismatch {
            recorded, expected, ..
        }) => {
            assert_eq!(recorded, Stage::Evaluation);
            assert_eq!(expected, Stage::Screening);
        }
        other => panic!("expected stage mismatch, got {other:?}"),
    }
}

#[test]
fn progress_count_disagreement_is_surfaced() {
    let mut row = StoredStageRow::derive(SubStage::ExamConducted);
    row.sub_stage_progress = 12;
    assert!(matches!(
        row.validate(),
        Err(ConsistencyError::SubStageProgressMismatch {
            recorded: 12,
            expected: 8
        })
    ));

    let mut row = StoredStageRow::derive(SubStage::ExamConducted);
    row.stage_progress = 5;
    assert!(matches!(
        row.validate(),
        Err(ConsistencyError::StageProgressMismatch {
            recorded: 5,
            expected: 4
        })
    ));
}
