use crate::infra::InMemoryRecruitmentStore;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use recruitflow::error::AppError;
use recruitflow::workflows::recruitment::{
    AdvanceRequest, OpenRecruitment, RecruitmentService, SelectionMethodology, ServiceError,
    StageMark, SubStage,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Selection methodology for the demo drive
    /// (exam_only, interview_only, exam_and_interview).
    #[arg(long, default_value = "exam_and_interview")]
    pub(crate) methodology: String,
    /// Notification date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) posted: Option<NaiveDate>,
    /// Application closing date (YYYY-MM-DD). Defaults to posted + 30 days.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) closing: Option<NaiveDate>,
    /// Stop the walk at this sub-stage instead of running the drive to
    /// completion.
    #[arg(long)]
    pub(crate) stop_at: Option<String>,
    /// Include the expanded sub-stage board in the output.
    #[arg(long)]
    pub(crate) list_sub_stages: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        methodology,
        posted,
        closing,
        stop_at,
        list_sub_stages,
    } = args;

    let methodology: SelectionMethodology = methodology.parse().map_err(ServiceError::from)?;
    let stop_at: Option<SubStage> = match stop_at {
        Some(raw) => Some(raw.parse::<SubStage>().map_err(ServiceError::from)?),
        None => None,
    };

    let posted = posted.unwrap_or_else(|| Local::now().date_naive());
    let closing = closing.unwrap_or(posted + Duration::days(30));

    let store = Arc::new(InMemoryRecruitmentStore::default());
    let service = RecruitmentService::new(store);

    println!("Recruitment lifecycle demo");
    let drive = service.open(OpenRecruitment {
        vacancy_code: "GOV-2026-014".to_string(),
        title: "Assistant Section Officer".to_string(),
        department: "Department of Revenue".to_string(),
        location: "Patna".to_string(),
        selection_methodology: methodology,
        posted_date: posted,
        closing_date: closing,
    })?;

    println!(
        "Opened drive {} ({}) | methodology {} | posted {} | closes {}",
        drive.id,
        drive.vacancy_code,
        methodology.label(),
        posted,
        closing
    );

    let mut current = drive.current_sub_stage;
    let mut date = posted;
    println!("\nStage walk");
    print_step(&service, &drive.id)?;

    while let Some(target) = methodology.successor(current) {
        date += Duration::days(3);
        service.advance(
            &drive.id,
            AdvanceRequest {
                target,
                date,
                actor: None,
                details: None,
                admin_override: false,
            },
        )?;
        current = target;
        print_step(&service, &drive.id)?;

        if stop_at == Some(target) {
            println!("Stopped at {} as requested", target.label());
            break;
        }
    }

    let board = service.progress(&drive.id)?;
    println!("\nPhase board");
    for entry in &board.stages {
        println!(
            "- [{}] {}. {} ({})",
            mark_symbol(entry.mark),
            entry.number,
            entry.label,
            entry.short_label
        );
    }

    if list_sub_stages {
        println!("\nSub-stage board ({} applicable)", board.sub_stages.len());
        for entry in &board.sub_stages {
            println!(
                "- [{}] {:>2}. {} (phase {})",
                mark_symbol(entry.mark),
                entry.order,
                entry.label,
                entry.parent.label()
            );
        }
    }

    let status = service.status(&drive.id)?;
    match serde_json::to_string_pretty(&status) {
        Ok(json) => println!("\nStatus payload:\n{}", json),
        Err(err) => println!("\nStatus payload unavailable: {}", err),
    }

    let stats = service.dashboard()?;
    println!(
        "\nDashboard: {} ongoing | {} drafts | {} closing soon | {} completed | {} total",
        stats.ongoing, stats.drafts, stats.closing_soon, stats.completed, stats.total
    );

    Ok(())
}

fn print_step(
    service: &RecruitmentService<InMemoryRecruitmentStore>,
    id: &recruitflow::workflows::recruitment::RecruitmentId,
) -> Result<(), AppError> {
    let status = service.status(id)?;
    println!(
        "- {:>2}/19 {} | phase {}/6 {} | {}% complete",
        status.sub_stage_progress,
        status.current_sub_stage.label(),
        status.stage_progress,
        status.current_stage.label(),
        status.percent_complete
    );
    Ok(())
}

fn mark_symbol(mark: StageMark) -> &'static str {
    match mark {
        StageMark::Completed => "x",
        StageMark::Current => ">",
        StageMark::Upcoming => " ",
    }
}
