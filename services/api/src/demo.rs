use std::collections::BTreeSet;

use clap::Args;
use succession_ai::error::AppError;
use succession_ai::workflows::succession::{
    AssessmentScores, EmployeeId, EmployeeProfile, GapConfig, RatingThresholds, RoleRequirements,
    SegmentSummary, SuccessionService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the low cut point on both nine-box axes
    #[arg(long)]
    pub(crate) ninebox_low: Option<f32>,
    /// Override the high cut point on both nine-box axes
    #[arg(long)]
    pub(crate) ninebox_high: Option<f32>,
    /// Skip the gap-analysis portion of the demo
    #[arg(long)]
    pub(crate) skip_gap_analysis: bool,
}

fn skills(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn sample_roster() -> Vec<EmployeeProfile> {
    vec![
        employee("emp-001", "Ada Thompson", "Software Engineer", 4.2, 3.8),
        employee("emp-002", "Grace Li", "Staff Engineer", 4.5, 4.4),
        employee("emp-003", "Tom Ford", "Engineer", 2.0, 2.0),
        employee("emp-004", "Maya Patel", "Data Analyst", 3.7, 4.1),
        employee("emp-005", "Leo Walsh", "Engineer", 3.0, 3.7),
        employee("emp-006", "Nina Sousa", "Product Analyst", 3.8, 3.6),
    ]
}

fn employee(
    id: &str,
    name: &str,
    role: &str,
    performance: f32,
    potential: f32,
) -> EmployeeProfile {
    EmployeeProfile {
        employee_id: EmployeeId(id.to_string()),
        name: name.to_string(),
        role: role.to_string(),
        department: "Engineering".to_string(),
        performance_rating: performance,
        potential_rating: potential,
        assessment_scores: AssessmentScores {
            technical: 70.0,
            communication: 65.0,
            leadership: 55.0,
        },
        experience_years: 4.0,
        skills: skills(&["Python", "SQL"]),
    }
}

fn sample_role() -> RoleRequirements {
    RoleRequirements {
        role: "Engineering Manager".to_string(),
        required_skills: skills(&["Python", "Leadership", "Stakeholder Management"]),
        required_experience: 6.0,
        min_performance_rating: 4.0,
        min_potential_rating: 4.0,
        required_scores: AssessmentScores {
            technical: 75.0,
            communication: 75.0,
            leadership: 70.0,
        },
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let thresholds = RatingThresholds::symmetric(
        args.ninebox_low.unwrap_or(3.5),
        args.ninebox_high.unwrap_or(4.0),
    );
    let service = SuccessionService::new(thresholds, GapConfig::default())?;

    let roster = sample_roster();
    let batch = service.segment_batch(&roster, None)?;

    println!("Nine-box segmentation");
    println!("=====================");
    for result in &batch.results {
        println!(
            "{:<14} perf {:.1} ({:<6}) pot {:.1} ({:<6}) -> {}",
            result.employee_name,
            result.performance_rating,
            result.performance_band.label(),
            result.potential_rating,
            result.potential_band.label(),
            result.segment.label(),
        );
    }

    print_summary(&batch.summary);

    if args.skip_gap_analysis {
        return Ok(());
    }

    let candidate = &roster[0];
    let role = sample_role();
    let view = service.analyze_gaps(candidate, &role, None, None)?;

    println!();
    println!("Gap analysis: {} -> {}", candidate.name, role.role);
    println!("=====================");
    println!(
        "Current segment: {} ({})",
        view.current_segment.label(),
        view.current_segment_description
    );
    println!(
        "Skill match: {} (matched {:?}, missing {:?})",
        view.report.overall_skill_match_label(),
        view.report.matched_skills,
        view.report.missing_skills
    );
    for gap in &view.report.attribute_gaps {
        println!(
            "  {:<20} employee {:>6} required {:>6} -> {:?} ({}%)",
            gap.attribute.label(),
            gap.employee,
            gap.required,
            gap.status,
            gap.match_percent,
        );
    }
    println!("Readiness: {}", view.report.readiness.label());
    println!("Recommendations:");
    for (index, recommendation) in view.report.recommendations.iter().enumerate() {
        println!("  {}. {}", index + 1, recommendation);
    }

    Ok(())
}

fn print_summary(summary: &SegmentSummary) {
    println!();
    println!("Summary ({} employees)", summary.total_employees);
    for (segment, count) in &summary.segment_counts {
        println!("  {segment}: {count}");
    }
    if !summary.fast_track.is_empty() {
        println!("  Fast track: {}", summary.fast_track.join(", "));
    }
    if !summary.development_needed.is_empty() {
        println!(
            "  Development needed: {}",
            summary.development_needed.join(", ")
        );
    }
}
