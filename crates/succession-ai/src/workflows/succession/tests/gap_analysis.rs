use super::common::*;
use crate::workflows::succession::domain::AssessmentScores;
use crate::workflows::succession::gap_analysis::{
    GapAnalysisEngine, GapAttribute, GapConfig, GapStatus, ReadinessLevel,
};

#[test]
fn matching_requirements_exactly_meets_every_attribute() {
    let engine = gap_engine();
    let role = engineering_manager_role();
    let mut employee = profile("Ada", 4.0, 4.0);
    employee.assessment_scores = role.required_scores;
    employee.experience_years = role.required_experience;
    employee.skills = role.required_skills.clone();

    let report = engine.analyze(&employee, &role);

    for gap in &report.attribute_gaps {
        assert_eq!(gap.status, GapStatus::Met, "attribute {:?}", gap.attribute);
        assert_eq!(gap.match_percent, 100, "attribute {:?}", gap.attribute);
        assert_eq!(gap.gap, 0.0, "attribute {:?}", gap.attribute);
    }
    assert_eq!(report.overall_skill_match, 100);
    assert_eq!(report.readiness, ReadinessLevel::Ready);
    assert_eq!(
        report.recommendations,
        vec!["Continue current development".to_string()]
    );
}

#[test]
fn unscreened_attribute_with_no_data_is_not_applicable() {
    let engine = gap_engine();
    let mut role = engineering_manager_role();
    role.required_experience = 0.0;
    let mut employee = profile("Ada", 4.5, 4.5);
    employee.experience_years = 0.0;

    let report = engine.analyze(&employee, &role);
    let experience = report
        .attribute(GapAttribute::ExperienceYears)
        .expect("experience gap present");

    assert_eq!(experience.status, GapStatus::NotApplicable);
    assert_eq!(experience.match_percent, 0);
}

#[test]
fn unscreened_attribute_with_data_fully_satisfies() {
    let engine = gap_engine();
    let mut role = engineering_manager_role();
    role.required_experience = 0.0;
    let employee = profile("Ada", 4.5, 4.5);

    let report = engine.analyze(&employee, &role);
    let experience = report
        .attribute(GapAttribute::ExperienceYears)
        .expect("experience gap present");

    assert_eq!(experience.status, GapStatus::Met);
    assert_eq!(experience.match_percent, 100);
}

#[test]
fn small_shortfall_within_margin_is_close() {
    let engine = gap_engine();
    let mut role = engineering_manager_role();
    role.required_scores.technical = 80.0;
    let mut employee = profile("Ada", 4.5, 4.5);
    employee.assessment_scores.technical = 76.0;

    let report = engine.analyze(&employee, &role);
    let technical = report
        .attribute(GapAttribute::Technical)
        .expect("technical gap present");

    assert_eq!(technical.status, GapStatus::Close);
    assert_eq!(technical.gap, -4.0);
    assert_eq!(technical.match_percent, 95);
}

#[test]
fn twenty_point_technical_shortfall_is_a_gap_at_75_percent() {
    let engine = gap_engine();
    let mut role = engineering_manager_role();
    role.required_scores.technical = 80.0;
    let mut employee = profile("Ada", 4.5, 4.5);
    employee.assessment_scores.technical = 60.0;

    let report = engine.analyze(&employee, &role);
    let technical = report
        .attribute(GapAttribute::Technical)
        .expect("technical gap present");

    assert_eq!(technical.status, GapStatus::Gap);
    assert_eq!(technical.gap, -20.0);
    assert_eq!(technical.match_percent, 75);
}

#[test]
fn close_margin_is_configurable() {
    let engine = GapAnalysisEngine::new(GapConfig {
        score_close_margin: 25.0,
        ..GapConfig::default()
    });
    let mut role = engineering_manager_role();
    role.required_scores.technical = 80.0;
    let mut employee = profile("Ada", 4.5, 4.5);
    employee.assessment_scores.technical = 60.0;

    let report = engine.analyze(&employee, &role);
    let technical = report
        .attribute(GapAttribute::Technical)
        .expect("technical gap present");

    assert_eq!(technical.status, GapStatus::Close);
}

#[test]
fn required_skills_partition_into_matched_and_missing() {
    let engine = gap_engine();
    let role = engineering_manager_role();
    let mut employee = profile("Ada", 4.5, 4.5);
    employee.skills = skills(&["Python", "SQL"]);

    let report = engine.analyze(&employee, &role);

    assert_eq!(report.matched_skills, vec!["Python".to_string()]);
    assert_eq!(report.missing_skills, vec!["Leadership".to_string()]);
    assert_eq!(report.overall_skill_match, 50);

    let mut reunited: Vec<String> = report
        .matched_skills
        .iter()
        .chain(report.missing_skills.iter())
        .cloned()
        .collect();
    reunited.sort();
    let mut required: Vec<String> = role.required_skills.iter().cloned().collect();
    required.sort();
    assert_eq!(reunited, required);
    assert!(report
        .matched_skills
        .iter()
        .all(|skill| !report.missing_skills.contains(skill)));
}

#[test]
fn skill_matching_is_case_sensitive() {
    let engine = gap_engine();
    let mut role = engineering_manager_role();
    role.required_skills = skills(&["React"]);
    let mut employee = profile("Ada", 4.5, 4.5);
    employee.skills = skills(&["react"]);

    let report = engine.analyze(&employee, &role);

    assert!(report.matched_skills.is_empty());
    assert_eq!(report.missing_skills, vec!["React".to_string()]);
    assert_eq!(report.overall_skill_match, 0);
}

#[test]
fn roles_without_required_skills_count_as_full_match() {
    let engine = gap_engine();
    let mut role = engineering_manager_role();
    role.required_skills.clear();
    let employee = profile("Ada", 4.5, 4.5);

    let report = engine.analyze(&employee, &role);

    assert!(report.matched_skills.is_empty());
    assert!(report.missing_skills.is_empty());
    assert_eq!(report.overall_skill_match, 100);
    assert_eq!(report.overall_skill_match_label(), "100%");
}

#[test]
fn recommendations_lead_with_skills_then_deepest_shortfall() {
    let engine = gap_engine();
    let mut role = engineering_manager_role();
    role.required_scores = AssessmentScores {
        technical: 80.0,
        communication: 80.0,
        leadership: 80.0,
    };
    let mut employee = profile("Ada", 4.5, 4.5);
    employee.assessment_scores = AssessmentScores {
        technical: 40.0,
        communication: 60.0,
        leadership: 90.0,
    };
    employee.experience_years = 10.0;
    employee.skills = skills(&["Python"]);

    let report = engine.analyze(&employee, &role);

    assert_eq!(report.recommendations.len(), 3);
    assert_eq!(report.recommendations[0], "Develop skills: Leadership");
    assert_eq!(
        report.recommendations[1],
        "Improve technical score: current 40, required 80"
    );
    assert_eq!(
        report.recommendations[2],
        "Improve communication score: current 60, required 80"
    );
    assert_eq!(report.readiness, ReadinessLevel::NotReady);
}

#[test]
fn two_recommendations_is_still_developing() {
    let engine = gap_engine();
    let mut role = engineering_manager_role();
    role.required_scores.technical = 80.0;
    let mut employee = profile("Ada", 4.5, 4.5);
    employee.assessment_scores.technical = 40.0;
    employee.experience_years = 10.0;
    employee.skills = skills(&["Python"]);

    let report = engine.analyze(&employee, &role);

    assert_eq!(report.recommendations.len(), 2);
    assert_eq!(report.readiness, ReadinessLevel::Developing);
}

#[test]
fn identical_inputs_yield_identical_reports() {
    let engine = gap_engine();
    let role = engineering_manager_role();
    let employee = profile("Ada", 4.2, 3.8);

    let first = engine.analyze(&employee, &role);
    let second = engine.analyze(&employee, &role);

    assert_eq!(first, second);
}
