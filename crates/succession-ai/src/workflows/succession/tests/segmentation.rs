use super::common::*;
use crate::workflows::succession::segmentation::{
    classify, RatingBand, RatingThresholds, Segment, SegmentationEngine, ThresholdError,
};

const ALL_SEGMENTS: [Segment; 9] = [
    Segment::Enigma,
    Segment::EmergingTalent,
    Segment::Star,
    Segment::InconsistentPlayer,
    Segment::CoreContributor,
    Segment::ConsistentPerformer,
    Segment::RiskZone,
    Segment::DiligentWorker,
    Segment::SolidPerformer,
];

#[test]
fn every_rating_pair_maps_to_one_of_the_nine_segments() {
    let thresholds = RatingThresholds::default();
    let samples = [0.0, 1.0, 3.4, 3.5, 3.7, 3.9, 4.0, 4.8, 5.0, 7.5];

    for &performance in &samples {
        for &potential in &samples {
            let segment = classify(performance, potential, &thresholds);
            assert!(
                ALL_SEGMENTS.contains(&segment),
                "unexpected segment {segment:?} for ({performance}, {potential})"
            );
        }
    }
}

#[test]
fn grid_covers_all_nine_cells() {
    let thresholds = RatingThresholds::default();
    // One representative rating per band under the default cut points.
    let representatives = [2.0, 3.7, 4.5];

    let mut seen = Vec::new();
    for &performance in &representatives {
        for &potential in &representatives {
            seen.push(classify(performance, potential, &thresholds));
        }
    }

    for segment in ALL_SEGMENTS {
        assert!(seen.contains(&segment), "segment {segment:?} unreachable");
    }
}

#[test]
fn low_cut_point_is_inclusive_for_medium() {
    let thresholds = RatingThresholds::default();

    assert_eq!(classify(3.49, 2.0, &thresholds), Segment::RiskZone);
    assert_eq!(classify(3.5, 2.0, &thresholds), Segment::DiligentWorker);
}

#[test]
fn high_cut_point_is_inclusive_for_high() {
    let thresholds = RatingThresholds::default();

    assert_eq!(classify(3.99, 2.0, &thresholds), Segment::DiligentWorker);
    assert_eq!(classify(4.0, 2.0, &thresholds), Segment::SolidPerformer);
}

#[test]
fn transposed_ratings_land_in_the_transposed_cell() {
    let thresholds = RatingThresholds::default();

    assert_eq!(classify(4.2, 2.0, &thresholds), Segment::SolidPerformer);
    assert_eq!(classify(2.0, 4.2, &thresholds), Segment::Enigma);

    assert_eq!(classify(4.2, 3.7, &thresholds), Segment::ConsistentPerformer);
    assert_eq!(classify(3.7, 4.2, &thresholds), Segment::EmergingTalent);
}

#[test]
fn swapping_inputs_and_axes_transposes_the_cell() {
    use crate::workflows::succession::segmentation::AxisThresholds;

    let thresholds = RatingThresholds {
        performance: AxisThresholds::new(3.0, 4.0),
        potential: AxisThresholds::new(3.5, 4.5),
    };
    let swapped = RatingThresholds {
        performance: thresholds.potential,
        potential: thresholds.performance,
    };

    // 3.2 is Medium on the performance axis and Low on the potential axis.
    assert_eq!(classify(3.2, 4.6, &thresholds), Segment::EmergingTalent);
    assert_eq!(classify(4.6, 3.2, &swapped), Segment::ConsistentPerformer);
}

#[test]
fn repeated_classification_is_identical() {
    let engine = segmentation_engine();
    let employee = profile("Ada", 4.2, 3.8);

    let first = engine.segment(&employee);
    let second = engine.segment(&employee);

    assert_eq!(first, second);
}

#[test]
fn high_performance_medium_potential_is_consistent_performer() {
    let engine = segmentation_engine();
    let result = engine.segment(&profile("Ada", 4.2, 3.8));

    assert_eq!(result.performance_band, RatingBand::High);
    assert_eq!(result.potential_band, RatingBand::Medium);
    assert_eq!(result.segment, Segment::ConsistentPerformer);
    assert_eq!(result.segment_description, result.segment.description());
}

#[test]
fn low_ratings_land_in_risk_zone() {
    let engine = segmentation_engine();
    let result = engine.segment(&profile("Bob", 2.0, 2.0));

    assert_eq!(result.performance_band, RatingBand::Low);
    assert_eq!(result.potential_band, RatingBand::Low);
    assert_eq!(result.segment, Segment::RiskZone);
}

#[test]
fn inverted_thresholds_are_rejected_at_construction() {
    let err = SegmentationEngine::new(RatingThresholds::symmetric(4.0, 3.5))
        .expect_err("inverted thresholds must fail");

    assert_eq!(
        err,
        ThresholdError::Inverted {
            axis: "performance",
            low: 4.0,
            high: 3.5,
        }
    );
}

#[test]
fn equal_thresholds_collapse_the_medium_band() {
    let thresholds = RatingThresholds::symmetric(4.0, 4.0);
    thresholds.validate().expect("equal cut points are allowed");

    assert_eq!(classify(3.9, 3.9, &thresholds), Segment::RiskZone);
    assert_eq!(classify(4.0, 4.0, &thresholds), Segment::Star);
    assert_eq!(classify(4.0, 3.9, &thresholds), Segment::SolidPerformer);
}
