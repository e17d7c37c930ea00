use cnctoolkit_calculators::cutting_conditions::{
    CuttingConditionParameters, CuttingConditionSolver, MachiningMode, RangeSelector,
};
use cnctoolkit_calculators::helical_ramp::{RampDetail, RampStrategy, SafetyTier};
use cnctoolkit_calculators::scallop::{ScallopHeightCalculator, SurfaceQuality};
use cnctoolkit_calculators::stock_allowance::StockAllowanceLookup;
use cnctoolkit_calculators::tool_overhang::{
    ToolMaterial, ToolOverhangAdvisor, ToolOverhangOutcome, ToolOverhangParameters,
};
use cnctoolkit_core::{FeatureType, WorkpieceMaterial};

#[test]
fn test_overhang_carbide_reference_case() {
    let params = ToolOverhangParameters {
        tool_diameter: 10.0,
        tool_material: ToolMaterial::TungstenCarbide,
        spindle_speed: 3000.0,
        feed_rate: 500.0,
        cutting_depth: 2.0,
    };

    let advisor = ToolOverhangAdvisor::new(params);
    match advisor.advise().unwrap() {
        ToolOverhangOutcome::Recommendation(r) => {
            assert!((r.optimal_length - 24.0).abs() < 1e-9);
            assert_eq!(r.suggested_speed, 2700);
            assert_eq!(r.suggested_feed, 400);
            assert!(!r.clamped);
        }
        other => panic!("expected recommendation, got {other:?}"),
    }
}

#[test]
fn test_overhang_declines_deep_cut() {
    let params = ToolOverhangParameters {
        tool_diameter: 8.0,
        tool_material: ToolMaterial::Ceramic,
        spindle_speed: 6000.0,
        feed_rate: 800.0,
        cutting_depth: 17.0,
    };

    match ToolOverhangAdvisor::new(params).advise().unwrap() {
        ToolOverhangOutcome::DepthWarning {
            max_recommended_depth,
            ..
        } => assert_eq!(max_recommended_depth, 16.0),
        other => panic!("expected depth warning, got {other:?}"),
    }
}

#[test]
fn test_scallop_reference_case() {
    let calc = ScallopHeightCalculator::new();
    let result = calc.compute_cusp_height(6.0, 0.3).unwrap();

    assert!((result.cusp_height_um - 3.75).abs() < 0.01);
    assert_eq!(result.quality, SurfaceQuality::Fine);
    assert_eq!(result.reference_stepover, 0.24);
}

#[test]
fn test_scallop_quality_degrades_with_stepover() {
    let calc = ScallopHeightCalculator::new();
    let fine = calc.compute_cusp_height(10.0, 0.3).unwrap();
    let coarse = calc.compute_cusp_height(10.0, 2.5).unwrap();

    assert!(coarse.cusp_height > fine.cusp_height);
    assert_eq!(coarse.quality, SurfaceQuality::Coarse);
}

#[test]
fn test_internal_helical_reference_case() {
    let result = RampStrategy::InternalHelical {
        tool_diameter: 10.0,
        depth: 20.0,
        hole_diameter: 60.0,
    }
    .compute()
    .unwrap();

    assert!((result.angle_deg - 38.6598).abs() < 0.001);
    assert_eq!(result.safety, SafetyTier::Caution);
}

#[test]
fn test_linear_ramp_reference_case() {
    let result = RampStrategy::Ramp {
        depth: 10.0,
        length: 50.0,
    }
    .compute()
    .unwrap();

    assert!((result.angle_deg - 11.3099).abs() < 0.001);
    match result.detail {
        RampDetail::Ramp { actual_length } => {
            assert!((actual_length - 50.9902).abs() < 0.001);
        }
        other => panic!("expected ramp detail, got {other:?}"),
    }
}

#[test]
fn test_cutting_conditions_reference_case() {
    let solver = CuttingConditionSolver::new();
    let result = solver
        .solve(&CuttingConditionParameters {
            material: WorkpieceMaterial::Aluminum,
            tool_diameter: 10.0,
            tooth_count: 3,
            mode: MachiningMode::Roughing,
            speed_selector: RangeSelector::Mid,
            feed_selector: RangeSelector::Mid,
        })
        .unwrap();

    // Aluminum mid-range on a small cutter saturates both machine limits
    assert_eq!(result.spindle_speed, 20_000.0);
    assert!(result.spindle_clamped);
    assert_eq!(result.feed_rate, 5_000.0);
    assert!(result.feed_clamped);
}

#[test]
fn test_cutting_conditions_stay_in_envelope() {
    let solver = CuttingConditionSolver::new();
    for material in WorkpieceMaterial::ALL {
        for selector in [RangeSelector::Low, RangeSelector::Mid, RangeSelector::High] {
            for diameter in [1.0, 6.0, 25.0, 100.0] {
                let result = solver
                    .solve(&CuttingConditionParameters {
                        material,
                        tool_diameter: diameter,
                        tooth_count: 4,
                        mode: MachiningMode::Roughing,
                        speed_selector: selector,
                        feed_selector: selector,
                    })
                    .unwrap();
                assert!(
                    (100.0..=20_000.0).contains(&result.spindle_speed),
                    "{material} D{diameter} {selector}"
                );
                assert!((10.0..=5_000.0).contains(&result.feed_rate));
            }
        }
    }
}

#[test]
fn test_stock_allowance_reference_case() {
    let lookup = StockAllowanceLookup::new();
    let result = lookup
        .lookup(WorkpieceMaterial::CarbonSteel, FeatureType::Wall)
        .unwrap();

    assert_eq!(result.rough, 0.4);
    assert_eq!(result.semi_finish, 0.25);
    assert!((result.total_allowance - 0.75).abs() < 1e-12);
}
