use anyhow::{bail, Context, Result};

use cnctoolkit::{
    init_logging, CuttingConditionParameters, CuttingConditionSolver, FeatureType, MachiningMode,
    RampDetail, RampStrategy, RangeSelector, ScallopHeightCalculator, StockAllowanceLookup,
    ToolMaterial, ToolOverhangAdvisor, ToolOverhangOutcome, ToolOverhangParameters,
    WorkpieceMaterial, BUILD_DATE, VERSION,
};

const USAGE: &str = "\
cnctoolkit - CNC machining calculators

Usage: cnctoolkit [--json] <command> [options]

Commands:
  overhang   --diameter <mm> --material <carbide|hss|ceramic>
             --speed <rpm> --feed <mm/min> --depth <mm>
  scallop    --diameter <mm> --stepover <mm>
  ramp       internal --tool <mm> --depth <mm> --hole <mm>
             external --tool <mm> --depth <mm> --boss <mm> --width <mm>
             linear   --depth <mm> --length <mm>
  cutting    --material <name> --diameter <mm> --teeth <n>
             [--mode <rough|finish>] [--speed-level <low|mid|high>]
             [--feed-level <low|mid|high>]
  allowance  --material <name> --feature <face|floor|surface|wall|pocket|hole>
  version

Materials: aluminum, stainless-steel, mold-steel, carbon-steel,
           copper-alloy, titanium-alloy, plastic

Options:
  --json     Print results as JSON instead of text
";

fn main() -> Result<()> {
    init_logging()?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = take_flag(&mut args, "--json");

    let Some(command) = args.first().cloned() else {
        print!("{USAGE}");
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "overhang" => run_overhang(rest, json),
        "scallop" => run_scallop(rest, json),
        "ramp" => run_ramp(rest, json),
        "cutting" => run_cutting(rest, json),
        "allowance" => run_allowance(rest, json),
        "version" => {
            println!("cnctoolkit {VERSION} (built {BUILD_DATE})");
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print!("{USAGE}");
            Ok(())
        }
        other => bail!("unknown command '{other}'; run 'cnctoolkit help' for usage"),
    }
}

fn run_overhang(args: &[String], json: bool) -> Result<()> {
    let params = ToolOverhangParameters {
        tool_diameter: value_of(args, "--diameter")?,
        tool_material: parse_tool_material(&text_of(args, "--material")?)?,
        spindle_speed: value_of(args, "--speed")?,
        feed_rate: value_of(args, "--feed")?,
        cutting_depth: value_of(args, "--depth")?,
    };

    let outcome = ToolOverhangAdvisor::new(params).advise()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    match outcome {
        ToolOverhangOutcome::Recommendation(r) => {
            println!("Recommended stick-out: {:.1} mm (L/D {:.2})", r.optimal_length, r.ld_ratio);
            println!("Suggested spindle speed: {} RPM", r.suggested_speed);
            println!("Suggested feed rate: {} mm/min", r.suggested_feed);
            if r.clamped {
                println!("Note: the raw rule fell outside the stable L/D band and was clamped");
            }
        }
        ToolOverhangOutcome::DepthWarning {
            cutting_depth,
            max_recommended_depth,
        } => {
            println!(
                "Cutting depth {cutting_depth:.1} mm exceeds the recommended maximum of \
                 {max_recommended_depth:.1} mm (2x tool diameter)."
            );
            println!("Split the cut into multiple depth passes.");
        }
    }
    Ok(())
}

fn run_scallop(args: &[String], json: bool) -> Result<()> {
    let diameter = value_of(args, "--diameter")?;
    let stepover = value_of(args, "--stepover")?;

    let result = ScallopHeightCalculator::new().compute_cusp_height(diameter, stepover)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!(
        "Cusp height: {:.4} mm ({:.2} um)",
        result.cusp_height, result.cusp_height_um
    );
    println!("Surface quality: {} ({})", result.quality, result.quality.description());
    if result.reference_stepover > 0.0 {
        println!(
            "Reference stepover for D{diameter}: {:.2} mm (cusp {:.4} mm, delta {:.4} mm)",
            result.reference_stepover, result.reference_height, result.delta
        );
    }
    if result.step_too_large {
        println!("Note: the stepover reaches the ball radius; the cusp equals the radius");
    }
    Ok(())
}

fn run_ramp(args: &[String], json: bool) -> Result<()> {
    let Some(strategy_name) = args.first() else {
        bail!("ramp requires a strategy: internal, external, or linear");
    };
    let rest = &args[1..];

    let strategy = match strategy_name.as_str() {
        "internal" => RampStrategy::InternalHelical {
            tool_diameter: value_of(rest, "--tool")?,
            depth: value_of(rest, "--depth")?,
            hole_diameter: value_of(rest, "--hole")?,
        },
        "external" => RampStrategy::ExternalHelical {
            tool_diameter: value_of(rest, "--tool")?,
            depth: value_of(rest, "--depth")?,
            boss_diameter: value_of(rest, "--boss")?,
            width: value_of(rest, "--width")?,
        },
        "linear" => RampStrategy::Ramp {
            depth: value_of(rest, "--depth")?,
            length: value_of(rest, "--length")?,
        },
        other => bail!("unknown ramp strategy '{other}'; expected internal, external, or linear"),
    };

    let result = strategy.compute()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!("Ramp angle: {:.2} deg", result.angle_deg);
    println!("Safety: {} - {}", result.safety, result.advisory);
    match result.detail {
        RampDetail::Internal {
            delta_r,
            diameter_ratio,
            min_hole_diameter,
        } => {
            println!("Radial travel: {delta_r:.2} mm (hole/tool ratio {diameter_ratio:.2})");
            println!("Minimum workable hole diameter: {min_hole_diameter:.1} mm");
        }
        RampDetail::External {
            width,
            recommended_width,
        } => {
            println!(
                "Cutting width: {width:.1} mm (recommended {:.1}-{:.1} mm)",
                recommended_width.0, recommended_width.1
            );
        }
        RampDetail::Ramp { actual_length } => {
            println!("Actual ramp path length: {actual_length:.2} mm");
        }
    }
    for warning in &result.warnings {
        println!("Warning: {warning}");
    }
    Ok(())
}

fn run_cutting(args: &[String], json: bool) -> Result<()> {
    let params = CuttingConditionParameters {
        material: parse_material(&text_of(args, "--material")?)?,
        tool_diameter: value_of(args, "--diameter")?,
        tooth_count: text_of(args, "--teeth")?
            .parse()
            .context("--teeth must be a whole number")?,
        mode: match optional_text_of(args, "--mode").as_deref() {
            None | Some("rough") => MachiningMode::Roughing,
            Some("finish") => MachiningMode::Finishing,
            Some(other) => bail!("unknown mode '{other}'; expected rough or finish"),
        },
        speed_selector: parse_selector(optional_text_of(args, "--speed-level"))?,
        feed_selector: parse_selector(optional_text_of(args, "--feed-level"))?,
    };

    let result = CuttingConditionSolver::new().solve(&params)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!(
        "Cutting speed: {:.0} m/min (table range {:.0}-{:.0})",
        result.cutting_speed, result.vc_range.0, result.vc_range.1
    );
    println!(
        "Feed per tooth: {:.3} mm (table range {:.3}-{:.3})",
        result.feed_per_tooth, result.fz_range.0, result.fz_range.1
    );
    println!("Spindle speed: {:.0} RPM", result.spindle_speed);
    println!("Feed rate: {:.0} mm/min", result.feed_rate);
    if result.spindle_clamped {
        println!("Note: spindle speed was clamped to the machine envelope");
    }
    if result.feed_clamped {
        println!("Note: feed rate was clamped to the machine envelope");
    }
    Ok(())
}

fn run_allowance(args: &[String], json: bool) -> Result<()> {
    let material = parse_material(&text_of(args, "--material")?)?;
    let feature = parse_feature(&text_of(args, "--feature")?)?;

    let result = StockAllowanceLookup::new().lookup(material, feature)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!("Stock allowance for {material} / {feature}:");
    println!("  After roughing:       {:.2} mm per side", result.rough);
    println!("  After semi-finishing: {:.2} mm per side", result.semi_finish);
    println!("  Total on the blank:   {:.2} mm per side", result.total_allowance);
    println!("  Recommended tool:     {}", result.recommended_tool);
    println!("  Notes:                {}", result.notes);
    Ok(())
}

/// Remove a bare flag from the argument list, reporting whether it was there
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    if let Some(index) = args.iter().position(|a| a == flag) {
        args.remove(index);
        true
    } else {
        false
    }
}

/// The string value following a `--flag`
fn text_of(args: &[String], flag: &str) -> Result<String> {
    let index = args
        .iter()
        .position(|a| a == flag)
        .with_context(|| format!("missing required option {flag}"))?;
    args.get(index + 1)
        .cloned()
        .with_context(|| format!("option {flag} needs a value"))
}

fn optional_text_of(args: &[String], flag: &str) -> Option<String> {
    let index = args.iter().position(|a| a == flag)?;
    args.get(index + 1).cloned()
}

/// The numeric value following a `--flag`
fn value_of(args: &[String], flag: &str) -> Result<f64> {
    let text = text_of(args, flag)?;
    text.parse()
        .with_context(|| format!("option {flag} expects a number, got '{text}'"))
}

fn parse_tool_material(name: &str) -> Result<ToolMaterial> {
    match name.to_ascii_lowercase().as_str() {
        "carbide" | "tungsten-carbide" => Ok(ToolMaterial::TungstenCarbide),
        "hss" | "high-speed-steel" => Ok(ToolMaterial::HighSpeedSteel),
        "ceramic" => Ok(ToolMaterial::Ceramic),
        other => bail!("unknown tool material '{other}'; expected carbide, hss, or ceramic"),
    }
}

fn parse_material(name: &str) -> Result<WorkpieceMaterial> {
    match name.to_ascii_lowercase().as_str() {
        "aluminum" | "aluminium" => Ok(WorkpieceMaterial::Aluminum),
        "stainless-steel" | "stainless" => Ok(WorkpieceMaterial::StainlessSteel),
        "mold-steel" => Ok(WorkpieceMaterial::MoldSteel),
        "carbon-steel" | "steel" => Ok(WorkpieceMaterial::CarbonSteel),
        "copper-alloy" | "copper" | "brass" => Ok(WorkpieceMaterial::CopperAlloy),
        "titanium-alloy" | "titanium" => Ok(WorkpieceMaterial::TitaniumAlloy),
        "plastic" => Ok(WorkpieceMaterial::Plastic),
        other => bail!("unknown workpiece material '{other}'"),
    }
}

fn parse_feature(name: &str) -> Result<FeatureType> {
    match name.to_ascii_lowercase().as_str() {
        "face" => Ok(FeatureType::Face),
        "floor" => Ok(FeatureType::Floor),
        "surface" => Ok(FeatureType::Surface),
        "wall" => Ok(FeatureType::Wall),
        "pocket" => Ok(FeatureType::Pocket),
        "hole" => Ok(FeatureType::Hole),
        other => bail!("unknown feature type '{other}'"),
    }
}

fn parse_selector(level: Option<String>) -> Result<RangeSelector> {
    match level.as_deref() {
        None | Some("mid") => Ok(RangeSelector::Mid),
        Some("low") => Ok(RangeSelector::Low),
        Some("high") => Ok(RangeSelector::High),
        Some(other) => bail!("unknown level '{other}'; expected low, mid, or high"),
    }
}
