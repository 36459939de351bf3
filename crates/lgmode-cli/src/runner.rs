//! Profile runner: validates inputs, runs the core pipeline, formats and
//! writes the results.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use lgmode_core::types::metres_to_micrometres;
use lgmode_core::{compute_profile, ModeProfile, ProfilePoint};

use crate::config::{ModeConfig, OutputConfig};

/// Shown in place of an extrema list when there is nothing to report.
pub const NOT_FOUND: &str = "Not found";

/// Run one profile computation from boundary-unit parameters.
pub fn run_profile(mode: &ModeConfig) -> Result<ModeProfile> {
    let params = mode.to_params()?;
    info!(
        "Computing LG profile: p={}, r_max={} um, w0={} um",
        mode.p, mode.r_max_um, mode.w0_um
    );
    let profile = compute_profile(&params)
        .with_context(|| format!("Profile computation failed for p = {}", mode.p))?;
    Ok(profile)
}

/// Format radii (m) as micrometres to one decimal place, `"; "`-separated.
///
/// Returns [`NOT_FOUND`] for an empty list.
pub fn format_radii(radii_m: &[f64]) -> String {
    if radii_m.is_empty() {
        return NOT_FOUND.to_string();
    }
    radii_m
        .iter()
        .map(|&r| format!("{:.1}", metres_to_micrometres(r)))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Print the extrema summary to stdout.
pub fn print_summary(profile: &ModeProfile) {
    let p = profile.params.p();
    println!("Local Maxima for p = {} in um:", p);
    println!("  {}", format_radii(&profile.extrema.maxima));
    println!("Local Minima for p = {} in um:", p);
    println!("  {}", format_radii(&profile.extrema.minima));
}

/// Write every output enabled in `output` into `output.directory`.
pub fn write_outputs(profile: &ModeProfile, output: &OutputConfig) -> Result<()> {
    let out_dir = Path::new(&output.directory);
    if output.save_profile {
        write_profile_csv(profile, &out_dir.join("profile.csv"))?;
    }
    if output.save_json {
        write_profile_json(&profile.dataset, &out_dir.join("profile.json"))?;
        write_extrema_json(profile, &out_dir.join("extrema.json"))?;
    }
    Ok(())
}

/// Write the normalised profile to a CSV file with a metadata header.
pub fn write_profile_csv(profile: &ModeProfile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let params = &profile.params;
    writeln!(file, "# LG Mode Profile — normalised radial intensity")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# p: {}", params.p())?;
    writeln!(file, "# r_max_um: {}", metres_to_micrometres(params.r_max()))?;
    writeln!(file, "# w0_um: {}", metres_to_micrometres(params.w0()))?;
    writeln!(file, "# maxima_um: {}", format_radii(&profile.extrema.maxima))?;
    writeln!(file, "# minima_um: {}", format_radii(&profile.extrema.minima))?;
    writeln!(file, "#")?;
    writeln!(file, "x,y")?;

    for point in &profile.dataset {
        writeln!(file, "{:.6},{:.9e}", point.x, point.y)?;
    }

    println!("Profile written to: {}", path.display());
    Ok(())
}

/// Write the normalised dataset to a JSON file.
pub fn write_profile_json(dataset: &[ProfilePoint], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(dataset)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Profile (JSON) written to: {}", path.display());
    Ok(())
}

/// Write the structured extrema (metres) and their analytic counterparts.
pub fn write_extrema_json(profile: &ModeProfile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let summary = serde_json::json!({
        "p": profile.params.p(),
        "w0_m": profile.params.w0(),
        "r_max_m": profile.params.r_max(),
        "maxima_m": profile.extrema.maxima,
        "minima_m": profile.extrema.minima,
        "analytic_maxima_m": profile.analytic_maxima,
    });
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Extrema (JSON) written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("lgmode-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_format_radii() {
        assert_eq!(format_radii(&[]), NOT_FOUND);
        assert_eq!(format_radii(&[116.3e-6]), "116.3");
        assert_eq!(format_radii(&[200e-6, 215.64e-6, 590.02e-6]), "200.0; 215.6; 590.0");
    }

    #[test]
    fn test_format_radii_rounds_after_scaling_by_1e6() {
        // 4.5e-7 * 1e6 = 0.44999..., whereas 4.5e-7 / 1e-6 = 0.45000...
        assert_eq!(format_radii(&[4.5e-7, 9.5e-7, 1.05e-6]), "0.4; 0.9; 1.0");
    }

    #[test]
    fn test_default_run_reports_five_rings() {
        let profile = run_profile(&ModeConfig::default()).unwrap();
        let maxima = format_radii(&profile.extrema.maxima);
        let minima = format_radii(&profile.extrema.minima);
        assert_eq!(maxima.split("; ").count(), 5);
        assert_eq!(minima.split("; ").count(), 5);
        assert!(maxima.starts_with("116.3"), "maxima: {}", maxima);
    }

    #[test]
    fn test_p_zero_reports_not_found() {
        let mode = ModeConfig { p: 0, ..Default::default() };
        let profile = run_profile(&mode).unwrap();
        assert_eq!(format_radii(&profile.extrema.maxima), NOT_FOUND);
        assert_eq!(format_radii(&profile.extrema.minima), NOT_FOUND);
    }

    #[test]
    fn test_invalid_mode_is_rejected_before_compute() {
        let mode = ModeConfig { w0_um: -200.0, ..Default::default() };
        assert!(run_profile(&mode).is_err());
    }

    #[test]
    fn test_write_outputs() {
        let dir = scratch_dir("outputs");
        let profile = run_profile(&ModeConfig { p: 2, ..Default::default() }).unwrap();
        let output = OutputConfig {
            directory: dir.display().to_string(),
            save_profile: true,
            save_json: true,
        };
        write_outputs(&profile, &output).unwrap();

        let csv = std::fs::read_to_string(dir.join("profile.csv")).unwrap();
        let rows: Vec<&str> = csv.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows[0], "x,y");
        assert_eq!(rows.len(), 1 + 1200);
        assert!(rows[1].starts_with("0.000000,1.0"));

        let json = std::fs::read_to_string(dir.join("profile.json")).unwrap();
        let points: Vec<ProfilePoint> = serde_json::from_str(&json).unwrap();
        assert_eq!(points.len(), 1200);

        let extrema: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("extrema.json")).unwrap())
                .unwrap();
        assert_eq!(extrema["p"], 2);
        assert_eq!(extrema["minima_m"].as_array().unwrap().len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
