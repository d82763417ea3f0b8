use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::info;

use wallstudio::platform::{DirectorySurface, ScreenMetrics, StaticScreen};
use wallstudio::{CardAction, ExportOutcome, ExportTiming, Studio, StudioConfig};

#[derive(Parser)]
#[command(name = "wallstudio", version, about = "Solid color wallpaper exporter")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    screen: ScreenArgs,

    #[command(subcommand)]
    command: Command,
}

/// Stand-ins for the host screen API
#[derive(Args)]
struct ScreenArgs {
    /// Logical screen size, e.g. 412x915
    #[arg(long, global = true, value_parser = parse_size)]
    screen: Option<(u32, u32)>,

    /// Device pixel ratio applied to --screen
    #[arg(long, global = true, default_value_t = 1.0)]
    dpr: f64,

    /// Identifying string used to classify the device
    #[arg(long, global = true, default_value = "")]
    user_agent: String,
}

#[derive(Subcommand)]
enum Command {
    /// List resolution cards, marking the active one
    Cards,
    /// Show the detected device
    Detect {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render and save a wallpaper
    Export {
        /// Hex color, e.g. #76D1FF
        #[arg(long)]
        color: Option<String>,
        /// Resolution card id (pixel8, galaxy23, fullhd, qhd, detected)
        #[arg(long, conflicts_with = "size")]
        preset: Option<String>,
        /// Custom size, e.g. 1200x1600
        #[arg(long)]
        size: Option<String>,
        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Skip the busy-state delays
        #[arg(long)]
        no_delay: bool,
    },
}

/// Split `WIDTHxHEIGHT` at the first `x` or `X`. A missing separator yields
/// an empty height.
fn split_size(s: &str) -> (&str, &str) {
    s.split_once(|c: char| c == 'x' || c == 'X').unwrap_or((s, ""))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = split_size(s);
    if h.is_empty() {
        return Err(format!("expected WIDTHxHEIGHT, got {s:?}"));
    }
    let w = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    Ok((w, h))
}

/// Apply a `--preset` card. `custom` needs typed dimensions, so it is
/// rejected along with unknown ids.
fn apply_preset(studio: &Studio, id: &str) -> anyhow::Result<()> {
    match studio.select_card(id) {
        CardAction::Applied(_) => Ok(()),
        CardAction::PromptCustom(_) => bail!("preset {id:?} needs --size instead"),
        CardAction::Ignored => bail!("unknown preset {id:?}"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => StudioConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => StudioConfig::default(),
    };

    let bridge = match cli.screen.screen {
        Some((width, height)) => StaticScreen::new(ScreenMetrics {
            width: width as f64,
            height: height as f64,
            dpr: cli.screen.dpr,
            user_agent: cli.screen.user_agent.clone(),
        }),
        None => StaticScreen::default(),
    };
    if cli.screen.screen.is_some() {
        // Command-line metrics beat the config file.
        config.screen = None;
    }

    match cli.command {
        Command::Cards => {
            let studio = Studio::new(&config, &bridge, Arc::new(DirectorySurface::new(&config.output_dir)));
            for card in studio.cards() {
                let marker = if card.selected { "*" } else { " " };
                let badge = card.badge.map(|b| format!(" [{}]", b.label())).unwrap_or_default();
                println!("{} {:<9} {:<16} {}{}", marker, card.id, card.name, card.dims_label, badge);
            }
        }
        Command::Detect { json } => {
            let studio = Studio::new(&config, &bridge, Arc::new(DirectorySurface::new(&config.output_dir)));
            if json {
                println!("{}", serde_json::to_string_pretty(studio.device())?);
            } else {
                println!("{}: {}", studio.device().label, studio.device().resolution);
            }
        }
        Command::Export { color, preset, size, out, no_delay } => {
            if let Some(dir) = out {
                config.output_dir = dir;
            }
            if no_delay {
                let instant = ExportTiming::instant();
                config.export_creating_ms = instant.creating.as_millis() as u64;
                config.export_settle_ms = instant.settle.as_millis() as u64;
            }

            let studio = Studio::new(&config, &bridge, Arc::new(DirectorySurface::new(&config.output_dir)));
            studio.on_notification(|msg| eprintln!("{}", msg));

            if let Some(color) = color {
                if !studio.set_color(&color) {
                    bail!("invalid color {color:?}: expected #RGB or #RRGGBB");
                }
            }
            if let Some(id) = preset {
                apply_preset(&studio, &id)?;
            }
            if let Some(size) = size {
                let (w, h) = split_size(&size);
                if studio.apply_custom_resolution(w, h).is_none() {
                    bail!("rejected size {size:?}");
                }
            }

            info!("Exporting {} at {}", studio.color_hex_display(), studio.size_indicator());
            match studio.export_wallpaper().await {
                ExportOutcome::Delivered { delivery, .. } => {
                    let path = delivery.path.unwrap_or_else(|| PathBuf::from(&delivery.filename));
                    println!("{}", path.display());
                }
                ExportOutcome::Failed(reason) => bail!("export failed: {reason}"),
                ExportOutcome::Skipped => bail!("export already in progress"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallstudio::platform::MemorySurface;
    use wallstudio::Resolution;

    fn studio() -> Studio {
        Studio::new(&StudioConfig::default(), &StaticScreen::default(), Arc::new(MemorySurface::new()))
    }

    #[test]
    fn screen_size_accepts_either_separator_case() {
        assert_eq!(parse_size("412x915"), Ok((412, 915)));
        assert_eq!(parse_size("1200X1600"), Ok((1200, 1600)));
        assert_eq!(parse_size(" 390 x 844 "), Ok((390, 844)));
    }

    #[test]
    fn screen_size_rejects_malformed_input() {
        assert!(parse_size("412").is_err());
        assert!(parse_size("412x").is_err());
        assert!(parse_size("x915").is_err());
        assert!(parse_size("-1x915").is_err());
        assert!(parse_size("wide x tall").is_err());
    }

    #[test]
    fn size_split_feeds_custom_resolution() {
        assert_eq!(split_size("1200x1600"), ("1200", "1600"));
        assert_eq!(split_size("1200X1600"), ("1200", "1600"));
        assert_eq!(split_size("1200"), ("1200", ""));

        let s = studio();
        let (w, h) = split_size("1200X1600");
        assert_eq!(s.apply_custom_resolution(w, h), Some(Resolution::new(1200, 1600)));
        let (w, h) = split_size("1200");
        assert_eq!(s.apply_custom_resolution(w, h), None);
    }

    #[test]
    fn preset_flag_rejects_custom_and_unknown_ids() {
        let s = studio();
        let before = s.size_indicator();

        let err = apply_preset(&s, "custom").unwrap_err();
        assert!(err.to_string().contains("--size"));
        let err = apply_preset(&s, "ultrawide").unwrap_err();
        assert!(err.to_string().contains("unknown preset"));
        assert_eq!(s.size_indicator(), before);

        apply_preset(&s, "fullhd").unwrap();
        assert_eq!(s.active_preset_id(), Some("fullhd"));
        assert_eq!(s.size_indicator(), "1080 × 1920");
    }
}
