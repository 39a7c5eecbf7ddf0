//! Draw a scene and save it as a plain text pixel map
#![deny(warnings)]

use rastershapes::*;
use std::{env, process::ExitCode};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

const DEFAULT_OUTPUT: &str = "orangeDesign.ppm";

#[derive(Debug)]
struct Args {
    scene_file: Option<String>,
    output_file: String,
    bg: Option<Color>,
}

impl Args {
    fn parse() -> Result<Option<Args>, Error> {
        let mut result = Args {
            scene_file: None,
            output_file: DEFAULT_OUTPUT.to_owned(),
            bg: None,
        };
        let mut positional = 0;
        let mut args = env::args();
        let cmd = args.next().unwrap_or_else(|| "compose".to_owned());
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" => {
                    eprintln!("Draw a scene of simple shapes and save it in the PPM (P3) format");
                    eprintln!("\nUSAGE:");
                    eprintln!("    {} [-s <scene.json>] [-bg <color>] [<out.ppm>]", cmd);
                    eprintln!("\nARGS:");
                    eprintln!("    -s <scene.json>    scene description (built-in design if omitted)");
                    eprintln!("    -bg <color>        background color in #rrggbb format");
                    eprintln!(
                        "    <out.ppm>          output image, '-' means stdout (default {})",
                        DEFAULT_OUTPUT
                    );
                    return Ok(None);
                }
                "-s" => {
                    result.scene_file = Some(args.next().ok_or("-s requires argument")?);
                }
                "-bg" => {
                    let bg = args
                        .next()
                        .ok_or("-bg requires color #rrggbb argument")?
                        .parse()?;
                    result.bg.replace(bg);
                }
                _ => {
                    positional += 1;
                    match positional {
                        1 => result.output_file = arg,
                        _ => return Err("unexpected positional argument".into()),
                    }
                }
            }
        }
        Ok(Some(result))
    }

    fn scene(&self) -> Result<Scene, Error> {
        let scene = match &self.scene_file {
            Some(path) => load_scene(path)?,
            None => Scene::reference(),
        };
        Ok(match self.bg {
            Some(bg) => scene.with_background(bg),
            None => scene,
        })
    }
}

#[cfg(feature = "serde")]
fn load_scene(path: &str) -> Result<Scene, Error> {
    use std::{fs::File, io::BufReader};
    Ok(Scene::from_json(BufReader::new(File::open(path)?))?)
}

#[cfg(not(feature = "serde"))]
fn load_scene(path: &str) -> Result<Scene, Error> {
    Err(format!("{path}: scene files require the `serde` feature").into())
}

fn main() -> Result<ExitCode, Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = Args::parse()? else {
        return Ok(ExitCode::SUCCESS);
    };
    // status lines must not be mixed with the image written to stdout
    let to_stdout = args.output_file == "-";
    let status = |line: &str| {
        if to_stdout {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    };

    let (canvas, reports) = args.scene()?.render()?;
    for report in &reports {
        status(&report.to_string());
    }
    status("Done drawing image.");

    match save_ppm(&canvas, &args.output_file) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            status(&format!("The {} file could not be opened.", args.output_file));
            tracing::debug!(%error, "save failed");
            Ok(ExitCode::FAILURE)
        }
    }
}
