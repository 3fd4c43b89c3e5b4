use clap::Parser;
use naca_rs::{create, Airfoil};
use ncollide2d::na::Point2;
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "naca")]
#[command(version)]
#[command(about = "Generates the coordinates of a NACA airfoil section")]
struct Args {
    /// NACA designation, such as "2412", "23012", "0012-34", "16-012", "63-212" or "63A212"
    designation: String,

    /// Chord length of the section
    #[arg(default_value_t = 1.0)]
    chord: f64,

    /// Write the full geometry as JSON instead of the upper and lower surface points
    #[arg(long)]
    json: bool,
}

fn write_points(out: &mut impl Write, points: &[Point2<f64>]) -> std::io::Result<()> {
    for p in points.iter() {
        writeln!(out, "{}, {}", &p.x, &p.y)?;
    }

    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let airfoil = create(&args.designation, args.chord)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, airfoil.geometry())?;
        writeln!(out)?;
    } else {
        writeln!(out, "# {}", airfoil.designation())?;
        writeln!(out, "# upper")?;
        write_points(&mut out, airfoil.upper_surface())?;
        writeln!(out, "# lower")?;
        write_points(&mut out, airfoil.lower_surface())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
