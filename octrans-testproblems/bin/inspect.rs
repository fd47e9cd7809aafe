//! Build one of the fixture OCPs, transcribe it against a straight-line
//! initial guess, and print a constraint diagnostics report to stdout.
//! Scaffolding for interactive inspection, not a production driver.

use clap::{Parser, ValueEnum};
use ndarray::Array2;

use octrans_core::{print_constraint_values, Iterate, Transcription, TranscriptionConfig};
use octrans_testproblems::{HangingMassOcp, MinimumWorkOcp, VelocityLimitedOcp};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Problem {
    MinimumWork,
    HangingMass,
    VelocityLimited,
}

#[derive(Parser, Debug)]
struct Args {
    /// Number of mesh points in the transcription.
    #[arg(long, default_value_t = 10)]
    mesh_points: usize,

    /// Which fixture problem to inspect.
    #[arg(long, value_enum, default_value_t = Problem::MinimumWork)]
    problem: Problem,

    /// Print transcription-configuration progress lines to stderr.
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn straight_line_guess(
    num_states: usize,
    num_controls: usize,
    num_mesh_points: usize,
    state_names: Vec<String>,
    control_names: Vec<String>,
) -> Iterate {
    let time = ndarray::Array1::linspace(0.0, 1.0, num_mesh_points);
    Iterate {
        time,
        states: Array2::zeros((num_states, num_mesh_points)),
        controls: Array2::zeros((num_controls, num_mesh_points)),
        state_names,
        control_names,
    }
}

fn main() {
    let args = Args::parse();
    let config = TranscriptionConfig::builder()
        .num_mesh_points(args.mesh_points)
        .verbose(args.verbose)
        .build();

    let mut stdout = std::io::stdout();

    match args.problem {
        Problem::MinimumWork => {
            let ocp = MinimumWorkOcp;
            let transcription = Transcription::new(&ocp, &config).expect("valid configuration");
            let guess = straight_line_guess(1, 1, args.mesh_points, vec!["x".into()], vec!["u".into()]);
            print_constraint_values(&transcription, &guess, &mut stdout).expect("diagnostics output");
        }
        Problem::HangingMass => {
            let ocp = HangingMassOcp::default();
            let transcription = Transcription::new(&ocp, &config).expect("valid configuration");
            let guess = straight_line_guess(
                2,
                1,
                args.mesh_points,
                vec!["height".into(), "velocity".into()],
                vec!["force".into()],
            );
            print_constraint_values(&transcription, &guess, &mut stdout).expect("diagnostics output");
        }
        Problem::VelocityLimited => {
            let ocp = VelocityLimitedOcp::default();
            let transcription = Transcription::new(&ocp, &config).expect("valid configuration");
            let guess = straight_line_guess(
                2,
                1,
                args.mesh_points,
                vec!["position".into(), "velocity".into()],
                vec!["force".into()],
            );
            print_constraint_values(&transcription, &guess, &mut stdout).expect("diagnostics output");
        }
    }
}
