use log::info;
use rr_model::sim::{load_workload, Sim, TeeSink, WriterSink};
use std::env;
use std::error::Error;
use std::io;
use std::process::ExitCode;

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_OUTPUT: &str = "output.txt";

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    match run(&input, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rr_model: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let records = load_workload(input)?;
    info!("loaded {} processes from {input}", records.len());

    // The trace tees to the console and the output file, identical lines.
    let mut sink = TeeSink::new(vec![
        Box::new(WriterSink::new(io::stdout())),
        Box::new(WriterSink::create(output)?),
    ]);

    let mut sim = Sim::new(records);
    let report = sim.run(&mut sink)?;

    info!("mean waiting time: {:.6}", report.mean_wait());
    Ok(())
}
