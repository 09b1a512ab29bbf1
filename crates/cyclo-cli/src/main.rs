use clap::{value_parser, Arg, Command, ValueHint};
use cyclo_cli::input::Input;
use cyclo_cli::runner::Runner;
use rayon::ThreadPoolBuilder;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::default()
        .filter_level(log::LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CYCLO_LOG", "error,cyclo=info"))
        .init();

    let matches = Command::new("cyclo")
        .version(clap::crate_version!())
        .about("Leaderboard sequencing of cyclic peptides from integer mass spectra")
        .arg(
            Arg::new("parameters")
                .required(true)
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help("Path to configuration parameters (JSON file)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("spectrum")
                .short('s')
                .long("spectrum")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help(
                    "Path to a file of whitespace-separated integer masses. Overrides the \
                     spectrum specified in the configuration file.",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("residues")
                .short('r')
                .long("residues")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help(
                    "Path to a residue table with one `symbol mass` pair per line. \
                     Overrides the table specified in the configuration file.",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_directory")
                .short('o')
                .long("output_directory")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help(
                    "Path where results will be written. \
                     Overrides the directory specified in the configuration file.",
                )
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("retain")
                .short('n')
                .long("retain")
                .value_parser(value_parser!(usize))
                .help("Number of top-scoring candidates kept each round (ties are kept too)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .value_parser(value_parser!(u16).range(1..))
                .help("Number of worker threads (default = # of CPUs)")
                .value_hint(ValueHint::Other),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let threads = matches
        .get_one::<u16>("threads")
        .copied()
        .map(usize::from)
        .unwrap_or_else(num_cpus::get);
    ThreadPoolBuilder::new().num_threads(threads).build_global()?;

    let input = Input::from_arguments(matches)?;

    let runner = input.build().and_then(Runner::new)?;
    let leader = runner.run()?;

    println!("{}", leader.peptide);
    Ok(())
}
