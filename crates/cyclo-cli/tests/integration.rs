use cyclo_cli::input::Input;
use cyclo_cli::runner::Runner;
use cyclo_core::sequencer::Builder;

fn output_directory(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("cyclo-cli-{}-{}", name, std::process::id()))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn integration() -> anyhow::Result<()> {
    let mut input = Input::load("../../tests/parameters.json")?;
    input.output_directory = Some(output_directory("integration"));

    let search = input.build()?;
    assert_eq!(search.sequencer.retain, 10);
    assert!(search.deduplicate_masses);

    let runner = Runner::new(search)?;
    // `I` repeats the mass of `L` and is dropped
    assert_eq!(runner.table.len(), 3);
    assert_eq!(runner.spectrum.parent_mass(), 427);

    let leader = runner.run()?;
    assert_eq!(leader.peptide.to_string(), "LKW");
    assert_eq!(leader.score, 8);

    let tsv = std::fs::read_to_string(runner.parameters.output_directory.join("results.tsv"))?;
    let mut lines = tsv.lines();
    assert_eq!(lines.next(), Some("peptide\tmasses\tscore\trank"));
    assert_eq!(lines.next(), Some("LKW\t113-128-186\t8\t1"));
    assert_eq!(lines.count(), leader.equivalent.len());

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        runner.parameters.output_directory.join("results.json"),
    )?)?;
    assert_eq!(json["leader"]["peptide"], "LKW");
    assert_eq!(json["search"]["sequencer"]["retain"], 10);

    std::fs::remove_dir_all(&runner.parameters.output_directory)?;
    Ok(())
}

#[test]
fn builtin_residue_table() -> anyhow::Result<()> {
    let input = Input {
        sequencer: Some(Builder { retain: Some(10) }),
        spectrum: Some("../../tests/tyrocidine.txt".into()),
        output_directory: Some(output_directory("builtin")),
        ..Default::default()
    };

    let runner = Runner::new(input.build()?)?;
    assert_eq!(runner.table.len(), 18);

    let (leader, _) = runner.sequence()?;
    assert_eq!(leader.peptide.to_string(), "IKW");

    std::fs::remove_dir_all(&runner.parameters.output_directory)?;
    Ok(())
}

#[test]
fn missing_spectrum() {
    let input = Input {
        output_directory: Some(output_directory("missing")),
        ..Default::default()
    };
    assert!(input.build().is_err());

    let input = Input {
        spectrum: Some("../../tests/does-not-exist.txt".into()),
        output_directory: Some(output_directory("missing")),
        ..Default::default()
    };
    assert!(input.build().and_then(Runner::new).is_err());
    let _ = std::fs::remove_dir_all(output_directory("missing"));
}
