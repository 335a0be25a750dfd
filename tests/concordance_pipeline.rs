use concord::pipeline::{run, RunConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `text` into a fresh input file and return a config pointing at it.
fn setup(dir: &TempDir, text: &str) -> RunConfig {
    let input = dir.path().join("input.txt");
    fs::write(&input, text).expect("input file should be writable");
    RunConfig {
        input,
        output: dir.path().join("output.txt"),
        stats_out: None,
    }
}

#[test]
fn single_word_sentences_index_one_word_each() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let config = setup(&dir, "Let's. Test. With. All. Of. These. ");

    let stats = run(&config).expect("run should succeed");
    assert_eq!(stats.sentences, 6);
    assert_eq!(stats.distinct_words, 6);

    let expected = "a.\tall\t{1:4}\n\
                    b.\tlet's\t{1:1}\n\
                    c.\tof\t{1:5}\n\
                    d.\ttest\t{1:2}\n\
                    e.\tthese\t{1:6}\n\
                    f.\twith\t{1:3}\n";
    let output = fs::read_to_string(&config.output).expect("output file should exist");
    assert_eq!(output, expected);
}

#[test]
fn tabs_and_newlines_are_treated_as_separators() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let config = setup(&dir, "Need\tto\ttest.\nTab\tand\nnewline characters. ");

    run(&config).expect("run should succeed");

    let expected = "a.\tand\t{1:2}\n\
                    b.\tcharacters\t{1:2}\n\
                    c.\tneed\t{1:1}\n\
                    d.\tnewline\t{1:2}\n\
                    e.\ttab\t{1:2}\n\
                    f.\ttest\t{1:1}\n\
                    g.\tto\t{1:1}\n";
    let output = fs::read_to_string(&config.output).expect("output file should exist");
    assert_eq!(output, expected);
}

#[test]
fn acronym_token_stays_distinct_from_near_words() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let config = setup(
        &dir,
        "Test test test t.e.s.t. testtest. Test. Test. Testy test test test. ",
    );

    let stats = run(&config).expect("run should succeed");
    assert_eq!(stats.sentences, 4);

    // "t.e.s.t." keeps its periods and sorts before "test" ('.' < 'e').
    let expected = "a.\tt.e.s.t.\t{1:1}\n\
                    b.\ttest\t{6:1,1,2,3,4,4}\n\
                    c.\ttesttest\t{1:1}\n\
                    d.\ttesty\t{1:4}\n";
    let output = fs::read_to_string(&config.output).expect("output file should exist");
    assert_eq!(output, expected);
}

#[test]
fn empty_input_produces_empty_output() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let config = setup(&dir, "");

    let stats = run(&config).expect("empty input is not an error");
    assert_eq!(stats.sentences, 0);
    assert_eq!(stats.distinct_words, 0);
    assert_eq!(stats.total_occurrences, 0);

    let output = fs::read_to_string(&config.output).expect("output file should exist");
    assert_eq!(output, "");
}

#[test]
fn stats_report_is_written_when_requested() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let mut config = setup(&dir, "One two. Two one. ");
    config.stats_out = Some(dir.path().join("run_stats.json"));

    run(&config).expect("run should succeed");

    let output = fs::read_to_string(&config.output).expect("output file should exist");
    assert_eq!(output, "a.\tone\t{2:1,2}\nb.\ttwo\t{2:1,2}\n");

    let report = fs::read_to_string(config.stats_out.as_ref().unwrap())
        .expect("stats file should exist");
    let parsed: serde_json::Value =
        serde_json::from_str(&report).expect("stats file should be valid JSON");
    assert_eq!(parsed["sentences"], 2);
    assert_eq!(parsed["distinct_words"], 2);
    assert_eq!(parsed["total_occurrences"], 4);
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let config = RunConfig {
        input: dir.path().join("does_not_exist.txt"),
        output: dir.path().join("output.txt"),
        stats_out: None,
    };

    let err = run(&config).expect_err("missing input should fail");
    assert!(
        err.to_string().contains("does_not_exist.txt"),
        "error should name the missing file: {err}"
    );
}

#[test]
fn unterminated_trailing_text_is_not_indexed() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let config = setup(&dir, "Only sentence here. dangling words without an ending");

    let stats = run(&config).expect("run should succeed");
    assert_eq!(stats.sentences, 1);

    let output = fs::read_to_string(&config.output).expect("output file should exist");
    assert_eq!(output, "a.\there\t{1:1}\nb.\tonly\t{1:1}\nc.\tsentence\t{1:1}\n");
}

#[test]
fn output_is_overwritten_on_rerun() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let config = setup(&dir, "First pass. ");
    run(&config).expect("first run should succeed");

    fs::write(&config.input, "Second go. ").expect("input file should be writable");
    run(&config).expect("second run should succeed");

    let output = fs::read_to_string(&config.output).expect("output file should exist");
    assert_eq!(output, "a.\tgo\t{1:1}\nb.\tsecond\t{1:1}\n");
}

#[test]
fn stats_paths_echo_the_configuration() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let config = setup(&dir, "A word. ");

    let stats = run(&config).expect("run should succeed");
    assert_eq!(PathBuf::from(&stats.input), config.input);
    assert_eq!(PathBuf::from(&stats.output), config.output);
}
