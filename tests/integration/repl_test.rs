//! Interpreter loop tests with in-memory input and a real history file.

use pretty_assertions::assert_eq;
use stockroom::config::Config;
use stockroom::history::{FileHistorySink, HistorySink, HISTORY_FAILURE_NOTICE};
use stockroom::repl::Repl;
use tempfile::tempdir;

fn config_with_batch(batch_size: usize) -> Config {
    let mut config = Config::default();
    config.history.batch_size = batch_size;
    config.history.flush_interval_ms = 10;
    config
}

#[tokio::test]
async fn test_script_then_input() {
    let mut repl = Repl::new(Vec::new(), &Config::default(), None);
    repl.run_script("ADD PRODUCT Widget W1\nADD WAREHOUSE 1 10\n")
        .unwrap();

    let input: &[u8] = b"STOCK W1 1 15\ny\nLIST WAREHOUSE 1\n";
    repl.run(input).await.unwrap();

    assert_eq!(
        repl.session().inventory().warehouse(1).unwrap().quantity("W1"),
        Some(10)
    );

    let output = String::from_utf8(repl.into_output()).unwrap();
    assert!(output.starts_with(">ADD PRODUCT Widget W1\n>ADD WAREHOUSE 1 10\n>"));
    assert!(output.contains("to stay within limit? (y/n) >"));
    assert!(output.ends_with("Widget\t\tW1\t\t10\n\n>"));
}

#[tokio::test]
async fn test_history_records_every_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("command_history.txt");
    let sink: Box<dyn HistorySink> = Box::new(FileHistorySink::new(&path));

    let mut repl = Repl::new(Vec::new(), &config_with_batch(2), Some(sink));
    let input: &[u8] = b"ADD WAREHOUSE 1 5\nADD WAREHOUSE 1 9\nn\n\nFOO\n";
    repl.run(input).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "ADD WAREHOUSE 1 5\nADD WAREHOUSE 1 9\nn\n\nFOO\n"
    );
}

#[tokio::test]
async fn test_history_appends_across_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("command_history.txt");

    for line in ["LIST PRODUCTS\n", "LIST WAREHOUSES\n"] {
        let sink: Box<dyn HistorySink> = Box::new(FileHistorySink::new(&path));
        let mut repl = Repl::new(Vec::new(), &config_with_batch(2), Some(sink));
        repl.run(line.as_bytes()).await.unwrap();
    }

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "LIST PRODUCTS\nLIST WAREHOUSES\n"
    );
}

#[tokio::test]
async fn test_history_failure_noticed_once() {
    let dir = tempdir().unwrap();
    let sink: Box<dyn HistorySink> =
        Box::new(FileHistorySink::new(dir.path().join("absent").join("h.txt")));

    let mut repl = Repl::new(Vec::new(), &config_with_batch(1), Some(sink));
    let input: &[u8] = b"ADD WAREHOUSE 1\nADD WAREHOUSE 2\nLIST WAREHOUSES\n";
    repl.run(input).await.unwrap();

    let output = String::from_utf8(repl.into_output()).unwrap();
    assert_eq!(output.matches(HISTORY_FAILURE_NOTICE).count(), 1);
    assert!(output.contains("2\t\t\t\tInfinity"));
}
