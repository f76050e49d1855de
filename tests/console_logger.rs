use mbm::logger::*;
use regex::Regex;

const TIMESTAMP: &str = r"\x1b\[90m\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\x1b\[0m ";

struct NeverCalled;

impl Terminator for NeverCalled {
    fn terminate(&self, code: i32) -> ! {
        panic!("terminated with {code}")
    }
}

fn logger() -> ConsoleLogger<CaptureSink, NeverCalled> {
    ConsoleLogger::new(CaptureSink::new(), NeverCalled, ColorMode::Always)
}

fn pattern(body: &str) -> Regex {
    Regex::new(&format!("^{TIMESTAMP}{body}$")).unwrap()
}

#[test]
fn print_leaves_message_unwrapped() {
    let logger = logger();
    logger.print("hello");

    let lines = logger.sink().lines();
    assert_eq!(lines.len(), 1);
    assert!(pattern("hello").is_match(&lines[0]), "{:?}", lines[0]);
}

#[test]
fn error_wraps_message_in_red() {
    let logger = logger();
    logger.error("bad");

    let lines = logger.sink().lines();
    assert_eq!(lines.len(), 1);
    assert!(pattern(r"\x1b\[31mbad\x1b\[0m").is_match(&lines[0]), "{:?}", lines[0]);
}

#[test]
fn highlight_and_warning_colors() {
    let logger = logger();
    logger.highlight("look");
    logger.warning("careful");

    let lines = logger.sink().lines();
    assert!(pattern(r"\x1b\[35mlook\x1b\[0m").is_match(&lines[0]), "{:?}", lines[0]);
    assert!(pattern(r"\x1b\[33mcareful\x1b\[0m").is_match(&lines[1]), "{:?}", lines[1]);
}

#[test]
fn repeated_calls_differ_only_in_timestamp() {
    let logger = logger();
    logger.warning("same");
    logger.warning("same");

    let timestamp = Regex::new(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}").unwrap();
    let lines: Vec<String> = logger
        .sink()
        .lines()
        .iter()
        .map(|line| timestamp.replace(line, "<ts>").into_owned())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn never_mode_writes_no_escapes() {
    let logger = ConsoleLogger::new(CaptureSink::new(), NeverCalled, ColorMode::Never);
    logger.highlight("quiet");

    let lines = logger.sink().lines();
    let plain = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} quiet$").unwrap();
    assert!(plain.is_match(&lines[0]), "{:?}", lines[0]);
}

#[test]
fn empty_message_still_writes_a_line() {
    let logger = logger();
    logger.print("");
    assert!(pattern("").is_match(&logger.sink().lines()[0]));
}
