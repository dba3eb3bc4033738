//! Tests for custom locale configuration files

use std::io::Write;
use subcase_core::{Config, Error, NameList, Normalizer, Paragraph};

fn locale_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{body}").unwrap();
    file
}

const HEADER: &str = r#"
[metadata]
code = "test"
name = "Test"

[letters]
uppercase = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"

[strip]
start_chars = " -"
end_chars = " "
"#;

#[test]
fn test_custom_guard() {
    let file = locale_file(&format!(
        "{HEADER}\n[[names.guards]]\nname = \"Will\"\nfollowed_by = \" be\"\n"
    ));
    let config = Config::builder().locale_file(file.path()).build().unwrap();
    let normalizer = Normalizer::with_config(config);
    let names = NameList::parse("Will");

    assert_eq!(normalizer.fix_line("it will be fine", &names, None), "it will be fine");
    assert_eq!(normalizer.fix_line("ask will now", &names, None), "ask Will now");
}

#[test]
fn test_camel_case_toggle() {
    let file = locale_file(&format!("{HEADER}\n[casing]\ncamel_case_product_names = false\n"));
    let config = Config::builder().locale_file(file.path()).build().unwrap();
    let normalizer = Normalizer::with_config(config);

    let mut paragraphs = vec![
        Paragraph::new("Buy one.", 0.0, 1000.0),
        Paragraph::new("iPhones are here", 1100.0, 2000.0),
    ];
    normalizer.normalize(&mut paragraphs, &NameList::new());
    assert_eq!(paragraphs[1].text, "IPhones are here");

    let mut paragraphs = vec![
        Paragraph::new("Buy one.", 0.0, 1000.0),
        Paragraph::new("iPhones are here", 1100.0, 2000.0),
    ];
    Normalizer::new().normalize(&mut paragraphs, &NameList::new());
    assert_eq!(paragraphs[1].text, "iPhones are here");
}

#[test]
fn test_custom_close_gap_and_honorifics() {
    let file = locale_file(&format!(
        "{HEADER}\n[periods]\nclose_gap_ms = 2000\nhonorifics = [\"Herr\"]\n"
    ));
    let config = Config::builder().locale_file(file.path()).build().unwrap();
    let normalizer = Normalizer::with_config(config);

    let mut paragraphs = vec![
        Paragraph::new("Ask", 0.0, 1000.0),
        Paragraph::new("Herr Schmidt", 2500.0, 3000.0),
    ];
    normalizer.normalize(&mut paragraphs, &NameList::new());
    assert_eq!(paragraphs[0].text, "Ask");
}

#[test]
fn test_invalid_locale_file() {
    let file = locale_file("[metadata]\ncode = \"\"\nname = \"x\"\n[letters]\nuppercase = \"A\"\n[strip]\nstart_chars = \"\"\nend_chars = \"\"\n");
    let err = Config::builder().locale_file(file.path()).build().unwrap_err();
    assert!(matches!(err, Error::Parse(msg) if msg.contains("Locale code")));
}
