//! Integration tests for melops CLI.

use clap::Parser;
use melops::cli::{Cli, run_cli};
use std::path::{Path, PathBuf};

const TRANSCRIPT: &str = r#"{
  "segments": [
    {
      "start": 0.0,
      "end": 1.0,
      "text": " hello wold",
      "words": [
        { "word": " hello", "start": 0.0, "end": 0.4 },
        { "word": " wold", "start": 0.4, "end": 1.0 }
      ]
    },
    { "start": 1.0, "end": 2.5, "text": " how r u" }
  ]
}"#;

const SRT: &str = "1\n00:00:00,000 --> 00:00:01,500\nFirst line\n\n2\n00:00:02,000 --> 00:00:03,000\nSecond line\n";

/// Fresh scratch directory per test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("melops-test").join(name);

    if dir.exists() {
        std::fs::remove_dir_all(&dir).ok();
    }
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");

    dir
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}

fn run(args: &[&str]) -> eyre::Result<()> {
    run_cli(Cli::parse_from(std::iter::once("mel").chain(args.iter().copied())))
}

fn dialogues(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| line.starts_with("Dialogue:"))
        .collect()
}

#[test]
fn styles_transcript_to_ass() {
    let dir = scratch("style-classic");
    let input = write(&dir, "talk.json", TRANSCRIPT);

    run(&["style", input.to_str().unwrap(), "--font", "Arial"]).expect("style failed");

    let ass = std::fs::read_to_string(dir.join("talk.ass")).expect("missing ass output");

    assert!(ass.starts_with("[Script Info]\n"));
    assert!(ass.contains("PlayResX: 384\nPlayResY: 288\n"));
    assert_eq!(
        dialogues(&ass),
        [
            "Dialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,{\\an5\\pos(192,144)}hello wold",
            "Dialogue: 0,0:00:01.00,0:00:02.50,Default,,0,0,0,,{\\an5\\pos(192,144)}how r u",
        ]
    );
}

#[test]
fn applies_settings_and_replacements() {
    let dir = scratch("style-settings");
    let input = write(&dir, "talk.json", TRANSCRIPT);
    let settings = write(&dir, "settings.json", r#"{"style": "karaoke", "all_caps": true}"#);
    let replace = write(
        &dir,
        "replace.json",
        r#"[{"find": "wold", "replace": "world"}]"#,
    );
    let output = dir.join("styled.ass");

    run(&[
        "style",
        input.to_str().unwrap(),
        "--settings",
        settings.to_str().unwrap(),
        "--replace",
        replace.to_str().unwrap(),
        "--font",
        "Arial",
        "-o",
        output.to_str().unwrap(),
    ])
    .expect("style failed");

    let ass = std::fs::read_to_string(&output).expect("missing ass output");

    match &dialogues(&ass)[..] {
        [event] => assert!(event.ends_with("{\\k40}HELLO {\\k60}WORLD"), "{event}"),
        other => panic!("expected one karaoke event, got {other:?}"),
    }
}

#[test]
fn style_flag_overrides_settings() {
    let dir = scratch("style-override");
    let input = write(&dir, "talk.json", TRANSCRIPT);
    let settings = write(&dir, "settings.json", r#"{"style": "karaoke"}"#);
    let corrected = write(&dir, "script.txt", "hello world how are you");

    run(&[
        "style",
        input.to_str().unwrap(),
        "--settings",
        settings.to_str().unwrap(),
        "--style",
        "classic",
        "--correct-text",
        corrected.to_str().unwrap(),
        "--font",
        "Arial",
    ])
    .expect("style failed");

    let ass = std::fs::read_to_string(dir.join("talk.ass")).expect("missing ass output");
    let events = dialogues(&ass);

    assert_eq!(events.len(), 2);
    assert!(events[0].ends_with("}hello world"), "{}", events[0]);
    assert!(events[1].ends_with("}how are you"), "{}", events[1]);
}

#[test]
fn styles_srt_captions() {
    let dir = scratch("style-srt");
    let input = write(&dir, "talk.srt", SRT);

    run(&["style", input.to_str().unwrap(), "--font", "Arial"]).expect("style failed");

    let ass = std::fs::read_to_string(dir.join("talk.ass")).expect("missing ass output");
    let events = dialogues(&ass);

    assert_eq!(events.len(), 2);
    assert!(events[0].starts_with("Dialogue: 0,0:00:00.00,0:00:01.50,"));
    assert!(events[1].ends_with("}Second line"));
}

#[test]
fn rejects_karaoke_for_srt() {
    let dir = scratch("style-srt-karaoke");
    let input = write(&dir, "talk.srt", SRT);

    let result = run(&[
        "style",
        input.to_str().unwrap(),
        "--style",
        "karaoke",
        "--font",
        "Arial",
    ]);

    assert!(result.is_err());
    assert!(!dir.join("talk.ass").exists());
}

#[test]
fn missing_font_writes_nothing() {
    let dir = scratch("style-font");
    let input = write(&dir, "talk.json", TRANSCRIPT);

    let err = run(&["style", input.to_str().unwrap(), "--font", "Roboto"])
        .expect_err("font check should fail");

    assert!(err.to_string().contains("font 'Arial' not available"), "{err}");
    assert!(!dir.join("talk.ass").exists());
}

#[test]
fn aligns_transcript_to_srt() {
    let dir = scratch("align-srt");
    let input = write(&dir, "talk.json", TRANSCRIPT);
    let corrected = write(&dir, "script.txt", "hello world how are you");

    run(&[
        "align",
        input.to_str().unwrap(),
        "--correct-text",
        corrected.to_str().unwrap(),
    ])
    .expect("align failed");

    let srt = std::fs::read_to_string(dir.join("talk.srt")).expect("missing srt output");

    assert!(srt.contains("00:00:00,000 --> 00:00:01,000\nhello world"), "{srt}");
    assert!(srt.contains("00:00:01,000 --> 00:00:02,500\nhow are you"), "{srt}");
}

#[test]
fn aligns_transcript_to_json() {
    let dir = scratch("align-json");
    let input = write(&dir, "talk.json", TRANSCRIPT);
    let corrected = write(&dir, "script.txt", "hello world how are you");

    run(&[
        "align",
        input.to_str().unwrap(),
        "--correct-text",
        corrected.to_str().unwrap(),
        "--json",
    ])
    .expect("align failed");

    let json = std::fs::read_to_string(dir.join("talk.aligned.json")).expect("missing json output");
    let value: serde_json::Value = serde_json::from_str(&json).expect("invalid json output");

    assert_eq!(value["segments"][0]["text"], "hello world");
    assert_eq!(value["segments"][1]["text"], "how are you");
    assert_eq!(value["segments"][0]["words"][1]["word"], " wold");
    assert_eq!(value["segments"][0]["words"][1]["start"], 0.4);
}
