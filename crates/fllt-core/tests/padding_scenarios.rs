use std::io::{self, Write};

use fllt_core::{emit, emit_to_vec, ingest_bytes, target_width, EmitMode, FillSpec, FlltError};

fn pad(input: &str, spec: &FillSpec) -> String {
    let ing = ingest_bytes(input.as_bytes()).unwrap();
    String::from_utf8(emit_to_vec(&ing, spec).unwrap()).unwrap()
}

#[test]
fn aligns_to_widest_line() {
    let spec = FillSpec::default().with_fill('*');
    assert_eq!(pad("ab\nabcd\n", &spec), "ab**\nabcd\n");
}

#[test]
fn single_unterminated_line_gets_extra_count_only() {
    let spec = FillSpec::default().with_fill('-').with_number(2).with_end("!");
    assert_eq!(pad("hello", &spec), "hello--!\n");
}

#[test]
fn start_prefix_on_every_line_including_empty() {
    let spec = FillSpec::default().with_fill('.').with_start(">").with_number(2);
    assert_eq!(pad("x\n\ny\n", &spec), ">x..\n>...\n>y..\n");

    let spec = FillSpec::default().with_fill('.').with_start(">").with_number(1);
    assert_eq!(pad("x\n\ny\n", &spec), ">x.\n>..\n>y.\n");
}

#[test]
fn default_spec_pads_with_spaces() {
    assert_eq!(pad("a\nabc\n", &FillSpec::default()), "a  \nabc\n");
}

#[test]
fn zero_extra_is_plain_alignment() {
    let spec = FillSpec::default().with_fill('#').with_number(0);
    assert_eq!(pad("aaa\na\naa\n", &spec), "aaa\na##\naa#\n");
}

#[test]
fn end_string_precedes_newline() {
    let spec = FillSpec::default().with_fill('_').with_end("|");
    assert_eq!(pad("one\nthree\n", &spec), "one__|\nthree|\n");
}

#[test]
fn multibyte_fill_repeats_whole_code_point() {
    let spec = FillSpec::default().with_fill('█').with_number(1);
    assert_eq!(pad("ab\na\n", &spec), "ab█\na██\n");
}

#[test]
fn widths_count_code_points_not_bytes() {
    let spec = FillSpec::default().with_fill('.');
    // "€€€" is 9 bytes but 3 wide
    assert_eq!(pad("€€€\nab\n", &spec), "€€€\nab.\n");
}

#[test]
fn single_line_keeps_multibyte_content_whole() {
    let spec = FillSpec::default().with_fill('+').with_number(1).with_start("[");
    assert_eq!(pad("日本語", &spec), "[日本語+\n");
}

#[test]
fn unterminated_tail_after_lines_joins_alignment() {
    let spec = FillSpec::default().with_fill('.');
    assert_eq!(pad("ab\nabcde", &spec), "ab...\nabcde\n");
    assert_eq!(pad("abcd\nab", &spec), "abcd\nab..\n");
}

#[test]
fn empty_input_emits_nothing() {
    let spec = FillSpec::default().with_number(3).with_end("!");
    assert_eq!(pad("", &spec), "");
}

#[test]
fn lone_newline_is_one_empty_line() {
    let spec = FillSpec::default().with_fill('x').with_number(2);
    assert_eq!(pad("\n", &spec), "xx\n");
}

#[test]
fn mode_selection() {
    assert_eq!(EmitMode::select(&ingest_bytes(b"").unwrap()), EmitMode::Empty);
    assert_eq!(EmitMode::select(&ingest_bytes(b"abc").unwrap()), EmitMode::SingleLine);
    assert_eq!(EmitMode::select(&ingest_bytes(b"abc\n").unwrap()), EmitMode::Aligned);
    assert_eq!(EmitMode::select(&ingest_bytes(b"a\nbc").unwrap()), EmitMode::Aligned);
}

#[test]
fn target_width_per_mode() {
    assert_eq!(target_width(&ingest_bytes(b"hello").unwrap()), 5);
    assert_eq!(target_width(&ingest_bytes(b"ab\nabcd\n").unwrap()), 4);
    assert_eq!(target_width(&ingest_bytes(b"ab\nabcdef").unwrap()), 6);
}

#[test]
fn large_extra_count_is_written_in_full() {
    let spec = FillSpec::default().with_fill('z').with_number(1000);
    let out = pad("a\n", &spec);
    assert_eq!(out.len(), 1 + 1000 + 1);
    assert!(out[1..1001].bytes().all(|b| b == b'z'));
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_is_propagated() {
    let ing = ingest_bytes(b"a\nb\n").unwrap();
    let err = emit(&ing, &FillSpec::default(), &mut FailingSink).unwrap_err();
    match err {
        FlltError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn start_and_end_are_opaque_bytes() {
    let spec = FillSpec::default()
        .with_fill('.')
        .with_start(vec![0xFF, b'>'])
        .with_end(vec![0x80]);
    let ing = ingest_bytes(b"a\nabc\n").unwrap();
    let out = emit_to_vec(&ing, &spec).unwrap();
    assert_eq!(out, b"\xff>a..\x80\n\xff>abc\x80\n");
}
