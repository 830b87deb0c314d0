use std::io;
use std::str;

use hexcat::{render_stream, ColumnGeometry};

fn assert_render_stream_output<Reader: io::Read>(input: Reader, expected_string: String) {
    let mut output = vec![];

    render_stream(input, &mut output, ColumnGeometry::default()).unwrap();

    let actual_string: &str = str::from_utf8(&output).unwrap();
    assert_eq!(actual_string, expected_string)
}

#[test]
fn empty_input_passes() {
    let input = io::empty();
    assert_render_stream_output(input, String::new());
}

#[test]
fn short_input_passes() {
    let input = io::Cursor::new(b"spam");
    assert_render_stream_output(input, format!("{:<74}{:<20}\n", "00000000  73 70 61 6D", "spam"));
}

#[test]
fn multi_line_input_passes() {
    let input = io::Cursor::new(b"spamspamspamspamspamspam");
    let expected_string = format!(
        "{}{}",
        "00000000  73 70 61 6D 73  70 61 6D 73 70  61 6D 73 70 61  6D 73 70 61 6D  spamspamspamspamspam\n",
        format!("{:<74}{:<20}\n", "00000014  73 70 61 6D", "spam"),
    );
    assert_render_stream_output(input, expected_string);
}

#[test]
fn degenerate_geometry_is_rejected_before_any_output() {
    let geometry = ColumnGeometry {
        bytes_per_column: 0,
        ..ColumnGeometry::default()
    };
    let mut output = vec![];

    let result = render_stream(io::Cursor::new(b"ABC"), &mut output, geometry);

    assert!(result.is_err());
    assert!(output.is_empty());
}
