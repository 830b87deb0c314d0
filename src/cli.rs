use clap::{crate_description, crate_name, crate_version, Arg, ColorChoice, Command};

use const_format::formatcp;

pub const DEFAULT_BYTES_PER_COLUMN: usize = 5;
pub const DEFAULT_COLUMN_COUNT: usize = 4;
pub const DEFAULT_COLUMN_SPACING: usize = 2;
pub const DEFAULT_BYTE_SPACING: usize = 1;

pub fn build_cli() -> Command {
    Command::new(crate_name!())
        .color(ColorChoice::Auto)
        .max_term_width(90)
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("FILE")
                .help("The file to display. If no FILE argument is given, read from STDIN."),
        )
        .arg(
            Arg::new("bytes_per_column")
                .short('s')
                .long("bytes-per-column")
                .num_args(1)
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value(formatcp!("{}", DEFAULT_BYTES_PER_COLUMN))
                .help("Group N bytes into each column. Must be greater than zero."),
        )
        .arg(
            Arg::new("column_count")
                .short('c')
                .long("columns")
                .num_args(1)
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value(formatcp!("{}", DEFAULT_COLUMN_COUNT))
                .help("Display N columns per line. Must be greater than zero."),
        )
        .arg(
            Arg::new("column_spacing")
                .long("column-spacing")
                .num_args(1)
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value(formatcp!("{}", DEFAULT_COLUMN_SPACING))
                .help(
                    "Put N spaces between columns, and between the offset field, \
                     the hex panel, and the character panel.",
                ),
        )
        .arg(
            Arg::new("byte_spacing")
                .long("byte-spacing")
                .num_args(1)
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value(formatcp!("{}", DEFAULT_BYTE_SPACING))
                .help("Put N spaces between adjacent byte pairs within a column."),
        )
}
