pub(crate) mod input;
pub mod layout;

pub use input::*;
pub use layout::*;

use std::io::{self, Read, Write};

use thiserror::Error;

/// Failure that terminates a rendering run.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Printer<'a, Writer: Write> {
    writer: &'a mut Writer,
    geometry: ColumnGeometry,
    dimensions: LineDimensions,
    /// One rendered line, trailing newline included.
    line_buf: Vec<u8>,
    /// Running position of the first byte of the current block. Wraps at
    /// 4 GiB, like the eight-digit field it feeds.
    offset: u32,
    byte_hex_table: Vec<String>,
}

impl<'a, Writer: Write> Printer<'a, Writer> {
    /// Fails fast on degenerate geometry, before anything is written.
    pub fn new(
        writer: &'a mut Writer,
        geometry: ColumnGeometry,
    ) -> Result<Printer<'a, Writer>, ConfigurationError> {
        let dimensions = compute_dimensions(&geometry)?;
        let mut line_buf = vec![b' '; dimensions.total_line_width + 1];
        line_buf[dimensions.total_line_width] = b'\n';

        Ok(Printer {
            writer,
            geometry,
            dimensions,
            line_buf,
            offset: 0,
            byte_hex_table: (0u8..=u8::MAX).map(|b| format!("{:02X}", b)).collect(),
        })
    }

    /// Renders one block as one full-width line and writes it out.
    fn print_block(&mut self, block: &[u8]) -> io::Result<()> {
        let width = self.dimensions.total_line_width;
        self.line_buf[..width].fill(b' ');

        for (i, byte) in self.offset.to_be_bytes().iter().enumerate() {
            self.line_buf[2 * i..2 * i + 2]
                .copy_from_slice(self.byte_hex_table[*byte as usize].as_bytes());
        }

        let mut hex_cursor = self.dimensions.offset_field_width + self.geometry.column_spacing;
        let mut char_cursor = width - self.geometry.bytes_per_line();

        for (i, &byte) in block.iter().enumerate() {
            self.line_buf[hex_cursor..hex_cursor + 2]
                .copy_from_slice(self.byte_hex_table[byte as usize].as_bytes());
            hex_cursor += 2;
            hex_cursor += if (i + 1) % self.geometry.bytes_per_column == 0 {
                self.geometry.column_spacing
            } else {
                self.geometry.byte_spacing
            };

            self.line_buf[char_cursor] = if byte.is_ascii_graphic() { byte } else { b'.' };
            char_cursor += 1;
        }

        self.writer.write_all(&self.line_buf)?;
        self.offset = self.offset.wrapping_add(block.len() as u32);

        Ok(())
    }

    /// Loops through the given `Reader` one block at a time, printing until
    /// the input is exhausted. A short final block still produces a
    /// full-width line; empty input produces no output at all.
    pub fn print_all<Reader: Read>(&mut self, mut reader: Reader) -> Result<(), RenderError> {
        let mut block = vec![0u8; self.geometry.bytes_per_line()];

        loop {
            let n = read_block(&mut reader, &mut block)?;
            if n == 0 {
                break;
            }
            self.print_block(&block[..n])?;
        }

        self.writer.flush()?;

        Ok(())
    }
}

/// Fills `block` from `reader`, stopping short only at end of input. A pipe
/// may hand out less than a block per read; aggregating here keeps partial
/// lines from appearing mid-stream.
fn read_block<Reader: Read>(reader: &mut Reader, block: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Renders everything from `input` to `output`, one line per block.
pub fn render_stream<Reader: Read, Writer: Write>(
    input: Reader,
    output: &mut Writer,
    geometry: ColumnGeometry,
) -> Result<(), RenderError> {
    Printer::new(output, geometry)?.print_all(input)
}
