//! BitReader: reads a packed bitstream back one bit at a time.
//!
//! NOTE: The reader cannot tell payload from padding. The caller decides how many bits to take.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits MSB-first from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.cursor >= self.buffer.len() {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Number of bits not yet read, padding included.
    pub fn bits_remaining(&self) -> usize {
        (self.buffer.len() - self.cursor) * 8 - self.bit_index
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
