use log::error;

use super::parse_bit;
use crate::error::Result;

/// Packs bits MSB-first into a byte buffer.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified (in bytes). Call
    /// flush() to move the final partial byte into the buffer.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all push functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn push_bit(&mut self, bit: bool) {
        self.queue = (self.queue << 1) | bit as u64;
        self.q_bits += 1;
        self.bit_count += 1;
        self.write_stream();
    }

    /// Puts a code written as a string of '0' and '1' on the stream, first character first.
    /// Fails without writing anything if the string holds any other character.
    pub fn push_code(&mut self, code: &str) -> Result<()> {
        let bits = code
            .chars()
            .enumerate()
            .map(|(i, ch)| parse_bit(ch, i))
            .collect::<Result<Vec<bool>>>()?;
        bits.into_iter().for_each(|bit| self.push_bit(bit));
        Ok(())
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Total number of payload bits pushed so far (padding excluded).
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Flush and hand back the packed bytes with the payload bit count.
    pub fn finish(mut self) -> (Vec<u8>, usize) {
        self.flush();
        (self.output, self.bit_count)
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn push_code_test() {
        let mut bp = BitPacker::new(100);
        bp.push_code("0010").unwrap();
        bp.push_code("0001").unwrap();
        bp.flush();
        assert_eq!(bp.output, "!".as_bytes());
        assert_eq!(bp.bit_count(), 8);
    }

    #[test]
    fn padding_and_loc_test() {
        let mut bp = BitPacker::new(100);
        bp.push_code("101").unwrap();
        bp.push_code("11").unwrap();
        assert_eq!("[0.5]", &bp.loc());
        bp.flush();
        assert_eq!(bp.output, vec![0b1011_1000]);
        assert_eq!("[1.0]", &bp.loc());
    }

    #[test]
    fn finish_test() {
        let mut bp = BitPacker::new(4);
        bp.push_code("1111111111").unwrap();
        let (bytes, bits) = bp.finish();
        assert_eq!(bytes, vec![0xff, 0b1100_0000]);
        assert_eq!(bits, 10);
    }

    #[test]
    fn bad_code_test() {
        let mut bp = BitPacker::new(4);
        assert!(bp.push_code("10x").is_err());
        assert_eq!(bp.bit_count(), 0);
    }
}
