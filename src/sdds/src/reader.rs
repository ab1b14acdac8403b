//! Bounds-checked byte cursor for the binary body
//!
//! Every read checks the remaining length first and fails with
//! `UnexpectedEndOfInput` instead of reading past the buffer.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::field::Type;
use crate::header::Endian;
use crate::value::Value;
use crate::{Error, Result};

/// Forward-only reader over an immutable buffer
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    endian: Endian,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8], pos: usize, endian: Endian) -> Self {
        Self { data, pos, endian }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Skip spaces, tabs, CR and LF between header and body
    pub fn skip_padding(&mut self) {
        while self.pos < self.data.len() && matches!(self.data[self.pos], b' ' | b'\t' | b'\r' | b'\n') {
            self.pos += 1;
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    #[inline]
    fn read_with<T>(&mut self, width: usize, le: fn(&[u8]) -> T, be: fn(&[u8]) -> T) -> Result<T> {
        let bytes = self.take(width)?;
        Ok(match self.endian {
            Endian::Little => le(bytes),
            Endian::Big => be(bytes),
        })
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_with(4, LittleEndian::read_i32, BigEndian::read_i32)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    /// Read a length-prefixed string, decoding invalid UTF-8 lossily
    pub fn read_string(&mut self) -> Result<String> {
        let offset = self.pos;
        let length = self.read_i32()?;
        let length = usize::try_from(length).map_err(|_| Error::InvalidStringLength { length, offset })?;
        let bytes = self.take(length)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Read one value of the given type
    pub fn read_value(&mut self, field_type: Type) -> Result<Value> {
        Ok(match field_type {
            Type::Float64 => Value::Float64(self.read_with(8, LittleEndian::read_f64, BigEndian::read_f64)?),
            Type::Float32 => Value::Float32(self.read_with(4, LittleEndian::read_f32, BigEndian::read_f32)?),
            Type::Int32 => Value::Int32(self.read_i32()?),
            Type::Int16 => Value::Int16(self.read_with(2, LittleEndian::read_i16, BigEndian::read_i16)?),
            Type::Int8 => Value::Int8(self.read_i8()?),
            Type::UInt8 => Value::UInt8(self.take(1)?[0]),
            Type::UInt32 => Value::UInt32(self.read_with(4, LittleEndian::read_u32, BigEndian::read_u32)?),
            Type::UInt16 => Value::UInt16(self.read_with(2, LittleEndian::read_u16, BigEndian::read_u16)?),
            Type::Int64 => Value::Int64(self.read_with(8, LittleEndian::read_i64, BigEndian::read_i64)?),
            Type::UInt64 => Value::UInt64(self.read_with(8, LittleEndian::read_u64, BigEndian::read_u64)?),
            Type::String => Value::String(self.read_string()?),
        })
    }

    /// Read `count` consecutive values
    ///
    /// Fixed-width values are bounds-checked as one block before reading.
    pub fn read_values(&mut self, field_type: Type, count: usize) -> Result<Vec<Value>> {
        if let Some(width) = field_type.width() {
            self.ensure(self.block_len(width, count)?)?;
        }

        // Each value takes at least one byte, so the remaining length bounds the allocation
        let mut values = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            values.push(self.read_value(field_type)?);
        }
        Ok(values)
    }

    /// Advance past `count` consecutive values without materializing them
    ///
    /// Fixed-width values are skipped as one bounds-checked block.
    pub fn skip_values(&mut self, field_type: Type, count: usize) -> Result<()> {
        match field_type.width() {
            Some(width) => {
                let total = self.block_len(width, count)?;
                self.skip(total)
            }
            None => {
                for _ in 0..count {
                    self.read_string()?;
                }
                Ok(())
            }
        }
    }

    fn block_len(&self, width: usize, count: usize) -> Result<usize> {
        width.checked_mul(count).ok_or(Error::UnexpectedEndOfInput {
            offset: self.pos,
            needed: usize::MAX,
            available: self.remaining(),
        })
    }

    fn ensure(&self, n: usize) -> Result<()> {
        let available = self.remaining();
        if n > available {
            return Err(Error::UnexpectedEndOfInput {
                offset: self.pos,
                needed: n,
                available,
            });
        }
        Ok(())
    }
}
