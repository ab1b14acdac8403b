//! Test buffer builder
//!
//! Writes a header and a body in the fixture's byte order. Body bytes are
//! appended in call order, after the `&data` line.

use crate::header::Endian;

pub struct Fixture {
    header: Vec<String>,
    data_line: String,
    body: Vec<u8>,
    endian: Endian,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            header: vec!["SDDS1".to_string()],
            data_line: "&data mode=binary, &end".to_string(),
            body: Vec::new(),
            endian: Endian::Little,
        }
    }

    pub fn big_endian(mut self) -> Self {
        self.header.push("!# big-endian".to_string());
        self.endian = Endian::Big;
        self
    }

    pub fn line(mut self, line: &str) -> Self {
        self.header.push(line.to_string());
        self
    }

    pub fn data_line(mut self, line: &str) -> Self {
        self.data_line = line.to_string();
        self
    }

    pub fn parameter(self, name: &str, type_name: &str) -> Self {
        self.line(&format!("&parameter name={}, type={}, &end", name, type_name))
    }

    pub fn array(self, name: &str, type_name: &str) -> Self {
        self.line(&format!("&array name={}, type={}, &end", name, type_name))
    }

    pub fn column(self, name: &str, type_name: &str) -> Self {
        self.line(&format!("&column name={}, type={}, &end", name, type_name))
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    fn put<const N: usize>(self, le: [u8; N], be: [u8; N]) -> Self {
        match self.endian {
            Endian::Little => self.bytes(&le),
            Endian::Big => self.bytes(&be),
        }
    }

    /// Row count
    pub fn rows(self, count: i32) -> Self {
        self.i32(count)
    }

    pub fn string(self, s: &str) -> Self {
        let length = i32::try_from(s.len()).unwrap();
        self.i32(length).bytes(s.as_bytes())
    }

    pub fn i8(self, v: i8) -> Self {
        self.put(v.to_le_bytes(), v.to_be_bytes())
    }

    pub fn u8(self, v: u8) -> Self {
        self.put([v], [v])
    }

    pub fn i16(self, v: i16) -> Self {
        self.put(v.to_le_bytes(), v.to_be_bytes())
    }

    pub fn u16(self, v: u16) -> Self {
        self.put(v.to_le_bytes(), v.to_be_bytes())
    }

    pub fn i32(self, v: i32) -> Self {
        self.put(v.to_le_bytes(), v.to_be_bytes())
    }

    pub fn i64(self, v: i64) -> Self {
        self.put(v.to_le_bytes(), v.to_be_bytes())
    }

    pub fn u64(self, v: u64) -> Self {
        self.put(v.to_le_bytes(), v.to_be_bytes())
    }

    pub fn f32(self, v: f32) -> Self {
        self.put(v.to_le_bytes(), v.to_be_bytes())
    }

    pub fn f64(self, v: f64) -> Self {
        self.put(v.to_le_bytes(), v.to_be_bytes())
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();
        for line in &self.header {
            out.extend_from_slice(line.as_bytes());
            out.push(b'\n');
        }
        out.extend_from_slice(self.data_line.as_bytes());
        out.push(b'\n');
        out.extend_from_slice(&self.body);
        out
    }
}
