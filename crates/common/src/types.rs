use serde::{Deserialize, Serialize};

/// Identifier of a student record as assigned by the backend.
///
/// Wraps the integer key so it cannot be confused with other numeric
/// values (row positions, counts) flowing through the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Creates an identifier from its raw integer value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StudentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<StudentId> for i64 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

/// One row of student data as returned by `GET /students`.
///
/// The backend uses Indonesian field names on the wire; the English names
/// are accepted on input as well. `null` and a missing key both deserialize
/// to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,

    #[serde(rename = "kode_siswa", alias = "code")]
    pub code: String,

    #[serde(rename = "nama_siswa", alias = "name")]
    pub name: String,

    #[serde(rename = "alamat_siswa", alias = "address", default)]
    pub address: Option<String>,

    /// Opaque text, never parsed.
    #[serde(rename = "tgl_siswa", alias = "birthDate", default)]
    pub birth_date: Option<String>,

    #[serde(rename = "jurusan_siswa", alias = "major", default)]
    pub major: Option<String>,
}

impl StudentRecord {
    /// Creates a record with only the required fields set.
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StudentId::new(id),
            code: code.into(),
            name: name.into(),
            address: None,
            birth_date: None,
            major: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }
}
