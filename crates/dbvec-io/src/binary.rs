//! Stream framing for binary vector records.
//!
//! Records are self-describing: the 8-byte header carries the
//! dimension, so vectors can be written and read back-to-back on a
//! stream without an outer length prefix.

use std::io::{Read, Write};

use dbvec_core::Vector;
use dbvec_types::{serialized_len, VectorError, HEADER_BYTES, VECTOR_MAX_DIM};
use tracing::debug;

use crate::error::CodecError;

/// Write one vector record to `writer`. Returns the bytes written.
pub fn write_vector<W: Write>(writer: &mut W, vector: &Vector) -> Result<usize, CodecError> {
    let bytes = vector.to_bytes();
    writer.write_all(&bytes)?;
    debug!(dim = vector.dim(), bytes = bytes.len(), "wrote vector record");
    Ok(bytes.len())
}

/// Read one vector record from `reader`.
///
/// The dimension is validated from the header before the payload
/// buffer is sized, so a corrupt header cannot trigger an oversized
/// allocation or read.
pub fn read_vector<R: Read>(reader: &mut R) -> Result<Vector, CodecError> {
    let mut record = vec![0u8; HEADER_BYTES];
    reader.read_exact(&mut record)?;

    let dim = u16::from_le_bytes([record[4], record[5]]) as usize;
    if dim < 1 || dim > VECTOR_MAX_DIM {
        return Err(VectorError::InvalidDimension { dim }.into());
    }

    record.resize(serialized_len(dim), 0);
    reader.read_exact(&mut record[HEADER_BYTES..])?;

    let vector = Vector::deserialize(&record)?;
    debug!(dim = vector.dim(), bytes = record.len(), "read vector record");
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::{Cursor, Seek, SeekFrom};

    #[test]
    fn test_stream_round_trip() {
        let v = Vector::from_slice(&[1.0, -2.5, 3.75]).unwrap();
        let mut buffer = Cursor::new(Vec::new());

        let written = write_vector(&mut buffer, &v).unwrap();
        assert_eq!(written, v.serialized_len());

        buffer.set_position(0);
        let decoded = read_vector(&mut buffer).unwrap();
        assert_eq!(decoded, v);
        assert_eq!(decoded.stored_length(), v.stored_length());
    }

    #[test]
    fn test_back_to_back_records() {
        let first = Vector::from_slice(&[1.0]).unwrap();
        let second = Vector::from_slice(&[2.0, 3.0]).unwrap();
        let mut buffer = Cursor::new(Vec::new());

        write_vector(&mut buffer, &first).unwrap();
        write_vector(&mut buffer, &second).unwrap();

        buffer.set_position(0);
        assert_eq!(read_vector(&mut buffer).unwrap(), first);
        assert_eq!(read_vector(&mut buffer).unwrap(), second);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.bin");
        let v = Vector::from_slice(&[0.125, 4096.0]).unwrap();

        let mut file = File::create(&path).unwrap();
        write_vector(&mut file, &v).unwrap();
        file.sync_all().unwrap();

        let mut file = File::open(&path).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        let decoded = read_vector(&mut file).unwrap();
        assert_eq!(decoded, v);
    }

    #[test]
    fn test_read_rejects_bad_header_dimension() {
        let mut header = [0u8; 8];
        header[4..6].copy_from_slice(&16_001u16.to_le_bytes());
        let mut cursor = Cursor::new(header.to_vec());

        let err = read_vector(&mut cursor).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Vector(VectorError::InvalidDimension { dim: 16_001 })
        ));
    }

    #[test]
    fn test_read_truncated_stream_is_io_error() {
        let v = Vector::from_slice(&[1.0, 2.0]).unwrap();
        let bytes = v.to_bytes();
        let mut cursor = Cursor::new(bytes[..bytes.len() - 2].to_vec());

        let err = read_vector(&mut cursor).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
