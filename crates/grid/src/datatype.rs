use bytemuck::NoUninit;

use crate::{Error, Result};

/// The element type of a persisted grid stack, stored as a single byte in the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, NoUninit)]
#[repr(u8)]
pub enum GridDataType {
    Int8 = 0,
    Uint8 = 1,
    Int16 = 2,
    Uint16 = 3,
    Int32 = 4,
    Uint32 = 5,
    Int64 = 6,
    Uint64 = 7,
    Float32 = 8,
    Float64 = 9,
}

impl GridDataType {
    pub const fn size_in_bytes(self) -> usize {
        match self {
            GridDataType::Int8 | GridDataType::Uint8 => 1,
            GridDataType::Int16 | GridDataType::Uint16 => 2,
            GridDataType::Int32 | GridDataType::Uint32 | GridDataType::Float32 => 4,
            GridDataType::Int64 | GridDataType::Uint64 | GridDataType::Float64 => 8,
        }
    }
}

impl TryFrom<u8> for GridDataType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(GridDataType::Int8),
            1 => Ok(GridDataType::Uint8),
            2 => Ok(GridDataType::Int16),
            3 => Ok(GridDataType::Uint16),
            4 => Ok(GridDataType::Int32),
            5 => Ok(GridDataType::Uint32),
            6 => Ok(GridDataType::Int64),
            7 => Ok(GridDataType::Uint64),
            8 => Ok(GridDataType::Float32),
            9 => Ok(GridDataType::Float64),
            _ => Err(Error::InvalidArgument(format!("Invalid grid data type: {value}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_round_trip() -> Result {
        for tag in 0..=9_u8 {
            let data_type = GridDataType::try_from(tag)?;
            assert_eq!(data_type as u8, tag);
        }

        assert!(GridDataType::try_from(10).is_err());
        Ok(())
    }

    #[test]
    fn type_sizes() {
        assert_eq!(GridDataType::Uint8.size_in_bytes(), 1);
        assert_eq!(GridDataType::Float32.size_in_bytes(), 4);
        assert_eq!(GridDataType::Float64.size_in_bytes(), 8);
    }
}
