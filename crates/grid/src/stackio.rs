//! Binary container for grid stacks (`.grids` files).
//!
//! A stack file is a [`StackHeader`] followed by the layer-major cell data.
//! All header fields are stored in little endian. The payload is either the
//! raw little endian cell values or an LZ4 block stream of those bytes, as
//! indicated by the compression tag in the header.

use std::path::Path;

use bytemuck::{NoUninit, Pod, Zeroable};

use crate::{Error, GridDataType, GridNum, GridSize, GridStack, Result, fs};

const SIGNATURE: u32 = u32::from_le_bytes([b'G', b'R', b'D', b'S']);

/// File extension used for persisted grid stacks.
pub const FILE_EXTENSION: &str = "grids";

#[derive(Debug, Clone, Copy, PartialEq, Eq, NoUninit)]
#[repr(u8)]
pub enum CompressionAlgorithm {
    None = 0,
    Lz4Block = 1,
}

impl TryFrom<u8> for CompressionAlgorithm {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(CompressionAlgorithm::None),
            1 => Ok(CompressionAlgorithm::Lz4Block),
            _ => Err(Error::InvalidArgument(format!("Invalid compression algorithm: {value}"))),
        }
    }
}

/// Binary header of a stack file.
/// The data type and compression fields hold the raw tag bytes, use
/// [`GridDataType::try_from`] and [`CompressionAlgorithm::try_from`] to
/// interpret them.
#[derive(Clone, Copy, Zeroable, Pod)]
#[repr(C, packed)]
pub struct StackHeader {
    /// signature to recognize the file format (always ['G', 'R', 'D', 'S'])
    pub signature: u32,
    /// The version of the file format (currently 1)
    pub version: u16,
    /// The element type of the cell data represented by a [`GridDataType`] as u8
    pub data_type: u8,
    /// The compression algorithm used for the cell data
    pub compression: u8,
    /// The number of layers in the stack
    pub layers: u32,
    /// The number of rows per layer
    pub rows: u32,
    /// The number of columns per layer
    pub cols: u32,
    /// The size in bytes of the payload that follows the header
    pub data_size: u32,
}

impl StackHeader {
    pub fn new(data_type: GridDataType, compression: CompressionAlgorithm, layers: u32, size: GridSize, data_size: u32) -> Self {
        Self {
            signature: SIGNATURE,
            version: 1,
            data_type: data_type as u8,
            compression: compression as u8,
            layers,
            rows: size.rows as u32,
            cols: size.cols as u32,
            data_size,
        }
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header_size = std::mem::size_of::<StackHeader>();
        if data.len() < header_size {
            return Err(Error::InvalidArgument("Stack data is too short".into()));
        }

        let header: StackHeader = bytemuck::pod_read_unaligned(&data[..header_size]);
        if header.signature != SIGNATURE {
            return Err(Error::InvalidArgument("Invalid stack signature".into()));
        }

        if header.version != 1 {
            return Err(Error::InvalidArgument("Unsupported stack version".into()));
        }

        GridDataType::try_from(header.data_type)?;
        CompressionAlgorithm::try_from(header.compression)?;

        Ok(header)
    }
}

/// Encode the stack as a byte vector containing the [`StackHeader`] followed by the payload.
pub fn encode<T: GridNum>(stack: &GridStack<T>, compression: CompressionAlgorithm) -> Result<Vec<u8>> {
    let cell_bytes: &[u8] = bytemuck::cast_slice(stack.as_slice());
    let payload = match compression {
        CompressionAlgorithm::None => cell_bytes.to_vec(),
        CompressionAlgorithm::Lz4Block => lz4_flex::compress(cell_bytes),
    };

    let header = StackHeader::new(
        T::TYPE,
        compression,
        stack.layer_count() as u32,
        stack.size(),
        payload.len() as u32,
    );

    let mut data = Vec::with_capacity(std::mem::size_of::<StackHeader>() + payload.len());
    data.extend_from_slice(bytemuck::bytes_of(&header));
    data.extend_from_slice(&payload);

    Ok(data)
}

/// Decode a stack from the encoded byte representation.
/// The element type of the encoded data must match `T`.
pub fn decode<T: GridNum>(data: &[u8]) -> Result<GridStack<T>> {
    let header = StackHeader::from_bytes(data)?;
    let header_size = std::mem::size_of::<StackHeader>();
    if data.len() != header_size + header.data_size as usize {
        return Err(Error::InvalidArgument("Stack data size mismatch".into()));
    }

    let data_type = GridDataType::try_from(header.data_type)?;
    if data_type != T::TYPE {
        return Err(Error::InvalidArgument(format!(
            "Stack data type mismatch: expected {:?}, got {:?}",
            T::TYPE,
            data_type
        )));
    }

    let size = GridSize::with_rows_cols(header.rows as usize, header.cols as usize);
    let layers = header.layers as usize;
    let cell_byte_count = layers
        .checked_mul(size.rows)
        .and_then(|count| count.checked_mul(size.cols))
        .and_then(|count| count.checked_mul(std::mem::size_of::<T>()))
        .ok_or_else(|| Error::InvalidArgument("Stack dimensions overflow".into()))?;

    let payload = &data[header_size..];
    let cell_bytes = match CompressionAlgorithm::try_from(header.compression)? {
        CompressionAlgorithm::None => payload.to_vec(),
        CompressionAlgorithm::Lz4Block => lz4_flex::decompress(payload, cell_byte_count)
            .map_err(|err| Error::InvalidArgument(format!("Failed to decompress stack data: {err}")))?,
    };

    if cell_bytes.len() != cell_byte_count {
        return Err(Error::InvalidArgument(format!(
            "Decompressed stack data size mismatch: expected {}, got {}",
            cell_byte_count,
            cell_bytes.len()
        )));
    }

    GridStack::new(size, layers, bytemuck::pod_collect_to_vec(&cell_bytes))
}

/// Write the stack to disk, creating parent directories as needed.
pub fn write<T: GridNum>(path: &Path, stack: &GridStack<T>, compression: CompressionAlgorithm) -> Result {
    fs::create_directory_for_file(path)?;
    std::fs::write(path, encode(stack, compression)?)?;
    Ok(())
}

/// Read a stack from disk.
pub fn read<T: GridNum>(path: &Path) -> Result<GridStack<T>> {
    if !path.exists() {
        return Err(Error::InvalidPath(path.into()));
    }

    decode(&std::fs::read(path)?)
}
