use std::fmt::Debug;

use crate::GridDataType;

/// Trait bounds for the numeric types that can be stored in a grid.
/// The `bytemuck` bounds allow the cell data to be reinterpreted as raw bytes
/// when grids are persisted to disk.
pub trait GridNum:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + num::Num
    + num::NumCast
    + num::Bounded
    + bytemuck::NoUninit
    + bytemuck::AnyBitPattern
    + 'static
{
    const TYPE: GridDataType;
}

macro_rules! impl_grid_num {
    ($t:ty, $data_type:expr) => {
        impl GridNum for $t {
            const TYPE: GridDataType = $data_type;
        }
    };
}

impl_grid_num!(i8, GridDataType::Int8);
impl_grid_num!(u8, GridDataType::Uint8);
impl_grid_num!(i16, GridDataType::Int16);
impl_grid_num!(u16, GridDataType::Uint16);
impl_grid_num!(i32, GridDataType::Int32);
impl_grid_num!(u32, GridDataType::Uint32);
impl_grid_num!(i64, GridDataType::Int64);
impl_grid_num!(u64, GridDataType::Uint64);
impl_grid_num!(f32, GridDataType::Float32);
impl_grid_num!(f64, GridDataType::Float64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_mapping() {
        assert_eq!(<u8 as GridNum>::TYPE, GridDataType::Uint8);
        assert_eq!(<f32 as GridNum>::TYPE, GridDataType::Float32);
        assert_eq!(<i64 as GridNum>::TYPE, GridDataType::Int64);
    }
}
