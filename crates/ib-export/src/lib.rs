/// Raw `.dat` serialization for img2board outputs.

pub mod writer;

pub use writer::{
    BOARD_FILE_NAME, OutputPaths, PLACEMAP_FILE_NAME, placement_mask, write_board, write_outputs,
    write_placemap,
};
