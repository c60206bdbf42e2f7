pub mod files;
pub mod import;
pub mod metadata;
pub mod parser;
pub mod serializer;

pub use files::{
    atomic_write, board_file, ensure_lanes_dir, get_lanes_dir, init_local_lanes, meta_file,
    read_file,
};
pub use import::{import_file, import_rows, ImportSummary};
pub use metadata::{load_metadata, save_metadata, BoardMetadata};
pub use parser::parse_board;
pub use serializer::serialize_board;
