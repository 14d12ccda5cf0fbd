pub mod extract;
pub mod index;
pub mod objects;

pub use extract::{unpack_tarball, DebExtractor, DpkgDeb};
pub use index::{find_links, first_link};
pub use objects::find_object_files;
