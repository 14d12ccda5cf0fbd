mod result;
mod writer;

pub use result::{Flag, ResultRecord};
pub use writer::{write_results, RESULTS_FILE};
