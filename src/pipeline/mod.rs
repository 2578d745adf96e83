pub mod batch;
pub mod smrt;

pub use batch::{download_and_convert, run_batch, scan_outputs, BatchSummary};
pub use smrt::{convert_downloaded, convert_workbook, run_smrt};
