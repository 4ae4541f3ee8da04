mod common;
mod gap_analysis;
mod segmentation;
