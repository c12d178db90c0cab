mod greedy;
mod merge;

pub use greedy::greedy_partition;
pub use merge::merge_partitions;
