pub mod common;
pub mod counting_sort;
pub mod dual_pivot_quick_sort;
pub mod float_order;
pub mod hybrid;
pub mod insertion_sort;
pub mod natural_merge_sort;
