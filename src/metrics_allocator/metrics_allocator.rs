//! See [super] for docs.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    fmt::{Display, Formatter},
    sync::atomic::{AtomicUsize, Ordering::Relaxed},
};
use crate::utils::measurements::presentable_measurements::bytes_measurement;


/// Counts every heap operation done through it, delegating the real work to [System].\
/// Memory usage water marks (min & max) are kept since the last [MetricsAllocator::save_point()] call.
/// Only a single save point is meaningful at a time: taking a new one resets the water marks.
pub struct MetricsAllocator {
    allocations_count:   AtomicUsize,
    deallocations_count: AtomicUsize,
    reallocations_count: AtomicUsize,
    allocated_bytes:     AtomicUsize,
    deallocated_bytes:   AtomicUsize,
    current_used_memory: AtomicUsize,
    max_used_memory:     AtomicUsize,
    min_used_memory:     AtomicUsize,
}

/// Snapshot of the counters kept by [MetricsAllocator]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllocatorMetrics {
    pub allocations_count:   usize,
    pub deallocations_count: usize,
    pub reallocations_count: usize,
    pub allocated_bytes:     usize,
    pub deallocated_bytes:   usize,
    /// heap memory in use at the time the snapshot was taken
    pub current_used_memory: usize,
    /// maximum heap memory in use since the last save point
    pub max_used_memory:     usize,
    /// minimum heap memory in use since the last save point
    pub min_used_memory:     usize,
}

/// Returned by [MetricsAllocator::save_point()] and consumed by [MetricsAllocator::delta_statistics()]
#[derive(Debug, Clone, Copy)]
pub struct AllocatorSavePoint {
    pub metrics: AllocatorMetrics,
}

impl MetricsAllocator {

    pub const fn new() -> Self {
        Self {
            allocations_count:   AtomicUsize::new(0),
            deallocations_count: AtomicUsize::new(0),
            reallocations_count: AtomicUsize::new(0),
            allocated_bytes:     AtomicUsize::new(0),
            deallocated_bytes:   AtomicUsize::new(0),
            current_used_memory: AtomicUsize::new(0),
            max_used_memory:     AtomicUsize::new(0),
            min_used_memory:     AtomicUsize::new(0),
        }
    }

    /// Current values of all counters
    pub fn metrics(&self) -> AllocatorMetrics {
        AllocatorMetrics {
            allocations_count:   self.allocations_count.load(Relaxed),
            deallocations_count: self.deallocations_count.load(Relaxed),
            reallocations_count: self.reallocations_count.load(Relaxed),
            allocated_bytes:     self.allocated_bytes.load(Relaxed),
            deallocated_bytes:   self.deallocated_bytes.load(Relaxed),
            current_used_memory: self.current_used_memory.load(Relaxed),
            max_used_memory:     self.max_used_memory.load(Relaxed),
            min_used_memory:     self.min_used_memory.load(Relaxed),
        }
    }

    /// Marks the start of a measurement: the current counters are returned and the
    /// min & max water marks start over from the memory currently in use
    pub fn save_point(&self) -> AllocatorSavePoint {
        let current_used_memory = self.current_used_memory.load(Relaxed);
        self.max_used_memory.store(current_used_memory, Relaxed);
        self.min_used_memory.store(current_used_memory, Relaxed);
        AllocatorSavePoint {
            metrics: self.metrics(),
        }
    }

    /// Counters accumulated since `save_point` was taken.
    /// `current_used_memory`, `max_used_memory` & `min_used_memory` are absolute values
    pub fn delta_statistics(&self, save_point: &AllocatorSavePoint) -> AllocatorMetrics {
        let now = self.metrics();
        let before = &save_point.metrics;
        AllocatorMetrics {
            allocations_count:   now.allocations_count.wrapping_sub(before.allocations_count),
            deallocations_count: now.deallocations_count.wrapping_sub(before.deallocations_count),
            reallocations_count: now.reallocations_count.wrapping_sub(before.reallocations_count),
            allocated_bytes:     now.allocated_bytes.wrapping_sub(before.allocated_bytes),
            deallocated_bytes:   now.deallocated_bytes.wrapping_sub(before.deallocated_bytes),
            current_used_memory: now.current_used_memory,
            max_used_memory:     now.max_used_memory,
            min_used_memory:     now.min_used_memory,
        }
    }

    fn on_allocate(&self, size: usize) {
        self.allocated_bytes.fetch_add(size, Relaxed);
        let used = self.current_used_memory.fetch_add(size, Relaxed).wrapping_add(size);
        self.max_used_memory.fetch_max(used, Relaxed);
    }

    fn on_deallocate(&self, size: usize) {
        self.deallocated_bytes.fetch_add(size, Relaxed);
        let used = self.current_used_memory.fetch_sub(size, Relaxed).wrapping_sub(size);
        self.min_used_memory.fetch_min(used, Relaxed);
    }
}

impl Default for MetricsAllocator {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for MetricsAllocator {

    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            self.allocations_count.fetch_add(1, Relaxed);
            self.on_allocate(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        self.deallocations_count.fetch_add(1, Relaxed);
        self.on_deallocate(layout.size());
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.allocations_count.fetch_add(1, Relaxed);
            self.on_allocate(layout.size());
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            self.reallocations_count.fetch_add(1, Relaxed);
            let old_size = layout.size();
            if new_size > old_size {
                self.on_allocate(new_size - old_size);
            } else {
                self.on_deallocate(old_size - new_size);
            }
        }
        new_ptr
    }
}

impl Display for AllocatorMetrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{allocations: {}, deallocations: {}, reallocations: {}, allocated: {}, deallocated: {}, in use: {} (min: {}, max: {})}}",
               self.allocations_count, self.deallocations_count, self.reallocations_count,
               bytes_measurement(self.allocated_bytes as f64),
               bytes_measurement(self.deallocated_bytes as f64),
               bytes_measurement(self.current_used_memory as f64),
               bytes_measurement(self.min_used_memory as f64),
               bytes_measurement(self.max_used_memory as f64))
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [metrics_allocator](super) module

    use super::*;
    use crate::features::ALLOC;
    use serial_test::serial;

    #[cfg(not(feature = "no_allocator_metrics"))]
    #[test]
    #[serial]
    fn counts_vec_allocation() {
        let save_point = ALLOC.save_point();
        let vec = Vec::<u64>::with_capacity(1024);
        let metrics = ALLOC.delta_statistics(&save_point);
        assert!(metrics.allocations_count >= 1, "the Vec allocation wasn't counted: {metrics}");
        assert!(metrics.allocated_bytes >= 1024 * 8, "expected at least 8KiB to be allocated: {metrics}");
        drop(vec);
        let metrics = ALLOC.delta_statistics(&save_point);
        assert!(metrics.deallocations_count >= 1, "the Vec deallocation wasn't counted: {metrics}");
    }

    /// the allocator must work (and count) when used directly, not as the global allocator
    #[test]
    fn standalone_allocator() {
        let allocator = MetricsAllocator::new();
        let save_point = allocator.save_point();
        let layout = Layout::from_size_align(4096, 8).expect("valid layout");
        unsafe {
            let ptr = allocator.alloc(layout);
            assert!(!ptr.is_null());
            let ptr = allocator.realloc(ptr, layout, 8192);
            assert!(!ptr.is_null());
            allocator.dealloc(ptr, Layout::from_size_align(8192, 8).expect("valid layout"));
        }
        let metrics = allocator.delta_statistics(&save_point);
        assert_eq!(metrics.allocations_count,   1);
        assert_eq!(metrics.reallocations_count, 1);
        assert_eq!(metrics.deallocations_count, 1);
        assert_eq!(metrics.allocated_bytes,     8192);
        assert_eq!(metrics.deallocated_bytes,   8192);
        assert_eq!(metrics.current_used_memory, 0);
        assert_eq!(metrics.max_used_memory,     8192);
        assert_eq!(metrics.min_used_memory,     0);
    }
}
