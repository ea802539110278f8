//! Per-frame ring of uniform buffers.
//!
//! Each push within a frame gets its own backing buffer and bind group, so
//! several views drawn in one frame never overwrite each other's constants.
//! [`UniformRing::begin_frame`] recycles every slot. Slots grow on demand
//! and are never freed (GPU buffers cannot be resized in place).

use std::marker::PhantomData;

/// Handle to one pushed uniform value within the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformSlot(usize);

impl UniformSlot {
    /// Position of the slot within the frame.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Slot bookkeeping, separate from the GPU objects.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlotCursor {
    next: usize,
    allocated: usize,
}

impl SlotCursor {
    /// Start a new frame; every allocated slot becomes free again.
    pub fn begin_frame(&mut self) {
        self.next = 0;
    }

    /// Take the next slot. The flag is `true` when the slot has never been
    /// allocated and the caller must create its backing storage.
    pub fn acquire(&mut self) -> (UniformSlot, bool) {
        let index = self.next;
        self.next += 1;
        let fresh = index == self.allocated;
        if fresh {
            self.allocated += 1;
        }
        (UniformSlot(index), fresh)
    }

    /// Slots handed out this frame.
    #[must_use]
    pub const fn in_use(&self) -> usize {
        self.next
    }

    /// Slots ever allocated.
    #[must_use]
    pub const fn allocated(&self) -> usize {
        self.allocated
    }

    /// Whether `slot` was handed out during the current frame.
    #[must_use]
    pub const fn is_live(&self, slot: UniformSlot) -> bool {
        slot.0 < self.next
    }
}

struct RingEntry {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Uniform buffers of type `T` bound alone at `binding` in a one-slot
/// bind-group layout.
pub struct UniformRing<T> {
    label: String,
    binding: u32,
    entries: Vec<RingEntry>,
    cursor: SlotCursor,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> UniformRing<T> {
    /// Empty ring; buffers are created on first push.
    #[must_use]
    pub fn new(label: &str, binding: u32) -> Self {
        Self {
            label: label.to_owned(),
            binding,
            entries: Vec::new(),
            cursor: SlotCursor::default(),
            _marker: PhantomData,
        }
    }

    /// Recycle every slot for a new frame.
    pub fn begin_frame(&mut self) {
        self.cursor.begin_frame();
    }

    /// Upload `value` into a slot not used yet this frame.
    pub fn push(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        value: &T,
    ) -> UniformSlot {
        let (slot, fresh) = self.cursor.acquire();
        if fresh {
            self.entries.push(self.create_entry(device, layout, slot));
            log::debug!(
                "{}: grew to {} uniform buffers",
                self.label,
                self.entries.len()
            );
        }
        let entry = &self.entries[slot.index()];
        queue.write_buffer(&entry.buffer, 0, bytemuck::bytes_of(value));
        slot
    }

    /// Bind group for a slot pushed this frame.
    #[must_use]
    pub fn bind_group(&self, slot: UniformSlot) -> Option<&wgpu::BindGroup> {
        if !self.cursor.is_live(slot) {
            return None;
        }
        self.entries.get(slot.index()).map(|e| &e.bind_group)
    }

    /// Slots pushed this frame.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cursor.in_use()
    }

    /// No slot pushed this frame.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor.in_use() == 0
    }

    /// Backing buffers allocated so far.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.cursor.allocated()
    }

    fn create_entry(
        &self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        slot: UniformSlot,
    ) -> RingEntry {
        let label = format!("{} #{}", self.label, slot.index());
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&label),
            size: size_of::<T>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: self.binding,
                resource: buffer.as_entire_binding(),
            }],
        });
        RingEntry { buffer, bind_group }
    }
}
