//! Vertex attribute layout description
//!
//! Pure CPU-side bookkeeping: an ordered list of attribute descriptors with
//! accumulated byte offsets and total stride. Push order must match the
//! vertex struct's in-memory layout.

/// Component type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    /// 32-bit float
    Float,
    /// 32-bit unsigned integer
    UnsignedInt,
    /// 8-bit unsigned integer, normalized to [0, 1] in the shader
    UnsignedByte,
}

impl AttributeType {
    /// Size of one component in bytes
    #[must_use]
    pub const fn size(self) -> u32 {
        match self {
            Self::Float | Self::UnsignedInt => 4,
            Self::UnsignedByte => 1,
        }
    }

    /// Corresponding GL type enum
    pub(crate) const fn gl_type(self) -> u32 {
        match self {
            Self::Float => glow::FLOAT,
            Self::UnsignedInt => glow::UNSIGNED_INT,
            Self::UnsignedByte => glow::UNSIGNED_BYTE,
        }
    }

    /// Whether fixed-point data of this type is normalized when fetched
    #[must_use]
    pub const fn normalized(self) -> bool {
        matches!(self, Self::UnsignedByte)
    }
}

/// One attribute descriptor within a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Component type
    pub ty: AttributeType,
    /// Number of components (1-4)
    pub count: u32,
    /// Whether the attribute is normalized on fetch
    pub normalized: bool,
    /// Byte offset from the start of the vertex
    pub offset: u32,
}

/// Ordered sequence of vertex attributes with accumulated stride
///
/// Starts empty; each push appends one descriptor and grows the stride.
/// There is no removal, and the layout is taken by shared reference once
/// handed to a [`crate::render::VertexArray`].
#[derive(Debug, Clone, Default)]
pub struct VertexBufferLayout {
    attributes: Vec<VertexAttribute>,
    stride: u32,
}

impl VertexBufferLayout {
    /// Create an empty layout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute of `count` components of type `ty`
    pub fn push(&mut self, ty: AttributeType, count: u32) -> &mut Self {
        self.attributes.push(VertexAttribute {
            ty,
            count,
            normalized: ty.normalized(),
            offset: self.stride,
        });
        self.stride += count * ty.size();
        self
    }

    /// Append `count` float components
    pub fn push_f32(&mut self, count: u32) -> &mut Self {
        self.push(AttributeType::Float, count)
    }

    /// The attribute descriptors in push order
    #[must_use]
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Total vertex size in bytes
    #[must_use]
    pub fn stride(&self) -> u32 {
        self.stride
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout_has_zero_stride() {
        let layout = VertexBufferLayout::new();
        assert!(layout.attributes().is_empty());
        assert_eq!(layout.stride(), 0);
    }

    #[test]
    fn stride_is_sum_of_pushed_sizes() {
        let mut layout = VertexBufferLayout::new();
        layout.push_f32(2).push_f32(2);
        assert_eq!(layout.stride(), 4 * std::mem::size_of::<f32>() as u32);

        layout.push(AttributeType::UnsignedByte, 4);
        assert_eq!(layout.stride(), 16 + 4);
    }

    #[test]
    fn offsets_accumulate_in_push_order() {
        let mut layout = VertexBufferLayout::new();
        layout
            .push_f32(3)
            .push(AttributeType::UnsignedByte, 4)
            .push_f32(2);

        let attrs = layout.attributes();
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(attrs[1].offset, 12);
        assert_eq!(attrs[2].offset, 16);
        assert_eq!(layout.stride(), 24);
    }

    #[test]
    fn push_order_is_significant() {
        let mut a = VertexBufferLayout::new();
        a.push_f32(2).push(AttributeType::UnsignedByte, 4);

        let mut b = VertexBufferLayout::new();
        b.push(AttributeType::UnsignedByte, 4).push_f32(2);

        assert_eq!(a.stride(), b.stride());
        assert_ne!(a.attributes()[0], b.attributes()[0]);
        assert_eq!(b.attributes()[1].offset, 4);
    }

    #[test]
    fn byte_attributes_are_normalized() {
        let mut layout = VertexBufferLayout::new();
        layout.push(AttributeType::UnsignedByte, 4).push_f32(1);
        assert!(layout.attributes()[0].normalized);
        assert!(!layout.attributes()[1].normalized);
    }
}
