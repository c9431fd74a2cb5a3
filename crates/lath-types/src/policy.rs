//! Size policies: how a box's size along one axis is derived.
//!
//! Each box carries exactly one policy per axis. Along-axis and cross-axis
//! behaviors are separate variants because growth and wrapping work
//! differently along versus across the layout direction: along-axis children
//! are placed sequentially (gaps apply, growers compete for leftover space),
//! cross-axis children overlap the same span.

/// How a box's size along one axis is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizePolicy {
    /// Fixed size regardless of children or parent.
    Absolute(f32),
    /// Expand to consume a share of the parent's leftover space along the
    /// layout axis. Siblings with this policy split the leftover evenly.
    Grow,
    /// Expand to fill the parent's full padded span on the cross axis.
    /// No sharing or competition with siblings.
    GrowAcrossAxis,
    /// Wrap children exactly, along the layout axis: padding plus child
    /// sizes plus inter-child gaps.
    Fit,
    /// Wrap the largest child plus padding, on the cross axis. No gap term.
    ShrinkAcrossAxis,
}

impl SizePolicy {
    /// The fixed size if this policy is [`Absolute`](SizePolicy::Absolute).
    pub fn absolute(&self) -> Option<f32> {
        match self {
            SizePolicy::Absolute(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns true if this box grows along the layout axis.
    pub fn is_grow(&self) -> bool {
        matches!(self, SizePolicy::Grow)
    }

    /// Returns true if this box grows on the cross axis.
    pub fn is_grow_across_axis(&self) -> bool {
        matches!(self, SizePolicy::GrowAcrossAxis)
    }

    /// Returns true if this box wraps its children along the layout axis.
    pub fn is_fit(&self) -> bool {
        matches!(self, SizePolicy::Fit)
    }

    /// Returns true if this box wraps its largest child on the cross axis.
    pub fn is_shrink_across_axis(&self) -> bool {
        matches!(self, SizePolicy::ShrinkAcrossAxis)
    }

    /// Returns true if this box's size depends on its children. A child of
    /// such a box cannot be [`Grow`](SizePolicy::Grow): the parent has no
    /// stable size until its children are sized, yet `Grow` needs the
    /// parent's already-resolved size.
    pub fn wraps_children(&self) -> bool {
        matches!(self, SizePolicy::Fit | SizePolicy::ShrinkAcrossAxis)
    }
}

impl Default for SizePolicy {
    /// New boxes are fixed at zero until a caller says otherwise.
    fn default() -> Self {
        SizePolicy::Absolute(0.0)
    }
}
